// Host-side tests for frequency snapshot reduction.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod site {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod features {
        include!("../src/core/features.rs");
    }
}

use site::features::*;

#[test]
fn silent_snapshot_is_all_zero() {
    let f = extract(&[0u8; 128]);
    assert_eq!(f, AudioFeatures::default());
}

#[test]
fn saturated_snapshot_clamps_bands_to_one() {
    let f = extract(&[255u8; 128]);
    assert_eq!(f.average, 255.0);
    assert_eq!(f.bands(), [1.0, 1.0, 1.0]);
}

#[test]
fn empty_snapshot_is_baseline() {
    assert_eq!(extract(&[]), AudioFeatures::default());
}

#[test]
fn remainder_bins_belong_to_high_band() {
    let [low, mid, high] = band_ranges(128);
    assert_eq!(low, 0..42);
    assert_eq!(mid, 42..84);
    assert_eq!(high, 84..128);
    assert_eq!(low.len() + mid.len() + high.len(), 128);

    // 5 bins: one each for low and mid, three for high
    let f = extract(&[0, 0, 0, 0, 255]);
    assert_eq!(f.low, 0.0);
    assert_eq!(f.mid, 0.0);
    assert!((f.high - 1.0 / 3.0).abs() < 1e-6);
    assert!((f.average - 51.0).abs() < 1e-6);
}

#[test]
fn bands_track_their_own_bins() {
    let mut snap = [0u8; 128];
    for v in snap[84..].iter_mut() {
        *v = 255;
    }
    let f = extract(&snap);
    assert_eq!(f.low, 0.0);
    assert_eq!(f.mid, 0.0);
    assert_eq!(f.high, 1.0);

    let mut snap = [0u8; 128];
    for v in snap[..42].iter_mut() {
        *v = 51;
    }
    let f = extract(&snap);
    assert!((f.low - 0.2).abs() < 1e-6);
    assert_eq!(f.mid, 0.0);
}

#[test]
fn tiny_snapshots_leave_empty_bands_at_zero() {
    let f = extract(&[255, 255]);
    // third == 0: low and mid are empty, both bins are high
    assert_eq!(f.low, 0.0);
    assert_eq!(f.mid, 0.0);
    assert_eq!(f.high, 1.0);
}

#[test]
fn normalizer_leaves_silence_alone() {
    let mut n = GainNormalizer::default();
    for _ in 0..10 {
        assert_eq!(n.apply(AudioFeatures::default()), AudioFeatures::default());
    }
}

#[test]
fn normalizer_boosts_quiet_bands_to_full_range() {
    let mut n = GainNormalizer::default();
    let quiet = AudioFeatures {
        average: 40.0,
        low: 0.5,
        mid: 0.25,
        high: 0.0,
    };
    let out = n.apply(quiet);
    assert_eq!(out.average, 40.0);
    assert_eq!(out.low, 1.0);
    assert_eq!(out.mid, 0.5);
    assert_eq!(out.high, 0.0);
}

#[test]
fn normalizer_boost_is_capped_and_output_bounded() {
    let mut n = GainNormalizer::default();
    let faint = AudioFeatures {
        average: 5.0,
        low: 0.1,
        mid: 0.1,
        high: 0.1,
    };
    let out = n.apply(faint);
    assert!((out.low - 0.4).abs() < 1e-5);

    let loud = AudioFeatures {
        average: 255.0,
        low: 1.0,
        mid: 1.0,
        high: 1.0,
    };
    for _ in 0..50 {
        let out = n.apply(loud);
        for b in out.bands() {
            assert!((0.0..=1.0).contains(&b));
        }
    }
}

#[test]
fn normalizer_peak_decays() {
    let mut n = GainNormalizer::default();
    n.apply(AudioFeatures {
        average: 255.0,
        low: 1.0,
        mid: 0.0,
        high: 0.0,
    });
    let p0 = n.peak();
    n.apply(AudioFeatures::default());
    assert!(n.peak() < p0);
}
