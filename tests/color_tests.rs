// Host-side tests for the loudness/band to scale/hue mapping.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod site {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod color {
        include!("../src/core/color.rs");
    }
}

use glam::Vec3;
use site::color::*;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

// Hue wraps at 1.0
fn hue_close(a: f32, b: f32) -> bool {
    let d = (a - b).abs();
    d.min(1.0 - d) < 1e-4
}

#[test]
fn scale_spans_one_to_two() {
    assert_eq!(scale_for_average(0.0), 1.0);
    assert_eq!(scale_for_average(255.0), 2.0);
    assert!(approx(scale_for_average(127.5), 1.5));
}

#[test]
fn target_moves_faster_than_current() {
    let mut c = ColorState::new(Vec3::ZERO);
    c.update([1.0, 1.0, 1.0]);
    assert!(approx(c.target.x, 0.05));
    assert!(approx(c.current.x, 0.0005));
    assert!(c.current.x < c.target.x);
}

#[test]
fn current_converges_towards_measured_bands() {
    let mut c = ColorState::new(Vec3::ZERO);
    for _ in 0..5000 {
        c.update([1.0, 0.0, 0.0]);
    }
    assert!(approx(c.current.x, 1.0));
    assert!(approx(c.current.y, 0.0));
    assert!(approx(c.hue(), 0.0));
}

#[test]
fn out_of_range_bands_are_clamped() {
    let mut c = ColorState::new(Vec3::ZERO);
    for _ in 0..5000 {
        c.update([7.0, -3.0, 0.5]);
    }
    assert!(c.current.max_element() <= 1.0 + 1e-6);
    assert!(c.current.min_element() >= -1e-6);
}

#[test]
fn silence_keeps_the_base_hue() {
    let mut c = ColorState::default();
    let h0 = c.hue();
    assert!(approx(h0, 0.5555));
    for _ in 0..2000 {
        c.update([0.0, 0.0, 0.0]);
        assert!(hue_close(c.hue(), h0));
    }
}

#[test]
fn achromatic_color_keeps_last_hue() {
    let mut c = ColorState::new(Vec3::new(0.0, 1.0, 0.0));
    let h = c.hue();
    assert!(approx(h, 1.0 / 3.0));
    c.current = Vec3::splat(0.5);
    assert_eq!(c.hue(), h);
}

#[test]
fn hue_of_primaries() {
    assert!(approx(rgb_to_hue(Vec3::new(1.0, 0.0, 0.0)).unwrap(), 0.0));
    assert!(approx(rgb_to_hue(Vec3::new(0.0, 1.0, 0.0)).unwrap(), 1.0 / 3.0));
    assert!(approx(rgb_to_hue(Vec3::new(0.0, 0.0, 1.0)).unwrap(), 2.0 / 3.0));
    assert!(approx(rgb_to_hue(Vec3::new(1.0, 0.0, 1.0)).unwrap(), 5.0 / 6.0));
    assert_eq!(rgb_to_hue(Vec3::splat(0.3)), None);
}

#[test]
fn hsl_round_trips_hue() {
    for i in 0..12 {
        let h = i as f32 / 12.0;
        let rgb = hsl_to_rgb(h, 0.4, 0.7);
        for ch in rgb {
            assert!((0.0..=1.0).contains(&ch));
        }
        let back = rgb_to_hue(Vec3::from_array(rgb)).unwrap();
        assert!(hue_close(back, h), "hue {h} came back as {back}");
    }
}

#[test]
fn hsl_pastel_lightness_and_gray() {
    let [r, g, b] = hsl_to_rgb(0.0, 0.4, 0.7);
    assert!(approx(r, 0.82));
    assert!(approx(g, 0.58));
    assert!(approx(b, 0.58));
    assert_eq!(hsl_to_rgb(0.25, 0.0, 0.6), [0.6, 0.6, 0.6]);
}

#[test]
fn hue_stays_below_one_for_near_red() {
    // Tiny negative green-blue difference rounds onto the wrap point
    for b in [1e-8f32, 1e-7, 1e-6] {
        let h = rgb_to_hue(Vec3::new(1.0, 0.0, b)).unwrap();
        assert!((0.0..1.0).contains(&h), "hue {h}");
    }
}

#[test]
fn srgb_decoding_darkens_midtones() {
    assert_eq!(srgb_to_linear(0.0), 0.0);
    assert!(approx(srgb_to_linear(1.0), 1.0));
    assert!(approx(srgb_to_linear(0.5), 0.2140));
    let mut prev = 0.0;
    for i in 1..20 {
        let c = i as f32 / 20.0;
        let lin = srgb_to_linear(c);
        assert!(lin > prev && lin <= c);
        prev = lin;
    }
}
