use super::constants::{BYTE_MAX, GAIN_MAX_BOOST, GAIN_PEAK_DECAY, GAIN_PEAK_FLOOR};

/// Per-frame reduction of an analyser byte snapshot.
///
/// - `average`: mean magnitude over all bins, in byte units `0..=255`
/// - `low`/`mid`/`high`: normalized band energies in `[0, 1]`
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AudioFeatures {
    pub average: f32,
    pub low: f32,
    pub mid: f32,
    pub high: f32,
}

impl AudioFeatures {
    #[inline]
    pub fn bands(&self) -> [f32; 3] {
        [self.low, self.mid, self.high]
    }
}

/// Bin ranges `[low, mid, high]` for a snapshot of `n` bins.
///
/// Bands are `n / 3` bins wide; the `n % 3` leftover bins at the top of the
/// spectrum belong to the high band so every bin is counted exactly once.
#[inline]
pub fn band_ranges(n: usize) -> [std::ops::Range<usize>; 3] {
    let third = n / 3;
    [0..third, third..2 * third, 2 * third..n]
}

fn band_energy(bins: &[u8]) -> f32 {
    if bins.is_empty() {
        return 0.0;
    }
    let sum: u32 = bins.iter().map(|&v| v as u32).sum();
    (sum as f32 / bins.len() as f32 / BYTE_MAX).clamp(0.0, 1.0)
}

pub fn extract(snapshot: &[u8]) -> AudioFeatures {
    let n = snapshot.len();
    if n == 0 {
        return AudioFeatures::default();
    }
    let sum: u32 = snapshot.iter().map(|&v| v as u32).sum();
    let [low, mid, high] = band_ranges(n);
    AudioFeatures {
        average: sum as f32 / n as f32,
        low: band_energy(&snapshot[low]),
        mid: band_energy(&snapshot[mid]),
        high: band_energy(&snapshot[high]),
    }
}

/// Rescales band energies against a slowly decaying peak so quiet mixes still
/// reach the full color range. Loudness (`average`) is left untouched.
#[derive(Clone, Debug)]
pub struct GainNormalizer {
    peak: f32,
}

impl Default for GainNormalizer {
    fn default() -> Self {
        Self { peak: 0.0 }
    }
}

impl GainNormalizer {
    #[inline]
    pub fn peak(&self) -> f32 {
        self.peak
    }

    pub fn apply(&mut self, features: AudioFeatures) -> AudioFeatures {
        let loudest = features.low.max(features.mid).max(features.high);
        self.peak = (self.peak * GAIN_PEAK_DECAY).max(loudest);
        if self.peak < GAIN_PEAK_FLOOR {
            return features;
        }
        let gain = (1.0 / self.peak).min(GAIN_MAX_BOOST);
        AudioFeatures {
            average: features.average,
            low: (features.low * gain).clamp(0.0, 1.0),
            mid: (features.mid * gain).clamp(0.0, 1.0),
            high: (features.high * gain).clamp(0.0, 1.0),
        }
    }
}
