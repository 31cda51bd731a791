use super::constants::{BASE_COLOR_RGB, BYTE_MAX, CURRENT_BLEND, TARGET_BLEND};
use glam::Vec3;

/// Uniform cube scale for a loudness average in byte units.
#[inline]
pub fn scale_for_average(average: f32) -> f32 {
    1.0 + average / BYTE_MAX
}

/// Double-smoothed cube color driven by band energies.
///
/// `target` follows the measured bands at [`TARGET_BLEND`] per tick and
/// `current` follows `target` at [`CURRENT_BLEND`]; only the hue of `current`
/// is shown.
#[derive(Clone, Debug)]
pub struct ColorState {
    pub current: Vec3,
    pub target: Vec3,
    last_hue: f32,
}

impl Default for ColorState {
    fn default() -> Self {
        Self::new(Vec3::from_array(BASE_COLOR_RGB))
    }
}

impl ColorState {
    pub fn new(rgb: Vec3) -> Self {
        let rgb = rgb.clamp(Vec3::ZERO, Vec3::ONE);
        Self {
            current: rgb,
            target: rgb,
            last_hue: rgb_to_hue(rgb).unwrap_or(0.0),
        }
    }

    pub fn update(&mut self, bands: [f32; 3]) {
        let measured = Vec3::from_array(bands).clamp(Vec3::ZERO, Vec3::ONE);
        self.target += (measured - self.target) * TARGET_BLEND;
        self.current += (self.target - self.current) * CURRENT_BLEND;
    }

    /// Hue of the displayed color in `[0, 1)`. Achromatic colors keep the
    /// previous hue.
    pub fn hue(&mut self) -> f32 {
        if let Some(h) = rgb_to_hue(self.current) {
            self.last_hue = h;
        }
        self.last_hue
    }
}

/// Hue in `[0, 1)`, or `None` when the color has no chroma.
pub fn rgb_to_hue(rgb: Vec3) -> Option<f32> {
    let max = rgb.max_element();
    let min = rgb.min_element();
    let delta = max - min;
    if delta <= f32::EPSILON {
        return None;
    }
    let h = if max == rgb.x {
        ((rgb.y - rgb.z) / delta).rem_euclid(6.0)
    } else if max == rgb.y {
        (rgb.z - rgb.x) / delta + 2.0
    } else {
        (rgb.x - rgb.y) / delta + 4.0
    };
    // h is in [0, 6]; 6 only through rounding and means red
    let hue = h / 6.0;
    Some(if hue >= 1.0 { 0.0 } else { hue })
}

/// sRGB-encoded channel to linear light, for writing into an sRGB target.
#[inline]
pub fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> [f32; 3] {
    if s <= 0.0 {
        return [l, l, l];
    }
    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    let channel = |t: f32| {
        let t = t.rem_euclid(1.0);
        if t < 1.0 / 6.0 {
            p + (q - p) * 6.0 * t
        } else if t < 0.5 {
            q
        } else if t < 2.0 / 3.0 {
            p + (q - p) * (2.0 / 3.0 - t) * 6.0
        } else {
            p
        }
    };
    [channel(h + 1.0 / 3.0), channel(h), channel(h - 1.0 / 3.0)]
}
