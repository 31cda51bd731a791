use super::color::{hsl_to_rgb, scale_for_average, ColorState};
use super::config::SiteConfig;
use super::constants::{HUE_LIGHTNESS, HUE_SATURATION};
use super::features::{extract, GainNormalizer};
use super::nav::HighlightPolicy;
use super::rotation::{Face, RotationError, RotationScheduler};

/// Everything the renderer and the link highlighter need for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameOutput {
    pub orientation: [f32; 2],
    pub scale: f32,
    pub hue: f32,
    pub color_rgb: [f32; 3],
    pub highlight: Option<Face>,
}

/// Per-frame state of the landing page: rotation, smoothed color and the
/// optional gain normalizer. Each field is written only from [`SyncLoop::tick`]
/// (and `restart_rotation` for the scheduler).
#[derive(Clone, Debug)]
pub struct SyncLoop {
    rotation: RotationScheduler,
    color: ColorState,
    normalizer: Option<GainNormalizer>,
    highlight: HighlightPolicy,
}

impl SyncLoop {
    pub fn new(config: &SiteConfig, now_ms: f64) -> Result<Self, RotationError> {
        Ok(Self {
            rotation: RotationScheduler::new(
                config.sequence.clone(),
                config.rotation_duration_ms,
                now_ms,
            )?,
            color: ColorState::default(),
            normalizer: config.gain_normalization.then(GainNormalizer::default),
            highlight: config.highlight,
        })
    }

    #[inline]
    pub fn rotation(&self) -> &RotationScheduler {
        &self.rotation
    }

    #[inline]
    pub fn color(&self) -> &ColorState {
        &self.color
    }

    pub fn restart_rotation(&mut self, now_ms: f64) {
        self.rotation.restart(now_ms);
    }

    /// Advance one frame. While paused the cube keeps turning at scale 1 and
    /// the color holds.
    pub fn tick(&mut self, now_ms: f64, snapshot: &[u8], playing: bool) -> FrameOutput {
        let rot = self.rotation.tick(now_ms);

        let scale = if playing {
            let mut features = extract(snapshot);
            if let Some(n) = &mut self.normalizer {
                features = n.apply(features);
            }
            self.color.update(features.bands());
            scale_for_average(features.average)
        } else {
            1.0
        };

        let hue = self.color.hue();
        FrameOutput {
            orientation: rot.orientation,
            scale,
            hue,
            color_rgb: hsl_to_rgb(hue, HUE_SATURATION, HUE_LIGHTNESS),
            highlight: self.highlight.select(rot.current_face, rot.next_face),
        }
    }
}
