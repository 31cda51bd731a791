use super::constants::{FADE_IN_MS, FADE_OUT_FLOOR, FADE_OUT_MS, PLAYBACK_TICK_MS};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FadePhase {
    Idle,
    FadingOut,
    Switching,
    FadingIn,
}

/// What the player should do after a crossfade step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FadeAction {
    None,
    SetVolume(f64),
    /// Swap to the next track and set the given volume.
    SwitchTrack(f64),
    /// Fade finished at the given (ceiling) volume.
    Finished(f64),
}

/// Crossfade between tracks as an explicit state machine.
///
/// One `step` per playback tick. Fade-out lowers the volume by a fixed
/// decrement until it reaches [`FADE_OUT_FLOOR`], the next step requests the
/// source swap at volume 0, and fade-in raises it back to `ceiling` without
/// ever passing it.
#[derive(Clone, Debug)]
pub struct Crossfader {
    phase: FadePhase,
    volume: f64,
    ceiling: f64,
    out_step: f64,
    in_step: f64,
}

impl Crossfader {
    pub fn new(ceiling: f64) -> Self {
        let tick = PLAYBACK_TICK_MS as f64;
        let ceiling = ceiling.clamp(0.0, 1.0);
        Self {
            phase: FadePhase::Idle,
            volume: ceiling,
            ceiling,
            out_step: ceiling / (FADE_OUT_MS / tick).max(1.0),
            in_step: ceiling / (FADE_IN_MS / tick).max(1.0),
        }
    }

    #[inline]
    pub fn phase(&self) -> FadePhase {
        self.phase
    }

    #[inline]
    pub fn volume(&self) -> f64 {
        self.volume
    }

    #[inline]
    pub fn ceiling(&self) -> f64 {
        self.ceiling
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.phase != FadePhase::Idle
    }

    /// Begin fading out from `current_volume`. Refused while a fade is running.
    pub fn start(&mut self, current_volume: f64) -> bool {
        if self.is_active() {
            return false;
        }
        self.volume = current_volume.clamp(0.0, self.ceiling);
        self.phase = FadePhase::FadingOut;
        true
    }

    /// Cut a running fade-out short so the next `step` swaps the source.
    /// Returns `false` when there is no fade-out to finish.
    pub fn finish_out(&mut self) -> bool {
        match self.phase {
            FadePhase::FadingOut | FadePhase::Switching => {
                self.phase = FadePhase::Switching;
                true
            }
            FadePhase::Idle | FadePhase::FadingIn => false,
        }
    }

    /// Abandon any fade and return the volume to restore, if one was running.
    pub fn cancel(&mut self) -> Option<f64> {
        if !self.is_active() {
            return None;
        }
        self.phase = FadePhase::Idle;
        self.volume = self.ceiling;
        Some(self.ceiling)
    }

    pub fn step(&mut self) -> FadeAction {
        match self.phase {
            FadePhase::Idle => FadeAction::None,
            FadePhase::FadingOut => {
                self.volume = (self.volume - self.out_step).max(0.0);
                if self.volume <= FADE_OUT_FLOOR {
                    self.phase = FadePhase::Switching;
                }
                FadeAction::SetVolume(self.volume)
            }
            FadePhase::Switching => {
                self.volume = 0.0;
                self.phase = FadePhase::FadingIn;
                FadeAction::SwitchTrack(self.volume)
            }
            FadePhase::FadingIn => {
                self.volume = (self.volume + self.in_step).min(self.ceiling);
                if self.volume >= self.ceiling {
                    self.volume = self.ceiling;
                    self.phase = FadePhase::Idle;
                    FadeAction::Finished(self.volume)
                } else {
                    FadeAction::SetVolume(self.volume)
                }
            }
        }
    }
}
