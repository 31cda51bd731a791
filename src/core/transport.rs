use super::constants::{FADE_LEAD_MS, PLAYBACK_TICK_MS, SAVE_INTERVAL_MS};
use super::crossfade::{Crossfader, FadeAction, FadePhase};
use super::session::{should_save, ResumePlan, SessionRecord};

/// Media element readings taken once per playback tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MediaStatus {
    pub playing: bool,
    pub position_sec: f64,
    /// `NaN` until metadata has loaded.
    pub duration_sec: f64,
    pub volume: f64,
}

impl MediaStatus {
    #[inline]
    fn remaining_ms(&self) -> f64 {
        (self.duration_sec - self.position_sec) * 1000.0
    }
}

/// What the player does on one tick. Apply `save` first (it records the
/// current track), then `set_volume`, then `advance`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TickActions {
    pub save: bool,
    pub set_volume: Option<f64>,
    /// Switch to the next track and start it.
    pub advance: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ToggleAction {
    Play,
    /// Pause; a fade cut short leaves `restore_volume` to apply.
    Pause { restore_volume: Option<f64> },
}

/// Playback policy without the media element: crossfade timing, the save
/// cadence, session resume and the one-shot autoplay retry.
///
/// `PlaybackManager` feeds it element readings and events and applies the
/// returned actions.
#[derive(Clone, Debug)]
pub struct Transport {
    crossfader: Option<Crossfader>,
    persist: bool,
    save_elapsed_ms: f64,
    pending_resume: Option<SessionRecord>,
    retry_armed: bool,
}

impl Transport {
    pub fn new(crossfader: Option<Crossfader>, persist: bool) -> Self {
        Self {
            crossfader,
            persist,
            save_elapsed_ms: 0.0,
            pending_resume: None,
            retry_armed: false,
        }
    }

    #[inline]
    pub fn fade_phase(&self) -> FadePhase {
        self.crossfader
            .as_ref()
            .map_or(FadePhase::Idle, |f| f.phase())
    }

    #[inline]
    pub fn retry_armed(&self) -> bool {
        self.retry_armed
    }

    /// Remember a saved session until the restored track's duration is known.
    /// Returns the track to load, `None` to start from the top of the play order.
    pub fn restore(&mut self, saved: Option<SessionRecord>) -> Option<usize> {
        self.pending_resume = saved;
        saved.map(|r| r.track_index)
    }

    /// Metadata of the loaded track arrived. Yields the resume plan once.
    pub fn on_metadata(&mut self, duration_sec: f64, playlist_len: usize) -> Option<ResumePlan> {
        let rec = self.pending_resume.take()?;
        Some(rec.resume(Some(duration_sec), playlist_len))
    }

    /// `play()` was refused; arm a retry for the next gesture if asked to.
    pub fn play_rejected(&mut self, arm_retry: bool) {
        if arm_retry {
            self.retry_armed = true;
        }
    }

    /// A user gesture anywhere on the page. Returns `true` when playback
    /// should be retried now. Gestures on the play button are left to
    /// [`Transport::toggle`], which fires on the same interaction.
    pub fn on_gesture(&mut self, on_play_button: bool) -> bool {
        if on_play_button {
            return false;
        }
        std::mem::replace(&mut self.retry_armed, false)
    }

    /// Play button. The click itself settles any pending retry.
    pub fn toggle(&mut self, playing: bool) -> ToggleAction {
        self.retry_armed = false;
        if playing {
            ToggleAction::Pause {
                restore_volume: self.crossfader.as_mut().and_then(Crossfader::cancel),
            }
        } else {
            ToggleAction::Play
        }
    }

    /// The track ended. The caller always advances and plays; a fade-out
    /// still in flight is finished here and yields the volume to switch at.
    pub fn on_ended(&mut self) -> Option<f64> {
        let fader = self.crossfader.as_mut()?;
        if !fader.finish_out() {
            return None;
        }
        match fader.step() {
            FadeAction::SwitchTrack(v) => Some(v),
            _ => None,
        }
    }

    /// Periodic tick, every `PLAYBACK_TICK_MS`.
    pub fn tick(&mut self, status: MediaStatus) -> TickActions {
        let mut actions = TickActions::default();

        if let Some(fader) = self.crossfader.as_mut() {
            let near_end =
                status.duration_sec.is_finite() && status.remaining_ms() <= FADE_LEAD_MS;
            if status.playing && near_end && !fader.is_active() {
                fader.start(status.volume);
            }
            // A running fade keeps stepping while the element is paused
            match fader.step() {
                FadeAction::None => {}
                FadeAction::SetVolume(v) | FadeAction::Finished(v) => actions.set_volume = Some(v),
                FadeAction::SwitchTrack(v) => {
                    actions.set_volume = Some(v);
                    actions.advance = true;
                }
            }
        }

        if self.persist {
            self.save_elapsed_ms += PLAYBACK_TICK_MS as f64;
            if self.save_elapsed_ms >= SAVE_INTERVAL_MS {
                self.save_elapsed_ms = 0.0;
                actions.save =
                    status.playing && should_save(status.position_sec, status.duration_sec);
            }
        }
        actions
    }
}
