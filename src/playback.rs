use crate::audio;
use crate::core::crossfade::Crossfader;
use crate::core::playlist::Playlist;
use crate::core::session::{SessionRecord, SessionStore};
use crate::core::transport::{MediaStatus, ToggleAction, Transport};
use crate::core::SiteConfig;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Owns the audio element and applies [`Transport`] decisions to it.
pub struct PlaybackManager {
    element: web::HtmlAudioElement,
    ctx: web::AudioContext,
    playlist: Playlist,
    rng: StdRng,
    transport: Transport,
    store: Option<Box<dyn SessionStore>>,
}

impl PlaybackManager {
    pub fn new(
        config: &SiteConfig,
        element: web::HtmlAudioElement,
        ctx: web::AudioContext,
        store: Option<Box<dyn SessionStore>>,
    ) -> anyhow::Result<Self> {
        let mut rng = StdRng::from_entropy();
        let playlist = Playlist::new(config.playlist.clone(), config.next_track, &mut rng)?;
        let transport = Transport::new(
            config.crossfade.then(|| Crossfader::new(config.volume)),
            store.is_some(),
        );
        Ok(Self {
            element,
            ctx,
            playlist,
            rng,
            transport,
            store,
        })
    }

    #[inline]
    pub fn is_playing(&self) -> bool {
        !self.element.paused()
    }

    #[inline]
    pub fn element(&self) -> &web::HtmlAudioElement {
        &self.element
    }

    fn status(&self) -> MediaStatus {
        MediaStatus {
            playing: self.is_playing(),
            position_sec: self.element.current_time(),
            duration_sec: self.element.duration(),
            volume: self.element.volume(),
        }
    }

    /// Load the saved track (if any) or the first one in play order. Seeking
    /// waits for `loadedmetadata`, see [`PlaybackManager::on_metadata`].
    pub fn restore(&mut self) {
        let saved = self.store.as_deref().and_then(SessionRecord::load);
        if let Some(rec) = &saved {
            log::info!(
                "[playback] restoring track {} at {:.1}s (playing={})",
                rec.track_index,
                rec.position_sec,
                rec.is_playing
            );
        }
        match self.transport.restore(saved) {
            Some(index) => self.load_track(index),
            None => {
                let src = self.playlist.current_track().to_string();
                self.element.set_src(&src);
            }
        }
    }

    fn load_track(&mut self, index: usize) {
        let src = self.playlist.select(index).to_string();
        self.element.set_src(&src);
    }

    fn advance_track(&mut self) {
        let src = self.playlist.advance(&mut self.rng).to_string();
        log::info!("[playback] next track: {}", src);
        self.element.set_src(&src);
    }

    fn save_now(&mut self, is_playing: bool) {
        let rec = SessionRecord {
            track_index: self.playlist.current_index(),
            position_sec: self.element.current_time(),
            is_playing,
        };
        if let Some(store) = self.store.as_deref_mut() {
            rec.save(store);
        }
    }

    /// Try to start playback. A rejection (autoplay policy) is absorbed and,
    /// when `arm_retry` is set, playback is retried once on the next gesture.
    pub fn request_play(this: &Rc<RefCell<Self>>, arm_retry: bool) {
        let promise = {
            let m = this.borrow();
            audio::resume_if_suspended(&m.ctx);
            m.element.play()
        };
        let promise = match promise {
            Ok(p) => p,
            Err(e) => {
                log::warn!("[playback] play() threw: {:?}", e);
                return;
            }
        };
        let this = this.clone();
        spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                log::debug!("[playback] play rejected: {:?}", e);
                this.borrow_mut().transport.play_rejected(arm_retry);
            }
        });
    }

    /// Called on pointer and key gestures; replays at most once after a rejection.
    pub fn retry_after_gesture(this: &Rc<RefCell<Self>>, on_play_button: bool) {
        let retry = this.borrow_mut().transport.on_gesture(on_play_button);
        if retry {
            log::info!("[playback] retrying playback after user gesture");
            Self::request_play(this, false);
        }
    }

    /// Play/pause button. Returns `true` when playback was started.
    pub fn toggle(this: &Rc<RefCell<Self>>) -> bool {
        let action = {
            let mut m = this.borrow_mut();
            let playing = m.is_playing();
            m.transport.toggle(playing)
        };
        match action {
            ToggleAction::Pause { restore_volume } => {
                let mut m = this.borrow_mut();
                _ = m.element.pause();
                if let Some(v) = restore_volume {
                    m.element.set_volume(v);
                }
                m.save_now(false);
                false
            }
            ToggleAction::Play => {
                Self::request_play(this, true);
                true
            }
        }
    }

    /// `ended` media event.
    pub fn on_ended(this: &Rc<RefCell<Self>>) {
        {
            let mut m = this.borrow_mut();
            if let Some(v) = m.transport.on_ended() {
                m.element.set_volume(v);
            }
            m.advance_track();
        }
        Self::request_play(this, true);
    }

    /// `loadedmetadata` media event: apply a pending session resume.
    pub fn on_metadata(this: &Rc<RefCell<Self>>) {
        let autoplay = {
            let mut m = this.borrow_mut();
            let duration = m.element.duration();
            let len = m.playlist.len();
            let Some(plan) = m.transport.on_metadata(duration, len) else {
                return;
            };
            if plan.track_index != m.playlist.current_index() {
                log::info!("[playback] saved position was at the end; skipping ahead");
                m.load_track(plan.track_index);
            } else if let Some(pos) = plan.position_sec {
                m.element.set_current_time(pos);
            }
            plan.autoplay
        };
        if autoplay {
            Self::request_play(this, true);
        }
    }

    /// Periodic playback tick, every `PLAYBACK_TICK_MS`.
    pub fn tick(this: &Rc<RefCell<Self>>) {
        let advanced = {
            let mut m = this.borrow_mut();
            let status = m.status();
            let actions = m.transport.tick(status);
            if actions.save {
                m.save_now(true);
            }
            if let Some(v) = actions.set_volume {
                m.element.set_volume(v);
            }
            if actions.advance {
                m.advance_track();
            }
            actions.advance
        };
        if advanced {
            Self::request_play(this, true);
        }
    }
}
