use super::constants::{
    KEY_PLAYING, KEY_POSITION, KEY_TRACK_INDEX, RESUME_END_GUARD_SEC, SAVE_TAIL_GUARD_SEC,
};
use fnv::FnvHashMap;

/// String key/value backend for per-tab playback state.
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// In-memory store, used when the browser refuses storage access and in tests.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: FnvHashMap<String, String>,
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum SessionError {
    #[error("missing session key {0}")]
    Missing(&'static str),
    #[error("invalid value {value:?} for session key {key}")]
    Invalid { key: &'static str, value: String },
}

/// Playback state that survives a reload within the same tab.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionRecord {
    pub track_index: usize,
    pub position_sec: f64,
    pub is_playing: bool,
}

/// How to resume playback after a reload.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResumePlan {
    pub track_index: usize,
    /// Position to seek to; `None` starts the track from the beginning.
    pub position_sec: Option<f64>,
    pub autoplay: bool,
}

fn read(store: &dyn SessionStore, key: &'static str) -> Result<String, SessionError> {
    store.get(key).ok_or(SessionError::Missing(key))
}

fn invalid(key: &'static str, value: String) -> SessionError {
    SessionError::Invalid { key, value }
}

impl SessionRecord {
    pub fn encode(&self) -> [(&'static str, String); 3] {
        [
            (KEY_POSITION, self.position_sec.to_string()),
            (KEY_PLAYING, self.is_playing.to_string()),
            (KEY_TRACK_INDEX, self.track_index.to_string()),
        ]
    }

    pub fn decode(store: &dyn SessionStore) -> Result<Self, SessionError> {
        let raw = read(store, KEY_POSITION)?;
        let position_sec = match raw.trim().parse::<f64>() {
            Ok(p) if p.is_finite() && p >= 0.0 => p,
            _ => return Err(invalid(KEY_POSITION, raw)),
        };
        let raw = read(store, KEY_PLAYING)?;
        let is_playing = match raw.trim() {
            "true" => true,
            "false" => false,
            _ => return Err(invalid(KEY_PLAYING, raw)),
        };
        let raw = read(store, KEY_TRACK_INDEX)?;
        let track_index = raw
            .trim()
            .parse::<usize>()
            .map_err(|_| invalid(KEY_TRACK_INDEX, raw.clone()))?;
        Ok(Self {
            track_index,
            position_sec,
            is_playing,
        })
    }

    pub fn save(&self, store: &mut dyn SessionStore) {
        for (key, value) in self.encode() {
            store.set(key, &value);
        }
    }

    /// Saved state, or `None` when nothing usable was stored.
    pub fn load(store: &dyn SessionStore) -> Option<Self> {
        match Self::decode(store) {
            Ok(r) => Some(r),
            Err(e) => {
                log::debug!("[session] no saved state: {}", e);
                None
            }
        }
    }

    /// Decide where playback resumes once the saved track's duration is known.
    ///
    /// An unknown duration (`None` or not finite) restores the position as is.
    pub fn resume(&self, duration_sec: Option<f64>, playlist_len: usize) -> ResumePlan {
        let len = playlist_len.max(1);
        let track_index = self.track_index % len;
        let near_end = duration_sec
            .filter(|d| d.is_finite())
            .map(|d| self.position_sec >= d - RESUME_END_GUARD_SEC)
            .unwrap_or(false);
        if near_end {
            ResumePlan {
                track_index: (track_index + 1) % len,
                position_sec: None,
                autoplay: self.is_playing,
            }
        } else {
            ResumePlan {
                track_index,
                position_sec: Some(self.position_sec),
                autoplay: self.is_playing,
            }
        }
    }
}

/// Whether a position is far enough from the end of the track to be saved.
#[inline]
pub fn should_save(position_sec: f64, duration_sec: f64) -> bool {
    if !duration_sec.is_finite() {
        return true;
    }
    position_sec < duration_sec - SAVE_TAIL_GUARD_SEC
}
