use crate::core::session::{MemoryStore, SessionStore};
use web_sys as web;

/// `window.sessionStorage`: survives reloads, cleared when the tab closes.
pub struct BrowserSessionStore {
    storage: web::Storage,
}

impl SessionStore for BrowserSessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) {
        if let Err(e) = self.storage.set_item(key, value) {
            log::warn!("[session] could not write {}: {:?}", key, e);
        }
    }
}

/// Session storage when the browser allows it, otherwise a throwaway map.
pub fn open_session_store() -> Box<dyn SessionStore> {
    match web::window().map(|w| w.session_storage()) {
        Some(Ok(Some(storage))) => Box::new(BrowserSessionStore { storage }),
        _ => {
            log::warn!("[session] sessionStorage unavailable; playback will not persist");
            Box::new(MemoryStore::default())
        }
    }
}
