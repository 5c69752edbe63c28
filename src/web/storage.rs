// localStorage-backed persistence for the browser shell.
use web_sys::{Storage, Window};

use crate::GameError;
use crate::progress::{KeyValueStore, MemoryStore};

/// `window.localStorage` adapter.
pub struct LocalStore {
    storage: Storage,
}

impl LocalStore {
    pub fn open(win: &Window) -> Result<Self, GameError> {
        match win.local_storage() {
            Ok(Some(storage)) => Ok(Self { storage }),
            Ok(None) => Err(GameError::Storage("localStorage unavailable".to_string())),
            Err(err) => Err(GameError::storage(err)),
        }
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        // A throwing getter (e.g. storage disabled mid-session) reads as absent.
        self.storage.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), GameError> {
        self.storage.set_item(key, value).map_err(GameError::storage)
    }
}

/// Store used by the shell: `localStorage` when the browser allows it, otherwise an
/// in-memory map that lasts for the page session.
pub enum BrowserStore {
    Local(LocalStore),
    Memory(MemoryStore),
}

impl BrowserStore {
    pub fn open(win: &Window) -> Self {
        match LocalStore::open(win) {
            Ok(store) => BrowserStore::Local(store),
            Err(err) => {
                log::warn!("{err}; progress will not survive a reload");
                BrowserStore::Memory(MemoryStore::new())
            }
        }
    }
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        match self {
            BrowserStore::Local(s) => s.get(key),
            BrowserStore::Memory(s) => s.get(key),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), GameError> {
        match self {
            BrowserStore::Local(s) => s.set(key, value),
            BrowserStore::Memory(s) => s.set(key, value),
        }
    }
}
