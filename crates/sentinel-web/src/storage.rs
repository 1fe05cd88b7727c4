use sentinel_history::{KeyValueStore, StorageError};
use wasm_bindgen::JsValue;
use web_sys::Storage;

/// `window.localStorage` behind the history store's key-value interface
pub struct LocalStorage {
    storage: Storage,
}

impl LocalStorage {
    pub fn open() -> Result<Self, StorageError> {
        let storage = crate::window()
            .and_then(|w| w.local_storage())
            .map_err(unavailable)?
            .ok_or_else(|| StorageError::Unavailable("localStorage is disabled".to_string()))?;
        Ok(Self { storage })
    }
}

fn unavailable(err: JsValue) -> StorageError {
    StorageError::Unavailable(format!("{:?}", err))
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> sentinel_history::Result<Option<String>> {
        self.storage.get_item(key).map_err(unavailable)
    }

    fn set(&mut self, key: &str, value: &str) -> sentinel_history::Result<()> {
        // Quota errors surface here
        self.storage.set_item(key, value).map_err(unavailable)
    }

    fn remove(&mut self, key: &str) -> sentinel_history::Result<()> {
        self.storage.remove_item(key).map_err(unavailable)
    }
}
