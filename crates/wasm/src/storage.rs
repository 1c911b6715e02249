//! Browser storage backing the session, plus URL helpers

use bookmybox_core::{BookMyBoxError, KeyValueStorage, MemoryStorage, Result, DEFAULT_API_BASE_URL};
use tracing::warn;

fn storage_error(e: wasm_bindgen::JsValue) -> BookMyBoxError {
    BookMyBoxError::Storage(format!("{:?}", e))
}

// ============================================================================
// Session Storage
// ============================================================================

/// `window.localStorage`, or an in-memory map when the browser denies it
/// (private mode, disabled storage). The in-memory fallback forgets the
/// session on reload.
pub enum BrowserStorage {
    Local(web_sys::Storage),
    Memory(MemoryStorage),
}

impl BrowserStorage {
    pub fn open() -> Self {
        match web_sys::window().and_then(|w| w.local_storage().ok()).flatten() {
            Some(storage) => BrowserStorage::Local(storage),
            None => {
                warn!("localStorage unavailable, session will not survive a reload");
                BrowserStorage::Memory(MemoryStorage::new())
            }
        }
    }

    pub fn is_persistent(&self) -> bool {
        matches!(self, BrowserStorage::Local(_))
    }
}

impl KeyValueStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        match self {
            BrowserStorage::Local(storage) => storage.get_item(key).map_err(storage_error),
            BrowserStorage::Memory(storage) => storage.get_item(key),
        }
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        match self {
            BrowserStorage::Local(storage) => storage.set_item(key, value).map_err(storage_error),
            BrowserStorage::Memory(storage) => storage.set_item(key, value),
        }
    }

    fn remove_item(&mut self, key: &str) -> Result<()> {
        match self {
            BrowserStorage::Local(storage) => storage.remove_item(key).map_err(storage_error),
            BrowserStorage::Memory(storage) => storage.remove_item(key),
        }
    }
}

// ============================================================================
// URL Helpers
// ============================================================================

/// Media is served from the same origin as the page
pub fn api_base_from_location() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
}
