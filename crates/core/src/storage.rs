//! Key-value storage used to persist the session between launches
//!
//! The browser build maps this onto `window.localStorage`, the desktop build
//! onto a JSON file. `MemoryStorage` backs tests and throwaway sessions.

use std::collections::HashMap;

use crate::Result;

/// Key holding the opaque session token
pub const TOKEN_KEY: &str = "token";
/// Key holding the serialized `UserIdentity`
pub const USER_KEY: &str = "user";

/// String-to-string storage with localStorage semantics
pub trait KeyValueStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    fn set_item(&mut self, key: &str, value: &str) -> Result<()>;

    /// Removing a missing key is not an error
    fn remove_item(&mut self, key: &str) -> Result<()>;
}

/// In-process storage, lost when dropped
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<()> {
        self.items.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_storage_set_get_remove() {
        let mut storage = MemoryStorage::new();
        assert_eq!(storage.get_item(TOKEN_KEY).unwrap(), None);

        storage.set_item(TOKEN_KEY, "abc").unwrap();
        assert_eq!(storage.get_item(TOKEN_KEY).unwrap().as_deref(), Some("abc"));

        storage.remove_item(TOKEN_KEY).unwrap();
        storage.remove_item(TOKEN_KEY).unwrap();
        assert!(storage.is_empty());
    }
}
