//! File-backed session storage
//!
//! Entries live in one flat JSON object on disk. Every write rewrites the file.

use bookmybox_core::{BookMyBoxError, KeyValueStorage, Result};
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::warn;

#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    items: BTreeMap<String, String>,
}

impl FileStorage {
    /// Open `path`, treating a missing file as empty storage
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let items = match fs::read_to_string(&path) {
            Ok(content) if content.trim().is_empty() => BTreeMap::new(),
            Ok(content) => serde_json::from_str(&content)
                .map_err(|e| BookMyBoxError::Storage(format!("{}: {}", path.display(), e)))?,
            Err(e) if e.kind() == ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(BookMyBoxError::Storage(format!("{}: {}", path.display(), e))),
        };
        Ok(Self { path, items })
    }

    /// Like `open`, but an unreadable file counts as empty and is replaced
    /// on the next write
    pub fn open_or_empty(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        match Self::open(path.clone()) {
            Ok(storage) => storage,
            Err(e) => {
                warn!("discarding unreadable session file: {}", e);
                Self { path, items: BTreeMap::new() }
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<()> {
        let content = serde_json::to_string_pretty(&self.items)?;
        fs::write(&self.path, content)
            .map_err(|e| BookMyBoxError::Storage(format!("{}: {}", self.path.display(), e)))
    }
}

impl KeyValueStorage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        self.items.insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn remove_item(&mut self, key: &str) -> Result<()> {
        if self.items.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookmybox_core::{DemoAuthenticator, Session, TOKEN_KEY, USER_KEY};

    #[test]
    fn missing_file_opens_empty() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::open(dir.path().join("session.json")).unwrap();
        assert_eq!(storage.get_item(TOKEN_KEY).unwrap(), None);
    }

    #[test]
    fn entries_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let mut storage = FileStorage::open(&path).unwrap();
        storage.set_item(TOKEN_KEY, "abc").unwrap();
        storage.set_item(USER_KEY, "{}").unwrap();
        storage.remove_item(USER_KEY).unwrap();
        storage.remove_item("never-set").unwrap();

        let reopened = FileStorage::open(&path).unwrap();
        assert_eq!(reopened.get_item(TOKEN_KEY).unwrap().as_deref(), Some("abc"));
        assert_eq!(reopened.get_item(USER_KEY).unwrap(), None);
    }

    #[test]
    fn corrupt_file_is_a_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "{ not json").unwrap();

        let err = FileStorage::open(&path).unwrap_err();
        assert!(matches!(err, BookMyBoxError::Storage(_)));

        let mut storage = FileStorage::open_or_empty(&path);
        assert_eq!(storage.get_item(TOKEN_KEY).unwrap(), None);
        storage.set_item(TOKEN_KEY, "fresh").unwrap();
        assert!(FileStorage::open(&path).is_ok());
    }

    #[test]
    fn login_restores_across_launches() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let mut session = Session::new(FileStorage::open(&path).unwrap(), DemoAuthenticator::new());
        session.login("owner@demo.com", "owner123").unwrap();

        let relaunched = Session::restored(FileStorage::open(&path).unwrap(), DemoAuthenticator::new());
        assert_eq!(relaunched.user().map(|u| u.email.as_str()), Some("owner@demo.com"));

        let mut relaunched = relaunched;
        relaunched.logout().unwrap();
        let after_logout = Session::restored(FileStorage::open(&path).unwrap(), DemoAuthenticator::new());
        assert!(!after_logout.is_authenticated());
    }
}
