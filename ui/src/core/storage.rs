//! Local persistence for visitor preferences.
//!
//! Browser builds write to `localStorage`; native builds keep one small file
//! per key in the platform data directory. Everything stored here is a
//! convenience: callers treat read failures as "nothing stored".

use std::cell::RefCell;
use std::collections::HashMap;

use thiserror::Error;

/// Key holding the last language the visitor picked (a serialized CMS language record).
pub const PREFERRED_LANGUAGE_KEY: &str = "preferredLanguage";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not encode stored value: {0}")]
    Encode(#[from] serde_json::Error),
}

/// String key/value persistence, mirroring the `localStorage` contract.
pub trait PreferenceStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<T: PreferenceStore + ?Sized> PreferenceStore for &T {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).write(key, value)
    }
}

/// Session-only store. Used by tests and as a stand-in when nothing durable exists.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::default();
        store
            .entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        store
    }
}

impl PreferenceStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserStore as PlatformStore;

#[cfg(not(target_arch = "wasm32"))]
pub use native::FileStore as PlatformStore;

#[cfg(not(target_arch = "wasm32"))]
pub use native::FileStore;

/// The durable store for the current platform.
pub fn platform_store() -> PlatformStore {
    PlatformStore::platform_default()
}

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::{PreferenceStore, StorageError};

    /// `window.localStorage`, looked up on every access so a denied storage
    /// permission only fails the call that hit it.
    #[derive(Debug, Default, Clone, Copy)]
    pub struct BrowserStore;

    impl BrowserStore {
        pub fn platform_default() -> Self {
            Self
        }

        fn storage() -> Result<web_sys::Storage, StorageError> {
            let window =
                web_sys::window().ok_or_else(|| StorageError::Unavailable("no window".into()))?;
            window
                .local_storage()
                .map_err(|_| StorageError::Unavailable("localStorage access denied".into()))?
                .ok_or_else(|| StorageError::Unavailable("localStorage missing".into()))
        }
    }

    impl PreferenceStore for BrowserStore {
        fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
            Self::storage()?
                .get_item(key)
                .map_err(|_| StorageError::Unavailable(format!("reading `{key}` failed")))
        }

        fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
            Self::storage()?
                .set_item(key, value)
                .map_err(|_| StorageError::Unavailable(format!("writing `{key}` failed")))
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::fs;
    use std::io::ErrorKind;
    use std::path::{Path, PathBuf};

    use super::{PreferenceStore, StorageError};

    /// One `<key>.json` file per entry inside `dir`.
    #[derive(Debug, Clone)]
    pub struct FileStore {
        dir: PathBuf,
    }

    impl FileStore {
        pub fn new(dir: impl Into<PathBuf>) -> Self {
            Self { dir: dir.into() }
        }

        pub fn platform_default() -> Self {
            let dir = directories::ProjectDirs::from("com", "ITGrate", "itgrate-site")
                .map(|dirs| dirs.data_dir().to_path_buf())
                .unwrap_or_else(|| std::env::temp_dir().join("itgrate-site"));
            Self::new(dir)
        }

        pub fn dir(&self) -> &Path {
            &self.dir
        }

        fn path_for(&self, key: &str) -> PathBuf {
            self.dir.join(format!("{key}.json"))
        }
    }

    impl PreferenceStore for FileStore {
        fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
            match fs::read_to_string(self.path_for(key)) {
                Ok(raw) => Ok(Some(raw)),
                Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
                Err(err) => Err(err.into()),
            }
        }

        fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
            fs::create_dir_all(&self.dir)?;
            fs::write(self.path_for(key), value)?;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trips() {
        let store = MemoryStore::default();
        assert_eq!(store.read("k").unwrap(), None);
        store.write("k", "v").unwrap();
        assert_eq!(store.read("k").unwrap().as_deref(), Some("v"));
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn file_store_reads_missing_key_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("nested"));
        assert_eq!(store.read(PREFERRED_LANGUAGE_KEY).unwrap(), None);

        store.write(PREFERRED_LANGUAGE_KEY, r#"{"code":"AR"}"#).unwrap();
        assert_eq!(
            store.read(PREFERRED_LANGUAGE_KEY).unwrap().as_deref(),
            Some(r#"{"code":"AR"}"#)
        );
        assert!(store.dir().join("preferredLanguage.json").exists());
    }
}
