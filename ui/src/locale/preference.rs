use serde::Deserialize;
use tracing::{debug, warn};

use crate::core::storage::{PreferenceStore, StorageError, PREFERRED_LANGUAGE_KEY};
use crate::models::Language;

/// The part of a saved language record needed for resolution.
///
/// The full CMS record is stored, but only `code` is trusted on the way
/// back: everything else is re-read from the current language list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StoredLanguage {
    pub code: String,
}

/// Saved preference, if any. Unreadable storage and malformed JSON are
/// logged and treated as "no preference".
pub fn load_preference<P: PreferenceStore>(store: &P) -> Option<StoredLanguage> {
    let raw = match store.read(PREFERRED_LANGUAGE_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(err) => {
            warn!(error = %err, "language preference unavailable");
            return None;
        }
    };

    match serde_json::from_str::<StoredLanguage>(&raw) {
        Ok(stored) => {
            debug!(code = %stored.code, "found saved language preference");
            Some(stored)
        }
        Err(err) => {
            warn!(error = %err, "ignoring invalid saved language preference");
            None
        }
    }
}

pub fn save_preference<P: PreferenceStore>(
    store: &P,
    language: &Language,
) -> Result<(), StorageError> {
    let raw = serde_json::to_string(language)?;
    store.write(PREFERRED_LANGUAGE_KEY, &raw)
}
