//! Cross-platform key/value cache.
//!
//! Other parts of the application persist JSON blobs (member roster, signed-in
//! user) under fixed keys. This module only reads them:
//! - Web: `localStorage`
//! - Desktop: one JSON file per key in the platform config directory:
//!   - Linux: `~/.config/travelgroups/`
//!   - macOS: `~/Library/Application Support/travelgroups/`
//!   - Windows: `%APPDATA%\travelgroups\`

use std::collections::HashMap;

use serde::de::DeserializeOwned;

/// Read access to a string-keyed cache.
pub trait KeyValueStore {
    /// Raw value stored under `key`, or `None` if absent or unreadable.
    fn get(&self, key: &str) -> Option<String>;
}

/// Decode the JSON value stored under `key`.
///
/// Returns `None` if the key doesn't exist or deserialization fails.
pub fn load<T: DeserializeOwned>(store: &impl KeyValueStore, key: &str) -> Option<T> {
    let json = store.get(key)?;
    match serde_json::from_str(&json) {
        Ok(value) => Some(value),
        Err(e) => {
            crate::log_warn!("storage: ignoring malformed value for '{}': {}", key, e);
            None
        }
    }
}

impl KeyValueStore for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }
}

/// The platform's persistent storage.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

// =========================================
// Web (WASM) implementation
// =========================================

#[cfg(target_arch = "wasm32")]
impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        let window = web_sys::window()?;
        let storage = window.local_storage().ok()??;
        storage.get_item(key).ok()?
    }
}

// =========================================
// Desktop (native) implementation
// =========================================

#[cfg(not(target_arch = "wasm32"))]
impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        let path = file_path(&dirs::config_dir()?.join("travelgroups"), key);
        std::fs::read_to_string(path).ok()
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn file_path(dir: &std::path::Path, key: &str) -> std::path::PathBuf {
    let safe_key = key.replace(['/', '\\', ':', '*', '?', '"', '<', '>', '|'], "_");
    dir.join(format!("{safe_key}.json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CurrentUser;

    fn store(entries: &[(&str, &str)]) -> HashMap<String, String> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn load_decodes_present_values() {
        let s = store(&[("user", r#"{"usIdx": 9, "usName": "Mina"}"#)]);
        let user: Option<CurrentUser> = load(&s, "user");
        assert_eq!(user, Some(CurrentUser { id: 9 }));
    }

    #[test]
    fn load_treats_missing_and_malformed_as_absent() {
        let s = store(&[("user", "0"), ("broken", "{not json")]);
        assert_eq!(load::<CurrentUser>(&s, "user"), None);
        assert_eq!(load::<CurrentUser>(&s, "broken"), None);
        assert_eq!(load::<CurrentUser>(&s, "missing"), None);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn file_names_are_sanitized() {
        let dir = std::path::Path::new("/tmp/cache");
        assert_eq!(
            file_path(dir, "group/3:members"),
            dir.join("group_3_members.json")
        );
    }
}
