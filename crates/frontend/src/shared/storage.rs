//! Thin localStorage wrappers.
//!
//! Every helper degrades silently: a missing window, an unavailable storage
//! area or a quota error all behave as if the operation never happened, and
//! the in-memory stores stay the source of truth for the session.

use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::window;

fn local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Read a raw string value. Absent key or unavailable storage is `None`.
pub fn load_string(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok()?
}

pub fn save_string(key: &str, value: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(key, value);
    }
}

/// Read and decode a JSON value. Syntactically invalid data is `None`, the
/// same as an absent key.
pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    let raw = load_string(key)?;
    serde_json::from_str(&raw).ok()
}

pub fn save_json<T: Serialize>(key: &str, value: &T) {
    let Ok(raw) = serde_json::to_string(value) else {
        return;
    };
    save_string(key, &raw);
}

/// Drop the key entirely, leaving no trace of it in storage.
pub fn remove(key: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(key);
    }
}
