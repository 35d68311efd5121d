//! localStorage access.
//!
//! The session layer persists two keys (`auth_token` raw, `auth_user` JSON)
//! plus the transient OAuth state pair. Nothing else in the app touches
//! durable storage.

use serde::{de::DeserializeOwned, Serialize};
use web_sys::Storage;

pub fn local_storage() -> Option<Storage> {
    gloo_utils::window().local_storage().ok()?
}

/// Store a raw string value.
pub fn save_raw(key: &str, value: &str) -> Result<(), String> {
    let storage = local_storage().ok_or("localStorage unavailable")?;
    storage
        .set_item(key, value)
        .map_err(|_| format!("failed to write {} to localStorage", key))
}

/// Read a raw string value.
pub fn load_raw(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok()?
}

/// Serialize a value to JSON and store it.
pub fn save_json<T: Serialize>(key: &str, value: &T) -> Result<(), String> {
    let json = serde_json::to_string(value).map_err(|e| format!("serialize error: {}", e))?;
    save_raw(key, &json)
}

/// Load and deserialize a JSON value. Any parse failure reads as absent.
pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    let json = load_raw(key)?;
    serde_json::from_str(&json).ok()
}

pub fn remove(key: &str) {
    if let Some(storage) = local_storage() {
        storage.remove_item(key).ok();
    }
}
