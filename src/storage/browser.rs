//! `window.localStorage` backend (hydrate only).

use wasm_bindgen::JsValue;

use super::{KeyValueStore, StorageError, StorageResult};

/// Thin wrapper over a `web_sys::Storage` area.
pub struct BrowserStorage {
    inner: web_sys::Storage,
}

impl BrowserStorage {
    /// Open the window's `localStorage`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Unavailable` when there is no window or the user
    /// agent has storage disabled.
    pub fn local() -> StorageResult<Self> {
        let window = web_sys::window().ok_or(StorageError::Unavailable)?;
        let inner = window
            .local_storage()
            .map_err(|e| access_error(&e))?
            .ok_or(StorageError::Unavailable)?;
        Ok(Self { inner })
    }
}

impl KeyValueStore for BrowserStorage {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        self.inner.get_item(key).map_err(|e| access_error(&e))
    }

    fn set_item(&self, key: &str, value: &str) -> StorageResult<()> {
        self.inner.set_item(key, value).map_err(|e| {
            if is_quota_error(&e) {
                StorageError::QuotaExceeded { key: key.to_owned() }
            } else {
                access_error(&e)
            }
        })
    }

    fn remove_item(&self, key: &str) -> StorageResult<()> {
        self.inner.remove_item(key).map_err(|e| access_error(&e))
    }
}

fn access_error(value: &JsValue) -> StorageError {
    let message = value
        .as_string()
        .or_else(|| {
            js_sys::Reflect::get(value, &JsValue::from_str("message"))
                .ok()
                .and_then(|m| m.as_string())
        })
        .unwrap_or_else(|| format!("{value:?}"));
    StorageError::Access(message)
}

fn is_quota_error(value: &JsValue) -> bool {
    js_sys::Reflect::get(value, &JsValue::from_str("name"))
        .ok()
        .and_then(|n| n.as_string())
        .is_some_and(|name| name == "QuotaExceededError")
}
