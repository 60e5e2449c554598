//! Key-value storage backends for browser-local persistence.
//!
//! SYSTEM CONTEXT
//! ==============
//! The auth layer persists its account list and session pointer through the
//! `KeyValueStore` trait instead of touching `localStorage` directly, so the
//! same code runs against the browser in hydrate builds and against an
//! in-memory map in native tests and SSR.


#[cfg(feature = "hydrate")]
pub mod browser;
pub mod memory;

use std::rc::Rc;

#[cfg(feature = "hydrate")]
pub use browser::BrowserStorage;
pub use memory::MemoryStorage;

/// Failure while talking to the underlying storage area.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// No storage area is reachable (no window, storage disabled by the user agent).
    #[error("storage is unavailable")]
    Unavailable,

    /// The write would exceed the storage quota.
    #[error("storage quota exceeded while writing {key}")]
    QuotaExceeded { key: String },

    /// The host rejected the call.
    #[error("storage access failed: {0}")]
    Access(String),
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// String key-value storage with `localStorage` semantics.
///
/// Methods take `&self`; implementations use interior mutability the way the
/// browser API does.
pub trait KeyValueStore {
    /// Read the value stored under `key`, `None` when absent.
    fn get_item(&self, key: &str) -> StorageResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set_item(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Remove `key`. Removing an absent key succeeds.
    fn remove_item(&self, key: &str) -> StorageResult<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Rc<T> {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> StorageResult<()> {
        (**self).remove_item(key)
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> StorageResult<()> {
        (**self).remove_item(key)
    }
}

/// Storage handle shared by the auth provider.
pub type SharedStorage = Rc<dyn KeyValueStore>;

/// Pick the storage backend for the current build.
///
/// Hydrate builds use `window.localStorage` when it is reachable and fall back
/// to an empty in-memory map otherwise. SSR and native builds always use the
/// in-memory map, so the server never renders a signed-in user.
pub fn default_storage() -> SharedStorage {
    #[cfg(feature = "hydrate")]
    {
        match BrowserStorage::local() {
            Ok(storage) => return Rc::new(storage),
            Err(e) => log::warn!("localStorage unavailable, using memory storage: {e}"),
        }
    }
    Rc::new(MemoryStorage::new())
}
