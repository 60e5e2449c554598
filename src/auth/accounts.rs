//! Persistence of the account list and the session pointer.
//!
//! DESIGN
//! ======
//! Two storage entries: a JSON array of account records under `users_key`,
//! and the raw id of the signed-in account under `session_key`. Every read goes
//! back to storage so a caller's read-modify-write always starts from the
//! latest list.
//!
//! The list is held as raw JSON records. A record that does not decode as an
//! `Account` (unknown role, missing email) is invisible to lookups but is
//! written back untouched, so appending an account never drops other entries.
//!
//! ERROR HANDLING
//! ==============
//! Reads never fail: a missing or unreadable entry, or one that is not a JSON
//! array, is treated as empty and logged. Writes return the storage error to
//! the caller.

#[cfg(test)]
#[path = "accounts_test.rs"]
mod accounts_test;

use serde::Deserialize;
use serde_json::Value;
use uuid::Uuid;

use super::error::AuthResult;
use super::model::{Account, AccountId};
use crate::config::AuthConfig;
use crate::storage::{KeyValueStore, StorageResult};

const ID_SUFFIX_LEN: usize = 6;

/// Account list and session pointer over a `KeyValueStore`.
pub struct AccountStore<S> {
    storage: S,
    config: AuthConfig,
}

impl<S: KeyValueStore> AccountStore<S> {
    pub fn new(storage: S) -> Self {
        Self::with_config(storage, AuthConfig::default())
    }

    pub fn with_config(storage: S, config: AuthConfig) -> Self {
        Self { storage, config }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Load the stored list, keeping every record in insertion order.
    pub fn load_records(&self) -> StoredAccounts {
        let raw = match self.storage.get_item(&self.config.users_key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return StoredAccounts::default(),
            Err(e) => {
                log::warn!("reading {} failed, treating as empty: {e}", self.config.users_key);
                return StoredAccounts::default();
            }
        };
        match serde_json::from_str::<Vec<Value>>(&raw) {
            Ok(records) => StoredAccounts { records },
            Err(e) => {
                log::warn!("stored {} is malformed, treating as empty: {e}", self.config.users_key);
                StoredAccounts::default()
            }
        }
    }

    /// Every stored record that decodes as an `Account`, in insertion order.
    pub fn load_accounts(&self) -> Vec<Account> {
        self.load_records().accounts().collect()
    }

    /// Replace the stored list.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the storage write fails.
    pub fn save_records(&self, stored: &StoredAccounts) -> AuthResult<()> {
        let raw = serde_json::to_string(&stored.records)?;
        self.storage.set_item(&self.config.users_key, &raw)?;
        Ok(())
    }

    /// Id of the signed-in account, if a session pointer is stored.
    pub fn session_id(&self) -> Option<AccountId> {
        match self.storage.get_item(&self.config.session_key) {
            Ok(Some(id)) if !id.is_empty() => Some(AccountId(id)),
            Ok(_) => None,
            Err(e) => {
                log::warn!("reading {} failed, treating as signed out: {e}", self.config.session_key);
                None
            }
        }
    }

    /// Point the session at `id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage write fails.
    pub fn set_session(&self, id: &AccountId) -> AuthResult<()> {
        self.storage.set_item(&self.config.session_key, id.as_str())?;
        Ok(())
    }

    /// Remove the session pointer.
    ///
    /// # Errors
    ///
    /// Returns the storage error if the removal fails.
    pub fn clear_session(&self) -> StorageResult<()> {
        self.storage.remove_item(&self.config.session_key)
    }
}

/// The stored account list as raw records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoredAccounts {
    records: Vec<Value>,
}

impl StoredAccounts {
    /// Number of records, decodable or not.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records that decode as an `Account`.
    pub fn accounts(&self) -> impl Iterator<Item = Account> + '_ {
        self.records.iter().filter_map(|record| Account::deserialize(record).ok())
    }

    /// First account whose email matches exactly.
    pub fn find_by_email(&self, email: &str) -> Option<Account> {
        self.accounts().find(|a| a.email == email)
    }

    pub fn find_by_id(&self, id: &AccountId) -> Option<Account> {
        self.accounts().find(|a| &a.id == id)
    }

    /// Whether any record, decodable or not, carries `id`.
    pub fn contains_id(&self, id: &AccountId) -> bool {
        self.records
            .iter()
            .any(|record| record.get("id").and_then(Value::as_str) == Some(id.as_str()))
    }

    /// Generate an id not already used by any record.
    pub fn next_id(&self) -> AccountId {
        loop {
            let id = generate_account_id();
            if !self.contains_id(&id) {
                return id;
            }
        }
    }

    /// Append `account` after every existing record.
    ///
    /// # Errors
    ///
    /// Returns an error if the account cannot be serialized.
    pub fn push(&mut self, account: &Account) -> AuthResult<()> {
        self.records.push(serde_json::to_value(account)?);
        Ok(())
    }
}

/// Display name for an account provisioned from an email alone: the local
/// part, or `"user"` when it is empty.
pub fn derive_display_name(email: &str) -> String {
    match email.split('@').next() {
        Some(local) if !local.is_empty() => local.to_owned(),
        _ => "user".to_owned(),
    }
}

/// `"<unix millis>-<6 base36 chars>"`.
pub fn generate_account_id() -> AccountId {
    AccountId(format!("{}-{}", now_millis(), random_suffix()))
}

fn random_suffix() -> String {
    let mut n = Uuid::new_v4().as_u128();
    let mut suffix = String::with_capacity(ID_SUFFIX_LEN);
    for _ in 0..ID_SUFFIX_LEN {
        let digit = u32::try_from(n % 36).unwrap_or(0);
        suffix.push(char::from_digit(digit, 36).unwrap_or('0'));
        n /= 36;
    }
    suffix
}

#[cfg(feature = "hydrate")]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn now_millis() -> u64 {
    js_sys::Date::now() as u64
}

#[cfg(not(feature = "hydrate"))]
fn now_millis() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map_or(0, |d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
}
