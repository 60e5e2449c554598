//! Sign-in, sign-up and sign-out over browser-local storage.
//!
//! SYSTEM CONTEXT
//! ==============
//! There is no server. Accounts live in the `AccountStore` and "signing in"
//! means pointing the stored session at one of them. Passwords are stored but
//! never checked, and signing in with an unknown email provisions a new
//! customer account on the spot. Both are prototype behaviour, kept in this
//! module only.
//!
//! Each operation is one synchronous read-modify-write; nothing coordinates
//! across tabs sharing the same storage.

#[cfg(test)]
#[path = "service_test.rs"]
mod service_test;

use super::accounts::{self, AccountStore};
use super::error::AuthResult;
use super::model::{Account, AccountType, SignUpType, User};
use crate::config::AuthConfig;
use crate::state::auth::AuthState;
use crate::storage::KeyValueStore;

/// In-memory session holder backed by an `AccountStore`.
pub struct AuthService<S> {
    accounts: AccountStore<S>,
    state: AuthState,
}

impl<S: KeyValueStore> AuthService<S> {
    /// Service over `storage` with the default keys. Starts in the loading
    /// state; call `restore` to resolve any stored session.
    pub fn new(storage: S) -> Self {
        Self::with_config(storage, AuthConfig::default())
    }

    pub fn with_config(storage: S, config: AuthConfig) -> Self {
        Self {
            accounts: AccountStore::with_config(storage, config),
            state: AuthState::default(),
        }
    }

    pub fn state(&self) -> &AuthState {
        &self.state
    }

    pub fn user(&self) -> Option<&User> {
        self.state.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.is_authenticated()
    }

    pub fn is_loading(&self) -> bool {
        self.state.loading
    }

    pub fn accounts(&self) -> &AccountStore<S> {
        &self.accounts
    }

    /// Resolve the stored session pointer into the current user and finish
    /// loading. A pointer to a missing account reads as signed out.
    pub fn restore(&mut self) -> &AuthState {
        self.state.user = self.resolve_session();
        self.state.loading = false;
        match &self.state.user {
            Some(user) => log::debug!("restored session for account {}", user.id),
            None => log::debug!("no stored session"),
        }
        &self.state
    }

    fn resolve_session(&self) -> Option<User> {
        let id = self.accounts.session_id()?;
        let found = self.accounts.load_records().find_by_id(&id).map(|a| a.public_view());
        if found.is_none() {
            log::warn!("stored session {id} references a missing account");
        }
        found
    }

    /// Sign in as the account registered for `email`.
    ///
    /// The password is not verified. An unknown email gets a new `customer`
    /// account named after the email's local part.
    ///
    /// # Errors
    ///
    /// Returns an error if writing the account list or the session pointer
    /// fails.
    pub fn sign_in(&mut self, email: &str, password: &str) -> AuthResult<User> {
        let mut stored = self.accounts.load_records();
        let account = if let Some(existing) = stored.find_by_email(email) {
            existing
        } else {
            let account = Account {
                id: stored.next_id(),
                name: accounts::derive_display_name(email),
                email: email.to_owned(),
                account_type: AccountType::Customer,
                password: password.to_owned(),
            };
            stored.push(&account)?;
            self.accounts.save_records(&stored)?;
            log::info!("provisioned account {} on sign-in for unknown email", account.id);
            account
        };
        self.start_session(&account)
    }

    /// Register a new account and sign in as it.
    ///
    /// If `email` is already registered, signs in as that account and
    /// discards `name`, `password` and `account_type`. `phone` is never
    /// stored.
    ///
    /// # Errors
    ///
    /// Returns an error if writing the account list or the session pointer
    /// fails.
    pub fn sign_up(
        &mut self,
        name: &str,
        _phone: &str,
        email: &str,
        password: &str,
        account_type: SignUpType,
    ) -> AuthResult<User> {
        let mut stored = self.accounts.load_records();
        if let Some(existing) = stored.find_by_email(email) {
            log::debug!("sign-up for registered email, signing in as {}", existing.id);
            return self.start_session(&existing);
        }

        let account = Account {
            id: stored.next_id(),
            name: name.to_owned(),
            email: email.to_owned(),
            account_type: account_type.into(),
            password: password.to_owned(),
        };
        stored.push(&account)?;
        self.accounts.save_records(&stored)?;
        log::info!("registered account {} as {}", account.id, account.account_type);
        self.start_session(&account)
    }

    /// Clear the session pointer and the current user. Never fails; a storage
    /// error while removing the pointer is logged.
    pub fn sign_out(&mut self) {
        if let Err(e) = self.accounts.clear_session() {
            log::warn!("clearing stored session failed: {e}");
        }
        if let Some(user) = self.state.user.take() {
            log::debug!("signed out account {}", user.id);
        }
    }

    fn start_session(&mut self, account: &Account) -> AuthResult<User> {
        self.accounts.set_session(&account.id)?;
        let user = account.public_view();
        self.state.user = Some(user.clone());
        Ok(user)
    }
}
