//! Leptos context exposing the auth service to the component tree.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AuthProvider` is mounted once by the root component. It owns the
//! `AuthService`, mirrors its state into an `RwSignal<AuthState>` that
//! components track, and resolves the stored session in an effect, so the
//! lookup only runs in the browser after hydration. Descendants reach it with
//! `use_auth()`.
//!
//! DESIGN
//! ======
//! Browser storage handles are not `Send`, so the service lives in a
//! `StoredValue` with local storage. The context handle itself is `Copy` and
//! can be moved into event handlers and `spawn_local` tasks freely.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "context_test.rs"]
mod context_test;

use leptos::prelude::*;

use crate::auth::{AuthError, AuthResult, AuthService, SignUpType, User};
use crate::config::AuthConfig;
use crate::state::auth::AuthState;
use crate::storage::{SharedStorage, StorageError, default_storage};

/// Handle to the current auth session.
#[derive(Clone, Copy)]
pub struct AuthContext {
    state: RwSignal<AuthState>,
    service: StoredValue<AuthService<SharedStorage>, LocalStorage>,
}

impl AuthContext {
    pub fn new(storage: SharedStorage) -> Self {
        Self::with_config(storage, AuthConfig::default())
    }

    pub fn with_config(storage: SharedStorage, config: AuthConfig) -> Self {
        let service = AuthService::with_config(storage, config);
        Self {
            state: RwSignal::new(service.state().clone()),
            service: StoredValue::new_local(service),
        }
    }

    /// Reactive state signal, for guards that take the raw signal.
    pub fn state(&self) -> RwSignal<AuthState> {
        self.state
    }

    /// Current public user. Tracked.
    pub fn user(&self) -> Option<User> {
        self.state.with(|s| s.user.clone())
    }

    /// Tracked.
    pub fn is_authenticated(&self) -> bool {
        self.state.with(AuthState::is_authenticated)
    }

    /// `true` until the stored session has been resolved. Tracked.
    pub fn loading(&self) -> bool {
        self.state.with(|s| s.loading)
    }

    /// Resolve the stored session and finish loading.
    pub fn restore(&self) {
        let restored = self.service.try_update_value(|service| service.restore().clone());
        match restored {
            Some(state) => self.state.set(state),
            None => {
                log::warn!("auth context disposed before restore");
                self.state.update(|s| s.loading = false);
            }
        }
    }

    /// See `AuthService::sign_in`.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage write fails.
    pub async fn sign_in(self, email: String, password: String) -> AuthResult<User> {
        self.run(|service| service.sign_in(&email, &password))
    }

    /// See `AuthService::sign_up`.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage write fails.
    pub async fn sign_up(
        self,
        name: String,
        phone: String,
        email: String,
        password: String,
        account_type: SignUpType,
    ) -> AuthResult<User> {
        self.run(|service| service.sign_up(&name, &phone, &email, &password, account_type))
    }

    /// See `AuthService::sign_out`.
    pub async fn sign_out(self) {
        let _ = self.service.try_update_value(AuthService::sign_out);
        self.state.update(|s| s.user = None);
    }

    fn run(
        &self,
        op: impl FnOnce(&mut AuthService<SharedStorage>) -> AuthResult<User>,
    ) -> AuthResult<User> {
        let outcome = self
            .service
            .try_update_value(|service| {
                let result = op(service);
                (result, service.state().clone())
            })
            .ok_or(AuthError::Storage(StorageError::Unavailable))?;
        let (result, state) = outcome;
        self.state.set(state);
        result
    }
}

/// Provide an `AuthContext` over the default storage to `children`.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let auth = AuthContext::new(default_storage());
    provide_context(auth);

    Effect::new(move || auth.restore());

    children()
}

/// The `AuthContext` provided by the nearest `AuthProvider`.
///
/// # Panics
///
/// Panics when called outside an `AuthProvider`.
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("use_auth must be called within an AuthProvider")
}
