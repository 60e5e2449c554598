use super::*;
use crate::auth::{AccountId, AccountType};

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_no_user() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(!state.is_authenticated());
}

#[test]
fn auth_state_default_is_loading() {
    let state = AuthState::default();
    assert!(state.loading);
}

#[test]
fn auth_state_with_user_is_authenticated() {
    let state = AuthState {
        user: Some(User {
            id: AccountId("1-aaaaaa".to_owned()),
            name: "Ana".to_owned(),
            email: "ana@x.com".to_owned(),
            account_type: AccountType::Customer,
        }),
        loading: false,
    };
    assert!(state.is_authenticated());
}
