use super::*;
use crate::auth::{AccountId, AccountType, User};

#[test]
fn should_redirect_unauth_when_not_loading_and_user_missing() {
    let state = AuthState { user: None, loading: false };
    assert!(should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_while_loading() {
    let state = AuthState { user: None, loading: true };
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_when_user_exists() {
    let state = AuthState {
        user: Some(User {
            id: AccountId("1-aaaaaa".to_owned()),
            name: "Alice".to_owned(),
            email: "alice@x.com".to_owned(),
            account_type: AccountType::Provider,
        }),
        loading: false,
    };
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn should_redirect_auth_only_when_signed_in() {
    let signed_out = AuthState { user: None, loading: false };
    assert!(!should_redirect_auth(&signed_out));

    let loading = AuthState::default();
    assert!(!should_redirect_auth(&loading));

    let signed_in = AuthState {
        user: Some(User {
            id: AccountId("1-aaaaaa".to_owned()),
            name: "Alice".to_owned(),
            email: "alice@x.com".to_owned(),
            account_type: AccountType::Customer,
        }),
        loading: false,
    };
    assert!(should_redirect_auth(&signed_in));
}
