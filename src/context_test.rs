use std::rc::Rc;

use futures::executor::block_on;

use super::*;
use crate::auth::AccountType;
use crate::storage::{KeyValueStore, MemoryStorage};

fn with_owner<T>(f: impl FnOnce() -> T) -> T {
    Owner::new().with(f)
}

#[test]
fn context_starts_loading_without_user() {
    with_owner(|| {
        let auth = AuthContext::new(Rc::new(MemoryStorage::new()));
        assert!(auth.loading());
        assert!(auth.user().is_none());
        assert!(!auth.is_authenticated());
    });
}

#[test]
fn restore_finishes_loading() {
    with_owner(|| {
        let auth = AuthContext::new(Rc::new(MemoryStorage::new()));
        auth.restore();
        assert!(!auth.loading());
        assert!(auth.user().is_none());
    });
}

#[test]
fn sign_up_updates_signal_and_storage() {
    with_owner(|| {
        let storage = Rc::new(MemoryStorage::new());
        let auth = AuthContext::new(storage.clone());
        auth.restore();

        let user = block_on(auth.sign_up(
            "Ana".to_owned(),
            "555-0100".to_owned(),
            "ana@x.com".to_owned(),
            "pw1".to_owned(),
            SignUpType::Customer,
        ))
        .unwrap();

        assert_eq!(auth.user(), Some(user.clone()));
        assert!(auth.is_authenticated());
        assert_eq!(
            storage.get_item("ll_local_session").unwrap().as_deref(),
            Some(user.id.as_str())
        );
    });
}

#[test]
fn session_restores_in_new_context_until_sign_out() {
    with_owner(|| {
        let storage = Rc::new(MemoryStorage::new());
        let first = AuthContext::new(storage.clone());
        first.restore();
        block_on(first.sign_up(
            "Ana".to_owned(),
            "555-0100".to_owned(),
            "ana@x.com".to_owned(),
            "pw1".to_owned(),
            SignUpType::Customer,
        ))
        .unwrap();

        let second = AuthContext::new(storage.clone());
        second.restore();
        let user = second.user().unwrap();
        assert_eq!(user.email, "ana@x.com");
        assert_eq!(user.account_type, AccountType::Customer);

        block_on(second.sign_out());
        assert!(second.user().is_none());
        assert!(!second.is_authenticated());

        let third = AuthContext::new(storage);
        third.restore();
        assert!(third.user().is_none());
    });
}

#[test]
fn sign_in_failure_leaves_user_absent() {
    with_owner(|| {
        let auth = AuthContext::new(Rc::new(MemoryStorage::with_quota(10)));
        auth.restore();
        let result = block_on(auth.sign_in("a@x.com".to_owned(), "pw".to_owned()));
        assert!(result.is_err());
        assert!(auth.user().is_none());
    });
}
