use super::*;
use crate::storage::StorageError;

#[test]
fn validate_sign_in_input_trims_email() {
    assert_eq!(
        validate_sign_in_input("  ana@x.com ", "pw1"),
        Ok(("ana@x.com".to_owned(), "pw1".to_owned()))
    );
}

#[test]
fn validate_sign_in_input_keeps_password_whitespace() {
    assert_eq!(
        validate_sign_in_input("ana@x.com", " pw "),
        Ok(("ana@x.com".to_owned(), " pw ".to_owned()))
    );
}

#[test]
fn validate_sign_in_input_requires_both_fields() {
    assert_eq!(validate_sign_in_input("   ", "pw"), Err("Enter your email and password."));
    assert_eq!(validate_sign_in_input("ana@x.com", ""), Err("Enter your email and password."));
}

#[test]
fn validate_sign_up_input_trims_and_allows_empty_phone() {
    assert_eq!(
        validate_sign_up_input(" Ana ", "", " ana@x.com ", "pw1"),
        Ok(SignUpInput {
            name: "Ana".to_owned(),
            phone: String::new(),
            email: "ana@x.com".to_owned(),
            password: "pw1".to_owned(),
        })
    );
}

#[test]
fn validate_sign_up_input_requires_name_email_password() {
    let msg = Err("Enter your name, email and password.");
    assert_eq!(validate_sign_up_input("", "1", "a@x.com", "pw"), msg);
    assert_eq!(validate_sign_up_input("Ana", "1", " ", "pw"), msg);
    assert_eq!(validate_sign_up_input("Ana", "1", "a@x.com", ""), msg);
}

#[test]
fn auth_failed_message_includes_cause() {
    let err = AuthError::Storage(StorageError::QuotaExceeded { key: "ll_local_users".to_owned() });
    assert_eq!(
        auth_failed_message("Sign up", &err),
        "Sign up failed: storage quota exceeded while writing ll_local_users"
    );
}
