//! Auth error types

use crate::storage::StorageError;

/// Failure returned by sign-in and sign-up.
///
/// Malformed stored data is not an error: it reads as an empty account list.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("failed to serialize accounts: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type for auth operations.
pub type AuthResult<T> = Result<T, AuthError>;
