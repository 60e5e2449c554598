//! Browser-local accounts and session handling.

pub mod accounts;
pub mod error;
pub mod model;
pub mod service;

pub use accounts::AccountStore;
pub use error::{AuthError, AuthResult};
pub use model::{Account, AccountId, AccountType, SignUpType, User};
pub use service::AuthService;
