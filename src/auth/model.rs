//! Account records and the public user view.
//!
//! `Account` is the stored form and carries the password. `User` is the only
//! form handed to the UI; it has no password field at all, so nothing built
//! from it can leak one.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique account identifier, `"<unix millis>-<base36 suffix>"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(pub String);

impl AccountId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Role attached to an account.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    #[default]
    Customer,
    Provider,
    Admin,
}

impl AccountType {
    pub fn as_str(self) -> &'static str {
        match self {
            AccountType::Customer => "customer",
            AccountType::Provider => "provider",
            AccountType::Admin => "admin",
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Roles a visitor may pick for themselves when signing up.
///
/// `admin` is deliberately absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SignUpType {
    #[default]
    Customer,
    Provider,
}

impl SignUpType {
    pub fn as_str(self) -> &'static str {
        AccountType::from(self).as_str()
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "customer" => Some(SignUpType::Customer),
            "provider" => Some(SignUpType::Provider),
            _ => None,
        }
    }
}

impl From<SignUpType> for AccountType {
    fn from(value: SignUpType) -> Self {
        match value {
            SignUpType::Customer => AccountType::Customer,
            SignUpType::Provider => AccountType::Provider,
        }
    }
}

/// A stored account, serialized as `{"id","name","email","type","password"}`.
///
/// `name` and `password` may be missing from older records and read as empty.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: AccountId,
    #[serde(default)]
    pub name: String,
    pub email: String,
    #[serde(rename = "type")]
    pub account_type: AccountType,
    /// Plaintext. Local prototype storage only.
    #[serde(default)]
    pub password: String,
}

impl Account {
    /// Public view of this account.
    pub fn public_view(&self) -> User {
        User {
            id: self.id.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
            account_type: self.account_type,
        }
    }
}

impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Account")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("email", &self.email)
            .field("account_type", &self.account_type)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Account data safe to expose to the UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: AccountId,
    pub name: String,
    pub email: String,
    #[serde(rename = "type")]
    pub account_type: AccountType,
}
