//! Typed client configuration.
//!
//! The browser has no environment to read from, so configuration is built in
//! code. Defaults match the keys and assets already deployed to users; changing
//! a storage key orphans every account saved under the old one.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_USERS_KEY: &str = "ll_local_users";
pub const DEFAULT_SESSION_KEY: &str = "ll_local_session";
pub const DEFAULT_OVERLAY_IMAGE_SRC: &str = "/Link.gif";
pub const DEFAULT_OVERLAY_IMAGE_ALT: &str = "Loading";

/// Storage keys used by the auth layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthConfig {
    /// Key holding the JSON array of stored accounts.
    pub users_key: String,
    /// Key holding the raw id of the signed-in account.
    pub session_key: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            users_key: DEFAULT_USERS_KEY.to_owned(),
            session_key: DEFAULT_SESSION_KEY.to_owned(),
        }
    }
}

impl AuthConfig {
    /// Config with every key prefixed by `namespace`, for running isolated
    /// instances against one storage area.
    pub fn namespaced(namespace: &str) -> Self {
        Self {
            users_key: format!("{namespace}:{DEFAULT_USERS_KEY}"),
            session_key: format!("{namespace}:{DEFAULT_SESSION_KEY}"),
        }
    }
}

/// Assets rendered by the loading overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayConfig {
    pub image_src: &'static str,
    pub image_alt: &'static str,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            image_src: DEFAULT_OVERLAY_IMAGE_SRC,
            image_alt: DEFAULT_OVERLAY_IMAGE_ALT,
        }
    }
}
