use super::*;

#[test]
fn auth_config_default_keys() {
    let config = AuthConfig::default();
    assert_eq!(config.users_key, "ll_local_users");
    assert_eq!(config.session_key, "ll_local_session");
}

#[test]
fn auth_config_namespaced_prefixes_both_keys() {
    let config = AuthConfig::namespaced("tab-a");
    assert_eq!(config.users_key, "tab-a:ll_local_users");
    assert_eq!(config.session_key, "tab-a:ll_local_session");
}

#[test]
fn overlay_config_default_assets() {
    let config = OverlayConfig::default();
    assert_eq!(config.image_src, "/Link.gif");
    assert_eq!(config.image_alt, "Loading");
}
