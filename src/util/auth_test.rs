use super::*;

#[test]
fn redirects_unauth_when_loaded_without_session() {
    assert!(should_redirect_unauth(false, false));
}

#[test]
fn never_redirects_while_loading() {
    assert!(!should_redirect_unauth(true, false));
    assert!(!should_redirect_auth(true, true));
}

#[test]
fn does_not_redirect_unauth_with_session() {
    assert!(!should_redirect_unauth(false, true));
}

#[test]
fn login_page_redirects_home_once_session_exists() {
    assert!(should_redirect_auth(false, true));
    assert!(!should_redirect_auth(false, false));
}
