use super::*;

#[test]
fn join_url_keeps_single_slash() {
    assert_eq!(join_url("http://localhost:8000", "/api/v1/recipes/"), "http://localhost:8000/api/v1/recipes/");
    assert_eq!(join_url("http://localhost:8000/", "/api/v1/recipes/"), "http://localhost:8000/api/v1/recipes/");
    assert_eq!(join_url("http://localhost:8000", "api/v1/recipes/"), "http://localhost:8000/api/v1/recipes/");
}

#[test]
fn api_url_uses_configured_base() {
    let url = api_url("/api/v1/users/me");
    assert!(url.ends_with("/api/v1/users/me"));
    assert!(url.starts_with("http"));
}
