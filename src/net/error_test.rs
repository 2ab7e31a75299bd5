use super::*;

#[test]
fn detail_message_reads_fastapi_error_body() {
    assert_eq!(
        detail_message(r#"{"detail":"Incorrect username or password"}"#, "Login failed"),
        "Incorrect username or password"
    );
}

#[test]
fn detail_message_falls_back_on_malformed_body() {
    assert_eq!(detail_message("<html>502</html>", "Login failed"), "Login failed");
    assert_eq!(detail_message("", "Login failed"), "Login failed");
    assert_eq!(detail_message(r#"{"detail":5}"#, "Login failed"), "Login failed");
}

#[test]
fn message_prefers_server_detail() {
    let err = ApiError::Server {
        status: 403,
        detail: "Not your recipe".to_owned(),
    };
    assert_eq!(err.message("fallback"), "Not your recipe");

    let err = ApiError::Authentication("Invalid credentials".to_owned());
    assert_eq!(err.message("fallback"), "Invalid credentials");
}

#[test]
fn message_uses_fallback_for_transport_failures() {
    assert_eq!(ApiError::Network("offline".to_owned()).message("Try again"), "Try again");
    assert_eq!(ApiError::Decode("bad json".to_owned()).message("Try again"), "Try again");
}

#[test]
fn authentication_error_displays_detail_verbatim() {
    let err = ApiError::Authentication("Invalid credentials".to_owned());
    assert_eq!(err.to_string(), "Invalid credentials");
}
