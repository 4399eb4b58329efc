use super::*;

fn body(code: &str, message: &str) -> String {
    format!(r#"{{"error": {{"code": "{code}", "message": "{message}"}}}}"#)
}

// =============================================================
// Error body parsing (envelope contract)
// =============================================================

#[test]
fn parse_invalid_credentials() {
    let err = parse_error_body(401, &body("INVALID_CREDENTIALS", "Invalid credentials"));
    assert_eq!(err.kind, ErrorKind::InvalidCredentials);
    assert_eq!(err.status, Some(401));
    assert_eq!(err.code.as_deref(), Some("INVALID_CREDENTIALS"));
    assert_eq!(err.message, "Incorrect email or password.");
}

#[test]
fn parse_email_exists() {
    let err = parse_error_body(400, &body("EMAIL_EXISTS", "email taken"));
    assert_eq!(err.kind, ErrorKind::EmailExists);
    assert_eq!(err.message, "An account with this email already exists.");
}

#[test]
fn parse_keeps_details() {
    let err = parse_error_body(
        422,
        r#"{"error": {"code": "VALIDATION_ERROR", "message": "bad", "details": {"field": "email"}}}"#,
    );
    assert_eq!(err.kind, ErrorKind::Validation);
    assert_eq!(err.details.unwrap()["field"], "email");
}

#[test]
fn unparsable_body_is_network_error() {
    let err = parse_error_body(502, "<html>Bad Gateway</html>");
    assert_eq!(err.kind, ErrorKind::Network);
    assert_eq!(err.status, Some(502));
    assert!(err.code.is_none());
    assert_eq!(err.message, "Could not reach the server. Check your connection.");
}

#[test]
fn conforming_envelope_required_exactly() {
    // A JSON body without the envelope is still a network error.
    let err = parse_error_body(401, r#"{"code": "UNAUTHORIZED", "message": "nope"}"#);
    assert_eq!(err.kind, ErrorKind::Network);
}

// =============================================================
// Classification fallbacks
// =============================================================

#[test]
fn unknown_code_falls_back_to_status() {
    assert_eq!(parse_error_body(401, &body("WAT", "x")).kind, ErrorKind::Unauthorized);
    assert_eq!(parse_error_body(404, &body("WAT", "x")).kind, ErrorKind::NotFound);
    assert_eq!(parse_error_body(408, &body("WAT", "x")).kind, ErrorKind::Timeout);
    assert_eq!(parse_error_body(422, &body("WAT", "x")).kind, ErrorKind::Validation);
    assert_eq!(parse_error_body(500, &body("WAT", "x")).kind, ErrorKind::Server);
    assert_eq!(parse_error_body(503, &body("WAT", "x")).kind, ErrorKind::Server);
}

#[test]
fn bare_401_without_envelope_is_still_an_auth_failure() {
    // A reverse proxy can answer 401 with an HTML page. The body parses as
    // a network failure, but the session must still be torn down.
    let err = parse_error_body(401, "<html>401 Unauthorized</html>");
    assert_eq!(err.kind, ErrorKind::Network);
    assert_eq!(err.status, Some(401));
    assert!(err.is_auth_failure());

    // A non-401 network failure stays recoverable.
    let err = parse_error_body(502, "<html>Bad Gateway</html>");
    assert!(!err.is_auth_failure());
}

#[test]
fn token_expired_code_wins_over_status() {
    let err = parse_error_body(401, &body("TOKEN_EXPIRED", "jwt expired"));
    assert_eq!(err.kind, ErrorKind::TokenExpired);
    assert!(err.is_auth_failure());
}

// =============================================================
// Friendliness mapping
// =============================================================

#[test]
fn known_kinds_get_stable_strings() {
    // The raw server text never leaks through for mapped kinds.
    let err = parse_error_body(401, &body("INVALID_CREDENTIALS", "pwd mismatch row 42"));
    assert_eq!(err.message, "Incorrect email or password.");

    let err = parse_error_body(500, &body("DB_DOWN", "pg pool exhausted"));
    assert_eq!(err.message, "The server hit an internal error. Please try again later.");
}

#[test]
fn unmapped_message_passes_through_verbatim() {
    let err = parse_error_body(418, &body("TEAPOT", "I'm a teapot"));
    assert_eq!(err.kind, ErrorKind::Unknown);
    assert_eq!(err.message, "I'm a teapot");
}

#[test]
fn empty_unmapped_message_falls_back_to_generic() {
    let err = parse_error_body(418, &body("TEAPOT", ""));
    assert_eq!(err.message, "Something went wrong. Please try again.");
}

// =============================================================
// Constructors
// =============================================================

#[test]
fn no_refresh_token_is_auth_failure() {
    let err = ApiError::no_refresh_token();
    assert_eq!(err.kind, ErrorKind::NoRefreshToken);
    assert!(err.is_auth_failure());
    assert!(err.status.is_none());
}

#[test]
fn network_error_message_is_friendly_but_detail_survives() {
    let err = ApiError::network("dns failure");
    assert_eq!(err.message, "Could not reach the server. Check your connection.");
    assert_eq!(err.details, Some(serde_json::Value::String("dns failure".to_owned())));
    // The log form carries the cause; `message` alone reaches the UI.
    assert!(err.to_string().contains("dns failure"));
}

#[test]
fn network_error_without_detail_displays_message_only() {
    let err = ApiError::network("");
    assert!(err.details.is_none());
    assert_eq!(err.to_string(), "Could not reach the server. Check your connection.");
}
