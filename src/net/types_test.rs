use super::*;

// =============================================================
// AuthResponse parsing
// =============================================================

#[test]
fn auth_response_with_tokens_yields_credentials() {
    let json = r#"{
        "accessToken": "t1",
        "refreshToken": "t2",
        "user": {"id": 1, "username": "testuser", "email": "test@example.com",
                 "createdAt": "2026-01-01T00:00:00Z", "updatedAt": "2026-01-01T00:00:00Z"}
    }"#;
    let resp: AuthResponse = serde_json::from_str(json).unwrap();
    let pair = resp.credentials().unwrap();
    assert_eq!(pair.access_token, "t1");
    assert_eq!(pair.refresh_token, "t2");
    assert_eq!(resp.user.username, "testuser");
}

#[test]
fn auth_response_without_tokens_parses_but_has_no_credentials() {
    let json = r#"{"user": {"id": 2, "username": "u", "email": "u@example.com"}}"#;
    let resp: AuthResponse = serde_json::from_str(json).unwrap();
    assert!(resp.credentials().is_none());
    assert_eq!(resp.user.id, 2);
}

#[test]
fn auth_response_with_only_access_token_has_no_credentials() {
    let json = r#"{"accessToken": "t1", "user": {"id": 3, "username": "u", "email": "u@example.com"}}"#;
    let resp: AuthResponse = serde_json::from_str(json).unwrap();
    assert!(resp.credentials().is_none());
}

// =============================================================
// Error envelope
// =============================================================

#[test]
fn error_envelope_parses_with_and_without_details() {
    let json = r#"{"error": {"code": "INVALID_CREDENTIALS", "message": "Invalid credentials"}}"#;
    let env: ErrorEnvelope = serde_json::from_str(json).unwrap();
    assert_eq!(env.error.code, "INVALID_CREDENTIALS");
    assert!(env.error.details.is_none());

    let json = r#"{"error": {"code": "VALIDATION_ERROR", "message": "bad", "details": {"field": "email"}}}"#;
    let env: ErrorEnvelope = serde_json::from_str(json).unwrap();
    assert!(env.error.details.is_some());
}

#[test]
fn non_conforming_body_fails_to_parse() {
    assert!(serde_json::from_str::<ErrorEnvelope>(r#"{"message": "nope"}"#).is_err());
    assert!(serde_json::from_str::<ErrorEnvelope>("<html>502</html>").is_err());
}
