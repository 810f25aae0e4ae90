use super::*;

#[test]
fn verify_payload_parses_full_identity() {
    let user: UserIdentity = serde_json::from_value(serde_json::json!({
        "id": 7,
        "email": "a@b.com",
        "username": "alice",
        "role": "patient",
        "is_active": true
    }))
    .expect("payload should parse");
    assert_eq!(user.id, 7);
    assert_eq!(user.role, Role::Patient);
    assert_eq!(user.username.as_deref(), Some("alice"));
}

#[test]
fn verify_payload_tolerates_missing_username() {
    let user: UserIdentity = serde_json::from_value(serde_json::json!({
        "id": 2,
        "email": "doc@b.com",
        "role": "doctor"
    }))
    .expect("payload should parse");
    assert!(user.username.is_none());
    assert_eq!(user.role, Role::Doctor);
}

#[test]
fn verify_payload_missing_email_is_rejected() {
    let result: Result<UserIdentity, _> = serde_json::from_value(serde_json::json!({
        "id": 2,
        "role": "doctor"
    }));
    assert!(result.is_err());
}

#[test]
fn unknown_role_is_rejected() {
    let result: Result<UserIdentity, _> = serde_json::from_value(serde_json::json!({
        "id": 3,
        "email": "n@b.com",
        "role": "nurse"
    }));
    assert!(result.is_err());
}

#[test]
fn role_wire_strings_round_trip() {
    assert_eq!(serde_json::json!(Role::Doctor), serde_json::json!("doctor"));
    assert_eq!(Role::parse("admin"), Some(Role::Admin));
    assert_eq!(Role::parse("patient"), Some(Role::Patient));
    assert_eq!(Role::parse(""), None);
    assert_eq!(Role::Patient.as_str(), "patient");
}

#[test]
fn login_response_tolerates_missing_token() {
    let body: LoginResponse =
        serde_json::from_value(serde_json::json!({ "token_type": "bearer" }))
            .expect("payload should parse");
    assert!(body.access_token.is_none());
}
