use super::*;

#[test]
fn auth_errors_display_their_message() {
    let err = SessionError::Auth("Invalid credentials".to_owned());
    assert_eq!(err.to_string(), "Invalid credentials");
    assert_eq!(err.user_message(), "Invalid credentials");
}

#[test]
fn verification_errors_hide_detail_from_users() {
    let err = SessionError::Verification("exp claim rejected".to_owned());
    assert_eq!(err.to_string(), "session verification failed: exp claim rejected");
    assert_eq!(err.user_message(), "Session verification failed");
}

#[test]
fn network_errors_suggest_retry() {
    let err = SessionError::Network("timeout".to_owned());
    assert_eq!(err.user_message(), "Network error. Please try again.");
}
