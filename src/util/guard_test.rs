use super::*;
use crate::net::types::UserIdentity;

fn session_with_role(role: Role) -> Session {
    Session {
        user: Some(UserIdentity {
            id: 1,
            email: "a@b.com".to_owned(),
            username: None,
            role,
        }),
        loading: false,
        error: None,
    }
}

#[test]
fn loading_renders_placeholder_without_redirect() {
    let session = Session {
        loading: true,
        ..Session::default()
    };
    assert_eq!(decide(&session, None), GuardDecision::Loading);
    assert_eq!(decide(&session, Some(Role::Doctor)), GuardDecision::Loading);
}

#[test]
fn missing_user_redirects_to_login_regardless_of_requirement() {
    let session = Session::default();
    assert_eq!(decide(&session, None), GuardDecision::RedirectToLogin);
    assert_eq!(decide(&session, Some(Role::Doctor)), GuardDecision::RedirectToLogin);
}

#[test]
fn error_state_without_user_redirects_to_login() {
    let session = Session {
        error: Some("Invalid credentials".to_owned()),
        ..Session::default()
    };
    assert_eq!(decide(&session, None), GuardDecision::RedirectToLogin);
}

#[test]
fn role_mismatch_redirects_to_dashboard_not_login() {
    let session = session_with_role(Role::Patient);
    assert_eq!(
        decide(&session, Some(Role::Doctor)),
        GuardDecision::RedirectToDashboard
    );
}

#[test]
fn matching_role_allows_render() {
    let session = session_with_role(Role::Doctor);
    assert_eq!(decide(&session, Some(Role::Doctor)), GuardDecision::Allow);
}

#[test]
fn no_requirement_allows_any_role() {
    assert_eq!(decide(&session_with_role(Role::Patient), None), GuardDecision::Allow);
    assert_eq!(decide(&session_with_role(Role::Admin), None), GuardDecision::Allow);
}
