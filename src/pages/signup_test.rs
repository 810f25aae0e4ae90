use super::*;

#[test]
fn accepts_a_complete_signup() {
    let data = validate_signup_input("alice", " alice@b.com ", "longenough", "longenough", "patient")
        .expect("input should validate");
    assert_eq!(data.email, "alice@b.com");
    assert_eq!(data.role, Role::Patient);
}

#[test]
fn requires_every_field() {
    assert_eq!(
        validate_signup_input("", "a@b.com", "longenough", "longenough", "patient"),
        Err("All fields are required.")
    );
    assert_eq!(
        validate_signup_input("alice", "   ", "longenough", "longenough", "patient"),
        Err("All fields are required.")
    );
}

#[test]
fn enforces_minimum_password_length() {
    assert_eq!(
        validate_signup_input("alice", "a@b.com", "short", "short", "patient"),
        Err("Password must be at least 8 characters.")
    );
}

#[test]
fn rejects_mismatched_passwords() {
    assert_eq!(
        validate_signup_input("alice", "a@b.com", "longenough", "different", "patient"),
        Err("Passwords do not match.")
    );
}

#[test]
fn rejects_unknown_roles() {
    assert_eq!(
        validate_signup_input("alice", "a@b.com", "longenough", "longenough", "surgeon"),
        Err("Choose a valid role.")
    );
}
