use super::*;

use base64::Engine as _;

fn token_with_payload(payload: &str) -> String {
    format!("header.{}.sig", URL_SAFE_NO_PAD.encode(payload))
}

#[test]
fn expired_when_exp_in_past() {
    let token = token_with_payload(r#"{"sub":"a@b.com","exp":1000}"#);
    assert!(is_expired_at(&token, 2000));
}

#[test]
fn valid_when_exp_in_future() {
    let token = token_with_payload(r#"{"sub":"a@b.com","exp":2000}"#);
    assert!(!is_expired_at(&token, 1000));
}

#[test]
fn exact_expiry_second_is_still_valid() {
    let token = token_with_payload(r#"{"exp":1000}"#);
    assert!(!is_expired_at(&token, 1000));
}

#[test]
fn expired_when_exp_claim_missing() {
    let token = token_with_payload(r#"{"sub":"a@b.com"}"#);
    assert!(is_expired_at(&token, 0));
}

#[test]
fn expired_when_payload_is_not_json() {
    let token = token_with_payload("not json at all");
    assert!(is_expired_at(&token, 0));
}

#[test]
fn expired_when_payload_is_not_base64() {
    assert!(is_expired_at("header.???.sig", 0));
}

#[test]
fn expired_when_not_jwt_shaped() {
    assert!(is_expired_at("garbage", 0));
    assert!(is_expired_at("", 0));
}

#[test]
fn claims_expiry_reads_the_exp_claim() {
    let token = token_with_payload(r#"{"exp":4102444800}"#);
    assert_eq!(claims_expiry(&token), Some(4_102_444_800));
}

#[test]
fn memory_store_round_trips() {
    let store = MemoryTokenStore::default();
    assert!(store.load().is_none());
    store.save("abc");
    assert_eq!(store.load().as_deref(), Some("abc"));
    store.clear();
    assert!(store.load().is_none());
}

#[test]
fn shared_store_handles_write_through() {
    let store = Rc::new(MemoryTokenStore::default());
    let handle = store.clone();
    handle.save("abc");
    assert_eq!(store.load().as_deref(), Some("abc"));
}

#[test]
fn browser_store_is_inert_without_a_browser() {
    let store = BrowserTokenStore;
    store.save("abc");
    assert!(store.load().is_none());
    store.clear();
}
