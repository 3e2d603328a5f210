use chrono::Utc;
use spotrec::management::{EXPIRY_MARGIN_SECS, TokenManager};
use spotrec::types::Token;

fn create_test_token(access_token: &str, expires_in: u64, age: u64) -> Token {
    Token {
        access_token: access_token.to_string(),
        expires_in,
        obtained_at: Utc::now().timestamp() as u64 - age,
    }
}

#[test]
fn test_empty_manager_has_no_token() {
    let manager = TokenManager::new();
    assert!(manager.valid_token().is_none());
    assert!(manager.current_token().is_none());
}

#[test]
fn test_fresh_token_is_valid() {
    let manager = TokenManager::with_token(create_test_token("fresh", 3600, 0));
    assert_eq!(manager.valid_token(), Some("fresh"));
}

#[test]
fn test_token_within_margin_is_stale() {
    // Expires in 100 seconds, which is inside the refresh margin
    let manager = TokenManager::with_token(create_test_token("old", 3600, 3500));
    assert!(EXPIRY_MARGIN_SECS > 100);
    assert!(manager.valid_token().is_none());
    assert!(manager.current_token().is_some());
}

#[test]
fn test_huge_lifetime_does_not_overflow() {
    let manager = TokenManager::with_token(create_test_token("forever", u64::MAX, 0));
    assert_eq!(manager.valid_token(), Some("forever"));
}

#[test]
fn test_store_and_invalidate() {
    let mut manager = TokenManager::new();
    manager.store(create_test_token("stored", 3600, 0));
    assert_eq!(manager.valid_token(), Some("stored"));

    manager.invalidate();
    assert!(manager.valid_token().is_none());
}
