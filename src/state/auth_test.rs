use super::*;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

fn make_token(user_id: i64, exp: i64) -> String {
    let payload = URL_SAFE_NO_PAD.encode(
        serde_json::json!({ "user_id": user_id, "iat": 0, "exp": exp }).to_string(),
    );
    format!("hdr.{payload}.sig")
}

fn fresh_token(user_id: i64) -> String {
    make_token(user_id, token::now_unix() + 3_600)
}

fn expired_token(user_id: i64) -> String {
    make_token(user_id, token::now_unix() - 10)
}

// =============================================================
// defaults
// =============================================================

#[test]
fn auth_state_defaults_to_resolving() {
    let state = AuthState::default();
    assert!(state.resolving);
    assert!(!state.logged_in);
    assert_eq!(state.user_id, None);
}

// =============================================================
// validate
// =============================================================

#[test]
fn validate_with_empty_store_resolves_unauthenticated() {
    let mut state = AuthState::default();
    validate_into(&mut state);
    assert!(!state.resolving);
    assert!(!state.logged_in);
    assert_eq!(state.user_id, None);
}

#[test]
fn validate_with_valid_access_token_authenticates() {
    storage::set_token(TokenKind::Access, &fresh_token(42));
    let mut state = AuthState::default();
    validate_into(&mut state);
    assert!(state.logged_in);
    assert_eq!(state.user_id, Some(42));
    assert!(!state.resolving);
}

#[test]
fn validate_clears_expired_access_token() {
    storage::set_token(TokenKind::Access, &expired_token(42));
    let mut state = AuthState::default();
    validate_into(&mut state);
    assert!(!state.logged_in);
    assert_eq!(state.user_id, None);
    assert_eq!(storage::token(TokenKind::Access), None);
}

#[test]
fn validate_clears_undecodable_access_token() {
    storage::set_token(TokenKind::Access, "not-a-jwt");
    let mut state = AuthState::default();
    validate_into(&mut state);
    assert!(!state.logged_in);
    assert_eq!(storage::token(TokenKind::Access), None);
}

#[test]
fn validate_keeps_valid_refresh_token() {
    storage::set_token(TokenKind::Access, &expired_token(1));
    storage::set_token(TokenKind::Refresh, &fresh_token(1));
    let mut state = AuthState::default();
    validate_into(&mut state);
    assert!(!state.logged_in);
    assert!(storage::token(TokenKind::Refresh).is_some());
}

#[test]
fn validate_clears_expired_refresh_token() {
    storage::set_token(TokenKind::Refresh, &expired_token(1));
    let mut state = AuthState::default();
    validate_into(&mut state);
    assert_eq!(storage::token(TokenKind::Refresh), None);
}

#[test]
fn validate_is_idempotent_with_unchanged_storage() {
    storage::set_token(TokenKind::Access, &fresh_token(9));
    let mut first = AuthState::default();
    validate_into(&mut first);
    let mut second = first;
    validate_into(&mut second);
    assert_eq!(first, second);
}

// =============================================================
// login
// =============================================================

#[test]
fn login_stores_both_tokens_and_authenticates() {
    let access = fresh_token(5);
    let refresh = fresh_token(5);
    let mut state = AuthState::default();
    login_into(&mut state, &access, &refresh);

    assert!(state.logged_in);
    assert!(!state.resolving);
    assert_eq!(state.user_id, Some(5));
    assert_eq!(storage::token(TokenKind::Access), Some(access));
    assert_eq!(storage::token(TokenKind::Refresh), Some(refresh));
}

#[test]
fn login_raises_one_shot_and_session_flags() {
    let mut state = AuthState::default();
    login_into(&mut state, &fresh_token(5), &fresh_token(5));
    assert!(storage::flag_is_set(Flag::SeenSession));
    assert!(storage::take_flag(Flag::JustLoggedIn));
    assert!(!storage::take_flag(Flag::JustLoggedIn));
}

// =============================================================
// logout
// =============================================================

#[test]
fn logout_is_total() {
    let mut state = AuthState::default();
    login_into(&mut state, &fresh_token(5), &fresh_token(5));
    logout_into(&mut state);

    assert_eq!(storage::token(TokenKind::Access), None);
    assert_eq!(storage::token(TokenKind::Refresh), None);
    assert!(!state.logged_in);
    assert!(!state.resolving);
    assert_eq!(state.user_id, None);
}

#[test]
fn logout_from_clean_state_is_harmless() {
    let mut state = AuthState::default();
    logout_into(&mut state);
    assert!(!state.logged_in);
    assert_eq!(state.user_id, None);
}
