use super::*;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

fn make_token(user_id: i64, exp: i64) -> String {
    let payload = URL_SAFE_NO_PAD.encode(
        serde_json::json!({ "user_id": user_id, "iat": 0, "exp": exp }).to_string(),
    );
    format!("hdr.{payload}.sig")
}

#[test]
fn stored_refresh_reads_the_refresh_slot() {
    assert_eq!(stored_refresh(), None);
    storage::set_token(TokenKind::Refresh, "rrr");
    assert_eq!(stored_refresh().as_deref(), Some("rrr"));
}

#[test]
fn apply_renewal_replaces_access_and_keeps_refresh() {
    let old_access = make_token(8, token::now_unix() - 10);
    let refresh = make_token(8, token::now_unix() + 3_600);
    storage::set_token(TokenKind::Access, &old_access);
    storage::set_token(TokenKind::Refresh, &refresh);

    let new_access = make_token(8, token::now_unix() + 900);
    let mut state = AuthState::default();
    apply_renewal(&mut state, &new_access);

    assert_eq!(storage::token(TokenKind::Access), Some(new_access));
    assert_ne!(storage::token(TokenKind::Access), Some(old_access));
    assert_eq!(storage::token(TokenKind::Refresh), Some(refresh));
}

#[test]
fn apply_renewal_authenticates_with_the_new_subject() {
    let new_access = make_token(23, token::now_unix() + 900);
    let mut state = AuthState::default();
    apply_renewal(&mut state, &new_access);

    assert!(state.logged_in);
    assert!(!state.resolving);
    assert_eq!(state.user_id, Some(23));
}

#[test]
fn expired_access_then_renewal_recovers_the_session() {
    // Access token 10 seconds stale, refresh token an hour out.
    storage::set_token(TokenKind::Access, &make_token(5, token::now_unix() - 10));
    storage::set_token(TokenKind::Refresh, &make_token(5, token::now_unix() + 3_600));

    let mut state = AuthState::default();
    crate::state::auth::validate_into(&mut state);
    assert!(!state.logged_in);
    assert_eq!(storage::token(TokenKind::Access), None);
    assert!(storage::token(TokenKind::Refresh).is_some());

    apply_renewal(&mut state, &make_token(5, token::now_unix() + 900));
    assert!(state.logged_in);
    assert_eq!(state.user_id, Some(5));
}
