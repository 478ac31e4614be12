use super::*;

// Each test runs on its own thread, so the thread-local fallback maps
// start empty per test.

// =============================================================
// tokens
// =============================================================

#[test]
fn tokens_start_absent() {
    assert_eq!(token(TokenKind::Access), None);
    assert_eq!(token(TokenKind::Refresh), None);
}

#[test]
fn set_token_is_readable_and_kind_scoped() {
    set_token(TokenKind::Access, "aaa");
    assert_eq!(token(TokenKind::Access).as_deref(), Some("aaa"));
    assert_eq!(token(TokenKind::Refresh), None);
}

#[test]
fn set_token_replaces_previous_value() {
    set_token(TokenKind::Access, "old");
    set_token(TokenKind::Access, "new");
    assert_eq!(token(TokenKind::Access).as_deref(), Some("new"));
}

#[test]
fn clear_token_removes_only_that_kind() {
    set_token(TokenKind::Access, "aaa");
    set_token(TokenKind::Refresh, "rrr");
    clear_token(TokenKind::Access);
    assert_eq!(token(TokenKind::Access), None);
    assert_eq!(token(TokenKind::Refresh).as_deref(), Some("rrr"));
}

#[test]
fn clear_tokens_removes_both() {
    set_token(TokenKind::Access, "aaa");
    set_token(TokenKind::Refresh, "rrr");
    clear_tokens();
    assert_eq!(token(TokenKind::Access), None);
    assert_eq!(token(TokenKind::Refresh), None);
}

// =============================================================
// flags
// =============================================================

#[test]
fn take_flag_is_false_when_never_set() {
    assert!(!take_flag(Flag::JustLoggedIn));
}

#[test]
fn take_flag_consumes_on_read() {
    set_flag(Flag::JustLoggedIn);
    assert!(take_flag(Flag::JustLoggedIn));
    assert!(!take_flag(Flag::JustLoggedIn));
}

#[test]
fn flag_is_set_does_not_consume() {
    set_flag(Flag::SeenSession);
    assert!(flag_is_set(Flag::SeenSession));
    assert!(flag_is_set(Flag::SeenSession));
}

#[test]
fn flags_are_independent() {
    set_flag(Flag::JustRegistered);
    assert!(!take_flag(Flag::JustLoggedIn));
    assert!(take_flag(Flag::JustRegistered));
}
