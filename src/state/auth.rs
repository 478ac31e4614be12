//! Authentication state and its controller.
//!
//! The controller is the only writer of [`AuthState`] and the only
//! component that moves credentials between storage and state. It always
//! resolves to a definite state: token-decode failures are treated as
//! "invalid", never escalated, so `resolving` cannot stick.
//!
//! The `*_into` functions operate on `&mut AuthState` plus the credential
//! store and carry all of the semantics; the signal wrappers below them
//! are what components call.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::util::storage::{self, Flag, TokenKind};
use crate::util::token;

/// Process-wide authentication state.
///
/// `resolving` is true only until the first validation pass after mount
/// or navigation; protected content must not render while it is set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub logged_in: bool,
    pub resolving: bool,
    pub user_id: Option<i64>,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { logged_in: false, resolving: true, user_id: None }
    }
}

/// Re-derive authentication state from stored credentials.
///
/// A valid access token yields the authenticated state with its subject
/// id. An invalid or missing one clears the stored access token and
/// yields unauthenticated. A stored refresh token that is itself expired
/// is deleted so it is never presented to the renewal endpoint.
pub fn validate_into(state: &mut AuthState) {
    let now = token::now_unix();

    match storage::token(TokenKind::Access) {
        Some(access) if token::is_valid_at(&access, now) => {
            state.logged_in = true;
            state.user_id = token::subject_of(&access);
        }
        Some(_) => {
            storage::clear_token(TokenKind::Access);
            state.logged_in = false;
            state.user_id = None;
        }
        None => {
            state.logged_in = false;
            state.user_id = None;
        }
    }

    if let Some(refresh) = storage::token(TokenKind::Refresh) {
        if !token::is_valid_at(&refresh, now) {
            storage::clear_token(TokenKind::Refresh);
        }
    }

    state.resolving = false;
}

/// Store both tokens and enter the authenticated state.
///
/// Raises the one-shot `justLoggedIn` flag so the navigation that follows
/// a fresh login is not mistaken for a stale-session violation, and the
/// tab-scoped session marker used for the expired-session wording.
pub fn login_into(state: &mut AuthState, access: &str, refresh: &str) {
    storage::set_token(TokenKind::Access, access);
    storage::set_token(TokenKind::Refresh, refresh);
    storage::set_flag(Flag::JustLoggedIn);
    storage::set_flag(Flag::SeenSession);
    state.logged_in = true;
    state.resolving = false;
    state.user_id = token::subject_of(access);
}

/// Clear both tokens and reset to unauthenticated. Purely local.
pub fn logout_into(state: &mut AuthState) {
    storage::clear_tokens();
    state.logged_in = false;
    state.resolving = false;
    state.user_id = None;
}

/// Re-validate the shared auth signal (run on mount and on route change).
pub fn validate(auth: RwSignal<AuthState>) {
    auth.update(validate_into);
}

/// Log the shared auth signal in with a fresh credential pair.
pub fn login(auth: RwSignal<AuthState>, access: &str, refresh: &str) {
    auth.update(|state| login_into(state, access, refresh));
}

/// Log the shared auth signal out.
pub fn logout(auth: RwSignal<AuthState>) {
    auth.update(logout_into);
}
