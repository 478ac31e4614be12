//! Access-token renewal.
//!
//! Exchanges the stored refresh token for a new access token and writes
//! the result back through the auth state. Deliberately does NOT
//! deduplicate concurrent calls: two views discovering an expired access
//! token on the same navigation each issue their own refresh request,
//! which the server tolerates within a short window. See DESIGN.md.

#[cfg(test)]
#[path = "renew_test.rs"]
mod renew_test;

use leptos::prelude::*;

use crate::net::api;
use crate::net::error::ApiError;
use crate::state::auth::AuthState;
use crate::state::modal::ModalState;
use crate::util::storage::{self, TokenKind};
use crate::util::token;

/// The stored refresh token, if any. Checked before any network call.
fn stored_refresh() -> Option<String> {
    storage::token(TokenKind::Refresh)
}

/// Write a renewed access token, leaving the refresh token and tab flags
/// untouched.
pub(crate) fn apply_renewal(state: &mut AuthState, new_access: &str) {
    storage::set_token(TokenKind::Access, new_access);
    state.logged_in = true;
    state.resolving = false;
    state.user_id = token::subject_of(new_access);
}

/// Renew the access token using the stored refresh token.
///
/// Fails fast with [`ApiError::NoRefreshToken`] when none is stored. A
/// rejected refresh token opens the forced session-expired dialog and
/// returns [`ApiError::RefreshRejected`]; transient failures propagate
/// without touching the modal so the caller decides how to surface them.
/// On success the new access token is both stored and returned for
/// immediate reuse.
pub async fn renew(
    auth: RwSignal<AuthState>,
    modal: RwSignal<ModalState>,
) -> Result<String, ApiError> {
    let Some(refresh_token) = stored_refresh() else {
        return Err(ApiError::NoRefreshToken);
    };

    match api::refresh(&refresh_token).await {
        Ok(new_access) => {
            auth.update(|state| apply_renewal(state, &new_access));
            Ok(new_access)
        }
        Err(ApiError::RefreshRejected) => {
            leptos::logging::warn!("refresh token rejected; prompting re-login");
            modal.update(ModalState::open_session_expired);
            Err(ApiError::RefreshRejected)
        }
        Err(e) => Err(e),
    }
}
