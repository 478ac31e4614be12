//! The notification gate: at most one interruption dialog at a time.
//!
//! Confirm behavior is carried as a [`ModalAction`] value rather than a
//! stored closure; the modal host component executes the action. That
//! keeps this state plain data and the single-modal invariant testable.

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

/// What pressing the confirm button does.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModalAction {
    #[default]
    None,
    /// Navigate to the login page.
    GoToLogin,
    /// Clear credentials, then navigate to the login page.
    EndSessionThenLogin,
    /// Navigate back to the exam list.
    GoToExams,
}

/// Process-wide modal state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModalState {
    pub is_open: bool,
    pub title: String,
    pub message: String,
    pub confirm_label: String,
    pub cancel_label: Option<String>,
    pub action: ModalAction,
    /// Forced-choice dialogs render no cancel/dismiss affordance; only
    /// confirm can close them.
    pub forced: bool,
    pub confirm_pending: bool,
}

impl ModalState {
    /// Open the dialog. Silent no-op while one is already open.
    #[allow(clippy::too_many_arguments)]
    pub fn open_with(
        &mut self,
        title: &str,
        message: &str,
        confirm_label: &str,
        cancel_label: Option<&str>,
        action: ModalAction,
        forced: bool,
    ) {
        if self.is_open {
            return;
        }
        self.title = title.to_owned();
        self.message = message.to_owned();
        self.confirm_label = confirm_label.to_owned();
        self.cancel_label = cancel_label.map(ToOwned::to_owned);
        self.action = action;
        self.forced = forced;
        self.confirm_pending = false;
        self.is_open = true;
    }

    /// Reset every field to the closed state. Runs no callback.
    pub fn close(&mut self) {
        *self = Self::default();
    }

    /// Forced dialog shown when a tab that never logged in hits a
    /// protected route.
    pub fn open_auth_required(&mut self) {
        self.open_with(
            "Authentication Required",
            "Please log in to access this page.",
            "Go to Login",
            None,
            ModalAction::GoToLogin,
            true,
        );
    }

    /// Forced dialog shown when stored credentials can no longer be
    /// validated or renewed.
    pub fn open_session_expired(&mut self) {
        self.open_with(
            "Session Expired",
            "Your session has expired. Please log in again.",
            "Go to Login",
            None,
            ModalAction::EndSessionThenLogin,
            true,
        );
    }

    /// Forced dialog shown when a logged-in user navigates to an
    /// auth-entry page outside a just-completed login.
    pub fn open_access_restricted(&mut self) {
        self.open_with(
            "Access Restricted",
            "You are already logged in.",
            "Back to Exams",
            None,
            ModalAction::GoToExams,
            true,
        );
    }

    /// Forced dialog shown when an authenticated user opens a resource
    /// that belongs to another subject.
    pub fn open_access_denied(&mut self) {
        self.open_with(
            "Access Denied",
            "You do not have permission to access this page.",
            "Back to Exams",
            None,
            ModalAction::GoToExams,
            true,
        );
    }
}
