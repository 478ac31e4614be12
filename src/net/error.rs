//! Error taxonomy for the network layer.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

/// Failures surfaced by API calls and the renewal service.
///
/// `RefreshRejected` is the only variant that raises the forced modal
/// (the renewal service does so before returning it); everything else is
/// the caller's to toast or ignore.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("unauthorized")]
    Unauthorized,
    #[error("server returned status {0}")]
    Status(u16),
    #[error("no refresh token stored")]
    NoRefreshToken,
    #[error("refresh token rejected")]
    RefreshRejected,
    #[error("malformed response: {0}")]
    Decode(String),
}

/// Whether a status code is an authorization rejection from the refresh
/// endpoint (the deployment answers 400 or 403; 401 is included for the
/// generic unauthorized case).
pub fn is_auth_rejection(status: u16) -> bool {
    matches!(status, 400 | 401 | 403)
}
