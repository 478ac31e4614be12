//! Reusable UI components.

pub mod modal;
pub mod navbar;
pub mod require_auth;
pub mod toast;
