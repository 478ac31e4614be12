//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Each process-wide singleton (auth, modal, toasts) is a plain struct
//! held in an `RwSignal` provided via context by `App`. Mutation goes
//! through the writer functions in these modules; components hold
//! read-only projections. The guard decision procedure is a pure function
//! so the whole navigation table is testable without a browser.

pub mod auth;
pub mod guard;
pub mod modal;
pub mod toast;
