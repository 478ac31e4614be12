//! HTTP layer: the remote auth/exam contract and the wrappers around it.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors since these endpoints are
//! only meaningful in the browser.

pub mod api;
pub mod authed;
pub mod error;
pub mod renew;
pub mod types;
