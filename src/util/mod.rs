//! Low-level helpers with no UI dependencies.

pub mod storage;
pub mod token;
