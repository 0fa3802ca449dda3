//! Core types for the preguard crate.
//!
//! - **Errors**: the closed set of check failures with thiserror derives

mod errors;

pub use errors::{Error, Result};
