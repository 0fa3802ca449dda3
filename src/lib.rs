//! # Preguard - Fail-Fast Precondition Checks
//!
//! Reusable argument-validation guards:
//! - Presence checks on optional values (`check_not_none`)
//! - Emptiness checks on strings (`check_not_empty`, `check_none_or_not_empty`)
//! - Boolean assertions on caller invariants (`check_argument`)
//! - Completeness checks on key/value pairs (`check_entry_fully_defined`)
//!
//! Every check hands its validated input back on success, so a call site can
//! validate and assign in a single expression:
//!
//! ```
//! use preguard::{check_not_empty, Result};
//!
//! struct TokenRequest {
//!     client_id: String,
//! }
//!
//! fn build_request(client_id: Option<String>) -> Result<TokenRequest> {
//!     Ok(TokenRequest {
//!         client_id: check_not_empty(client_id, "client_id must not be empty")?,
//!     })
//! }
//! ```
//!
//! Failures are one of two closed kinds: [`Error::NullReference`] for an
//! absent required reference, [`Error::InvalidArgument`] for a present value
//! that fails a content test. A failing check aborts the caller's operation
//! through `?`; nothing is retried or recovered here.

// Enforce strict safety at compile time
#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]
#![warn(rust_2018_idioms)]

// Re-export public API
pub mod check;
pub mod types;

pub use check::{
    check_argument, check_argument_msg, check_entry_fully_defined, check_none_or_not_empty,
    check_not_empty, check_not_none, check_not_none_msg,
};
pub use types::{Error, Result};
