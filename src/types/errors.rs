//! Check failure types.
//!
//! All errors use `thiserror` for automatic Error trait derivation. The set
//! of failure kinds is closed: either a required reference was absent, or a
//! present value failed a content test. Nothing here is ever caught or
//! recovered inside the crate; failures propagate to the caller unchanged.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Check result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Failure raised by a precondition check.
///
/// The attached message, when present, is the caller-supplied annotation
/// rendered to text at the check site.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Error {
    /// A required reference was absent.
    #[error("null reference{}", detail(.0))]
    NullReference(Option<String>),

    /// A present value failed a content check, or an asserted condition
    /// was false.
    #[error("invalid argument{}", detail(.0))]
    InvalidArgument(Option<String>),
}

fn detail(message: &Option<String>) -> String {
    match message {
        Some(m) => format!(": {m}"),
        None => String::new(),
    }
}

// Convenience constructors
impl Error {
    pub fn null_reference(msg: impl Into<String>) -> Self {
        Self::NullReference(Some(msg.into()))
    }

    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(Some(msg.into()))
    }

    /// Message attached at the check site, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::NullReference(msg) | Self::InvalidArgument(msg) => msg.as_deref(),
        }
    }
}
