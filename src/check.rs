//! Precondition checks.
//!
//! Fail-fast guards over caller-supplied arguments. Absence is modeled with
//! `Option`: a `None` argument is the missing-reference case. On success a
//! check returns the validated value, moved out unchanged, so call sites can
//! validate and assign in one expression.
//!
//! Message parameters accept any `Display` value; the text is rendered only
//! on the failure path.

use std::fmt;

use crate::types::{Error, Result};

/// Ensure that a required reference is present.
///
/// Returns the inner value that was validated.
pub fn check_not_none<T>(value: Option<T>) -> Result<T> {
    match value {
        Some(v) => Ok(v),
        None => {
            tracing::debug!("check_not_none failed: required value absent");
            Err(Error::NullReference(None))
        }
    }
}

/// Ensure that a required reference is present, annotating the failure with
/// `message`.
///
/// Returns the inner value that was validated.
pub fn check_not_none_msg<T>(value: Option<T>, message: impl fmt::Display) -> Result<T> {
    match value {
        Some(v) => Ok(v),
        None => {
            let message = message.to_string();
            tracing::debug!("check_not_none failed: {}", message);
            Err(Error::null_reference(message))
        }
    }
}

/// Ensure that a string is present and non-empty.
///
/// An absent string fails the same way an empty one does: both are content
/// failures, not missing references.
pub fn check_not_empty<S: AsRef<str>>(value: Option<S>, message: impl fmt::Display) -> Result<S> {
    match value {
        Some(s) if !s.as_ref().is_empty() => Ok(s),
        _ => {
            let message = message.to_string();
            tracing::debug!("check_not_empty failed: {}", message);
            Err(Error::invalid_argument(message))
        }
    }
}

/// Ensure that a string is either absent or non-empty.
///
/// `None` is accepted and passed through; only a present, empty string fails.
pub fn check_none_or_not_empty<S: AsRef<str>>(
    value: Option<S>,
    message: impl fmt::Display,
) -> Result<Option<S>> {
    match value {
        Some(s) => check_not_empty(Some(s), message).map(Some),
        None => Ok(None),
    }
}

/// Ensure the truth of a condition involving the caller's parameters.
pub fn check_argument(condition: bool) -> Result<()> {
    if !condition {
        tracing::debug!("check_argument failed");
        return Err(Error::InvalidArgument(None));
    }
    Ok(())
}

/// Ensure the truth of a condition involving the caller's parameters,
/// annotating the failure with `message`.
pub fn check_argument_msg(condition: bool, message: impl fmt::Display) -> Result<()> {
    if !condition {
        let message = message.to_string();
        tracing::debug!("check_argument failed: {}", message);
        return Err(Error::invalid_argument(message));
    }
    Ok(())
}

/// Ensure that a key/value pair has both components present.
///
/// The key is checked before the value. Returns the unwrapped pair.
pub fn check_entry_fully_defined<K, V>(
    entry: (Option<K>, Option<V>),
    message: impl fmt::Display,
) -> Result<(K, V)> {
    let (key, value) = entry;
    let message = message.to_string();
    let key = check_not_none_msg(key, &message)?;
    let value = check_not_none_msg(value, &message)?;
    Ok((key, value))
}
