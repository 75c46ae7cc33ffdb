//! Guard clauses for function arguments.
//!
//! Every guard first checks its own arguments: the parameter name must be
//! non-empty, and a caller-supplied message must be non-empty. Misuse is
//! reported as [`ArgumentError::Null`] naming `name` or `message`, so a
//! broken guard call is never confused with a bad argument. The name is
//! checked before the message.
//!
//! Passing `None` as the message selects the guard's default message.
//!
//! # Examples
//!
//! ```rust
//! use param_guard::guard::{reject, require_non_null, require_non_null_or_empty};
//! use param_guard::GuardResult;
//!
//! fn connect(host: Option<&str>, port: u16) -> GuardResult {
//!     let host = require_non_null(host, "host", None)?;
//!     require_non_null_or_empty(Some(host), "host", None)?;
//!     reject(&port, "port", |p| *p == 0, Some("port must be non-zero"))?;
//!     Ok(())
//! }
//!
//! assert!(connect(Some("localhost"), 8080).is_ok());
//! assert!(connect(None, 8080).unwrap_err().is_null());
//! assert!(connect(Some(""), 8080).unwrap_err().is_invalid());
//! assert!(connect(Some("localhost"), 0).unwrap_err().is_invalid());
//! ```

use std::iter::Peekable;

use crate::empty::MaybeEmpty;
use crate::error::{ArgumentError, GuardResult};

const NAME_PARAMETER: &str = "name";
const MESSAGE_PARAMETER: &str = "message";

// ============================================================================
// SELF-VALIDATION
// ============================================================================

/// Checks the guard's own `name` and `message` arguments.
fn check_call(name: &str, message: Option<&str>) -> GuardResult {
    if name.is_empty() {
        return Err(fail(ArgumentError::null(
            NAME_PARAMETER,
            "name was not provided when validating parameter",
        )));
    }

    if message.is_some_and(str::is_empty) {
        return Err(fail(ArgumentError::null(
            MESSAGE_PARAMETER,
            format!("message was not provided when validating parameter [{name}]"),
        )));
    }

    Ok(())
}

/// Picks the caller's message, or builds the default one lazily.
fn message_or(message: Option<&str>, default: impl FnOnce() -> String) -> String {
    message.map_or_else(default, str::to_owned)
}

#[inline]
fn fail(error: ArgumentError) -> ArgumentError {
    #[cfg(feature = "tracing")]
    tracing::debug!(
        target: "param_guard",
        parameter = error.parameter(),
        code = error.code(),
        "argument guard failed"
    );

    error
}

// ============================================================================
// NULL CHECKS
// ============================================================================

/// Fails with [`ArgumentError::Null`] if `value` is `None`.
///
/// Returns the unwrapped value on success. Default message:
/// `"Parameter [<name>] cannot be null."`
///
/// Pass `value.as_ref()` to check an `Option` without consuming it.
pub fn require_non_null<T>(
    value: Option<T>,
    name: &str,
    message: Option<&str>,
) -> GuardResult<T> {
    check_call(name, message)?;

    value.ok_or_else(|| {
        fail(ArgumentError::null(
            name.to_owned(),
            message_or(message, || format!("Parameter [{name}] cannot be null.")),
        ))
    })
}

// ============================================================================
// EMPTINESS CHECKS
// ============================================================================

/// Fails with [`ArgumentError::Null`] if `value` is `None`, or with
/// [`ArgumentError::Invalid`] if it is empty.
///
/// Accepts any [`MaybeEmpty`] type: strings get the default message
/// `"Parameter [<name>] cannot be a null or empty string."`, collections get
/// `"Parameter [<name>] cannot be a null or empty collection."`. Only the
/// value's length is consulted; elements are never visited.
pub fn require_non_null_or_empty<'a, T>(
    value: Option<&'a T>,
    name: &str,
    message: Option<&str>,
) -> GuardResult<&'a T>
where
    T: MaybeEmpty + ?Sized,
{
    check_call(name, message)?;

    let default = || {
        format!(
            "Parameter [{name}] cannot be a null or empty {}.",
            T::SHAPE.noun()
        )
    };

    match value {
        None => Err(fail(ArgumentError::null(
            name.to_owned(),
            message_or(message, default),
        ))),
        Some(value) if value.is_empty() => Err(fail(ArgumentError::invalid(
            name.to_owned(),
            message_or(message, default),
        ))),
        Some(value) => Ok(value),
    }
}

/// Fails with [`ArgumentError::Null`] if `values` is `None`, or with
/// [`ArgumentError::Invalid`] if it yields no element.
///
/// For single-pass and lazy sequences. Exactly one element is pulled to
/// decide, and the returned [`Peekable`] still yields it, so the caller
/// sees the full sequence. Infinite iterators are fine. Default message:
/// `"Parameter [<name>] cannot be a null or empty collection."`
///
/// # Examples
///
/// ```rust
/// use param_guard::guard::require_non_empty_iter;
///
/// let lines = "a\nb".lines();
/// let lines = require_non_empty_iter(Some(lines), "lines", None).unwrap();
/// assert_eq!(lines.collect::<Vec<_>>(), ["a", "b"]);
/// ```
pub fn require_non_empty_iter<I>(
    values: Option<I>,
    name: &str,
    message: Option<&str>,
) -> GuardResult<Peekable<I::IntoIter>>
where
    I: IntoIterator,
{
    check_call(name, message)?;

    let default = || format!("Parameter [{name}] cannot be a null or empty collection.");

    let Some(values) = values else {
        return Err(fail(ArgumentError::null(
            name.to_owned(),
            message_or(message, default),
        )));
    };

    let mut values = values.into_iter().peekable();
    if values.peek().is_none() {
        return Err(fail(ArgumentError::invalid(
            name.to_owned(),
            message_or(message, default),
        )));
    }

    Ok(values)
}

// ============================================================================
// PREDICATE CHECKS
// ============================================================================

/// Fails with [`ArgumentError::Invalid`] if `predicate(value)` holds.
///
/// `predicate` describes the forbidden condition and is called at most once;
/// it is not called when the guard's own arguments are invalid. Default
/// message: `"<name> failed parameter validation."`
pub fn reject<T, F>(value: &T, name: &str, predicate: F, message: Option<&str>) -> GuardResult
where
    T: ?Sized,
    F: FnOnce(&T) -> bool,
{
    check_call(name, message)?;

    if predicate(value) {
        return Err(fail(ArgumentError::invalid(
            name.to_owned(),
            message_or(message, || format!("{name} failed parameter validation.")),
        )));
    }

    Ok(())
}

/// Fails with [`ArgumentError::Invalid`] unless `predicate(value)` holds.
///
/// The mirror image of [`reject`]: `predicate` describes the required
/// condition. Default message: `"<name> failed parameter validation."`
pub fn require<T, F>(value: &T, name: &str, predicate: F, message: Option<&str>) -> GuardResult
where
    T: ?Sized,
    F: FnOnce(&T) -> bool,
{
    reject(value, name, |v| !predicate(v), message)
}
