//! Name-capturing guard macros.
//!
//! Each macro passes `stringify!` of the checked expression as the
//! parameter name, so `require_non_null!(config)` reports `config` without
//! repeating it. An optional trailing argument supplies a custom message.
//!
//! # Available Macros
//!
//! - [`require_non_null!`] — [`require_non_null`](crate::guard::require_non_null)
//! - [`require_non_null_or_empty!`] —
//!   [`require_non_null_or_empty`](crate::guard::require_non_null_or_empty)
//! - [`require!`] — [`require`](crate::guard::require)
//! - [`reject!`] — [`reject`](crate::guard::reject)
//!
//! # Examples
//!
//! ```rust
//! use param_guard::{reject, require_non_null, GuardResult};
//!
//! fn scale(factor: Option<f64>) -> GuardResult<f64> {
//!     let factor = require_non_null!(factor)?;
//!     reject!(factor, |f: &f64| f.is_nan(), "factor must be a number")?;
//!     Ok(factor * 2.0)
//! }
//!
//! let error = scale(None).unwrap_err();
//! assert_eq!(error.parameter(), "factor");
//! assert_eq!(scale(Some(1.5)), Ok(3.0));
//! ```

/// Checks that an `Option` is `Some`, naming the parameter after the
/// expression. Evaluates to `GuardResult<T>`.
///
/// ```rust
/// use param_guard::require_non_null;
///
/// let port: Option<u16> = None;
/// let error = require_non_null!(port).unwrap_err();
/// assert_eq!(error.message(), "Parameter [port] cannot be null.");
///
/// let error = require_non_null!(port, "a port is required").unwrap_err();
/// assert_eq!(error.message(), "a port is required");
/// ```
#[macro_export]
macro_rules! require_non_null {
    ($value:expr $(,)?) => {
        $crate::guard::require_non_null(
            $value,
            ::core::stringify!($value),
            ::core::option::Option::None,
        )
    };
    ($value:expr, $message:expr $(,)?) => {
        $crate::guard::require_non_null(
            $value,
            ::core::stringify!($value),
            ::core::option::Option::Some($message),
        )
    };
}

/// Checks that a string or collection is neither absent nor empty.
///
/// Accepts either an `Option<&T>` or a plain reference; a plain reference
/// can only fail the emptiness check. Evaluates to `GuardResult<&T>`.
///
/// ```rust
/// use param_guard::require_non_null_or_empty;
///
/// let tags: Vec<String> = Vec::new();
/// let error = require_non_null_or_empty!(&tags).unwrap_err();
/// assert_eq!(error.parameter(), "&tags");
/// assert!(error.is_invalid());
/// ```
#[macro_export]
macro_rules! require_non_null_or_empty {
    ($value:expr $(,)?) => {
        $crate::guard::require_non_null_or_empty(
            ::core::convert::Into::<::core::option::Option<_>>::into($value),
            ::core::stringify!($value),
            ::core::option::Option::None,
        )
    };
    ($value:expr, $message:expr $(,)?) => {
        $crate::guard::require_non_null_or_empty(
            ::core::convert::Into::<::core::option::Option<_>>::into($value),
            ::core::stringify!($value),
            ::core::option::Option::Some($message),
        )
    };
}

/// Checks that a predicate holds for a value.
///
/// The value is borrowed; the predicate receives `&T`.
///
/// ```rust
/// use param_guard::require;
///
/// let retries = 0u32;
/// let error = require!(retries, |r: &u32| *r > 0).unwrap_err();
/// assert_eq!(error.message(), "retries failed parameter validation.");
/// ```
#[macro_export]
macro_rules! require {
    ($value:expr, $predicate:expr $(,)?) => {
        $crate::guard::require(
            &$value,
            ::core::stringify!($value),
            $predicate,
            ::core::option::Option::None,
        )
    };
    ($value:expr, $predicate:expr, $message:expr $(,)?) => {
        $crate::guard::require(
            &$value,
            ::core::stringify!($value),
            $predicate,
            ::core::option::Option::Some($message),
        )
    };
}

/// Checks that a predicate does not hold for a value.
///
/// ```rust
/// use param_guard::reject;
///
/// let path = "../etc/passwd";
/// assert!(reject!(path, |p: &&str| p.contains(".."), "path escapes root").is_err());
/// ```
#[macro_export]
macro_rules! reject {
    ($value:expr, $predicate:expr $(,)?) => {
        $crate::guard::reject(
            &$value,
            ::core::stringify!($value),
            $predicate,
            ::core::option::Option::None,
        )
    };
    ($value:expr, $predicate:expr, $message:expr $(,)?) => {
        $crate::guard::reject(
            &$value,
            ::core::stringify!($value),
            $predicate,
            ::core::option::Option::Some($message),
        )
    };
}

#[cfg(test)]
mod tests {
    #[test]
    fn require_non_null_captures_expression_text() {
        let config: Option<&str> = None;
        let error = require_non_null!(config).unwrap_err();
        assert_eq!(error.parameter(), "config");
    }

    #[test]
    fn require_non_null_or_empty_accepts_option_and_reference() {
        let name: Option<&str> = Some("");
        assert!(require_non_null_or_empty!(name).unwrap_err().is_invalid());

        let items = vec![1, 2];
        assert_eq!(require_non_null_or_empty!(&items), Ok(&items));
    }

    #[test]
    fn predicate_macros_forward_message() {
        let n = 3;
        let error = require!(n, |n: &i32| *n > 5, "n must exceed five").unwrap_err();
        assert_eq!(error.message(), "n must exceed five");
        assert!(reject!(n, |n: &i32| *n > 5).is_ok());
    }
}
