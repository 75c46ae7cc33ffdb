//! Error type returned by every guard.
//!
//! A failed guard produces an [`ArgumentError`] that names the offending
//! parameter and carries a human-readable message. There are exactly two
//! kinds of failure:
//!
//! - [`ArgumentError::Null`] — a required value was absent, or the guard
//!   itself was called with an empty parameter name or message.
//! - [`ArgumentError::Invalid`] — a present value failed a predicate or
//!   emptiness check.
//!
//! String fields use `Cow<'static, str>` so static names and messages never
//! allocate.

use std::borrow::Cow;

// ============================================================================
// ERROR KIND
// ============================================================================

/// Discriminant of an [`ArgumentError`], for matching without the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ArgumentErrorKind {
    /// A required value was absent.
    Null,
    /// A present value was rejected.
    Invalid,
}

impl ArgumentErrorKind {
    /// Stable error code for programmatic handling.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Null => "null_argument",
            Self::Invalid => "invalid_argument",
        }
    }
}

// ============================================================================
// ARGUMENT ERROR
// ============================================================================

/// A violated precondition on a function argument.
///
/// # Examples
///
/// ```rust
/// use param_guard::ArgumentError;
///
/// let error = ArgumentError::invalid("port", "port must be non-zero");
/// assert_eq!(error.parameter(), "port");
/// assert_eq!(error.to_string(), "port must be non-zero (Parameter 'port')");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum ArgumentError {
    /// A required value was absent.
    #[error("{message} (Parameter '{parameter}')")]
    Null {
        /// Name of the offending parameter.
        parameter: Cow<'static, str>,
        /// Human-readable explanation.
        message: Cow<'static, str>,
    },

    /// A present value failed validation.
    #[error("{message} (Parameter '{parameter}')")]
    Invalid {
        /// Name of the offending parameter.
        parameter: Cow<'static, str>,
        /// Human-readable explanation.
        message: Cow<'static, str>,
    },
}

impl ArgumentError {
    /// Creates a [`Null`](Self::Null) error.
    pub fn null(
        parameter: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::Null {
            parameter: parameter.into(),
            message: message.into(),
        }
    }

    /// Creates an [`Invalid`](Self::Invalid) error.
    pub fn invalid(
        parameter: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::Invalid {
            parameter: parameter.into(),
            message: message.into(),
        }
    }

    /// Name of the parameter that violated the guard.
    #[must_use]
    pub fn parameter(&self) -> &str {
        match self {
            Self::Null { parameter, .. } | Self::Invalid { parameter, .. } => parameter,
        }
    }

    /// The explanation, without the parameter suffix added by `Display`.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Null { message, .. } | Self::Invalid { message, .. } => message,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> ArgumentErrorKind {
        match self {
            Self::Null { .. } => ArgumentErrorKind::Null,
            Self::Invalid { .. } => ArgumentErrorKind::Invalid,
        }
    }

    /// Stable error code: `"null_argument"` or `"invalid_argument"`.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        self.kind().code()
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null { .. })
    }

    #[must_use]
    pub const fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid { .. })
    }

    /// Converts the error to a JSON object with `kind`, `code`, `parameter`
    /// and `message` keys.
    #[cfg(feature = "serde")]
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "kind": self.kind(),
            "code": self.code(),
            "parameter": self.parameter(),
            "message": self.message(),
        })
    }
}

/// Result of a guard call.
pub type GuardResult<T = ()> = Result<T, ArgumentError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_constructor_sets_kind_and_fields() {
        let error = ArgumentError::null("config", "Parameter [config] cannot be null.");
        assert!(error.is_null());
        assert!(!error.is_invalid());
        assert_eq!(error.kind(), ArgumentErrorKind::Null);
        assert_eq!(error.parameter(), "config");
        assert_eq!(error.message(), "Parameter [config] cannot be null.");
        assert_eq!(error.code(), "null_argument");
    }

    #[test]
    fn invalid_constructor_accepts_owned_strings() {
        let name = String::from("retries");
        let error =
            ArgumentError::invalid(name.clone(), format!("{name} failed parameter validation."));
        assert!(error.is_invalid());
        assert_eq!(error.parameter(), "retries");
        assert_eq!(error.code(), "invalid_argument");
    }

    #[test]
    fn display_appends_parameter() {
        let error = ArgumentError::invalid("x", "x failed parameter validation.");
        assert_eq!(
            error.to_string(),
            "x failed parameter validation. (Parameter 'x')"
        );
    }

    #[test]
    fn error_is_send_sync_static() {
        fn assert_bounds<T: std::error::Error + Send + Sync + 'static>() {}
        assert_bounds::<ArgumentError>();
    }

    #[cfg(feature = "serde")]
    #[test]
    fn json_value_carries_all_fields() {
        let error =
            ArgumentError::null("name", "name was not provided when validating parameter");
        let value = error.to_json_value();
        assert_eq!(value["kind"], "null");
        assert_eq!(value["code"], "null_argument");
        assert_eq!(value["parameter"], "name");
    }
}
