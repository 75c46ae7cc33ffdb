//! # param-guard
//!
//! Guard clauses for function arguments: fail fast with an error that names
//! the offending parameter.
//!
//! ## Quick Start
//!
//! ```rust
//! use param_guard::prelude::*;
//!
//! fn resize(pixels: Option<&[u8]>, width: u32) -> GuardResult {
//!     let pixels = require_non_null_or_empty(pixels, "pixels", None)?;
//!     require(&width, "width", |w| *w > 0, Some("width must be positive"))?;
//!     reject(pixels, "pixels", |p| p.len() % 4 != 0, None)?;
//!     Ok(())
//! }
//!
//! assert!(resize(Some(&[0u8; 16][..]), 2).is_ok());
//!
//! let error = resize(None, 2).unwrap_err();
//! assert!(error.is_null());
//! assert_eq!(
//!     error.message(),
//!     "Parameter [pixels] cannot be a null or empty collection."
//! );
//! ```
//!
//! ## Guards
//!
//! - [`require_non_null`] — the value must be `Some`
//! - [`require_non_null_or_empty`] — a string or collection must be present
//!   and non-empty
//! - [`require_non_empty_iter`] — a lazy sequence must yield at least one item
//! - [`require`] / [`reject`] — a caller-supplied predicate must / must not hold
//!
//! Every guard also has a macro form ([`require_non_null!`], ...) that
//! names the parameter after the checked expression.
//!
//! ## Errors
//!
//! All guards return [`GuardResult`]. [`ArgumentError::Null`] means a
//! required value was absent, or the guard itself was called with an empty
//! parameter name or message; [`ArgumentError::Invalid`] means a present
//! value was rejected.
//!
//! ## Features
//!
//! - `serde` — `Serialize` for [`ArgumentError`]
//! - `tracing` — a `debug` event for every failed guard

pub mod empty;
pub mod error;
pub mod guard;
mod macros;
pub mod prelude;

pub use empty::{MaybeEmpty, Shape};
pub use error::{ArgumentError, ArgumentErrorKind, GuardResult};
pub use guard::{
    reject, require, require_non_empty_iter, require_non_null, require_non_null_or_empty,
};
