//! Prelude module for convenient imports.
//!
//! `use param_guard::prelude::*;` brings in every guard function and macro,
//! the error types, and the [`MaybeEmpty`] trait.

pub use crate::empty::{MaybeEmpty, Shape};
pub use crate::error::{ArgumentError, ArgumentErrorKind, GuardResult};

// Functions and their macro forms share names; one import brings in both.
pub use crate::{
    reject, require, require_non_empty_iter, require_non_null, require_non_null_or_empty,
};
