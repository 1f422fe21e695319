//! # Vetter
//!
//! A small declarative validation toolkit: build a chain of constraints for
//! an integer, float or string, evaluate it against a value, and get either
//! success or one structured, machine-readable failure.
//!
//! ## Overview
//!
//! A scalar validator is fail-fast: constraints run in the order they were
//! declared and evaluation stops at the first one that fails. The slice
//! aggregator inverts this for collections: every element is checked and the
//! failures are collected per index, so the caller sees every invalid element
//! at once.
//!
//! ## Core Types
//!
//! - [`Validator`]: a shareable check from a value to an optional [`ConstraintError`]
//! - [`Composer`]: an ordered chain of validators that resolves into one [`Validator`]
//! - [`Schema`]: entry point for the typed builders ([`NumberSchema`], [`StringSchema`])
//! - [`ConstraintError`]: a failed constraint with its identifier, message and arguments
//! - [`MapError`]: the per-index failures of a slice validation
//!
//! ## Example
//!
//! ```rust
//! use vetter::{slice_of, Schema};
//!
//! let validator = Schema::string().not_blank().len(4, 20).email().compose();
//!
//! assert!(validator.validate("bob@mail.com").is_ok());
//!
//! let error = validator.validate("bob").unwrap_err();
//! assert_eq!(error.constraint(), "string_len");
//!
//! let errors = slice_of(&["bob@mail.com", ""]).with(&validator).unwrap();
//! assert_eq!(errors.get(1).unwrap().constraint(), "string_not_blank");
//! ```

pub mod constraint;
pub mod error;
pub mod schema;
pub mod slice;
pub mod validation;

pub use error::{ArgValue, Args, ConstraintError, MapError};
pub use schema::{
    float, int, string, Float, FloatSchema, Integer, IntegerSchema, Number, NumberSchema, Schema,
    StringSchema,
};
pub use slice::{slice_of, SliceOf};
pub use validation::{Composer, Validator};

/// Type alias for slice validation results using MapError
pub type ValidationResult<T> = stillwater::Validation<T, MapError>;
