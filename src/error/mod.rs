//! Error types for validation failures.
//!
//! This module provides [`ConstraintError`] for a single failed constraint and
//! [`MapError`] for the per-index failures of a slice validation. Both render
//! to a stable JSON shape through their `Display` implementations.

mod constraint_error;
mod map_error;

pub use constraint_error::{ArgValue, Args, ConstraintError};
pub use map_error::MapError;

/// Renders a serializable error value as compact JSON.
pub(crate) fn write_json<T: serde::Serialize>(
    value: &T,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    let json = serde_json::to_string(value).map_err(|_| std::fmt::Error)?;
    f.write_str(&json)
}
