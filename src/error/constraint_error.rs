//! Single constraint failure types.
//!
//! This module provides [`ConstraintError`], the one failure a scalar validator
//! can report, together with the [`Args`] map and [`ArgValue`] union that carry
//! the parameters of the failed constraint.

use std::fmt::{self, Display};

use indexmap::IndexMap;
use serde::Serialize;
use thiserror::Error;

use super::write_json;

/// A single argument value attached to a [`ConstraintError`].
///
/// The variants cover every shape a built-in constraint reports: integer and
/// floating bounds, string values and lists of choices. Values serialize
/// untagged, so `ArgValue::Int(3)` renders as `3` and
/// `ArgValue::List(..)` renders as a JSON array.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ArgValue {
    /// A signed integer.
    Int(i64),
    /// An unsigned integer.
    Uint(u64),
    /// A double-precision float.
    Float(f64),
    /// A single-precision float, kept narrow so it renders without widening noise.
    Float32(f32),
    /// A string.
    Str(String),
    /// A homogeneous list, used for choices.
    List(Vec<ArgValue>),
}

impl ArgValue {
    /// Returns the value as an `i64` if it is an integer that fits.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            ArgValue::Int(n) => Some(*n),
            ArgValue::Uint(n) => i64::try_from(*n).ok(),
            _ => None,
        }
    }

    /// Returns the value as an `f64` if it is numeric.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ArgValue::Int(n) => Some(*n as f64),
            ArgValue::Uint(n) => Some(*n as f64),
            ArgValue::Float(n) => Some(*n),
            ArgValue::Float32(n) => Some(f64::from(*n)),
            _ => None,
        }
    }

    /// Returns the value as a string slice if it is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ArgValue::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the list elements if the value is a list.
    pub fn as_list(&self) -> Option<&[ArgValue]> {
        match self {
            ArgValue::List(items) => Some(items),
            _ => None,
        }
    }
}

macro_rules! impl_from_for_arg {
    ($variant:ident => $($t:ty),+) => {
        $(
            impl From<$t> for ArgValue {
                fn from(value: $t) -> Self {
                    ArgValue::$variant(value.into())
                }
            }
        )+
    };
}

impl_from_for_arg!(Int => i8, i16, i32, i64);
impl_from_for_arg!(Uint => u8, u16, u32, u64);
impl_from_for_arg!(Str => String, &str);

impl From<f64> for ArgValue {
    fn from(value: f64) -> Self {
        ArgValue::Float(value)
    }
}

impl From<f32> for ArgValue {
    fn from(value: f32) -> Self {
        ArgValue::Float32(value)
    }
}

impl From<isize> for ArgValue {
    fn from(value: isize) -> Self {
        ArgValue::Int(value as i64)
    }
}

impl From<usize> for ArgValue {
    fn from(value: usize) -> Self {
        ArgValue::Uint(value as u64)
    }
}

impl<T: Into<ArgValue>> From<Vec<T>> for ArgValue {
    fn from(values: Vec<T>) -> Self {
        ArgValue::List(values.into_iter().map(Into::into).collect())
    }
}

impl Display for ArgValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgValue::Int(n) => write!(f, "{}", n),
            ArgValue::Uint(n) => write!(f, "{}", n),
            ArgValue::Float(n) => write!(f, "{}", n),
            ArgValue::Float32(n) => write!(f, "{}", n),
            ArgValue::Str(s) => f.write_str(s),
            ArgValue::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
        }
    }
}

/// The parameters of a failed constraint, in the order they were attached.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct Args(IndexMap<String, ArgValue>);

impl Args {
    /// Returns the argument stored under `key`.
    pub fn get(&self, key: &str) -> Option<&ArgValue> {
        self.0.get(key)
    }

    /// Returns the number of arguments.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no arguments are present.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the argument names and values.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ArgValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    fn insert(&mut self, key: String, value: ArgValue) {
        self.0.insert(key, value);
    }
}

/// A single failed constraint.
///
/// `ConstraintError` is what a scalar validator returns when its value is
/// rejected. It carries:
/// - **constraint**: stable machine-readable identifier, e.g. `integer_min`
/// - **message**: human-readable description
/// - **args**: the parameters relevant to the failure, or none
///
/// The error renders as JSON with the fields `Constraint`, `Message` and
/// `Args`; `Args` is `null` when no argument was attached.
///
/// # Example
///
/// ```rust
/// use vetter::{ArgValue, ConstraintError};
///
/// let error = ConstraintError::new("integer_min", "must be greater than or equal to 2")
///     .with_arg("min", 2)
///     .with_arg("val", 1);
///
/// assert_eq!(error.constraint(), "integer_min");
/// assert_eq!(error.arg("min"), Some(&ArgValue::Int(2)));
/// assert_eq!(
///     error.to_string(),
///     r#"{"Constraint":"integer_min","Message":"must be greater than or equal to 2","Args":{"min":2,"val":1}}"#
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Error)]
pub struct ConstraintError {
    #[serde(rename = "Constraint")]
    constraint: String,
    #[serde(rename = "Message")]
    message: String,
    #[serde(rename = "Args")]
    args: Option<Args>,
}

impl ConstraintError {
    /// Creates a new constraint error without arguments.
    pub fn new(constraint: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            constraint: constraint.into(),
            message: message.into(),
            args: None,
        }
    }

    /// Attaches an argument and returns self for chaining.
    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<ArgValue>) -> Self {
        self.args
            .get_or_insert_with(Args::default)
            .insert(key.into(), value.into());
        self
    }

    /// Returns the constraint identifier.
    pub fn constraint(&self) -> &str {
        &self.constraint
    }

    /// Returns the human-readable message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the attached arguments, if any.
    pub fn args(&self) -> Option<&Args> {
        self.args.as_ref()
    }

    /// Returns a single argument by name.
    pub fn arg(&self, key: &str) -> Option<&ArgValue> {
        self.args.as_ref().and_then(|args| args.get(key))
    }
}

impl Display for ConstraintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_json(self, f)
    }
}

// Validators hand errors across threads, so this must hold as fields change.
const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<ConstraintError>();
    assert_sync::<ConstraintError>();
};
