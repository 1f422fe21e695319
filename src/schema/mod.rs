//! Typed rule builders.
//!
//! This module provides the builders that turn a sequence of constraint
//! method calls into a [`Validator`](crate::Validator). Every builder threads
//! its constraints through a [`Composer`](crate::Composer), so the resulting
//! validator checks them in declaration order and stops at the first failure.
//!
//! # Example
//!
//! ```rust
//! use vetter::Schema;
//!
//! let age = Schema::int::<u8>().min(18).max(130).compose();
//! let ratio = Schema::float::<f64>().min(0.0).max(1.0).compose();
//! let name = Schema::string().not_blank_trim().len(-1, 64).compose();
//!
//! assert!(age.validate(&30).is_ok());
//! assert!(ratio.validate(&1.5).is_err());
//! assert!(name.validate("  ").is_err());
//! ```

mod numeric;
mod string;
mod traits;

pub use numeric::{FloatSchema, IntegerSchema, NumberSchema};
pub use string::StringSchema;
pub use traits::{Float, Integer, Number};

use std::fmt::Display;

/// Entry point for creating validation schemas.
///
/// `Schema` provides factory methods for each value domain. Each returns a
/// fresh, empty builder.
pub struct Schema;

impl Schema {
    /// Creates a new integer schema over `T`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vetter::Schema;
    ///
    /// let validator = Schema::int::<i32>().min(0).compose();
    ///
    /// assert!(validator.validate(&0).is_ok());
    /// assert_eq!(validator.validate(&-1).unwrap_err().constraint(), "integer_min");
    /// ```
    pub fn int<T: Integer>() -> IntegerSchema<T> {
        NumberSchema::new()
    }

    /// Creates a new float schema over `T`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vetter::Schema;
    ///
    /// let validator = Schema::float::<f32>().max(2.0).compose();
    ///
    /// assert_eq!(validator.validate(&3.0).unwrap_err().constraint(), "float_max");
    /// ```
    pub fn float<T: Float>() -> FloatSchema<T> {
        NumberSchema::new()
    }

    /// Creates a new string schema.
    pub fn string() -> StringSchema {
        StringSchema::new()
    }
}

/// Shorthand for [`Schema::int`].
pub fn int<T: Integer>() -> IntegerSchema<T> {
    Schema::int()
}

/// Shorthand for [`Schema::float`].
pub fn float<T: Float>() -> FloatSchema<T> {
    Schema::float()
}

/// Shorthand for [`Schema::string`].
pub fn string() -> StringSchema {
    Schema::string()
}

/// Renders a choice list as `[a, b, c]`.
pub(crate) fn format_choices<T: Display>(choices: &[T]) -> String {
    let items: Vec<String> = choices.iter().map(ToString::to_string).collect();
    format!("[{}]", items.join(", "))
}
