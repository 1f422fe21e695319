//! Numeric schema validation.
//!
//! This module provides [`NumberSchema`], the builder for integer and float
//! validators. The rules are written once over [`Number`] and the failing
//! constraint identifier comes from the concrete type, so `i8` and `u64` report
//! `integer_min` while `f32` reports `float_min`.

use crate::error::{ArgValue, ConstraintError};
use crate::validation::{Composer, Validator};

use super::format_choices;
use super::traits::Number;

/// A builder for validating integer or float values.
///
/// Each constraint method adds one check to the chain. The finished
/// validator evaluates the checks in the order they were declared and
/// reports only the first one that fails.
///
/// # Example
///
/// ```rust
/// use vetter::Schema;
///
/// let validator = Schema::int::<u8>().min(2).max(3).choose([1, 2]).compose();
///
/// assert!(validator.validate(&2).is_ok());
/// assert_eq!(validator.validate(&1).unwrap_err().constraint(), "integer_min");
/// assert_eq!(validator.validate(&4).unwrap_err().constraint(), "integer_max");
/// assert_eq!(validator.validate(&3).unwrap_err().constraint(), "integer_choose");
/// ```
#[derive(Debug)]
pub struct NumberSchema<T: Number> {
    composer: Composer<T>,
}

/// Builder over a fixed-width integer type.
pub type IntegerSchema<T> = NumberSchema<T>;

/// Builder over `f32` or `f64`.
pub type FloatSchema<T> = NumberSchema<T>;

impl<T: Number> NumberSchema<T> {
    /// Creates a new numeric schema with no constraints.
    pub fn new() -> Self {
        Self {
            composer: Composer::start(),
        }
    }

    /// Adds a minimum value constraint (inclusive).
    ///
    /// Fails with `integer_min` / `float_min` when the value is below `min`.
    pub fn min(self, min: T) -> Self {
        self.and(minimum(min))
    }

    /// Adds a maximum value constraint (inclusive).
    ///
    /// Fails with `integer_max` / `float_max` when the value is above `max`.
    pub fn max(self, max: T) -> Self {
        self.and(maximum(max))
    }

    /// Adds a choice constraint.
    ///
    /// The value must equal one of `choices`. With no choices, no value passes.
    pub fn choose<I>(self, choices: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        self.and(choose(choices.into_iter().collect()))
    }

    /// Adds a caller-supplied validator to the chain.
    pub fn and(mut self, next: Validator<T>) -> Self {
        self.composer = self.composer.and(next);
        self
    }

    /// Adds a caller-supplied check to the chain.
    pub fn custom<F>(self, check: F) -> Self
    where
        F: Fn(&T) -> Result<(), ConstraintError> + Send + Sync + 'static,
    {
        self.and(Validator::new(check))
    }

    /// Returns the underlying composer.
    pub fn into_composer(self) -> Composer<T> {
        self.composer
    }

    /// Resolves the chain into an evaluable validator.
    pub fn compose(self) -> Validator<T> {
        self.composer.compose()
    }
}

impl<T: Number> Default for NumberSchema<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Number> Clone for NumberSchema<T> {
    fn clone(&self) -> Self {
        Self {
            composer: self.composer.clone(),
        }
    }
}

fn minimum<T: Number>(min: T) -> Validator<T> {
    Validator::new(move |&n: &T| {
        if n < min {
            Err(
                ConstraintError::new(
                    T::MIN_CONSTRAINT,
                    format!("must be greater than or equal to {}", min),
                )
                .with_arg("min", min.into_arg())
                .with_arg("val", n.into_arg()),
            )
        } else {
            Ok(())
        }
    })
}

fn maximum<T: Number>(max: T) -> Validator<T> {
    Validator::new(move |&n: &T| {
        if max < n {
            Err(
                ConstraintError::new(
                    T::MAX_CONSTRAINT,
                    format!("must be less than or equal to {}", max),
                )
                .with_arg("max", max.into_arg())
                .with_arg("val", n.into_arg()),
            )
        } else {
            Ok(())
        }
    })
}

fn choose<T: Number>(choices: Vec<T>) -> Validator<T> {
    Validator::new(move |&n: &T| {
        if choices.iter().any(|&choice| choice == n) {
            return Ok(());
        }

        let listed: Vec<ArgValue> = choices.iter().map(|c| c.into_arg()).collect();
        Err(
            ConstraintError::new(
                T::CHOOSE_CONSTRAINT,
                format!("must be one of {}", format_choices(&choices)),
            )
            .with_arg("choices", ArgValue::List(listed))
            .with_arg("val", n.into_arg()),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_is_inclusive() {
        let validator = NumberSchema::<i32>::new().min(5).compose();

        assert!(validator.validate(&5).is_ok());
        assert!(validator.validate(&6).is_ok());
        let error = validator.validate(&4).unwrap_err();
        assert_eq!(error.constraint(), "integer_min");
        assert_eq!(error.message(), "must be greater than or equal to 5");
        assert_eq!(error.arg("min"), Some(&ArgValue::Int(5)));
        assert_eq!(error.arg("val"), Some(&ArgValue::Int(4)));
    }

    #[test]
    fn test_max_is_inclusive() {
        let validator = NumberSchema::<u16>::new().max(10).compose();

        assert!(validator.validate(&10).is_ok());
        let error = validator.validate(&11).unwrap_err();
        assert_eq!(error.constraint(), "integer_max");
        assert_eq!(error.message(), "must be less than or equal to 10");
        assert_eq!(error.arg("max"), Some(&ArgValue::Uint(10)));
    }

    #[test]
    fn test_float_domain_identifiers() {
        let validator = NumberSchema::<f64>::new().min(1.5).compose();

        let error = validator.validate(&1.0).unwrap_err();
        assert_eq!(error.constraint(), "float_min");
        assert_eq!(error.arg("min"), Some(&ArgValue::Float(1.5)));
    }

    #[test]
    fn test_choose_lists_choices() {
        let validator = NumberSchema::<i64>::new().choose([1, 2]).compose();

        assert!(validator.validate(&1).is_ok());
        assert!(validator.validate(&2).is_ok());
        let error = validator.validate(&3).unwrap_err();
        assert_eq!(error.constraint(), "integer_choose");
        assert_eq!(error.message(), "must be one of [1, 2]");
        assert_eq!(
            error.arg("choices"),
            Some(&ArgValue::List(vec![ArgValue::Int(1), ArgValue::Int(2)]))
        );
    }

    #[test]
    fn test_choose_with_no_choices_rejects_everything() {
        let validator = NumberSchema::<u8>::new().choose([]).compose();

        for n in [0u8, 1, u8::MAX] {
            assert_eq!(
                validator.validate(&n).unwrap_err().constraint(),
                "integer_choose"
            );
        }
    }

    #[test]
    fn test_nan_passes_bounds_but_not_choices() {
        let bounds = NumberSchema::<f32>::new().min(0.0).max(1.0).compose();
        assert!(bounds.validate(&f32::NAN).is_ok());

        let choices = NumberSchema::<f32>::new().choose([f32::NAN]).compose();
        assert!(choices.validate(&f32::NAN).is_err());
    }
}
