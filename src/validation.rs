//! Validators and the composition engine.
//!
//! This module provides [`Validator`], a shareable function from a value to an
//! optional [`ConstraintError`], and [`Composer`], the ordered chain of
//! validators every typed builder accumulates into. A resolved chain evaluates
//! its validators in insertion order and stops at the first failure.

use std::fmt;
use std::sync::Arc;

use stillwater::Validation;

use crate::error::ConstraintError;

/// Type alias for the function stored inside a validator.
pub(crate) type ValidatorFn<T> = Arc<dyn Fn(&T) -> Result<(), ConstraintError> + Send + Sync>;

/// A stateless check of a single value.
///
/// `Validator` wraps a pure function and is cheap to clone. It holds no
/// mutable state, so the same validator can be evaluated any number of times
/// and from any number of threads.
///
/// # Example
///
/// ```rust
/// use vetter::{ConstraintError, Validator};
///
/// let even = Validator::new(|n: &i32| {
///     if n % 2 == 0 {
///         Ok(())
///     } else {
///         Err(ConstraintError::new("even", "must be even"))
///     }
/// });
///
/// assert!(even.validate(&4).is_ok());
/// assert_eq!(even.validate(&3).unwrap_err().constraint(), "even");
/// ```
pub struct Validator<T: ?Sized> {
    check: ValidatorFn<T>,
}

impl<T: ?Sized + 'static> Validator<T> {
    /// Creates a validator from a function.
    pub fn new<F>(check: F) -> Self
    where
        F: Fn(&T) -> Result<(), ConstraintError> + Send + Sync + 'static,
    {
        Self {
            check: Arc::new(check),
        }
    }

    /// Returns a validator that accepts every value.
    pub fn nop() -> Self {
        Self::new(|_| Ok(()))
    }

    /// Evaluates the validator against `value`.
    pub fn validate(&self, value: &T) -> Result<(), ConstraintError> {
        (self.check)(value)
    }

    /// Evaluates the validator and returns a `stillwater::Validation`.
    pub fn check(&self, value: &T) -> Validation<(), ConstraintError> {
        match self.validate(value) {
            Ok(()) => Validation::Success(()),
            Err(error) => Validation::Failure(error),
        }
    }

    /// Merges two validators into one that runs `self`, then `next`.
    ///
    /// `next` is never evaluated when `self` fails.
    pub fn then(self, next: Validator<T>) -> Self {
        Self::new(move |value| {
            self.validate(value)?;
            next.validate(value)
        })
    }
}

impl<T: ?Sized> Clone for Validator<T> {
    fn clone(&self) -> Self {
        Self {
            check: Arc::clone(&self.check),
        }
    }
}

impl<T: ?Sized> fmt::Debug for Validator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator").finish_non_exhaustive()
    }
}

/// An ordered, not yet resolved chain of validators.
///
/// A composer starts out as the identity ([`Composer::start`]) and grows one
/// validator per [`and`](Composer::and) call. Resolving it yields a single
/// [`Validator`] that evaluates the accumulated validators in the order they
/// were added and returns the first failure.
///
/// Composers are values: `and` returns a new composer, and a partially built
/// chain can be cloned and extended in different directions.
///
/// # Example
///
/// ```rust
/// use vetter::{Composer, ConstraintError, Validator};
///
/// let positive = Validator::new(|n: &i64| {
///     if *n > 0 { Ok(()) } else { Err(ConstraintError::new("positive", "must be positive")) }
/// });
/// let small = Validator::new(|n: &i64| {
///     if *n < 10 { Ok(()) } else { Err(ConstraintError::new("small", "must be below 10")) }
/// });
///
/// let validator = Composer::start().and(positive).and(small).compose();
///
/// assert!(validator.validate(&5).is_ok());
/// assert_eq!(validator.validate(&-5).unwrap_err().constraint(), "positive");
/// assert_eq!(validator.validate(&50).unwrap_err().constraint(), "small");
/// ```
pub struct Composer<T: ?Sized> {
    validators: Vec<Validator<T>>,
}

impl<T: ?Sized + 'static> Composer<T> {
    /// Creates the identity composer.
    ///
    /// Resolving it against a base validator yields that base unchanged.
    pub fn start() -> Self {
        Self {
            validators: Vec::new(),
        }
    }

    /// Returns a composer that runs the accumulated chain, then `next`.
    pub fn and(mut self, next: Validator<T>) -> Self {
        self.validators.push(next);
        self
    }

    /// Returns the number of accumulated validators.
    pub fn len(&self) -> usize {
        self.validators.len()
    }

    /// Returns true if no validator has been added.
    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }

    /// Resolves the chain against a caller-supplied base validator.
    ///
    /// The base runs first, followed by every accumulated validator in
    /// insertion order. Evaluation stops at the first failure.
    pub fn resolve(self, base: Validator<T>) -> Validator<T> {
        if self.validators.is_empty() {
            return base;
        }

        let mut chain = Vec::with_capacity(self.validators.len() + 1);
        chain.push(base);
        chain.extend(self.validators);

        Validator::new(move |value| {
            for validator in &chain {
                if let Err(error) = validator.validate(value) {
                    tracing::trace!(constraint = %error.constraint(), "constraint failed");
                    return Err(error);
                }
            }
            Ok(())
        })
    }

    /// Resolves the chain into an evaluable validator.
    ///
    /// An empty composer yields a validator that always succeeds.
    pub fn compose(self) -> Validator<T> {
        self.resolve(Validator::nop())
    }
}

impl<T: ?Sized + 'static> Default for Composer<T> {
    fn default() -> Self {
        Self::start()
    }
}

impl<T: ?Sized> Clone for Composer<T> {
    fn clone(&self) -> Self {
        Self {
            validators: self.validators.clone(),
        }
    }
}

impl<T: ?Sized> fmt::Debug for Composer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Composer")
            .field("len", &self.validators.len())
            .finish()
    }
}

// Composed validators are meant to live in statics and cross threads.
const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<Validator<str>>();
    assert_sync::<Validator<str>>();
    assert_send::<Composer<i64>>();
    assert_sync::<Composer<i64>>();
};
