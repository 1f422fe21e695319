//! Aggregate validation over slices.
//!
//! This module provides [`SliceOf`], which applies a single-value validator to
//! every element of a slice. Unlike a composed chain it does not stop at the
//! first failure: every element is checked and each failing one is reported
//! in a [`MapError`] under its index.

use std::borrow::Borrow;
use std::convert::Infallible;

use stillwater::Validation;

use crate::error::{ConstraintError, MapError};
use crate::validation::Validator;
use crate::ValidationResult;

/// A slice waiting to be validated element by element.
///
/// # Example
///
/// ```rust
/// use vetter::{slice_of, Schema};
///
/// let validator = Schema::string().not_blank().len(4, 20).email().compose();
/// let emails = ["", "valid@mail.com", "toolongstringoftwentyoneplus", "bob@mail.com", "not@mail"];
///
/// let errors = slice_of(&emails).with(&validator).unwrap();
/// assert_eq!(errors.len(), 3);
/// assert_eq!(errors.get(0).unwrap().constraint(), "string_not_blank");
/// assert_eq!(errors.get(2).unwrap().constraint(), "string_len");
/// assert_eq!(errors.get(4).unwrap().constraint(), "string_email");
///
/// assert!(slice_of(&["bob@mail.com"]).with(&validator).is_none());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SliceOf<'a, T> {
    items: &'a [T],
}

/// Wraps a slice for aggregate validation.
pub fn slice_of<T>(items: &[T]) -> SliceOf<'_, T> {
    SliceOf { items }
}

impl<'a, T> SliceOf<'a, T> {
    /// Returns the number of elements to validate.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the slice has no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Validates every element with `validator`.
    ///
    /// Returns `None` when every element passes, otherwise a [`MapError`]
    /// holding exactly the failing indices.
    pub fn with<U>(&self, validator: &Validator<U>) -> Option<MapError>
    where
        T: Borrow<U>,
        U: ?Sized + 'static,
    {
        let result = self.try_with(|item| {
            Ok::<_, Infallible>(validator.validate(<T as Borrow<U>>::borrow(item)))
        });
        match result {
            Ok(errors) => errors,
            Err(never) => match never {},
        }
    }

    /// Validates every element with a fallible check.
    ///
    /// The check returns `Ok(Ok(()))` for a passing element and
    /// `Ok(Err(error))` for a failed constraint, which is recorded under the
    /// element's index. An outer `Err` means the check itself broke its
    /// contract: aggregation stops and that error is returned as is.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vetter::{slice_of, ConstraintError};
    ///
    /// let result = slice_of(&[1, -1, 0]).try_with(|n: &i32| match n {
    ///     0 => Err("zero is not supported"),
    ///     n if *n < 0 => Ok(Err(ConstraintError::new("positive", "must be positive"))),
    ///     _ => Ok(Ok(())),
    /// });
    ///
    /// assert_eq!(result.unwrap_err(), "zero is not supported");
    /// ```
    pub fn try_with<F, E>(&self, mut check: F) -> Result<Option<MapError>, E>
    where
        F: FnMut(&T) -> Result<Result<(), ConstraintError>, E>,
    {
        let mut failures = Vec::new();
        for (index, item) in self.items.iter().enumerate() {
            if let Err(error) = check(item)? {
                failures.push((index, error));
            }
        }

        Ok(self.finish(failures))
    }

    /// Validates every element and returns a `stillwater::Validation`.
    pub fn validation<U>(&self, validator: &Validator<U>) -> ValidationResult<()>
    where
        T: Borrow<U>,
        U: ?Sized + 'static,
    {
        match self.with(validator) {
            None => Validation::Success(()),
            Some(errors) => Validation::Failure(errors),
        }
    }

    fn finish(&self, failures: Vec<(usize, ConstraintError)>) -> Option<MapError> {
        tracing::debug!(
            total = self.items.len(),
            failed = failures.len(),
            "slice validation finished"
        );
        MapError::from_entries(failures)
    }
}

#[cfg(feature = "parallel")]
impl<'a, T: Sync> SliceOf<'a, T> {
    /// Validates every element with `validator`, spreading the work over
    /// the rayon thread pool.
    ///
    /// The result is identical to [`with`](SliceOf::with): failures are
    /// reported under the index of the element that produced them.
    pub fn par_with<U>(&self, validator: &Validator<U>) -> Option<MapError>
    where
        T: Borrow<U>,
        U: ?Sized + 'static,
    {
        use rayon::prelude::*;

        let failures: Vec<(usize, ConstraintError)> = self
            .items
            .par_iter()
            .enumerate()
            .filter_map(|(index, item)| {
                validator
                    .validate(<T as Borrow<U>>::borrow(item))
                    .err()
                    .map(|error| (index, error))
            })
            .collect();

        self.finish(failures)
    }
}
