//! Per-index failures of a slice validation.

use std::fmt::{self, Display};

use indexmap::IndexMap;
use serde::Serialize;
use stillwater::prelude::*;
use thiserror::Error;

use super::{write_json, ConstraintError};

/// The failures of a slice validation, keyed by element index.
///
/// Keys are the 0-based index of the failing element rendered as a decimal
/// string. A `MapError` always holds at least one entry: when no element
/// fails, the aggregator reports no error at all instead of an empty map.
///
/// # Combining Errors
///
/// `MapError` implements `Semigroup`, so the results of validating several
/// slices against shared indices can be merged. On key collision the entry
/// from the right-hand side wins.
///
/// ```rust
/// use vetter::{ConstraintError, MapError};
/// use stillwater::prelude::*;
///
/// let left = MapError::from_entries([(0, ConstraintError::new("a", "first"))]).unwrap();
/// let right = MapError::from_entries([(3, ConstraintError::new("b", "second"))]).unwrap();
///
/// let merged = left.combine(right);
/// assert_eq!(merged.len(), 2);
/// assert_eq!(merged.get(3).map(|e| e.constraint()), Some("b"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Error)]
#[serde(transparent)]
pub struct MapError(IndexMap<String, ConstraintError>);

impl MapError {
    /// Builds a `MapError` from `(index, error)` pairs.
    ///
    /// Returns `None` when the iterator is empty, since an empty map would
    /// look like a failure that has no failing element.
    pub fn from_entries<I>(entries: I) -> Option<Self>
    where
        I: IntoIterator<Item = (usize, ConstraintError)>,
    {
        let map: IndexMap<String, ConstraintError> = entries
            .into_iter()
            .map(|(index, error)| (index.to_string(), error))
            .collect();

        if map.is_empty() {
            None
        } else {
            Some(Self(map))
        }
    }

    /// Returns the number of failing elements.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns false since a `MapError` is never constructed empty.
    ///
    /// This method exists for API consistency.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the error for the element at `index`.
    pub fn get(&self, index: usize) -> Option<&ConstraintError> {
        self.0.get(index.to_string().as_str())
    }

    /// Returns the error stored under a decimal string key.
    pub fn get_key(&self, key: &str) -> Option<&ConstraintError> {
        self.0.get(key)
    }

    /// Returns true if the element at `index` failed.
    pub fn contains(&self, index: usize) -> bool {
        self.get(index).is_some()
    }

    /// Returns an iterator over the keys of failing elements.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Returns an iterator over `(key, error)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ConstraintError)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns the keys of all elements that failed with `constraint`.
    pub fn with_constraint(&self, constraint: &str) -> Vec<&str> {
        self.iter()
            .filter(|(_, e)| e.constraint() == constraint)
            .map(|(k, _)| k)
            .collect()
    }
}

impl Semigroup for MapError {
    fn combine(mut self, other: Self) -> Self {
        self.0.extend(other.0);
        self
    }
}

impl Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_json(self, f)
    }
}

impl IntoIterator for MapError {
    type Item = (String, ConstraintError);
    type IntoIter = indexmap::map::IntoIter<String, ConstraintError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<MapError>();
    assert_sync::<MapError>();
};
