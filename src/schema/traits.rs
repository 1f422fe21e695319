//! Traits for the numeric domains.
//!
//! This module provides [`Number`], the capability shared by every numeric type
//! a [`NumberSchema`](super::NumberSchema) can validate, and the [`Integer`] and
//! [`Float`] markers that split those types into the `integer_*` and `float_*`
//! constraint families.

use std::fmt::{Debug, Display};

use crate::constraint;
use crate::error::ArgValue;

mod sealed {
    pub trait Sealed {}
}

/// An ordered, equality-comparable numeric type.
///
/// `Number` is implemented for every fixed-width signed and unsigned integer
/// and for both float widths. The associated constants hold the identifiers
/// reported when a constraint on this type fails, so one generic builder can
/// serve both domains.
///
/// This trait is sealed.
pub trait Number:
    Copy + PartialOrd + Display + Debug + Send + Sync + 'static + sealed::Sealed
{
    /// Identifier reported by `min`.
    const MIN_CONSTRAINT: &'static str;
    /// Identifier reported by `max`.
    const MAX_CONSTRAINT: &'static str;
    /// Identifier reported by `choose`.
    const CHOOSE_CONSTRAINT: &'static str;

    /// Converts the value into an error argument.
    fn into_arg(self) -> ArgValue;
}

/// Marker for signed and unsigned fixed-width integers.
pub trait Integer: Number {}

/// Marker for `f32` and `f64`.
pub trait Float: Number {}

macro_rules! impl_number {
    ($marker:ident, $min:path, $max:path, $choose:path => $($t:ty),+) => {
        $(
            impl sealed::Sealed for $t {}

            impl Number for $t {
                const MIN_CONSTRAINT: &'static str = $min;
                const MAX_CONSTRAINT: &'static str = $max;
                const CHOOSE_CONSTRAINT: &'static str = $choose;

                fn into_arg(self) -> ArgValue {
                    ArgValue::from(self)
                }
            }

            impl $marker for $t {}
        )+
    };
}

impl_number!(
    Integer,
    constraint::INTEGER_MIN,
    constraint::INTEGER_MAX,
    constraint::INTEGER_CHOOSE =>
    i8, i16, i32, i64, isize, u8, u16, u32, u64, usize
);

impl_number!(
    Float,
    constraint::FLOAT_MIN,
    constraint::FLOAT_MAX,
    constraint::FLOAT_CHOOSE =>
    f32, f64
);
