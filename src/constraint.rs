//! Stable identifiers of the built-in constraints.
//!
//! These are the values reported by [`ConstraintError::constraint`](crate::ConstraintError::constraint)
//! and the keys callers match on when handling failures programmatically.

pub const INTEGER_MIN: &str = "integer_min";
pub const INTEGER_MAX: &str = "integer_max";
pub const INTEGER_CHOOSE: &str = "integer_choose";

pub const FLOAT_MIN: &str = "float_min";
pub const FLOAT_MAX: &str = "float_max";
pub const FLOAT_CHOOSE: &str = "float_choose";

pub const STRING_MIN: &str = "string_min";
pub const STRING_MAX: &str = "string_max";
pub const STRING_CHOOSE: &str = "string_choose";
pub const STRING_NOT_BLANK: &str = "string_not_blank";
pub const STRING_LEN: &str = "string_len";
pub const STRING_EMAIL: &str = "string_email";
