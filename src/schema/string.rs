//! String schema validation.
//!
//! This module provides [`StringSchema`] for validating string values with
//! constraints like blankness, byte length, lexical bounds, a closed set of
//! choices and email syntax.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::constraint;
use crate::error::{ArgValue, ConstraintError};
use crate::validation::{Composer, Validator};

use super::format_choices;

/// RFC 5322 derived address grammar: dot-atom or quoted-string local part,
/// dotted domain labels, alphabetic TLD, optional trailing dot. The Unicode
/// ranges are accepted wherever ASCII letters are.
const EMAIL_PATTERN: &str = r#"^(?:(?:(?:(?:[a-zA-Z]|[0-9]|[!#\$%&'\*\+\-/=\?\^_`{\|}~]|[\x{00A0}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}])+(?:\.([a-zA-Z]|[0-9]|[!#\$%&'\*\+\-/=\?\^_`{\|}~]|[\x{00A0}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}])+)*)|(?:(?:\x22)(?:(?:(?:(?:\x20|\x09)*(?:\x0d\x0a))?(?:\x20|\x09)+)?(?:(?:[\x01-\x08\x0b\x0c\x0e-\x1f\x7f]|\x21|[\x23-\x5b]|[\x5d-\x7e]|[\x{00A0}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}])|(?:(?:[\x01-\x09\x0b\x0c\x0d-\x7f]|[\x{00A0}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}]))))*(?:(?:(?:\x20|\x09)*(?:\x0d\x0a))?(\x20|\x09)+)?(?:\x22))))@(?:(?:(?:[a-zA-Z]|[0-9]|[\x{00A0}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}])|(?:(?:[a-zA-Z]|[0-9]|[\x{00A0}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}])(?:[a-zA-Z]|[0-9]|-|\.|~|[\x{00A0}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}])*(?:[a-zA-Z]|[0-9]|[\x{00A0}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}])))\.)+(?:(?:[a-zA-Z]|[\x{00A0}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}])|(?:(?:[a-zA-Z]|[\x{00A0}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}])(?:[a-zA-Z]|[0-9]|-|\.|~|[\x{00A0}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}])*(?:[a-zA-Z]|[\x{00A0}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}])))\.?$"#;

static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(EMAIL_PATTERN).expect("email pattern is a valid regex"));

/// A schema for validating string values.
///
/// `StringSchema` builds a chain of string constraints. The finished
/// validator evaluates them in declaration order and reports only the first
/// failure.
///
/// # Example
///
/// ```rust
/// use vetter::Schema;
///
/// let validator = Schema::string().not_blank().len(4, 20).email().compose();
///
/// assert!(validator.validate("bob@mail.com").is_ok());
/// assert_eq!(validator.validate("").unwrap_err().constraint(), "string_not_blank");
/// assert_eq!(validator.validate("bob").unwrap_err().constraint(), "string_len");
/// assert_eq!(validator.validate("bob alexander").unwrap_err().constraint(), "string_email");
/// ```
#[derive(Debug, Clone)]
pub struct StringSchema {
    composer: Composer<str>,
}

impl StringSchema {
    /// Creates a new string schema with no constraints.
    pub fn new() -> Self {
        Self {
            composer: Composer::start(),
        }
    }

    /// Adds a lexical lower bound (inclusive).
    ///
    /// Strings compare byte-wise, so `"B" < "a"`.
    pub fn min(self, min: impl Into<String>) -> Self {
        let min = min.into();
        self.custom(move |s| {
            if s < min.as_str() {
                Err(ConstraintError::new(
                    constraint::STRING_MIN,
                    format!("must be greater than or equal to {}", min),
                )
                .with_arg("min", min.as_str())
                .with_arg("val", s))
            } else {
                Ok(())
            }
        })
    }

    /// Adds a lexical upper bound (inclusive).
    pub fn max(self, max: impl Into<String>) -> Self {
        let max = max.into();
        self.custom(move |s| {
            if max.as_str() < s {
                Err(ConstraintError::new(
                    constraint::STRING_MAX,
                    format!("must be less than or equal to {}", max),
                )
                .with_arg("max", max.as_str())
                .with_arg("val", s))
            } else {
                Ok(())
            }
        })
    }

    /// Adds a choice constraint.
    ///
    /// The string must equal one of `choices`. With no choices, no string passes.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vetter::Schema;
    ///
    /// let validator = Schema::string().choose(["x", "y"]).compose();
    ///
    /// assert!(validator.validate("x").is_ok());
    /// assert_eq!(validator.validate("z").unwrap_err().constraint(), "string_choose");
    /// ```
    pub fn choose<I, S>(self, choices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let choices: Vec<String> = choices.into_iter().map(Into::into).collect();
        self.custom(move |s| {
            if choices.iter().any(|choice| choice == s) {
                return Ok(());
            }

            Err(ConstraintError::new(
                constraint::STRING_CHOOSE,
                format!("must be one of {}", format_choices(&choices)),
            )
            .with_arg("choices", ArgValue::from(choices.clone()))
            .with_arg("val", s))
        })
    }

    /// Rejects the empty string.
    pub fn not_blank(self) -> Self {
        self.and(not_blank())
    }

    /// Rejects strings that are empty once surrounding whitespace is removed.
    ///
    /// The trimmed form is only used for this check; later constraints see
    /// the original string.
    pub fn not_blank_trim(self) -> Self {
        let blank = not_blank();
        self.custom(move |s| blank.validate(s.trim()))
    }

    /// Adds a byte length constraint.
    ///
    /// A bound that is zero or negative is disabled, so `len(-1, 10)` only
    /// limits the upper side and `len(4, -1)` only the lower side.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vetter::Schema;
    ///
    /// let validator = Schema::string().len(4, 10).compose();
    ///
    /// assert!(validator.validate("four").is_ok());
    /// assert!(validator.validate("bob").is_err());
    /// assert!(Schema::string().len(-1, 10).compose().validate("").is_ok());
    /// ```
    pub fn len(self, min: i64, max: i64) -> Self {
        self.custom(move |s| {
            let len = i64::try_from(s.len()).unwrap_or(i64::MAX);
            let error = |message: String| {
                ConstraintError::new(constraint::STRING_LEN, message)
                    .with_arg("min", min)
                    .with_arg("max", max)
                    .with_arg("len", len)
            };

            if min > 0 && min > len {
                return Err(error(format!("must be at least {} characters", min)));
            }
            if max > 0 && max < len {
                return Err(error(format!("must be at most {} characters", max)));
            }
            Ok(())
        })
    }

    /// Requires a syntactically valid email address.
    pub fn email(self) -> Self {
        self.custom(|s| {
            if EMAIL_REGEX.is_match(s) {
                Ok(())
            } else {
                Err(ConstraintError::new(
                    constraint::STRING_EMAIL,
                    "must be a valid email address",
                ))
            }
        })
    }

    /// Adds a caller-supplied validator to the chain.
    pub fn and(mut self, next: Validator<str>) -> Self {
        self.composer = self.composer.and(next);
        self
    }

    /// Adds a caller-supplied check to the chain.
    pub fn custom<F>(self, check: F) -> Self
    where
        F: Fn(&str) -> Result<(), ConstraintError> + Send + Sync + 'static,
    {
        self.and(Validator::new(check))
    }

    /// Returns the underlying composer.
    pub fn into_composer(self) -> Composer<str> {
        self.composer
    }

    /// Resolves the chain into an evaluable validator.
    pub fn compose(self) -> Validator<str> {
        self.composer.compose()
    }
}

impl Default for StringSchema {
    fn default() -> Self {
        Self::new()
    }
}

fn not_blank() -> Validator<str> {
    Validator::new(|s: &str| {
        if s.is_empty() {
            Err(ConstraintError::new(
                constraint::STRING_NOT_BLANK,
                "must not be blank",
            ))
        } else {
            Ok(())
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_pattern_compiles() {
        assert!(Regex::new(EMAIL_PATTERN).is_ok());
    }

    #[test]
    fn test_email_accepts_common_forms() {
        let validator = StringSchema::new().email().compose();

        for address in [
            "bob@mail.com",
            "user.name+tag@sub.example.co",
            "\"john doe\"@example.org",
            "x@example.com.",
            "ü@bücher.de",
        ] {
            assert!(validator.validate(address).is_ok(), "{address}");
        }
    }

    #[test]
    fn test_email_rejects_malformed() {
        let validator = StringSchema::new().email().compose();

        for address in ["bob", "not@mail", "bob alexander", "a..b@x.com", "@mail.com", ""] {
            let error = validator.validate(address).unwrap_err();
            assert_eq!(error.constraint(), "string_email", "{address}");
            assert!(error.args().is_none());
        }
    }

    #[test]
    fn test_len_reports_bounds_and_length() {
        let validator = StringSchema::new().len(4, 10).compose();

        let error = validator.validate("bob").unwrap_err();
        assert_eq!(error.message(), "must be at least 4 characters");
        assert_eq!(error.arg("min"), Some(&ArgValue::Int(4)));
        assert_eq!(error.arg("max"), Some(&ArgValue::Int(10)));
        assert_eq!(error.arg("len"), Some(&ArgValue::Int(3)));

        let error = validator.validate("aaaaaaaaaaa").unwrap_err();
        assert_eq!(error.message(), "must be at most 10 characters");
        assert_eq!(error.arg("len"), Some(&ArgValue::Int(11)));
    }

    #[test]
    fn test_len_counts_bytes() {
        // "日本" is two characters but six bytes.
        let validator = StringSchema::new().len(-1, 5).compose();
        assert!(validator.validate("日本").is_err());
    }

    #[test]
    fn test_zero_bounds_are_disabled() {
        let validator = StringSchema::new().len(0, 0).compose();
        assert!(validator.validate("").is_ok());
        assert!(validator.validate(&"a".repeat(1000)).is_ok());
    }

    #[test]
    fn test_not_blank_trim_does_not_alter_value() {
        let validator = StringSchema::new()
            .not_blank_trim()
            .custom(|s| {
                if s.starts_with(' ') {
                    Ok(())
                } else {
                    Err(ConstraintError::new("leading_space", "lost leading space"))
                }
            })
            .compose();

        assert!(validator.validate(" a").is_ok());
    }

    #[test]
    fn test_lexical_bounds() {
        let validator = StringSchema::new().min("b").max("d").compose();

        assert!(validator.validate("b").is_ok());
        assert!(validator.validate("cat").is_ok());
        assert_eq!(validator.validate("a").unwrap_err().constraint(), "string_min");
        let error = validator.validate("e").unwrap_err();
        assert_eq!(error.constraint(), "string_max");
        assert_eq!(error.arg("val"), Some(&ArgValue::from("e")));
    }
}
