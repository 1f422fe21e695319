//! Integration tests for composition and short-circuit ordering.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use vetter::{Composer, ConstraintError, Schema, Validator};

/// A passing validator that counts how often it runs
fn probe<T: ?Sized + 'static>(calls: &Arc<AtomicUsize>) -> Validator<T> {
    let calls = Arc::clone(calls);
    Validator::new(move |_| {
        calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    })
}

#[test]
fn test_empty_builders_accept_everything() {
    assert!(Schema::int::<i64>().compose().validate(&i64::MIN).is_ok());
    assert!(Schema::float::<f64>().compose().validate(&f64::NAN).is_ok());
    assert!(Schema::string().compose().validate("").is_ok());
    assert!(Composer::<str>::start().compose().validate("x").is_ok());
}

#[test]
fn test_min_failure_skips_later_constraints() {
    let calls = Arc::new(AtomicUsize::new(0));
    let validator = Schema::int::<i32>()
        .min(5)
        .and(probe(&calls))
        .max(10)
        .and(probe(&calls))
        .choose([5, 6])
        .and(probe(&calls))
        .compose();

    let error = validator.validate(&1).unwrap_err();
    assert_eq!(error.constraint(), "integer_min");
    assert_eq!(calls.load(Ordering::SeqCst), 0);

    // A passing value runs every probe once.
    assert!(validator.validate(&5).is_ok());
    assert_eq!(calls.load(Ordering::SeqCst), 3);
}

#[test]
fn test_constraints_run_in_declaration_order() {
    let order = Arc::new(std::sync::Mutex::new(Vec::new()));
    let record = |name: &'static str| {
        let order = Arc::clone(&order);
        Validator::new(move |_: &str| {
            order.lock().unwrap().push(name);
            Ok(())
        })
    };

    let validator = Composer::start()
        .and(record("a"))
        .and(record("b"))
        .and(record("c"))
        .compose();
    validator.validate("x").unwrap();

    assert_eq!(*order.lock().unwrap(), vec!["a", "b", "c"]);
}

#[test]
fn test_resolve_runs_base_first() {
    let calls = Arc::new(AtomicUsize::new(0));
    let base = Validator::new(|s: &str| {
        if s.starts_with('#') {
            Err(ConstraintError::new("no_comment", "must not be a comment"))
        } else {
            Ok(())
        }
    });

    let validator = Schema::string()
        .and(probe(&calls))
        .into_composer()
        .resolve(base);

    assert_eq!(
        validator.validate("# hi").unwrap_err().constraint(),
        "no_comment"
    );
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert!(validator.validate("hi").is_ok());
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_shared_prefix_is_reusable() {
    let prefix = Schema::string().not_blank();
    let email = prefix.clone().email().compose();
    let short = prefix.len(-1, 3).compose();

    assert_eq!(email.validate("").unwrap_err().constraint(), "string_not_blank");
    assert_eq!(short.validate("").unwrap_err().constraint(), "string_not_blank");
    assert!(email.validate("bob@mail.com").is_ok());
    assert_eq!(
        short.validate("bob@mail.com").unwrap_err().constraint(),
        "string_len"
    );
}

#[test]
fn test_validator_is_idempotent() {
    let validator = Schema::string().not_blank().len(4, 10).email().compose();

    for value in ["", "bob", "bob@mail.com", "bob alexander"] {
        assert_eq!(validator.validate(value), validator.validate(value));
    }
}

#[test]
fn test_then_merges_validators() {
    let min = Schema::int::<u32>().min(3).compose();
    let max = Schema::int::<u32>().max(5).compose();
    let both = min.then(max);

    assert_eq!(both.validate(&1).unwrap_err().constraint(), "integer_min");
    assert_eq!(both.validate(&9).unwrap_err().constraint(), "integer_max");
    assert!(both.validate(&4).is_ok());
}

#[test]
fn test_composer_len_tracks_constraints() {
    let composer = Schema::int::<i8>().min(1).max(2).into_composer();
    assert_eq!(composer.len(), 2);
    assert!(!composer.is_empty());
    assert!(Composer::<i8>::default().is_empty());
}
