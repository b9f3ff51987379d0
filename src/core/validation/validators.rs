//! Reusable field validators
//!
//! Each validator checks one field and returns a `validator::ValidationError`
//! carrying the human-readable message the client sees.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::borrow::Cow;
use validator::ValidationError;

fn violation(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}

/// Validator: text is present and not empty
pub fn not_empty(value: Option<&str>, message: &'static str) -> Result<(), ValidationError> {
    match value {
        Some(s) if !s.is_empty() => Ok(()),
        _ => Err(violation("not_empty", message)),
    }
}

/// Validator: number is present and strictly greater than zero
pub fn positive(value: Option<Decimal>, message: &'static str) -> Result<(), ValidationError> {
    match value {
        Some(n) if n > Decimal::ZERO => Ok(()),
        _ => Err(violation("positive", message)),
    }
}

/// Validator: number has at most `integer` digits before the point and
/// `fraction` digits after it
///
/// A missing number passes; `positive` reports it. `integer` is at most 28,
/// the precision of `Decimal`.
pub fn digits(
    value: Option<Decimal>,
    integer: u32,
    fraction: u32,
    message: &'static str,
) -> Result<(), ValidationError> {
    let Some(n) = value else {
        return Ok(());
    };
    let n = n.normalize();
    let bound = Decimal::from_i128_with_scale(10_i128.pow(integer), 0);
    if n.scale() <= fraction && n.trunc().abs() < bound {
        Ok(())
    } else {
        Err(violation("digits", message))
    }
}

/// Validator: date is not after `today`
///
/// A missing date passes; it defaults to today when the order is built.
pub fn past_or_present(
    value: Option<NaiveDate>,
    today: NaiveDate,
    message: &'static str,
) -> Result<(), ValidationError> {
    match value {
        Some(date) if date > today => Err(violation("past_or_present", message)),
        _ => Ok(()),
    }
}
