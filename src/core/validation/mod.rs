//! Validation of order payloads
//!
//! `OrderPayload` implements [`validator::Validate`]. Every field is checked
//! and all violations are collected before anything is reported, so a client
//! sees the full list of problems in one response.

pub mod extractor;
pub mod validators;

pub use extractor::Validated;

use crate::core::error::{FieldValidationError, OrderError, OrderResult, ValidationError};
use crate::core::order::{ORDER_FIELDS, OrderPayload, today};
use chrono::NaiveDate;
use validator::{Validate, ValidationErrors};

pub const CUSTOMER_NAME_REQUIRED: &str = "Customer name is required";
pub const ORDER_DATE_NOT_FUTURE: &str = "Order date should be in the past or present";
pub const SHIPPING_ADDRESS_REQUIRED: &str = "Shipping address is required";
pub const TOTAL_NOT_POSITIVE: &str = "Total must be a positive value";
pub const TOTAL_DIGITS: &str = "Total must have at most 17 integer digits and 2 decimal places";

/// Precision of a stored total, `NUMERIC(19, 2)`
pub const TOTAL_INTEGER_DIGITS: u32 = 17;
pub const TOTAL_FRACTION_DIGITS: u32 = 2;

impl OrderPayload {
    /// Validate against an explicit "today"
    pub fn validate_at(&self, today: NaiveDate) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if let Err(e) = validators::not_empty(self.customer_name.as_deref(), CUSTOMER_NAME_REQUIRED) {
            errors.add("customerName", e);
        }
        if let Err(e) = validators::past_or_present(self.order_date, today, ORDER_DATE_NOT_FUTURE) {
            errors.add("orderDate", e);
        }
        if let Err(e) =
            validators::not_empty(self.shipping_address.as_deref(), SHIPPING_ADDRESS_REQUIRED)
        {
            errors.add("shippingAddress", e);
        }
        if let Err(e) = validators::positive(self.total, TOTAL_NOT_POSITIVE) {
            errors.add("total", e);
        } else if let Err(e) = validators::digits(
            self.total,
            TOTAL_INTEGER_DIGITS,
            TOTAL_FRACTION_DIGITS,
            TOTAL_DIGITS,
        ) {
            errors.add("total", e);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

impl Validate for OrderPayload {
    fn validate(&self) -> Result<(), ValidationErrors> {
        self.validate_at(today())
    }
}

/// Run a payload's validator, rejecting with every violated field
pub fn ensure_valid<T: Validate>(payload: &T) -> OrderResult<()> {
    payload
        .validate()
        .map_err(|errors| OrderError::Validation(to_field_errors(&errors)))
}

/// Flatten `validator` errors into field/message pairs, in field declaration order
pub fn to_field_errors(errors: &ValidationErrors) -> ValidationError {
    let by_field = errors.field_errors();

    let fields = ORDER_FIELDS
        .iter()
        .filter_map(|field| by_field.get(*field).map(|errs| (*field, errs)))
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                let message = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string());
                FieldValidationError::new(field, message)
            })
        })
        .collect();

    ValidationError::FieldErrors(fields)
}
