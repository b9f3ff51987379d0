//! The `Order` entity and its candidate payload

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// JSON field names of the mutable order fields, in declaration order.
///
/// Validation errors are reported in this order.
pub const ORDER_FIELDS: &[&str] = &["customerName", "orderDate", "shippingAddress", "total"];

/// A customer purchase record
///
/// An order whose `id` is `None` is transient: it has not been persisted yet.
/// The store assigns the id on first save and it never changes afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub customer_name: String,
    pub order_date: NaiveDate,
    pub shipping_address: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
}

impl Order {
    /// Create a transient order
    pub fn new(
        customer_name: impl Into<String>,
        order_date: NaiveDate,
        shipping_address: impl Into<String>,
        total: Decimal,
    ) -> Self {
        Self {
            id: None,
            customer_name: customer_name.into(),
            order_date,
            shipping_address: shipping_address.into(),
            total,
        }
    }

    pub fn is_transient(&self) -> bool {
        self.id.is_none()
    }

    /// Return the same order carrying the given id
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    /// Overwrite all four mutable fields, keeping the id
    pub fn replace_fields(&mut self, other: Order) {
        self.customer_name = other.customer_name;
        self.order_date = other.order_date;
        self.shipping_address = other.shipping_address;
        self.total = other.total;
    }
}

/// Request body for create and update
///
/// Every field is optional so that a missing field is reported by the
/// validator next to the other violations instead of failing deserialization.
/// A body `id` is ignored: the store (on create) or the path (on update)
/// decides the identity.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPayload {
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub order_date: Option<NaiveDate>,
    #[serde(default)]
    pub shipping_address: Option<String>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub total: Option<Decimal>,
}

impl OrderPayload {
    /// Build a transient order from a payload that already passed validation
    ///
    /// A missing order date means "today".
    pub fn into_order(self) -> Order {
        Order {
            id: None,
            customer_name: self.customer_name.unwrap_or_default(),
            order_date: self.order_date.unwrap_or_else(today),
            shipping_address: self.shipping_address.unwrap_or_default(),
            total: self.total.unwrap_or_default(),
        }
    }
}

/// Current calendar date (UTC)
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}
