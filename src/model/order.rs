//! The order record.
//!
//! An [`OrderEntry`] is built once from a loosely-typed JSON object (see
//! [`OrderEntry::from_fields`]) and never mutated afterwards. Dates are kept as
//! the raw `MM/DD/YYYY` strings and only parsed by range queries.
//!
//! See [`OrderCollection`](crate::collection::OrderCollection) for the
//! operations that work over many entries.

use crate::error::LedgerError;
use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt::Display;

/// Column headers used by the spreadsheet export.
pub mod columns {
    pub const ORDER_NUMBER: &str = "Order Number";
    pub const ASIN: &str = "ASIN";
    pub const PRODUCT_NAME: &str = "Product Name";
    pub const ORDER_TYPE: &str = "Order Type";
    pub const ORDER_DATE: &str = "Order Date";
    pub const SHIPPED_DATE: &str = "Shipped Date";
    pub const CANCELLED_DATE: &str = "Cancelled Date";
    pub const ESTIMATED_TAX_VALUE: &str = "Estimated Tax Value";
}

/// One order row exported from the spreadsheet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderEntry {
    #[serde(rename = "Order Number")]
    pub order_number: String,
    #[serde(rename = "ASIN")]
    pub asin: String,
    #[serde(rename = "Product Name")]
    pub product_name: String,
    #[serde(rename = "Order Type")]
    pub order_type: String,
    #[serde(rename = "Order Date")]
    pub order_date: String,
    #[serde(rename = "Shipped Date")]
    pub shipped_date: String,
    /// Present only for cancelled orders.
    #[serde(rename = "Cancelled Date")]
    pub cancelled_date: Option<String>,
    #[serde(rename = "Estimated Tax Value")]
    pub estimated_tax_value: f64,
}

impl OrderEntry {
    /// Creates a new, not cancelled, OrderEntry.
    ///
    /// # Arguments
    /// * `order_number` - Business key of the order
    /// * `product_name` - Free-text product description
    /// * `order_date` - `MM/DD/YYYY` order date
    /// * `estimated_tax_value` - Tax amount for the order
    ///
    /// The remaining fields start empty; use the `with_*` builders to fill them.
    pub fn new(
        order_number: impl Into<String>,
        product_name: impl Into<String>,
        order_date: impl Into<String>,
        estimated_tax_value: f64,
    ) -> Self {
        Self {
            order_number: order_number.into(),
            asin: String::new(),
            product_name: product_name.into(),
            order_type: String::new(),
            order_date: order_date.into(),
            shipped_date: String::new(),
            cancelled_date: None,
            estimated_tax_value,
        }
    }

    pub fn with_asin(mut self, asin: impl Into<String>) -> Self {
        self.asin = asin.into();
        self
    }

    pub fn with_order_type(mut self, order_type: impl Into<String>) -> Self {
        self.order_type = order_type.into();
        self
    }

    pub fn with_shipped_date(mut self, shipped_date: impl Into<String>) -> Self {
        self.shipped_date = shipped_date.into();
        self
    }

    pub fn with_cancelled_date(mut self, cancelled_date: impl Into<String>) -> Self {
        self.cancelled_date = Some(cancelled_date.into());
        self
    }

    /// Builds an entry from one decoded JSON object.
    ///
    /// Default rules:
    /// - text fields missing or `null` become `""`; numbers keep their JSON text,
    /// - `Cancelled Date` missing or `null` means the order is not cancelled,
    /// - `Estimated Tax Value` missing, `null` or `""` becomes `0.0`.
    ///
    /// # Errors
    /// [`LedgerError::InvalidValue`] when the tax value is not numeric.
    pub fn from_fields(fields: &Map<String, Value>) -> Result<Self, LedgerError> {
        Ok(Self {
            order_number: text_field(fields, columns::ORDER_NUMBER),
            asin: text_field(fields, columns::ASIN),
            product_name: text_field(fields, columns::PRODUCT_NAME),
            order_type: text_field(fields, columns::ORDER_TYPE),
            order_date: text_field(fields, columns::ORDER_DATE),
            shipped_date: text_field(fields, columns::SHIPPED_DATE),
            cancelled_date: optional_text_field(fields, columns::CANCELLED_DATE),
            estimated_tax_value: amount_field(fields, columns::ESTIMATED_TAX_VALUE)?,
        })
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled_date.is_some()
    }
}

impl Display for OrderEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Date: {}, Order Number: {}, Product: {}",
            self.order_date, self.order_number, self.product_name
        )
    }
}

fn render(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

fn text_field(fields: &Map<String, Value>, key: &str) -> String {
    optional_text_field(fields, key).unwrap_or_default()
}

fn optional_text_field(fields: &Map<String, Value>, key: &str) -> Option<String> {
    fields.get(key).and_then(render)
}

fn amount_field(fields: &Map<String, Value>, key: &'static str) -> Result<f64, LedgerError> {
    let invalid = |value: &Value| LedgerError::InvalidValue {
        field: key,
        value: value.to_string(),
    };

    match fields.get(key) {
        None | Some(Value::Null) => Ok(0.0),
        Some(value @ Value::Number(n)) => n.as_f64().ok_or_else(|| invalid(value)),
        Some(value @ Value::String(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return Ok(0.0);
            }
            trimmed.parse::<f64>().map_err(|_| invalid(value))
        }
        Some(other) => Err(invalid(other)),
    }
}
