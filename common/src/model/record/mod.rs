//! Sales record model and field validation

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::decimal::{precision, Amount, Price};
use crate::error::{Error, Result};

/// Number of columns in a sales dataset row
pub const FIELD_COUNT: usize = 7;

/// Column names of a sales dataset, in file order
pub const FIELD_NAMES: [&str; FIELD_COUNT] = [
    "order_id", "date", "region", "product", "category", "price", "quantity",
];

/// Date format used by the dataset
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Sales record representing a single transaction row
///
/// Records are constructed once from parsed field values and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesRecord {
    /// Order ID, positive and unique within a file
    pub order_id: u64,
    /// Order date
    pub date: NaiveDate,
    /// Region label
    pub region: String,
    /// Product name
    pub product: String,
    /// Product category
    pub category: String,
    /// Unit price, strictly positive with two fractional digits
    pub price: Price,
    /// Number of units sold
    pub quantity: u32,
}

impl SalesRecord {
    /// Parse and validate the seven raw string fields of one row
    ///
    /// Fields must appear in column order. Any malformed field or
    /// constraint violation fails the whole record.
    pub fn parse(fields: &[&str]) -> Result<Self> {
        if fields.len() != FIELD_COUNT {
            return Err(Error::Validation(format!(
                "expected {} fields, found {}",
                FIELD_COUNT,
                fields.len()
            )));
        }

        Ok(Self {
            order_id: parse_order_id(fields[0])?,
            date: parse_date(fields[1])?,
            region: fields[2].to_string(),
            product: fields[3].to_string(),
            category: fields[4].to_string(),
            price: parse_price(fields[5])?,
            quantity: parse_quantity(fields[6])?,
        })
    }

    /// Revenue of this record (price * quantity), exact decimal
    pub fn revenue(&self) -> Amount {
        self.price * Amount::from(self.quantity)
    }
}

/// Parse a strictly positive integer order ID
fn parse_order_id(raw: &str) -> Result<u64> {
    let order_id: u64 = raw.trim().parse().map_err(|_| {
        Error::Validation(format!("order_id must be an integer, found '{}'", raw))
    })?;
    if order_id == 0 {
        return Err(Error::Validation(
            "order_id must be greater than zero".to_string(),
        ));
    }
    Ok(order_id)
}

/// Parse a calendar date in `YYYY-MM-DD` format
fn parse_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).map_err(|_| {
        Error::Validation(format!("date must match YYYY-MM-DD, found '{}'", raw))
    })
}

/// Parse a price: exact decimal, strictly positive, two fractional digits
fn parse_price(raw: &str) -> Result<Price> {
    let price = Price::from_str_exact(raw.trim())
        .map_err(|_| Error::Validation(format!("price must be a decimal, found '{}'", raw)))?;
    if price <= Price::ZERO {
        return Err(Error::Validation(format!(
            "price must be greater than zero, found '{}'",
            raw
        )));
    }
    if price.scale() != precision::MONEY_PRECISION {
        return Err(Error::Validation(format!(
            "price must have exactly {} fractional digits, found '{}'",
            precision::MONEY_PRECISION,
            raw
        )));
    }
    Ok(price)
}

/// Parse a non-negative integer quantity
fn parse_quantity(raw: &str) -> Result<u32> {
    raw.trim().parse().map_err(|_| {
        Error::Validation(format!(
            "quantity must be a non-negative integer, found '{}'",
            raw
        ))
    })
}
