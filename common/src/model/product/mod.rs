//! Product catalog model

use serde::{Deserialize, Serialize};

use crate::decimal::{precision, Price};
use crate::error::{Error, Result};

/// Product catalog entry used to synthesize sales data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Product name
    pub name: String,
    /// Product category
    pub category: String,
    /// Unit price, strictly positive with two fractional digits
    pub price: Price,
}

impl Product {
    /// Create a new product, validating the price constraint
    pub fn new(name: String, category: String, price: Price) -> Result<Self> {
        if price <= Price::ZERO {
            return Err(Error::Validation(format!(
                "product '{}' must have a price greater than zero",
                name
            )));
        }
        if price.scale() != precision::MONEY_PRECISION {
            return Err(Error::Validation(format!(
                "product '{}' price must have exactly {} fractional digits",
                name,
                precision::MONEY_PRECISION
            )));
        }
        Ok(Self {
            name,
            category,
            price,
        })
    }
}
