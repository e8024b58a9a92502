//! Configuration for the dataset generator

use std::env;

use common::decimal::dec;
use common::error::{Error, Result};
use common::model::product::Product;

/// Configuration for the dataset generator
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Number of rows to generate
    pub rows: u32,
    /// Seed for the pseudorandom source; the same seed reproduces the
    /// same dataset byte for byte
    pub seed: u64,
    /// Product catalog to draw from
    pub products: Vec<Product>,
    /// Region labels to draw from
    pub regions: Vec<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            rows: 50,
            seed: 123,
            products: default_catalog(),
            regions: default_regions(),
        }
    }
}

impl GeneratorConfig {
    /// Create a configuration from environment variables, falling back to
    /// the defaults for anything unset
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            rows: env::var("SALES_ROWS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.rows),
            seed: env::var("SALES_SEED")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.seed),
            ..defaults
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 {
            return Err(Error::Configuration(
                "rows must be greater than zero".to_string(),
            ));
        }
        if self.products.is_empty() {
            return Err(Error::Configuration(
                "product catalog must not be empty".to_string(),
            ));
        }
        if self.regions.is_empty() {
            return Err(Error::Configuration(
                "at least one region label is required".to_string(),
            ));
        }
        Ok(())
    }
}

/// The standard demo product catalog
fn default_catalog() -> Vec<Product> {
    vec![
        Product {
            name: "Laptop".to_string(),
            category: "Electronics".to_string(),
            price: dec!(500.00),
        },
        Product {
            name: "Headphones".to_string(),
            category: "Electronics".to_string(),
            price: dec!(30.00),
        },
        Product {
            name: "Mouse".to_string(),
            category: "Electronics".to_string(),
            price: dec!(10.00),
        },
        Product {
            name: "Jeans".to_string(),
            category: "Clothing".to_string(),
            price: dec!(40.00),
        },
        Product {
            name: "Shirt".to_string(),
            category: "Clothing".to_string(),
            price: dec!(15.00),
        },
        Product {
            name: "Coffee Machine".to_string(),
            category: "Home".to_string(),
            price: dec!(120.00),
        },
        Product {
            name: "Blender".to_string(),
            category: "Home".to_string(),
            price: dec!(50.00),
        },
        Product {
            name: "Treadmill".to_string(),
            category: "Fitness".to_string(),
            price: dec!(135.00),
        },
    ]
}

/// The standard region labels
fn default_regions() -> Vec<String> {
    vec![
        "North".to_string(),
        "South".to_string(),
        "East".to_string(),
        "West".to_string(),
    ]
}
