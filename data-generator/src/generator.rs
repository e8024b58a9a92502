//! Synthetic sales CSV writer

use std::fs;
use std::path::Path;

use chrono::{Days, NaiveDate};
use common::error::Result;
use common::model::record::{SalesRecord, DATE_FORMAT, FIELD_NAMES};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use crate::config::GeneratorConfig;

/// Day offsets cover calendar year 2025 inclusive
const MAX_DAY_OFFSET: u64 = 364;

/// Deterministic synthetic sales dataset generator
///
/// The pseudorandom source is seeded from the configuration, so an
/// identical configuration always produces an identical dataset.
pub struct CsvGenerator {
    config: GeneratorConfig,
}

impl CsvGenerator {
    /// Create a new generator with a validated configuration
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Reference to the generator configuration
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate the configured number of records in memory
    ///
    /// Produces the same rows as `generate_to_path` with the same
    /// configuration.
    pub fn generate_records(&self) -> Vec<SalesRecord> {
        let mut rng = SmallRng::seed_from_u64(self.config.seed);
        let mut records = Vec::with_capacity(self.config.rows as usize);
        for order_id in 1..=u64::from(self.config.rows) {
            records.push(self.next_record(order_id, &mut rng));
        }
        records
    }

    /// Generate the dataset and write it as CSV to the given path
    ///
    /// Parent directories are created as needed. Returns the number of
    /// rows written.
    pub fn generate_to_path<P: AsRef<Path>>(&self, path: P) -> Result<u32> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let mut writer = csv::Writer::from_path(path)?;
        writer.write_record(FIELD_NAMES)?;

        let records = self.generate_records();
        for record in &records {
            writer.write_record(&[
                record.order_id.to_string(),
                record.date.format(DATE_FORMAT).to_string(),
                record.region.clone(),
                record.product.clone(),
                record.category.clone(),
                record.price.to_string(),
                record.quantity.to_string(),
            ])?;
        }
        writer.flush()?;

        info!(
            "Generated {} rows of sales data in {}",
            records.len(),
            path.display()
        );
        Ok(self.config.rows)
    }

    /// Synthesize a single record
    fn next_record(&self, order_id: u64, rng: &mut SmallRng) -> SalesRecord {
        let product = &self.config.products[rng.gen_range(0..self.config.products.len())];
        let region = &self.config.regions[rng.gen_range(0..self.config.regions.len())];

        SalesRecord {
            order_id,
            date: random_date(rng),
            region: region.clone(),
            product: product.name.clone(),
            category: product.category.clone(),
            price: product.price,
            quantity: rng.gen_range(1..=25),
        }
    }
}

/// Draw a uniformly random date in calendar year 2025
fn random_date(rng: &mut SmallRng) -> NaiveDate {
    let start = NaiveDate::from_ymd_opt(2025, 1, 1).expect("valid calendar date");
    start + Days::new(rng.gen_range(0..=MAX_DAY_OFFSET))
}
