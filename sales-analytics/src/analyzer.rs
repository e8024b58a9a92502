//! Sales analyzer and its aggregate query operations

use std::collections::HashMap;
use std::path::Path;

use common::decimal::{precision, Amount};
use common::error::{Error, Result};
use common::model::record::SalesRecord;
use tracing::info;

use crate::loader;

/// Analyzer providing aggregate queries over a loaded sales dataset
///
/// The analyzer is a load-then-query object: records are parsed and
/// validated once at construction and never mutated afterwards. Every
/// query is a pure computation over the retained sequence, so a shared
/// analyzer can serve multiple callers without locking.
pub struct SalesAnalyzer {
    /// Validated records in file order
    records: Vec<SalesRecord>,
}

impl SalesAnalyzer {
    /// Load a sales dataset from a CSV file
    ///
    /// Fails with a data-load error if the file cannot be opened or has
    /// no valid header, and with a validation error on the first bad row.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let records = loader::load_records(path)?;
        info!(
            "Loaded {} sales records from {}",
            records.len(),
            path.display()
        );
        Ok(Self { records })
    }

    /// Create an analyzer over records that are already in memory
    pub fn from_records(records: Vec<SalesRecord>) -> Self {
        Self { records }
    }

    /// All records in load order
    pub fn records(&self) -> &[SalesRecord] {
        &self.records
    }

    /// Number of records in the dataset
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Total revenue across all records (sum of price * quantity)
    pub fn total_revenue(&self) -> Amount {
        self.records.iter().map(|r| r.revenue()).sum()
    }

    /// Total number of units sold across all records
    pub fn total_quantity(&self) -> u64 {
        self.records.iter().map(|r| u64::from(r.quantity)).sum()
    }

    /// Mean order value: total revenue divided by total quantity,
    /// rounded to two decimal places half-up
    pub fn mean_order_value(&self) -> Result<Amount> {
        let quantity = self.total_quantity();
        if quantity == 0 {
            return Err(Error::DivisionByZero(
                "mean order value requires a non-zero total quantity".to_string(),
            ));
        }
        Ok(precision::round_money(
            self.total_revenue() / Amount::from(quantity),
        ))
    }

    /// The record with the highest revenue
    ///
    /// Ties resolve to the earliest record in load order.
    pub fn highest_revenue_sale(&self) -> Result<&SalesRecord> {
        let mut best: Option<&SalesRecord> = None;
        for record in &self.records {
            let replace = match best {
                Some(current) => record.revenue() > current.revenue(),
                None => true,
            };
            if replace {
                best = Some(record);
            }
        }
        best.ok_or_else(|| {
            Error::EmptyDataset("highest revenue sale requires at least one record".to_string())
        })
    }

    /// Records whose revenue strictly exceeds the threshold, in load order
    ///
    /// The iterator is lazy and restartable; calling the method again
    /// starts a fresh pass over the dataset.
    pub fn orders_above_threshold(
        &self,
        threshold: Amount,
    ) -> impl Iterator<Item = &SalesRecord> + '_ {
        self.records
            .iter()
            .filter(move |r| r.revenue() > threshold)
    }

    /// Total revenue of records whose region matches exactly
    ///
    /// A region absent from the dataset yields zero.
    pub fn revenue_for_region(&self, region: &str) -> Amount {
        self.records
            .iter()
            .filter(|r| r.region == region)
            .map(|r| r.revenue())
            .sum()
    }

    /// Total revenue grouped by each region present in the dataset
    pub fn total_revenue_by_region(&self) -> HashMap<String, Amount> {
        let mut totals: HashMap<String, Amount> = HashMap::new();
        for record in &self.records {
            *totals.entry(record.region.clone()).or_insert(Amount::ZERO) += record.revenue();
        }
        totals
    }
}
