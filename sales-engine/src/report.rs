//! Report assembly and rendering

use std::collections::HashMap;
use std::fmt;

use common::decimal::Amount;
use common::error::{Error, Result};
use common::model::record::SalesRecord;
use sales_analytics::SalesAnalyzer;
use serde::Serialize;

/// Snapshot of every analytical query over one dataset
#[derive(Debug, Clone, Serialize)]
pub struct SalesReport {
    /// Sum of revenue across all records
    pub total_revenue: Amount,
    /// Sum of units sold across all records
    pub total_quantity: u64,
    /// Mean order value; absent when no units were sold
    pub mean_order_value: Option<Amount>,
    /// Record with the highest revenue
    pub highest_revenue_sale: SalesRecord,
    /// Revenue threshold used for the filter below
    pub threshold: Amount,
    /// Records whose revenue strictly exceeds the threshold
    pub orders_above_threshold: Vec<SalesRecord>,
    /// Region used for the single-region query below
    pub region: String,
    /// Revenue for that region
    pub revenue_for_region: Amount,
    /// Revenue grouped by region
    pub revenue_by_region: HashMap<String, Amount>,
}

impl SalesReport {
    /// Run every analyzer query and collect the results
    pub fn build(analyzer: &SalesAnalyzer, threshold: Amount, region: &str) -> Result<Self> {
        // Zero units sold leaves the mean undefined; rendered as n/a
        let mean_order_value = match analyzer.mean_order_value() {
            Ok(value) => Some(value),
            Err(Error::DivisionByZero(_)) => None,
            Err(e) => return Err(e),
        };

        Ok(Self {
            total_revenue: analyzer.total_revenue(),
            total_quantity: analyzer.total_quantity(),
            mean_order_value,
            highest_revenue_sale: analyzer.highest_revenue_sale()?.clone(),
            threshold,
            orders_above_threshold: analyzer.orders_above_threshold(threshold).cloned().collect(),
            region: region.to_string(),
            revenue_for_region: analyzer.revenue_for_region(region),
            revenue_by_region: analyzer.total_revenue_by_region(),
        })
    }
}

impl fmt::Display for SalesReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Sales Report ===")?;
        writeln!(f, "Total revenue:    ${}", self.total_revenue)?;
        writeln!(f, "Total quantity:   {}", self.total_quantity)?;
        match &self.mean_order_value {
            Some(value) => writeln!(f, "Mean order value: ${}", value)?,
            None => writeln!(f, "Mean order value: n/a (no units sold)")?,
        }
        writeln!(f)?;

        writeln!(f, "Highest revenue sale:")?;
        writeln!(f, "  {}", format_record(&self.highest_revenue_sale))?;
        writeln!(f)?;

        writeln!(f, "Orders above ${}:", self.threshold)?;
        if self.orders_above_threshold.is_empty() {
            writeln!(f, "  (none)")?;
        }
        for record in &self.orders_above_threshold {
            writeln!(f, "  {}", format_record(record))?;
        }
        writeln!(f)?;

        writeln!(
            f,
            "Revenue for '{}': ${}",
            self.region, self.revenue_for_region
        )?;
        writeln!(f)?;

        writeln!(f, "Revenue by region:")?;
        let mut regions: Vec<_> = self.revenue_by_region.iter().collect();
        regions.sort_by(|a, b| a.0.cmp(b.0));
        for (region, amount) in regions {
            writeln!(f, "  {}: ${}", region, amount)?;
        }
        Ok(())
    }
}

/// One-line rendering of a record for report sections
fn format_record(record: &SalesRecord) -> String {
    format!(
        "#{} {} {} {} ({}) ${} x {} = ${}",
        record.order_id,
        record.date,
        record.region,
        record.product,
        record.category,
        record.price,
        record.quantity,
        record.revenue()
    )
}
