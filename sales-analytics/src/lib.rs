//! Sales analytics over CSV transaction datasets
//!
//! Loads a sales CSV file into a validated, immutable record sequence and
//! answers a fixed set of aggregate queries over it with exact decimal
//! arithmetic.

mod analyzer;
mod loader;

pub use analyzer::SalesAnalyzer;
