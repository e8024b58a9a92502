//! Deterministic synthetic sales dataset generation
//!
//! Produces CSV datasets from a seeded pseudorandom source so the same
//! configuration always yields the same file.

mod config;
mod generator;

pub use config::GeneratorConfig;
pub use generator::CsvGenerator;
