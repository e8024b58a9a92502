//! Sales analytics engine driver
//!
//! Generates a synthetic sales dataset, loads it back through the
//! analyzer, runs every analytical query, and renders the results as a
//! plain-text or JSON report.

mod report;

use clap::Parser;
use common::decimal::Amount;
use common::error::Result;
use data_generator::{CsvGenerator, GeneratorConfig};
use dotenv::dotenv;
use sales_analytics::SalesAnalyzer;
use tracing::{debug, info, Level};
use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter, FmtSubscriber};

use crate::report::SalesReport;

/// Command line arguments
#[derive(Parser, Debug)]
#[clap(author, version, about)]
struct Args {
    /// Path of the generated CSV dataset
    #[clap(short, long, default_value = "data/sales.csv")]
    output: String,

    /// Number of rows to generate (overrides SALES_ROWS)
    #[clap(short, long)]
    rows: Option<u32>,

    /// Seed for the dataset generator (overrides SALES_SEED)
    #[clap(short, long)]
    seed: Option<u64>,

    /// Revenue threshold for the filter query
    #[clap(short, long, default_value = "10000")]
    threshold: Amount,

    /// Region for the single-region revenue query
    #[clap(long, default_value = "North")]
    region: String,

    /// Emit the report as JSON instead of plain text
    #[clap(long)]
    json: bool,
}

fn main() -> Result<()> {
    // Load environment variables
    dotenv().ok();

    // Parse command line arguments
    let args = Args::parse();

    // Initialize tracing with debug level if DEBUG=1 in .env
    let env_debug = std::env::var("DEBUG").unwrap_or_else(|_| "0".to_string());
    let log_level = if env_debug == "1" {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let env_filter = EnvFilter::builder()
        .with_default_directive(log_level.into())
        .from_env_lossy();

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_span_events(FmtSpan::NEW | FmtSpan::CLOSE)
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_ok() {
        info!("Tracing initialized");
        if env_debug == "1" {
            debug!("Debug logging enabled");
        }
    }

    info!("Starting sales analytics engine...");

    // Build the generator configuration; CLI flags win over environment
    let mut config = GeneratorConfig::from_env();
    if let Some(rows) = args.rows {
        config.rows = rows;
    }
    if let Some(seed) = args.seed {
        config.seed = seed;
    }

    let generator = CsvGenerator::new(config)?;
    let rows = generator.generate_to_path(&args.output)?;
    info!("Generated {} rows in {}", rows, args.output);

    let analyzer = SalesAnalyzer::from_path(&args.output)?;
    let report = SalesReport::build(&analyzer, args.threshold, &args.region)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report);
    }

    Ok(())
}
