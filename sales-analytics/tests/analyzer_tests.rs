use std::fs;
use std::path::PathBuf;

use common::decimal::dec;
use common::error::Error;
use common::model::record::SalesRecord;
use sales_analytics::SalesAnalyzer;
use tempfile::TempDir;

const CSV_CONTENT: &str = "\
order_id,date,region,product,category,price,quantity
1,2025-01-01,North,Laptop,Electronics,1500.00,10
2,2025-01-02,South,Phone,Electronics,600.00,20
3,2025-01-03,North,Tablet,Electronics,300.00,5
4,2025-01-04,West,Laptop,Electronics,1200.00,3
5,2025-01-05,South,Headphones,Accessories,100.00,15
";

const HEADER_ONLY: &str = "order_id,date,region,product,category,price,quantity\n";

fn write_dataset(content: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("sales.csv");
    fs::write(&path, content).expect("Failed to write test dataset");
    (dir, path)
}

fn analyzer_for(content: &str) -> (TempDir, SalesAnalyzer) {
    let (dir, path) = write_dataset(content);
    let analyzer = SalesAnalyzer::from_path(&path).expect("Failed to load test dataset");
    (dir, analyzer)
}

#[test]
fn test_total_revenue() {
    let (_dir, analyzer) = analyzer_for(CSV_CONTENT);

    // Sum of price * quantity across all rows
    let expected = dec!(15000) + dec!(12000) + dec!(1500) + dec!(3600) + dec!(1500);
    assert_eq!(analyzer.total_revenue(), expected);
}

#[test]
fn test_total_quantity() {
    let (_dir, analyzer) = analyzer_for(CSV_CONTENT);

    assert_eq!(analyzer.total_quantity(), 10 + 20 + 5 + 3 + 15);
}

#[test]
fn test_mean_order_value() {
    let (_dir, analyzer) = analyzer_for(CSV_CONTENT);

    // 33600 / 53 = 633.9622..., rounded half-up to two places
    let mean = analyzer.mean_order_value().unwrap();
    assert_eq!(mean, dec!(633.96));
}

#[test]
fn test_mean_order_value_zero_quantity() {
    let content = "\
order_id,date,region,product,category,price,quantity
1,2025-01-01,North,Laptop,Electronics,1500.00,0
2,2025-01-02,South,Phone,Electronics,600.00,0
";
    let (_dir, analyzer) = analyzer_for(content);

    // Quantity can be zero per record; the mean is undefined then
    let result = analyzer.mean_order_value();
    assert!(matches!(result, Err(Error::DivisionByZero(_))));
}

#[test]
fn test_highest_revenue_sale() {
    let (_dir, analyzer) = analyzer_for(CSV_CONTENT);

    let best = analyzer.highest_revenue_sale().unwrap();
    assert_eq!(best.order_id, 1);
    assert_eq!(best.revenue(), dec!(15000));
}

#[test]
fn test_highest_revenue_sale_tie_break() {
    // Rows 1 and 2 both have revenue 200; the earlier row must win
    let content = "\
order_id,date,region,product,category,price,quantity
1,2025-01-01,North,Mouse,Electronics,100.00,2
2,2025-01-02,South,Shirt,Clothing,50.00,4
";
    let (_dir, analyzer) = analyzer_for(content);

    let best = analyzer.highest_revenue_sale().unwrap();
    assert_eq!(best.order_id, 1);
}

#[test]
fn test_highest_revenue_sale_empty_dataset() {
    let (_dir, analyzer) = analyzer_for(HEADER_ONLY);

    let result = analyzer.highest_revenue_sale();
    assert!(matches!(result, Err(Error::EmptyDataset(_))));
}

#[test]
fn test_orders_above_threshold() {
    let (_dir, analyzer) = analyzer_for(CSV_CONTENT);

    let results: Vec<&SalesRecord> = analyzer.orders_above_threshold(dec!(5000)).collect();
    assert_eq!(results.len(), 2);

    // Load order is preserved
    assert_eq!(results[0].order_id, 1);
    assert_eq!(results[1].order_id, 2);
}

#[test]
fn test_orders_above_threshold_is_strict() {
    let (_dir, analyzer) = analyzer_for(CSV_CONTENT);

    // A row with revenue exactly 12000 must not match threshold 12000
    let results: Vec<&SalesRecord> = analyzer.orders_above_threshold(dec!(12000)).collect();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].order_id, 1);
}

#[test]
fn test_orders_above_threshold_no_match() {
    let (_dir, analyzer) = analyzer_for(CSV_CONTENT);

    let results: Vec<&SalesRecord> = analyzer.orders_above_threshold(dec!(1000000)).collect();
    assert!(results.is_empty());
}

#[test]
fn test_orders_above_threshold_is_restartable() {
    let (_dir, analyzer) = analyzer_for(CSV_CONTENT);

    // Two independent passes over the same analyzer yield the same rows
    let first: Vec<u64> = analyzer
        .orders_above_threshold(dec!(5000))
        .map(|r| r.order_id)
        .collect();
    let second: Vec<u64> = analyzer
        .orders_above_threshold(dec!(5000))
        .map(|r| r.order_id)
        .collect();
    assert_eq!(first, second);
}

#[test]
fn test_revenue_for_region() {
    let (_dir, analyzer) = analyzer_for(CSV_CONTENT);

    assert_eq!(analyzer.revenue_for_region("North"), dec!(16500));
    assert_eq!(analyzer.revenue_for_region("South"), dec!(13500));
    assert_eq!(analyzer.revenue_for_region("West"), dec!(3600));
}

#[test]
fn test_revenue_for_region_not_found() {
    let (_dir, analyzer) = analyzer_for(CSV_CONTENT);

    assert_eq!(analyzer.revenue_for_region("East"), dec!(0));
}

#[test]
fn test_total_revenue_by_region_keys() {
    let (_dir, analyzer) = analyzer_for(CSV_CONTENT);

    let grouped = analyzer.total_revenue_by_region();
    let mut regions: Vec<&str> = grouped.keys().map(String::as_str).collect();
    regions.sort_unstable();
    assert_eq!(regions, ["North", "South", "West"]);
}

#[test]
fn test_total_revenue_by_region() {
    let (_dir, analyzer) = analyzer_for(CSV_CONTENT);

    let grouped = analyzer.total_revenue_by_region();
    assert_eq!(grouped["North"], dec!(16500));
    assert_eq!(grouped["South"], dec!(13500));
    assert_eq!(grouped["West"], dec!(3600));

    // Each grouped value matches the single-region query
    for (region, amount) in &grouped {
        assert_eq!(*amount, analyzer.revenue_for_region(region));
    }
}

#[test]
fn test_empty_dataset_aggregates() {
    let (_dir, analyzer) = analyzer_for(HEADER_ONLY);

    assert!(analyzer.is_empty());
    assert_eq!(analyzer.total_revenue(), dec!(0));
    assert_eq!(analyzer.total_quantity(), 0);
    assert!(analyzer.total_revenue_by_region().is_empty());
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("does_not_exist.csv");

    let result = SalesAnalyzer::from_path(&path);
    assert!(matches!(result, Err(Error::DataLoad(_))));
}

#[test]
fn test_empty_file() {
    let (_dir, path) = write_dataset("");

    let result = SalesAnalyzer::from_path(&path);
    assert!(matches!(result, Err(Error::DataLoad(_))));
}

#[test]
fn test_wrong_header() {
    let content = "\
id,date,region,product,category,price,quantity
1,2025-01-01,North,Laptop,Electronics,1500.00,10
";
    let (_dir, path) = write_dataset(content);

    let result = SalesAnalyzer::from_path(&path);
    assert!(matches!(result, Err(Error::DataLoad(_))));
}

#[test]
fn test_invalid_price_scale() {
    // One fractional digit instead of two
    let content = "\
order_id,date,region,product,category,price,quantity
1,2025-01-01,North,Laptop,Electronics,1500.5,10
";
    let (_dir, path) = write_dataset(content);

    let result = SalesAnalyzer::from_path(&path);
    assert!(matches!(result, Err(Error::Validation(_))));
}

#[test]
fn test_nonpositive_price() {
    let content = "\
order_id,date,region,product,category,price,quantity
1,2025-01-01,North,Laptop,Electronics,0.00,10
";
    let (_dir, path) = write_dataset(content);

    let result = SalesAnalyzer::from_path(&path);
    assert!(matches!(result, Err(Error::Validation(_))));
}

#[test]
fn test_invalid_quantity() {
    let content = "\
order_id,date,region,product,category,price,quantity
1,2025-01-01,North,Laptop,Electronics,1500.00,2.5
";
    let (_dir, path) = write_dataset(content);

    let result = SalesAnalyzer::from_path(&path);
    assert!(matches!(result, Err(Error::Validation(_))));
}

#[test]
fn test_invalid_date() {
    let content = "\
order_id,date,region,product,category,price,quantity
1,2025-13-01,North,Laptop,Electronics,1500.00,10
";
    let (_dir, path) = write_dataset(content);

    let result = SalesAnalyzer::from_path(&path);
    assert!(matches!(result, Err(Error::Validation(_))));
}

#[test]
fn test_load_fails_fast_on_bad_row() {
    // Row 3 is malformed; rows 2 and 4 are fine. The whole load must
    // fail and no partial dataset may be observable.
    let content = "\
order_id,date,region,product,category,price,quantity
1,2025-01-01,North,Laptop,Electronics,1500.00,10
2,2025-01-02,South,Phone,Electronics,-600.00,20
3,2025-01-03,West,Tablet,Electronics,300.00,5
";
    let (_dir, path) = write_dataset(content);

    let result = SalesAnalyzer::from_path(&path);
    assert!(matches!(result, Err(Error::Validation(_))));
}

#[test]
fn test_record_parse_and_revenue() {
    let fields = [
        "7",
        "2025-06-15",
        "East",
        "Blender",
        "Home",
        "19.99",
        "3",
    ];
    let record = SalesRecord::parse(&fields).unwrap();

    assert_eq!(record.order_id, 7);
    assert_eq!(record.date.to_string(), "2025-06-15");
    assert_eq!(record.region, "East");
    assert_eq!(record.product, "Blender");
    assert_eq!(record.category, "Home");
    assert_eq!(record.price, dec!(19.99));
    assert_eq!(record.quantity, 3);
    assert_eq!(record.revenue(), dec!(59.97));
}

#[test]
fn test_record_parse_rejects_zero_order_id() {
    let fields = ["0", "2025-06-15", "East", "Blender", "Home", "19.99", "3"];

    let result = SalesRecord::parse(&fields);
    assert!(matches!(result, Err(Error::Validation(_))));
}

#[test]
fn test_from_records_matches_from_path() {
    let (_dir, analyzer) = analyzer_for(CSV_CONTENT);

    let in_memory = SalesAnalyzer::from_records(analyzer.records().to_vec());
    assert_eq!(in_memory.total_revenue(), analyzer.total_revenue());
    assert_eq!(in_memory.total_quantity(), analyzer.total_quantity());
}
