//! CSV dataset loader

use std::fs::File;
use std::path::Path;

use common::error::{Error, ErrorExt, Result};
use common::model::record::{SalesRecord, FIELD_NAMES};
use tracing::debug;

/// Load and validate every record of a sales CSV file
///
/// The first line must be the exact seven-column header. Loading is
/// fail-fast: the first invalid row aborts the load and no partial
/// dataset is returned.
pub(crate) fn load_records(path: &Path) -> Result<Vec<SalesRecord>> {
    let file = File::open(path)
        .map_err(|e| Error::DataLoad(format!("cannot open '{}': {}", path.display(), e)))?;
    let mut reader = csv::Reader::from_reader(file);

    let headers = reader
        .headers()
        .map_err(|e| {
            Error::DataLoad(format!(
                "cannot read header of '{}': {}",
                path.display(),
                e
            ))
        })?
        .clone();
    if headers.iter().ne(FIELD_NAMES) {
        return Err(Error::DataLoad(format!(
            "'{}' must start with the header '{}'",
            path.display(),
            FIELD_NAMES.join(",")
        )));
    }

    let mut records = Vec::new();
    for (idx, row) in reader.records().enumerate() {
        // Line 1 is the header
        let line = idx + 2;
        let row = row.map_err(|e| Error::Validation(format!("row at line {}: {}", line, e)))?;
        let fields: Vec<&str> = row.iter().collect();
        let record =
            SalesRecord::parse(&fields).with_context(|| format!("row at line {}", line))?;
        records.push(record);
    }

    debug!("Parsed {} rows from {}", records.len(), path.display());
    Ok(records)
}
