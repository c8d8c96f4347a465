//! CSV record parsing.

use std::path::Path;

use csv::ReaderBuilder;

use invgen_core::{
    application::ApplicationError,
    domain::{InputFormat, RawRecord},
    error::InventoryResult,
};

/// Parse header-driven CSV into records.
///
/// Each data row maps header cell → value. A short row leaves its trailing
/// fields absent; cells beyond the header width are dropped.
pub fn parse_csv(text: &str, path: &Path) -> InventoryResult<Vec<RawRecord>> {
    let parse_error = |e: csv::Error| ApplicationError::Parse {
        path: path.to_path_buf(),
        format: InputFormat::Csv,
        reason: e.to_string(),
    };

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = reader.headers().map_err(parse_error)?.clone();

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row.map_err(parse_error)?;
        records.push(headers.iter().zip(row.iter()).collect::<RawRecord>());
    }
    Ok(records)
}
