//! JSON record parsing.

use std::path::Path;

use serde_json::{Map, Value};

use invgen_core::{
    application::ApplicationError,
    domain::{InputFormat, RawRecord},
    error::InventoryResult,
};

/// Parse a JSON array of objects into records.
///
/// Strings are taken verbatim; numbers and booleans become their textual
/// form; `null` leaves the field absent. Nested arrays or objects are
/// rejected.
pub fn parse_json(text: &str, path: &Path) -> InventoryResult<Vec<RawRecord>> {
    let parse_error = |reason: String| ApplicationError::Parse {
        path: path.to_path_buf(),
        format: InputFormat::Json,
        reason,
    };

    let objects: Vec<Map<String, Value>> =
        serde_json::from_str(text).map_err(|e| parse_error(e.to_string()))?;

    objects
        .into_iter()
        .enumerate()
        .map(|(index, object)| -> InventoryResult<RawRecord> {
            let mut record = RawRecord::new();
            for (key, value) in object {
                match value {
                    Value::Null => {}
                    Value::String(s) => record.insert(key, s),
                    Value::Number(n) => record.insert(key, n.to_string()),
                    Value::Bool(b) => record.insert(key, b.to_string()),
                    Value::Array(_) | Value::Object(_) => {
                        return Err(parse_error(format!(
                            "record #{index} field '{key}' must be a string, number or boolean"
                        ))
                        .into());
                    }
                }
            }
            Ok(record)
        })
        .collect()
}
