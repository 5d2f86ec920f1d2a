use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde_json::Value as JsonValue;

use super::model::{Dataset, Record};
use super::TableFormat;
use crate::error::{Result, SampleError};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.json` – `[{ "col": value, ... }, ...]`
/// * anything else – CSV with a header row
pub fn load_file(path: &Path) -> Result<Dataset> {
    let format = TableFormat::from_path(path);
    log::debug!("Loading {} as {format:?}", path.display());

    let dataset = match format {
        TableFormat::Csv => load_csv(path)?,
        TableFormat::Json => load_json(path)?,
    };

    log::info!(
        "Loaded {} rows with {} columns from {}",
        dataset.len(),
        dataset.columns.len(),
        path.display()
    );
    Ok(dataset)
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row with column names, then one record per line.
/// Every record must have as many fields as the header.
fn load_csv(path: &Path) -> Result<Dataset> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_path(path)
        .map_err(|e| SampleError::csv(path, e))?;

    let columns: Vec<String> = reader
        .headers()
        .map_err(|e| SampleError::csv(path, e))?
        .iter()
        .map(|h| h.to_string())
        .collect();

    if columns.is_empty() {
        return Err(SampleError::EmptyInput {
            path: path.to_path_buf(),
        });
    }

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| SampleError::csv(path, e))?;
        rows.push(record.iter().collect::<Record>());
    }

    Ok(Dataset::new(columns, rows))
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, the default `df.to_json(orient='records')`):
///
/// ```json
/// [
///   { "mol_id": "gdb_1", "mu": 0.0, "homo": -0.3877 },
///   ...
/// ]
/// ```
///
/// Column order is taken from the first object.
fn load_json(path: &Path) -> Result<Dataset> {
    let file = File::open(path).map_err(|e| SampleError::io(path, e))?;
    let root: JsonValue =
        serde_json::from_reader(BufReader::new(file)).map_err(|e| SampleError::json(path, e))?;

    let schema_error = |row: usize, message: String| SampleError::Schema {
        path: path.to_path_buf(),
        row,
        message,
    };

    let records = root
        .as_array()
        .ok_or_else(|| schema_error(0, "expected top-level JSON array".into()))?;

    let Some(first) = records.first() else {
        return Err(SampleError::EmptyInput {
            path: path.to_path_buf(),
        });
    };
    let columns: Vec<String> = first
        .as_object()
        .ok_or_else(|| schema_error(0, "row is not a JSON object".into()))?
        .keys()
        .cloned()
        .collect();

    let mut rows = Vec::with_capacity(records.len());
    for (i, rec) in records.iter().enumerate() {
        let obj = rec
            .as_object()
            .ok_or_else(|| schema_error(i, "row is not a JSON object".into()))?;

        if obj.len() != columns.len() {
            return Err(schema_error(
                i,
                format!("expected {} fields, found {}", columns.len(), obj.len()),
            ));
        }

        let values = columns
            .iter()
            .map(|col| {
                obj.get(col)
                    .cloned()
                    .ok_or_else(|| schema_error(i, format!("missing key '{col}'")))
            })
            .collect::<Result<Vec<_>>>()?;
        let fields = values.iter().map(json_to_cell).collect();

        rows.push(Record::from_json(fields, values));
    }

    Ok(Dataset::new(columns, rows))
}

fn json_to_cell(val: &JsonValue) -> String {
    match val {
        JsonValue::String(s) => s.clone(),
        JsonValue::Null => String::new(),
        other => other.to_string(),
    }
}
