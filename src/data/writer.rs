use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde_json::{Map, Number, Value as JsonValue};

use super::model::{CellValue, Dataset};
use super::TableFormat;
use crate::error::{Result, SampleError};

/// Write a dataset to a file, creating or truncating it.  Dispatch by
/// extension, mirroring [`super::loader::load_file`].
///
/// No index column is written.
pub fn save_file(dataset: &Dataset, path: &Path) -> Result<()> {
    let format = TableFormat::from_path(path);
    log::debug!("Writing {} as {format:?}", path.display());

    match format {
        TableFormat::Csv => save_csv(dataset, path)?,
        TableFormat::Json => save_json(dataset, path)?,
    }

    log::info!("Wrote {} rows to {}", dataset.len(), path.display());
    Ok(())
}

// ---------------------------------------------------------------------------
// CSV writer
// ---------------------------------------------------------------------------

fn save_csv(dataset: &Dataset, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).map_err(|e| SampleError::csv(path, e))?;

    writer
        .write_record(&dataset.columns)
        .map_err(|e| SampleError::csv(path, e))?;
    for record in &dataset.rows {
        writer
            .write_record(&record.fields)
            .map_err(|e| SampleError::csv(path, e))?;
    }

    writer.flush().map_err(|e| SampleError::io(path, e))
}

// ---------------------------------------------------------------------------
// JSON writer
// ---------------------------------------------------------------------------

/// Records-oriented output.  Rows read from JSON are written back with their
/// original values; text cells from CSV get their inferred type so a numeric
/// column comes out as JSON numbers.
fn save_json(dataset: &Dataset, path: &Path) -> Result<()> {
    let records: Vec<JsonValue> = dataset
        .rows
        .iter()
        .map(|record| {
            let obj: Map<String, JsonValue> = match &record.json {
                Some(values) => dataset
                    .columns
                    .iter()
                    .cloned()
                    .zip(values.iter().cloned())
                    .collect(),
                None => dataset
                    .columns
                    .iter()
                    .zip(record.iter())
                    .map(|(col, cell)| (col.clone(), cell_to_json(cell)))
                    .collect(),
            };
            JsonValue::Object(obj)
        })
        .collect();

    let file = File::create(path).map_err(|e| SampleError::io(path, e))?;
    let mut out = BufWriter::new(file);
    serde_json::to_writer(&mut out, &records).map_err(|e| SampleError::json(path, e))?;
    out.flush().map_err(|e| SampleError::io(path, e))
}

fn cell_to_json(cell: &str) -> JsonValue {
    match CellValue::infer(cell) {
        CellValue::Null => JsonValue::Null,
        CellValue::Bool(b) => JsonValue::Bool(b),
        CellValue::Integer(i) => JsonValue::Number(i.into()),
        // NaN / inf have no JSON number form; keep the original text.
        CellValue::Float(f) => Number::from_f64(f)
            .map(JsonValue::Number)
            .unwrap_or_else(|| JsonValue::String(cell.to_string())),
        CellValue::String(s) => JsonValue::String(s),
    }
}
