/// Data layer: core types, loading, and writing.
///
/// Architecture:
/// ```text
///   .csv / .json
///        │
///        ▼
///   ┌──────────┐
///   │  loader  │  parse file → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ Dataset  │  header + Vec<Record>
///   └──────────┘
///        │  (sampler picks rows)
///        ▼
///   ┌──────────┐
///   │  writer  │  Dataset → file, same format, no index column
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod writer;

use std::path::Path;

/// On-disk table layout, chosen from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    /// Comma-separated values with a header row.
    Csv,
    /// Records-oriented JSON: `[{ "col": value, ... }, ...]`.
    Json,
}

impl TableFormat {
    /// `.json` selects JSON records; anything else is read as CSV.
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_ascii_lowercase();

        match ext.as_str() {
            "json" => TableFormat::Json,
            _ => TableFormat::Csv,
        }
    }
}
