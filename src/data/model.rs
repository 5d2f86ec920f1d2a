use std::fmt;
use std::hash::{Hash, Hasher};

use serde_json::Value as JsonValue;

// ---------------------------------------------------------------------------
// CellValue – inferred view of a raw cell
// ---------------------------------------------------------------------------

/// A dynamically-typed scalar mirroring the common Pandas dtypes.
///
/// Cells are stored as raw text; this view is only built when a row read
/// from CSV is written as JSON (numbers, booleans and nulls).
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    String(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Null,
}

impl CellValue {
    /// Guess the type of a raw text cell.
    pub fn infer(s: &str) -> Self {
        if s.is_empty() {
            return CellValue::Null;
        }
        if let Ok(i) = s.parse::<i64>() {
            return CellValue::Integer(i);
        }
        if let Ok(f) = s.parse::<f64>() {
            return CellValue::Float(f);
        }
        if s == "true" || s == "false" {
            return CellValue::Bool(s == "true");
        }
        CellValue::String(s.to_string())
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::String(s) => write!(f, "{s}"),
            CellValue::Integer(i) => write!(f, "{i}"),
            CellValue::Float(v) => write!(f, "{v}"),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Null => Ok(()),
        }
    }
}

// ---------------------------------------------------------------------------
// Record – one row of the table
// ---------------------------------------------------------------------------

/// A single row, one raw text cell per column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub fields: Vec<String>,
    /// Original JSON scalars, one per column, when the row was read from JSON.
    pub json: Option<Vec<JsonValue>>,
}

impl Record {
    pub fn new(fields: Vec<String>) -> Self {
        Record { fields, json: None }
    }

    /// A row read from JSON: keeps the source values next to their text form.
    pub fn from_json(fields: Vec<String>, values: Vec<JsonValue>) -> Self {
        Record {
            fields,
            json: Some(values),
        }
    }

    pub fn get(&self, idx: usize) -> Option<&str> {
        self.fields.get(idx).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(String::as_str)
    }
}

// Text cells only; `json` always agrees with `fields`.
impl Hash for Record {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.fields.hash(state);
    }
}

impl<S: Into<String>> FromIterator<S> for Record {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Record::new(iter.into_iter().map(Into::into).collect())
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full parsed table: ordered header plus ordered rows.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    /// Column names, in file order.
    pub columns: Vec<String>,
    /// All rows; each has exactly `columns.len()` cells.
    pub rows: Vec<Record>,
}

impl Dataset {
    pub fn new(columns: Vec<String>, rows: Vec<Record>) -> Self {
        Dataset { columns, rows }
    }

    /// Build a new dataset with the same header and the rows at `indices`,
    /// in the order given.
    ///
    /// # Panics
    ///
    /// Panics if any index is `>= self.len()`.
    pub(crate) fn take_rows(&self, indices: impl IntoIterator<Item = usize>) -> Self {
        let rows = indices
            .into_iter()
            .map(|i| self.rows[i].clone())
            .collect();
        Dataset {
            columns: self.columns.clone(),
            rows,
        }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the dataset has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
