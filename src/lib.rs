//! Draw a reproducible random row sample from a tabular dataset.
//!
//! [`run`] performs the whole pipeline: load the input table, pick
//! `sample_size` rows with a seeded RNG, and write them to the output path in
//! the same format, without an index column.

pub mod config;
pub mod data;
pub mod error;
pub mod sampler;

use std::fmt;
use std::path::PathBuf;

pub use config::SamplerConfig;
pub use error::{ErrorKind, Result, SampleError};

/// Outcome of a successful [`run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleReport {
    pub output_path: PathBuf,
    /// Data rows written (header excluded).
    pub rows_written: usize,
    /// Data rows in the input.
    pub rows_available: usize,
}

impl fmt::Display for SampleReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} records have been saved to {}",
            format_count(self.rows_written),
            self.output_path.display()
        )
    }
}

/// Load → sample → write.
pub fn run(config: &SamplerConfig) -> Result<SampleReport> {
    let dataset = data::loader::load_file(&config.input_path)?;
    let subset = sampler::sample_rows(&dataset, config.sample_size, config.seed);
    data::writer::save_file(&subset, &config.output_path)?;

    Ok(SampleReport {
        output_path: config.output_path.clone(),
        rows_written: subset.len(),
        rows_available: dataset.len(),
    })
}

/// `10000` → `"10,000"`.
fn format_count(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
