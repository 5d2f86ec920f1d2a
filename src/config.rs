use std::path::PathBuf;

/// Default dataset location, relative to the working directory.
pub const DEFAULT_INPUT_PATH: &str = "dataset/qm9.csv";
/// Default location of the written sample.
pub const DEFAULT_OUTPUT_PATH: &str = "dataset/qm9_subset.csv";
pub const DEFAULT_SAMPLE_SIZE: usize = 10_000;
pub const DEFAULT_SEED: u64 = 42;

// ---------------------------------------------------------------------------
// Sampler configuration
// ---------------------------------------------------------------------------

/// Everything a single sampling run needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SamplerConfig {
    /// Table to read.
    pub input_path: PathBuf,
    /// File to create or overwrite with the sample.
    pub output_path: PathBuf,
    /// Number of rows to draw; capped at the dataset size.
    pub sample_size: usize,
    /// Seed for the row-selection RNG.
    pub seed: u64,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            sample_size: DEFAULT_SAMPLE_SIZE,
            seed: DEFAULT_SEED,
        }
    }
}

impl SamplerConfig {
    pub fn new(input_path: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            output_path: output_path.into(),
            ..Default::default()
        }
    }

    pub fn with_sample_size(mut self, sample_size: usize) -> Self {
        self.sample_size = sample_size;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
