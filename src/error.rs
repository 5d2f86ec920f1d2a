use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result alias used throughout the data layer.
pub type Result<T> = std::result::Result<T, SampleError>;

/// Coarse failure class, independent of which format or stage failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input (or a parent directory of the output) does not exist.
    NotFound,
    /// The file exists but may not be read or written.
    Permission,
    /// The file was readable but is not a well-formed table.
    Parse,
    /// Any other I/O failure.
    Io,
}

/// Errors raised while loading, sampling or writing a dataset.
#[derive(Debug, Error)]
pub enum SampleError {
    #[error("I/O error on {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed CSV in {}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("malformed JSON in {}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{} has no header row", path.display())]
    EmptyInput { path: PathBuf },

    #[error("{}, row {row}: {message}", path.display())]
    Schema {
        path: PathBuf,
        row: usize,
        message: String,
    },
}

impl SampleError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        SampleError::Io {
            path: path.into(),
            source,
        }
    }

    /// Wrap a `csv::Error`, lifting plain I/O failures out of the CSV layer
    /// so that a missing file is still reported as `NotFound`.
    pub(crate) fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        let path = path.into();
        if !source.is_io_error() {
            return SampleError::Csv { path, source };
        }
        match source.into_kind() {
            csv::ErrorKind::Io(err) => SampleError::Io { path, source: err },
            other => SampleError::Io {
                path,
                source: io::Error::other(format!("{other:?}")),
            },
        }
    }

    pub(crate) fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        let path = path.into();
        if source.is_io() {
            let err: io::Error = source.into();
            return SampleError::Io { path, source: err };
        }
        SampleError::Json { path, source }
    }

    /// Classify the error into one of the coarse failure classes.
    pub fn kind(&self) -> ErrorKind {
        match self {
            SampleError::Io { source, .. } => match source.kind() {
                io::ErrorKind::NotFound => ErrorKind::NotFound,
                io::ErrorKind::PermissionDenied => ErrorKind::Permission,
                io::ErrorKind::InvalidData => ErrorKind::Parse,
                _ => ErrorKind::Io,
            },
            SampleError::Csv { .. }
            | SampleError::Json { .. }
            | SampleError::EmptyInput { .. }
            | SampleError::Schema { .. } => ErrorKind::Parse,
        }
    }
}
