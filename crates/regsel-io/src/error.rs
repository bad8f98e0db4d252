use std::path::PathBuf;

use regsel_data::DataError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IoError {
    #[error("file '{}' not found", .0.display())]
    NotFound(PathBuf),

    #[error("failed to access '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed CSV in '{}': {source}", .path.display())]
    Csv { path: PathBuf, source: csv::Error },

    #[error("'{}' row {row}, column '{column}': cannot parse '{value}' as a finite number", .path.display())]
    Parse {
        path: PathBuf,
        row: usize,
        column: String,
        value: String,
    },

    #[error("invalid dataset in '{}': {source}", .path.display())]
    Data { path: PathBuf, source: DataError },

    #[error("invalid model artifact '{}': {source}", .path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl IoError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        IoError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type IoResult<T> = Result<T, IoError>;
