use std::path::PathBuf;

use regsel_core::MatrixError;
use regsel_data::DataError;
use regsel_io::IoError;
use thiserror::Error;

/// Failure of the feature-ranking step.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RankingError {
    #[error("cannot select {requested} of {available} features")]
    InvalidTarget { requested: usize, available: usize },

    #[error("elimination step must be positive")]
    ZeroStep,

    #[error("ranking estimator failed: {0}")]
    Estimator(MatrixError),

    #[error("ranking estimator produced a non-finite weight for column {0}")]
    NonFinite(usize),

    #[error("ranker returned {got} distinct features, expected {expected}")]
    WrongCount { expected: usize, got: usize },
}

/// Failure of a regression fit.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FitError {
    #[error("hold-out split failed: {0}")]
    Split(MatrixError),

    #[error("least-squares solve failed: {0}")]
    Solve(MatrixError),

    #[error("scoring failed: {0}")]
    Score(MatrixError),

    #[error("non-finite value in the training data")]
    NonFiniteInput,

    #[error("fit produced non-finite coefficients")]
    NonFiniteModel,
}

/// Terminal error of a selection run.
#[derive(Debug, Error)]
pub enum SelectionError {
    #[error("file '{}' not found", .0.display())]
    NotFound(PathBuf),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("feature ranking failed: {0}")]
    Ranking(#[from] RankingError),

    #[error("model fitting failed: {0}")]
    Fit(#[from] FitError),

    #[error("dataset error: {0}")]
    Data(#[from] DataError),

    #[error("i/o error: {0}")]
    Io(IoError),

    #[error("no candidate model was recorded")]
    NoCandidates,
}

impl From<IoError> for SelectionError {
    fn from(e: IoError) -> Self {
        match e {
            IoError::NotFound(path) => SelectionError::NotFound(path),
            other => SelectionError::Io(other),
        }
    }
}

pub type SelectionResult<T> = Result<T, SelectionError>;
