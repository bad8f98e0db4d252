use regsel_core::MatrixError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum DataError {
    #[error("dataset needs at least one feature column and a target, got {0} column(s)")]
    TooFewColumns(usize),

    #[error("header has {header} columns but data has {data}")]
    WidthMismatch { header: usize, data: usize },

    #[error("duplicate column name '{0}'")]
    DuplicateColumn(String),

    #[error("feature column may not be named '{0}'")]
    ReservedColumn(String),

    #[error("unknown feature column '{0}'")]
    UnknownColumn(String),

    #[error("feature index {index} out of range for {n_features} features")]
    FeatureOutOfRange { index: usize, n_features: usize },

    #[error("at least one feature must be selected")]
    EmptySelection,

    #[error(transparent)]
    Matrix(#[from] MatrixError),
}

pub type DataResult<T> = Result<T, DataError>;
