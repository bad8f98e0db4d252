pub mod dataset;
pub mod error;

pub use dataset::{TabularDataset, TARGET_COLUMN};
pub use error::{DataError, DataResult};
