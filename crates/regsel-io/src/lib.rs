pub mod csv_io;
pub mod error;
pub mod fs;
pub mod model_io;

pub use csv_io::{read_dataset, write_dataset};
pub use error::{IoError, IoResult};
pub use fs::{ensure_dir, write_atomic};
pub use model_io::{load_model, save_model, ModelArtifact, MODEL_EXTENSION};
