pub mod matrix;
pub mod dtype;
pub mod error;
pub mod estimator;

pub use matrix::Matrix;
pub use dtype::Float;
pub use error::{MatrixError, MatrixResult};
pub use estimator::{Estimator, LinearModel};
