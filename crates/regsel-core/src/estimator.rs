use crate::dtype::Float;
use crate::error::MatrixResult;
use crate::matrix::Matrix;

/// Supervised estimator: learns from `(x, y)` and predicts a target per row.
pub trait Estimator<T: Float> {
    fn fit(&mut self, x: &Matrix<T>, y: &[T]) -> MatrixResult<()>;
    fn predict(&self, x: &Matrix<T>) -> MatrixResult<Vec<T>>;
}

/// An estimator with one weight per input column.
///
/// Recursive feature elimination ranks columns by the magnitude of these
/// weights, so the slice is indexed like the columns of the training matrix.
pub trait LinearModel<T: Float>: Estimator<T> {
    /// `None` until the model has been fitted.
    fn coefficients(&self) -> Option<&[T]>;
}
