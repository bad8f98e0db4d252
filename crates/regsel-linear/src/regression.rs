use regsel_core::{Estimator, Float, LinearModel, Matrix, MatrixError, MatrixResult};
use regsel_linalg::lstsq;
use serde::{Deserialize, Serialize};

/// Ordinary Least Squares linear regression.
///
/// Fits `y = Xw + b` by least squares. With an intercept, `X` and `y` are
/// centred first and the intercept is recovered as `ȳ - x̄·w`, which keeps
/// the solve well conditioned when features sit far from zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound = "T: Float")]
pub struct LinearRegression<T: Float> {
    pub coefficients: Option<Vec<T>>,
    pub intercept: Option<T>,
    pub fit_intercept: bool,
}

impl<T: Float> LinearRegression<T> {
    pub fn new(fit_intercept: bool) -> Self {
        LinearRegression {
            coefficients: None,
            intercept: None,
            fit_intercept,
        }
    }

    pub fn fit(&mut self, x: &Matrix<T>, y: &[T]) -> MatrixResult<()> {
        let n = x.nrows();
        if n == 0 {
            return Err(MatrixError::EmptyMatrix);
        }
        if y.len() != n {
            return Err(MatrixError::DimensionMismatch(format!(
                "X has {} rows but y has {} elements",
                n,
                y.len()
            )));
        }

        if self.fit_intercept {
            let x_mean = x.column_means()?;
            let y_mean = y.iter().copied().sum::<T>() / T::from_usize(n);
            let xc = x.sub_row(&x_mean)?;
            let yc: Vec<T> = y.iter().map(|&v| v - y_mean).collect();

            let w = lstsq(&xc, &yc)?;
            let offset: T = x_mean.iter().zip(&w).map(|(&m, &wi)| m * wi).sum();
            self.intercept = Some(y_mean - offset);
            self.coefficients = Some(w);
        } else {
            self.coefficients = Some(lstsq(x, y)?);
            self.intercept = None;
        }

        Ok(())
    }

    pub fn predict(&self, x: &Matrix<T>) -> MatrixResult<Vec<T>> {
        let w = self.coefficients.as_ref().ok_or(MatrixError::NotFitted)?;
        let mut pred = x.matvec(w)?;
        if let Some(b) = self.intercept {
            for p in pred.iter_mut() {
                *p += b;
            }
        }
        Ok(pred)
    }
}

impl<T: Float> Default for LinearRegression<T> {
    fn default() -> Self {
        Self::new(true)
    }
}

impl<T: Float> Estimator<T> for LinearRegression<T> {
    fn fit(&mut self, x: &Matrix<T>, y: &[T]) -> MatrixResult<()> {
        LinearRegression::fit(self, x, y)
    }

    fn predict(&self, x: &Matrix<T>) -> MatrixResult<Vec<T>> {
        LinearRegression::predict(self, x)
    }
}

impl<T: Float> LinearModel<T> for LinearRegression<T> {
    fn coefficients(&self) -> Option<&[T]> {
        self.coefficients.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn plane() -> (Matrix<f64>, Vec<f64>) {
        // y = 2*x1 + 3*x2 + 1
        let x: Matrix<f64> = Matrix::from_rows(&[
            vec![1.0, 2.0],
            vec![2.0, 1.0],
            vec![3.0, 4.0],
            vec![4.0, 3.0],
            vec![5.0, 5.0],
        ])
        .unwrap();
        let y = (0..5)
            .map(|i| {
                let r = x.row(i).unwrap();
                2.0 * r[0] + 3.0 * r[1] + 1.0
            })
            .collect();
        (x, y)
    }

    #[test]
    fn test_linear_regression() {
        let (x, y) = plane();
        let mut model = LinearRegression::new(true);
        model.fit(&x, &y).unwrap();

        let w = model.coefficients.as_ref().unwrap();
        assert_abs_diff_eq!(w[0], 2.0, epsilon = 1e-9);
        assert_abs_diff_eq!(w[1], 3.0, epsilon = 1e-9);
        assert_abs_diff_eq!(model.intercept.unwrap(), 1.0, epsilon = 1e-9);

        let pred = model.predict(&x).unwrap();
        for (p, t) in pred.iter().zip(&y) {
            assert_abs_diff_eq!(*p, *t, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_without_intercept() {
        let x: Matrix<f64> = Matrix::from_rows(&[vec![1.0], vec![2.0], vec![3.0]]).unwrap();
        let mut model = LinearRegression::new(false);
        model.fit(&x, &[2.0, 4.0, 6.0]).unwrap();
        assert!(model.intercept.is_none());
        assert_abs_diff_eq!(model.coefficients.as_ref().unwrap()[0], 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_predict_before_fit() {
        let model: LinearRegression<f64> = LinearRegression::default();
        let x: Matrix<f64> = Matrix::zeros(2, 1);
        assert_eq!(model.predict(&x), Err(MatrixError::NotFitted));
    }

    #[test]
    fn test_collinear_features_fail() {
        let x: Matrix<f64> = Matrix::from_rows(&[
            vec![1.0, 2.0],
            vec![2.0, 4.0],
            vec![3.0, 6.0],
            vec![4.0, 8.0],
        ])
        .unwrap();
        let mut model = LinearRegression::new(true);
        assert_eq!(
            model.fit(&x, &[1.0, 2.0, 3.0, 4.0]),
            Err(MatrixError::SingularMatrix)
        );
    }

    #[test]
    fn test_serde_round_trip() {
        let (x, y) = plane();
        let mut model = LinearRegression::new(true);
        model.fit(&x, &y).unwrap();

        let json = serde_json::to_string(&model).unwrap();
        let back: LinearRegression<f64> = serde_json::from_str(&json).unwrap();
        assert_eq!(back.predict(&x).unwrap(), model.predict(&x).unwrap());
    }

    #[test]
    fn test_coefficients_via_trait() {
        let (x, y) = plane();
        let mut model: LinearRegression<f64> = LinearRegression::default();
        assert!(LinearModel::coefficients(&model).is_none());
        Estimator::fit(&mut model, &x, &y).unwrap();
        assert_eq!(LinearModel::coefficients(&model).map(<[f64]>::len), Some(2));
    }
}
