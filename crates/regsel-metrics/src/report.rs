use regsel_core::{Float, MatrixError, MatrixResult};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::regression::{adjusted_r2, explained_variance, mae, mse, r2_score, rmse};

/// Hold-out evaluation of one fitted regressor.
///
/// `r2` is the selection score; the rest are reported alongside it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegressionMetrics {
    pub r2: f64,
    pub adjusted_r2: f64,
    pub rmse: f64,
    pub mae: f64,
    pub mse: f64,
    pub explained_variance: f64,
}

impl RegressionMetrics {
    /// Score predictions from a model trained on `n_features` columns.
    pub fn from_predictions<T: Float>(
        y_true: &[T],
        y_pred: &[T],
        n_features: usize,
    ) -> MatrixResult<Self> {
        if y_true.is_empty() {
            return Err(MatrixError::EmptyMatrix);
        }
        if y_true.len() != y_pred.len() {
            return Err(MatrixError::DimensionMismatch(format!(
                "y_true has {} values but y_pred has {}",
                y_true.len(),
                y_pred.len()
            )));
        }
        Ok(RegressionMetrics {
            r2: r2_score(y_true, y_pred),
            adjusted_r2: adjusted_r2(y_true, y_pred, n_features),
            rmse: rmse(y_true, y_pred),
            mae: mae(y_true, y_pred),
            mse: mse(y_true, y_pred),
            explained_variance: explained_variance(y_true, y_pred),
        })
    }

    /// `(name, value)` pairs in report order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f64)> {
        [
            ("R²", self.r2),
            ("Adjusted R²", self.adjusted_r2),
            ("RMSE", self.rmse),
            ("MAE", self.mae),
            ("MSE", self.mse),
            ("Explained Variance", self.explained_variance),
        ]
        .into_iter()
    }
}

impl fmt::Display for RegressionMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "R²={:.6} RMSE={:.6} MAE={:.6} EV={:.6}",
            self.r2, self.rmse, self.mae, self.explained_variance
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_predictions() {
        let y = [1.0, 2.0, 3.0, 4.0];
        let m = RegressionMetrics::from_predictions(&y, &y, 1).unwrap();
        assert_eq!(m.r2, 1.0);
        assert_eq!(m.rmse, 0.0);
        assert_eq!(m.iter().count(), 6);
        assert_eq!(m.iter().next(), Some(("R²", 1.0)));
    }

    #[test]
    fn test_rejects_bad_input() {
        let empty: [f64; 0] = [];
        assert_eq!(
            RegressionMetrics::from_predictions(&empty, &empty, 1),
            Err(MatrixError::EmptyMatrix)
        );
        assert!(RegressionMetrics::from_predictions(&[1.0, 2.0], &[1.0], 1).is_err());
    }

    #[test]
    fn test_display() {
        let y = [1.0, 2.0];
        let m = RegressionMetrics::from_predictions(&y, &y, 1).unwrap();
        assert!(m.to_string().starts_with("R²=1.000000"));
    }
}
