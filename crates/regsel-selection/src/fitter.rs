use regsel_core::Matrix;
use regsel_linear::LinearRegression;
use regsel_metrics::RegressionMetrics;
use regsel_preprocessing::{train_test_split, SPLIT_SEED, TEST_RATIO};
use serde::Serialize;

use crate::error::FitError;

/// Fits and scores the regression model attached to each candidate subset.
pub trait RegressionFitter {
    type Model: Serialize;

    /// Fit on a training portion of `(x, y)` and score on the held-out rest.
    fn fit_and_score(
        &self,
        x: &Matrix<f64>,
        y: &[f64],
    ) -> Result<(Self::Model, RegressionMetrics), FitError>;

    /// Fit on every row.
    fn fit_full(&self, x: &Matrix<f64>, y: &[f64]) -> Result<Self::Model, FitError>;
}

/// Ordinary least squares scored on a seeded hold-out split.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoldoutLinearFitter {
    pub test_ratio: f64,
    pub seed: u64,
}

impl Default for HoldoutLinearFitter {
    fn default() -> Self {
        HoldoutLinearFitter {
            test_ratio: TEST_RATIO,
            seed: SPLIT_SEED,
        }
    }
}

impl RegressionFitter for HoldoutLinearFitter {
    type Model = LinearRegression<f64>;

    fn fit_and_score(
        &self,
        x: &Matrix<f64>,
        y: &[f64],
    ) -> Result<(Self::Model, RegressionMetrics), FitError> {
        check_finite_input(x, y)?;
        let split = train_test_split(x, y, self.test_ratio, self.seed).map_err(FitError::Split)?;

        let mut model = LinearRegression::new(true);
        model
            .fit(&split.x_train, &split.y_train)
            .map_err(FitError::Solve)?;
        check_finite_model(&model)?;
        let pred = model.predict(&split.x_test).map_err(FitError::Solve)?;
        let metrics = RegressionMetrics::from_predictions(&split.y_test, &pred, x.ncols())
            .map_err(FitError::Score)?;
        Ok((model, metrics))
    }

    fn fit_full(&self, x: &Matrix<f64>, y: &[f64]) -> Result<Self::Model, FitError> {
        check_finite_input(x, y)?;
        let mut model = LinearRegression::new(true);
        model.fit(x, y).map_err(FitError::Solve)?;
        check_finite_model(&model)?;
        Ok(model)
    }
}

fn check_finite_input(x: &Matrix<f64>, y: &[f64]) -> Result<(), FitError> {
    if x.data().iter().chain(y).all(|v| v.is_finite()) {
        Ok(())
    } else {
        Err(FitError::NonFiniteInput)
    }
}

/// A model with NaN or inf weights cannot be scored meaningfully or saved.
fn check_finite_model(model: &LinearRegression<f64>) -> Result<(), FitError> {
    let weights = model.coefficients.as_deref().unwrap_or(&[]);
    if weights.iter().chain(&model.intercept).all(|v| v.is_finite()) {
        Ok(())
    } else {
        Err(FitError::NonFiniteModel)
    }
}
