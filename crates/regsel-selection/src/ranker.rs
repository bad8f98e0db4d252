use regsel_core::Matrix;
use regsel_linear::LinearRegression;
use regsel_svm::LinearSVR;

use crate::error::RankingError;
use crate::rfe::RFE;

/// Chooses which feature columns survive an iteration.
pub trait FeatureRanker {
    /// Return exactly `target_count` distinct column indices of `x`.
    fn select_features(
        &self,
        x: &Matrix<f64>,
        y: &[f64],
        target_count: usize,
        step: usize,
    ) -> Result<Vec<usize>, RankingError>;
}

/// RFE driven by the weights of a linear-kernel SVR.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SvrRfeRanker {
    pub c: f64,
    pub epsilon: f64,
}

impl Default for SvrRfeRanker {
    fn default() -> Self {
        SvrRfeRanker { c: 1.0, epsilon: 0.1 }
    }
}

impl FeatureRanker for SvrRfeRanker {
    fn select_features(
        &self,
        x: &Matrix<f64>,
        y: &[f64],
        target_count: usize,
        step: usize,
    ) -> Result<Vec<usize>, RankingError> {
        let rfe = RFE::new(|| LinearSVR::new(self.c, self.epsilon), target_count, step);
        Ok(rfe.fit(x, y)?.selected())
    }
}

/// RFE driven by ordinary least squares coefficients.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LinearRfeRanker;

impl FeatureRanker for LinearRfeRanker {
    fn select_features(
        &self,
        x: &Matrix<f64>,
        y: &[f64],
        target_count: usize,
        step: usize,
    ) -> Result<Vec<usize>, RankingError> {
        let rfe = RFE::new(|| LinearRegression::<f64>::new(true), target_count, step);
        Ok(rfe.fit(x, y)?.selected())
    }
}
