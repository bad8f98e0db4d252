use log::debug;
use regsel_core::{LinearModel, Matrix, MatrixError};

use crate::error::RankingError;

/// Result of recursive feature elimination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RfeOutcome {
    /// `true` for every column that survived.
    pub support: Vec<bool>,
    /// 1 for surviving columns; eliminated columns rank higher the earlier
    /// they were dropped.
    pub ranking: Vec<usize>,
}

impl RfeOutcome {
    /// Indices of surviving columns, ascending.
    pub fn selected(&self) -> Vec<usize> {
        self.support
            .iter()
            .enumerate()
            .filter_map(|(j, &keep)| keep.then_some(j))
            .collect()
    }
}

/// Recursive Feature Elimination.
///
/// Repeatedly fits a fresh estimator from `factory` on the surviving columns
/// and drops the `step` columns with the smallest absolute weight until
/// `n_features_to_select` remain. Ties are broken towards the lower column
/// index, so the outcome is a pure function of the data and the estimator.
pub struct RFE<F> {
    factory: F,
    pub n_features_to_select: usize,
    pub step: usize,
}

impl<F, E> RFE<F>
where
    F: Fn() -> E,
    E: LinearModel<f64>,
{
    pub fn new(factory: F, n_features_to_select: usize, step: usize) -> Self {
        RFE {
            factory,
            n_features_to_select,
            step,
        }
    }

    pub fn fit(&self, x: &Matrix<f64>, y: &[f64]) -> Result<RfeOutcome, RankingError> {
        let n = x.ncols();
        let n_select = self.n_features_to_select;
        if n_select == 0 || n_select > n {
            return Err(RankingError::InvalidTarget {
                requested: n_select,
                available: n,
            });
        }
        if self.step == 0 {
            return Err(RankingError::ZeroStep);
        }

        let mut support = vec![true; n];
        let mut ranking = vec![1usize; n];

        loop {
            let remaining: Vec<usize> = (0..n).filter(|&j| support[j]).collect();
            if remaining.len() <= n_select {
                break;
            }

            let sub = x.select_columns(&remaining).map_err(RankingError::Estimator)?;
            let mut estimator = (self.factory)();
            estimator.fit(&sub, y).map_err(RankingError::Estimator)?;
            let coefs = estimator
                .coefficients()
                .ok_or(RankingError::Estimator(MatrixError::NotFitted))?;
            if coefs.len() != remaining.len() {
                return Err(RankingError::Estimator(MatrixError::DimensionMismatch(format!(
                    "estimator returned {} weights for {} columns",
                    coefs.len(),
                    remaining.len()
                ))));
            }

            let mut importance = Vec::with_capacity(coefs.len());
            for (k, &w) in coefs.iter().enumerate() {
                if !w.is_finite() {
                    return Err(RankingError::NonFinite(remaining[k]));
                }
                importance.push(w.abs());
            }

            // Stable sort: equal weights keep column order
            let mut order: Vec<usize> = (0..remaining.len()).collect();
            order.sort_by(|&a, &b| importance[a].total_cmp(&importance[b]));

            let threshold = self.step.min(remaining.len() - n_select);
            let dropped: Vec<usize> = order[..threshold].iter().map(|&k| remaining[k]).collect();
            for &j in &dropped {
                support[j] = false;
            }
            for (rank, &keep) in ranking.iter_mut().zip(&support) {
                if !keep {
                    *rank += 1;
                }
            }
            debug!(
                "RFE: dropped columns {:?}, {} remain",
                dropped,
                remaining.len() - threshold
            );
        }

        Ok(RfeOutcome { support, ranking })
    }
}
