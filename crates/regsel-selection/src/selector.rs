use std::path::PathBuf;

use log::info;
use regsel_data::TabularDataset;
use regsel_io::{ensure_dir, read_dataset, save_model, write_dataset, ModelArtifact, MODEL_EXTENSION};
use regsel_metrics::RegressionMetrics;
use serde::{Deserialize, Serialize};

use crate::config::SelectorConfig;
use crate::error::{RankingError, SelectionError, SelectionResult};
use crate::fitter::{HoldoutLinearFitter, RegressionFitter};
use crate::ranker::{FeatureRanker, SvrRfeRanker};

/// Label of the model trained on every feature.
pub const INITIAL_LABEL: &str = "initial_model";

pub fn iteration_label(iteration: usize) -> String {
    format!("model_iteration_{iteration}")
}

/// Number of features to keep after removing `remove` from `current`.
/// Never below one.
pub fn target_feature_count(current: usize, remove: usize) -> usize {
    current.saturating_sub(remove).max(1)
}

/// One evaluated candidate.
#[derive(Debug, Clone)]
pub struct IterationResult<M> {
    pub label: String,
    pub feature_names: Vec<String>,
    pub model: M,
    pub metrics: RegressionMetrics,
}

/// The candidate with the highest R². Ties go to the earliest candidate and
/// a NaN score never wins.
pub fn select_best<M>(results: &[IterationResult<M>]) -> Option<&IterationResult<M>> {
    let score = |r: &IterationResult<M>| {
        if r.metrics.r2.is_nan() {
            f64::NEG_INFINITY
        } else {
            r.metrics.r2
        }
    };

    let mut best: Option<&IterationResult<M>> = None;
    for r in results {
        match best {
            Some(b) if score(r) <= score(b) => {}
            _ => best = Some(r),
        }
    }
    best
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IterationSummary {
    pub label: String,
    pub n_features: usize,
    pub metrics: RegressionMetrics,
}

impl<M> From<&IterationResult<M>> for IterationSummary {
    fn from(r: &IterationResult<M>) -> Self {
        IterationSummary {
            label: r.label.clone(),
            n_features: r.feature_names.len(),
            metrics: r.metrics,
        }
    }
}

/// Outcome of a full selection run.
#[derive(Debug, Clone)]
pub struct BestResult<M> {
    pub label: String,
    pub feature_names: Vec<String>,
    /// Hold-out metrics of the winning candidate.
    pub metrics: RegressionMetrics,
    /// Winner refitted on every row.
    pub model: M,
    pub features_path: PathBuf,
    pub model_path: Option<PathBuf>,
    pub history: Vec<IterationSummary>,
}

/// Shrinks the feature set step by step, scoring a model at every size, and
/// keeps the best-scoring subset.
///
/// ```text
/// initial_model        all features
/// model_iteration_1    ranker keeps max(1, n - remove_count)
/// model_iteration_2    ...
/// ```
///
/// The loop ends once the feature count reaches `min_features` or a single
/// feature remains.
pub struct IterativeFeatureSelector<F, R> {
    fitter: F,
    ranker: R,
}

impl Default for IterativeFeatureSelector<HoldoutLinearFitter, SvrRfeRanker> {
    fn default() -> Self {
        IterativeFeatureSelector::new(HoldoutLinearFitter::default(), SvrRfeRanker::default())
    }
}

impl<F, R> IterativeFeatureSelector<F, R>
where
    F: RegressionFitter,
    R: FeatureRanker,
{
    pub fn new(fitter: F, ranker: R) -> Self {
        IterativeFeatureSelector { fitter, ranker }
    }

    pub fn fitter(&self) -> &F {
        &self.fitter
    }

    pub fn ranker(&self) -> &R {
        &self.ranker
    }

    /// Run the elimination loop in memory and return every candidate in
    /// evaluation order, starting with [`INITIAL_LABEL`].
    pub fn search(
        &self,
        dataset: &TabularDataset,
        config: &SelectorConfig,
    ) -> SelectionResult<Vec<IterationResult<F::Model>>> {
        info!("Initial features count: {}", dataset.n_features());
        let mut results = vec![self.evaluate(INITIAL_LABEL.to_string(), dataset)?];

        let mut reduced: Option<TabularDataset> = None;
        let mut iteration = 1;
        loop {
            let current = reduced.as_ref().unwrap_or(dataset);
            let n = current.n_features();
            if n <= config.min_features {
                info!("Reached minimum number of features ({}), stopping", config.min_features);
                break;
            }
            if n <= 1 {
                info!("Single feature left, stopping");
                break;
            }

            let target = target_feature_count(n, config.remove_count);
            let x = current.features()?;
            let y = current.target()?;
            let mut selected = self.ranker.select_features(&x, &y, target, config.rfe_step)?;
            selected.sort_unstable();
            selected.dedup();
            if selected.len() != target {
                return Err(RankingError::WrongCount {
                    expected: target,
                    got: selected.len(),
                }
                .into());
            }

            let next = current.select_features(&selected)?;
            info!(
                "Iteration {}: kept {} features: {:?}",
                iteration,
                next.n_features(),
                next.feature_names()
            );
            results.push(self.evaluate(iteration_label(iteration), &next)?);
            reduced = Some(next);
            iteration += 1;
        }

        Ok(results)
    }

    /// Load the dataset, search, refit the winner on all rows and persist it.
    ///
    /// Nothing is written unless the search succeeds.
    pub fn run(&self, config: &SelectorConfig) -> SelectionResult<BestResult<F::Model>> {
        config.validate()?;
        let dataset = read_dataset(&config.dataset_path)?;

        let results = self.search(&dataset, config)?;
        let best = select_best(&results).ok_or(SelectionError::NoCandidates)?;
        info!("Best model found: {} ({})", best.label, best.metrics);
        info!("Best features: {:?}", best.feature_names);

        let winner = dataset.select_by_names(&best.feature_names)?;
        let model = self.fitter.fit_full(&winner.features()?, &winner.target()?)?;

        ensure_dir(&config.save_dir)?;
        let features_path = config
            .save_dir
            .join(format!("best_features_{}.csv", best.label));
        write_dataset(&features_path, &winner)?;
        info!("Best features saved to {}", features_path.display());

        let model_path = if config.confirm_save {
            let path = config
                .save_dir
                .join(format!("best_model_{}.{}", best.label, MODEL_EXTENSION));
            let artifact = ModelArtifact {
                label: best.label.clone(),
                feature_names: best.feature_names.clone(),
                target_name: winner.target_name().to_string(),
                model: &model,
            };
            save_model(&artifact, &path)?;
            info!("Model saved to {}", path.display());
            Some(path)
        } else {
            info!("Model not saved");
            None
        };

        Ok(BestResult {
            label: best.label.clone(),
            feature_names: best.feature_names.clone(),
            metrics: best.metrics,
            model,
            features_path,
            model_path,
            history: results.iter().map(IterationSummary::from).collect(),
        })
    }

    fn evaluate(
        &self,
        label: String,
        dataset: &TabularDataset,
    ) -> SelectionResult<IterationResult<F::Model>> {
        let x = dataset.features()?;
        let y = dataset.target()?;
        let (model, metrics) = self.fitter.fit_and_score(&x, &y)?;
        info!("{}: {}", label, metrics);
        Ok(IterationResult {
            label,
            feature_names: dataset.feature_names().to_vec(),
            model,
            metrics,
        })
    }
}
