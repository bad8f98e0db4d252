pub mod config;
pub mod error;
pub mod fitter;
pub mod ranker;
pub mod rfe;
pub mod selector;

pub use config::SelectorConfig;
pub use error::{FitError, RankingError, SelectionError, SelectionResult};
pub use fitter::{HoldoutLinearFitter, RegressionFitter};
pub use ranker::{FeatureRanker, LinearRfeRanker, SvrRfeRanker};
pub use rfe::{RfeOutcome, RFE};
pub use selector::{
    iteration_label, select_best, target_feature_count, BestResult, IterationResult,
    IterationSummary, IterativeFeatureSelector, INITIAL_LABEL,
};
