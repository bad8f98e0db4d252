//! # regsel
//!
//! Iterative feature selection for linear regression, written in pure Rust.
//!
//! Starting from every feature of a tabular dataset, regsel repeatedly asks a
//! linear-kernel SVR to rank the columns, keeps the strongest ones, and scores
//! an ordinary least squares model on a fixed hold-out split at each size.
//! The subset with the best R² is written back out as CSV.
//!
//! ## Modules
//!
//! - **core** — Dense row-major `Matrix`, `Float` trait, `Estimator`/`LinearModel` traits
//! - **linalg** — Householder QR, back substitution, least-squares solve
//! - **preprocessing** — Seeded train/test split
//! - **linear** — Ordinary least squares regression
//! - **svm** — Linear-kernel support vector regression
//! - **metrics** — R², adjusted R², RMSE, MAE, MSE, explained variance
//! - **data** — `TabularDataset`: named feature columns plus a target
//! - **io** — CSV read/write, JSON model artifacts, atomic file writes
//! - **selection** — Recursive feature elimination and the iterative selector
//!
//! ## Example
//!
//! ```no_run
//! use regsel::selection::{IterativeFeatureSelector, SelectorConfig};
//!
//! let mut config = SelectorConfig::new("housing.csv", "results");
//! config.remove_count = 2;
//! config.min_features = 3;
//!
//! let best = IterativeFeatureSelector::default().run(&config).unwrap();
//! println!("{} kept {:?} ({})", best.label, best.feature_names, best.metrics);
//! ```

/// Matrix type and estimator traits.
pub use regsel_core as core;

/// Linear algebra operations.
pub use regsel_linalg as linalg;

/// Data preprocessing.
pub use regsel_preprocessing as preprocessing;

/// Linear models.
pub use regsel_linear as linear;

/// Support vector regression.
pub use regsel_svm as svm;

/// Evaluation metrics.
pub use regsel_metrics as metrics;

/// Tabular datasets.
pub use regsel_data as data;

/// I/O utilities.
pub use regsel_io as io;

/// Feature selection.
pub use regsel_selection as selection;
