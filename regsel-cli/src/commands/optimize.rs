use anyhow::Result;
use clap::ArgMatches;
use regsel::selection::{BestResult, IterativeFeatureSelector};
use std::fmt;

use crate::config::optimize_config;

pub fn run(matches: &ArgMatches) -> Result<()> {
    let config = optimize_config(matches)?;
    log::info!(
        "[regsel::optimize] dataset={} rfe_step={} remove_count={} min_features={} save_dir={}",
        config.dataset_path.display(),
        config.rfe_step,
        config.remove_count,
        config.min_features,
        config.save_dir.display()
    );

    let best = IterativeFeatureSelector::default().run(&config)?;
    print!("{}", Summary(&best));
    Ok(())
}

/// Per-iteration table followed by the winner and the files written.
pub struct Summary<'a, M>(pub &'a BestResult<M>);

impl<M> fmt::Display for Summary<'_, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let best = self.0;
        writeln!(
            f,
            "{:<22} {:>8} {:>10} {:>10} {:>10} {:>10}",
            "model", "features", "R²", "RMSE", "MAE", "EV"
        )?;
        for it in &best.history {
            let marker = if it.label == best.label { " *" } else { "" };
            writeln!(
                f,
                "{:<22} {:>8} {:>10.6} {:>10.6} {:>10.6} {:>10.6}{}",
                it.label,
                it.n_features,
                it.metrics.r2,
                it.metrics.rmse,
                it.metrics.mae,
                it.metrics.explained_variance,
                marker
            )?;
        }
        writeln!(f)?;
        writeln!(f, "Best model: {}", best.label)?;
        writeln!(f, "Features:   {}", best.feature_names.join(", "))?;
        writeln!(f, "Saved:      {}", best.features_path.display())?;
        if let Some(path) = &best.model_path {
            writeln!(f, "Model:      {}", path.display())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use regsel::metrics::RegressionMetrics;
    use regsel::selection::IterationSummary;
    use std::path::PathBuf;

    fn metrics(r2: f64) -> RegressionMetrics {
        RegressionMetrics {
            r2,
            adjusted_r2: r2,
            rmse: 0.5,
            mae: 0.25,
            mse: 0.25,
            explained_variance: r2,
        }
    }

    #[test]
    fn test_summary_marks_winner() {
        let best = BestResult {
            label: "model_iteration_1".to_string(),
            feature_names: vec!["a".into(), "c".into()],
            metrics: metrics(0.9),
            model: (),
            features_path: PathBuf::from("out/best_features_model_iteration_1.csv"),
            model_path: None,
            history: vec![
                IterationSummary {
                    label: "initial_model".into(),
                    n_features: 3,
                    metrics: metrics(0.8),
                },
                IterationSummary {
                    label: "model_iteration_1".into(),
                    n_features: 2,
                    metrics: metrics(0.9),
                },
            ],
        };

        let text = Summary(&best).to_string();
        let marked: Vec<&str> = text.lines().filter(|l| l.ends_with(" *")).collect();
        assert_eq!(marked.len(), 1);
        assert!(marked[0].starts_with("model_iteration_1"));
        assert!(text.contains("Features:   a, c"));
        assert!(!text.contains("Model:"));
    }
}
