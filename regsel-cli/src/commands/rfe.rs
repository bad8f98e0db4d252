use anyhow::{Context, Result};
use clap::ArgMatches;
use regsel::io::{ensure_dir, read_dataset, write_dataset};
use regsel::selection::{FeatureRanker, LinearRfeRanker, SvrRfeRanker};
use std::path::PathBuf;

/// Half the features, at least one.
pub fn default_feature_count(n_features: usize) -> usize {
    (n_features / 2).max(1)
}

pub fn run(matches: &ArgMatches) -> Result<()> {
    let dataset_path: &PathBuf = matches
        .get_one("dataset")
        .context("dataset argument is required")?;
    let output: &PathBuf = matches
        .get_one("output")
        .context("output argument is required")?;
    let step = matches.get_one::<usize>("step").copied().unwrap_or(1);
    let estimator = matches
        .get_one::<String>("estimator")
        .map(String::as_str)
        .unwrap_or("linear");

    let dataset = read_dataset(dataset_path)?;
    let n_features = matches
        .get_one::<usize>("n_features")
        .copied()
        .unwrap_or_else(|| default_feature_count(dataset.n_features()));

    let ranker: Box<dyn FeatureRanker> = match estimator {
        "svr" => Box::new(SvrRfeRanker::default()),
        _ => Box::new(LinearRfeRanker),
    };
    log::info!(
        "[regsel::rfe] keeping {} of {} features with the {} estimator",
        n_features,
        dataset.n_features(),
        estimator
    );

    let x = dataset.features()?;
    let y = dataset.target()?;
    let selected = ranker
        .select_features(&x, &y, n_features, step)
        .context("Recursive feature elimination failed")?;
    let reduced = dataset.select_features(&selected)?;

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_dir(parent)?;
    }
    write_dataset(output, &reduced)?;

    println!("Selected features: {}", reduced.feature_names().join(", "));
    println!("Saved: {}", output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_feature_count() {
        assert_eq!(default_feature_count(10), 5);
        assert_eq!(default_feature_count(7), 3);
        assert_eq!(default_feature_count(1), 1);
    }
}
