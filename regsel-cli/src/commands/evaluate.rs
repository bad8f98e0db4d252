use anyhow::{Context, Result};
use clap::ArgMatches;
use regsel::io::{ensure_dir, read_dataset, save_model, ModelArtifact};
use regsel::selection::{HoldoutLinearFitter, RegressionFitter};
use std::path::PathBuf;

/// Label stored in artifacts written by `evaluate`.
pub const EVALUATION_LABEL: &str = "evaluation";

pub fn run(matches: &ArgMatches) -> Result<()> {
    let dataset_path: &PathBuf = matches
        .get_one("dataset")
        .context("dataset argument is required")?;
    let dataset = read_dataset(dataset_path)?;
    log::info!(
        "[regsel::evaluate] {} rows, {} features from {}",
        dataset.n_rows(),
        dataset.n_features(),
        dataset_path.display()
    );

    let x = dataset.features()?;
    let y = dataset.target()?;
    let (model, metrics) = HoldoutLinearFitter::default()
        .fit_and_score(&x, &y)
        .context("Failed to evaluate linear regression")?;

    for (name, value) in metrics.iter() {
        println!("{:<20} {:.6}", format!("{name}:"), value);
    }

    if let Some(path) = matches.get_one::<PathBuf>("save_model") {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            ensure_dir(parent)?;
        }
        let artifact = ModelArtifact {
            label: EVALUATION_LABEL.to_string(),
            feature_names: dataset.feature_names().to_vec(),
            target_name: dataset.target_name().to_string(),
            model,
        };
        save_model(&artifact, path)?;
        log::info!("Model saved to {}", path.display());
    }
    Ok(())
}
