use anyhow::{Context, Result};
use clap::ArgMatches;
use regsel::selection::{SelectionError, SelectorConfig};
use std::fs;
use std::path::{Path, PathBuf};

/// Read a (possibly partial) selector configuration from JSON.
pub fn load_config_file(path: &Path) -> Result<SelectorConfig> {
    if !path.exists() {
        return Err(SelectionError::NotFound(path.to_path_buf()).into());
    }
    let config_json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    serde_json::from_str(&config_json)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Build the `optimize` configuration: file values first, then flags.
pub fn optimize_config(matches: &ArgMatches) -> Result<SelectorConfig> {
    let mut config = match matches.get_one::<PathBuf>("config") {
        Some(path) => load_config_file(path)?,
        None => SelectorConfig::default(),
    };

    if let Some(dataset) = matches.get_one::<PathBuf>("dataset") {
        config.dataset_path = dataset.clone();
    }
    if let Some(&rfe_step) = matches.get_one::<usize>("rfe_step") {
        config.rfe_step = rfe_step;
    }
    if let Some(&remove_count) = matches.get_one::<usize>("remove_count") {
        config.remove_count = remove_count;
    }
    if let Some(&min_features) = matches.get_one::<usize>("min_features") {
        config.min_features = min_features;
    }
    if let Some(save_dir) = matches.get_one::<PathBuf>("save_dir") {
        config.save_dir = save_dir.clone();
    }
    if matches.get_flag("save_model") {
        config.confirm_save = true;
    }

    config.validate()?;
    Ok(config)
}
