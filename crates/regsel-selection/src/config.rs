use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{SelectionError, SelectionResult};

/// Parameters of an iterative selection run.
///
/// Deserializes from partial JSON; missing keys take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    pub dataset_path: PathBuf,
    /// Columns RFE drops per internal round.
    pub rfe_step: usize,
    /// Columns removed per outer iteration.
    pub remove_count: usize,
    /// Stop once the feature count is at or below this.
    pub min_features: usize,
    pub save_dir: PathBuf,
    /// Persist the winning model next to its feature CSV.
    pub confirm_save: bool,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        SelectorConfig {
            dataset_path: PathBuf::new(),
            rfe_step: 1,
            remove_count: 1,
            min_features: 1,
            save_dir: PathBuf::from("results"),
            confirm_save: false,
        }
    }
}

impl SelectorConfig {
    pub fn new(dataset_path: impl Into<PathBuf>, save_dir: impl Into<PathBuf>) -> Self {
        SelectorConfig {
            dataset_path: dataset_path.into(),
            save_dir: save_dir.into(),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> SelectionResult<()> {
        if self.dataset_path.as_os_str().is_empty() {
            return Err(SelectionError::InvalidConfig("dataset_path is empty".into()));
        }
        if self.save_dir.as_os_str().is_empty() {
            return Err(SelectionError::InvalidConfig("save_dir is empty".into()));
        }
        if self.rfe_step == 0 {
            return Err(SelectionError::InvalidConfig("rfe_step must be at least 1".into()));
        }
        if self.remove_count == 0 {
            return Err(SelectionError::InvalidConfig(
                "remove_count must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_uses_defaults() {
        let cfg: SelectorConfig =
            serde_json::from_str(r#"{"dataset_path": "data.csv", "remove_count": 3}"#).unwrap();
        assert_eq!(cfg.dataset_path, PathBuf::from("data.csv"));
        assert_eq!(cfg.remove_count, 3);
        assert_eq!(cfg.rfe_step, 1);
        assert_eq!(cfg.min_features, 1);
        assert!(!cfg.confirm_save);
        cfg.validate().unwrap();
    }

    #[test]
    fn test_validate_rejects_zero_counts() {
        let mut cfg = SelectorConfig::new("data.csv", "out");
        cfg.rfe_step = 0;
        assert!(matches!(cfg.validate(), Err(SelectionError::InvalidConfig(_))));

        let mut cfg = SelectorConfig::new("data.csv", "out");
        cfg.remove_count = 0;
        assert!(matches!(cfg.validate(), Err(SelectionError::InvalidConfig(_))));

        assert!(SelectorConfig::default().validate().is_err());
    }

    #[test]
    fn test_min_features_zero_is_allowed() {
        let mut cfg = SelectorConfig::new("data.csv", "out");
        cfg.min_features = 0;
        assert!(cfg.validate().is_ok());
    }
}
