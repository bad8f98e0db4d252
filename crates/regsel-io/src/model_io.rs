use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{IoError, IoResult};
use crate::fs::write_atomic;

/// File extension of saved model artifacts.
pub const MODEL_EXTENSION: &str = "json";

/// A fitted model together with the columns it expects, in order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelArtifact<M> {
    pub label: String,
    pub feature_names: Vec<String>,
    pub target_name: String,
    pub model: M,
}

/// Save a model artifact as pretty-printed JSON.
pub fn save_model<M: Serialize>(artifact: &ModelArtifact<M>, path: &Path) -> IoResult<()> {
    write_atomic(path, |file| {
        serde_json::to_writer_pretty(file, artifact).map_err(|source| IoError::Json {
            path: path.to_path_buf(),
            source,
        })
    })
}

/// Load a model artifact written by [`save_model`].
pub fn load_model<M: DeserializeOwned>(path: &Path) -> IoResult<ModelArtifact<M>> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    let file = File::open(path).map_err(|e| IoError::io(path, e))?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| IoError::Json {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Weights {
        w: Vec<f64>,
        b: f64,
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(format!("model.{MODEL_EXTENSION}"));
        let artifact = ModelArtifact {
            label: "model_iteration_2".to_string(),
            feature_names: vec!["a".into(), "c".into()],
            target_name: "target".into(),
            model: Weights { w: vec![0.25, -1.5], b: 3.0 },
        };

        save_model(&artifact, &path).unwrap();
        let loaded: ModelArtifact<Weights> = load_model(&path).unwrap();
        assert_eq!(loaded, artifact);
    }

    #[test]
    fn test_load_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.json");
        std::fs::write(&path, "not json").unwrap();
        let err = load_model::<Weights>(&path).unwrap_err();
        assert!(matches!(err, IoError::Json { .. }));
        assert!(matches!(
            load_model::<Weights>(&dir.path().join("absent.json")),
            Err(IoError::NotFound(_))
        ));
    }
}
