use std::fs;

use anyhow::{bail, Context};
use serde::Deserialize;
use serde_json::Value;
use tracing::info;

/// Capability seam for the recommendation model. No endpoint consumes a
/// score yet, so nothing on the request path implements or calls this; it
/// marks where a real scorer would plug in.
pub trait InferenceService {
    fn predict(&self, input: [f64; 2]) -> anyhow::Result<f64>;
}

/// Parsed layers-model artifact (TensorFlow.js export). Loaded and held in
/// process state for the whole lifetime, validated at startup, exercised by
/// nothing.
#[derive(Clone, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct TourismModel {
    pub format: Option<String>,
    pub generated_by: Option<String>,
    #[serde(default)]
    pub model_topology: Value,
    #[serde(default)]
    pub weights_manifest: Value,
}

pub fn load_model(path: &str) -> anyhow::Result<TourismModel> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read model file at {}", path))?;
    let model: TourismModel = serde_json::from_str(&content)
        .with_context(|| format!("Model file at {} is not a valid layers-model JSON", path))?;

    if model.model_topology.is_null() {
        bail!("Model file at {} has no modelTopology section", path);
    }

    info!(
        "Loaded recommendation model ({})",
        model.format.as_deref().unwrap_or("unknown format")
    );
    Ok(model)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn write_model(value: &Value) -> (tempfile::TempDir, String) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.json");
        fs::write(&path, serde_json::to_string(value).unwrap()).unwrap();
        let path = path.to_str().unwrap().to_string();
        (dir, path)
    }

    #[test]
    fn loads_a_layers_model_artifact() {
        let (_dir, path) = write_model(&json!({
            "format": "layers-model",
            "generatedBy": "keras v2.15.0",
            "modelTopology": { "model_config": { "class_name": "Sequential" } },
            "weightsManifest": []
        }));

        let model = load_model(&path).unwrap();

        assert_eq!(model.format.as_deref(), Some("layers-model"));
        assert!(!model.model_topology.is_null());
    }

    #[test]
    fn rejects_an_artifact_without_topology() {
        let (_dir, path) = write_model(&json!({ "format": "layers-model" }));

        assert!(load_model(&path).is_err());
    }

    #[test]
    fn missing_model_file_is_an_error() {
        assert!(load_model("models/does_not_exist.json").is_err());
    }

    struct FixedScore(f64);

    impl InferenceService for FixedScore {
        fn predict(&self, _input: [f64; 2]) -> anyhow::Result<f64> {
            Ok(self.0)
        }
    }

    #[test]
    fn inference_seam_accepts_any_scorer() {
        let scorer: &dyn InferenceService = &FixedScore(0.87);

        let score = scorer.predict([-8.7183, 115.1691]).unwrap();

        assert_eq!(score, 0.87);
    }
}
