//! Versioned JSON model artifact.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::forest::DecisionForest;
use super::gbdt_stump::GbdtStumpModel;
use super::logreg::LogRegModel;
use super::{Classifier, label_for};
use crate::passenger::{FEATURE_COLUMNS, FEATURE_COUNT};

/// Artifact format version understood by this build.
pub const MODEL_VERSION: i64 = 1;

/// File name looked up when no model path is configured.
pub const DEFAULT_MODEL_FILE_NAME: &str = "titanic_model.json";

/// Errors raised while loading a model artifact.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Failed to read model artifact {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid model artifact {path}: {source}")]
    Decode {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Model artifact {path} is not usable: {reason}")]
    Invalid { path: PathBuf, reason: String },
}

/// Trained estimator parameters, tagged by `kind`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Estimator {
    LogisticRegression(LogRegModel),
    GbdtStump(GbdtStumpModel),
    DecisionForest(DecisionForest),
}

impl Estimator {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::LogisticRegression(_) => "logistic_regression",
            Self::GbdtStump(_) => "gbdt_stump",
            Self::DecisionForest(_) => "decision_forest",
        }
    }

    fn validate(&self) -> Result<(), String> {
        match self {
            Self::LogisticRegression(model) => model.validate(),
            Self::GbdtStump(model) => model.validate(),
            Self::DecisionForest(model) => model.validate(),
        }
    }

    fn positive_probability(&self, row: &[f32; FEATURE_COUNT]) -> f32 {
        match self {
            Self::LogisticRegression(model) => model.positive_probability(row),
            Self::GbdtStump(model) => model.positive_probability(row),
            Self::DecisionForest(model) => model.positive_probability(row),
        }
    }
}

/// Survival classifier loaded from disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurvivalModel {
    #[serde(default)]
    pub model_id: Option<String>,
    pub model_version: i64,
    /// Column order the estimator was trained on.
    pub feature_columns: Vec<String>,
    pub estimator: Estimator,
}

impl SurvivalModel {
    /// Wrap an estimator with the current version and column order.
    pub fn new(model_id: Option<String>, estimator: Estimator) -> Self {
        Self {
            model_id,
            model_version: MODEL_VERSION,
            feature_columns: FEATURE_COLUMNS.iter().map(|c| (*c).to_string()).collect(),
            estimator,
        }
    }

    /// Load and validate a model from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self, ModelError> {
        let bytes = std::fs::read(path).map_err(|source| ModelError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let model = Self::from_json_slice(&bytes, path)?;
        tracing::info!(
            "Loaded {} model {} from {}",
            model.estimator.kind(),
            model.display_id(),
            path.display()
        );
        Ok(model)
    }

    /// Decode and validate artifact bytes; `origin` is used for error context.
    pub fn from_json_slice(bytes: &[u8], origin: &Path) -> Result<Self, ModelError> {
        let model: Self = serde_json::from_slice(bytes).map_err(|source| ModelError::Decode {
            path: origin.to_path_buf(),
            source,
        })?;
        model.validate().map_err(|reason| ModelError::Invalid {
            path: origin.to_path_buf(),
            reason,
        })?;
        Ok(model)
    }

    /// Validate the version, column order, and estimator parameters.
    pub fn validate(&self) -> Result<(), String> {
        if self.model_version != MODEL_VERSION {
            return Err(format!(
                "Unsupported model_version {} (expected {MODEL_VERSION})",
                self.model_version
            ));
        }
        if self.feature_columns.len() != FEATURE_COUNT
            || self
                .feature_columns
                .iter()
                .zip(FEATURE_COLUMNS)
                .any(|(found, expected)| found != expected)
        {
            return Err(format!(
                "feature_columns {:?} do not match expected order {:?}",
                self.feature_columns, FEATURE_COLUMNS
            ));
        }
        self.estimator.validate()
    }

    /// Model id for display, falling back to the estimator kind.
    pub fn display_id(&self) -> &str {
        self.model_id
            .as_deref()
            .filter(|id| !id.trim().is_empty())
            .unwrap_or_else(|| self.estimator.kind())
    }
}

impl Classifier for SurvivalModel {
    fn predict(&self, row: &[f32; FEATURE_COUNT]) -> u8 {
        label_for(self.estimator.positive_probability(row))
    }

    fn predict_proba(&self, row: &[f32; FEATURE_COUNT]) -> [f32; 2] {
        let positive = self.estimator.positive_probability(row);
        [1.0 - positive, positive]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ml::gbdt_stump::Stump;
    use serde_json::json;

    fn logreg_json() -> serde_json::Value {
        json!({
            "model_id": "titanic_logreg_v1",
            "model_version": 1,
            "feature_columns": ["Pclass", "Sex", "Age", "Fare", "SibSp", "Parch", "Embarked"],
            "estimator": {
                "kind": "logistic_regression",
                "weights": [-0.9, 2.6, -0.03, 0.004, -0.3, -0.1, -0.2],
                "bias": 2.0
            }
        })
    }

    fn decode(value: &serde_json::Value) -> Result<SurvivalModel, ModelError> {
        let bytes = serde_json::to_vec(value).unwrap();
        SurvivalModel::from_json_slice(&bytes, Path::new("model.json"))
    }

    #[test]
    fn decodes_logistic_regression_artifact() {
        let model = decode(&logreg_json()).unwrap();
        assert_eq!(model.display_id(), "titanic_logreg_v1");
        assert_eq!(model.estimator.kind(), "logistic_regression");
        let row = [1.0, 1.0, 30.0, 100.0, 0.0, 0.0, 2.0];
        assert_eq!(model.predict(&row), 1);
        let [p0, p1] = model.predict_proba(&row);
        assert!((p0 + p1 - 1.0).abs() < 1e-6);
    }

    #[test]
    fn decodes_forest_artifact() {
        let value = json!({
            "model_version": 1,
            "feature_columns": FEATURE_COLUMNS,
            "estimator": {
                "kind": "decision_forest",
                "trees": [{
                    "nodes": [
                        {"node": "split", "feature_index": 1, "threshold": 0.5, "left": 1, "right": 2},
                        {"node": "leaf", "probability": 0.19},
                        {"node": "leaf", "probability": 0.74}
                    ]
                }]
            }
        });
        let model = decode(&value).unwrap();
        assert_eq!(model.display_id(), "decision_forest");
        assert_eq!(model.predict(&[3.0, 0.0, 22.0, 7.25, 1.0, 0.0, 2.0]), 0);
        assert_eq!(model.predict(&[1.0, 1.0, 38.0, 71.3, 1.0, 0.0, 0.0]), 1);
    }

    #[test]
    fn rejects_reordered_columns() {
        let mut value = logreg_json();
        value["feature_columns"] = json!(["Sex", "Pclass", "Age", "Fare", "SibSp", "Parch", "Embarked"]);
        assert!(matches!(decode(&value), Err(ModelError::Invalid { .. })));
    }

    #[test]
    fn rejects_unknown_version() {
        let mut value = logreg_json();
        value["model_version"] = json!(2);
        assert!(matches!(decode(&value), Err(ModelError::Invalid { .. })));
    }

    #[test]
    fn rejects_unknown_estimator_kind() {
        let mut value = logreg_json();
        value["estimator"]["kind"] = json!("svm");
        assert!(matches!(decode(&value), Err(ModelError::Decode { .. })));
    }

    #[test]
    fn missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = SurvivalModel::load_json(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, ModelError::Read { .. }));
    }

    #[test]
    fn new_model_round_trips_through_disk() {
        let model = SurvivalModel::new(
            Some("stumps".into()),
            Estimator::GbdtStump(GbdtStumpModel {
                learning_rate: 0.5,
                init_raw: -0.4,
                stumps: vec![Stump {
                    feature_index: 1,
                    threshold: 0.5,
                    left_value: -1.0,
                    right_value: 2.0,
                }],
            }),
        );
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_MODEL_FILE_NAME);
        std::fs::write(&path, serde_json::to_vec_pretty(&model).unwrap()).unwrap();
        let loaded = SurvivalModel::load_json(&path).unwrap();
        let row = [2.0, 1.0, 30.0, 13.0, 0.0, 0.0, 2.0];
        assert_eq!(loaded.predict_proba(&row), model.predict_proba(&row));
    }

    #[test]
    fn repeated_predictions_are_identical() {
        let model = decode(&logreg_json()).unwrap();
        let row = [2.0, 0.0, 45.0, 26.0, 1.0, 2.0, 1.0];
        let first = (model.predict(&row), model.predict_proba(&row));
        for _ in 0..10 {
            assert_eq!((model.predict(&row), model.predict_proba(&row)), first);
        }
    }
}
