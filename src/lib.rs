//! Titanic survival prediction: passenger encoding, classifier loading, and
//! the egui form that ties them together.

/// Application directory resolution.
pub mod app_dirs;
/// Persisted settings.
pub mod config;
/// egui front end.
pub mod egui_app;
/// Tracing setup.
pub mod logging;
/// Classifier trait and model artifacts.
pub mod ml;
/// Passenger attributes and feature encoding.
pub mod passenger;
/// Classifier invocation and result formatting.
pub mod prediction;

use std::path::{Path, PathBuf};

/// Load config and the model artifact, resolving the model path from the
/// explicit override, environment, or config in that order.
pub fn load_model_with_config(
    explicit_model: Option<&Path>,
) -> Result<(config::AppConfig, ml::SurvivalModel, PathBuf), String> {
    let cfg = config::load_or_default().map_err(|err| format!("Failed to load config: {err}"))?;
    let model_path = cfg.resolve_model_path(explicit_model);
    let model = ml::SurvivalModel::load_json(&model_path).map_err(|err| err.to_string())?;
    Ok((cfg, model, model_path))
}
