use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::defaults::*;

/// Environment variable that overrides the configured model path.
pub const MODEL_PATH_ENV: &str = "TITANIC_MODEL_PATH";

/// Settings stored in `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub model: ModelSettings,
    #[serde(default)]
    pub form: FormSettings,
}

/// Where the classifier artifact is loaded from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelSettings {
    /// Relative paths resolve against the working directory.
    #[serde(default = "default_model_path")]
    pub path: PathBuf,
}

impl Default for ModelSettings {
    fn default() -> Self {
        Self {
            path: default_model_path(),
        }
    }
}

/// Initial values for the numeric form fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormSettings {
    #[serde(default = "default_age")]
    pub default_age: f32,
    #[serde(default = "default_fare")]
    pub default_fare: f32,
}

impl Default for FormSettings {
    fn default() -> Self {
        Self {
            default_age: default_age(),
            default_fare: default_fare(),
        }
    }
}

impl AppConfig {
    /// Clamp form defaults to the widget limits.
    pub fn normalized(mut self) -> Self {
        self.form.default_age = normalize_age(self.form.default_age);
        self.form.default_fare = normalize_fare(self.form.default_fare);
        self
    }

    /// Pick the model path: explicit override, then the
    /// `TITANIC_MODEL_PATH` environment variable, then the configured path.
    pub fn resolve_model_path(&self, explicit: Option<&Path>) -> PathBuf {
        if let Some(path) = explicit {
            return path.to_path_buf();
        }
        match std::env::var_os(MODEL_PATH_ENV) {
            Some(value) if !value.is_empty() => PathBuf::from(value),
            _ => self.model.path.clone(),
        }
    }
}
