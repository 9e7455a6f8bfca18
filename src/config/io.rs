use std::path::{Path, PathBuf};

use crate::app_dirs;

use super::errors::ConfigError;
use super::types::AppConfig;

/// Default filename used to store the app configuration.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Resolve the configuration file path, ensuring the parent directory exists.
pub fn config_path() -> Result<PathBuf, ConfigError> {
    let dir = app_dirs::app_root_dir().map_err(map_app_dir_error)?;
    Ok(dir.join(CONFIG_FILE_NAME))
}

/// Load configuration from the app directory, returning defaults if missing.
pub fn load_or_default() -> Result<AppConfig, ConfigError> {
    let path = config_path()?;
    load_from_path(&path)
}

/// Load configuration from a specific file, returning defaults if missing.
pub fn load_from_path(path: &Path) -> Result<AppConfig, ConfigError> {
    if !path.exists() {
        tracing::debug!("No config at {}; using defaults", path.display());
        return Ok(AppConfig::default());
    }
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str::<AppConfig>(&text)
        .map_err(|source| ConfigError::ParseToml {
            path: path.to_path_buf(),
            source,
        })
        .map(AppConfig::normalized)
}

/// Persist configuration to the app directory, overwriting previous contents.
pub fn save(config: &AppConfig) -> Result<(), ConfigError> {
    let path = config_path()?;
    save_to_path(config, &path)
}

/// Save configuration to a specific path, creating parent directories as needed.
pub fn save_to_path(config: &AppConfig, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| ConfigError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    let text = toml::to_string_pretty(config).map_err(|source| ConfigError::SerializeToml {
        path: path.to_path_buf(),
        source,
    })?;
    std::fs::write(path, text).map_err(|source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!("Saved config to {}", path.display());
    Ok(())
}

fn map_app_dir_error(error: app_dirs::AppDirError) -> ConfigError {
    match error {
        app_dirs::AppDirError::NoBaseDir => ConfigError::NoConfigDir,
        app_dirs::AppDirError::CreateDir { path, source } => {
            ConfigError::CreateDir { path, source }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_dirs::{APP_DIR_NAME, OverrideGuard};
    use crate::config::{FormSettings, MODEL_PATH_ENV, ModelSettings};
    use tempfile::tempdir;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let cfg = load_from_path(&dir.path().join(CONFIG_FILE_NAME)).unwrap();
        assert_eq!(cfg, AppConfig::default());
        assert_eq!(cfg.model.path, PathBuf::from("titanic_model.json"));
        assert_eq!(cfg.form.default_age, 30.0);
        assert_eq!(cfg.form.default_fare, 50.0);
    }

    #[test]
    fn partial_file_fills_missing_fields() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[form]\ndefault_age = 12.0\n").unwrap();
        let cfg = load_from_path(&path).unwrap();
        assert_eq!(cfg.form.default_age, 12.0);
        assert_eq!(cfg.form.default_fare, 50.0);
        assert_eq!(cfg.model, ModelSettings::default());
    }

    #[test]
    fn out_of_range_defaults_are_clamped() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[form]\ndefault_age = 0.0\ndefault_fare = -3.0\n").unwrap();
        let cfg = load_from_path(&path).unwrap();
        assert_eq!(cfg.form.default_age, 1.0);
        assert_eq!(cfg.form.default_fare, 0.0);
    }

    #[test]
    fn malformed_file_is_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[form\n").unwrap();
        assert!(matches!(
            load_from_path(&path),
            Err(ConfigError::ParseToml { .. })
        ));
    }

    #[test]
    fn save_then_load_uses_app_dir() {
        let base = tempdir().unwrap();
        let _guard = OverrideGuard::set(base.path().to_path_buf());
        let cfg = AppConfig {
            model: ModelSettings {
                path: PathBuf::from("/models/forest.json"),
            },
            form: FormSettings {
                default_age: 22.0,
                default_fare: 7.25,
            },
        };
        save(&cfg).unwrap();
        assert!(base.path().join(APP_DIR_NAME).join(CONFIG_FILE_NAME).is_file());
        assert_eq!(load_or_default().unwrap(), cfg);
    }

    #[test]
    fn explicit_model_path_wins() {
        let cfg = AppConfig::default();
        let explicit = PathBuf::from("other.json");
        assert_eq!(cfg.resolve_model_path(Some(&explicit)), explicit);
        if std::env::var_os(MODEL_PATH_ENV).is_none() {
            assert_eq!(cfg.resolve_model_path(None), cfg.model.path);
        }
    }
}
