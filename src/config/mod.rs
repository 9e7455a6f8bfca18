//! Persisted application settings.
//!
//! Settings live in `config.toml` inside the app directory. A missing file
//! yields defaults; values read from disk are normalized to the form limits.

mod defaults;
mod errors;
mod io;
mod types;

pub use errors::ConfigError;
pub use io::{CONFIG_FILE_NAME, config_path, load_from_path, load_or_default, save, save_to_path};
pub use types::{AppConfig, FormSettings, MODEL_PATH_ENV, ModelSettings};
