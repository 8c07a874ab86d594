//! Model location settings.
//!
//! Precedence, highest first: command-line flags, the `SDP_MODEL_PATH`
//! environment variable, the TOML config file, the built-in default path.
//!
//! ```toml
//! [model]
//! path = "models/depression_best_rs_gbt_model.json"
//! sha256 = "..."
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

use sdp_artifact::DEFAULT_MODEL_PATH;

/// Config file read from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "sdp.toml";

/// Environment variable overriding the configured model path.
pub const MODEL_PATH_ENV: &str = "SDP_MODEL_PATH";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub model: ModelSection,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModelSection {
    pub path: Option<PathBuf>,
    pub sha256: Option<String>,
}

/// Where to load the model from, after precedence is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelSettings {
    pub path: PathBuf,
    pub sha256: Option<String>,
}

/// Read the config file.
///
/// An explicit path must exist. The default file is optional.
pub fn load_config(explicit: Option<&Path>) -> Result<ConfigFile> {
    let (path, required) = match explicit {
        Some(path) => (path, true),
        None => (Path::new(DEFAULT_CONFIG_FILE), false),
    };
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(error) if !required && error.kind() == std::io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(ConfigFile::default());
        }
        Err(error) => {
            return Err(error).with_context(|| format!("read config {}", path.display()));
        }
    };
    let config =
        parse_config(&contents).with_context(|| format!("parse config {}", path.display()))?;
    debug!(path = %path.display(), "loaded config file");
    Ok(config)
}

pub fn parse_config(contents: &str) -> Result<ConfigFile> {
    Ok(toml::from_str(contents)?)
}

/// Apply precedence to the flag, environment, and file settings.
///
/// The file's SHA-256 pin only applies to the file's own path. A path from
/// the flag or the environment is pinned by `--model-sha256` or not at all.
pub fn resolve_model_settings(
    cli_path: Option<&Path>,
    cli_sha256: Option<&str>,
    env_path: Option<PathBuf>,
    file: &ConfigFile,
) -> ModelSettings {
    let cli_sha256 = cli_sha256.map(str::to_string);
    let (path, sha256) = match (cli_path, env_path, &file.model.path) {
        (Some(path), _, _) => (path.to_path_buf(), cli_sha256),
        (None, Some(path), _) => (path, cli_sha256),
        (None, None, file_path) => (
            file_path
                .clone()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_MODEL_PATH)),
            cli_sha256.or_else(|| file.model.sha256.clone()),
        ),
    };
    ModelSettings { path, sha256 }
}

/// `SDP_MODEL_PATH`, ignoring empty values.
pub fn model_path_from_env() -> Option<PathBuf> {
    std::env::var_os(MODEL_PATH_ENV)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}
