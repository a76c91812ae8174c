//! quizdeck configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use quizdeck_core::persistence::STORAGE_KEY;

/// Top-level quizdeck configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizdeckConfig {
    /// Directory holding `index.json` and the topic files.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Directory the progress record is written to.
    #[serde(default = "default_state_dir")]
    pub state_dir: PathBuf,
    /// Key the progress record is stored under.
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./quiz-data")
}
fn default_state_dir() -> PathBuf {
    dirs_path()
        .map(|p| p.join("state"))
        .unwrap_or_else(|| PathBuf::from("./.quizdeck"))
}
fn default_storage_key() -> String {
    STORAGE_KEY.to_string()
}

impl Default for QuizdeckConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            state_dir: default_state_dir(),
            storage_key: default_storage_key(),
        }
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
fn resolve_env_vars(s: &str) -> String {
    let mut result = s.to_string();
    while let Some(start) = result.find("${") {
        if let Some(end) = result[start..].find('}') {
            let var_name = &result[start + 2..start + end];
            let value = std::env::var(var_name).unwrap_or_default();
            result = format!(
                "{}{}{}",
                &result[..start],
                value,
                &result[start + end + 1..]
            );
        } else {
            break;
        }
    }
    result
}

fn resolve_path(path: &Path) -> PathBuf {
    PathBuf::from(resolve_env_vars(&path.to_string_lossy()))
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order without a path:
/// 1. `quizdeck.toml` in the current directory
/// 2. `~/.config/quizdeck/config.toml`
///
/// Environment variable overrides: `QUIZDECK_DATA_DIR`, `QUIZDECK_STATE_DIR`.
pub fn load_config_from(path: Option<&Path>) -> Result<QuizdeckConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("quizdeck.toml");
        if local.exists() {
            Some(local)
        } else if let Some(home) = dirs_path() {
            let global = home.join("config.toml");
            if global.exists() {
                Some(global)
            } else {
                None
            }
        } else {
            None
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            let config = toml::from_str::<QuizdeckConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?;
            tracing::debug!("loaded config from {}", path.display());
            config
        }
        None => QuizdeckConfig::default(),
    };

    if let Ok(dir) = std::env::var("QUIZDECK_DATA_DIR") {
        config.data_dir = PathBuf::from(dir);
    }
    if let Ok(dir) = std::env::var("QUIZDECK_STATE_DIR") {
        config.state_dir = PathBuf::from(dir);
    }

    config.data_dir = resolve_path(&config.data_dir);
    config.state_dir = resolve_path(&config.state_dir);
    config.storage_key = resolve_env_vars(&config.storage_key);

    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("quizdeck"))
}
