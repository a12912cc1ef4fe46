use crate::error::{ClientError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tris_common::MoveOrder;

pub const DEFAULT_CONFIG_PATH: &str = "tris.json";
pub const CONFIG_PATH_VAR: &str = "TRIS_CONFIG";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Initial order of the move list
    pub order: MoveOrder,
    /// Capture mouse clicks on cells, moves and the order button
    pub mouse: bool,
    pub colors: bool,
    pub log_file: PathBuf,
    /// Used when `RUST_LOG` is unset
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            order: MoveOrder::Ascending,
            mouse: true,
            colors: true,
            log_file: PathBuf::from("tris.log"),
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load from `config_path`, falling back to defaults when it doesn't exist
    pub fn load_from(config_path: &Path) -> Result<Config> {
        if !config_path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(config_path).map_err(|source| ClientError::ConfigRead {
            path: config_path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ClientError::ConfigParse {
            path: config_path.to_path_buf(),
            source,
        })
    }
}

/// First CLI argument, then `TRIS_CONFIG`, then `tris.json`
pub fn resolve_config_path(arg: Option<String>, env_value: Option<String>) -> PathBuf {
    arg.or(env_value)
        .filter(|path| !path.trim().is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}
