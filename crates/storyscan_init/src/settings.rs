use anyhow::{Context, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

/// The persisted visual-testing configuration file. Unknown keys written by
/// other tools are preserved through the flattened `extra` map.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualTestsConfig {
    #[serde(rename = "$schema", skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_dir: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_dir: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build_dir: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub externals: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub only_changed: Option<bool>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Best-effort load of an existing config file. A missing or malformed file
/// yields the default config; the init flow then starts fresh.
pub fn load_config(path: &Path) -> VisualTestsConfig {
    let Ok(content) = fs::read_to_string(path) else {
        return VisualTestsConfig::default();
    };
    match serde_json::from_str(&content) {
        Ok(cfg) => {
            debug!("Loaded existing config from {}", path.display());
            cfg
        }
        Err(e) => {
            debug!("Ignoring malformed config at {}: {}", path.display(), e);
            VisualTestsConfig::default()
        }
    }
}

pub fn save_config(path: &Path, config: &VisualTestsConfig) -> Result<()> {
    let json = serde_json::to_string_pretty(config)
        .context("Failed to serialize visual-testing config")?;
    fs::write(path, json + "\n")
        .with_context(|| format!("Failed to write {}", path.display()))?;
    debug!("Wrote config to {}", path.display());
    Ok(())
}
