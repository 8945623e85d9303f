use crate::error::{Result, ScoringError};
use crate::types::config::ScoringConfig;
use std::path::Path;
use toml::map::Map;
use toml::Value;
use tracing::debug;

pub const DEFAULT_POLICY_FILE: &str = "teamscore.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".teamscore/local.toml";

/// Loads a single policy file. Keys it leaves out keep their defaults.
pub fn load_policy(path: &Path) -> Result<ScoringConfig> {
    load_layered(&[path])
}

/// Merges the given files in order, later tables overriding earlier ones key
/// by key, then validates the result. Every path must exist.
pub fn load_layered(paths: &[&Path]) -> Result<ScoringConfig> {
    let mut merged = Value::Table(Map::new());
    for path in paths {
        merge_file(&mut merged, path)?;
    }
    finish(merged)
}

/// `teamscore.toml` under `root`, overridden by `.teamscore/local.toml` when
/// present. Returns `None` when the project has no policy file.
pub fn load_project(root: &Path) -> Result<Option<ScoringConfig>> {
    let policy_path = root.join(DEFAULT_POLICY_FILE);
    if !policy_path.exists() {
        return Ok(None);
    }

    let mut merged = Value::Table(Map::new());
    merge_file(&mut merged, &policy_path)?;
    let local_path = root.join(DEFAULT_LOCAL_FILE);
    if local_path.exists() {
        merge_file(&mut merged, &local_path)?;
    }
    finish(merged).map(Some)
}

pub fn parse_policy(content: &str) -> Result<ScoringConfig> {
    let value: Value = toml::from_str(content)?;
    finish(value)
}

fn finish(merged: Value) -> Result<ScoringConfig> {
    let cfg: ScoringConfig = merged
        .try_into()
        .map_err(|e: toml::de::Error| ScoringError::ConfigParse(e.to_string()))?;
    cfg.validate()?;
    Ok(cfg)
}

fn merge_file(merged: &mut Value, path: &Path) -> Result<()> {
    let value = read_toml_value(path)?;
    debug!(path = %path.display(), "merging policy layer");
    merge_toml(merged, value);
    Ok(())
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| ScoringError::ConfigParse(format!("{}: {}", path.display(), e)))
}

fn merge_toml(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Table(base_table), Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                match base_table.get_mut(&key) {
                    Some(existing) => merge_toml(existing, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => {
            *slot = value;
        }
    }
}
