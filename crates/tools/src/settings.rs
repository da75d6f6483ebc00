//! Battle configuration loading for the binaries.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use battle_core::BattleConfig;
use tracing::info;

/// Reads `path` as TOML. Missing keys keep their defaults.
pub fn load_battle_config(path: &Path) -> Result<BattleConfig> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let config = parse_battle_config(&raw)
        .with_context(|| format!("Invalid config file: {}", path.display()))?;
    info!(path = %path.display(), "battle config loaded");
    Ok(config)
}

pub fn parse_battle_config(raw: &str) -> Result<BattleConfig> {
    let config: BattleConfig = toml::from_str(raw).context("Failed to parse config TOML")?;
    anyhow::ensure!(
        config.opponent_policy.defend_below <= config.opponent_policy.special_below,
        "opponent_policy.defend_below must not exceed special_below"
    );
    Ok(config)
}

/// Loads `path` when given, defaults otherwise.
pub fn battle_config_or_default(path: Option<&Path>) -> Result<BattleConfig> {
    path.map_or_else(|| Ok(BattleConfig::default()), load_battle_config)
}
