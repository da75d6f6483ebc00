//! Balance knobs for encounters.
//! Loaded from TOML by the tools binaries; every field falls back to its default.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BattleConfig {
    pub flee: FleeConfig,
    pub opponent_policy: PolicyBands,
    /// Experience granted to the survivor of a knockout.
    pub victory_experience: u32,
}

impl BattleConfig {
    pub const DEFAULT_VICTORY_EXPERIENCE: u32 = 50;
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            flee: FleeConfig::default(),
            opponent_policy: PolicyBands::default(),
            victory_experience: Self::DEFAULT_VICTORY_EXPERIENCE,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FleeConfig {
    pub base_chance: f64,
    /// Added per level the fleeing combatant has over its opponent.
    pub per_level: f64,
}

impl FleeConfig {
    /// `clamp(base + (actor - opponent) * per_level, 0, 1)`.
    pub fn chance(&self, actor_level: u32, opponent_level: u32) -> f64 {
        let level_gap = i64::from(actor_level) - i64::from(opponent_level);
        (self.base_chance + level_gap as f64 * self.per_level).clamp(0.0, 1.0)
    }
}

impl Default for FleeConfig {
    fn default() -> Self {
        Self { base_chance: 0.30, per_level: 0.05 }
    }
}

/// Percent-roll bands of the default opponent policy.
///
/// Rolls below `defend_below` defend, rolls below `special_below` use the
/// special ability, everything else attacks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyBands {
    pub defend_below: u32,
    pub special_below: u32,
}

impl Default for PolicyBands {
    fn default() -> Self {
        Self { defend_below: 25, special_below: 60 }
    }
}
