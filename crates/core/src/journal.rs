//! Recorded duels: a seed, both combatants and the player's inputs in order.

use serde::{Deserialize, Serialize};

use crate::character::{Archetype, Combatant, MAX_LEVEL};
use crate::content;
use crate::types::ActionKind;

pub const JOURNAL_FORMAT_VERSION: u16 = 1;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuelJournal {
    pub format_version: u16,
    pub seed: u64,
    pub player: CombatantSpec,
    pub opponent: CombatantSpec,
    pub inputs: Vec<InputRecord>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputRecord {
    pub seq: u64,
    pub input: PlayerInput,
}

/// One player turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerInput {
    Action(ActionKind),
    UseItem(String),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatantSpec {
    pub name: String,
    pub archetype: Archetype,
    #[serde(default = "default_level")]
    pub level: u32,
    #[serde(default = "default_starter_kit")]
    pub starter_kit: bool,
}

fn default_level() -> u32 {
    1
}

fn default_starter_kit() -> bool {
    true
}

impl CombatantSpec {
    pub fn new(name: impl Into<String>, archetype: Archetype) -> Self {
        Self { name: name.into(), archetype, level: 1, starter_kit: true }
    }

    pub fn at_level(self, level: u32) -> Self {
        Self { level: level.clamp(1, MAX_LEVEL), ..self }
    }

    pub fn build(&self) -> Combatant {
        let mut combatant = Combatant::at_level(self.name.clone(), self.archetype, self.level);
        if self.starter_kit {
            content::pack_starter_kit(&mut combatant);
        }
        combatant
    }
}

impl DuelJournal {
    pub fn new(seed: u64, player: CombatantSpec, opponent: CombatantSpec) -> Self {
        Self { format_version: JOURNAL_FORMAT_VERSION, seed, player, opponent, inputs: Vec::new() }
    }

    pub fn append(&mut self, input: PlayerInput) {
        let seq = self.inputs.len() as u64;
        self.inputs.push(InputRecord { seq, input });
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw)
    }
}
