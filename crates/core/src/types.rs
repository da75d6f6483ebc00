use std::fmt;

use serde::{Deserialize, Serialize};
use slotmap::new_key_type;

new_key_type! {
    pub struct CombatantId;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    Attack,
    Special,
    Defend,
    UseItem,
    Flee,
}

impl ActionKind {
    /// Priority used when the caller explicitly sorts the pending queue.
    pub const fn default_priority(self) -> i32 {
        match self {
            ActionKind::Flee => 5,
            ActionKind::UseItem => 4,
            ActionKind::Defend => 3,
            ActionKind::Special => 2,
            ActionKind::Attack => 1,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Player,
    Opponent,
}

impl Side {
    pub const fn other(self) -> Side {
        match self {
            Side::Player => Side::Opponent,
            Side::Opponent => Side::Player,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BattleStatus {
    Active,
    /// `winner` is `None` when the encounter ended through a successful flee.
    Ended { winner: Option<Side> },
}

impl BattleStatus {
    pub const fn is_ended(self) -> bool {
        matches!(self, BattleStatus::Ended { .. })
    }

    pub const fn winner(self) -> Option<Side> {
        match self {
            BattleStatus::Active => None,
            BattleStatus::Ended { winner } => winner,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionEffect {
    /// Attack value for attacks; health the target lost for specials.
    Damage(u32),
    /// Amount an item restored or granted.
    Restored(u32),
    Escaped,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionOutcome {
    pub actor: CombatantId,
    pub kind: ActionKind,
    pub description: String,
    pub success: bool,
    pub effect: Option<ActionEffect>,
}

impl fmt::Display for ActionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description)
    }
}
