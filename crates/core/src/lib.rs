pub mod character;
pub mod config;
pub mod content;
pub mod dice;
pub mod encounter;
pub mod error;
pub mod intent;
pub mod items;
pub mod journal;
pub mod replay;
pub mod types;

pub use character::{
    Archetype, Boosts, ClassAbility, Combatant, Inventory, MAX_LEVEL, ResourcePool,
};
pub use config::{BattleConfig, FleeConfig, PolicyBands};
pub use dice::{Dice, ScriptedDice};
pub use encounter::{ActionQueue, BandedPolicy, Encounter, EncounterReport, OpponentPolicy, Seat};
pub use error::{EncounterError, InventoryError};
pub use intent::Intent;
pub use items::{Armor, ArmorSlot, Item, Potion, PotionKind, Weapon, WeaponKind};
pub use journal::{CombatantSpec, DuelJournal, InputRecord, PlayerInput};
pub use replay::{ReplayError, ReplayResult, replay_to_end};
pub use types::*;
