//! Shared fixtures for the encounter regression suites.

use super::*;
use crate::character::Archetype;
use crate::dice::ScriptedDice;
use crate::items::{Armor, ArmorSlot};

pub(super) fn warrior(name: &str) -> Combatant {
    Combatant::new(name, Archetype::Warrior)
}

/// Hero and Orc, both unarmed level-1 warriors.
pub(super) fn warriors() -> (Combatant, Combatant) {
    (warrior("Hero"), warrior("Orc"))
}

pub(super) fn scripted(
    player: Combatant,
    opponent: Combatant,
    dice: ScriptedDice,
) -> Encounter<ScriptedDice> {
    Encounter::with_dice(player, opponent, BattleConfig::default(), dice)
}

pub(super) fn scripted_warriors(dice: ScriptedDice) -> Encounter<ScriptedDice> {
    let (hero, orc) = warriors();
    scripted(hero, orc, dice)
}

pub(super) fn with_health(mut combatant: Combatant, health: u32) -> Combatant {
    combatant.health = health.min(combatant.max_health);
    combatant
}

pub(super) fn plated(mut combatant: Combatant, reduction: f64) -> Combatant {
    let plate = Armor::new("Plate", ArmorSlot::Chest, 0).with_reduction(reduction);
    combatant.armor.insert(ArmorSlot::Chest, plate);
    combatant
}

pub(super) fn opponent_intent(
    encounter: &Encounter<ScriptedDice>,
    kind: ActionKind,
) -> Intent {
    Intent::new(encounter.opponent_id(), encounter.player_id(), kind)
}
