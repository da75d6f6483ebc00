//! Class-specific hooks: attack bonus, special ability and resource gains.

use serde::{Deserialize, Serialize};

use super::Combatant;
use crate::dice::Dice;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Archetype {
    Warrior,
    Mage,
    Archer,
}

impl Archetype {
    pub const ALL: [Archetype; 3] = [Archetype::Warrior, Archetype::Mage, Archetype::Archer];

    pub fn ability(self) -> &'static dyn ClassAbility {
        match self {
            Archetype::Warrior => &Berserk,
            Archetype::Mage => &Fireball,
            Archetype::Archer => &PiercingShot,
        }
    }
}

pub trait ClassAbility: Sync {
    fn name(&self) -> &'static str;

    fn attack_bonus(&self, combatant: &Combatant) -> u32;

    /// Checks and spends the class resource, then applies the effect to `target`.
    fn activate(&self, actor: &mut Combatant, target: &mut Combatant, dice: &mut dyn Dice)
    -> bool;

    fn on_attack_landed(&self, _actor: &mut Combatant) {}

    fn on_hit_taken(&self, _combatant: &mut Combatant) {}
}

pub struct Berserk;

impl Berserk {
    pub const RAGE_COST: u32 = 50;
    pub const RAGE_PER_HIT: u32 = 10;
}

impl ClassAbility for Berserk {
    fn name(&self) -> &'static str {
        "Berserk"
    }

    fn attack_bonus(&self, combatant: &Combatant) -> u32 {
        combatant.resource.current() / 10
    }

    fn activate(
        &self,
        actor: &mut Combatant,
        target: &mut Combatant,
        dice: &mut dyn Dice,
    ) -> bool {
        if !actor.resource.spend(Self::RAGE_COST) {
            return false;
        }
        // Rage is spent before the roll, so the bonus reflects what is left.
        let damage = actor.compute_attack_damage(dice) * 2;
        target.take_damage(damage);
        true
    }

    fn on_hit_taken(&self, combatant: &mut Combatant) {
        combatant.resource.gain(Self::RAGE_PER_HIT);
    }
}

pub struct Fireball;

impl Fireball {
    pub const MANA_COST: u32 = 25;
    pub const BASE_DAMAGE: u32 = 25;
    pub const DAMAGE_PER_LEVEL: u32 = 5;
}

impl ClassAbility for Fireball {
    fn name(&self) -> &'static str {
        "Fireball"
    }

    fn attack_bonus(&self, combatant: &Combatant) -> u32 {
        combatant.level * 2
    }

    fn activate(
        &self,
        actor: &mut Combatant,
        target: &mut Combatant,
        _dice: &mut dyn Dice,
    ) -> bool {
        if !actor.use_mana(Self::MANA_COST) {
            return false;
        }
        target.take_damage(Self::BASE_DAMAGE + Self::DAMAGE_PER_LEVEL * actor.level);
        true
    }
}

pub struct PiercingShot;

impl PiercingShot {
    pub const FOCUS_COST: u32 = 50;
    pub const FOCUS_PER_HIT: u32 = 25;
}

impl ClassAbility for PiercingShot {
    fn name(&self) -> &'static str {
        "Piercing Shot"
    }

    fn attack_bonus(&self, combatant: &Combatant) -> u32 {
        combatant.resource.current() / 25
    }

    fn activate(
        &self,
        actor: &mut Combatant,
        target: &mut Combatant,
        dice: &mut dyn Dice,
    ) -> bool {
        if !actor.resource.spend(Self::FOCUS_COST) {
            return false;
        }
        let damage = actor.compute_attack_damage(dice) * 3 / 2;
        target.take_damage(damage);
        true
    }

    fn on_attack_landed(&self, actor: &mut Combatant) {
        actor.resource.gain(Self::FOCUS_PER_HIT);
    }
}
