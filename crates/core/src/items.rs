//! Weapons, armor and potions carried by combatants.

use serde::{Deserialize, Serialize};

use crate::character::Combatant;
use crate::dice::Dice;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeaponKind {
    Sword,
    Axe,
    Staff,
    Bow,
    Dagger,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weapon {
    pub name: String,
    pub kind: WeaponKind,
    pub min_damage: u32,
    pub max_damage: u32,
}

impl Weapon {
    pub fn new(name: impl Into<String>, kind: WeaponKind, min_damage: u32, max_damage: u32) -> Self {
        Self { name: name.into(), kind, min_damage, max_damage: max_damage.max(min_damage) }
    }

    pub fn roll_damage(&self, dice: &mut dyn Dice) -> u32 {
        dice.roll_range(self.min_damage, self.max_damage)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ArmorSlot {
    Head,
    Chest,
    Hands,
    Legs,
    Feet,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Armor {
    pub name: String,
    pub slot: ArmorSlot,
    pub defense: u32,
    /// Fraction of incoming damage this piece absorbs.
    pub damage_reduction: f64,
}

impl Armor {
    pub const REDUCTION_PER_DEFENSE: f64 = 0.02;

    pub fn new(name: impl Into<String>, slot: ArmorSlot, defense: u32) -> Self {
        Self {
            name: name.into(),
            slot,
            defense,
            damage_reduction: f64::from(defense) * Self::REDUCTION_PER_DEFENSE,
        }
    }

    pub fn with_reduction(mut self, damage_reduction: f64) -> Self {
        self.damage_reduction = damage_reduction.clamp(0.0, 1.0);
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PotionKind {
    Health,
    Mana,
    Strength,
    Defense,
}

impl PotionKind {
    pub const fn effect(self) -> &'static str {
        match self {
            PotionKind::Health => "Restores health points",
            PotionKind::Mana => "Restores mana points",
            PotionKind::Strength => "Temporarily increases strength",
            PotionKind::Defense => "Temporarily increases defense",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Potion {
    pub name: String,
    pub kind: PotionKind,
    pub potency: u32,
    remaining_uses: u32,
    max_uses: u32,
}

impl Potion {
    pub fn new(name: impl Into<String>, kind: PotionKind, potency: u32, max_uses: u32) -> Self {
        let max_uses = max_uses.max(1);
        Self { name: name.into(), kind, potency, remaining_uses: max_uses, max_uses }
    }

    pub fn remaining_uses(&self) -> u32 {
        self.remaining_uses
    }

    pub fn max_uses(&self) -> u32 {
        self.max_uses
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining_uses == 0
    }

    /// Health and mana potions are wasted on a full pool; boosts always apply.
    pub fn can_use(&self, target: &Combatant) -> bool {
        if self.is_exhausted() {
            return false;
        }
        match self.kind {
            PotionKind::Health => target.health() < target.max_health(),
            PotionKind::Mana => target.mana() < target.max_mana(),
            PotionKind::Strength | PotionKind::Defense => true,
        }
    }

    /// Applies one dose and returns the amount restored or granted.
    /// Returns `None` without consuming a use when the potion cannot be used.
    pub fn use_on(&mut self, target: &mut Combatant) -> Option<u32> {
        if !self.can_use(target) {
            return None;
        }
        let amount = match self.kind {
            PotionKind::Health => target.heal(self.potency),
            PotionKind::Mana => target.restore_mana(self.potency),
            PotionKind::Strength => target.boost_strength(self.potency),
            PotionKind::Defense => target.boost_defense(self.potency),
        };
        self.remaining_uses -= 1;
        Some(amount)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Item {
    Weapon(Weapon),
    Armor(Armor),
    Potion(Potion),
}

impl Item {
    pub fn name(&self) -> &str {
        match self {
            Item::Weapon(weapon) => &weapon.name,
            Item::Armor(armor) => &armor.name,
            Item::Potion(potion) => &potion.name,
        }
    }
}

impl From<Weapon> for Item {
    fn from(weapon: Weapon) -> Self {
        Item::Weapon(weapon)
    }
}

impl From<Armor> for Item {
    fn from(armor: Armor) -> Self {
        Item::Armor(armor)
    }
}

impl From<Potion> for Item {
    fn from(potion: Potion) -> Self {
        Item::Potion(potion)
    }
}
