//! Combatant state and the numeric combat model.
//!
//! Health and mana are unsigned and every mutation clamps, so the vital
//! bounds hold by construction. Class behavior lives behind
//! [`ClassAbility`], looked up from the [`Archetype`] tag.

use std::collections::BTreeMap;

use crate::content;
use crate::dice::Dice;
use crate::error::InventoryError;
use crate::items::{Armor, ArmorSlot, Item, Weapon};

mod archetype;
mod equipment;
mod inventory;
mod leveling;

pub use archetype::{Archetype, Berserk, ClassAbility, Fireball, PiercingShot};
pub use inventory::Inventory;
pub use leveling::{EXPERIENCE_PER_LEVEL, MAX_LEVEL};

/// Upper bound on the combined damage reduction of armor and boosts.
pub const MAX_DAMAGE_REDUCTION: f64 = 0.75;

/// Bounded class resource (rage, focus). Mages carry an empty pool.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ResourcePool {
    current: u32,
    max: u32,
}

impl ResourcePool {
    pub const fn new(max: u32) -> Self {
        Self { current: 0, max }
    }

    pub const fn current(&self) -> u32 {
        self.current
    }

    pub const fn max(&self) -> u32 {
        self.max
    }

    pub fn gain(&mut self, amount: u32) {
        self.current = self.current.saturating_add(amount).min(self.max);
    }

    /// Spends `cost` when at least that much is banked.
    pub fn spend(&mut self, cost: u32) -> bool {
        if self.current < cost {
            return false;
        }
        self.current -= cost;
        true
    }
}

/// Temporary potion effects, cleared when the encounter is finished.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Boosts {
    pub strength: u32,
    /// Percentage points added to armor reduction.
    pub defense_points: u32,
}

#[derive(Clone, Debug)]
pub struct Combatant {
    pub(crate) name: String,
    pub(crate) archetype: Archetype,
    pub(crate) level: u32,
    pub(crate) experience: u32,
    pub(crate) health: u32,
    pub(crate) max_health: u32,
    pub(crate) mana: u32,
    pub(crate) max_mana: u32,
    pub(crate) strength: u32,
    pub(crate) defense: u32,
    pub(crate) resource: ResourcePool,
    pub(crate) weapon: Option<Weapon>,
    pub(crate) armor: BTreeMap<ArmorSlot, Armor>,
    pub(crate) inventory: Inventory,
    pub(crate) boosts: Boosts,
}

impl Combatant {
    pub fn new(name: impl Into<String>, archetype: Archetype) -> Self {
        let base = content::base_stats(archetype);
        Self {
            name: name.into(),
            archetype,
            level: 1,
            experience: 0,
            health: base.health,
            max_health: base.health,
            mana: base.mana,
            max_mana: base.mana,
            strength: base.strength,
            defense: base.defense,
            resource: ResourcePool::new(base.resource),
            weapon: None,
            armor: BTreeMap::new(),
            inventory: Inventory::default(),
            boosts: Boosts::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn archetype(&self) -> Archetype {
        self.archetype
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn experience(&self) -> u32 {
        self.experience
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    pub fn max_health(&self) -> u32 {
        self.max_health
    }

    pub fn mana(&self) -> u32 {
        self.mana
    }

    pub fn max_mana(&self) -> u32 {
        self.max_mana
    }

    pub fn strength(&self) -> u32 {
        self.strength
    }

    pub fn resource(&self) -> ResourcePool {
        self.resource
    }

    pub fn boosts(&self) -> Boosts {
        self.boosts
    }

    pub fn weapon(&self) -> Option<&Weapon> {
        self.weapon.as_ref()
    }

    pub fn armor(&self, slot: ArmorSlot) -> Option<&Armor> {
        self.armor.get(&slot)
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn ability(&self) -> &'static dyn ClassAbility {
        self.archetype.ability()
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    pub fn vitals_within_bounds(&self) -> bool {
        self.health <= self.max_health
            && self.mana <= self.max_mana
            && self.resource.current <= self.resource.max
    }

    /// Armor fractions plus the defense boost, capped at [`MAX_DAMAGE_REDUCTION`].
    pub fn damage_reduction(&self) -> f64 {
        let armor: f64 = self.armor.values().map(|piece| piece.damage_reduction).sum();
        let boost = f64::from(self.boosts.defense_points) / 100.0;
        (armor + boost).min(MAX_DAMAGE_REDUCTION)
    }

    /// Applies `raw` damage through mitigation and returns the mitigated amount.
    /// Health bottoms out at zero.
    pub fn take_damage(&mut self, raw: u32) -> u32 {
        let mitigated = (f64::from(raw) * (1.0 - self.damage_reduction())).ceil() as u32;
        self.health = self.health.saturating_sub(mitigated);
        self.ability().on_hit_taken(self);
        mitigated
    }

    /// Returns the amount of health restored.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let restored = amount.min(self.max_health - self.health);
        self.health += restored;
        restored
    }

    /// Returns the amount of mana restored.
    pub fn restore_mana(&mut self, amount: u32) -> u32 {
        let restored = amount.min(self.max_mana - self.mana);
        self.mana += restored;
        restored
    }

    /// Spends `cost` mana. Succeeds only while strictly more than `cost` is available.
    pub fn use_mana(&mut self, cost: u32) -> bool {
        if self.mana > cost {
            self.mana -= cost;
            true
        } else {
            false
        }
    }

    pub(crate) fn boost_strength(&mut self, amount: u32) -> u32 {
        self.boosts.strength = self.boosts.strength.saturating_add(amount);
        amount
    }

    pub(crate) fn boost_defense(&mut self, points: u32) -> u32 {
        self.boosts.defense_points = self.boosts.defense_points.saturating_add(points);
        points
    }

    pub fn clear_boosts(&mut self) {
        self.boosts = Boosts::default();
    }

    /// Base strength, strength boost, one weapon roll and the class bonus.
    pub fn compute_attack_damage(&self, dice: &mut dyn Dice) -> u32 {
        let weapon = self.weapon.as_ref().map_or(0, |weapon| weapon.roll_damage(dice));
        self.strength + self.boosts.strength + weapon + self.ability().attack_bonus(self)
    }

    /// Runs the class ability against `target`. `false` when the resource cannot pay for it.
    pub fn attempt_special_ability(&mut self, target: &mut Combatant, dice: &mut dyn Dice) -> bool {
        self.ability().activate(self, target, dice)
    }

    pub fn register_attack_landed(&mut self) {
        self.ability().on_attack_landed(self);
    }

    /// Warrior only: spends 20 mana to take a quarter of `incoming`, rounded up.
    pub fn shield_block(&mut self, incoming: u32) -> Option<u32> {
        const SHIELD_BLOCK_MANA: u32 = 20;
        if self.archetype != Archetype::Warrior || !self.use_mana(SHIELD_BLOCK_MANA) {
            return None;
        }
        Some(self.take_damage(incoming.div_ceil(4)))
    }

    pub fn add_item(&mut self, item: Item) -> Result<(), InventoryError> {
        self.inventory.add(item)
    }

    pub fn remove_item(&mut self, name: &str) -> Result<Item, InventoryError> {
        self.inventory.remove(name)
    }

    /// Drinks the named potion. `Ok(None)` when the item is not a usable potion.
    ///
    /// A spent potion leaves the inventory; either way a copy is recorded as
    /// the most recently used item.
    pub fn use_item(&mut self, name: &str) -> Result<Option<u32>, InventoryError> {
        let index =
            self.inventory.position(name).ok_or_else(|| InventoryError::NotFound(name.into()))?;
        let mut potion = match self.inventory.take_at(index) {
            Item::Potion(potion) => potion,
            other => {
                self.inventory.put_at(index, other);
                return Ok(None);
            }
        };
        let applied = potion.use_on(self);
        if applied.is_some() {
            self.inventory.push_recently_used(Item::Potion(potion.clone()));
        }
        if !potion.is_exhausted() {
            self.inventory.put_at(index, Item::Potion(potion));
        }
        Ok(applied)
    }
}
