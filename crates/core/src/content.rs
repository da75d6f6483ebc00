use crate::character::{Archetype, Combatant};
use crate::items::{Potion, PotionKind, Weapon, WeaponKind};

pub mod keys {
    pub const WEAPON_SWORD: &str = "Sword";
    pub const WEAPON_STAFF: &str = "Staff";
    pub const WEAPON_BOW: &str = "Bow";
    pub const POTION_HEALTH: &str = "Health Potion";
    pub const POTION_MANA: &str = "Mana Potion";
}

pub struct BaseStats {
    pub health: u32,
    pub mana: u32,
    pub strength: u32,
    pub defense: u32,
    /// Capacity of the class resource pool; zero for classes without one.
    pub resource: u32,
}

pub fn base_stats(archetype: Archetype) -> BaseStats {
    match archetype {
        Archetype::Warrior => {
            BaseStats { health: 150, mana: 30, strength: 15, defense: 10, resource: 100 }
        }
        Archetype::Mage => BaseStats { health: 80, mana: 120, strength: 6, defense: 4, resource: 0 },
        Archetype::Archer => {
            BaseStats { health: 110, mana: 60, strength: 11, defense: 6, resource: 100 }
        }
    }
}

/// Stat gains applied on every level-up before health and mana refill.
pub struct Growth {
    pub health: u32,
    pub mana: u32,
    pub strength: u32,
    pub defense: u32,
}

pub fn level_up_growth(archetype: Archetype) -> Growth {
    match archetype {
        Archetype::Warrior => Growth { health: 20, mana: 5, strength: 3, defense: 2 },
        Archetype::Mage => Growth { health: 10, mana: 15, strength: 1, defense: 1 },
        Archetype::Archer => Growth { health: 15, mana: 8, strength: 2, defense: 2 },
    }
}

pub fn starter_weapon(archetype: Archetype) -> Weapon {
    match archetype {
        Archetype::Warrior => Weapon::new(keys::WEAPON_SWORD, WeaponKind::Sword, 5, 8),
        Archetype::Mage => Weapon::new(keys::WEAPON_STAFF, WeaponKind::Staff, 2, 6),
        Archetype::Archer => Weapon::new(keys::WEAPON_BOW, WeaponKind::Bow, 4, 7),
    }
}

pub fn health_potion() -> Potion {
    Potion::new(keys::POTION_HEALTH, PotionKind::Health, 20, 1)
}

pub fn mana_potion() -> Potion {
    Potion::new(keys::POTION_MANA, PotionKind::Mana, 50, 1)
}

/// A fresh combatant with its class weapon equipped and one health potion packed.
pub fn starter_combatant(name: impl Into<String>, archetype: Archetype) -> Combatant {
    let mut combatant = Combatant::new(name, archetype);
    pack_starter_kit(&mut combatant);
    combatant
}

/// Replaces the held weapon with the class weapon and packs one health potion.
/// The potion is dropped when the inventory is already full.
pub fn pack_starter_kit(combatant: &mut Combatant) {
    combatant.weapon = Some(starter_weapon(combatant.archetype()));
    if !combatant.inventory.is_full() {
        combatant.inventory.push(health_potion().into());
    }
}
