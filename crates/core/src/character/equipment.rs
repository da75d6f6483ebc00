//! Equipping weapons and armor from the inventory.

use super::*;

impl Combatant {
    /// Moves the named weapon from the inventory into the hand. A previously
    /// held weapon goes back into the freed inventory slot.
    pub fn equip_weapon(&mut self, name: &str) -> Result<(), InventoryError> {
        match self.inventory.find(name) {
            None => return Err(InventoryError::NotFound(name.into())),
            Some(Item::Weapon(_)) => {}
            Some(_) => return Err(InventoryError::NotEquippable(name.into())),
        }
        let Item::Weapon(weapon) = self.inventory.remove(name)? else {
            return Err(InventoryError::NotEquippable(name.into()));
        };
        if let Some(previous) = self.weapon.replace(weapon) {
            self.inventory.push(previous.into());
        }
        Ok(())
    }

    /// Equips the named armor in its slot, swapping out whatever was there.
    pub fn equip_armor(&mut self, name: &str) -> Result<(), InventoryError> {
        match self.inventory.find(name) {
            None => return Err(InventoryError::NotFound(name.into())),
            Some(Item::Armor(_)) => {}
            Some(_) => return Err(InventoryError::NotEquippable(name.into())),
        }
        let Item::Armor(armor) = self.inventory.remove(name)? else {
            return Err(InventoryError::NotEquippable(name.into()));
        };
        if let Some(previous) = self.armor.insert(armor.slot, armor) {
            self.inventory.push(previous.into());
        }
        Ok(())
    }

    /// Base defense plus the defense of every equipped armor piece.
    pub fn total_defense(&self) -> u32 {
        self.defense + self.armor.values().map(|piece| piece.defense).sum::<u32>()
    }
}
