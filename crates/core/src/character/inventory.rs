//! Bounded item storage with a stack of recently used items.

use crate::error::InventoryError;
use crate::items::{Armor, Item, Potion, Weapon};

#[derive(Clone, Debug)]
pub struct Inventory {
    items: Vec<Item>,
    recently_used: Vec<Item>,
    capacity: usize,
}

impl Default for Inventory {
    fn default() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }
}

impl Inventory {
    pub const DEFAULT_CAPACITY: usize = 20;

    pub fn with_capacity(capacity: usize) -> Self {
        Self { items: Vec::new(), recently_used: Vec::new(), capacity }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// First item with exactly this name.
    pub fn find(&self, name: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.name() == name)
    }

    pub fn add(&mut self, item: Item) -> Result<(), InventoryError> {
        if self.is_full() {
            return Err(InventoryError::Full {
                item: item.name().to_string(),
                capacity: self.capacity,
            });
        }
        self.items.push(item);
        Ok(())
    }

    pub fn remove(&mut self, name: &str) -> Result<Item, InventoryError> {
        let index = self.position(name).ok_or_else(|| InventoryError::NotFound(name.into()))?;
        Ok(self.items.remove(index))
    }

    pub fn potions(&self) -> impl Iterator<Item = &Potion> {
        self.items.iter().filter_map(|item| match item {
            Item::Potion(potion) => Some(potion),
            _ => None,
        })
    }

    pub fn weapons(&self) -> impl Iterator<Item = &Weapon> {
        self.items.iter().filter_map(|item| match item {
            Item::Weapon(weapon) => Some(weapon),
            _ => None,
        })
    }

    pub fn armor(&self) -> impl Iterator<Item = &Armor> {
        self.items.iter().filter_map(|item| match item {
            Item::Armor(armor) => Some(armor),
            _ => None,
        })
    }

    pub fn push_recently_used(&mut self, item: Item) {
        self.recently_used.push(item);
    }

    pub fn peek_recently_used(&self) -> Option<&Item> {
        self.recently_used.last()
    }

    pub fn pop_recently_used(&mut self) -> Option<Item> {
        self.recently_used.pop()
    }

    pub(crate) fn position(&self, name: &str) -> Option<usize> {
        self.items.iter().position(|item| item.name() == name)
    }

    pub(crate) fn take_at(&mut self, index: usize) -> Item {
        self.items.remove(index)
    }

    pub(crate) fn put_at(&mut self, index: usize, item: Item) {
        self.items.insert(index, item);
    }

    /// Stores `item` regardless of capacity. Callers only use it to hand
    /// back a slot they just freed, or to pack a fresh starter kit.
    pub(crate) fn push(&mut self, item: Item) {
        self.items.push(item);
    }
}
