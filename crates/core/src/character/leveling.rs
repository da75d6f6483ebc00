//! Experience and level progression.

use super::*;

/// Experience needed per level; reaching level `n + 1` costs `n * 100`.
pub const EXPERIENCE_PER_LEVEL: u32 = 100;

/// Highest reachable level. Experience past it still accumulates.
pub const MAX_LEVEL: u32 = 100;

impl Combatant {
    /// Adds experience and applies every level-up it pays for.
    /// Returns the number of levels gained.
    pub fn gain_experience(&mut self, amount: u32) -> u32 {
        self.experience = self.experience.saturating_add(amount);
        let mut gained = 0;
        while self.level < MAX_LEVEL && self.experience >= self.level * EXPERIENCE_PER_LEVEL {
            self.experience -= self.level * EXPERIENCE_PER_LEVEL;
            self.level += 1;
            self.apply_growth();
            gained += 1;
        }
        gained
    }

    /// Builds a combatant already grown to `level`, with full health and mana.
    /// Levels above [`MAX_LEVEL`] are clamped to it.
    pub fn at_level(name: impl Into<String>, archetype: Archetype, level: u32) -> Self {
        let mut combatant = Self::new(name, archetype);
        while combatant.level < level.min(MAX_LEVEL) {
            combatant.level += 1;
            combatant.apply_growth();
        }
        combatant
    }

    fn apply_growth(&mut self) {
        let growth = content::level_up_growth(self.archetype);
        self.max_health += growth.health;
        self.max_mana += growth.mana;
        self.strength += growth.strength;
        self.defense += growth.defense;
        self.health = self.max_health;
        self.mana = self.max_mana;
    }
}
