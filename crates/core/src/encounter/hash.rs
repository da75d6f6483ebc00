//! Stable snapshot hashing for determinism checks and replay verification.

use std::hash::Hasher;

use xxhash_rust::xxh3::Xxh3;

use super::*;

impl<D: Dice> Encounter<D> {
    pub fn snapshot_hash(&self) -> u64 {
        let mut hasher = Xxh3::new();
        hasher.write_u64(self.seed);
        hasher.write_u64(self.resolved);
        hasher.write_u64(self.queue.len() as u64);
        hasher.write_u64(self.log.len() as u64);
        hasher.write_u8(match self.status {
            BattleStatus::Active => 0,
            BattleStatus::Ended { winner: None } => 1,
            BattleStatus::Ended { winner: Some(Side::Player) } => 2,
            BattleStatus::Ended { winner: Some(Side::Opponent) } => 3,
        });
        for id in [self.player_id, self.opponent_id] {
            write_combatant(&mut hasher, &self.roster[id]);
        }
        hasher.finish()
    }
}

fn write_combatant(hasher: &mut Xxh3, combatant: &Combatant) {
    hasher.write_u32(combatant.level());
    hasher.write_u32(combatant.experience());
    hasher.write_u32(combatant.health());
    hasher.write_u32(combatant.max_health());
    hasher.write_u32(combatant.mana());
    hasher.write_u32(combatant.max_mana());
    hasher.write_u32(combatant.resource().current());
    let boosts = combatant.boosts();
    hasher.write_u32(boosts.strength);
    hasher.write_u32(boosts.defense_points);
    hasher.write_u64(combatant.inventory().len() as u64);
}
