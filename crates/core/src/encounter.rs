//! A single two-combatant encounter: queue, resolution and the end condition.
//! Concerns are split across `impl Encounter` blocks in the submodules.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;
use slotmap::SlotMap;
use tracing::{debug, info, trace, warn};

use crate::character::Combatant;
use crate::config::BattleConfig;
use crate::dice::Dice;
use crate::error::EncounterError;
use crate::intent::Intent;
use crate::types::*;

mod hash;
mod policy;
mod processor;
mod queue;
mod resolver;

pub use policy::{BandedPolicy, OpponentPolicy, Seat};
pub use queue::ActionQueue;

#[cfg(test)]
mod test_support;

pub struct Encounter<D = ChaCha8Rng> {
    seed: u64,
    roster: SlotMap<CombatantId, Combatant>,
    player_id: CombatantId,
    opponent_id: CombatantId,
    queue: ActionQueue,
    status: BattleStatus,
    log: Vec<String>,
    dice: D,
    policy: Box<dyn OpponentPolicy + Send>,
    config: BattleConfig,
    resolved: u64,
}

/// Everything an ended (or abandoned) encounter hands back to its caller.
#[derive(Clone, Debug)]
pub struct EncounterReport {
    pub player: Combatant,
    pub opponent: Combatant,
    pub status: BattleStatus,
    pub log: Vec<String>,
    pub resolved: u64,
}

impl Encounter<ChaCha8Rng> {
    pub fn new(seed: u64, player: Combatant, opponent: Combatant) -> Self {
        Self::with_config(seed, player, opponent, BattleConfig::default())
    }

    pub fn with_config(
        seed: u64,
        player: Combatant,
        opponent: Combatant,
        config: BattleConfig,
    ) -> Self {
        let mut encounter =
            Self::with_dice(player, opponent, config, ChaCha8Rng::seed_from_u64(seed));
        encounter.seed = seed;
        encounter
    }
}

impl<D: Dice> Encounter<D> {
    pub fn with_dice(player: Combatant, opponent: Combatant, config: BattleConfig, dice: D) -> Self {
        let opening = format!("Battle started: {} vs {}", player.name(), opponent.name());
        info!(player = player.name(), opponent = opponent.name(), "encounter started");

        let mut roster = SlotMap::with_key();
        let player_id = roster.insert(player);
        let opponent_id = roster.insert(opponent);

        Self {
            seed: 0,
            roster,
            player_id,
            opponent_id,
            queue: ActionQueue::default(),
            status: BattleStatus::Active,
            log: vec![opening],
            dice,
            policy: Box::new(BandedPolicy::new(config.opponent_policy)),
            config,
            resolved: 0,
        }
    }

    pub fn set_policy(&mut self, policy: impl OpponentPolicy + Send + 'static) {
        self.policy = Box::new(policy);
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn config(&self) -> &BattleConfig {
        &self.config
    }

    pub fn player_id(&self) -> CombatantId {
        self.player_id
    }

    pub fn opponent_id(&self) -> CombatantId {
        self.opponent_id
    }

    pub fn player(&self) -> &Combatant {
        &self.roster[self.player_id]
    }

    pub fn opponent(&self) -> &Combatant {
        &self.roster[self.opponent_id]
    }

    pub fn combatant(&self, id: CombatantId) -> Option<&Combatant> {
        self.roster.get(id)
    }

    pub fn side_of(&self, id: CombatantId) -> Option<Side> {
        if id == self.player_id {
            Some(Side::Player)
        } else if id == self.opponent_id {
            Some(Side::Opponent)
        } else {
            None
        }
    }

    pub fn status(&self) -> BattleStatus {
        self.status
    }

    pub fn is_ended(&self) -> bool {
        self.status.is_ended()
    }

    pub fn winner(&self) -> Option<Side> {
        self.status.winner()
    }

    pub fn log(&self) -> &[String] {
        &self.log
    }

    pub fn pending_count(&self) -> usize {
        self.queue.len()
    }

    pub fn resolved_count(&self) -> u64 {
        self.resolved
    }

    /// Ends the session and returns both combatants with their potion boosts cleared.
    pub fn finish(mut self) -> EncounterReport {
        let mut player = self.roster.remove(self.player_id).expect("player should exist");
        let mut opponent = self.roster.remove(self.opponent_id).expect("opponent should exist");
        player.clear_boosts();
        opponent.clear_boosts();
        EncounterReport {
            player,
            opponent,
            status: self.status,
            log: self.log,
            resolved: self.resolved,
        }
    }

    fn combatant_id_for(&self, side: Side) -> CombatantId {
        match side {
            Side::Player => self.player_id,
            Side::Opponent => self.opponent_id,
        }
    }

    fn other_combatant(&self, id: CombatantId) -> CombatantId {
        if id == self.player_id { self.opponent_id } else { self.player_id }
    }
}
