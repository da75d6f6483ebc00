//! Opponent decision making.

use super::*;
use crate::config::PolicyBands;

/// A combatant as seen by a policy: its id and current state.
#[derive(Clone, Copy, Debug)]
pub struct Seat<'a> {
    pub id: CombatantId,
    pub combatant: &'a Combatant,
}

pub trait OpponentPolicy {
    /// Produces the opponent's next intent against `player`.
    fn generate(&mut self, opponent: Seat<'_>, player: Seat<'_>, dice: &mut dyn Dice) -> Intent;
}

/// Fixed stochastic policy: one percent roll mapped onto defend, special and
/// attack bands. Never flees.
#[derive(Clone, Copy, Debug, Default)]
pub struct BandedPolicy {
    bands: PolicyBands,
}

impl BandedPolicy {
    pub fn new(bands: PolicyBands) -> Self {
        Self { bands }
    }

    pub fn kind_for_roll(&self, roll: u32) -> ActionKind {
        if roll < self.bands.defend_below {
            ActionKind::Defend
        } else if roll < self.bands.special_below {
            ActionKind::Special
        } else {
            ActionKind::Attack
        }
    }
}

impl OpponentPolicy for BandedPolicy {
    fn generate(&mut self, opponent: Seat<'_>, player: Seat<'_>, dice: &mut dyn Dice) -> Intent {
        Intent::new(opponent.id, player.id, self.kind_for_roll(dice.roll_percent()))
    }
}

impl<D: Dice> Encounter<D> {
    /// Draws the opponent's next intent without queueing it.
    pub fn generate_opponent_intent(&mut self) -> Intent {
        let opponent = Seat { id: self.opponent_id, combatant: &self.roster[self.opponent_id] };
        let player = Seat { id: self.player_id, combatant: &self.roster[self.player_id] };
        self.policy.generate(opponent, player, &mut self.dice)
    }

    pub fn queue_opponent_action(&mut self) -> Result<(), EncounterError> {
        if self.status.is_ended() {
            warn!("opponent intent rejected after the encounter ended");
            return Err(EncounterError::Ended);
        }
        let intent = self.generate_opponent_intent();
        self.enqueue(intent)
    }
}
