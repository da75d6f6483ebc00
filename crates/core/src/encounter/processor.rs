//! Draining the queue and the battle state machine.

use super::*;
use crate::journal::PlayerInput;

impl<D: Dice> Encounter<D> {
    /// Resolves the next intent whose actor is still standing.
    ///
    /// Intents of knocked-out actors are discarded without side effects.
    /// Returns `None` once the encounter ended or the queue ran dry; a dry
    /// queue still runs the knockout check.
    pub fn process_next(&mut self) -> Option<ActionOutcome> {
        if self.status.is_ended() {
            return None;
        }
        let intent = loop {
            let Some(intent) = self.queue.dequeue() else {
                self.check_knockout();
                return None;
            };
            if self.roster[intent.actor()].is_alive() {
                break intent;
            }
            trace!(kind = ?intent.kind(), "skipping intent of a knocked-out actor");
        };

        let outcome = self.resolve(intent);
        self.resolved += 1;
        debug!(
            seq = self.resolved,
            kind = ?outcome.kind,
            success = outcome.success,
            effect = ?outcome.effect,
            "intent resolved"
        );
        self.log.push(outcome.description.clone());
        self.assert_vitals();
        self.check_knockout();
        Some(outcome)
    }

    /// Resolves intents until the queue is empty or the encounter ends.
    pub fn process_all(&mut self) -> Vec<ActionOutcome> {
        let mut outcomes = Vec::new();
        while let Some(outcome) = self.process_next() {
            outcomes.push(outcome);
        }
        outcomes
    }

    /// Queues the player's input and one opponent intent, then drains the queue.
    pub fn play_turn(&mut self, input: &PlayerInput) -> Result<Vec<ActionOutcome>, EncounterError> {
        self.queue_player_input(input)?;
        self.queue_opponent_action()?;
        Ok(self.process_all())
    }

    fn check_knockout(&mut self) {
        if self.status.is_ended() {
            return;
        }
        let winner = if !self.roster[self.player_id].is_alive() {
            Side::Opponent
        } else if !self.roster[self.opponent_id].is_alive() {
            Side::Player
        } else {
            return;
        };
        self.status = BattleStatus::Ended { winner: Some(winner) };

        let experience = self.config.victory_experience;
        let champion_id = self.combatant_id_for(winner);
        let champion = &mut self.roster[champion_id];
        info!(winner = champion.name(), resolved = self.resolved, "encounter ended by knockout");
        self.log.push(format!("{} wins!", champion.name()));
        if experience > 0 {
            let levels = champion.gain_experience(experience);
            if levels > 0 {
                debug!(winner = champion.name(), level = champion.level(), "winner levelled up");
            }
            self.log.push(format!("{} gains {experience} experience.", champion.name()));
        }
    }

    fn assert_vitals(&self) {
        for (id, combatant) in &self.roster {
            assert!(
                combatant.vitals_within_bounds(),
                "vitals out of bounds for {} ({id:?}): hp {}/{} mana {}/{}",
                combatant.name(),
                combatant.health(),
                combatant.max_health(),
                combatant.mana(),
                combatant.max_mana()
            );
        }
    }
}
