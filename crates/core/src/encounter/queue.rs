//! Pending intents and the caller-facing enqueue protocol.

use std::collections::VecDeque;

use super::*;
use crate::journal::PlayerInput;

/// Strict FIFO of pending intents. Reordering only happens on request.
#[derive(Clone, Debug, Default)]
pub struct ActionQueue {
    pending: VecDeque<Intent>,
}

impl ActionQueue {
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn enqueue(&mut self, intent: Intent) {
        self.pending.push_back(intent);
    }

    pub fn dequeue(&mut self) -> Option<Intent> {
        self.pending.pop_front()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Intent> {
        self.pending.iter()
    }

    /// Stable sort, highest priority first.
    pub fn sort_by_priority(&mut self) {
        self.pending.make_contiguous().sort_by(|a, b| b.priority().cmp(&a.priority()));
    }

    /// Pending intents accepted by `filter`, in queue order. Nothing is removed.
    pub fn matching(&self, mut filter: impl FnMut(&Intent) -> bool) -> Vec<&Intent> {
        self.pending.iter().filter(|intent| filter(intent)).collect()
    }
}

impl<D: Dice> Encounter<D> {
    pub fn enqueue(&mut self, intent: Intent) -> Result<(), EncounterError> {
        if self.status.is_ended() {
            warn!(kind = ?intent.kind(), "intent rejected after the encounter ended");
            return Err(EncounterError::Ended);
        }
        if !self.roster.contains_key(intent.actor()) || !self.roster.contains_key(intent.target())
        {
            warn!(kind = ?intent.kind(), "intent rejected for a foreign combatant");
            return Err(EncounterError::UnknownCombatant);
        }
        if intent.actor() == intent.target() {
            warn!(kind = ?intent.kind(), "intent rejected for targeting its own actor");
            return Err(EncounterError::SelfTargeted);
        }
        self.queue.enqueue(intent);
        Ok(())
    }

    /// Queues `kind` from the player against the opponent.
    pub fn queue_player_action(&mut self, kind: ActionKind) -> Result<(), EncounterError> {
        self.enqueue(Intent::new(self.player_id, self.opponent_id, kind))
    }

    pub fn queue_player_item(&mut self, item_name: &str) -> Result<(), EncounterError> {
        self.enqueue(Intent::use_item(self.player_id, self.opponent_id, item_name))
    }

    pub fn queue_player_input(&mut self, input: &PlayerInput) -> Result<(), EncounterError> {
        match input {
            PlayerInput::Action(kind) => self.queue_player_action(*kind),
            PlayerInput::UseItem(name) => self.queue_player_item(name),
        }
    }

    pub fn pending(&self) -> impl Iterator<Item = &Intent> {
        self.queue.iter()
    }

    pub fn sort_pending_by_priority(&mut self) {
        self.queue.sort_by_priority();
    }

    pub fn pending_matching(&self, filter: impl FnMut(&Intent) -> bool) -> Vec<&Intent> {
        self.queue.matching(filter)
    }
}
