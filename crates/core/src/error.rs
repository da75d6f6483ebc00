//! Caller-facing error types.
//!
//! Per-intent failures never surface here: a missing item or an unaffordable
//! ability becomes a failed [`ActionOutcome`](crate::ActionOutcome) instead.

/// Protocol violations reported by [`Encounter`](crate::Encounter).
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EncounterError {
    /// The encounter reached a terminal state and accepts no more intents.
    #[error("encounter already ended")]
    Ended,

    /// The intent references a combatant that is not part of this encounter.
    #[error("combatant is not part of this encounter")]
    UnknownCombatant,

    /// Actor and target are the same combatant.
    #[error("a combatant cannot target itself")]
    SelfTargeted,
}

/// Inventory and equipment failures outside of turn resolution.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InventoryError {
    #[error("inventory is full ({capacity} items), cannot add {item}")]
    Full { item: String, capacity: usize },

    #[error("item not found: {0}")]
    NotFound(String),

    #[error("{0} cannot be equipped")]
    NotEquippable(String),
}
