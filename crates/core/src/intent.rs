use crate::types::{ActionKind, CombatantId};

/// One queued request to act. Immutable once built; consumed exactly once.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Intent {
    actor: CombatantId,
    target: CombatantId,
    kind: ActionKind,
    item_name: Option<String>,
    priority: i32,
}

impl Intent {
    /// Item use goes through [`Intent::use_item`]; any other kind ignores items.
    pub fn new(actor: CombatantId, target: CombatantId, kind: ActionKind) -> Self {
        Self { actor, target, kind, item_name: None, priority: kind.default_priority() }
    }

    pub fn use_item(actor: CombatantId, target: CombatantId, item_name: impl Into<String>) -> Self {
        Self {
            actor,
            target,
            kind: ActionKind::UseItem,
            item_name: Some(item_name.into()),
            priority: ActionKind::UseItem.default_priority(),
        }
    }

    pub fn with_priority(self, priority: i32) -> Self {
        Self { priority, ..self }
    }

    pub fn actor(&self) -> CombatantId {
        self.actor
    }

    pub fn target(&self) -> CombatantId {
        self.target
    }

    pub fn kind(&self) -> ActionKind {
        self.kind
    }

    pub fn item_name(&self) -> Option<&str> {
        self.item_name.as_deref()
    }

    pub fn priority(&self) -> i32 {
        self.priority
    }
}
