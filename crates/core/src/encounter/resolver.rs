//! Per-kind resolution of a dequeued intent.

use super::*;
use crate::error::InventoryError;

impl<D: Dice> Encounter<D> {
    pub(super) fn resolve(&mut self, intent: Intent) -> ActionOutcome {
        let actor = intent.actor();
        let target = intent.target();
        match intent.kind() {
            ActionKind::Attack => self.resolve_attack(actor, target),
            ActionKind::Special => self.resolve_special(actor, target),
            ActionKind::Defend => self.resolve_defend(actor),
            ActionKind::UseItem => self.resolve_use_item(actor, intent.item_name()),
            ActionKind::Flee => self.resolve_flee(actor),
        }
    }

    fn resolve_attack(&mut self, actor_id: CombatantId, target_id: CombatantId) -> ActionOutcome {
        let [actor, target] = self
            .roster
            .get_disjoint_mut([actor_id, target_id])
            .expect("enqueue admits only distinct roster members");
        let raw = actor.compute_attack_damage(&mut self.dice);
        let mitigated = target.take_damage(raw);
        actor.register_attack_landed();
        trace!(raw, mitigated, "attack landed");
        ActionOutcome {
            actor: actor_id,
            kind: ActionKind::Attack,
            description: format!("{} attacked {} for {raw} damage.", actor.name(), target.name()),
            success: true,
            effect: Some(ActionEffect::Damage(raw)),
        }
    }

    fn resolve_special(&mut self, actor_id: CombatantId, target_id: CombatantId) -> ActionOutcome {
        let [actor, target] = self
            .roster
            .get_disjoint_mut([actor_id, target_id])
            .expect("enqueue admits only distinct roster members");
        let health_before = target.health();
        if actor.attempt_special_ability(target, &mut self.dice) {
            let dealt = health_before - target.health();
            ActionOutcome {
                actor: actor_id,
                kind: ActionKind::Special,
                description: format!(
                    "{} used {} on {}!",
                    actor.name(),
                    actor.ability().name(),
                    target.name()
                ),
                success: true,
                effect: Some(ActionEffect::Damage(dealt)),
            }
        } else {
            ActionOutcome {
                actor: actor_id,
                kind: ActionKind::Special,
                description: format!(
                    "{} tried to use a special ability but failed (not enough resource).",
                    actor.name()
                ),
                success: false,
                effect: None,
            }
        }
    }

    fn resolve_defend(&mut self, actor_id: CombatantId) -> ActionOutcome {
        ActionOutcome {
            actor: actor_id,
            kind: ActionKind::Defend,
            description: format!("{} entered defensive stance.", self.roster[actor_id].name()),
            success: true,
            effect: None,
        }
    }

    fn resolve_use_item(&mut self, actor_id: CombatantId, item_name: Option<&str>) -> ActionOutcome {
        let actor = &mut self.roster[actor_id];
        let used = match item_name {
            Some(name) => actor.use_item(name),
            None => Err(InventoryError::NotFound(String::new())),
        };
        let (description, success, effect) = match used {
            Ok(Some(amount)) => (
                format!("{} used item: {}.", actor.name(), item_name.unwrap_or_default()),
                true,
                Some(ActionEffect::Restored(amount)),
            ),
            Ok(None) => (format!("{} failed to use item.", actor.name()), false, None),
            Err(_) => (
                format!("{} tried to use an item but couldn't find it.", actor.name()),
                false,
                None,
            ),
        };
        ActionOutcome { actor: actor_id, kind: ActionKind::UseItem, description, success, effect }
    }

    fn resolve_flee(&mut self, actor_id: CombatantId) -> ActionOutcome {
        let opponent_id = self.other_combatant(actor_id);
        let chance = self
            .config
            .flee
            .chance(self.roster[actor_id].level(), self.roster[opponent_id].level());
        let escaped = self.dice.roll_unit() < chance;
        let name = self.roster[actor_id].name();
        if escaped {
            let description = format!("{name} fled from battle!");
            info!(fleeing = name, chance, "encounter ended by flight");
            self.status = BattleStatus::Ended { winner: None };
            ActionOutcome {
                actor: actor_id,
                kind: ActionKind::Flee,
                description,
                success: true,
                effect: Some(ActionEffect::Escaped),
            }
        } else {
            ActionOutcome {
                actor: actor_id,
                kind: ActionKind::Flee,
                description: format!("{name} tried to flee but failed!"),
                success: false,
                effect: None,
            }
        }
    }
}
