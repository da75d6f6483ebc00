//! Tests for the enqueue protocol and explicit queue reordering.

use super::support::*;

#[test]
fn intents_resolve_in_arrival_order() {
    let mut encounter = scripted_warriors(ScriptedDice::new());
    encounter.queue_player_action(ActionKind::Defend).expect("active encounter");
    encounter.queue_player_action(ActionKind::Attack).expect("active encounter");

    let outcomes = encounter.process_all();
    let kinds: Vec<ActionKind> = outcomes.iter().map(|outcome| outcome.kind).collect();
    assert_eq!(kinds, [ActionKind::Defend, ActionKind::Attack]);
    assert_eq!(
        encounter.log(),
        [
            "Battle started: Hero vs Orc",
            "Hero entered defensive stance.",
            "Hero attacked Orc for 15 damage.",
        ]
    );
}

#[test]
fn foreign_combatants_are_rejected() {
    let mut encounter = scripted_warriors(ScriptedDice::new());
    let stranger = CombatantId::default();
    let intent = Intent::new(encounter.player_id(), stranger, ActionKind::Attack);
    assert_eq!(encounter.enqueue(intent), Err(EncounterError::UnknownCombatant));
    assert_eq!(encounter.pending_count(), 0);
}

#[test]
fn self_targeting_is_rejected() {
    let mut encounter = scripted_warriors(ScriptedDice::new());
    let hero = encounter.player_id();
    let intent = Intent::new(hero, hero, ActionKind::Attack);
    assert_eq!(encounter.enqueue(intent), Err(EncounterError::SelfTargeted));
}

#[test]
fn sorting_orders_by_priority_and_keeps_ties_stable() {
    let mut encounter = scripted_warriors(ScriptedDice::new());
    let hero = encounter.player_id();
    let orc = encounter.opponent_id();
    encounter.enqueue(Intent::new(hero, orc, ActionKind::Attack)).expect("active encounter");
    encounter.enqueue(Intent::new(orc, hero, ActionKind::Defend)).expect("active encounter");
    encounter.enqueue(Intent::new(orc, hero, ActionKind::Attack)).expect("active encounter");
    encounter.queue_player_item(keys::POTION_HEALTH).expect("active encounter");

    encounter.sort_pending_by_priority();
    let order: Vec<(ActionKind, CombatantId)> =
        encounter.pending().map(|intent| (intent.kind(), intent.actor())).collect();
    assert_eq!(
        order,
        [
            (ActionKind::UseItem, hero),
            (ActionKind::Defend, orc),
            (ActionKind::Attack, hero),
            (ActionKind::Attack, orc),
        ]
    );
}

#[test]
fn explicit_priority_overrides_the_kind_default() {
    let mut encounter = scripted_warriors(ScriptedDice::new());
    let urgent = opponent_intent(&encounter, ActionKind::Attack).with_priority(10);
    encounter.queue_player_action(ActionKind::Flee).expect("active encounter");
    encounter.enqueue(urgent).expect("active encounter");

    encounter.sort_pending_by_priority();
    let first = encounter.pending().next().expect("two intents pending");
    assert_eq!(first.kind(), ActionKind::Attack);
    assert_eq!(first.priority(), 10);
}

#[test]
fn filtering_leaves_the_queue_untouched() {
    let mut encounter = scripted_warriors(ScriptedDice::new());
    encounter.queue_player_action(ActionKind::Attack).expect("active encounter");
    encounter.enqueue(opponent_intent(&encounter, ActionKind::Defend)).expect("active encounter");
    encounter.queue_player_action(ActionKind::Special).expect("active encounter");

    let hero = encounter.player_id();
    let mine = encounter.pending_matching(|intent| intent.actor() == hero);
    let kinds: Vec<ActionKind> = mine.iter().map(|intent| intent.kind()).collect();
    assert_eq!(kinds, [ActionKind::Attack, ActionKind::Special]);
    assert_eq!(encounter.pending_count(), 3);
}

#[test]
fn player_inputs_map_onto_intents() {
    let mut encounter = scripted_warriors(ScriptedDice::new());
    encounter.queue_player_input(&PlayerInput::Action(ActionKind::Defend)).expect("active");
    encounter.queue_player_input(&PlayerInput::UseItem("Elixir".into())).expect("active");

    let pending: Vec<&Intent> = encounter.pending().collect();
    assert_eq!(pending[0].kind(), ActionKind::Defend);
    assert_eq!(pending[0].item_name(), None);
    assert_eq!(pending[1].kind(), ActionKind::UseItem);
    assert_eq!(pending[1].item_name(), Some("Elixir"));
    assert!(pending.iter().all(|intent| intent.target() == encounter.opponent_id()));
}
