use battle_core::{
    ActionEffect, ActionKind, Archetype, Armor, ArmorSlot, BattleConfig, BattleStatus, Combatant,
    Encounter, FleeConfig, Intent, ScriptedDice, Side, Weapon, WeaponKind,
};

fn armored(name: &str, pieces: &[(ArmorSlot, f64)]) -> Combatant {
    let mut combatant = Combatant::new(name, Archetype::Warrior);
    for (slot, reduction) in pieces {
        let piece = Armor::new(format!("{slot:?} guard"), *slot, 0).with_reduction(*reduction);
        let name = piece.name.clone();
        combatant.add_item(piece.into()).expect("room left");
        combatant.equip_armor(&name).expect("armor was just packed");
    }
    combatant
}

#[test]
fn attack_value_adds_strength_and_weapon_roll() {
    let mut warrior = Combatant::new("Conan", Archetype::Warrior);
    warrior.add_item(Weapon::new("Test Blade", WeaponKind::Sword, 10, 10).into()).expect("room");
    warrior.equip_weapon("Test Blade").expect("blade was just packed");
    assert_eq!(warrior.resource().current(), 0);
    assert_eq!(warrior.compute_attack_damage(&mut ScriptedDice::new()), 25);
}

#[test]
fn stacked_armor_is_clamped_before_mitigation() {
    let mut knight = armored("Knight", &[(ArmorSlot::Chest, 0.5), (ArmorSlot::Legs, 0.4)]);
    assert_eq!(knight.take_damage(20), 5);
    assert_eq!(knight.health(), knight.max_health() - 5);
}

#[test]
fn mitigation_always_lets_a_quarter_through() {
    let pieces = [(ArmorSlot::Head, 1.0), (ArmorSlot::Chest, 1.0), (ArmorSlot::Feet, 1.0)];
    for raw in 0..200 {
        let mut knight = armored("Knight", &pieces);
        let dealt = knight.take_damage(raw);
        assert!(dealt >= raw.div_ceil(4), "raw {raw} dealt {dealt}");
    }
}

#[test]
fn five_levels_over_one_gives_an_even_flee_chance() {
    let chance = FleeConfig::default().chance(5, 1);
    assert!((chance - 0.50).abs() < 1e-9, "chance was {chance}");

    let mut encounter = Encounter::with_dice(
        Combatant::at_level("Hero", Archetype::Archer, 5),
        Combatant::new("Orc", Archetype::Warrior),
        BattleConfig::default(),
        ScriptedDice::new().with_units([0.51, 0.49]),
    );
    encounter.queue_player_action(ActionKind::Flee).expect("active");
    encounter.queue_player_action(ActionKind::Flee).expect("active");
    let outcomes = encounter.process_all();
    assert!(!outcomes[0].success);
    assert!(outcomes[1].success);
    assert_eq!(encounter.status(), BattleStatus::Ended { winner: None });
}

#[test]
fn lethal_attack_preempts_the_opponent_defend() {
    let mut orc = Combatant::new("Orc", Archetype::Warrior);
    orc.take_damage(145);
    let mut encounter = Encounter::with_dice(
        Combatant::new("Hero", Archetype::Warrior),
        orc,
        BattleConfig::default(),
        ScriptedDice::new(),
    );
    encounter.queue_player_action(ActionKind::Attack).expect("active");
    let defend = Intent::new(encounter.opponent_id(), encounter.player_id(), ActionKind::Defend);
    encounter.enqueue(defend).expect("active");

    let outcomes = encounter.process_all();
    assert_eq!(outcomes.len(), 1);
    assert_eq!(outcomes[0].effect, Some(ActionEffect::Damage(15)));
    assert_eq!(encounter.winner(), Some(Side::Player));
    assert!(!encounter.log().iter().any(|line| line.contains("defensive stance")));
}

#[test]
fn dead_actor_intents_do_not_block_the_drain() {
    let mut orc = Combatant::new("Orc", Archetype::Mage);
    orc.take_damage(1000);
    let mut encounter = Encounter::with_dice(
        Combatant::new("Hero", Archetype::Warrior),
        orc,
        BattleConfig::default(),
        ScriptedDice::new(),
    );
    for kind in [ActionKind::Attack, ActionKind::Special, ActionKind::Flee] {
        let intent = Intent::new(encounter.opponent_id(), encounter.player_id(), kind);
        encounter.enqueue(intent).expect("active");
    }
    encounter.queue_player_action(ActionKind::Defend).expect("active");

    let hero_before = encounter.player().clone();
    let outcomes = encounter.process_all();
    assert_eq!(outcomes.len(), 1);
    assert_eq!(outcomes[0].kind, ActionKind::Defend);
    assert_eq!(encounter.player().health(), hero_before.health());
    assert_eq!(encounter.player().mana(), hero_before.mana());
    assert_eq!(encounter.opponent().mana(), encounter.opponent().max_mana());
}

#[test]
fn finished_encounter_stays_silent() {
    let mut encounter = Encounter::new(
        8,
        Combatant::at_level("Hero", Archetype::Warrior, 20),
        Combatant::new("Rat", Archetype::Mage),
    );
    encounter.queue_player_action(ActionKind::Flee).expect("active");
    encounter.process_all();
    assert!(encounter.is_ended(), "a nineteen level gap makes flight certain");

    let frozen = encounter.log().to_vec();
    assert!(encounter.queue_player_action(ActionKind::Attack).is_err());
    assert!(encounter.process_all().is_empty());
    assert_eq!(encounter.log(), frozen);
}
