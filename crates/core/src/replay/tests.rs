use super::*;
use crate::character::Archetype;
use crate::content;
use crate::journal::{CombatantSpec, PlayerInput};
use crate::types::ActionKind;

const MAX_TEST_TURNS: usize = 256;

fn warrior_duel(seed: u64) -> DuelJournal {
    DuelJournal::new(
        seed,
        CombatantSpec::new("Hero", Archetype::Warrior),
        CombatantSpec::new("Orc", Archetype::Warrior),
    )
}

fn scripted_input(turn: usize) -> PlayerInput {
    match turn % 4 {
        0 | 1 => PlayerInput::Action(ActionKind::Attack),
        2 => PlayerInput::Action(ActionKind::Special),
        _ => PlayerInput::UseItem(content::keys::POTION_HEALTH.into()),
    }
}

#[test]
fn live_duel_and_replay_hash_match() {
    let config = BattleConfig::default();
    let mut journal = warrior_duel(777);
    let mut live = Encounter::with_config(
        journal.seed,
        journal.player.build(),
        journal.opponent.build(),
        config.clone(),
    );

    for turn in 0..MAX_TEST_TURNS {
        if live.is_ended() {
            break;
        }
        let input = scripted_input(turn);
        live.play_turn(&input).expect("turn should be accepted while active");
        journal.append(input);
    }
    assert!(live.is_ended(), "duel should be decided within {MAX_TEST_TURNS} turns");

    let replayed = replay_to_end(&config, &journal).expect("replay should succeed");
    assert_eq!(replayed.final_snapshot_hash, live.snapshot_hash());
    assert_eq!(replayed.final_status, live.status());
    assert_eq!(replayed.log, live.log());
    assert_eq!(replayed.turns_played, journal.inputs.len() as u64);
}

#[test]
fn replay_rejects_inputs_recorded_after_the_end() {
    let mut journal = warrior_duel(5);
    journal.opponent.level = 1;
    journal.player.level = 30;
    // A level gap of 29 makes the first flee certain.
    journal.append(PlayerInput::Action(ActionKind::Flee));
    journal.append(PlayerInput::Action(ActionKind::Attack));

    let err = replay_to_end(&BattleConfig::default(), &journal).expect_err("second input is late");
    assert_eq!(err, ReplayError::InputsAfterEnd { seq: 1 });
}

#[test]
fn empty_journal_replays_to_an_active_duel() {
    let journal = warrior_duel(1);
    let replayed = replay_to_end(&BattleConfig::default(), &journal).expect("nothing to replay");
    assert_eq!(replayed.final_status, BattleStatus::Active);
    assert_eq!(replayed.turns_played, 0);
    assert_eq!(replayed.log, ["Battle started: Hero vs Orc"]);
}

#[test]
fn replay_rejects_levels_beyond_the_cap() {
    let raw = r#"{
        "format_version": 1,
        "seed": 3,
        "player": { "name": "Hero", "archetype": "Warrior", "level": 43000000 },
        "opponent": { "name": "Orc", "archetype": "Warrior" },
        "inputs": [ { "seq": 0, "input": { "Action": "Attack" } } ]
    }"#;
    let journal = DuelJournal::from_json(raw).expect("journal should parse");

    let err = replay_to_end(&BattleConfig::default(), &journal).expect_err("level is unreachable");
    assert_eq!(err, ReplayError::LevelOutOfRange { name: "Hero".into(), level: 43_000_000 });
    assert_eq!(err.to_string(), "Hero is recorded at level 43000000, outside 1..=100");
}

#[test]
fn replay_rejects_level_zero() {
    let mut journal = warrior_duel(3);
    journal.opponent.level = 0;
    let err = replay_to_end(&BattleConfig::default(), &journal).expect_err("level zero");
    assert_eq!(err, ReplayError::LevelOutOfRange { name: "Orc".into(), level: 0 });
}
