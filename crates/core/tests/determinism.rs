use battle_core::{
    ActionKind, Archetype, BattleConfig, CombatantSpec, DuelJournal, Encounter, PlayerInput,
    replay_to_end,
};

fn scripted_duel(seed: u64) -> DuelJournal {
    let mut journal = DuelJournal::new(
        seed,
        CombatantSpec::new("Hero", Archetype::Archer),
        CombatantSpec::new("Brute", Archetype::Warrior),
    );
    for turn in 0..12 {
        let input = match turn % 3 {
            0 => PlayerInput::Action(ActionKind::Attack),
            1 => PlayerInput::Action(ActionKind::Special),
            _ => PlayerInput::UseItem("Health Potion".into()),
        };
        journal.append(input);
    }
    journal
}

fn run_trace(seed: u64) -> (Vec<String>, u64) {
    let journal = scripted_duel(seed);
    let mut encounter =
        Encounter::new(journal.seed, journal.player.build(), journal.opponent.build());
    for record in &journal.inputs {
        if encounter.is_ended() {
            break;
        }
        encounter.play_turn(&record.input).expect("turn accepted while active");
    }
    (encounter.log().to_vec(), encounter.snapshot_hash())
}

#[test]
fn identical_seeds_produce_identical_logs_and_hashes() {
    for seed in [1, 42, 12345, u64::MAX] {
        assert_eq!(run_trace(seed), run_trace(seed), "seed {seed} diverged");
    }
}

#[test]
fn different_seeds_produce_different_traces() {
    let traces: Vec<u64> = (0..8).map(|seed| run_trace(seed).1).collect();
    let first = traces[0];
    assert!(
        traces.iter().any(|hash| *hash != first),
        "eight seeds should not all collapse onto one outcome"
    );
}

#[test]
fn journal_survives_json_and_replays_identically() {
    let journal = scripted_duel(2024);
    let raw = journal.to_json().expect("journal serializes");
    let restored = DuelJournal::from_json(&raw).expect("journal parses");
    assert_eq!(restored, journal);

    let config = BattleConfig::default();
    let first = replay_to_end(&config, &journal);
    let second = replay_to_end(&config, &restored);
    assert_eq!(first, second);
}
