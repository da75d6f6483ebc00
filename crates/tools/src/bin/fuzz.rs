use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use battle_core::{
    ActionKind, Archetype, CombatantSpec, DuelJournal, Encounter, PlayerInput, content,
    replay::replay_to_end,
};
use clap::Parser;
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};
use tools::{settings, telemetry};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 100)]
    duels: u32,
    #[arg(short, long, default_value_t = 200)]
    turns: u32,
    /// Optional TOML file overriding the battle configuration
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Write the journal of the last duel here
    #[arg(long)]
    write_journal: Option<PathBuf>,
}

fn choose<T: Clone>(rng: &mut ChaCha8Rng, slice: &[T]) -> T {
    let p = rng.next_u64() as usize % slice.len();
    slice[p].clone()
}

fn random_spec(rng: &mut ChaCha8Rng, name: &str) -> CombatantSpec {
    let archetype = choose(rng, &Archetype::ALL);
    CombatantSpec::new(name, archetype).at_level(1 + (rng.next_u64() % 5) as u32)
}

fn main() -> Result<()> {
    telemetry::init();
    let args = Args::parse();
    let config = settings::battle_config_or_default(args.config.as_deref())?;

    println!("Starting duel fuzz on seed {} for {} duels...", args.seed, args.duels);
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
    let inputs = [
        PlayerInput::Action(ActionKind::Attack),
        PlayerInput::Action(ActionKind::Special),
        PlayerInput::Action(ActionKind::Defend),
        PlayerInput::Action(ActionKind::Flee),
        PlayerInput::UseItem(content::keys::POTION_HEALTH.into()),
    ];

    let mut last_journal = None;
    let (mut knockouts, mut escapes, mut undecided) = (0u32, 0u32, 0u32);
    for _ in 0..args.duels {
        let mut journal =
            DuelJournal::new(rng.next_u64(), random_spec(&mut rng, "Hero"), random_spec(&mut rng, "Foe"));
        let mut encounter = Encounter::with_config(
            journal.seed,
            journal.player.build(),
            journal.opponent.build(),
            config.clone(),
        );

        for _ in 0..args.turns {
            if encounter.is_ended() {
                break;
            }
            let input = choose(&mut rng, &inputs);
            encounter.play_turn(&input).context("active duel rejected a turn")?;
            journal.append(input);

            for combatant in [encounter.player(), encounter.opponent()] {
                assert!(combatant.health() <= combatant.max_health(), "Invariant failed: HP > Max HP");
                assert!(combatant.mana() <= combatant.max_mana(), "Invariant failed: mana > max mana");
            }
        }

        let replayed = replay_to_end(&config, &journal).context("recorded duel failed to replay")?;
        assert_eq!(
            replayed.final_snapshot_hash,
            encounter.snapshot_hash(),
            "Invariant failed: replay diverged on duel seed {}",
            journal.seed
        );

        match encounter.winner() {
            Some(_) => knockouts += 1,
            None if encounter.is_ended() => escapes += 1,
            None => undecided += 1,
        }
        last_journal = Some(journal);
    }

    println!("Knockouts: {knockouts}, escapes: {escapes}, undecided: {undecided}");
    if let (Some(path), Some(journal)) = (args.write_journal, last_journal) {
        let raw = journal.to_json().context("Failed to serialize journal")?;
        fs::write(&path, raw)
            .with_context(|| format!("Failed to write journal file: {}", path.display()))?;
        println!("Last journal written to {}", path.display());
    }
    Ok(())
}
