use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use battle_core::{BattleStatus, DuelJournal, ReplayResult, Side, replay::replay_to_end};
use clap::Parser;
use tools::{settings, telemetry};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the duel journal JSON file to replay
    #[arg(short, long)]
    journal: PathBuf,

    /// Optional TOML file overriding the battle configuration
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the full battle log
    #[arg(short, long)]
    log: bool,
}

fn main() -> Result<()> {
    telemetry::init();
    let args = Args::parse();

    let config = settings::battle_config_or_default(args.config.as_deref())?;
    let journal_data = fs::read_to_string(&args.journal)
        .with_context(|| format!("Failed to read journal file: {}", args.journal.display()))?;
    let journal = DuelJournal::from_json(&journal_data)
        .with_context(|| "Failed to deserialize journal JSON")?;

    let result: ReplayResult =
        replay_to_end(&config, &journal).context("Replay failed during execution")?;

    if args.log {
        for line in &result.log {
            println!("{line}");
        }
    }
    println!("Replay complete.");
    println!("Turns: {}", result.turns_played);
    println!("Outcome: {}", describe(result.final_status, &journal));
    println!("Snapshot Hash: {}", result.final_snapshot_hash);

    Ok(())
}

fn describe(status: BattleStatus, journal: &DuelJournal) -> String {
    match status {
        BattleStatus::Active => "undecided".to_string(),
        BattleStatus::Ended { winner: None } => "fled".to_string(),
        BattleStatus::Ended { winner: Some(Side::Player) } => {
            format!("{} won", journal.player.name)
        }
        BattleStatus::Ended { winner: Some(Side::Opponent) } => {
            format!("{} won", journal.opponent.name)
        }
    }
}
