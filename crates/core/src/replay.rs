use crate::character::{Combatant, MAX_LEVEL};
use crate::config::BattleConfig;
use crate::encounter::Encounter;
use crate::error::EncounterError;
use crate::journal::{CombatantSpec, DuelJournal};
use crate::types::BattleStatus;

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum ReplayError {
    #[error(transparent)]
    Encounter(#[from] EncounterError),

    /// The journal keeps going after the duel was already decided.
    #[error("input {seq} was recorded after the encounter ended")]
    InputsAfterEnd { seq: u64 },

    /// A combatant is recorded at a level no duel can reach.
    #[error("{name} is recorded at level {level}, outside 1..={max}", max = MAX_LEVEL)]
    LevelOutOfRange { name: String, level: u32 },
}

#[derive(Clone, Debug, PartialEq)]
pub struct ReplayResult {
    pub final_status: BattleStatus,
    pub final_snapshot_hash: u64,
    pub turns_played: u64,
    pub log: Vec<String>,
}

/// Rebuilds the duel from its journal and plays every recorded turn.
pub fn replay_to_end(
    config: &BattleConfig,
    journal: &DuelJournal,
) -> Result<ReplayResult, ReplayError> {
    let mut encounter = Encounter::with_config(
        journal.seed,
        build_combatant(&journal.player)?,
        build_combatant(&journal.opponent)?,
        config.clone(),
    );
    let mut turns_played = 0;
    for record in &journal.inputs {
        if encounter.is_ended() {
            return Err(ReplayError::InputsAfterEnd { seq: record.seq });
        }
        encounter.play_turn(&record.input)?;
        turns_played += 1;
    }

    Ok(ReplayResult {
        final_status: encounter.status(),
        final_snapshot_hash: encounter.snapshot_hash(),
        turns_played,
        log: encounter.log().to_vec(),
    })
}

fn build_combatant(spec: &CombatantSpec) -> Result<Combatant, ReplayError> {
    if !(1..=MAX_LEVEL).contains(&spec.level) {
        return Err(ReplayError::LevelOutOfRange { name: spec.name.clone(), level: spec.level });
    }
    Ok(spec.build())
}

#[cfg(test)]
mod tests;
