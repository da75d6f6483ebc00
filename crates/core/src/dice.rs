//! Random source injected into every probabilistic roll of a duel.

use std::collections::VecDeque;

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::Rng;

pub trait Dice {
    fn next_u64(&mut self) -> u64;

    /// Uniform integer in `[0, 100]`.
    fn roll_percent(&mut self) -> u32 {
        (self.next_u64() % 101) as u32
    }

    /// Uniform float in `[0, 1)`.
    fn roll_unit(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Uniform integer in `[min, max]`. An empty range yields `min`.
    fn roll_range(&mut self, min: u32, max: u32) -> u32 {
        if max <= min {
            return min;
        }
        let span = u64::from(max - min) + 1;
        min + (self.next_u64() % span) as u32
    }
}

impl Dice for ChaCha8Rng {
    fn next_u64(&mut self) -> u64 {
        Rng::next_u64(self)
    }
}

/// Replays queued rolls in order. An exhausted queue yields the lowest outcome.
#[derive(Clone, Debug, Default)]
pub struct ScriptedDice {
    percents: VecDeque<u32>,
    units: VecDeque<f64>,
    ranges: VecDeque<u32>,
}

impl ScriptedDice {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_percents(mut self, rolls: impl IntoIterator<Item = u32>) -> Self {
        self.percents.extend(rolls);
        self
    }

    pub fn with_units(mut self, rolls: impl IntoIterator<Item = f64>) -> Self {
        self.units.extend(rolls);
        self
    }

    pub fn with_ranges(mut self, rolls: impl IntoIterator<Item = u32>) -> Self {
        self.ranges.extend(rolls);
        self
    }

    pub fn push_percent(&mut self, roll: u32) {
        self.percents.push_back(roll);
    }

    pub fn push_unit(&mut self, roll: f64) {
        self.units.push_back(roll);
    }
}

impl Dice for ScriptedDice {
    fn next_u64(&mut self) -> u64 {
        0
    }

    fn roll_percent(&mut self) -> u32 {
        self.percents.pop_front().unwrap_or(0).min(100)
    }

    fn roll_unit(&mut self) -> f64 {
        self.units.pop_front().unwrap_or(0.0).clamp(0.0, 1.0)
    }

    fn roll_range(&mut self, min: u32, max: u32) -> u32 {
        self.ranges.pop_front().map_or(min, |roll| roll.clamp(min, max.max(min)))
    }
}
