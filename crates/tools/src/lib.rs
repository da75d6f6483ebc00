//! Shared plumbing for the duel command-line tools.

pub mod settings;
pub mod telemetry;
