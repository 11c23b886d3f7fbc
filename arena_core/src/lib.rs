//! arena_core - Battle resolution library for the bug arena
//!
//! This library provides:
//! - Bug: a competitor's stats, combat types, and size class
//! - Matchup/size modifiers: the advantage tables behind every battle
//! - Battle resolution: power calculation and winner determination
//! - Arena: roster, records, flair, and battle history
//! - Tournament: single-elimination brackets over a roster
//!
//! The resolver itself is pure: it reads two bugs, returns a
//! [`battle::BattleOutcome`], and leaves every side effect (records,
//! history, narration) to the caller.

pub mod arena;
pub mod battle;
pub mod bug;
pub mod config;
pub mod modifiers;
pub mod narrative;
pub mod prelude;
pub mod record;
pub mod tournament;
pub mod types;

// Re-export core types for convenience
pub use arena::{Arena, ArenaEntry, ArenaError, BattleReport};
pub use battle::{
    calculate_battle_power, calculate_battle_power_with_rng, resolve_battle,
    resolve_battle_with_rng, BattleOutcome,
};
pub use bug::{Bug, BugError};
pub use config::default_roster;
pub use modifiers::{matchup_multiplier, size_multipliers};
pub use narrative::{Narrator, SummaryNarrator};
pub use record::{apply_outcome, BattleRecord, Flair};
pub use tournament::{Tournament, TournamentMatch, TournamentRound};
pub use types::{AttackType, Corner, DefenseType, SizeClass};
