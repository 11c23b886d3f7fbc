//! Prelude module for convenient imports
//!
//! ```rust
//! use arena_core::prelude::*;
//! ```

// Core types
pub use crate::bug::{Bug, BugError};
pub use crate::types::{AttackType, Corner, DefenseType, SizeClass};

// Battle engine
pub use crate::battle::{
    calculate_battle_power, calculate_battle_power_with_rng, resolve_battle,
    resolve_battle_with_rng, BattleOutcome,
};

// Modifiers
pub use crate::modifiers::{matchup_multiplier, size_multipliers};

// Roster and records
pub use crate::arena::{Arena, ArenaEntry, ArenaError, BattleReport};
pub use crate::record::{apply_outcome, BattleRecord, Flair};

// Tournaments
pub use crate::tournament::{Tournament, TournamentMatch, TournamentRound};

// Narration
pub use crate::narrative::{Narrator, SummaryNarrator};

// Config
pub use crate::config::{default_roster, load_roster_config};
