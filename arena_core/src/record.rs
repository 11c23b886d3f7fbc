//! Win/loss records and performance flair
//!
//! Record updates are a caller-side step driven by a returned outcome.
//! The resolver never mutates them itself.

use crate::battle::BattleOutcome;
use crate::bug::Bug;
use crate::types::Corner;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Career win/loss tally for one bug
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleRecord {
    pub wins: u32,
    pub losses: u32,
}

impl BattleRecord {
    /// Fresh 0-0 record
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_win(&mut self) {
        self.wins += 1;
    }

    pub fn record_loss(&mut self) {
        self.losses += 1;
    }

    /// Total battles fought
    pub fn total_battles(&self) -> u32 {
        self.wins + self.losses
    }

    /// Win percentage (0-100); an unfought bug sits at 0
    pub fn win_rate(&self) -> f64 {
        let total = self.total_battles();
        if total == 0 {
            return 0.0;
        }
        self.wins as f64 / total as f64 * 100.0
    }
}

impl fmt::Display for BattleRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.wins, self.losses)
    }
}

/// Apply an outcome to the two corners' records
pub fn apply_outcome(outcome: &BattleOutcome, red: &mut BattleRecord, blue: &mut BattleRecord) {
    match outcome.winner {
        Corner::Red => {
            red.record_win();
            blue.record_loss();
        }
        Corner::Blue => {
            blue.record_win();
            red.record_loss();
        }
    }
}

/// Earned title shown next to a bug's name on the roster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Flair {
    Undefeated,
    Dominator,
    Veteran,
    Speedster,
    Tank,
    Powerhouse,
}

impl Flair {
    /// Evaluate flair from a bug's stats and its record. Checked in
    /// priority order; a bug with no claim to any title gets `None`.
    pub fn evaluate(bug: &Bug, record: &BattleRecord) -> Option<Flair> {
        if record.total_battles() > 0 && record.losses == 0 {
            Some(Flair::Undefeated)
        } else if record.win_rate() >= 80.0 && record.wins >= 5 {
            Some(Flair::Dominator)
        } else if record.wins >= 5 {
            Some(Flair::Veteran)
        } else if bug.speed >= 80.0 {
            Some(Flair::Speedster)
        } else if bug.defense >= 80.0 {
            Some(Flair::Tank)
        } else if bug.attack >= 80.0 {
            Some(Flair::Powerhouse)
        } else {
            None
        }
    }
}

impl fmt::Display for Flair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let title = match self {
            Flair::Undefeated => "Undefeated",
            Flair::Dominator => "Dominator",
            Flair::Veteran => "Veteran",
            Flair::Speedster => "Speedster",
            Flair::Tank => "Tank",
            Flair::Powerhouse => "Powerhouse",
        };
        f.write_str(title)
    }
}
