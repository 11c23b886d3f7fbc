//! Arena - the roster that owns bugs, records, and battle history
//!
//! The resolver is pure; this is the caller-side collaborator that applies
//! its outcomes. Every record update for a roster goes through one
//! `&mut self` owner; callers running battles concurrently serialize on
//! it.

use crate::battle::{resolve_battle_with_rng, BattleOutcome};
use crate::bug::Bug;
use crate::narrative::Narrator;
use crate::record::{apply_outcome, BattleRecord, Flair};
use crate::types::Corner;
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from staging a battle
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArenaError {
    #[error("a bug cannot battle itself")]
    SameBug,
    #[error("no bug at roster slot {0}")]
    UnknownBug(usize),
}

/// A rostered bug together with its career state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArenaEntry {
    pub bug: Bug,
    pub record: BattleRecord,
    pub flair: Option<Flair>,
}

impl ArenaEntry {
    fn new(bug: Bug) -> Self {
        let record = BattleRecord::new();
        let flair = Flair::evaluate(&bug, &record);
        ArenaEntry { bug, record, flair }
    }
}

/// Stored result of one staged battle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BattleReport {
    pub red: String,
    pub blue: String,
    pub outcome: BattleOutcome,
    pub narrative: String,
}

impl BattleReport {
    /// Name of the winning bug
    pub fn winner_name(&self) -> &str {
        match self.outcome.winner {
            Corner::Red => &self.red,
            Corner::Blue => &self.blue,
        }
    }
}

/// In-memory roster and battle log
#[derive(Debug, Clone, Default)]
pub struct Arena {
    entries: Vec<ArenaEntry>,
    history: Vec<BattleReport>,
}

impl Arena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an arena from an initial roster
    pub fn from_bugs(bugs: Vec<Bug>) -> Self {
        Arena {
            entries: bugs.into_iter().map(ArenaEntry::new).collect(),
            history: Vec::new(),
        }
    }

    /// Add a bug to the roster, returning its slot
    pub fn add_bug(&mut self, bug: Bug) -> usize {
        self.entries.push(ArenaEntry::new(bug));
        self.entries.len() - 1
    }

    pub fn entries(&self) -> &[ArenaEntry] {
        &self.entries
    }

    pub fn history(&self) -> &[BattleReport] {
        &self.history
    }

    /// Serialize the battle history for export or archival
    pub fn history_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.history)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Stage a battle between two roster slots.
    ///
    /// Resolves the matchup, applies the outcome to both records,
    /// refreshes flair, and logs a report with the narrator's text.
    pub fn fight(
        &mut self,
        red: usize,
        blue: usize,
        narrator: &dyn Narrator,
        rng: &mut impl Rng,
    ) -> Result<&BattleReport, ArenaError> {
        if red == blue {
            return Err(ArenaError::SameBug);
        }
        let max = self.entries.len();
        for slot in [red, blue] {
            if slot >= max {
                return Err(ArenaError::UnknownBug(slot));
            }
        }

        let outcome = resolve_battle_with_rng(&self.entries[red].bug, &self.entries[blue].bug, rng);
        let narrative = narrator.narrate(&self.entries[red].bug, &self.entries[blue].bug, &outcome);

        // Caller-side record update step, driven entirely by the outcome.
        let mut red_record = self.entries[red].record;
        let mut blue_record = self.entries[blue].record;
        apply_outcome(&outcome, &mut red_record, &mut blue_record);
        self.entries[red].record = red_record;
        self.entries[blue].record = blue_record;
        for slot in [red, blue] {
            let entry = &mut self.entries[slot];
            entry.flair = Flair::evaluate(&entry.bug, &entry.record);
        }

        self.history.push(BattleReport {
            red: self.entries[red].bug.name.clone(),
            blue: self.entries[blue].bug.name.clone(),
            outcome,
            narrative,
        });
        Ok(&self.history[self.history.len() - 1])
    }
}
