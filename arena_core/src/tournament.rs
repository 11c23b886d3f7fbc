//! Single-elimination tournaments over an arena roster
//!
//! Entrants are roster slots. Each round pairs the remaining entrants in
//! seeding order; an odd entrant out receives a bye and advances. Winners
//! advance until one champion remains. All battles run through
//! [`Arena::fight`], so records and history update exactly as friendly
//! matches do.

use crate::arena::{Arena, ArenaError};
use crate::narrative::Narrator;
use crate::types::Corner;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// One decided pairing within a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TournamentMatch {
    pub red: usize,
    pub blue: usize,
    pub winner: usize,
}

/// Record of a played round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TournamentRound {
    pub number: u32,
    pub matches: Vec<TournamentMatch>,
    /// Entrant that advanced without fighting, if the field was odd
    pub bye: Option<usize>,
}

/// A bracket in progress
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tournament {
    active: Vec<usize>,
    rounds: Vec<TournamentRound>,
}

impl Tournament {
    /// Seed a bracket from roster slots, in the given order
    pub fn new(entrants: Vec<usize>) -> Self {
        Tournament {
            active: entrants,
            rounds: Vec::new(),
        }
    }

    /// Slots still alive in the bracket
    pub fn remaining(&self) -> &[usize] {
        &self.active
    }

    /// Rounds played so far
    pub fn rounds(&self) -> &[TournamentRound] {
        &self.rounds
    }

    /// The champion, once the field is down to one
    pub fn champion(&self) -> Option<usize> {
        match self.active.as_slice() {
            [slot] => Some(*slot),
            _ => None,
        }
    }

    /// Whether the bracket has been decided
    pub fn is_finished(&self) -> bool {
        self.active.len() <= 1
    }

    /// Play the next round, advancing winners.
    ///
    /// Returns the round record, or `None` when the bracket is already
    /// decided. Errors from the arena (unknown slots) abort the round
    /// before any pairing is recorded.
    pub fn play_round(
        &mut self,
        arena: &mut Arena,
        narrator: &dyn Narrator,
        rng: &mut impl Rng,
    ) -> Result<Option<TournamentRound>, ArenaError> {
        if self.is_finished() {
            return Ok(None);
        }

        // Validate every entrant up front so a bad slot can't leave the
        // round half-played.
        for slot in &self.active {
            if *slot >= arena.len() {
                return Err(ArenaError::UnknownBug(*slot));
            }
        }

        let number = self.rounds.len() as u32 + 1;
        let mut matches = Vec::new();
        let mut advancing = Vec::new();

        let mut pairs = self.active.chunks_exact(2);
        for pair in &mut pairs {
            let (red, blue) = (pair[0], pair[1]);
            let report = arena.fight(red, blue, narrator, rng)?;
            let winner = match report.outcome.winner {
                Corner::Red => red,
                Corner::Blue => blue,
            };
            matches.push(TournamentMatch { red, blue, winner });
            advancing.push(winner);
        }

        let bye = pairs.remainder().first().copied();
        if let Some(slot) = bye {
            advancing.push(slot);
        }

        let round = TournamentRound {
            number,
            matches,
            bye,
        };
        self.rounds.push(round.clone());
        self.active = advancing;
        Ok(Some(round))
    }
}
