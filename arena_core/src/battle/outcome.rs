//! BattleOutcome - the result of a single resolution

use crate::types::Corner;
use serde::{Deserialize, Serialize};

/// Outcome of one resolved battle.
///
/// Immutable once produced. The resolver hands ownership to the caller,
/// which is responsible for record updates and narrative generation. The
/// engine itself never touches either bug.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BattleOutcome {
    /// Corner that won
    pub winner: Corner,
    /// Corner that lost
    pub loser: Corner,
    /// Final battle power of the winner
    pub winner_power: f64,
    /// Final battle power of the loser
    pub loser_power: f64,
    /// Whether the winner was decided by coin flip on exactly equal power
    pub tie_broken: bool,
}

impl BattleOutcome {
    /// Battle power of the given corner
    pub fn power_of(&self, corner: Corner) -> f64 {
        if corner == self.winner {
            self.winner_power
        } else {
            self.loser_power
        }
    }

    /// Winner's power margin over the loser (zero for tie-breaks)
    pub fn margin(&self) -> f64 {
        self.winner_power - self.loser_power
    }

    /// One-line digest of the result
    pub fn summary(&self) -> String {
        if self.tie_broken {
            format!(
                "{} wins a dead heat at {:.1} power",
                self.winner, self.winner_power
            )
        } else {
            format!(
                "{} wins, {:.1} power to {:.1}",
                self.winner, self.winner_power, self.loser_power
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_power_of_corners() {
        let outcome = BattleOutcome {
            winner: Corner::Blue,
            loser: Corner::Red,
            winner_power: 120.5,
            loser_power: 98.25,
            tie_broken: false,
        };
        assert!((outcome.power_of(Corner::Blue) - 120.5).abs() < f64::EPSILON);
        assert!((outcome.power_of(Corner::Red) - 98.25).abs() < f64::EPSILON);
        assert!((outcome.margin() - 22.25).abs() < f64::EPSILON);
    }

    #[test]
    fn test_summary() {
        let outcome = BattleOutcome {
            winner: Corner::Red,
            loser: Corner::Blue,
            winner_power: 101.0,
            loser_power: 99.0,
            tie_broken: false,
        };
        let summary = outcome.summary();
        assert!(summary.contains("red corner wins"));
        assert!(summary.contains("101.0"));

        let tie = BattleOutcome {
            tie_broken: true,
            ..outcome
        };
        assert!(tie.summary().contains("dead heat"));
    }
}
