//! Narrative seam - turning an outcome into human-readable text
//!
//! The arena treats narration as a pluggable collaborator: anything that
//! can look at the two bugs and the resolved outcome and produce a string.

use crate::battle::BattleOutcome;
use crate::bug::Bug;
use crate::types::Corner;

/// Produces descriptive text for a resolved battle
pub trait Narrator {
    fn narrate(&self, red: &Bug, blue: &Bug, outcome: &BattleOutcome) -> String;
}

/// Minimal built-in narrator: names, powers, and a tie note
#[derive(Debug, Clone, Copy, Default)]
pub struct SummaryNarrator;

impl Narrator for SummaryNarrator {
    fn narrate(&self, red: &Bug, blue: &Bug, outcome: &BattleOutcome) -> String {
        let (winner, loser) = match outcome.winner {
            Corner::Red => (red, blue),
            Corner::Blue => (blue, red),
        };

        if outcome.tie_broken {
            format!(
                "{} and {} fight to a dead heat at {:.1} power; {} takes it on the judges' coin.",
                red.name, blue.name, outcome.winner_power, winner.name
            )
        } else {
            format!(
                "{} overpowers {}, {:.1} to {:.1}.",
                winner.name, loser.name, outcome.winner_power, outcome.loser_power
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bugs() -> (Bug, Bug) {
        (
            Bug::new("Mantis", 80.0, 40.0, 70.0).unwrap(),
            Bug::new("Beetle", 60.0, 90.0, 30.0).unwrap(),
        )
    }

    #[test]
    fn test_summary_narration() {
        let (red, blue) = bugs();
        let outcome = BattleOutcome {
            winner: Corner::Blue,
            loser: Corner::Red,
            winner_power: 320.1,
            loser_power: 191.5,
            tie_broken: false,
        };
        let text = SummaryNarrator.narrate(&red, &blue, &outcome);
        assert!(text.contains("Beetle overpowers Mantis"));
        assert!(text.contains("320.1"));
    }

    #[test]
    fn test_tie_narration() {
        let (red, blue) = bugs();
        let outcome = BattleOutcome {
            winner: Corner::Red,
            loser: Corner::Blue,
            winner_power: 100.0,
            loser_power: 100.0,
            tie_broken: true,
        };
        let text = SummaryNarrator.narrate(&red, &blue, &outcome);
        assert!(text.contains("dead heat"));
        assert!(text.contains("Mantis takes it"));
    }
}
