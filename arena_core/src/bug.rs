//! Bug - the competitor record the engine reads

use crate::types::{AttackType, DefenseType, SizeClass};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error raised when constructing a bug with invalid stats
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BugError {
    #[error("stat '{0}' must be non-negative, got {1}")]
    NegativeStat(&'static str, f64),
    #[error("stat '{0}' must be finite")]
    NonFiniteStat(&'static str),
    #[error("bug name must not be empty")]
    EmptyName,
}

/// A competitor in the arena.
///
/// The engine treats bugs as read-only input: resolving a battle never
/// mutates either side. Type and size fields are optional; a bug with no
/// recognized attack type simply fights without matchup or size leverage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bug {
    pub name: String,
    pub species: String,
    pub attack: f64,
    pub defense: f64,
    pub speed: f64,
    pub attack_type: Option<AttackType>,
    pub defense_type: Option<DefenseType>,
    pub size: Option<SizeClass>,
}

impl Bug {
    /// Create a bug with the given combat stats and no type/size traits.
    ///
    /// Stats are validated here, at creation time; the battle engine
    /// assumes they are non-negative and does not re-check.
    pub fn new(
        name: impl Into<String>,
        attack: f64,
        defense: f64,
        speed: f64,
    ) -> Result<Bug, BugError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(BugError::EmptyName);
        }
        for (label, value) in [("attack", attack), ("defense", defense), ("speed", speed)] {
            if !value.is_finite() {
                return Err(BugError::NonFiniteStat(label));
            }
            if value < 0.0 {
                return Err(BugError::NegativeStat(label, value));
            }
        }

        Ok(Bug {
            name,
            species: String::new(),
            attack,
            defense,
            speed,
            attack_type: None,
            defense_type: None,
            size: None,
        })
    }

    /// Set the species label
    pub fn with_species(mut self, species: impl Into<String>) -> Bug {
        self.species = species.into();
        self
    }

    /// Set the offensive type
    pub fn with_attack_type(mut self, attack_type: AttackType) -> Bug {
        self.attack_type = Some(attack_type);
        self
    }

    /// Set the defensive type
    pub fn with_defense_type(mut self, defense_type: DefenseType) -> Bug {
        self.defense_type = Some(defense_type);
        self
    }

    /// Set the size class
    pub fn with_size(mut self, size: SizeClass) -> Bug {
        self.size = Some(size);
        self
    }

    /// Weighted stat aggregate before matchup/size/noise multipliers.
    ///
    /// Attack is weighted heaviest (offense wins fights), defense next
    /// (protection matters), speed least (going first helps).
    pub fn base_power(&self) -> f64 {
        use crate::battle::constants::{ATTACK_WEIGHT, DEFENSE_WEIGHT, SPEED_WEIGHT};
        self.attack * ATTACK_WEIGHT + self.defense * DEFENSE_WEIGHT + self.speed * SPEED_WEIGHT
    }

    /// Unweighted stat total, used for roster display
    pub fn power_level(&self) -> f64 {
        self.attack + self.defense + self.speed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_bug_has_neutral_traits() {
        let bug = Bug::new("Clacker", 50.0, 40.0, 30.0).unwrap();
        assert_eq!(bug.attack_type, None);
        assert_eq!(bug.defense_type, None);
        assert_eq!(bug.size, None);
    }

    #[test]
    fn test_negative_stat_rejected() {
        let err = Bug::new("Clacker", -1.0, 40.0, 30.0).unwrap_err();
        assert_eq!(err, BugError::NegativeStat("attack", -1.0));
    }

    #[test]
    fn test_non_finite_stat_rejected() {
        assert_eq!(
            Bug::new("Clacker", 50.0, f64::NAN, 30.0).unwrap_err(),
            BugError::NonFiniteStat("defense")
        );
        assert_eq!(
            Bug::new("Clacker", 50.0, 40.0, f64::INFINITY).unwrap_err(),
            BugError::NonFiniteStat("speed")
        );
    }

    #[test]
    fn test_empty_name_rejected() {
        assert_eq!(Bug::new("  ", 1.0, 1.0, 1.0).unwrap_err(), BugError::EmptyName);
    }

    #[test]
    fn test_base_power_weights() {
        // 10*2.0 + 10*1.5 + 10*1.2 = 47
        let bug = Bug::new("Neutral", 10.0, 10.0, 10.0).unwrap();
        assert!((bug.base_power() - 47.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_power_level_is_unweighted() {
        let bug = Bug::new("Clacker", 50.0, 40.0, 30.0).unwrap();
        assert!((bug.power_level() - 120.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_builder_traits() {
        let bug = Bug::new("Pincer", 60.0, 55.0, 20.0)
            .unwrap()
            .with_species("Lucanus cervus")
            .with_attack_type(crate::types::AttackType::Crushing)
            .with_defense_type(crate::types::DefenseType::HardShell)
            .with_size(crate::types::SizeClass::Large);
        assert_eq!(bug.species, "Lucanus cervus");
        assert_eq!(bug.attack_type, Some(crate::types::AttackType::Crushing));
        assert_eq!(bug.defense_type, Some(crate::types::DefenseType::HardShell));
        assert_eq!(bug.size, Some(crate::types::SizeClass::Large));
    }
}
