//! Roster configuration loading

use super::ConfigError;
use crate::bug::Bug;
use crate::types::{AttackType, DefenseType, SizeClass};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One bug as written in a roster file.
///
/// Type and size are plain strings so hand-edited files never hard-fail
/// on spelling: anything unrecognized simply fights as typeless, matching
/// the engine's neutral fallback.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BugConfig {
    pub name: String,
    #[serde(default)]
    pub species: String,
    pub attack: f64,
    pub defense: f64,
    pub speed: f64,
    #[serde(default)]
    pub attack_type: Option<String>,
    #[serde(default)]
    pub defense_type: Option<String>,
    #[serde(default)]
    pub size: Option<String>,
}

impl BugConfig {
    /// Validate into an engine bug. Stat problems are errors; unknown
    /// type/size strings degrade to `None`.
    pub fn into_bug(self) -> Result<Bug, ConfigError> {
        let mut bug = Bug::new(self.name, self.attack, self.defense, self.speed)
            .map_err(|e| ConfigError::ValidationError(e.to_string()))?
            .with_species(self.species);
        bug.attack_type = self.attack_type.as_deref().and_then(AttackType::parse);
        bug.defense_type = self.defense_type.as_deref().and_then(DefenseType::parse);
        bug.size = self.size.as_deref().and_then(SizeClass::parse);
        Ok(bug)
    }
}

/// Container for roster configurations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterConfig {
    #[serde(rename = "bugs")]
    pub bugs: Vec<BugConfig>,
}

impl RosterConfig {
    /// Validate every entry into engine bugs
    pub fn into_bugs(self) -> Result<Vec<Bug>, ConfigError> {
        self.bugs.into_iter().map(BugConfig::into_bug).collect()
    }
}

/// Load a roster from a TOML file
pub fn load_roster_config(path: &Path) -> Result<Vec<Bug>, ConfigError> {
    let config: RosterConfig = super::load_toml(path)?;
    config.into_bugs()
}

/// Load a roster from a TOML string
pub fn parse_roster_config(content: &str) -> Result<Vec<Bug>, ConfigError> {
    let config: RosterConfig = super::parse_toml(content)?;
    config.into_bugs()
}

/// Get the built-in roster
pub fn default_roster() -> Vec<Bug> {
    let toml = include_str!("../../config/roster.toml");
    parse_roster_config(toml).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_roster() {
        let toml = r#"
[[bugs]]
name = "Thorn"
species = "Extatosoma tiaratum"
attack = 35
defense = 60
speed = 25
attack_type = "grappling"
defense_type = "hairy_spiny"
size = "large"

[[bugs]]
name = "Dot"
attack = 10
defense = 10
speed = 40
"#;
        let bugs = parse_roster_config(toml).unwrap();
        assert_eq!(bugs.len(), 2);

        let thorn = &bugs[0];
        assert_eq!(thorn.species, "Extatosoma tiaratum");
        assert_eq!(thorn.attack_type, Some(AttackType::Grappling));
        assert_eq!(thorn.defense_type, Some(DefenseType::HairySpiny));
        assert_eq!(thorn.size, Some(SizeClass::Large));

        let dot = &bugs[1];
        assert_eq!(dot.attack_type, None);
        assert_eq!(dot.size, None);
    }

    #[test]
    fn test_unknown_type_degrades_to_none() {
        let toml = r#"
[[bugs]]
name = "Mystery"
attack = 20
defense = 20
speed = 20
attack_type = "Sonic"
defense_type = "HARD_SHELL"
size = "gargantuan"
"#;
        let bugs = parse_roster_config(toml).unwrap();
        let mystery = &bugs[0];
        assert_eq!(mystery.attack_type, None);
        // Case differences still parse; only unknown words drop out.
        assert_eq!(mystery.defense_type, Some(DefenseType::HardShell));
        assert_eq!(mystery.size, None);
    }

    #[test]
    fn test_negative_stat_is_validation_error() {
        let toml = r#"
[[bugs]]
name = "Broken"
attack = -5
defense = 10
speed = 10
"#;
        let err = parse_roster_config(toml).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn test_default_roster_loads() {
        let bugs = default_roster();
        assert!(bugs.len() >= 6, "expected a playable default roster");

        // Every default bug is fully specified.
        for bug in &bugs {
            assert!(bug.attack_type.is_some(), "{} missing attack type", bug.name);
            assert!(bug.defense_type.is_some(), "{} missing defense type", bug.name);
            assert!(bug.size.is_some(), "{} missing size", bug.name);
        }
    }
}
