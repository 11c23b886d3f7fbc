//! Core types specific to the bug arena

use serde::{Deserialize, Serialize};
use std::fmt;

/// Offensive combat type of a bug's primary attack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttackType {
    Piercing,
    Crushing,
    Slashing,
    Venom,
    Chemical,
    Grappling,
}

impl AttackType {
    /// Get all attack types
    pub fn all() -> &'static [AttackType] {
        &[
            AttackType::Piercing,
            AttackType::Crushing,
            AttackType::Slashing,
            AttackType::Venom,
            AttackType::Chemical,
            AttackType::Grappling,
        ]
    }

    /// Parse from user/storage text. Case-insensitive; unknown text is
    /// `None`, which downstream code treats as neutral.
    pub fn parse(s: &str) -> Option<AttackType> {
        match s.trim().to_lowercase().as_str() {
            "piercing" => Some(AttackType::Piercing),
            "crushing" => Some(AttackType::Crushing),
            "slashing" => Some(AttackType::Slashing),
            "venom" => Some(AttackType::Venom),
            "chemical" => Some(AttackType::Chemical),
            "grappling" => Some(AttackType::Grappling),
            _ => None,
        }
    }

    /// Whether this attack bypasses size entirely (venom and chemical
    /// attacks work the same against any opponent size).
    pub fn ignores_size(self) -> bool {
        matches!(self, AttackType::Venom | AttackType::Chemical)
    }

    /// Display label in storage form
    pub fn label(self) -> &'static str {
        match self {
            AttackType::Piercing => "piercing",
            AttackType::Crushing => "crushing",
            AttackType::Slashing => "slashing",
            AttackType::Venom => "venom",
            AttackType::Chemical => "chemical",
            AttackType::Grappling => "grappling",
        }
    }
}

impl fmt::Display for AttackType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Defensive combat type of a bug's body plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DefenseType {
    HardShell,
    SegmentedArmor,
    Evasive,
    HairySpiny,
    ToxicSkin,
    ThickHide,
}

impl DefenseType {
    /// Get all defense types
    pub fn all() -> &'static [DefenseType] {
        &[
            DefenseType::HardShell,
            DefenseType::SegmentedArmor,
            DefenseType::Evasive,
            DefenseType::HairySpiny,
            DefenseType::ToxicSkin,
            DefenseType::ThickHide,
        ]
    }

    /// Parse from user/storage text. Case-insensitive; unknown text is
    /// `None`.
    pub fn parse(s: &str) -> Option<DefenseType> {
        match s.trim().to_lowercase().as_str() {
            "hard_shell" => Some(DefenseType::HardShell),
            "segmented_armor" => Some(DefenseType::SegmentedArmor),
            "evasive" => Some(DefenseType::Evasive),
            "hairy_spiny" => Some(DefenseType::HairySpiny),
            "toxic_skin" => Some(DefenseType::ToxicSkin),
            "thick_hide" => Some(DefenseType::ThickHide),
            _ => None,
        }
    }

    /// Display label in storage form
    pub fn label(self) -> &'static str {
        match self {
            DefenseType::HardShell => "hard_shell",
            DefenseType::SegmentedArmor => "segmented_armor",
            DefenseType::Evasive => "evasive",
            DefenseType::HairySpiny => "hairy_spiny",
            DefenseType::ToxicSkin => "toxic_skin",
            DefenseType::ThickHide => "thick_hide",
        }
    }
}

impl fmt::Display for DefenseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Size class of a bug. The ordering is total: tiny < small < medium <
/// large < massive.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum SizeClass {
    Tiny,
    Small,
    Medium,
    Large,
    Massive,
}

impl SizeClass {
    /// Get all size classes in ascending order
    pub fn all() -> &'static [SizeClass] {
        &[
            SizeClass::Tiny,
            SizeClass::Small,
            SizeClass::Medium,
            SizeClass::Large,
            SizeClass::Massive,
        ]
    }

    /// Parse from user/storage text. Case-insensitive; unknown text is
    /// `None`.
    pub fn parse(s: &str) -> Option<SizeClass> {
        match s.trim().to_lowercase().as_str() {
            "tiny" => Some(SizeClass::Tiny),
            "small" => Some(SizeClass::Small),
            "medium" => Some(SizeClass::Medium),
            "large" => Some(SizeClass::Large),
            "massive" => Some(SizeClass::Massive),
            _ => None,
        }
    }

    /// Position in the size order (tiny = 0 .. massive = 4)
    pub fn rank(self) -> i32 {
        self as i32
    }

    /// Display label in storage form
    pub fn label(self) -> &'static str {
        match self {
            SizeClass::Tiny => "tiny",
            SizeClass::Small => "small",
            SizeClass::Medium => "medium",
            SizeClass::Large => "large",
            SizeClass::Massive => "massive",
        }
    }
}

impl fmt::Display for SizeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Which side of a battle a bug fought from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Corner {
    Red,
    Blue,
}

impl Corner {
    /// The opposing corner
    pub fn opponent(self) -> Corner {
        match self {
            Corner::Red => Corner::Blue,
            Corner::Blue => Corner::Red,
        }
    }
}

impl fmt::Display for Corner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Corner::Red => f.write_str("red corner"),
            Corner::Blue => f.write_str("blue corner"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(AttackType::parse("Piercing"), Some(AttackType::Piercing));
        assert_eq!(AttackType::parse("  VENOM "), Some(AttackType::Venom));
        assert_eq!(
            DefenseType::parse("Hard_Shell"),
            Some(DefenseType::HardShell)
        );
        assert_eq!(SizeClass::parse("MASSIVE"), Some(SizeClass::Massive));
    }

    #[test]
    fn test_parse_unknown_is_none() {
        assert_eq!(AttackType::parse("psychic"), None);
        assert_eq!(AttackType::parse(""), None);
        assert_eq!(DefenseType::parse("hard shell"), None);
        assert_eq!(SizeClass::parse("colossal"), None);
    }

    #[test]
    fn test_size_order() {
        assert!(SizeClass::Tiny < SizeClass::Small);
        assert!(SizeClass::Small < SizeClass::Medium);
        assert!(SizeClass::Medium < SizeClass::Large);
        assert!(SizeClass::Large < SizeClass::Massive);
        assert_eq!(SizeClass::Tiny.rank(), 0);
        assert_eq!(SizeClass::Massive.rank(), 4);
    }

    #[test]
    fn test_size_agnostic_attacks() {
        assert!(AttackType::Venom.ignores_size());
        assert!(AttackType::Chemical.ignores_size());
        assert!(!AttackType::Crushing.ignores_size());
        assert!(!AttackType::Grappling.ignores_size());
        assert!(!AttackType::Piercing.ignores_size());
        assert!(!AttackType::Slashing.ignores_size());
    }

    #[test]
    fn test_labels_round_trip() {
        for attack in AttackType::all() {
            assert_eq!(AttackType::parse(attack.label()), Some(*attack));
        }
        for defense in DefenseType::all() {
            assert_eq!(DefenseType::parse(defense.label()), Some(*defense));
        }
        for size in SizeClass::all() {
            assert_eq!(SizeClass::parse(size.label()), Some(*size));
        }
    }

    #[test]
    fn test_corner_opponent() {
        assert_eq!(Corner::Red.opponent(), Corner::Blue);
        assert_eq!(Corner::Blue.opponent(), Corner::Red);
    }
}
