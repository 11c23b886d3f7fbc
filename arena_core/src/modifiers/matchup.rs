//! Matchup table - offensive type vs defensive type multipliers
//!
//! A fixed 6x6 table of design constants. Advantage is not guaranteed to
//! be reciprocal: a defense that blunts one offense can be wide open to
//! another.

use crate::types::{AttackType, DefenseType};

/// Multiplier applied to the attacker's power for an attack type against a
/// defense type. A missing type on either side is neutral (1.0).
pub fn matchup_multiplier(attack: Option<AttackType>, defense: Option<DefenseType>) -> f64 {
    match (attack, defense) {
        (Some(attack), Some(defense)) => table(attack, defense),
        _ => 1.0,
    }
}

fn table(attack: AttackType, defense: DefenseType) -> f64 {
    use AttackType::*;
    use DefenseType::*;

    match (attack, defense) {
        (Piercing, HardShell) => 1.5,
        (Piercing, SegmentedArmor) => 1.0,
        (Piercing, Evasive) => 0.7,
        (Piercing, HairySpiny) => 1.0,
        (Piercing, ToxicSkin) => 1.5,
        (Piercing, ThickHide) => 0.7,

        (Crushing, HardShell) => 1.5,
        (Crushing, SegmentedArmor) => 0.7,
        (Crushing, Evasive) => 1.0,
        (Crushing, HairySpiny) => 1.0,
        (Crushing, ToxicSkin) => 0.7,
        (Crushing, ThickHide) => 1.5,

        (Slashing, HardShell) => 0.7,
        (Slashing, SegmentedArmor) => 1.5,
        (Slashing, Evasive) => 1.5,
        (Slashing, HairySpiny) => 0.7,
        (Slashing, ToxicSkin) => 1.0,
        (Slashing, ThickHide) => 1.0,

        (Venom, HardShell) => 1.0,
        (Venom, SegmentedArmor) => 1.5,
        (Venom, Evasive) => 1.0,
        (Venom, HairySpiny) => 0.7,
        (Venom, ToxicSkin) => 0.7,
        (Venom, ThickHide) => 1.5,

        (Chemical, HardShell) => 1.0,
        (Chemical, SegmentedArmor) => 1.0,
        (Chemical, Evasive) => 1.5,
        (Chemical, HairySpiny) => 1.5,
        (Chemical, ToxicSkin) => 0.7,
        (Chemical, ThickHide) => 0.7,

        (Grappling, HardShell) => 0.7,
        (Grappling, SegmentedArmor) => 0.7,
        (Grappling, Evasive) => 1.5,
        (Grappling, HairySpiny) => 1.5,
        (Grappling, ToxicSkin) => 1.0,
        (Grappling, ThickHide) => 1.0,
    }
}
