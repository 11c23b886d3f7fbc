//! Size modifier resolver - leverage from relative size class
//!
//! Lookup order:
//! - explicit pair table first, in both directions
//! - a direction missing from the table is derived as the reciprocal of
//!   the other, when the other exists
//! - otherwise a step function over the rank difference
//!
//! The explicit table is not reciprocal (massive over tiny is 1.5 while
//! tiny under massive is 0.7); the two directions are tuned
//! independently and must stay that way.

use super::round3;
use crate::types::{AttackType, SizeClass};

/// Resolve the pair of size multipliers for bug A attacking bug B and
/// vice versa.
///
/// Missing sizes are neutral. Venom and chemical attackers ignore size:
/// if both attacks are size-agnostic no size math happens at all, and a
/// single size-agnostic attacker has its own multiplier forced back to
/// 1.0 while its opponent still takes the size penalty or bonus.
pub fn size_multipliers(
    size_a: Option<SizeClass>,
    size_b: Option<SizeClass>,
    attack_a: Option<AttackType>,
    attack_b: Option<AttackType>,
) -> (f64, f64) {
    let (a, b) = match (size_a, size_b) {
        (Some(a), Some(b)) => (a, b),
        _ => return (1.0, 1.0),
    };

    let a_ignores_size = attack_a.map_or(false, AttackType::ignores_size);
    let b_ignores_size = attack_b.map_or(false, AttackType::ignores_size);
    if a_ignores_size && b_ignores_size {
        return (1.0, 1.0);
    }

    let diff = a.rank() - b.rank();

    let explicit_a = explicit_modifier(a, b);
    let explicit_b = explicit_modifier(b, a);

    let (mut mult_a, mut mult_b) = if explicit_a.is_some() || explicit_b.is_some() {
        let mult_a = explicit_a
            .or_else(|| explicit_b.map(|m| 1.0 / m))
            .unwrap_or_else(|| default_for_diff(diff));
        let mult_b = explicit_b
            .or_else(|| explicit_a.map(|m| 1.0 / m))
            .unwrap_or_else(|| default_for_diff(-diff));
        (mult_a, mult_b)
    } else {
        (default_for_diff(diff), default_for_diff(-diff))
    };

    if a_ignores_size {
        mult_a = 1.0;
    }
    if b_ignores_size {
        mult_b = 1.0;
    }

    (round3(mult_a), round3(mult_b))
}

/// Hand-tuned modifier for the attacker's size against the defender's,
/// where one exists.
fn explicit_modifier(attacker: SizeClass, defender: SizeClass) -> Option<f64> {
    use SizeClass::*;

    let modifier = match (attacker, defender) {
        (Massive, Tiny) => 1.5,
        (Massive, Small) => 1.3,
        (Massive, Medium) => 1.15,
        (Large, Tiny) => 1.4,
        (Large, Small) => 1.25,
        (Large, Medium) => 1.1,
        (Medium, Tiny) => 1.3,
        (Medium, Small) => 1.15,
        (Small, Tiny) => 1.2,
        (Tiny, Massive) => 0.7,
        (Tiny, Large) => 0.75,
        (Tiny, Medium) => 0.8,
        (Small, Massive) => 0.75,
        (Small, Large) => 0.8,
        (Small, Medium) => 0.85,
        (Medium, Large) => 0.9,
        (Medium, Massive) => 0.85,
        (Large, Massive) => 0.9,
        _ => return None,
    };
    Some(modifier)
}

/// Step-function fallback over the rank difference, used when neither
/// direction has an explicit entry.
fn default_for_diff(diff: i32) -> f64 {
    match diff {
        0 => 1.0,
        1 => 1.15,
        2 => 1.30,
        d if d >= 3 => 1.40,
        -1 => 1.0 / 1.15,
        -2 => 1.0 / 1.30,
        _ => 1.0 / 1.40,
    }
}
