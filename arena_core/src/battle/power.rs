//! Battle power - a bug's single-number strength for one battle
//!
//! Formula:
//! - base = attack*2.0 + defense*1.5 + speed*1.2
//! - scaled by the type matchup against the opponent's defense
//! - scaled by the size modifier against the opponent's size
//! - scaled by a fresh luck draw in [0.9, 1.1] (crits, footing, luck)

use super::constants::{NOISE_MAX, NOISE_MIN};
use crate::bug::Bug;
use crate::modifiers::{matchup_multiplier, size_multipliers};
use rand::Rng;

/// Calculate a bug's battle power against an opponent
///
/// Non-deterministic: takes a fresh luck draw from the thread RNG on every
/// call. Power is never negative for valid bugs.
pub fn calculate_battle_power(bug: &Bug, opponent: &Bug) -> f64 {
    let mut rng = rand::thread_rng();
    calculate_battle_power_with_rng(bug, opponent, &mut rng)
}

/// Calculate battle power with a provided RNG (for deterministic testing)
pub fn calculate_battle_power_with_rng(bug: &Bug, opponent: &Bug, rng: &mut impl Rng) -> f64 {
    let base = bug.base_power();

    let matchup = matchup_multiplier(bug.attack_type, opponent.defense_type);

    // The resolver computes the pair for both corners; this bug's own
    // component is the first element.
    let (size, _) = size_multipliers(bug.size, opponent.size, bug.attack_type, opponent.attack_type);

    let noise = rng.gen_range(NOISE_MIN..=NOISE_MAX);

    base * matchup * size * noise
}
