//! Weighted random choice and next-step selection.

use am_core::{Move, Pos};
use rand::Rng;

use crate::{CellField, WeightFn};

/// Probability of ignoring weights and picking uniformly among candidates.
pub const EXPLORATION_PROBABILITY: f64 = 0.01;

/// Pick one of `choices` with probability proportional to `weights`.
///
/// - With probability [`EXPLORATION_PROBABILITY`] the weights are ignored and
///   the pick is uniform.
/// - Otherwise a draw in `[0, total)` is decremented by each weight in turn;
///   the first choice that takes it below zero wins.
/// - If the scan never goes negative (total weight zero) the pick is uniform.
///   An infinite weight also lands here: `inf - inf` is NaN, so the scan
///   falls through and the overflowing candidate gets no preference.
///
/// Returns `None` only for an empty `choices`.
///
/// # Panics
/// Panics if `weights` is shorter than `choices`.
pub fn choose_weighted<'a, T, R>(choices: &'a [T], weights: &[f64], rng: &mut R) -> Option<&'a T>
where
    R: Rng + ?Sized,
{
    if choices.is_empty() {
        return None;
    }
    if rng.r#gen::<f64>() < EXPLORATION_PROBABILITY {
        return Some(&choices[rng.gen_range(0..choices.len())]);
    }

    let weights = &weights[..choices.len()];
    let total: f64 = weights.iter().sum();
    let mut pick = total * rng.r#gen::<f64>();
    for (choice, &w) in choices.iter().zip(weights) {
        pick -= w;
        if pick < 0.0 {
            return Some(choice);
        }
    }
    Some(&choices[rng.gen_range(0..choices.len())])
}

/// Choose the next move for an agent standing at `pos`.
///
/// Candidates are [`Move::ALL`] minus any landing out of bounds or on a
/// wall.  Each candidate is weighted by `weight` applied to its landing
/// cell, except the exact reverse of `last` which is weighted zero.  A
/// `last` of [`Move::STAY`] suppresses nothing; pass [`Move::UNREACHABLE`]
/// to disable suppression entirely.
///
/// `pos` itself must be valid, so `Move::STAY` always survives and a move
/// is always returned.
pub fn pick_next<R>(field: &CellField, pos: Pos, weight: WeightFn, last: Move, rng: &mut R) -> Move
where
    R: Rng + ?Sized,
{
    let mut moves   = [Move::STAY; 5];
    let mut weights = [0.0f64; 5];
    let mut n = 0;

    for m in Move::ALL {
        let Some(dest) = field.step(pos, m) else {
            continue;
        };
        moves[n] = m;
        weights[n] = if m.is_reverse_of(last) { 0.0 } else { weight(field.cell(dest)) };
        n += 1;
    }

    choose_weighted(&moves[..n], &weights[..n], rng)
        .copied()
        .unwrap_or(Move::STAY)
}
