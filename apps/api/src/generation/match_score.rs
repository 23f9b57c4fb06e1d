//! Match score: a bounded, position-weighted random proxy for fit.
//!
//! There is no real matching here. Scores are drawn from a fixed band and
//! nudged so earlier candidates in a batch trend toward the top of it.

use rand::{Rng, RngCore};

pub const MIN_SCORE: u8 = 78;
pub const MAX_SCORE: u8 = 95;

/// Divisor stretch for the position factor. Tunable; larger values flatten
/// the position effect.
const POSITION_STRETCH: f64 = 1.5;

/// `1 - index / (count * 1.5)`, in `(1/3, 1]` for valid indices.
pub fn position_factor(index: usize, count: usize) -> f64 {
    if count == 0 {
        return 1.0;
    }
    1.0 - index as f64 / (count as f64 * POSITION_STRETCH)
}

/// Uniform draw over the full band.
pub fn base_score(rng: &mut dyn RngCore) -> u8 {
    rng.gen_range(MIN_SCORE..=MAX_SCORE)
}

/// Blends the base score toward the band floor as the position factor drops,
/// then clamps back into the band.
pub fn weighted_score(base: u8, factor: f64) -> u8 {
    let base = base as f64;
    let blended = base * factor + MIN_SCORE as f64 * (1.0 - factor);
    (blended.round() as i64).clamp(MIN_SCORE as i64, MAX_SCORE as i64) as u8
}

pub fn score_for_position(index: usize, count: usize, rng: &mut dyn RngCore) -> u8 {
    weighted_score(base_score(rng), position_factor(index, count))
}

/// Where a score sits inside the band, in `[0, 1]`.
pub fn band_fraction(score: u8) -> f64 {
    let span = (MAX_SCORE - MIN_SCORE) as f64;
    ((score.clamp(MIN_SCORE, MAX_SCORE) - MIN_SCORE) as f64 / span).clamp(0.0, 1.0)
}
