//! Central-bank credibility.
//!
//! Credibility rises when the policy rate tracks the policy rule and when the
//! economy sits in the stability band; it falls with the inflation gap and
//! with deficit monetisation. All inputs are the values of the quarter that
//! just ended.

use crate::game::state::CREDIBILITY;
use crate::params::ParameterSet;

/// Deficit (% GDP) above which financing reads as monetisation.
pub const MONETIZE_THRESHOLD: f64 = 4.0;
pub const SUCCESS_BONUS: f64 = 0.18;
pub const BASELINE_DRIFT: f64 = 0.02;

#[derive(Clone, Copy, Debug)]
pub struct Inputs {
    pub c: f64,
    pub pi: f64,
    pub i: f64,
    pub i_taylor: f64,
    pub primary_deficit: f64,
    pub y: f64,
    pub bm: f64,
}

/// Reward for following the rule, in [0, 1].
#[inline]
pub fn consistency(p: &ParameterSet, i: f64, i_taylor: f64) -> f64 {
    (1.0 - (i - i_taylor).abs() / p.credibility_scale).clamp(0.0, 1.0)
}

/// Monetisation signal; the rate doubles under a negative real policy rate.
#[inline]
pub fn monetize(primary_deficit: f64, i: f64, pi: f64) -> f64 {
    let rate = if i < pi { 0.12 } else { 0.06 };
    (primary_deficit - MONETIZE_THRESHOLD).max(0.0) * rate
}

/// Inflation near target, output near potential, black market calm.
#[inline]
pub fn in_stability_band(p: &ParameterSet, pi: f64, y: f64, bm: f64) -> bool {
    (pi - p.pi_star).abs() < 2.0 && y.abs() < 1.0 && bm < 30.0
}

#[inline]
pub fn success(p: &ParameterSet, pi: f64, y: f64, bm: f64) -> f64 {
    if in_stability_band(p, pi, y, bm) { SUCCESS_BONUS } else { BASELINE_DRIFT }
}

pub fn update(p: &ParameterSet, x: Inputs) -> f64 {
    let next = x.c + 0.18 * consistency(p, x.i, x.i_taylor)
        - 0.05 * (x.pi - p.pi_star).abs()
        - 0.2 * monetize(x.primary_deficit, x.i, x.pi)
        + success(p, x.pi, x.y, x.bm);
    CREDIBILITY.apply(next)
}
