/// Monetary-rule mechanics: the policy-rule rate and expectation anchoring.
use crate::params::ParameterSet;

use super::control::Band;

/// Anchoring speed never reaches 1; expectations always keep some inertia.
pub const ANCHORING: Band = Band::new(0.0, 0.95);

/// Policy-rule target rate from current inflation and output gap:
/// rNeutral + π + φπ(π − π*) + φy·y.
#[inline]
pub fn taylor_rate(p: &ParameterSet, pi: f64, y: f64) -> f64 {
    p.r_neutral + pi + p.phi_pi * (pi - p.pi_star) + p.phi_y * y
}

/// Credibility → anchoring speed λ = clamp(λ0 + λ1·c, 0, 0.95).
#[inline]
pub fn anchoring_speed(p: &ParameterSet, c: f64) -> f64 {
    ANCHORING.apply(p.lambda0 + p.lambda1 * c)
}
