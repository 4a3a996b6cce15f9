//! Political approval: up with the output gap; down with the inflation gap,
//! unemployment above its natural rate and black-market pressure.

use crate::game::state::{APPROVAL, Indicators};
use crate::params::ParameterSet;

/// Quarterly change before clamping.
#[inline]
pub fn change(p: &ParameterSet, now: &Indicators) -> f64 {
    0.3 * now.y - 0.18 * (now.pi - p.pi_star).abs() - 0.4 * (now.u - p.u_star) - 0.05 * now.bm
}

#[inline]
pub fn update(p: &ParameterSet, now: &Indicators) -> f64 {
    APPROVAL.apply(now.approval + change(p, now))
}
