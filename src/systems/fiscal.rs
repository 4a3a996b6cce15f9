//! Fiscal block: debt dynamics.

use crate::game::state::Indicators;
use crate::params::ParameterSet;

/// Potential nominal growth, cyclically adjusted by the current gap.
#[inline]
pub fn nominal_growth(p: &ParameterSet, y: f64) -> f64 {
    p.g_star + 0.6 * y
}

/// Next debt/GDP: b + q·(deficit + (i + s' − g)/100 · b) + bailout.
/// Bank bailouts land on the debt stock one-for-one. Unclamped.
#[inline]
pub fn debt(p: &ParameterSet, now: &Indicators, s_next: f64, primary_deficit: f64, bailout: f64) -> f64 {
    let g = nominal_growth(p, now.y);
    now.b + p.q * (primary_deficit + ((now.i + s_next - g) / 100.0) * now.b) + bailout
}
