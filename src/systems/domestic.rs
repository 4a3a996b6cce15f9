//! Domestic block: IS curve, Phillips curve, expectations and Okun's law.

use crate::game::state::{Indicators, UNEMPLOYMENT};
use crate::mechanics::{control, rules};
use crate::params::ParameterSet;

/// Next output gap: persistence, minus the real-rate gap, plus fiscal impulse
/// and the demand shock. Uses the *current* policy rate.
#[inline]
pub fn output_gap(p: &ParameterSet, now: &Indicators, fiscal_impulse: f64, shock: f64) -> f64 {
    p.rho_y * now.y - p.phi_r * ((now.i - now.pi_e) - p.r_star) + p.phi_f * fiscal_impulse + shock
}

/// Next inflation: expectations plus the output gap, plus the supply shock.
#[inline]
pub fn inflation(p: &ParameterSet, now: &Indicators, shock: f64) -> f64 {
    p.beta * now.pi_e + p.kappa * now.y + shock
}

/// Next expectations: credibility-weighted pull toward the target, plus a
/// drift from the current inflation gap that fades as credibility rises.
#[inline]
pub fn expectations(p: &ParameterSet, now: &Indicators) -> f64 {
    let lambda = rules::anchoring_speed(p, now.c);
    control::blend(now.pi_e, p.pi_star, lambda) + p.chi * (1.0 - now.c) * (now.pi - p.pi_star)
}

/// Okun's law on the *next* output gap.
#[inline]
pub fn unemployment(p: &ParameterSet, y_next: f64) -> f64 {
    UNEMPLOYMENT.apply(p.u_star - p.okun * y_next)
}
