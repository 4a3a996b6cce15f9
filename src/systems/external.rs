//! External block: risk premium, depreciation pressure, black market,
//! balance of payments and reserves.

use crate::game::state::{BLACK_MARKET, Indicators, RESERVES};
use crate::mechanics::control::{Band, relu};
use crate::params::ParameterSet;

/// Capital outflow is bounded (% of reserves-equivalent per quarter).
pub const OUTFLOW: Band = Band::new(0.0, 18.0);

/// Inflation above this feeds the black market directly.
pub const HYPERINFLATION_FLOOR: f64 = 30.0;

/// Next risk premium: base, plus rectified debt excess over `bBar`, plus a
/// low-credibility charge, plus rectified reserve shortfall under `rBar`.
#[inline]
pub fn risk_premium(p: &ParameterSet, now: &Indicators) -> f64 {
    p.s0 + p.gamma_b * relu(now.b - p.b_bar)
        + p.gamma_c * (1.0 - now.c) * 10.0
        + p.gamma_r * relu(p.r_bar - now.reserves) * 8.0
}

/// Depreciation pressure (not persisted).
#[inline]
pub fn depreciation(p: &ParameterSet, now: &Indicators, s_next: f64, shock: f64) -> f64 {
    let real_rate = now.i - now.pi_e;
    p.psi_pi * (now.pi - p.pi_star) - p.psi_r * real_rate + p.psi_s * s_next + shock
}

/// Black-market pressure. Capital controls push it *up*.
#[inline]
pub fn black_market(now: &Indicators, deprec: f64, controls: f64) -> f64 {
    let controls_side_effect = controls * 0.9;
    BLACK_MARKET.apply(
        0.6 * deprec + 10.0 * controls_side_effect + 0.4 * relu(now.pi - HYPERINFLATION_FLOOR),
    )
}

/// Current account: a recession and a weaker currency both help.
#[inline]
pub fn current_account(p: &ParameterSet, now: &Indicators, deprec: f64) -> f64 {
    p.base_ca + 0.04 * -now.y + 0.02 * deprec
}

/// Capital outflow, damped by capital controls.
#[inline]
pub fn outflow(now: &Indicators, s_next: f64, controls: f64) -> f64 {
    OUTFLOW.apply(0.08 * s_next + 6.0 * (1.0 - now.c) - 2.4 * controls)
}

#[inline]
pub fn reserves(now: &Indicators, ca: f64, outflow: f64) -> f64 {
    RESERVES.apply(now.reserves + 0.5 * ca - 0.25 * outflow)
}
