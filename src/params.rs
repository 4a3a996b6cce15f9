//! Model coefficients. Loaded once per run and never mutated; changing them
//! changes the model, not the state.

use serde::{Deserialize, Serialize};

use crate::error::SimResult;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ParameterSet {
    /// Inflation target (%).
    pub pi_star: f64,
    /// Natural real rate (%).
    pub r_star: f64,
    /// Output-gap persistence.
    pub rho_y: f64,
    /// Real-rate pass-through to the output gap.
    pub phi_r: f64,
    /// Fiscal-impulse multiplier.
    pub phi_f: f64,
    /// Weight of expectations in the Phillips curve.
    pub beta: f64,
    /// Output-gap slope of the Phillips curve.
    pub kappa: f64,
    /// Anchoring speed at zero credibility.
    pub lambda0: f64,
    /// Anchoring speed gained per unit of credibility.
    pub lambda1: f64,
    /// Expectation drift from the inflation gap when credibility is low.
    pub chi: f64,
    pub phi_pi: f64,
    pub phi_y: f64,
    /// Neutral real rate used by the policy rule.
    pub r_neutral: f64,
    /// Partial adjustment of the policy rate toward the rule.
    pub inertia: f64,
    /// Quarterly scaling of annualised debt flows.
    pub q: f64,
    /// Base risk premium.
    pub s0: f64,
    pub gamma_b: f64,
    pub gamma_c: f64,
    pub gamma_r: f64,
    /// Debt/GDP above which the premium rises.
    pub b_bar: f64,
    /// Reserve cover below which the premium rises.
    pub r_bar: f64,
    pub psi_pi: f64,
    pub psi_r: f64,
    pub psi_s: f64,
    /// Structural current-account balance.
    #[serde(rename = "baseCA")]
    pub base_ca: f64,
    /// Okun coefficient.
    pub okun: f64,
    /// Natural unemployment (%).
    pub u_star: f64,
    /// Potential nominal growth (%).
    pub g_star: f64,
    /// Rate gap (pp) at which rule-consistency reward reaches zero.
    pub credibility_scale: f64,
}

impl Default for ParameterSet {
    fn default() -> Self {
        Self {
            pi_star: 4.0,
            r_star: 1.0,
            rho_y: 0.6,
            phi_r: 0.4,
            phi_f: 0.5,
            beta: 0.7,
            kappa: 0.35,
            lambda0: 0.15,
            lambda1: 0.55,
            chi: 0.25,
            phi_pi: 1.4,
            phi_y: 0.4,
            r_neutral: 1.0,
            inertia: 0.25,
            q: 0.25,
            s0: 1.2,
            gamma_b: 0.12,
            gamma_c: 0.45,
            gamma_r: 0.3,
            b_bar: 70.0,
            r_bar: 6.0,
            psi_pi: 0.25,
            psi_r: 0.2,
            psi_s: 0.35,
            base_ca: 0.4,
            okun: 0.5,
            u_star: 7.0,
            g_star: 2.0,
            credibility_scale: 8.0,
        }
    }
}

impl ParameterSet {
    /// Overlay a (possibly partial) JSON object on the reference calibration.
    /// Values are not range-checked; odd values make an odd model.
    pub fn from_json(json: &str) -> SimResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
