//! Economic state and the commit step that keeps it inside its bands.

use serde::{Deserialize, Serialize};

use crate::mechanics::control::Band;

pub const INFLATION: Band = Band::new(0.0, 80.0);
pub const EXPECTATIONS: Band = Band::new(0.0, 80.0);
pub const POLICY_RATE: Band = Band::new(-2.0, 45.0);
pub const CREDIBILITY: Band = Band::new(0.05, 0.98);
pub const DEBT: Band = Band::new(20.0, 140.0);
pub const RESERVES: Band = Band::new(0.0, 12.0);
pub const RISK_PREMIUM: Band = Band::new(0.0, 12.0);
pub const BLACK_MARKET: Band = Band::new(0.0, 100.0);
pub const UNEMPLOYMENT: Band = Band::new(3.0, 25.0);
pub const APPROVAL: Band = Band::new(15.0, 95.0);

/// The eleven macro variables of one quarter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Indicators {
    /// Output gap (%). Unbounded.
    pub y: f64,
    /// Inflation (%).
    pub pi: f64,
    /// Inflation expectations (%).
    #[serde(rename = "piE")]
    pub pi_e: f64,
    /// Nominal policy rate (%).
    pub i: f64,
    /// Central-bank credibility.
    pub c: f64,
    /// Debt/GDP (%).
    pub b: f64,
    /// FX reserves (months of import cover).
    #[serde(rename = "R")]
    pub reserves: f64,
    /// Sovereign risk premium (%).
    pub s: f64,
    /// Black-market pressure index.
    #[serde(rename = "BM")]
    pub bm: f64,
    /// Unemployment (%).
    pub u: f64,
    /// Government approval (%).
    #[serde(rename = "A")]
    pub approval: f64,
}

impl Indicators {
    /// Every bounded field clamped into its band; `y` is left as is.
    pub fn clamped(&self) -> Self {
        Self {
            y: self.y,
            pi: INFLATION.apply(self.pi),
            pi_e: EXPECTATIONS.apply(self.pi_e),
            i: POLICY_RATE.apply(self.i),
            c: CREDIBILITY.apply(self.c),
            b: DEBT.apply(self.b),
            reserves: RESERVES.apply(self.reserves),
            s: RISK_PREMIUM.apply(self.s),
            bm: BLACK_MARKET.apply(self.bm),
            u: UNEMPLOYMENT.apply(self.u),
            approval: APPROVAL.apply(self.approval),
        }
    }

    pub fn within_bands(&self) -> bool {
        self.y.is_finite()
            && INFLATION.contains(self.pi)
            && EXPECTATIONS.contains(self.pi_e)
            && POLICY_RATE.contains(self.i)
            && CREDIBILITY.contains(self.c)
            && DEBT.contains(self.b)
            && RESERVES.contains(self.reserves)
            && RISK_PREMIUM.contains(self.s)
            && BLACK_MARKET.contains(self.bm)
            && UNEMPLOYMENT.contains(self.u)
            && APPROVAL.contains(self.approval)
    }
}

/// Committed state: the quarter number plus its indicators.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EconomicState {
    pub turn: u32,
    #[serde(flatten)]
    pub vars: Indicators,
}

impl EconomicState {
    /// Quarter one of a scenario, clamped like any committed quarter.
    pub fn seed(initial: &Indicators) -> Self {
        Self { turn: 1, vars: initial.clamped() }
    }

    /// Clamp a candidate and advance the quarter counter.
    pub fn commit(&self, candidate: &Candidate) -> Self {
        Self { turn: self.turn + 1, vars: candidate.vars.clamped() }
    }
}

/// Raw step output before commit. `pi`, `pi_e`, `b` and `s` may sit outside
/// their bands here.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Candidate {
    pub vars: Indicators,
    /// Policy-rule rate of the quarter just ended.
    pub i_taylor: f64,
    /// Depreciation pressure (intermediate).
    pub depreciation: f64,
    pub current_account: f64,
    pub outflow: f64,
}
