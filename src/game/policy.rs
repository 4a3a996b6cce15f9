//! The five policy levers supplied by the player each quarter.

use serde::{Deserialize, Serialize};

use crate::error::{SimError, SimResult};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyInput {
    /// Discretionary rate move (pp) on top of the rule adjustment.
    pub delta_i: f64,
    pub fiscal_impulse: f64,
    /// Primary deficit (% GDP, annualised).
    pub primary_deficit: f64,
    /// Capital-control intensity, conventionally in [0, 1]; not enforced.
    pub controls: f64,
    /// Bank bailout spending (% GDP).
    pub bailout: f64,
}

impl PolicyInput {
    /// All levers at zero.
    pub fn neutral() -> Self {
        Self { delta_i: 0.0, fiscal_impulse: 0.0, primary_deficit: 0.0, controls: 0.0, bailout: 0.0 }
    }

    /// Reject NaN and infinities; any finite value is accepted.
    pub fn validate(&self) -> SimResult<()> {
        let fields = [
            ("deltaI", self.delta_i),
            ("fiscalImpulse", self.fiscal_impulse),
            ("primaryDeficit", self.primary_deficit),
            ("controls", self.controls),
            ("bailout", self.bailout),
        ];
        match fields.into_iter().find(|(_, v)| !v.is_finite()) {
            Some((field, value)) => Err(SimError::NonFinitePolicy { field, value }),
            None => Ok(()),
        }
    }
}
