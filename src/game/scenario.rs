//! Named starting conditions.

use serde::{Deserialize, Serialize};

use super::state::Indicators;
use crate::error::{SimError, SimResult};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub initial: Indicators,
}

impl Scenario {
    /// Load a custom scenario, e.g. `{"id": "..", "title": "..", "initial": {..}}`.
    pub fn from_json(json: &str) -> SimResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

pub fn baseline() -> Scenario {
    Scenario {
        id: "baseline".into(),
        title: "Default crisis: soft-landing trial".into(),
        description: "Inflation is high but reserves are adequate; credibility is in a repair window."
            .into(),
        initial: Indicators {
            y: -2.0,
            pi: 16.0,
            pi_e: 13.0,
            i: 9.0,
            c: 0.55,
            b: 65.0,
            reserves: 6.0,
            s: 2.4,
            bm: 18.0,
            u: 9.0,
            approval: 52.0,
        },
    }
}

pub fn fragile() -> Scenario {
    Scenario {
        id: "fragile".into(),
        title: "Fragile high inflation: de-anchored expectations".into(),
        description: "Expectations have drifted, reserves are thin and the risk premium is touchy."
            .into(),
        initial: Indicators {
            y: -3.5,
            pi: 28.0,
            pi_e: 24.0,
            i: 16.0,
            c: 0.35,
            b: 78.0,
            reserves: 3.8,
            s: 4.8,
            bm: 35.0,
            u: 12.0,
            approval: 45.0,
        },
    }
}

/// Built-in scenarios, default first.
pub fn builtin() -> Vec<Scenario> {
    vec![baseline(), fragile()]
}

pub fn find(id: &str) -> SimResult<Scenario> {
    builtin()
        .into_iter()
        .find(|s| s.id == id)
        .ok_or_else(|| SimError::UnknownScenario(id.to_owned()))
}
