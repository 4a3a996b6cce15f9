// src/game/briefing.rs
#![cfg(feature = "briefing")]

//! Player-facing read-outs derived from the committed state: the quarter
//! report, the pre-commit policy read-out and the status message. Pure
//! formatting over model values; nothing here touches the simulation.

use std::fmt;

use super::policy::PolicyInput;
use super::state::EconomicState;
use super::status::GameStatus;
use crate::mechanics::rules;
use crate::params::ParameterSet;

/// Black-market pressure above this reads as a severe external constraint.
pub const BM_ALERT: f64 = 50.0;
/// Rule deviation (pp) above which the read-out warns of a credibility hit.
pub const DEVIATION_ALERT: f64 = 1.0;

pub fn status_message(status: GameStatus) -> &'static str {
    match status {
        GameStatus::Won => "stability targets achieved",
        GameStatus::Lost => "macro control lost",
        GameStatus::Ongoing => "reform continues",
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuarterReport {
    pub turn: u32,
    pub pi: f64,
    pub u: f64,
    pub approval: f64,
    pub contracting: bool,
    pub external_alert: bool,
}

impl QuarterReport {
    pub fn from_state(state: &EconomicState) -> Self {
        let v = &state.vars;
        Self {
            turn: state.turn,
            pi: v.pi,
            u: v.u,
            approval: v.approval,
            contracting: v.y < 0.0,
            external_alert: v.bm > BM_ALERT,
        }
    }
}

impl fmt::Display for QuarterReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stance = if self.contracting { "The economy is still contracting" } else { "The economy is recovering" };
        let risk = if self.external_alert {
            "black-market pressure is high and external constraints are severe."
        } else {
            "external pressure is contained."
        };
        write!(
            f,
            "Q{} report: inflation {:.1}%, unemployment {:.1}%, approval {:.0}%. {stance}; {risk}",
            self.turn, self.pi, self.u, self.approval
        )
    }
}

/// How a proposed policy compares with the rule, before it is applied.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PolicyReadout {
    pub current_rate: f64,
    pub taylor_rate: f64,
    /// i + Δi − rule rate.
    pub deviation: f64,
    pub primary_deficit: f64,
    pub controls: f64,
    pub bailout: f64,
}

impl PolicyReadout {
    pub fn new(p: &ParameterSet, state: &EconomicState, policy: &PolicyInput) -> Self {
        let taylor_rate = rules::taylor_rate(p, state.vars.pi, state.vars.y);
        Self {
            current_rate: state.vars.i,
            taylor_rate,
            deviation: state.vars.i + policy.delta_i - taylor_rate,
            primary_deficit: policy.primary_deficit,
            controls: policy.controls,
            bailout: policy.bailout,
        }
    }

    pub fn credibility_warning(&self) -> bool {
        self.deviation > DEVIATION_ALERT
    }
}

impl fmt::Display for PolicyReadout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "current i={:.2}%, rule rate={:.2}%, deviation this quarter={:.2}%",
            self.current_rate, self.taylor_rate, self.deviation
        )?;
        writeln!(
            f,
            "primary deficit {:.2}% GDP, capital controls {:.2}, bailout {:.2}% GDP.",
            self.primary_deficit, self.controls, self.bailout
        )?;
        f.write_str(if self.credibility_warning() {
            "Large deviation from the rule; the credibility penalty grows."
        } else {
            "Deviation from the rule is within a tolerable range."
        })
    }
}
