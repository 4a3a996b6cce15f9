//! Caller-owned simulation context.
//!
//! A `Session` holds everything one playthrough needs: coefficients, the
//! scenario, the committed state, the history log and the shock source.
//! There is no global economy; two sessions never share anything.
//!
//! Turn protocol: validate policy → refuse if already decided → draw the
//! shock triple once → step → commit (clamp) → append to history → classify.

use log::{debug, info, warn};

use super::history::HistoryLog;
use super::policy::PolicyInput;
use super::scenario::Scenario;
use super::state::{Candidate, EconomicState};
use super::status::{GameStatus, Thresholds};
use super::step::step;
use crate::error::{SimError, SimResult};
use crate::mechanics::rules;
use crate::mechanics::stoch::{ShockScales, ShockSource, Shocks};
use crate::params::ParameterSet;
use crate::run_turns;

/// What one applied quarter produced.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TurnReport {
    /// Committed (clamped) state, already in the history log.
    pub state: EconomicState,
    /// Raw step output before clamping.
    pub candidate: Candidate,
    pub shocks: Shocks,
    pub status: GameStatus,
}

#[derive(Debug)]
pub struct Session<S: ShockSource> {
    params: ParameterSet,
    thresholds: Thresholds,
    scales: ShockScales,
    scenario: Scenario,
    state: EconomicState,
    history: HistoryLog,
    shocks: S,
}

impl<S: ShockSource> Session<S> {
    pub fn new(scenario: Scenario, params: ParameterSet, shocks: S) -> Self {
        let state = EconomicState::seed(&scenario.initial);
        let mut history = HistoryLog::new();
        history.push(state);
        Self {
            params,
            thresholds: Thresholds::default(),
            scales: ShockScales::default(),
            scenario,
            state,
            history,
            shocks,
        }
    }

    pub fn with_thresholds(mut self, thresholds: Thresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    pub fn with_shock_scales(mut self, scales: ShockScales) -> Self {
        self.scales = scales;
        self
    }

    pub fn params(&self) -> &ParameterSet {
        &self.params
    }

    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    pub fn scenario(&self) -> &Scenario {
        &self.scenario
    }

    pub fn state(&self) -> &EconomicState {
        &self.state
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    pub fn shocks_mut(&mut self) -> &mut S {
        &mut self.shocks
    }

    pub fn status(&self) -> GameStatus {
        self.thresholds.evaluate(&self.state.vars, &self.history)
    }

    /// Policy-rule rate for the current quarter.
    pub fn taylor_rate(&self) -> f64 {
        rules::taylor_rate(&self.params, self.state.vars.pi, self.state.vars.y)
    }

    /// Re-seed from `scenario`: turn 1, history holding only the seed.
    pub fn reset(&mut self, scenario: Scenario) {
        info!("reset: scenario={}", scenario.id);
        self.state = EconomicState::seed(&scenario.initial);
        self.scenario = scenario;
        self.history.clear();
        self.history.push(self.state);
    }

    /// Re-seed from the current scenario.
    pub fn restart(&mut self) {
        let scenario = self.scenario.clone();
        self.reset(scenario);
    }

    pub fn apply_turn(&mut self, policy: PolicyInput) -> SimResult<TurnReport> {
        policy.validate()?;
        let before = self.status();
        if before.is_terminal() {
            warn!("turn {} refused: game is {}", self.state.turn, before);
            return Err(SimError::GameOver(before));
        }

        let shocks = Shocks::draw(&mut self.shocks, &self.scales);
        let candidate = step(&self.state, &policy, &self.params, &shocks);
        self.state = self.state.commit(&candidate);
        self.history.push(self.state);

        let status = self.status();
        let v = &self.state.vars;
        debug!(
            "Q{} y={:.2} pi={:.2} piE={:.2} i={:.2} c={:.2} R={:.2} A={:.1} status={}",
            self.state.turn, v.y, v.pi, v.pi_e, v.i, v.c, v.reserves, v.approval, status
        );
        if status.is_terminal() {
            info!("Q{}: game {}", self.state.turn, status);
        }

        Ok(TurnReport { state: self.state, candidate, shocks, status })
    }

    /// Advance up to `max_turns` quarters, asking `policy` for each one.
    /// Stops early once the game is decided. Returns quarters applied.
    pub fn auto_run<P>(&mut self, max_turns: usize, mut policy: P) -> SimResult<usize>
    where
        P: FnMut(&Self) -> PolicyInput,
    {
        run_turns(
            self,
            max_turns,
            |s| s.status().is_ongoing(),
            |s| {
                let p = policy(&*s);
                s.apply_turn(p).map(|_| ())
            },
        )
    }
}
