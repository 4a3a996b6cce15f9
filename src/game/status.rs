//! Win / loss classification. Stateless: recomputed on every call.
//!
//! Winning needs persistence (four qualifying quarters in the log, the current
//! one included); losing is immediate on the live state. The asymmetry is
//! part of the game.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::history::HistoryLog;
use super::state::Indicators;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    Won,
    Lost,
    #[default]
    Ongoing,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::Ongoing)
    }

    pub fn is_ongoing(self) -> bool {
        matches!(self, GameStatus::Ongoing)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            GameStatus::Won => "won",
            GameStatus::Lost => "lost",
            GameStatus::Ongoing => "ongoing",
        })
    }
}

/// Win/lose thresholds.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Thresholds {
    pub win_pi_max: f64,
    pub win_u_max: f64,
    pub win_reserves_min: f64,
    /// Consecutive qualifying quarters required, current one included.
    pub win_quarters: usize,
    pub lose_pi_above: f64,
    pub lose_reserves_below: f64,
    pub lose_approval_below: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            win_pi_max: 8.0,
            win_u_max: 10.0,
            win_reserves_min: 4.0,
            win_quarters: 4,
            lose_pi_above: 60.0,
            lose_reserves_below: 0.5,
            lose_approval_below: 20.0,
        }
    }
}

impl Thresholds {
    #[inline]
    pub fn qualifies(&self, v: &Indicators) -> bool {
        v.pi <= self.win_pi_max && v.u <= self.win_u_max && v.reserves >= self.win_reserves_min
    }

    #[inline]
    pub fn collapsed(&self, v: &Indicators) -> bool {
        v.pi > self.lose_pi_above
            || v.reserves < self.lose_reserves_below
            || v.approval < self.lose_approval_below
    }

    /// Won is checked first, so it wins a (theoretical) tie with Lost.
    /// At least one logged quarter is always required to win.
    pub fn evaluate(&self, current: &Indicators, history: &HistoryLog) -> GameStatus {
        let sustained = history
            .window(self.win_quarters.max(1))
            .is_some_and(|w| w.iter().all(|s| self.qualifies(&s.vars)));
        if self.qualifies(current) && sustained {
            GameStatus::Won
        } else if self.collapsed(current) {
            GameStatus::Lost
        } else {
            GameStatus::Ongoing
        }
    }
}

/// Classify with the reference thresholds.
pub fn evaluate(current: &Indicators, history: &HistoryLog) -> GameStatus {
    Thresholds::default().evaluate(current, history)
}
