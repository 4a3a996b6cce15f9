// src/game/mod.rs

// Turn-level orchestration: the caller-owned context, the step function that
// composes the sub-models, and the bookkeeping around it.

pub mod history;
pub mod policy;
pub mod scenario;
pub mod session;
pub mod state;
pub mod status;
pub mod step;

#[cfg(feature = "briefing")]
pub mod briefing;

pub use history::HistoryLog;
pub use policy::PolicyInput;
pub use scenario::Scenario;
pub use session::{Session, TurnReport};
pub use state::{Candidate, EconomicState, Indicators};
pub use status::{GameStatus, Thresholds};
