//! Sub-models of the quarterly step. Each is a handful of pure functions over
//! the pre-step state; `game::step` wires them together.

pub mod approval;
pub mod credibility;
pub mod domestic;
pub mod external;
pub mod fiscal;
#[cfg(feature = "system-factions")] pub mod factions;
