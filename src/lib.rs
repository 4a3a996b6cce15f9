/*!
`policy_sim` — a pure, turn-based small-open-economy policy game core.

What it does
- Advances a tiny open-economy model one quarter at a time:
  `step : (EconomicState, PolicyInput, ParameterSet, Shocks) → Candidate`.
- Commits the candidate through fixed clamp bands, appends it to an
  append-only `HistoryLog`, and classifies the trajectory as
  `Won` / `Lost` / `Ongoing`.
- Keeps credibility and approval as explicit sub-models that react to the
  quarter that just ended, not to the freshly computed one.

How to use (call surface only)
- Pick a scenario (`game::scenario::find("baseline")`) and a `ParameterSet`
  (`ParameterSet::default()` or `ParameterSet::from_json`).
- Build a `Session` with a shock source (`GaussianShocks::seeded(seed)` in
  production, `FixedShocks` in tests).
- Each turn: `session.apply_turn(policy)?` and read back `session.status()`.
- `session.auto_run(n, |s| policy_for(s))` advances up to `n` turns, stopping
  at the first terminal status.

What it does NOT do
- No rendering, no persistence, no networking. Display layers consume the
  committed state and history read-only.
*/

pub mod error;
pub mod params;

pub mod game;
pub mod mechanics;
pub mod systems;

pub use error::{SimError, SimResult};
pub use game::{
    Candidate, EconomicState, GameStatus, HistoryLog, Indicators, PolicyInput, Scenario, Session,
    TurnReport,
};
pub use mechanics::stoch::{FixedShocks, GaussianShocks, ShockScales, ShockSource, Shocks};
pub use params::ParameterSet;

/// Sequential batch advance: apply `turn` to `ctx` up to `max_turns` times.
///
/// `ongoing` is checked before every turn; the loop stops as soon as it
/// reports `false`. Returns how many turns were applied. An error from
/// `turn` aborts the batch and is returned as-is.
pub fn run_turns<C, E, Go, Turn>(
    ctx: &mut C,
    max_turns: usize,
    ongoing: Go,
    mut turn: Turn,
) -> Result<usize, E>
where
    Go: Fn(&C) -> bool,
    Turn: FnMut(&mut C) -> Result<(), E>,
{
    let mut applied = 0;
    while applied < max_turns {
        if !ongoing(&*ctx) {
            break;
        }
        turn(&mut *ctx)?;
        applied += 1;
    }
    Ok(applied)
}
