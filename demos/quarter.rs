// demos/quarter.rs
// Run with:
//   cargo run --example quarter

use policy_sim::game::briefing::{PolicyReadout, QuarterReport, status_message};
use policy_sim::game::scenario;
use policy_sim::systems::factions;
use policy_sim::{GaussianShocks, ParameterSet, PolicyInput, Session};

fn main() -> Result<(), policy_sim::SimError> {
    let params = ParameterSet::default();
    let mut session = Session::new(scenario::find("baseline")?, params, GaussianShocks::seeded(42));

    println!("== {} ==", session.scenario().title);
    println!("{}", session.scenario().description);

    // A hawkish, fiscally tight programme with light capital controls.
    let programme = |s: &Session<GaussianShocks>| {
        let gap = s.taylor_rate() - s.state().vars.i;
        PolicyInput {
            delta_i: (0.5 * gap).clamp(-2.0, 4.0),
            fiscal_impulse: -0.5,
            primary_deficit: 1.0,
            controls: 0.2,
            bailout: 0.0,
        }
    };

    println!("{}", PolicyReadout::new(session.params(), session.state(), &programme(&session)));

    let applied = session.auto_run(8, programme)?;
    for h in session.history() {
        let v = &h.vars;
        println!(
            "Q{:<2} y={:>6.2} pi={:>6.2} piE={:>6.2} i={:>6.2} u={:>5.2} A={:>3.0} b={:>5.1} R={:>5.2} s={:>5.2} BM={:>5.1}",
            h.turn, v.y, v.pi, v.pi_e, v.i, v.u, v.approval, v.b, v.reserves, v.s, v.bm
        );
    }

    println!("{}", QuarterReport::from_state(session.state()));
    for f in factions::sentiment(session.params(), &session.state().vars) {
        println!("  {:?}: {:.0} ({:?})", f.id, f.score, f.mood);
    }
    let status = session.status();
    println!("after {applied} quarters: {status}: {}", status_message(status));
    Ok(())
}
