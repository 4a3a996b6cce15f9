// tests/session.rs
use policy_sim::game::scenario;
use policy_sim::{
    Candidate, EconomicState, FixedShocks, GameStatus, GaussianShocks, Indicators, ParameterSet,
    PolicyInput, Scenario, Session, Shocks, SimError,
};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn baseline_session() -> Session<FixedShocks> {
    Session::new(scenario::baseline(), ParameterSet::default(), FixedShocks::zero())
}

fn calm_scenario() -> Scenario {
    Scenario {
        id: "calm".into(),
        title: "Anchored and balanced".into(),
        description: String::new(),
        initial: Indicators {
            y: 0.0,
            pi: 4.0,
            pi_e: 4.0,
            i: 5.0,
            c: 0.9,
            b: 50.0,
            reserves: 8.0,
            s: 1.5,
            bm: 2.0,
            u: 7.0,
            approval: 60.0,
        },
    }
}

fn doomed_scenario() -> Scenario {
    Scenario {
        id: "doomed".into(),
        title: "Unpopular and overheating".into(),
        description: String::new(),
        initial: Indicators { approval: 21.0, ..scenario::fragile().initial },
    }
}

/* ──────────────────────────────────────────────────────────────────────────
1) Seeding and a single quarter
────────────────────────────────────────────────────────────────────────── */

#[test]
fn new_session_is_seeded_at_turn_one() {
    let s = baseline_session();
    assert_eq!(s.state().turn, 1);
    assert_eq!(s.history().len(), 1);
    assert_eq!(s.history().latest(), Some(s.state()));
    assert_eq!(s.status(), GameStatus::Ongoing);
    assert!(close(s.taylor_rate(), 33.0));
}

#[test]
fn one_neutral_quarter_commits_and_logs() {
    let mut s = baseline_session();
    let report = s.apply_turn(PolicyInput::neutral()).expect("turn applies");

    assert_eq!(report.shocks, Shocks::ZERO);
    assert_eq!(report.state.turn, 2);
    assert_eq!(report.status, GameStatus::Ongoing);
    assert!(close(report.state.vars.i, 15.0));
    assert!(close(report.state.vars.pi, 8.4));
    assert!(close(report.state.vars.u, 6.6));

    assert_eq!(s.history().len(), 2);
    let turns: Vec<u32> = s.history().iter().map(|h| h.turn).collect();
    assert_eq!(turns, vec![1, 2]);
    assert_eq!(s.history().latest(), Some(&report.state));
}

#[test]
fn shocks_are_drawn_once_per_quarter_in_order() {
    let mut shocks = FixedShocks::zero();
    shocks.push_quarter(1.0, 2.0, -1.0);
    shocks.push_quarter(0.5, 0.0, 0.0);
    let mut s = Session::new(scenario::baseline(), ParameterSet::default(), shocks);

    let r1 = s.apply_turn(PolicyInput::neutral()).expect("turn applies");
    assert!(close(r1.shocks.demand, 0.6));
    assert!(close(r1.shocks.supply, 1.0));
    assert!(close(r1.shocks.fx, -0.4));
    assert_eq!(s.shocks_mut().remaining(), 3);

    let r2 = s.apply_turn(PolicyInput::neutral()).expect("turn applies");
    assert!(close(r2.shocks.demand, 0.3));
    assert_eq!(s.shocks_mut().remaining(), 0);
}

#[test]
fn commit_clamps_every_banded_field() {
    let state = EconomicState::seed(&scenario::baseline().initial);
    let wild = Candidate {
        vars: Indicators {
            y: -40.0,
            pi: 120.0,
            pi_e: -5.0,
            i: 60.0,
            c: 1.5,
            b: 200.0,
            reserves: -1.0,
            s: 30.0,
            bm: -3.0,
            u: 40.0,
            approval: 2.0,
        },
        i_taylor: 0.0,
        depreciation: 0.0,
        current_account: 0.0,
        outflow: 0.0,
    };
    let next = state.commit(&wild);
    assert_eq!(next.turn, 2);
    let v = next.vars;
    assert_eq!(v.y, -40.0);
    assert_eq!((v.pi, v.pi_e, v.i, v.c), (80.0, 0.0, 45.0, 0.98));
    assert_eq!((v.b, v.reserves, v.s, v.bm), (140.0, 0.0, 12.0, 0.0));
    assert_eq!((v.u, v.approval), (25.0, 15.0));
    assert!(v.within_bands());
}

/* ──────────────────────────────────────────────────────────────────────────
2) Boundary errors
────────────────────────────────────────────────────────────────────────── */

#[test]
fn non_finite_policy_is_rejected_before_stepping() {
    let mut s = baseline_session();
    let bad = PolicyInput { controls: f64::NAN, ..PolicyInput::neutral() };
    match s.apply_turn(bad) {
        Err(SimError::NonFinitePolicy { field, .. }) => assert_eq!(field, "controls"),
        other => panic!("expected NonFinitePolicy, got {other:?}"),
    }
    let inf = PolicyInput { delta_i: f64::INFINITY, ..PolicyInput::neutral() };
    assert!(matches!(s.apply_turn(inf), Err(SimError::NonFinitePolicy { field: "deltaI", .. })));
    assert_eq!(s.history().len(), 1);
    assert_eq!(s.state().turn, 1);
}

#[test]
fn out_of_range_but_finite_policy_is_accepted() {
    let mut s = baseline_session();
    let odd = PolicyInput { controls: 3.0, delta_i: -40.0, ..PolicyInput::neutral() };
    let r = s.apply_turn(odd).expect("finite policy applies");
    assert!(r.state.vars.within_bands());
}

#[test]
fn terminal_game_refuses_further_quarters() {
    let mut s = Session::new(doomed_scenario(), ParameterSet::default(), FixedShocks::zero());
    let r = s.apply_turn(PolicyInput::neutral()).expect("first quarter applies");
    assert_eq!(r.status, GameStatus::Lost);
    assert_eq!(r.state.vars.approval, 15.0);

    let len = s.history().len();
    assert!(matches!(
        s.apply_turn(PolicyInput::neutral()),
        Err(SimError::GameOver(GameStatus::Lost))
    ));
    assert_eq!(s.history().len(), len);
}

#[test]
fn out_of_band_scenario_is_clamped_on_seed() {
    let json = r#"{
        "id": "wild",
        "title": "Wild",
        "initial": { "y": -3, "pi": 200, "piE": -4, "i": 90, "c": 3.0, "b": 500,
                     "R": 40, "s": 20, "BM": 150, "u": 1, "A": 99 }
    }"#;
    let sc = Scenario::from_json(json).expect("valid scenario");
    let mut s = Session::new(sc, ParameterSet::default(), FixedShocks::zero());

    let seed = *s.history().latest().expect("seeded");
    assert!(seed.vars.within_bands(), "seed not clamped: {:?}", seed.vars);
    assert_eq!((seed.vars.pi, seed.vars.i, seed.vars.c), (80.0, 45.0, 0.98));
    assert_eq!((seed.vars.b, seed.vars.reserves), (140.0, 12.0));
    assert_eq!(seed.vars.y, -3.0);
    assert_eq!(*s.state(), seed);

    s.restart();
    assert!(s.state().vars.within_bands());
    assert!(s.history().iter().all(|h| h.vars.within_bands()));
}

#[test]
fn unknown_scenario_is_an_error() {
    assert!(matches!(scenario::find("utopia"), Err(SimError::UnknownScenario(id)) if id == "utopia"));
    assert_eq!(scenario::find("fragile").expect("builtin").id, "fragile");
    assert_eq!(scenario::builtin()[0].id, "baseline");
}

/* ──────────────────────────────────────────────────────────────────────────
3) Reset and auto-run
────────────────────────────────────────────────────────────────────────── */

#[test]
fn reset_twice_gives_the_same_seed() {
    let mut s = Session::new(scenario::baseline(), ParameterSet::default(), GaussianShocks::seeded(7));
    s.auto_run(3, |_| PolicyInput { delta_i: 1.0, ..PolicyInput::neutral() })
        .expect("batch runs");

    s.reset(scenario::baseline());
    let first = *s.state();
    let first_log: Vec<EconomicState> = s.history().as_slice().to_vec();
    s.reset(scenario::baseline());

    assert_eq!(*s.state(), first);
    assert_eq!(s.history().as_slice(), first_log.as_slice());
    assert_eq!(s.history().len(), 1);
    assert_eq!(first.turn, 1);
    assert_eq!(first.vars, scenario::baseline().initial);
}

#[test]
fn reset_switches_scenario() {
    let mut s = baseline_session();
    s.apply_turn(PolicyInput::neutral()).expect("turn applies");
    s.reset(scenario::find("fragile").expect("builtin"));
    assert_eq!(s.scenario().id, "fragile");
    assert_eq!(s.state().vars, scenario::fragile().initial);
    assert_eq!(s.history().len(), 1);

    s.apply_turn(PolicyInput::neutral()).expect("turn applies");
    s.restart();
    assert_eq!(s.scenario().id, "fragile");
    assert_eq!(s.history().len(), 1);
}

#[test]
fn reset_revives_a_lost_game() {
    let mut s = Session::new(doomed_scenario(), ParameterSet::default(), FixedShocks::zero());
    s.apply_turn(PolicyInput::neutral()).expect("first quarter applies");
    assert_eq!(s.status(), GameStatus::Lost);
    s.reset(scenario::baseline());
    assert_eq!(s.status(), GameStatus::Ongoing);
    assert!(s.apply_turn(PolicyInput::neutral()).is_ok());
}

#[test]
fn auto_run_stops_at_terminal_status() {
    let mut s = Session::new(doomed_scenario(), ParameterSet::default(), FixedShocks::zero());
    let applied = s.auto_run(8, |_| PolicyInput::neutral()).expect("batch runs");
    assert_eq!(applied, 1);
    assert_eq!(s.status(), GameStatus::Lost);
    assert_eq!(s.auto_run(8, |_| PolicyInput::neutral()).expect("no-op batch"), 0);
}

#[test]
fn calm_session_wins_after_four_quarters() {
    let mut s = Session::new(calm_scenario(), ParameterSet::default(), FixedShocks::zero());
    let applied = s.auto_run(8, |_| PolicyInput::neutral()).expect("batch runs");

    // Seed plus three applied quarters make the four-quarter window.
    assert_eq!(applied, 3);
    assert_eq!(s.status(), GameStatus::Won);
    assert_eq!(s.state().turn, 4);
    assert_eq!(s.history().len(), 4);

    assert!(matches!(
        s.apply_turn(PolicyInput::neutral()),
        Err(SimError::GameOver(GameStatus::Won))
    ));
    assert_eq!(s.auto_run(8, |_| PolicyInput::neutral()).expect("no-op batch"), 0);
    assert_eq!(s.history().len(), 4);
}

#[test]
fn auto_run_is_sequential_and_bounded() {
    let mut s = baseline_session();
    let applied = s
        .auto_run(8, |sess| PolicyInput { delta_i: sess.taylor_rate() - sess.state().vars.i, ..PolicyInput::neutral() })
        .expect("batch runs");
    assert!(applied <= 8);
    assert_eq!(s.history().len(), applied + 1);
    for (k, h) in s.history().iter().enumerate() {
        assert_eq!(h.turn as usize, k + 1);
    }
}

#[test]
fn auto_run_propagates_policy_errors() {
    let mut s = baseline_session();
    let mut calls = 0;
    let res = s.auto_run(8, |_| {
        calls += 1;
        if calls == 3 { PolicyInput { bailout: f64::NAN, ..PolicyInput::neutral() } } else { PolicyInput::neutral() }
    });
    assert!(matches!(res, Err(SimError::NonFinitePolicy { field: "bailout", .. })));
    assert_eq!(s.history().len(), 3);
}

#[test]
fn same_seed_same_trajectory() {
    let policy = |_: &Session<GaussianShocks>| PolicyInput {
        delta_i: 0.5,
        fiscal_impulse: -0.5,
        primary_deficit: 2.0,
        controls: 0.2,
        bailout: 0.0,
    };
    let mut a = Session::new(scenario::fragile(), ParameterSet::default(), GaussianShocks::seeded(2024));
    let mut b = Session::new(scenario::fragile(), ParameterSet::default(), GaussianShocks::seeded(2024));
    let na = a.auto_run(6, policy).expect("batch runs");
    let nb = b.auto_run(6, policy).expect("batch runs");
    assert_eq!(na, nb);
    assert_eq!(a.history().as_slice(), b.history().as_slice());
    assert_eq!(a.status(), b.status());
}

/* ──────────────────────────────────────────────────────────────────────────
4) Configuration
────────────────────────────────────────────────────────────────────────── */

#[test]
fn params_json_overlays_defaults() {
    let p = ParameterSet::from_json(r#"{ "piStar": 2.0, "baseCA": 1.0, "credibilityScale": 4 }"#)
        .expect("valid json");
    assert_eq!(p.pi_star, 2.0);
    assert_eq!(p.base_ca, 1.0);
    assert_eq!(p.credibility_scale, 4.0);
    assert_eq!(p.phi_pi, ParameterSet::default().phi_pi);

    assert_eq!(ParameterSet::from_json("{}").expect("empty object"), ParameterSet::default());
    assert!(matches!(ParameterSet::from_json("{ piStar: }"), Err(SimError::Config(_))));
}

#[test]
fn scenario_json_uses_reference_keys() {
    let json = r#"{
        "id": "custom",
        "title": "Custom",
        "initial": { "y": 0, "pi": 6, "piE": 5, "i": 7, "c": 0.7, "b": 50,
                     "R": 5, "s": 1, "BM": 10, "u": 7, "A": 60 }
    }"#;
    let sc = Scenario::from_json(json).expect("valid scenario");
    assert_eq!(sc.initial.reserves, 5.0);
    assert_eq!(sc.initial.bm, 10.0);
    assert_eq!(sc.initial.approval, 60.0);
    assert_eq!(sc.initial.pi_e, 5.0);
    assert!(sc.description.is_empty());

    let s = Session::new(sc, ParameterSet::default(), FixedShocks::zero());
    assert_eq!(s.state().vars.pi, 6.0);
}
