//! The quarterly step function.
//!
//! `(state, policy, params, shocks) → Candidate`. Pure: no history access, no
//! randomness of its own. Credibility and approval read the quarter that just
//! ended, not the one being computed.

use super::policy::PolicyInput;
use super::state::{Candidate, EconomicState, Indicators, POLICY_RATE};
use crate::mechanics::{control, rules, stoch::Shocks};
use crate::params::ParameterSet;
use crate::systems::{approval, credibility, domestic, external, fiscal};

pub fn step(state: &EconomicState, policy: &PolicyInput, p: &ParameterSet, shocks: &Shocks) -> Candidate {
    let now = &state.vars;

    let i_taylor = rules::taylor_rate(p, now.pi, now.y);
    let i = POLICY_RATE.apply(control::adjust_toward(now.i, policy.delta_i, i_taylor, p.inertia));

    let y = domestic::output_gap(p, now, policy.fiscal_impulse, shocks.demand);
    let pi = domestic::inflation(p, now, shocks.supply);
    let pi_e = domestic::expectations(p, now);

    let s = external::risk_premium(p, now);
    let depreciation = external::depreciation(p, now, s, shocks.fx);
    let bm = external::black_market(now, depreciation, policy.controls);
    let current_account = external::current_account(p, now, depreciation);
    let outflow = external::outflow(now, s, policy.controls);
    let reserves = external::reserves(now, current_account, outflow);

    let b = fiscal::debt(p, now, s, policy.primary_deficit, policy.bailout);
    let u = domestic::unemployment(p, y);

    let c = credibility::update(
        p,
        credibility::Inputs {
            c: now.c,
            pi: now.pi,
            i: now.i,
            i_taylor,
            primary_deficit: policy.primary_deficit,
            y: now.y,
            bm: now.bm,
        },
    );
    let approval = approval::update(p, now);

    Candidate {
        vars: Indicators { y, pi, pi_e, i, c, b, reserves, s, bm, u, approval },
        i_taylor,
        depreciation,
        current_account,
        outflow,
    }
}
