/// Stochastic mechanics: the shock-source seam and the per-quarter shock triple.
/// Production wires `GaussianShocks` (seeded `bevy_prng::WyRand`); tests wire
/// `FixedShocks` so the step function stays deterministic.
use std::collections::VecDeque;

use bevy_prng::WyRand;
use rand_core::{RngCore, SeedableRng};
use serde::{Deserialize, Serialize};

/// Anything that can hand out independent N(0, 1) draws.
pub trait ShockSource {
    fn next_normal(&mut self) -> f64;
}

impl<T: ShockSource + ?Sized> ShockSource for &mut T {
    fn next_normal(&mut self) -> f64 {
        (**self).next_normal()
    }
}

impl<T: ShockSource + ?Sized> ShockSource for Box<T> {
    fn next_normal(&mut self) -> f64 {
        (**self).next_normal()
    }
}

/// Uniform in [0, 1) with 53 bits of mantissa.
#[inline]
fn unit01(rng: &mut WyRand) -> f64 {
    ((rng.next_u64() >> 11) as f64) / ((1u64 << 53) as f64)
}

/// Gaussian(0,1) via Box–Muller using WyRand.
#[derive(Clone, Debug)]
pub struct GaussianShocks {
    rng: WyRand,
}

impl GaussianShocks {
    pub fn seeded(seed: u64) -> Self {
        Self { rng: WyRand::from_seed(seed.to_le_bytes()) }
    }

    pub fn from_rng(rng: WyRand) -> Self {
        Self { rng }
    }
}

impl ShockSource for GaussianShocks {
    fn next_normal(&mut self) -> f64 {
        // 1 - u lies in (0, 1], so ln never sees zero.
        let u1 = 1.0 - unit01(&mut self.rng);
        let u2 = unit01(&mut self.rng);
        let r = (-2.0 * u1.ln()).sqrt();
        let t = 2.0 * std::f64::consts::PI * u2;
        r * t.cos()
    }
}

/// Replays a fixed sequence of standard-normal draws, then zeros.
#[derive(Clone, Debug, Default)]
pub struct FixedShocks {
    queue: VecDeque<f64>,
}

impl FixedShocks {
    /// Every draw is zero.
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn new(draws: impl IntoIterator<Item = f64>) -> Self {
        Self { queue: draws.into_iter().collect() }
    }

    /// Queue one quarter worth of draws (demand, supply, FX).
    pub fn push_quarter(&mut self, demand: f64, supply: f64, fx: f64) {
        self.queue.extend([demand, supply, fx]);
    }

    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl ShockSource for FixedShocks {
    fn next_normal(&mut self) -> f64 {
        self.queue.pop_front().unwrap_or(0.0)
    }
}

/// Standard deviations of the three quarterly shocks.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShockScales {
    pub demand: f64,
    pub supply: f64,
    pub fx: f64,
}

impl Default for ShockScales {
    fn default() -> Self {
        Self { demand: 0.6, supply: 0.5, fx: 0.4 }
    }
}

/// One quarter's shocks, already scaled. Drawn once, passed whole.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Shocks {
    pub demand: f64,
    pub supply: f64,
    pub fx: f64,
}

impl Shocks {
    pub const ZERO: Shocks = Shocks { demand: 0.0, supply: 0.0, fx: 0.0 };

    /// Draw demand, supply, FX in that order.
    pub fn draw<S: ShockSource + ?Sized>(src: &mut S, scales: &ShockScales) -> Self {
        let demand = scales.demand * src.next_normal();
        let supply = scales.supply * src.next_normal();
        let fx = scales.fx * src.next_normal();
        Self { demand, supply, fx }
    }
}
