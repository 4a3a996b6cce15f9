/// Control mechanics: clamp bands, rectifier, partial adjustment.

/// Closed interval `[lo, hi]` a committed variable must stay in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Band {
    pub lo: f64,
    pub hi: f64,
}

impl Band {
    pub const fn new(lo: f64, hi: f64) -> Self {
        Self { lo, hi }
    }

    /// Clamp into the band. NaN passes through unchanged.
    #[inline]
    pub fn apply(self, x: f64) -> f64 {
        x.clamp(self.lo, self.hi)
    }

    #[inline]
    pub fn contains(self, x: f64) -> bool {
        (self.lo..=self.hi).contains(&x)
    }
}

/// One-sided penalty: max(0, x).
#[inline]
pub fn relu(x: f64) -> f64 {
    x.max(0.0)
}

/// Discretionary move plus partial adjustment: x + step + k * (target - x).
/// Unclamped; callers apply their own band.
#[inline]
pub fn adjust_toward(x: f64, step: f64, target: f64, k: f64) -> f64 {
    x + step + k * (target - x)
}

/// Convex blend: (1 - w) * from + w * to.
#[inline]
pub fn blend(from: f64, to: f64, w: f64) -> f64 {
    (1.0 - w) * from + w * to
}
