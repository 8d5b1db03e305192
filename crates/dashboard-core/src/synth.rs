// File: crates/dashboard-core/src/synth.rs
// Summary: Synthetic sample data (upward-biased monthly walk, scatter jitter) over an injectable random source.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{DashboardError, Result};

/// Uniform draws in [0, 1).
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

/// Adapter from any `rand` generator.
#[derive(Clone, Debug)]
pub struct RngSource<R>(pub R);

impl RngSource<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self(StdRng::from_os_rng())
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_unit(&mut self) -> f64 {
        self.0.random::<f64>()
    }
}

/// Replays fixed values in a loop. An empty sequence always yields 0.
#[derive(Clone, Debug, Default)]
pub struct Sequence {
    values: Vec<f64>,
    pos: usize,
}

impl Sequence {
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        Self { values: values.into(), pos: 0 }
    }

    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }
}

impl RandomSource for Sequence {
    fn next_unit(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let v = self.values[self.pos % self.values.len()];
        self.pos = (self.pos + 1) % self.values.len();
        v
    }
}

/// Step bias: a draw of 0.4 leaves the walk flat, so growth outweighs decline.
const WALK_PIVOT: f64 = 0.4;

/// Round half up (toward +inf), matching how the dashboard rounds sample values.
#[inline]
fn round_half_up(v: f64) -> f64 {
    (v + 0.5).floor()
}

fn ensure_finite(name: &str, v: f64) -> Result<()> {
    if v.is_finite() {
        Ok(())
    } else {
        Err(DashboardError::validation(format!("{name} must be finite, got {v}")))
    }
}

/// Monthly walk starting at `base_value`: each step adds `(u - 0.4) * variance`
/// and records the running value rounded to an integer. The running value itself
/// is never rounded.
pub fn synthesize_monthly_series(
    base_value: f64,
    variance: f64,
    months: u32,
    rng: &mut dyn RandomSource,
) -> Result<Vec<f64>> {
    ensure_finite("base value", base_value)?;
    ensure_finite("variance", variance)?;
    let mut current = base_value;
    let data: Vec<f64> = (0..months)
        .map(|_| {
            current += (rng.next_unit() - WALK_PIVOT) * variance;
            round_half_up(current)
        })
        .collect();
    tracing::debug!(base_value, variance, months, last = ?data.last(), "synthesized monthly series");
    Ok(data)
}

/// `count` values of `base + (u - 0.5) * base * spread`, e.g. LTV/CAC bubble positions.
pub fn scatter_cloud(base: f64, spread: f64, count: usize, rng: &mut dyn RandomSource) -> Result<Vec<f64>> {
    ensure_finite("base", base)?;
    ensure_finite("spread", spread)?;
    Ok((0..count).map(|_| base + (rng.next_unit() - 0.5) * base * spread).collect())
}
