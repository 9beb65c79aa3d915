//! Deterministic simulation RNG.
//!
//! One `SimRng` per simulator, seeded once.  Runs with the same seed, config
//! and clock produce identical trip sequences.  The draws are illustrative:
//! `SmallRng` is fast and reproducible, not cryptographically strong.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::distributions::{Distribution, WeightedIndex};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::{CoreError, CoreResult};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Seed derived from the current wall-clock time.
///
/// Used when the caller does not inject a seed.
pub fn time_seed() -> u64 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default();
    nanos.wrapping_mul(MIXING_CONSTANT)
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Simulation-level RNG.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Uniform draw in `[0, 1)`.
    #[inline]
    pub fn unit(&mut self) -> f64 {
        self.0.r#gen::<f64>()
    }

    /// `true` with probability `p` (clamped to [0, 1]).  `p == 0.0` never
    /// fires; `p == 1.0` always does.
    #[inline]
    pub fn chance(&mut self, p: f64) -> bool {
        self.unit() < p.clamp(0.0, 1.0)
    }
}

// ── WeightedChoice ────────────────────────────────────────────────────────────

/// A categorical distribution over a fixed set of values.
///
/// Built once per run from `(value, weight)` pairs; weights need not sum to 1.
pub struct WeightedChoice<T> {
    values: Vec<T>,
    index:  WeightedIndex<f64>,
}

impl<T: Copy> WeightedChoice<T> {
    /// Fails if there are no entries, any weight is negative or non-finite,
    /// or all weights are zero.
    pub fn new(entries: impl IntoIterator<Item = (T, f64)>) -> CoreResult<Self> {
        let (values, weights): (Vec<T>, Vec<f64>) = entries.into_iter().unzip();
        let index = WeightedIndex::new(&weights)
            .map_err(|e| CoreError::Config(format!("invalid weights {weights:?}: {e}")))?;
        Ok(Self { values, index })
    }

    pub fn sample(&self, rng: &mut SimRng) -> T {
        self.values[self.index.sample(rng.inner())]
    }
}
