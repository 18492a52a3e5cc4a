//! Worker allocation model and productivity strategies.
//!
//! A `Worker` record is a pooled allocation: `count` interchangeable
//! workers of one kind sharing a productivity rate. Productivity is read
//! through a [`ProductivityModel`] strategy so the stochastic variant's
//! randomness dependency stays explicit in its type, never an implicit
//! global source.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// A pooled allocation of workers of a single kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Worker {
    /// Resource kind this pool satisfies (matches `WorkerReq::kind`).
    pub kind: String,
    /// Number of workers in the pool.
    pub count: u32,
    /// Work rate per worker per tick.
    pub productivity: f64,
    /// Relative half-width of the stochastic rate interval (0.0..=1.0).
    /// Zero makes stochastic sampling degenerate to the static rate.
    pub productivity_spread: f64,
}

impl Worker {
    /// Creates a worker pool with a deterministic rate.
    pub fn new(kind: impl Into<String>, count: u32, productivity: f64) -> Self {
        Self {
            kind: kind.into(),
            count,
            productivity,
            productivity_spread: 0.0,
        }
    }

    /// Sets the relative spread for stochastic rate sampling.
    pub fn with_spread(mut self, spread: f64) -> Self {
        self.productivity_spread = spread.clamp(0.0, 1.0);
        self
    }

    /// Returns a copy of this pool with a different headcount.
    pub fn with_count(&self, count: u32) -> Self {
        Self {
            count,
            ..self.clone()
        }
    }

    /// The fixed per-worker rate.
    pub fn static_productivity(&self) -> f64 {
        self.productivity
    }

    /// Samples a per-worker rate uniformly from
    /// `[p·(1 − spread), p·(1 + spread)]`.
    pub fn stochastic_productivity<R: Rng>(&self, rng: &mut R) -> f64 {
        if self.productivity_spread == 0.0 || self.productivity == 0.0 {
            return self.productivity;
        }
        let lo = self.productivity * (1.0 - self.productivity_spread);
        let hi = self.productivity * (1.0 + self.productivity_spread);
        rng.random_range(lo..=hi)
    }
}

/// Strategy for reading a worker pool's per-worker rate during estimation.
///
/// Two variants exist: [`StaticProductivity`] reads the fixed rate, and
/// [`StochasticProductivity`] samples per call from a caller-owned RNG.
/// Takes `&mut self` because the stochastic variant advances its RNG.
pub trait ProductivityModel {
    /// The per-worker rate to use for this evaluation.
    fn productivity(&mut self, worker: &Worker) -> f64;
}

/// Deterministic productivity: the fixed per-worker rate.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticProductivity;

impl ProductivityModel for StaticProductivity {
    fn productivity(&mut self, worker: &Worker) -> f64 {
        worker.static_productivity()
    }
}

/// Per-call sampled productivity driven by an explicit RNG handle.
///
/// Given a fixed seed and a fixed evaluation order, estimates are
/// reproducible.
#[derive(Debug)]
pub struct StochasticProductivity<'r, R: Rng> {
    rng: &'r mut R,
}

impl<'r, R: Rng> StochasticProductivity<'r, R> {
    /// Wraps a caller-owned randomness source.
    pub fn new(rng: &'r mut R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> ProductivityModel for StochasticProductivity<'_, R> {
    fn productivity(&mut self, worker: &Worker) -> f64 {
        worker.stochastic_productivity(self.rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_worker_builder() {
        let w = Worker::new("mason", 5, 2.0).with_spread(0.25);
        assert_eq!(w.kind, "mason");
        assert_eq!(w.count, 5);
        assert!((w.productivity - 2.0).abs() < 1e-12);
        assert!((w.productivity_spread - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_spread_clamped() {
        let w = Worker::new("mason", 1, 1.0).with_spread(3.0);
        assert!((w.productivity_spread - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_with_count_keeps_rate() {
        let w = Worker::new("mason", 5, 2.0).with_spread(0.1);
        let half = w.with_count(2);
        assert_eq!(half.count, 2);
        assert!((half.productivity - 2.0).abs() < 1e-12);
        assert!((half.productivity_spread - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_static_model() {
        let w = Worker::new("mason", 5, 2.0);
        let mut model = StaticProductivity;
        assert!((model.productivity(&w) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_stochastic_stays_in_interval() {
        let w = Worker::new("mason", 5, 2.0).with_spread(0.5);
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..100 {
            let p = w.stochastic_productivity(&mut rng);
            assert!((1.0..=3.0).contains(&p), "sample {p} out of [1, 3]");
        }
    }

    #[test]
    fn test_stochastic_zero_spread_is_static() {
        let w = Worker::new("mason", 5, 2.0);
        let mut rng = SmallRng::seed_from_u64(42);
        assert!((w.stochastic_productivity(&mut rng) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_stochastic_reproducible_with_seed() {
        let w = Worker::new("mason", 5, 2.0).with_spread(0.5);
        let mut a = SmallRng::seed_from_u64(7);
        let mut b = SmallRng::seed_from_u64(7);
        for _ in 0..10 {
            let pa = w.stochastic_productivity(&mut a);
            let pb = w.stochastic_productivity(&mut b);
            assert!((pa - pb).abs() < 1e-15);
        }
    }
}
