//! Work unit model and duration estimation.
//!
//! A work unit is the schedulable unit of a project: a volume of work with
//! per-kind crew requirements. Duration estimation turns a concrete worker
//! allocation into a `Time`, applying the communication coefficient that
//! models coordination overhead between crews sharing one site.
//!
//! # Estimation
//!
//! Each binding requirement is satisfied independently; the unit's duration
//! is gated by its slowest requirement. An allocation below a requirement's
//! minimum crew, or a collapsed work rate, makes the whole unit infeasible
//! (`Time::inf()`).
//!
//! # Reference
//! Brooks (1975), "The Mythical Man-Month" (crew coordination overhead)

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::{ProductivityModel, StaticProductivity, StochasticProductivity, Time, Worker, WorkerReq};

/// A unit of work in the project graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkUnit {
    /// Unique work identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Crew requirements, one per resource kind involved.
    pub worker_reqs: Vec<WorkerReq>,
    /// Grouping label for reporting.
    pub group: String,
    /// Overall physical volume of the work.
    pub volume: f64,
    /// Service units (milestones, handovers) carry no work of their own.
    pub is_service_unit: bool,
}

impl WorkUnit {
    /// Creates a work unit with the given ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            worker_reqs: Vec::new(),
            group: "default".into(),
            volume: 1.0,
            is_service_unit: false,
        }
    }

    /// Creates a zero-volume service unit (milestone).
    pub fn service(id: impl Into<String>) -> Self {
        let mut unit = Self::new(id);
        unit.volume = 0.0;
        unit.is_service_unit = true;
        unit
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the reporting group.
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = group.into();
        self
    }

    /// Sets the overall volume.
    pub fn with_volume(mut self, volume: f64) -> Self {
        self.volume = volume;
        self
    }

    /// Adds a crew requirement.
    pub fn with_req(mut self, req: WorkerReq) -> Self {
        self.worker_reqs.push(req);
        self
    }

    /// Estimates duration under fixed per-worker rates.
    pub fn estimate_static(&self, workers: &[Worker]) -> Time {
        self.estimate_with(workers, &mut StaticProductivity)
    }

    /// Estimates duration with per-call sampled rates from `rng`.
    pub fn estimate_stochastic<R: Rng>(&self, workers: &[Worker], rng: &mut R) -> Time {
        self.estimate_with(workers, &mut StochasticProductivity::new(rng))
    }

    /// Abstract estimator over a productivity strategy.
    ///
    /// For every binding requirement: pool the allocation records of its
    /// kind, check the minimum crew, weight the per-worker rate by record
    /// count, scale by the communication coefficient, and floor-divide the
    /// requirement volume by the resulting rate. The unit's duration is the
    /// maximum over requirements, zero when none binds.
    pub fn estimate_with<P: ProductivityModel>(&self, workers: &[Worker], model: &mut P) -> Time {
        let mut duration = Time::ZERO;
        for req in self.worker_reqs.iter().filter(|r| r.is_binding()) {
            let pool: Vec<&Worker> = workers.iter().filter(|w| w.kind == req.kind).collect();
            let count: u32 = pool.iter().map(|w| w.count).sum();
            if count < req.min_count {
                return Time::inf();
            }
            let weighted_rate: f64 = pool
                .iter()
                .filter(|w| w.count > 0)
                .map(|w| model.productivity(w) * w.count as f64)
                .sum();
            let mean_rate = weighted_rate / count as f64;
            let crew_rate = mean_rate * communication_coefficient(count, req.max_count);
            if crew_rate <= 0.0 {
                return Time::inf();
            }
            duration = duration.max(Time::from_work(req.volume, crew_rate));
        }
        duration
    }
}

/// Effective crew count of `groups_count` crews sharing one site:
/// `sum over x = 1..n of (1 − (x−1)²/m²)`, in closed form
/// `(1/(6m²))·(−2n³ + 3n² + (6m² − 1)·n)`.
///
/// A single crew works at full efficiency; each additional crew contributes
/// with quadratically decreasing marginal efficiency, the decay governed by
/// the site's crew capacity `m`. Past `m + 1` crews the total effective
/// contribution itself declines and eventually turns negative, which the
/// estimator maps to infeasibility.
///
/// # Panics
/// When `max_groups == 0`; a requirement that admits zero crews must be
/// rejected before estimation.
pub fn communication_coefficient(groups_count: u32, max_groups: u32) -> f64 {
    assert!(max_groups >= 1, "max_groups must be at least 1");
    let n = groups_count as f64;
    let m = max_groups as f64;
    (-2.0 * n.powi(3) + 3.0 * n * n + (6.0 * m * m - 1.0) * n) / (6.0 * m * m)
}
