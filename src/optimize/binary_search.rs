//! Binary-search resource optimizer.
//!
//! Finds the smallest contractor (per-kind worker counts) whose schedule
//! meets a deadline. Candidates map to a feasibility-threshold objective:
//! a candidate scores its headcount when the scheduler's completion time
//! meets the deadline, and an above-any-bracket sentinel otherwise. The
//! smallest feasible count is then the unique minimizer of a unimodal
//! integer objective, which is exactly what the dichotomy primitives find.
//!
//! The dichotomy result is only guaranteed to land within the final
//! width-≤2 bracket, so every coordinate is walked to the exact
//! feasibility boundary afterwards.

use std::collections::BTreeMap;

use crate::models::{AgentCounts, Contractor, Time, WorkGraph};
use crate::scheduler::Scheduler;

use super::search::{coordinate_descent, dichotomy_int};

/// Bracket strategy of the binary-search optimizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BinarySearchOptimizationType {
    /// One scalar dichotomy over a uniform crew scale clamped to the
    /// per-kind upper bounds. Cheapest, coarsest.
    Fast,
    /// Coordinate descent over the per-kind count vector.
    ItemByItem,
    /// `Fast` first; its result becomes the descent's upper bounds.
    #[default]
    ItemByItemFastInit,
}

/// Search-space bounds, one entry per resource kind.
///
/// Derivation is a policy, not a formula: bounds come either from the
/// work graph's aggregate requirement maxima or verbatim from manually
/// supplied agent counts.
#[derive(Debug, Clone)]
pub struct SearchBounds {
    kinds: Vec<String>,
    lo: Vec<i64>,
    hi: Vec<i64>,
}

impl SearchBounds {
    /// Bounds derived from the graph: per kind, zero up to the aggregate
    /// requirement maximum.
    pub fn from_graph(graph: &WorkGraph) -> Self {
        Self::from_counts(&graph.aggregate_max_counts())
    }

    /// Bounds anchored at manually supplied agent counts.
    pub fn from_manual(agents: &AgentCounts) -> Self {
        Self::from_counts(agents)
    }

    fn from_counts(upper: &AgentCounts) -> Self {
        let kinds: Vec<String> = upper.keys().cloned().collect();
        let hi: Vec<i64> = upper.values().map(|&c| c as i64).collect();
        let lo = vec![0; kinds.len()];
        Self { kinds, lo, hi }
    }

    /// The contractor at the upper bounds — the most resourced candidate
    /// in the search space.
    fn upper_contractor(&self, productivity: f64) -> Contractor {
        Contractor::from_counts("optimized", &self.counts(&self.hi), productivity)
    }

    fn counts(&self, vector: &[i64]) -> AgentCounts {
        self.kinds
            .iter()
            .cloned()
            .zip(vector.iter().map(|&c| c.max(0) as u32))
            .collect::<BTreeMap<_, _>>()
    }
}

/// Deadline-constrained resource optimizer over a scheduler oracle.
pub struct BinarySearchOptimizer<'s, S: Scheduler> {
    scheduler: &'s S,
    method: BinarySearchOptimizationType,
    worker_productivity: f64,
}

impl<'s, S: Scheduler> BinarySearchOptimizer<'s, S> {
    /// Creates an optimizer over the given scheduler.
    pub fn new(scheduler: &'s S, method: BinarySearchOptimizationType) -> Self {
        Self {
            scheduler,
            method,
            worker_productivity: 1.0,
        }
    }

    /// Sets the per-worker rate used for candidate contractors.
    pub fn with_worker_productivity(mut self, productivity: f64) -> Self {
        self.worker_productivity = productivity;
        self
    }

    /// Searches for the smallest contractor meeting `deadline`.
    ///
    /// `manual_workers`, when supplied, anchors the search bounds instead
    /// of the graph-derived requirement maxima. `dry_resources` routes
    /// candidate evaluation through the scheduler's estimation-only path.
    ///
    /// Returns the winning contractor with its full (non-dry) completion
    /// time, or `None` when even the upper-bound contractor misses the
    /// deadline.
    pub fn optimize(
        &self,
        graph: &WorkGraph,
        deadline: Time,
        manual_workers: Option<&AgentCounts>,
        dry_resources: bool,
    ) -> Option<(Contractor, Time)> {
        let bounds = match manual_workers {
            Some(agents) => SearchBounds::from_manual(agents),
            None => SearchBounds::from_graph(graph),
        };

        // No feasible vector exists when maximum resources already miss
        // the deadline.
        let upper = bounds.upper_contractor(self.worker_productivity);
        if self.evaluate(graph, &upper, dry_resources) > deadline {
            return None;
        }

        let vector = match self.method {
            BinarySearchOptimizationType::Fast => {
                self.fast_scale(graph, deadline, &bounds, dry_resources)
            }
            BinarySearchOptimizationType::ItemByItem => {
                self.item_by_item(graph, deadline, &bounds, dry_resources)
            }
            BinarySearchOptimizationType::ItemByItemFastInit => {
                let fast = self.fast_scale(graph, deadline, &bounds, dry_resources);
                let tightened = SearchBounds {
                    kinds: bounds.kinds.clone(),
                    lo: bounds.lo.clone(),
                    hi: fast,
                };
                self.item_by_item(graph, deadline, &tightened, dry_resources)
            }
        };

        let contractor =
            Contractor::from_counts("optimized", &bounds.counts(&vector), self.worker_productivity);
        let achieved = self.scheduler.completion_time(graph, &contractor);
        (achieved <= deadline).then_some((contractor, achieved))
    }

    /// Scalar dichotomy over a uniform crew scale: every kind gets
    /// `min(hi, scale)` workers.
    fn fast_scale(
        &self,
        graph: &WorkGraph,
        deadline: Time,
        bounds: &SearchBounds,
        dry: bool,
    ) -> Vec<i64> {
        let max_scale = bounds.hi.iter().copied().max().unwrap_or(0);
        let clamp = |scale: i64| -> Vec<i64> {
            bounds.hi.iter().map(|&h| h.min(scale)).collect()
        };

        let mut feasible = |scale: i64| self.is_feasible(graph, deadline, bounds, &clamp(scale), dry);
        let sentinel = max_scale + 1;
        let found = dichotomy_int(0, max_scale, |scale| {
            if feasible(scale) {
                scale
            } else {
                sentinel
            }
        });
        let scale = lowest_feasible(found, 0, max_scale, &mut feasible);
        clamp(scale)
    }

    /// Coordinate descent over per-kind counts, each coordinate refined to
    /// its exact feasibility boundary.
    fn item_by_item(
        &self,
        graph: &WorkGraph,
        deadline: Time,
        bounds: &SearchBounds,
        dry: bool,
    ) -> Vec<i64> {
        let sentinel: i64 = bounds.hi.iter().sum::<i64>() + 1;
        let objective = |vector: &[i64]| {
            if self.is_feasible(graph, deadline, bounds, vector, dry) {
                vector.iter().sum::<i64>()
            } else {
                sentinel
            }
        };
        let mut vector = coordinate_descent(
            &bounds.lo,
            &bounds.hi,
            |lo, hi, f| dichotomy_int(lo, hi, f),
            objective,
        );

        // Walk each count to its exact boundary; the dichotomy midpoint can
        // sit one step off on either side.
        for i in 0..vector.len() {
            let mut feasible = |count: i64| {
                let mut candidate = vector.clone();
                candidate[i] = count;
                self.is_feasible(graph, deadline, bounds, &candidate, dry)
            };
            vector[i] = lowest_feasible(vector[i], bounds.lo[i], bounds.hi[i], &mut feasible);
        }
        vector
    }

    fn is_feasible(
        &self,
        graph: &WorkGraph,
        deadline: Time,
        bounds: &SearchBounds,
        vector: &[i64],
        dry: bool,
    ) -> bool {
        let contractor =
            Contractor::from_counts("candidate", &bounds.counts(vector), self.worker_productivity);
        self.evaluate(graph, &contractor, dry) <= deadline
    }

    fn evaluate(&self, graph: &WorkGraph, contractor: &Contractor, dry: bool) -> Time {
        if dry {
            self.scheduler.estimate_completion_time(graph, contractor)
        } else {
            self.scheduler.completion_time(graph, contractor)
        }
    }
}

/// Walks `start` to the smallest value in `[lo, hi]` satisfying `feasible`,
/// assuming feasibility is monotone in the count. Returns `hi` when even it
/// is the first feasible value reached, or the original bound when nothing
/// feasible is found (the caller re-checks the final vector).
fn lowest_feasible(
    start: i64,
    lo: i64,
    hi: i64,
    feasible: &mut impl FnMut(i64) -> bool,
) -> i64 {
    let mut x = start.clamp(lo, hi);
    while x < hi && !feasible(x) {
        x += 1;
    }
    while x > lo && feasible(x - 1) {
        x -= 1;
    }
    x
}
