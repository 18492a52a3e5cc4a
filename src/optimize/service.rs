//! High-level entry points for resource optimization.
//!
//! Thin front over the optimizer machinery: pick a technique, hand over a
//! scheduler, a work graph and a deadline, get back the smallest feasible
//! contractor or an infeasibility signal.

use std::error::Error;
use std::fmt;

use crate::models::{AgentCounts, Contractor, Time, WorkGraph};
use crate::scheduler::Scheduler;

use super::binary_search::{BinarySearchOptimizationType, BinarySearchOptimizer};

/// Resource optimization technique.
///
/// A closed choice: dispatch matches exhaustively, so adding a technique
/// is a compile-time decision, never a silent fallthrough.
///
/// Only `BinarySearch` is implemented; `NewtonCG` fails fast with
/// [`OptimizationError::NotImplemented`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceOptimizationType {
    /// Bracketed dichotomy / coordinate-descent search.
    BinarySearch,
    /// Newton-conjugate-gradient search. Not implemented.
    NewtonCG,
}

/// Errors of the optimization service.
///
/// Infeasibility is not an error — it is the `None` result. This type
/// covers paths that must fail loudly instead of searching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptimizationError {
    /// The requested optimization path has no implementation.
    NotImplemented(&'static str),
}

impl fmt::Display for OptimizationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptimizationError::NotImplemented(what) => {
                write!(f, "{what} has not been implemented")
            }
        }
    }
}

impl Error for OptimizationError {}

/// Applies binary-search resource optimization to the work graph.
///
/// Searches for the smallest contractor whose schedule under `scheduler`
/// finishes by `deadline`. `manual_workers` anchors the search bounds when
/// supplied; otherwise bounds derive from the graph's requirement maxima.
/// `dry_resources` evaluates candidates through the scheduler's
/// estimation-only path.
///
/// Returns `None` when no contractor within the bounds meets the deadline.
pub fn apply_binary_optimization<S: Scheduler>(
    scheduler: &S,
    work_graph: &WorkGraph,
    deadline: Time,
    method: BinarySearchOptimizationType,
    manual_workers: Option<&AgentCounts>,
    dry_resources: bool,
) -> Option<(Contractor, Time)> {
    BinarySearchOptimizer::new(scheduler, method).optimize(
        work_graph,
        deadline,
        manual_workers,
        dry_resources,
    )
}

/// Gradient (Newton-CG) resource optimization. Not implemented.
///
/// Always fails with [`OptimizationError::NotImplemented`], before any
/// search machinery is touched, so "not built" can never be mistaken for
/// "no feasible plan".
pub fn apply_gradient_optimization<S: Scheduler>(
    _scheduler: &S,
    _work_graph: &WorkGraph,
    _deadline: Time,
    _manual_workers: Option<&AgentCounts>,
    _dry_resources: bool,
) -> Result<Option<(Contractor, Time)>, OptimizationError> {
    Err(OptimizationError::NotImplemented(
        "gradient resource optimization",
    ))
}

/// Dispatches to the optimization technique selected by `optimization_type`.
///
/// `Ok(None)` means the search ran and found no feasible contractor;
/// `Err(_)` means the selected path could not run at all.
pub fn apply_resource_optimization<S: Scheduler>(
    optimization_type: ResourceOptimizationType,
    scheduler: &S,
    work_graph: &WorkGraph,
    deadline: Time,
    manual_workers: Option<&AgentCounts>,
    dry_resources: bool,
) -> Result<Option<(Contractor, Time)>, OptimizationError> {
    match optimization_type {
        ResourceOptimizationType::BinarySearch => Ok(apply_binary_optimization(
            scheduler,
            work_graph,
            deadline,
            BinarySearchOptimizationType::ItemByItemFastInit,
            manual_workers,
            dry_resources,
        )),
        ResourceOptimizationType::NewtonCG => apply_gradient_optimization(
            scheduler,
            work_graph,
            deadline,
            manual_workers,
            dry_resources,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Worker, WorkerReq, WorkUnit};
    use crate::scheduler::SerialScheduler;

    fn graph() -> WorkGraph {
        WorkGraph::new(vec![
            WorkUnit::new("wall").with_req(WorkerReq::new("mason", 100.0, 2, 10)),
        ])
    }

    fn deadline_for(masons: u32) -> Time {
        let contractor = Contractor::new("c").with_worker(Worker::new("mason", masons, 1.0));
        SerialScheduler::new().completion_time(&graph(), &contractor)
    }

    #[test]
    fn test_binary_dispatch_finds_plan() {
        let scheduler = SerialScheduler::new();
        let result = apply_resource_optimization(
            ResourceOptimizationType::BinarySearch,
            &scheduler,
            &graph(),
            deadline_for(5),
            None,
            false,
        )
        .unwrap();

        let (contractor, achieved) = result.unwrap();
        assert_eq!(contractor.count_of("mason"), 5);
        assert!(achieved <= deadline_for(5));
    }

    #[test]
    fn test_binary_dispatch_reports_infeasible() {
        let scheduler = SerialScheduler::new();
        let impossible = Time::new(deadline_for(10).ticks() - 1);
        let result = apply_resource_optimization(
            ResourceOptimizationType::BinarySearch,
            &scheduler,
            &graph(),
            impossible,
            None,
            false,
        )
        .unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_gradient_always_fails() {
        let scheduler = SerialScheduler::new();
        for deadline in [Time::ZERO, Time::new(1_000_000), Time::inf()] {
            let err = apply_gradient_optimization(&scheduler, &graph(), deadline, None, false)
                .unwrap_err();
            assert!(matches!(err, OptimizationError::NotImplemented(_)));
        }
    }

    #[test]
    fn test_newton_cg_dispatch_fails_distinctly() {
        let scheduler = SerialScheduler::new();
        let err = apply_resource_optimization(
            ResourceOptimizationType::NewtonCG,
            &scheduler,
            &graph(),
            Time::new(1_000_000),
            None,
            false,
        )
        .unwrap_err();
        // Not-implemented is an error, never confusable with Ok(None).
        assert_eq!(
            err.to_string(),
            "gradient resource optimization has not been implemented"
        );
    }
}
