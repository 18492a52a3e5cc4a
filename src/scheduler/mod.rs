//! Scheduling oracle contract and baseline implementation.
//!
//! The resource optimizer only ever asks one question of a scheduler: given
//! this work graph and this contractor, when does the project finish? The
//! [`Scheduler`] trait captures that contract; [`SerialScheduler`] is the
//! baseline answer. Richer schedulers (parallel execution, resource
//! leveling) plug in through the same trait.
//!
//! # Reference
//! Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4

mod serial;

pub use serial::SerialScheduler;

use crate::models::{Contractor, Schedule, Time, WorkGraph};

/// A scheduling algorithm, seen by the optimizer as a completion-time
/// oracle.
///
/// Implementations must be deterministic for identical inputs and must
/// return `Time::inf()` as the completion time when the contractor cannot
/// complete the graph at all (for example, zero workers of a required
/// kind). A scheduler call may be expensive; it is synchronous by design
/// and callers wanting timeouts must wrap it themselves.
pub trait Scheduler {
    /// Produces a full schedule for the graph under the given contractor.
    fn schedule(&self, graph: &WorkGraph, contractor: &Contractor) -> Schedule;

    /// Project completion time under the given contractor.
    fn completion_time(&self, graph: &WorkGraph, contractor: &Contractor) -> Time {
        self.schedule(graph, contractor).finish_time()
    }

    /// Completion time without materializing per-work assignments — the
    /// cheap evaluation path for search iterations ("dry resources").
    ///
    /// Must agree with `completion_time` for implementations that have no
    /// cheaper path; the default simply delegates.
    fn estimate_completion_time(&self, graph: &WorkGraph, contractor: &Contractor) -> Time {
        self.completion_time(graph, contractor)
    }
}
