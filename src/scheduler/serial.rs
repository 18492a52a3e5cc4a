//! Serial baseline scheduler.
//!
//! # Algorithm
//!
//! 1. Order works topologically (parents before children).
//! 2. Execute one work at a time: each work starts when the previous one
//!    finishes, so precedence and contractor capacity hold trivially.
//! 3. Per work, draw a crew from the contractor pool: for every binding
//!    requirement, `min(available, max_count)` workers of that kind.
//! 4. Duration comes from static estimation; an unsatisfiable requirement
//!    makes the work — and the whole schedule — infinite.
//!
//! Completion time is monotone non-increasing in every contractor count:
//! assignments are capped at `max_count`, so extra workers never slow a
//! work down. The resource search relies on this.

use crate::models::{Contractor, Schedule, ScheduledWork, Time, Worker, WorkGraph, WorkUnit};

use super::Scheduler;

/// One-work-at-a-time scheduler with greedy crew assignment.
#[derive(Debug, Clone, Copy, Default)]
pub struct SerialScheduler;

impl SerialScheduler {
    /// Creates a serial scheduler.
    pub fn new() -> Self {
        Self
    }

    /// Draws the crew for one work unit from the contractor pool.
    ///
    /// Assigns `min(available, max_count)` workers per binding requirement.
    /// Shortfalls below `min_count` are not resolved here — estimation
    /// reports them as infinite duration.
    fn crew_for(&self, unit: &WorkUnit, contractor: &Contractor) -> Vec<Worker> {
        unit.worker_reqs
            .iter()
            .filter(|req| req.is_binding())
            .map(|req| match contractor.worker(&req.kind) {
                Some(pool) => pool.with_count(pool.count.min(req.max_count)),
                None => Worker::new(req.kind.clone(), 0, 0.0),
            })
            .collect()
    }
}

impl Scheduler for SerialScheduler {
    fn schedule(&self, graph: &WorkGraph, contractor: &Contractor) -> Schedule {
        let mut schedule = Schedule::new();
        let mut at = Time::ZERO;

        for unit in graph.topological_order() {
            let crew = self.crew_for(unit, contractor);
            let duration = unit.estimate_static(&crew);
            let finish = at + duration;
            schedule.push(ScheduledWork::new(&unit.id, at, finish, crew));
            at = finish;
        }

        schedule
    }

    fn estimate_completion_time(&self, graph: &WorkGraph, contractor: &Contractor) -> Time {
        graph
            .topological_order()
            .into_iter()
            .map(|unit| unit.estimate_static(&self.crew_for(unit, contractor)))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WorkerReq;

    fn chain_graph() -> WorkGraph {
        WorkGraph::new(vec![
            WorkUnit::new("dig").with_req(WorkerReq::new("digger", 60.0, 1, 6)),
            WorkUnit::new("pour").with_req(WorkerReq::new("mason", 100.0, 2, 10)),
        ])
        .with_edge("dig", "pour")
    }

    fn full_crew() -> Contractor {
        Contractor::new("site")
            .with_worker(Worker::new("digger", 6, 1.0))
            .with_worker(Worker::new("mason", 10, 2.0))
    }

    #[test]
    fn test_serial_chain_sums_durations() {
        let graph = chain_graph();
        let contractor = full_crew();
        let scheduler = SerialScheduler::new();

        let schedule = scheduler.schedule(&graph, &contractor);
        assert_eq!(schedule.work_count(), 2);

        let dig = schedule.work("dig").unwrap();
        let pour = schedule.work("pour").unwrap();
        assert_eq!(dig.start, Time::ZERO);
        assert_eq!(pour.start, dig.finish);
        assert_eq!(schedule.finish_time(), pour.finish);
    }

    #[test]
    fn test_crew_capped_at_max_count() {
        let graph = WorkGraph::new(vec![
            WorkUnit::new("small").with_req(WorkerReq::new("mason", 10.0, 1, 3)),
        ]);
        let scheduler = SerialScheduler::new();

        let base = Contractor::new("c").with_worker(Worker::new("mason", 3, 1.0));
        let oversized = Contractor::new("c").with_worker(Worker::new("mason", 30, 1.0));

        // Workers past max_count are never assigned, so the durations match.
        assert_eq!(
            scheduler.completion_time(&graph, &base),
            scheduler.completion_time(&graph, &oversized)
        );
        let assigned = &scheduler.schedule(&graph, &oversized).works[0].workers[0];
        assert_eq!(assigned.count, 3);
    }

    #[test]
    fn test_missing_kind_is_infeasible() {
        let graph = chain_graph();
        let contractor = Contractor::new("no-masons")
            .with_worker(Worker::new("digger", 6, 1.0));
        let scheduler = SerialScheduler::new();

        assert!(scheduler.completion_time(&graph, &contractor).is_inf());
    }

    #[test]
    fn test_below_min_count_is_infeasible() {
        let graph = chain_graph();
        let contractor = Contractor::new("short")
            .with_worker(Worker::new("digger", 6, 1.0))
            .with_worker(Worker::new("mason", 1, 2.0));
        let scheduler = SerialScheduler::new();

        assert!(scheduler.completion_time(&graph, &contractor).is_inf());
    }

    #[test]
    fn test_dry_path_agrees_with_full_schedule() {
        let graph = chain_graph();
        let contractor = full_crew();
        let scheduler = SerialScheduler::new();

        assert_eq!(
            scheduler.estimate_completion_time(&graph, &contractor),
            scheduler.completion_time(&graph, &contractor)
        );
    }

    #[test]
    fn test_more_workers_never_slower() {
        let graph = chain_graph();
        let scheduler = SerialScheduler::new();
        let mut prev = Time::inf();
        for masons in 2..=10 {
            let contractor = Contractor::new("c")
                .with_worker(Worker::new("digger", 6, 1.0))
                .with_worker(Worker::new("mason", masons, 2.0));
            let t = scheduler.completion_time(&graph, &contractor);
            assert!(t <= prev, "masons={masons}: {t} > {prev}");
            prev = t;
        }
    }

    #[test]
    fn test_service_units_take_no_time() {
        let graph = WorkGraph::new(vec![
            WorkUnit::service("start"),
            WorkUnit::new("dig").with_req(WorkerReq::new("digger", 60.0, 1, 6)),
        ])
        .with_edge("start", "dig");
        let contractor = Contractor::new("c").with_worker(Worker::new("digger", 6, 1.0));
        let scheduler = SerialScheduler::new();

        let schedule = scheduler.schedule(&graph, &contractor);
        assert_eq!(schedule.work("start").unwrap().duration(), Time::ZERO);
    }
}
