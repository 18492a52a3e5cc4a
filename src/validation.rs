//! Post-hoc schedule consistency checks.
//!
//! Verifies that a finished schedule respects its work graph and
//! contractor: every work scheduled, precedence order kept, crews within
//! requirement bounds and contractor capacity. These checks run after
//! scheduling or optimization; the optimizer itself never calls them.

use std::collections::HashSet;

use crate::models::{Contractor, Schedule, WorkGraph};

/// Validation outcome: `Ok(())` or every detected issue.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A schedule consistency error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of schedule consistency errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A graph work unit is missing from the schedule, or appears twice.
    UnscheduledWork,
    /// A work starts before one of its parents finishes.
    BrokenDependency,
    /// An assigned crew is smaller than the requirement minimum.
    CrewBelowRequirement,
    /// An assigned crew is larger than the requirement maximum.
    CrewAboveRequirement,
    /// An assigned crew exceeds what the contractor can supply.
    ContractorCapacityExceeded,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a schedule against its work graph and contractor.
///
/// Checks:
/// 1. Every graph work unit is scheduled exactly once.
/// 2. Parent finish ≤ child start for every precedence edge.
/// 3. Per work, the assigned crew of each required kind lies within
///    `[min_count, max_count]` (optional requirements skip the lower check).
/// 4. No assigned crew exceeds the contractor's capacity for its kind.
///
/// # Returns
/// `Ok(())` when all checks pass, `Err(errors)` with all detected issues.
pub fn validate_schedule(
    schedule: &Schedule,
    graph: &WorkGraph,
    contractor: &Contractor,
) -> ValidationResult {
    let mut errors = Vec::new();

    // Every work scheduled exactly once
    let mut seen = HashSet::new();
    for scheduled in &schedule.works {
        if !seen.insert(scheduled.work_id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnscheduledWork,
                format!("Work '{}' is scheduled more than once", scheduled.work_id),
            ));
        }
    }
    for unit in graph.nodes() {
        if !seen.contains(unit.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnscheduledWork,
                format!("Work '{}' is missing from the schedule", unit.id),
            ));
        }
    }

    // Precedence order
    for unit in graph.nodes() {
        let Some(child) = schedule.work(&unit.id) else {
            continue;
        };
        for parent_id in graph.parents_of(&unit.id) {
            let Some(parent) = schedule.work(parent_id) else {
                continue;
            };
            if parent.finish > child.start {
                errors.push(ValidationError::new(
                    ValidationErrorKind::BrokenDependency,
                    format!(
                        "Work '{}' starts at {} before parent '{}' finishes at {}",
                        unit.id, child.start, parent_id, parent.finish
                    ),
                ));
            }
        }
    }

    // Crews within requirement bounds and contractor capacity
    for unit in graph.nodes() {
        let Some(scheduled) = schedule.work(&unit.id) else {
            continue;
        };
        for req in &unit.worker_reqs {
            let assigned: u32 = scheduled
                .workers
                .iter()
                .filter(|w| w.kind == req.kind)
                .map(|w| w.count)
                .sum();
            if req.is_binding() && assigned < req.min_count {
                errors.push(ValidationError::new(
                    ValidationErrorKind::CrewBelowRequirement,
                    format!(
                        "Work '{}' has {} of kind '{}', requires at least {}",
                        unit.id, assigned, req.kind, req.min_count
                    ),
                ));
            }
            if assigned > req.max_count {
                errors.push(ValidationError::new(
                    ValidationErrorKind::CrewAboveRequirement,
                    format!(
                        "Work '{}' has {} of kind '{}', accepts at most {}",
                        unit.id, assigned, req.kind, req.max_count
                    ),
                ));
            }
        }
        for worker in &scheduled.workers {
            let capacity = contractor.count_of(&worker.kind);
            if worker.count > capacity {
                errors.push(ValidationError::new(
                    ValidationErrorKind::ContractorCapacityExceeded,
                    format!(
                        "Work '{}' uses {} of kind '{}', contractor supplies {}",
                        unit.id, worker.count, worker.kind, capacity
                    ),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Time, Worker, WorkerReq, WorkUnit};
    use crate::scheduler::{Scheduler, SerialScheduler};

    fn setup() -> (WorkGraph, Contractor, Schedule) {
        let graph = WorkGraph::new(vec![
            WorkUnit::new("dig").with_req(WorkerReq::new("digger", 60.0, 1, 6)),
            WorkUnit::new("pour").with_req(WorkerReq::new("mason", 100.0, 2, 10)),
        ])
        .with_edge("dig", "pour");
        let contractor = Contractor::new("site")
            .with_worker(Worker::new("digger", 6, 1.0))
            .with_worker(Worker::new("mason", 10, 2.0));
        let schedule = SerialScheduler::new().schedule(&graph, &contractor);
        (graph, contractor, schedule)
    }

    #[test]
    fn test_serial_schedule_is_valid() {
        let (graph, contractor, schedule) = setup();
        assert!(validate_schedule(&schedule, &graph, &contractor).is_ok());
    }

    #[test]
    fn test_missing_work_detected() {
        let (graph, contractor, mut schedule) = setup();
        schedule.works.pop();

        let errors = validate_schedule(&schedule, &graph, &contractor).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::UnscheduledWork));
    }

    #[test]
    fn test_duplicate_work_detected() {
        let (graph, contractor, mut schedule) = setup();
        let dup = schedule.works[0].clone();
        schedule.works.push(dup);

        let errors = validate_schedule(&schedule, &graph, &contractor).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::UnscheduledWork));
    }

    #[test]
    fn test_broken_dependency_detected() {
        let (graph, contractor, mut schedule) = setup();
        // Pull the child's start before its parent's finish.
        let child = schedule
            .works
            .iter_mut()
            .find(|w| w.work_id == "pour")
            .unwrap();
        child.start = Time::ZERO;

        let errors = validate_schedule(&schedule, &graph, &contractor).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::BrokenDependency));
    }

    #[test]
    fn test_starved_crew_detected() {
        let (graph, contractor, mut schedule) = setup();
        for scheduled in &mut schedule.works {
            for worker in &mut scheduled.workers {
                worker.count = 0;
            }
        }

        let errors = validate_schedule(&schedule, &graph, &contractor).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::CrewBelowRequirement));
    }

    #[test]
    fn test_oversized_crew_detected() {
        let (graph, contractor, mut schedule) = setup();
        for scheduled in &mut schedule.works {
            for worker in &mut scheduled.workers {
                worker.count = 100;
            }
        }

        let errors = validate_schedule(&schedule, &graph, &contractor).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::CrewAboveRequirement));
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::ContractorCapacityExceeded));
    }

    #[test]
    fn test_capacity_excess_detected_alone() {
        // Crew within requirement bounds but beyond the contractor pool.
        let graph = WorkGraph::new(vec![
            WorkUnit::new("dig").with_req(WorkerReq::new("digger", 60.0, 1, 8)),
        ]);
        let contractor = Contractor::new("site").with_worker(Worker::new("digger", 6, 1.0));
        let mut schedule = SerialScheduler::new().schedule(&graph, &contractor);
        schedule.works[0].workers[0].count = 7;

        let errors = validate_schedule(&schedule, &graph, &contractor).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors[0].kind,
            ValidationErrorKind::ContractorCapacityExceeded
        );
    }
}
