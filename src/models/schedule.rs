//! Schedule (solution) model.
//!
//! A schedule is the materialized output of a scheduler: per-work start and
//! finish times plus the crew assigned to each work unit. A schedule whose
//! finish time is `Time::inf()` records that the plan cannot complete.

use serde::{Deserialize, Serialize};

use super::{Time, Worker};

/// One scheduled work unit: its time window and assigned crew.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledWork {
    /// ID of the work unit.
    pub work_id: String,
    /// Start time.
    pub start: Time,
    /// Finish time; `Time::inf()` when the work cannot complete.
    pub finish: Time,
    /// Crew drawn from the contractor pool, one record per kind.
    pub workers: Vec<Worker>,
}

impl ScheduledWork {
    /// Creates a scheduled work entry.
    pub fn new(work_id: impl Into<String>, start: Time, finish: Time, workers: Vec<Worker>) -> Self {
        Self {
            work_id: work_id.into(),
            start,
            finish,
            workers,
        }
    }

    /// Duration of the work (infinite when the finish is infinite).
    pub fn duration(&self) -> Time {
        if self.finish.is_inf() {
            Time::inf()
        } else {
            Time::new(self.finish.ticks() - self.start.ticks())
        }
    }
}

/// A complete schedule.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Schedule {
    /// Scheduled works, in execution order.
    pub works: Vec<ScheduledWork>,
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a scheduled work.
    pub fn push(&mut self, work: ScheduledWork) {
        self.works.push(work);
    }

    /// Looks up the entry for a work unit.
    pub fn work(&self, work_id: &str) -> Option<&ScheduledWork> {
        self.works.iter().find(|w| w.work_id == work_id)
    }

    /// Number of scheduled works.
    pub fn work_count(&self) -> usize {
        self.works.len()
    }

    /// Project completion time: the latest finish, `Time::ZERO` when empty.
    pub fn finish_time(&self) -> Time {
        self.works
            .iter()
            .map(|w| w.finish)
            .max()
            .unwrap_or(Time::ZERO)
    }
}
