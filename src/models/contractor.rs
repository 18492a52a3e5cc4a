//! Contractor model.
//!
//! A contractor is a global pool of workers, one pooled record per resource
//! kind. It is the search variable of resource optimization: the optimizer
//! proposes per-kind headcounts, schedulers draw crews from the pool.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::Worker;

/// Bare per-kind headcounts: the resource search vector and the shape of
/// manual agent input. `BTreeMap` keeps kinds in a stable order, which is
/// also the coordinate order of the vector search.
pub type AgentCounts = BTreeMap<String, u32>;

/// A pooled workforce, one `Worker` record per resource kind.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Contractor {
    /// Display name.
    pub name: String,
    /// Worker pools keyed by resource kind.
    pub workers: BTreeMap<String, Worker>,
}

impl Contractor {
    /// Creates an empty contractor.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            workers: BTreeMap::new(),
        }
    }

    /// Adds (or replaces) the pool for one resource kind.
    pub fn with_worker(mut self, worker: Worker) -> Self {
        self.workers.insert(worker.kind.clone(), worker);
        self
    }

    /// Builds a contractor from bare headcounts with a uniform per-worker
    /// rate.
    pub fn from_counts(name: impl Into<String>, counts: &AgentCounts, productivity: f64) -> Self {
        let mut contractor = Self::new(name);
        for (kind, &count) in counts {
            contractor
                .workers
                .insert(kind.clone(), Worker::new(kind.clone(), count, productivity));
        }
        contractor
    }

    /// Headcount available for a resource kind (zero when absent).
    pub fn count_of(&self, kind: &str) -> u32 {
        self.workers.get(kind).map(|w| w.count).unwrap_or(0)
    }

    /// The worker pool for a resource kind.
    pub fn worker(&self, kind: &str) -> Option<&Worker> {
        self.workers.get(kind)
    }

    /// Total headcount across all kinds.
    pub fn total_headcount(&self) -> u64 {
        self.workers.values().map(|w| w.count as u64).sum()
    }

    /// The bare per-kind headcount view.
    pub fn counts(&self) -> AgentCounts {
        self.workers
            .iter()
            .map(|(kind, w)| (kind.clone(), w.count))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contractor_builder() {
        let c = Contractor::new("main")
            .with_worker(Worker::new("mason", 5, 2.0))
            .with_worker(Worker::new("driver", 2, 1.0));

        assert_eq!(c.count_of("mason"), 5);
        assert_eq!(c.count_of("driver"), 2);
        assert_eq!(c.count_of("crane"), 0);
        assert_eq!(c.total_headcount(), 7);
    }

    #[test]
    fn test_from_counts() {
        let mut counts = AgentCounts::new();
        counts.insert("mason".into(), 4);
        counts.insert("driver".into(), 1);

        let c = Contractor::from_counts("derived", &counts, 1.0);
        assert_eq!(c.count_of("mason"), 4);
        assert!((c.worker("mason").unwrap().productivity - 1.0).abs() < 1e-12);
        assert_eq!(c.counts(), counts);
    }

    #[test]
    fn test_kind_order_is_stable() {
        let c = Contractor::new("main")
            .with_worker(Worker::new("zeta", 1, 1.0))
            .with_worker(Worker::new("alpha", 1, 1.0));
        let kinds: Vec<&String> = c.workers.keys().collect();
        assert_eq!(kinds, ["alpha", "zeta"]);
    }
}
