//! Crew requirement model.
//!
//! A work unit declares, per resource kind, how many workers it accepts
//! and how much work that kind must perform.

use serde::{Deserialize, Serialize};

/// A single-kind crew requirement of a work unit.
///
/// `min_count` is the smallest crew that can perform the work at all;
/// `max_count` is the largest crew the work site accommodates. `volume`
/// is the amount of work this kind must perform, in the same units the
/// worker productivity rate is expressed in.
///
/// A requirement with `min_count == 0` is optional: the work proceeds
/// without that kind and the requirement contributes no duration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkerReq {
    /// Resource kind (e.g., "mason", "driver", "crane").
    pub kind: String,
    /// Work volume this kind must perform.
    pub volume: f64,
    /// Minimum crew size; below it the work cannot start.
    pub min_count: u32,
    /// Maximum useful crew size; also parameterizes the communication penalty.
    pub max_count: u32,
}

impl WorkerReq {
    /// Creates a requirement.
    ///
    /// # Panics
    /// When `max_count < min_count` or `volume` is negative — both are
    /// caller configuration errors, not recoverable conditions.
    pub fn new(kind: impl Into<String>, volume: f64, min_count: u32, max_count: u32) -> Self {
        assert!(
            max_count >= min_count,
            "max_count ({max_count}) must be >= min_count ({min_count})"
        );
        assert!(volume >= 0.0, "requirement volume must be non-negative");
        Self {
            kind: kind.into(),
            volume,
            min_count,
            max_count,
        }
    }

    /// Whether the requirement binds scheduling (a zero-min requirement
    /// is optional and never gates the work).
    pub fn is_binding(&self) -> bool {
        self.min_count > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requirement_fields() {
        let req = WorkerReq::new("mason", 100.0, 2, 10);
        assert_eq!(req.kind, "mason");
        assert_eq!(req.min_count, 2);
        assert_eq!(req.max_count, 10);
        assert!((req.volume - 100.0).abs() < 1e-12);
        assert!(req.is_binding());
    }

    #[test]
    fn test_optional_requirement() {
        let req = WorkerReq::new("helper", 5.0, 0, 4);
        assert!(!req.is_binding());
    }

    #[test]
    #[should_panic(expected = "max_count")]
    fn test_inverted_counts_rejected() {
        WorkerReq::new("mason", 1.0, 5, 2);
    }

    #[test]
    #[should_panic(expected = "volume")]
    fn test_negative_volume_rejected() {
        WorkerReq::new("mason", -1.0, 1, 2);
    }
}
