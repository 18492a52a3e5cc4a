//! Deadline-constrained resource optimization.
//!
//! Answers one question: what is the smallest workforce that still meets
//! the deadline? The scheduler is consumed as a completion-time oracle;
//! the search never looks inside it.
//!
//! # Submodules
//!
//! - [`search`]: Generic bracketed minimizers — dichotomy over reals and
//!   integers, single-sweep coordinate descent
//! - `binary_search`: The resource optimizer built on those primitives
//! - `service`: Entry-point functions and technique dispatch
//!
//! # Search shape
//!
//! Completion time is monotone non-increasing in every per-kind worker
//! count, so "meets the deadline" is a half-line per coordinate and the
//! smallest feasible count is the minimizer of a feasibility-threshold
//! objective. One optimization run is strictly sequential — every
//! candidate depends on the previous oracle answer — and pure: distinct
//! runs share no state.

mod binary_search;
pub mod search;
mod service;

pub use binary_search::{BinarySearchOptimizationType, BinarySearchOptimizer, SearchBounds};
pub use service::{
    apply_binary_optimization, apply_gradient_optimization, apply_resource_optimization,
    OptimizationError, ResourceOptimizationType,
};
