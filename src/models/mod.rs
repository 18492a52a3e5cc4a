//! Resource-planning domain models.
//!
//! Core data types for work graphs, crews, and schedules. Domain-agnostic
//! within project scheduling — the same types describe construction works,
//! maintenance campaigns, or any volume-of-work/crew-size problem.
//!
//! # Domain Mappings
//!
//! | siteplan | Construction | Maintenance | Logistics |
//! |------------|--------------|-------------|-----------|
//! | WorkUnit | Work package | Repair job | Handling step |
//! | WorkerReq | Crew requirement | Skill demand | Team demand |
//! | Worker | Crew pool | Technicians | Handlers |
//! | Contractor | Contractor | Service firm | Operator |

mod contractor;
mod graph;
mod requirements;
mod schedule;
mod time;
mod work;
mod worker;

pub use contractor::{AgentCounts, Contractor};
pub use graph::WorkGraph;
pub use requirements::WorkerReq;
pub use schedule::{Schedule, ScheduledWork};
pub use time::Time;
pub use work::{communication_coefficient, WorkUnit};
pub use worker::{ProductivityModel, StaticProductivity, StochasticProductivity, Worker};
