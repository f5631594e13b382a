//! Maintenance scheduling domain models.
//!
//! Provides the input types (planes, workers, the task catalog, one
//! request) and the decoded outcome.
//!
//! # Domain Mappings
//!
//! | plane-maintenance | General scheduling |
//! |-------------------|--------------------|
//! | Plane | Job (all operations must finish) |
//! | TaskDefinition | Operation type |
//! | Worker | Skilled resource |
//! | Qualification | Skill |
//! | MaintenanceOutcome | Schedule |

mod plane;
mod qualification;
mod request;
mod schedule;
mod task;
mod worker;

pub use plane::Plane;
pub use qualification::Qualification;
pub use request::{MaintenanceRequest, DEFAULT_WORKING_HOURS};
pub use schedule::{MaintenanceOutcome, WorkerSchedule};
pub use task::{TaskCatalog, TaskDefinition};
pub use worker::Worker;
