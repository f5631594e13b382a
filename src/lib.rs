//! Maintenance crew scheduling for mission-ready planes.
//!
//! Assigns qualified workers to plane maintenance tasks within a shared
//! working-hours budget and reports which planes become deployable. The
//! problem is formulated as a 0/1 integer program, solved exactly, and
//! decoded into a per-worker schedule.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Plane`, `Worker`, `Qualification`,
//!   `TaskDefinition`, `TaskCatalog`, `MaintenanceRequest`, `MaintenanceOutcome`
//! - **`validation`**: Input integrity checks (unknown tasks, duplicate names)
//! - **`ilp`**: Program builder, eligibility mask, solver bridge, decoder
//! - **`scheduler`**: End-to-end facade and KPIs
//!
//! # Example
//!
//! ```
//! use plane_maintenance::models::{MaintenanceRequest, Plane, TaskCatalog, Worker};
//! use plane_maintenance::scheduler::schedule_maintenance;
//!
//! let catalog = TaskCatalog::standard();
//! let request = MaintenanceRequest::new()
//!     .with_plane(Plane::new("JSF").with_task("propellers"))
//!     .with_worker(Worker::new("Arthur").with_qualifications(["FAA_03", "FAA_11", "FAA_12"]));
//!
//! let outcome = schedule_maintenance(&request, &catalog)?;
//! assert!(outcome.is_deployable("JSF"));
//! # Ok::<(), plane_maintenance::Error>(())
//! ```

pub mod error;
pub mod ilp;
pub mod models;
pub mod scheduler;
pub mod validation;

pub use error::{
    ConfigurationError, ConfigurationIssue, ConfigurationIssueKind, Error, ModelNotOptimalError,
    Result,
};
