//! Maintenance scheduler and KPI evaluation.
//!
//! `MaintenanceScheduler` runs build → solve → decode for one request.
//! The solve is exact: the outcome maximises the number of deployable
//! planes, with ties broken by the solver.
//!
//! `ScheduleKpi` summarises an outcome: deployable rate, crew hours,
//! utilisation against the budget.

mod kpi;
mod maintenance;

pub use kpi::ScheduleKpi;
pub use maintenance::{schedule_maintenance, MaintenanceScheduler};
