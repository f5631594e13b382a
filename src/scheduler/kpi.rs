//! Schedule quality metrics (KPIs).
//!
//! Computes readiness and crew-load indicators from a decoded outcome and
//! the request it answers.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Deployable Count | Planes with every task done |
//! | Deployable Rate | Deployable / total planes |
//! | Assigned Hours | Σ task duration per worker |
//! | Avg Utilization | Mean of assigned hours / working hours |
//! | Idle Workers | Workers with no assignment |

use std::collections::BTreeMap;

use crate::models::{MaintenanceOutcome, MaintenanceRequest, TaskCatalog};

/// Maintenance schedule performance indicators.
#[derive(Debug, Clone)]
pub struct ScheduleKpi {
    /// Number of deployable planes.
    pub deployable_count: usize,
    /// Fraction of planes deployable (0.0..1.0).
    pub deployable_rate: f64,
    /// Assigned hours per worker (every worker in the request).
    pub hours_by_worker: BTreeMap<String, u32>,
    /// Mean fraction of the hour budget used (0.0..1.0).
    pub avg_utilization: f64,
    /// Workers with nothing assigned.
    pub idle_workers: usize,
}

impl ScheduleKpi {
    /// Computes KPIs for `outcome`.
    pub fn calculate(
        outcome: &MaintenanceOutcome,
        request: &MaintenanceRequest,
        catalog: &TaskCatalog,
    ) -> Self {
        let deployable_count = outcome.deployable_planes.len();
        let deployable_rate = if request.planes.is_empty() {
            0.0
        } else {
            deployable_count as f64 / request.planes.len() as f64
        };

        let hours_by_worker: BTreeMap<String, u32> = request
            .workers
            .iter()
            .map(|w| (w.name.clone(), outcome.assigned_hours(&w.name, catalog)))
            .collect();

        let idle_workers = request
            .workers
            .iter()
            .filter(|w| !outcome.worker_schedule.contains_key(&w.name))
            .count();

        let avg_utilization = if hours_by_worker.is_empty() || request.working_hours == 0 {
            0.0
        } else {
            let budget = f64::from(request.working_hours);
            let sum: f64 = hours_by_worker.values().map(|&h| f64::from(h) / budget).sum();
            sum / hours_by_worker.len() as f64
        };

        Self {
            deployable_count,
            deployable_rate,
            hours_by_worker,
            avg_utilization,
            idle_workers,
        }
    }

    /// Whether the schedule meets the given quality thresholds.
    pub fn meets_thresholds(&self, min_deployable_rate: f64, min_utilization: f64) -> bool {
        self.deployable_rate >= min_deployable_rate && self.avg_utilization >= min_utilization
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Plane, TaskDefinition, Worker};

    fn setup() -> (MaintenanceOutcome, MaintenanceRequest, TaskCatalog) {
        let catalog = TaskCatalog::new()
            .with_task(TaskDefinition::new("wings").with_duration(2))
            .with_task(TaskDefinition::new("tail").with_duration(4));

        let request = MaintenanceRequest::new()
            .with_plane(Plane::new("F16").with_tasks(["wings", "tail"]))
            .with_plane(Plane::new("MiG").with_task("tail"))
            .with_worker(Worker::new("Pat"))
            .with_worker(Worker::new("Roy"))
            .with_working_hours(8);

        let mut outcome = MaintenanceOutcome::new();
        outcome.assign("Pat", "F16", "wings");
        outcome.assign("Pat", "F16", "tail");
        outcome.mark_deployable("F16");

        (outcome, request, catalog)
    }

    #[test]
    fn test_kpi_basic() {
        let (outcome, request, catalog) = setup();
        let kpi = ScheduleKpi::calculate(&outcome, &request, &catalog);

        assert_eq!(kpi.deployable_count, 1);
        assert!((kpi.deployable_rate - 0.5).abs() < 1e-10);
        assert_eq!(kpi.hours_by_worker["Pat"], 6);
        assert_eq!(kpi.hours_by_worker["Roy"], 0);
        assert_eq!(kpi.idle_workers, 1);
        // (6/8 + 0/8) / 2
        assert!((kpi.avg_utilization - 0.375).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_thresholds() {
        let (outcome, request, catalog) = setup();
        let kpi = ScheduleKpi::calculate(&outcome, &request, &catalog);

        assert!(kpi.meets_thresholds(0.5, 0.3));
        assert!(!kpi.meets_thresholds(0.9, 0.0));
    }

    #[test]
    fn test_kpi_empty() {
        let kpi = ScheduleKpi::calculate(
            &MaintenanceOutcome::new(),
            &MaintenanceRequest::new(),
            &TaskCatalog::new(),
        );
        assert_eq!(kpi.deployable_count, 0);
        assert_eq!(kpi.deployable_rate, 0.0);
        assert_eq!(kpi.avg_utilization, 0.0);
        assert_eq!(kpi.idle_workers, 0);
    }
}
