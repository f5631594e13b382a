//! Decoded schedule (solution) model.
//!
//! The outcome of one request: which worker services which plane tasks,
//! and which planes end up deployable.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use super::TaskCatalog;

/// Worker → plane → tasks assigned to that worker on that plane.
///
/// Workers with no assignment are absent.
pub type WorkerSchedule = BTreeMap<String, BTreeMap<String, Vec<String>>>;

/// Result of a scheduling request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaintenanceOutcome {
    /// Assignments per worker.
    pub worker_schedule: WorkerSchedule,
    /// Planes whose every required task is done.
    pub deployable_planes: BTreeSet<String>,
}

impl MaintenanceOutcome {
    /// Creates an empty outcome.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that `worker` performs `task` on `plane`.
    pub fn assign(
        &mut self,
        worker: impl Into<String>,
        plane: impl Into<String>,
        task: impl Into<String>,
    ) {
        self.worker_schedule
            .entry(worker.into())
            .or_default()
            .entry(plane.into())
            .or_default()
            .push(task.into());
    }

    /// Marks a plane deployable.
    pub fn mark_deployable(&mut self, plane: impl Into<String>) {
        self.deployable_planes.insert(plane.into());
    }

    /// Whether a plane is deployable.
    pub fn is_deployable(&self, plane: &str) -> bool {
        self.deployable_planes.contains(plane)
    }

    /// Tasks a worker performs on a plane (empty if none).
    pub fn tasks_for(&self, worker: &str, plane: &str) -> &[String] {
        self.worker_schedule
            .get(worker)
            .and_then(|planes| planes.get(plane))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Whether any worker performs `task` on `plane`.
    pub fn is_task_covered(&self, plane: &str, task: &str) -> bool {
        self.worker_schedule
            .values()
            .filter_map(|planes| planes.get(plane))
            .any(|tasks| tasks.iter().any(|t| t == task))
    }

    /// Total hours assigned to a worker, priced with `catalog`.
    ///
    /// Tasks missing from the catalog count as zero hours.
    pub fn assigned_hours(&self, worker: &str, catalog: &TaskCatalog) -> u32 {
        self.worker_schedule
            .get(worker)
            .map(|planes| {
                planes
                    .values()
                    .flatten()
                    .filter_map(|task| catalog.duration_of(task))
                    .sum()
            })
            .unwrap_or(0)
    }

    /// Number of (worker, plane, task) assignments.
    pub fn assignment_count(&self) -> usize {
        self.worker_schedule
            .values()
            .flat_map(|planes| planes.values())
            .map(Vec::len)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TaskDefinition;

    fn sample_outcome() -> MaintenanceOutcome {
        let mut o = MaintenanceOutcome::new();
        o.assign("Pat", "F16", "wings");
        o.assign("Pat", "F16", "propellers");
        o.assign("Pat", "JSF", "propellers");
        o.assign("Roy", "MiG", "tail");
        o.mark_deployable("F16");
        o.mark_deployable("JSF");
        o
    }

    #[test]
    fn test_tasks_for() {
        let o = sample_outcome();
        assert_eq!(o.tasks_for("Pat", "F16"), ["wings", "propellers"]);
        assert!(o.tasks_for("Pat", "MiG").is_empty());
        assert!(o.tasks_for("Nobody", "F16").is_empty());
    }

    #[test]
    fn test_coverage_and_deployable() {
        let o = sample_outcome();
        assert!(o.is_task_covered("MiG", "tail"));
        assert!(!o.is_task_covered("MiG", "cockpit"));
        assert!(o.is_deployable("F16"));
        assert!(!o.is_deployable("MiG"));
    }

    #[test]
    fn test_assigned_hours() {
        let catalog = TaskCatalog::new()
            .with_task(TaskDefinition::new("wings").with_duration(2))
            .with_task(TaskDefinition::new("propellers").with_duration(1));
        let o = sample_outcome();

        assert_eq!(o.assigned_hours("Pat", &catalog), 4);
        assert_eq!(o.assigned_hours("Roy", &catalog), 0); // "tail" not in catalog
        assert_eq!(o.assigned_hours("Nobody", &catalog), 0);
    }

    #[test]
    fn test_assignment_count() {
        assert_eq!(sample_outcome().assignment_count(), 4);
        assert_eq!(MaintenanceOutcome::new().assignment_count(), 0);
    }

    #[test]
    fn test_outcome_serializes_to_nested_maps() {
        let mut o = MaintenanceOutcome::new();
        o.assign("Pat", "F16", "wings");
        o.mark_deployable("F16");

        let json = serde_json::to_value(&o).unwrap();
        assert_eq!(json["worker_schedule"]["Pat"]["F16"][0], "wings");
        assert_eq!(json["deployable_planes"][0], "F16");
    }
}
