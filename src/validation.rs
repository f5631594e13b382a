//! Input validation for maintenance requests.
//!
//! Checks structural integrity before any program is built. Detects:
//! - Planes requiring tasks missing from the catalog
//! - Duplicate plane names
//! - Duplicate worker names
//!
//! Catalogs loaded from configuration are checked separately for tasks
//! with no qualification or zero duration.
//!
//! Every check runs; the error carries all issues found, not just the first.

use std::collections::HashSet;

use crate::error::{ConfigurationError, ConfigurationIssue, ConfigurationIssueKind};
use crate::models::{MaintenanceRequest, TaskCatalog};

/// Validates a request against the catalog it will be scheduled with.
///
/// Empty qualification sets, planes without tasks, and requests without
/// workers are valid; they simply cannot produce deployable planes.
pub fn validate_request(
    request: &MaintenanceRequest,
    catalog: &TaskCatalog,
) -> Result<(), ConfigurationError> {
    let mut issues = Vec::new();

    let mut plane_names = HashSet::new();
    for plane in &request.planes {
        if !plane_names.insert(plane.name.as_str()) {
            issues.push(ConfigurationIssue::new(
                ConfigurationIssueKind::DuplicatePlane,
                format!("Duplicate plane: {}", plane.name),
            ));
        }

        for task in &plane.tasks {
            if !catalog.contains(task) {
                issues.push(ConfigurationIssue::new(
                    ConfigurationIssueKind::UnknownTask,
                    format!("Plane '{}' requires unknown task '{}'", plane.name, task),
                ));
            }
        }
    }

    let mut worker_names = HashSet::new();
    for worker in &request.workers {
        if !worker_names.insert(worker.name.as_str()) {
            issues.push(ConfigurationIssue::new(
                ConfigurationIssueKind::DuplicateWorker,
                format!("Duplicate worker: {}", worker.name),
            ));
        }
    }

    into_result(issues)
}

/// Validates catalog entries loaded from configuration.
pub fn validate_catalog(catalog: &TaskCatalog) -> Result<(), ConfigurationError> {
    let mut issues = Vec::new();

    for task in catalog.iter() {
        if task.qualifications.is_empty() {
            issues.push(ConfigurationIssue::new(
                ConfigurationIssueKind::EmptyQualifications,
                format!("Task '{}' requires no qualification", task.name),
            ));
        }
        if task.duration_hours == 0 {
            issues.push(ConfigurationIssue::new(
                ConfigurationIssueKind::ZeroDuration,
                format!("Task '{}' has zero duration", task.name),
            ));
        }
    }

    into_result(issues)
}

fn into_result(issues: Vec<ConfigurationIssue>) -> Result<(), ConfigurationError> {
    if issues.is_empty() {
        Ok(())
    } else {
        Err(ConfigurationError::Invalid(issues))
    }
}
