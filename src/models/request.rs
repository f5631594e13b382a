//! Scheduling request model.

use serde::{Deserialize, Serialize};

use super::{Plane, Worker};
use crate::error::ConfigurationError;

/// Hours each worker may spend when a request does not say otherwise.
pub const DEFAULT_WORKING_HOURS: u32 = 8;

fn default_working_hours() -> u32 {
    DEFAULT_WORKING_HOURS
}

/// One scheduling request: planes to service, the available crew, and
/// the hour budget every worker shares.
///
/// Immutable for the lifetime of a solve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaintenanceRequest {
    /// Planes awaiting maintenance.
    #[serde(default)]
    pub planes: Vec<Plane>,
    /// Available workers.
    #[serde(default)]
    pub workers: Vec<Worker>,
    /// Maximum total task hours per worker.
    #[serde(default = "default_working_hours")]
    pub working_hours: u32,
}

impl Default for MaintenanceRequest {
    fn default() -> Self {
        Self::new()
    }
}

impl MaintenanceRequest {
    /// Creates an empty request with the default hour budget.
    pub fn new() -> Self {
        Self {
            planes: Vec::new(),
            workers: Vec::new(),
            working_hours: DEFAULT_WORKING_HOURS,
        }
    }

    /// Adds a plane.
    pub fn with_plane(mut self, plane: Plane) -> Self {
        self.planes.push(plane);
        self
    }

    /// Adds a worker.
    pub fn with_worker(mut self, worker: Worker) -> Self {
        self.workers.push(worker);
        self
    }

    /// Sets the per-worker hour budget.
    pub fn with_working_hours(mut self, hours: u32) -> Self {
        self.working_hours = hours;
        self
    }

    /// Looks up a plane by name.
    pub fn plane(&self, name: &str) -> Option<&Plane> {
        self.planes.iter().find(|p| p.name == name)
    }

    /// Looks up a worker by name.
    pub fn worker(&self, name: &str) -> Option<&Worker> {
        self.workers.iter().find(|w| w.name == name)
    }

    /// Parses a request from JSON.
    ///
    /// Task references are checked later, against the catalog the request
    /// is scheduled with.
    pub fn from_json(json: &str) -> Result<Self, ConfigurationError> {
        Ok(serde_json::from_str(json)?)
    }
}
