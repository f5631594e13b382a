//! Plane model.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A plane awaiting maintenance.
///
/// The plane is deployable once every listed task is done. Task names
/// refer to the [`TaskCatalog`](super::TaskCatalog); listing a task twice
/// has no effect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plane {
    /// Unique plane name (e.g., "F16").
    pub name: String,
    /// Names of the tasks required before deployment.
    #[serde(default)]
    pub tasks: BTreeSet<String>,
}

impl Plane {
    /// Creates a plane with no required tasks.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tasks: BTreeSet::new(),
        }
    }

    /// Adds a required task.
    pub fn with_task(mut self, task: impl Into<String>) -> Self {
        self.tasks.insert(task.into());
        self
    }

    /// Adds several required tasks.
    pub fn with_tasks<I, T>(mut self, tasks: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.tasks.extend(tasks.into_iter().map(Into::into));
        self
    }

    /// Number of distinct required tasks.
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }
}
