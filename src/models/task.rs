//! Task model and task catalog.
//!
//! A task is a unit of maintenance work defined once in a shared catalog:
//! the qualifications a worker must hold to perform it and the number of
//! hours it takes. Planes reference tasks by name.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use super::Qualification;
use crate::error::ConfigurationError;
use crate::validation::validate_catalog;

/// A maintenance task definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDefinition {
    /// Unique task name (e.g., "wings", "engine").
    pub name: String,
    /// Qualifications a worker must hold, all of them.
    pub qualifications: BTreeSet<Qualification>,
    /// Time needed to complete the task (hours).
    pub duration_hours: u32,
}

impl TaskDefinition {
    /// Creates a task with no requirements and zero duration.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            qualifications: BTreeSet::new(),
            duration_hours: 0,
        }
    }

    /// Adds a required qualification.
    pub fn with_qualification(mut self, qualification: impl Into<Qualification>) -> Self {
        self.qualifications.insert(qualification.into());
        self
    }

    /// Adds several required qualifications.
    pub fn with_qualifications<I, Q>(mut self, qualifications: I) -> Self
    where
        I: IntoIterator<Item = Q>,
        Q: Into<Qualification>,
    {
        self.qualifications
            .extend(qualifications.into_iter().map(Into::into));
        self
    }

    /// Sets the duration (hours).
    pub fn with_duration(mut self, hours: u32) -> Self {
        self.duration_hours = hours;
        self
    }

    /// Whether `held` covers every required qualification.
    pub fn is_covered_by(&self, held: &BTreeSet<Qualification>) -> bool {
        self.qualifications.is_subset(held)
    }
}

/// Catalog of all known tasks, keyed by name.
///
/// Built once and passed by reference to every request; nothing in the
/// crate mutates a catalog after construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskCatalog {
    tasks: BTreeMap<String, TaskDefinition>,
}

impl TaskCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) a task definition.
    pub fn with_task(mut self, task: TaskDefinition) -> Self {
        self.tasks.insert(task.name.clone(), task);
        self
    }

    /// Looks up a task by name.
    pub fn get(&self, name: &str) -> Option<&TaskDefinition> {
        self.tasks.get(name)
    }

    /// Whether a task with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.tasks.contains_key(name)
    }

    /// Duration of a task in hours, if it exists.
    pub fn duration_of(&self, name: &str) -> Option<u32> {
        self.get(name).map(|t| t.duration_hours)
    }

    /// Number of tasks.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Iterates tasks in name order.
    pub fn iter(&self) -> impl Iterator<Item = &TaskDefinition> {
        self.tasks.values()
    }

    /// Loads a catalog from JSON and validates it.
    ///
    /// The expected shape is an object keyed by task name:
    ///
    /// ```json
    /// { "wings": { "name": "wings", "qualifications": ["FAA_11"], "duration_hours": 2 } }
    /// ```
    ///
    /// Unlike catalogs assembled in code, loaded catalogs must give every
    /// task at least one qualification and a positive duration.
    pub fn from_json(json: &str) -> Result<Self, ConfigurationError> {
        let catalog: Self = serde_json::from_str(json)?;
        validate_catalog(&catalog)?;
        Ok(catalog)
    }

    /// The standard FAA maintenance catalog.
    pub fn standard() -> Self {
        fn faa(codes: &[&str]) -> Vec<String> {
            codes.iter().map(|c| format!("FAA_{c}")).collect()
        }

        let entries: [(&str, &[&str], u32); 7] = [
            ("fuselage", &["01", "02", "03"], 3),
            ("cockpit", &["01", "11", "21"], 2),
            ("wings", &["11", "12"], 2),
            ("tail", &["21", "22", "23", "24"], 4),
            ("engine", &["11", "21", "23"], 5),
            ("propellers", &["03", "11", "12"], 1),
            ("landing_gear", &["11", "12", "21", "25"], 2),
        ];

        entries
            .into_iter()
            .fold(Self::new(), |catalog, (name, codes, hours)| {
                catalog.with_task(
                    TaskDefinition::new(name)
                        .with_qualifications(faa(codes))
                        .with_duration(hours),
                )
            })
    }
}
