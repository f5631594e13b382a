//! Worker model.
//!
//! Workers are the maintenance crew. Each holds a set of qualifications;
//! hour capacity is not a worker attribute but the request-wide budget.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::{Qualification, TaskDefinition};

/// A maintenance worker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Worker {
    /// Unique worker name.
    pub name: String,
    /// Qualifications held.
    #[serde(default)]
    pub qualifications: BTreeSet<Qualification>,
}

impl Worker {
    /// Creates a worker holding no qualifications.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            qualifications: BTreeSet::new(),
        }
    }

    /// Adds a qualification.
    pub fn with_qualification(mut self, qualification: impl Into<Qualification>) -> Self {
        self.qualifications.insert(qualification.into());
        self
    }

    /// Adds several qualifications.
    pub fn with_qualifications<I, Q>(mut self, qualifications: I) -> Self
    where
        I: IntoIterator<Item = Q>,
        Q: Into<Qualification>,
    {
        self.qualifications
            .extend(qualifications.into_iter().map(Into::into));
        self
    }

    /// Whether this worker holds a given qualification.
    pub fn holds(&self, qualification: &str) -> bool {
        self.qualifications.iter().any(|q| q.as_str() == qualification)
    }

    /// Whether this worker may perform the task.
    pub fn is_qualified_for(&self, task: &TaskDefinition) -> bool {
        task.is_covered_by(&self.qualifications)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_worker_builder() {
        let w = Worker::new("Pat")
            .with_qualification("a")
            .with_qualifications(["b", "c"]);

        assert_eq!(w.name, "Pat");
        assert_eq!(w.qualifications.len(), 3);
        assert!(w.holds("b"));
        assert!(!w.holds("d"));
    }

    #[test]
    fn test_is_qualified_for() {
        let task = TaskDefinition::new("wings").with_qualifications(["a", "b"]);

        assert!(Worker::new("full").with_qualifications(["a", "b", "z"]).is_qualified_for(&task));
        assert!(!Worker::new("half").with_qualification("a").is_qualified_for(&task));
        assert!(!Worker::new("none").is_qualified_for(&task));
    }
}
