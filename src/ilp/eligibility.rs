//! Worker/task eligibility mask.
//!
//! A worker is eligible for a task iff the worker's qualifications are a
//! superset of the task's required qualifications. The mask depends only on
//! static qualification sets, so it is computed once per (worker, task)
//! pair before constraint generation; a task shared by several planes is
//! checked once.

use std::collections::{BTreeSet, HashMap};

use crate::models::{TaskCatalog, Worker};

/// Precomputed (worker, task) → eligible mask.
#[derive(Debug, Clone, Default)]
pub struct EligibilityMatrix {
    eligible: HashMap<String, BTreeSet<String>>,
    pairs: usize,
}

impl EligibilityMatrix {
    /// Computes eligibility of every worker for every named task.
    ///
    /// Names missing from the catalog are never eligible.
    pub fn compute<'a, I>(workers: &[Worker], catalog: &TaskCatalog, task_names: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let tasks: Vec<&str> = task_names
            .into_iter()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let mut eligible: HashMap<String, BTreeSet<String>> = HashMap::new();
        for worker in workers {
            let allowed = eligible.entry(worker.name.clone()).or_default();
            for &task in &tasks {
                if catalog.get(task).is_some_and(|def| worker.is_qualified_for(def)) {
                    allowed.insert(task.to_string());
                }
            }
        }

        Self {
            pairs: eligible.len() * tasks.len(),
            eligible,
        }
    }

    /// Whether `worker` may perform `task`.
    pub fn is_eligible(&self, worker: &str, task: &str) -> bool {
        self.eligible
            .get(worker)
            .is_some_and(|tasks| tasks.contains(task))
    }

    /// Tasks a worker may perform, in name order.
    pub fn tasks_for(&self, worker: &str) -> impl Iterator<Item = &str> + '_ {
        self.eligible
            .get(worker)
            .into_iter()
            .flatten()
            .map(String::as_str)
    }

    /// Number of eligible (worker, task) pairs.
    pub fn eligible_count(&self) -> usize {
        self.eligible.values().map(BTreeSet::len).sum()
    }

    /// Number of (worker, task) pairs evaluated.
    pub fn pair_count(&self) -> usize {
        self.pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TaskDefinition;

    fn catalog() -> TaskCatalog {
        TaskCatalog::new()
            .with_task(TaskDefinition::new("wings").with_qualification("a").with_duration(1))
            .with_task(TaskDefinition::new("tail").with_qualifications(["a", "b"]).with_duration(4))
            .with_task(TaskDefinition::new("free").with_duration(1))
    }

    #[test]
    fn test_superset_rule() {
        let workers = vec![
            Worker::new("Pat").with_qualification("a"),
            Worker::new("Mat").with_qualification("b"),
            Worker::new("Ace").with_qualifications(["a", "b", "c"]),
        ];
        let m = EligibilityMatrix::compute(&workers, &catalog(), ["wings", "tail", "wings"]);

        assert!(m.is_eligible("Pat", "wings"));
        assert!(!m.is_eligible("Pat", "tail"));
        assert!(!m.is_eligible("Mat", "wings"));
        assert!(!m.is_eligible("Mat", "tail"));
        assert!(m.is_eligible("Ace", "wings"));
        assert!(m.is_eligible("Ace", "tail"));
        assert_eq!(m.eligible_count(), 3);
        assert_eq!(m.pair_count(), 6);
        assert_eq!(m.tasks_for("Ace").collect::<Vec<_>>(), vec!["tail", "wings"]);
    }

    #[test]
    fn test_empty_requirements_and_unknown_names() {
        let workers = vec![Worker::new("Nobody")];
        let m = EligibilityMatrix::compute(&workers, &catalog(), ["free", "ghost"]);

        assert!(m.is_eligible("Nobody", "free"));
        assert!(!m.is_eligible("Nobody", "ghost"));
        assert!(!m.is_eligible("Stranger", "free"));
    }

    #[test]
    fn test_no_workers() {
        let m = EligibilityMatrix::compute(&[], &catalog(), ["wings"]);
        assert_eq!(m.eligible_count(), 0);
        assert_eq!(m.pair_count(), 0);
    }
}
