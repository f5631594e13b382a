//! Maintenance scheduling formulation.
//!
//! Translates a [`MaintenanceRequest`] and a [`TaskCatalog`] into a
//! [`BinaryProgram`]:
//!
//! | Variable | Meaning |
//! |----------|---------|
//! | `task_done[p, t]` | task `t` of plane `p` is done |
//! | `worker_does[w, p, t]` | worker `w` performs task `t` on plane `p` |
//! | `plane_ready[p]` | plane `p` is deployable |
//!
//! Tasks are plane-scoped: a task required by two planes yields two
//! `task_done` variables. The objective maximises `Σ_p plane_ready[p]`.

use tracing::debug;

use super::eligibility::EligibilityMatrix;
use super::program::{BinaryProgram, Comparison, ConstraintFamily, LinearConstraint, Term, VarKey};
use crate::error::ConfigurationError;
use crate::models::{MaintenanceRequest, TaskCatalog};
use crate::validation::validate_request;

/// Builds the binary program for one maintenance request.
///
/// Construction validates the request against the catalog, so an unknown
/// task surfaces here and never at solve time. Building does not solve.
///
/// # Example
/// ```
/// use plane_maintenance::ilp::MaintenanceModelBuilder;
/// use plane_maintenance::models::{MaintenanceRequest, Plane, TaskCatalog, Worker};
///
/// let catalog = TaskCatalog::standard();
/// let request = MaintenanceRequest::new()
///     .with_plane(Plane::new("JSF").with_task("propellers"))
///     .with_worker(Worker::new("Arthur").with_qualifications(["FAA_03", "FAA_11", "FAA_12"]));
///
/// let program = MaintenanceModelBuilder::new(&request, &catalog)?.build();
/// assert_eq!(program.variable_count(), 3);
/// # Ok::<(), plane_maintenance::ConfigurationError>(())
/// ```
pub struct MaintenanceModelBuilder<'a> {
    request: &'a MaintenanceRequest,
    catalog: &'a TaskCatalog,
    eligibility: EligibilityMatrix,
}

impl<'a> MaintenanceModelBuilder<'a> {
    /// Validates the request and precomputes the eligibility mask.
    pub fn new(
        request: &'a MaintenanceRequest,
        catalog: &'a TaskCatalog,
    ) -> Result<Self, ConfigurationError> {
        validate_request(request, catalog)?;

        let eligibility = EligibilityMatrix::compute(
            &request.workers,
            catalog,
            request
                .planes
                .iter()
                .flat_map(|p| p.tasks.iter().map(String::as_str)),
        );

        Ok(Self {
            request,
            catalog,
            eligibility,
        })
    }

    /// The eligibility mask used for the qualification constraints.
    pub fn eligibility(&self) -> &EligibilityMatrix {
        &self.eligibility
    }

    /// Builds the program.
    ///
    /// Creates:
    /// - `task_done` per (plane, required task), `worker_does` per
    ///   (worker, plane, task), `plane_ready` per plane
    /// - Plane completion: `plane_ready[p] - task_done[p, t] <= 0`
    /// - Task coverage: `task_done[p, t] - Σ_w worker_does[w, p, t] <= 0`
    /// - Worker hours: `Σ duration[t] · worker_does[w, p, t] <= working_hours`
    /// - Qualification: `worker_does[w, p, t] <= 1` if eligible, `== 0` otherwise
    /// - Objective: maximise `Σ_p plane_ready[p]`
    pub fn build(&self) -> BinaryProgram {
        let mut program = BinaryProgram::new("plane_maintenance");

        self.add_variables(&mut program);
        self.add_plane_completion(&mut program);
        self.add_task_coverage(&mut program);
        self.add_worker_hours(&mut program);
        self.add_qualification(&mut program);

        let objective = self
            .request
            .planes
            .iter()
            .filter_map(|p| program.plane_ready(&p.name))
            .map(|v| Term::new(v, 1))
            .collect();
        program.set_objective(objective);

        debug!(
            planes = self.request.planes.len(),
            workers = self.request.workers.len(),
            variables = program.variable_count(),
            constraints = program.constraint_count(),
            eligible_pairs = self.eligibility.eligible_count(),
            "built maintenance program"
        );

        program
    }

    fn add_variables(&self, program: &mut BinaryProgram) {
        for plane in &self.request.planes {
            for task in &plane.tasks {
                program.add_variable(VarKey::task_done(&plane.name, task));
            }
        }

        for worker in &self.request.workers {
            for plane in &self.request.planes {
                for task in &plane.tasks {
                    program.add_variable(VarKey::worker_does(&worker.name, &plane.name, task));
                }
            }
        }

        for plane in &self.request.planes {
            program.add_variable(VarKey::plane_ready(&plane.name));
        }
    }

    fn add_plane_completion(&self, program: &mut BinaryProgram) {
        for plane in &self.request.planes {
            let Some(ready) = program.plane_ready(&plane.name) else {
                continue;
            };
            let constraints: Vec<_> = program
                .plane_task_vars(&plane.name)
                .iter()
                .map(|&done| {
                    LinearConstraint::new(
                        ConstraintFamily::PlaneCompletion,
                        vec![Term::new(ready, 1), Term::new(done, -1)],
                        Comparison::LessOrEqual,
                        0,
                    )
                })
                .collect();
            for c in constraints {
                program.add_constraint(c);
            }
        }
    }

    fn add_task_coverage(&self, program: &mut BinaryProgram) {
        for plane in &self.request.planes {
            for task in &plane.tasks {
                let Some(done) = program.task_done(&plane.name, task) else {
                    continue;
                };
                let mut terms = vec![Term::new(done, 1)];
                terms.extend(
                    program
                        .assignee_vars(&plane.name, task)
                        .iter()
                        .map(|&v| Term::new(v, -1)),
                );
                program.add_constraint(LinearConstraint::new(
                    ConstraintFamily::TaskCoverage,
                    terms,
                    Comparison::LessOrEqual,
                    0,
                ));
            }
        }
    }

    fn add_worker_hours(&self, program: &mut BinaryProgram) {
        let budget = i64::from(self.request.working_hours);

        for worker in &self.request.workers {
            let terms: Vec<Term> = program
                .worker_vars(&worker.name)
                .iter()
                .filter_map(|&v| match program.key(v) {
                    VarKey::WorkerDoes { task, .. } => self
                        .catalog
                        .duration_of(task)
                        .map(|hours| Term::new(v, i64::from(hours))),
                    _ => None,
                })
                .collect();
            program.add_constraint(LinearConstraint::new(
                ConstraintFamily::WorkerHours,
                terms,
                Comparison::LessOrEqual,
                budget,
            ));
        }
    }

    fn add_qualification(&self, program: &mut BinaryProgram) {
        for worker in &self.request.workers {
            let constraints: Vec<_> = program
                .worker_vars(&worker.name)
                .iter()
                .filter_map(|&v| match program.key(v) {
                    VarKey::WorkerDoes { task, .. } => {
                        let (comparison, rhs) = if self.eligibility.is_eligible(&worker.name, task) {
                            (Comparison::LessOrEqual, 1)
                        } else {
                            (Comparison::Equal, 0)
                        };
                        Some(LinearConstraint::new(
                            ConstraintFamily::Qualification,
                            vec![Term::new(v, 1)],
                            comparison,
                            rhs,
                        ))
                    }
                    _ => None,
                })
                .collect();
            for c in constraints {
                program.add_constraint(c);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigurationIssueKind;
    use crate::models::{Plane, TaskDefinition, Worker};

    fn catalog() -> TaskCatalog {
        TaskCatalog::new()
            .with_task(TaskDefinition::new("wings").with_qualification("a").with_duration(1))
            .with_task(TaskDefinition::new("tail").with_qualifications(["a", "b"]).with_duration(4))
    }

    fn request() -> MaintenanceRequest {
        MaintenanceRequest::new()
            .with_plane(Plane::new("F16").with_tasks(["wings", "tail"]))
            .with_plane(Plane::new("JSF").with_task("wings"))
            .with_worker(Worker::new("Pat").with_qualification("a"))
            .with_worker(Worker::new("Mat").with_qualification("b"))
            .with_working_hours(8)
    }

    #[test]
    fn test_unknown_task_fails_at_construction() {
        let req = request().with_plane(Plane::new("MiG").with_task("rotor"));
        let catalog = catalog();

        let err = MaintenanceModelBuilder::new(&req, &catalog).err().unwrap();
        assert!(err.has_kind(&ConfigurationIssueKind::UnknownTask));
    }

    #[test]
    fn test_variable_space() {
        let (req, catalog) = (request(), catalog());
        let program = MaintenanceModelBuilder::new(&req, &catalog).unwrap().build();

        // 3 plane tasks + 2 workers × 3 plane tasks + 2 planes
        assert_eq!(program.variable_count(), 3 + 6 + 2);
        // Shared task names stay plane-scoped
        assert_ne!(program.task_done("F16", "wings"), program.task_done("JSF", "wings"));
        assert!(program.worker_does("Mat", "JSF", "wings").is_some());
        assert!(program.task_done("JSF", "tail").is_none());
    }

    #[test]
    fn test_constraint_families() {
        let (req, catalog) = (request(), catalog());
        let program = MaintenanceModelBuilder::new(&req, &catalog).unwrap().build();

        assert_eq!(program.constraints_in(ConstraintFamily::PlaneCompletion).count(), 3);
        assert_eq!(program.constraints_in(ConstraintFamily::TaskCoverage).count(), 3);
        assert_eq!(program.constraints_in(ConstraintFamily::WorkerHours).count(), 2);
        assert_eq!(program.constraints_in(ConstraintFamily::Qualification).count(), 6);
        assert_eq!(program.constraint_count(), 14);
    }

    #[test]
    fn test_coverage_sums_over_all_workers() {
        let (req, catalog) = (request(), catalog());
        let program = MaintenanceModelBuilder::new(&req, &catalog).unwrap().build();
        let done = program.task_done("F16", "tail").unwrap();

        let coverage = program
            .constraints_in(ConstraintFamily::TaskCoverage)
            .find(|c| c.terms[0].var == done)
            .unwrap();
        assert_eq!(coverage.terms.len(), 3);
        assert!(coverage.terms[1..].iter().all(|t| t.coefficient == -1));
    }

    #[test]
    fn test_worker_hours_weighted_by_duration() {
        let (req, catalog) = (request(), catalog());
        let program = MaintenanceModelBuilder::new(&req, &catalog).unwrap().build();
        let tail = program.worker_does("Pat", "F16", "tail").unwrap();

        let hours = program
            .constraints_in(ConstraintFamily::WorkerHours)
            .find(|c| c.terms.iter().any(|t| t.var == tail))
            .unwrap();
        assert_eq!(hours.rhs, 8);
        assert_eq!(hours.terms.iter().map(|t| t.coefficient).sum::<i64>(), 1 + 4 + 1);
    }

    #[test]
    fn test_qualification_mask() {
        let (req, catalog) = (request(), catalog());
        let program = MaintenanceModelBuilder::new(&req, &catalog).unwrap().build();

        let rule_for = |worker: &str, plane: &str, task: &str| {
            let v = program.worker_does(worker, plane, task).unwrap();
            program
                .constraints_in(ConstraintFamily::Qualification)
                .find(|c| c.terms[0].var == v)
                .map(|c| (c.comparison, c.rhs))
                .unwrap()
        };

        assert_eq!(rule_for("Pat", "F16", "wings"), (Comparison::LessOrEqual, 1));
        assert_eq!(rule_for("Pat", "F16", "tail"), (Comparison::Equal, 0));
        assert_eq!(rule_for("Mat", "JSF", "wings"), (Comparison::Equal, 0));
    }

    #[test]
    fn test_objective_counts_ready_planes() {
        let (req, catalog) = (request(), catalog());
        let program = MaintenanceModelBuilder::new(&req, &catalog).unwrap().build();

        assert_eq!(program.objective().len(), 2);
        assert!(program
            .objective()
            .iter()
            .all(|t| matches!(program.key(t.var), VarKey::PlaneReady { .. }) && t.coefficient == 1));
    }

    #[test]
    fn test_all_zero_assignment_is_feasible() {
        let (req, catalog) = (request(), catalog());
        let program = MaintenanceModelBuilder::new(&req, &catalog).unwrap().build();
        let zeros = vec![0.0; program.variable_count()];

        assert!(program.is_feasible(&zeros));
        assert_eq!(program.objective_value(&zeros), 0.0);
    }

    #[test]
    fn test_degenerate_request() {
        let req = MaintenanceRequest::new().with_plane(Plane::new("Bare"));
        let catalog = catalog();
        let program = MaintenanceModelBuilder::new(&req, &catalog).unwrap().build();

        // Only plane_ready; a plane with no tasks is unconstrained.
        assert_eq!(program.variable_count(), 1);
        assert_eq!(program.constraint_count(), 0);
    }
}
