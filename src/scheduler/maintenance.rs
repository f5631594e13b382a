//! End-to-end maintenance scheduler.
//!
//! Runs the three phases for one request: build the program, solve it,
//! decode the optimal assignment. The catalog is injected, never global,
//! so different requests (and tests) can use different catalogs.

use tracing::info;

use crate::error::Result;
use crate::ilp::{decode, GoodLpSolver, MaintenanceModelBuilder, MipSolver};
use crate::models::{MaintenanceOutcome, MaintenanceRequest, TaskCatalog};

/// Schedules maintenance requests against a fixed catalog.
///
/// # Example
/// ```
/// use plane_maintenance::scheduler::MaintenanceScheduler;
/// use plane_maintenance::models::{MaintenanceRequest, Plane, TaskCatalog, TaskDefinition, Worker};
///
/// let catalog = TaskCatalog::new()
///     .with_task(TaskDefinition::new("wings").with_qualification("a").with_duration(1));
/// let request = MaintenanceRequest::new()
///     .with_plane(Plane::new("F16").with_task("wings"))
///     .with_worker(Worker::new("Pat").with_qualification("a"))
///     .with_worker(Worker::new("Mat").with_qualification("b"));
///
/// let outcome = MaintenanceScheduler::new(&catalog).schedule(&request)?;
/// assert!(outcome.is_deployable("F16"));
/// assert_eq!(outcome.tasks_for("Pat", "F16"), ["wings"]);
/// # Ok::<(), plane_maintenance::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct MaintenanceScheduler<'a, S = GoodLpSolver> {
    catalog: &'a TaskCatalog,
    solver: S,
}

impl<'a> MaintenanceScheduler<'a, GoodLpSolver> {
    /// Creates a scheduler using the bundled solver.
    pub fn new(catalog: &'a TaskCatalog) -> Self {
        Self::with_solver(catalog, GoodLpSolver::new())
    }
}

impl<'a, S: MipSolver> MaintenanceScheduler<'a, S> {
    /// Creates a scheduler with a custom solver.
    pub fn with_solver(catalog: &'a TaskCatalog, solver: S) -> Self {
        Self { catalog, solver }
    }

    /// The catalog requests are checked against.
    pub fn catalog(&self) -> &TaskCatalog {
        self.catalog
    }

    /// Builds, solves, and decodes one request.
    ///
    /// # Errors
    /// - `Configuration` if a plane references an unknown task (or names collide).
    /// - `ModelNotOptimal` if the solver does not prove optimality.
    pub fn schedule(&self, request: &MaintenanceRequest) -> Result<MaintenanceOutcome> {
        let program = MaintenanceModelBuilder::new(request, self.catalog)?.build();
        let solved = self.solver.solve(&program);
        let outcome = decode(&program, &solved)?;

        info!(
            planes = request.planes.len(),
            workers = request.workers.len(),
            deployable = outcome.deployable_planes.len(),
            "maintenance scheduled"
        );

        Ok(outcome)
    }
}

/// Schedules `request` against `catalog` with the bundled solver.
pub fn schedule_maintenance(
    request: &MaintenanceRequest,
    catalog: &TaskCatalog,
) -> Result<MaintenanceOutcome> {
    MaintenanceScheduler::new(catalog).schedule(request)
}
