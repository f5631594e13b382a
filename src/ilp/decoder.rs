//! Solution decoding.
//!
//! Turns a solved program into a [`MaintenanceOutcome`]. Only a solve that
//! ended in proved optimality is decoded; any other terminal state is an
//! error, never an empty schedule.

use tracing::{debug, warn};

use super::program::{BinaryProgram, VarKey};
use super::solver::SolvedProgram;
use crate::error::{Error, ModelNotOptimalError, Result};
use crate::models::MaintenanceOutcome;

/// Values above this count as 1. Binary variables may come back with
/// floating-point noise from numeric solvers.
pub const TRUTH_THRESHOLD: f64 = 0.5;

#[inline]
fn is_set(value: f64) -> bool {
    value > TRUTH_THRESHOLD
}

/// Decodes the worker schedule and deployable planes.
///
/// A `(worker, plane, task)` triple is scheduled iff its `worker_does`
/// value is set; a plane is deployable iff its `plane_ready` value is set.
/// Workers with no assignment are absent from the schedule. Tasks appear
/// in the order their variables were created (plane task order).
///
/// # Errors
/// - [`Error::ModelNotOptimal`] if the solve is not proved optimal.
/// - [`Error::SolutionMismatch`] if the values do not belong to `program`.
pub fn decode(program: &BinaryProgram, solved: &SolvedProgram) -> Result<MaintenanceOutcome> {
    if !solved.status().is_optimal() {
        warn!(status = %solved.status(), "refusing to decode non-optimal solve");
        return Err(ModelNotOptimalError {
            status: solved.status().clone(),
        }
        .into());
    }

    let values = solved.values();
    if values.len() != program.variable_count() {
        return Err(Error::SolutionMismatch {
            expected: program.variable_count(),
            actual: values.len(),
        });
    }

    let mut outcome = MaintenanceOutcome::new();
    for (key, &value) in program.variables().iter().zip(values) {
        if !is_set(value) {
            continue;
        }
        match key {
            VarKey::WorkerDoes {
                worker,
                plane,
                task,
            } => outcome.assign(worker, plane, task),
            VarKey::PlaneReady { plane } => outcome.mark_deployable(plane),
            VarKey::TaskDone { .. } => {}
        }
    }

    debug!(
        assignments = outcome.assignment_count(),
        deployable = outcome.deployable_planes.len(),
        "decoded maintenance schedule"
    );

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ilp::solver::SolveStatus;

    fn program() -> BinaryProgram {
        let mut p = BinaryProgram::new("test");
        p.add_variable(VarKey::task_done("F16", "wings"));
        p.add_variable(VarKey::worker_does("Pat", "F16", "wings"));
        p.add_variable(VarKey::worker_does("Mat", "F16", "wings"));
        p.add_variable(VarKey::plane_ready("F16"));
        p
    }

    #[test]
    fn test_decode_optimal() {
        let solved = SolvedProgram::new(SolveStatus::Optimal, vec![1.0, 1.0, 0.0, 1.0]);
        let outcome = decode(&program(), &solved).unwrap();

        assert_eq!(outcome.tasks_for("Pat", "F16"), ["wings"]);
        assert!(!outcome.worker_schedule.contains_key("Mat"));
        assert!(outcome.is_deployable("F16"));
    }

    #[test]
    fn test_decode_tolerates_noise() {
        let solved = SolvedProgram::new(SolveStatus::Optimal, vec![0.999_999, 1e-9, 0.9999, 1.000_001]);
        let outcome = decode(&program(), &solved).unwrap();

        assert!(!outcome.worker_schedule.contains_key("Pat"));
        assert_eq!(outcome.tasks_for("Mat", "F16"), ["wings"]);
        assert!(outcome.is_deployable("F16"));
    }

    #[test]
    fn test_refuses_non_optimal() {
        for status in [
            SolveStatus::Infeasible,
            SolveStatus::TimeLimit,
            SolveStatus::Failed("out of memory".into()),
        ] {
            let solved = SolvedProgram::new(status.clone(), vec![1.0; 4]);
            match decode(&program(), &solved) {
                Err(Error::ModelNotOptimal(e)) => assert_eq!(e.status, status),
                other => panic!("expected ModelNotOptimal, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_rejects_foreign_values() {
        let solved = SolvedProgram::new(SolveStatus::Optimal, vec![1.0, 1.0]);
        assert!(matches!(
            decode(&program(), &solved),
            Err(Error::SolutionMismatch { expected: 4, actual: 2 })
        ));
    }

    #[test]
    fn test_decode_is_idempotent() {
        let p = program();
        let solved = SolvedProgram::new(SolveStatus::Optimal, vec![1.0, 0.0, 1.0, 1.0]);
        assert_eq!(decode(&p, &solved).unwrap(), decode(&p, &solved).unwrap());
    }
}
