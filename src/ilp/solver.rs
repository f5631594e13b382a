//! Solver interface and the bundled `good_lp` backend.
//!
//! The solver is an external collaborator: given a [`BinaryProgram`] it
//! reports a terminal state and, when it has one, a value per variable.
//! Any MILP backend that supports binary variables, linear constraints,
//! and proof of optimality can implement [`MipSolver`].

use std::fmt;

use good_lp::solvers::SolutionStatus;
use good_lp::{
    constraint, default_solver, variable, Expression, ProblemVariables, ResolutionError, Solution,
    SolverModel, Variable,
};
use tracing::info;

use super::program::{BinaryProgram, Comparison, Term};

/// Terminal state of a solve attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveStatus {
    /// An integer-optimal solution was found and proved optimal.
    Optimal,
    /// No assignment satisfies the constraints.
    Infeasible,
    /// The objective can grow without bound.
    Unbounded,
    /// Stopped at a time limit with an incumbent but no proof.
    TimeLimit,
    /// Stopped at an optimality-gap limit.
    GapLimit,
    /// The backend failed.
    Failed(String),
}

impl SolveStatus {
    /// Whether the state is proved optimality.
    pub fn is_optimal(&self) -> bool {
        matches!(self, Self::Optimal)
    }
}

impl fmt::Display for SolveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Optimal => f.write_str("optimal"),
            Self::Infeasible => f.write_str("infeasible"),
            Self::Unbounded => f.write_str("unbounded"),
            Self::TimeLimit => f.write_str("time limit reached"),
            Self::GapLimit => f.write_str("gap limit reached"),
            Self::Failed(reason) => write!(f, "solver failed: {reason}"),
        }
    }
}

/// A program after a solve attempt.
///
/// Only solvers create these; decoding never sees an unsolved program.
#[derive(Debug, Clone, PartialEq)]
pub struct SolvedProgram {
    status: SolveStatus,
    values: Vec<f64>,
}

impl SolvedProgram {
    /// Creates a solve result. `values` is indexed by `VarId::index`
    /// and may be empty when the solve produced no assignment.
    pub fn new(status: SolveStatus, values: Vec<f64>) -> Self {
        Self { status, values }
    }

    /// A result with no assignment (infeasible, failed, ...).
    pub fn without_values(status: SolveStatus) -> Self {
        Self::new(status, Vec::new())
    }

    /// Terminal state.
    pub fn status(&self) -> &SolveStatus {
        &self.status
    }

    /// Variable values.
    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

/// A MILP solver.
pub trait MipSolver {
    /// Solves `program` (maximisation), blocking until a terminal state.
    fn solve(&self, program: &BinaryProgram) -> SolvedProgram;
}

/// Solver backed by `good_lp`'s default engine (pure-Rust `microlp`).
#[derive(Debug, Clone, Copy, Default)]
pub struct GoodLpSolver;

impl GoodLpSolver {
    pub fn new() -> Self {
        Self
    }
}

fn linear(handles: &[Variable], terms: &[Term]) -> Expression {
    terms.iter().fold(Expression::from(0.0), |acc, t| {
        acc + (t.coefficient as f64) * handles[t.var.index()]
    })
}

impl MipSolver for GoodLpSolver {
    fn solve(&self, program: &BinaryProgram) -> SolvedProgram {
        if program.variable_count() == 0 {
            return SolvedProgram::new(SolveStatus::Optimal, Vec::new());
        }

        let mut vars = ProblemVariables::new();
        let handles: Vec<Variable> = program
            .variables()
            .iter()
            .map(|key| vars.add(variable().binary().name(key.to_string())))
            .collect();

        let objective = linear(&handles, program.objective());
        let mut model = vars.maximise(objective).using(default_solver);

        for c in program.constraints() {
            let lhs = linear(&handles, &c.terms);
            let rhs = c.rhs as f64;
            model = match c.comparison {
                Comparison::LessOrEqual => model.with(constraint!(lhs <= rhs)),
                Comparison::Equal => model.with(constraint!(lhs == rhs)),
            };
        }

        let solved = match model.solve() {
            Ok(solution) => {
                let status = match solution.status() {
                    SolutionStatus::Optimal => SolveStatus::Optimal,
                    SolutionStatus::TimeLimit => SolveStatus::TimeLimit,
                    SolutionStatus::GapLimit => SolveStatus::GapLimit,
                    #[allow(unreachable_patterns)]
                    other => SolveStatus::Failed(format!("{other:?}")),
                };
                let values = handles.iter().map(|&v| solution.value(v)).collect();
                SolvedProgram::new(status, values)
            }
            Err(ResolutionError::Infeasible) => SolvedProgram::without_values(SolveStatus::Infeasible),
            Err(ResolutionError::Unbounded) => SolvedProgram::without_values(SolveStatus::Unbounded),
            Err(other) => SolvedProgram::without_values(SolveStatus::Failed(other.to_string())),
        };

        info!(
            program = program.name(),
            variables = program.variable_count(),
            constraints = program.constraint_count(),
            status = %solved.status(),
            objective = program.objective_value(solved.values()),
            "solve finished"
        );

        solved
    }
}
