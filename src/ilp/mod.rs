//! Binary integer programming formulation.
//!
//! Bridges the maintenance domain models to a MILP solver in three
//! sequential phases:
//!
//! 1. [`MaintenanceModelBuilder`] validates a request and builds a
//!    solver-neutral [`BinaryProgram`].
//! 2. A [`MipSolver`] (by default [`GoodLpSolver`]) solves it.
//! 3. [`decode`] extracts the worker schedule and deployable planes from
//!    an optimal [`SolvedProgram`].
//!
//! Each request gets a fresh program; nothing is reused across requests.
//!
//! # Reference
//! Wolsey (1998), "Integer Programming", Ch. 1 (formulations)

mod builder;
mod decoder;
mod eligibility;
mod program;
mod solver;

pub use builder::MaintenanceModelBuilder;
pub use decoder::{decode, TRUTH_THRESHOLD};
pub use eligibility::EligibilityMatrix;
pub use program::{
    BinaryProgram, Comparison, ConstraintFamily, LinearConstraint, Term, VarId, VarKey,
};
pub use solver::{GoodLpSolver, MipSolver, SolveStatus, SolvedProgram};
