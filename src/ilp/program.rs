//! Solver-neutral binary integer program.
//!
//! Every variable is binary and keyed by what it means in the domain.
//! Constraints are linear with integer coefficients, written as
//! `Σ coefficient · variable (<= | ==) rhs`. The objective is always
//! maximised.
//!
//! Auxiliary indices (plane → its `task_done` variables, worker → its
//! `worker_does` variables, plane task → its `worker_does` variables) are
//! maintained as variables are added, so constraint generation never scans
//! the full variable list.

use std::collections::HashMap;
use std::fmt;

/// Handle to a program variable (its position in the variable list).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VarId(usize);

impl VarId {
    /// Position in [`BinaryProgram::variables`] and in solved value vectors.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Domain meaning of a binary variable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum VarKey {
    /// Task `task` on plane `plane` is done.
    TaskDone { plane: String, task: String },
    /// `worker` performs `task` on `plane`.
    WorkerDoes {
        worker: String,
        plane: String,
        task: String,
    },
    /// `plane` is deployable.
    PlaneReady { plane: String },
}

impl VarKey {
    pub fn task_done(plane: impl Into<String>, task: impl Into<String>) -> Self {
        Self::TaskDone {
            plane: plane.into(),
            task: task.into(),
        }
    }

    pub fn worker_does(
        worker: impl Into<String>,
        plane: impl Into<String>,
        task: impl Into<String>,
    ) -> Self {
        Self::WorkerDoes {
            worker: worker.into(),
            plane: plane.into(),
            task: task.into(),
        }
    }

    pub fn plane_ready(plane: impl Into<String>) -> Self {
        Self::PlaneReady {
            plane: plane.into(),
        }
    }
}

impl fmt::Display for VarKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TaskDone { plane, task } => write!(f, "task_done[{plane},{task}]"),
            Self::WorkerDoes {
                worker,
                plane,
                task,
            } => write!(f, "worker_does[{worker},{plane},{task}]"),
            Self::PlaneReady { plane } => write!(f, "plane_ready[{plane}]"),
        }
    }
}

/// `coefficient · variable`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Term {
    pub var: VarId,
    pub coefficient: i64,
}

impl Term {
    pub fn new(var: VarId, coefficient: i64) -> Self {
        Self { var, coefficient }
    }
}

/// Relation between a constraint's left-hand side and its bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    LessOrEqual,
    Equal,
}

/// Which rule a constraint enforces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstraintFamily {
    /// `plane_ready[p] <= task_done[p, t]`
    PlaneCompletion,
    /// `task_done[p, t] <= Σ_w worker_does[w, p, t]`
    TaskCoverage,
    /// `Σ worker_does[w, p, t] · duration[t] <= working_hours`
    WorkerHours,
    /// `worker_does[w, p, t] <= 1` if qualified, `== 0` otherwise
    Qualification,
}

/// A linear constraint `Σ terms (cmp) rhs`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinearConstraint {
    pub family: ConstraintFamily,
    pub terms: Vec<Term>,
    pub comparison: Comparison,
    pub rhs: i64,
}

impl LinearConstraint {
    pub fn new(
        family: ConstraintFamily,
        terms: Vec<Term>,
        comparison: Comparison,
        rhs: i64,
    ) -> Self {
        Self {
            family,
            terms,
            comparison,
            rhs,
        }
    }

    /// Left-hand side evaluated at `values` (indexed by [`VarId::index`]).
    pub fn lhs(&self, values: &[f64]) -> f64 {
        self.terms
            .iter()
            .map(|t| t.coefficient as f64 * values.get(t.var.index()).copied().unwrap_or(0.0))
            .sum()
    }

    /// Whether `values` satisfy this constraint (within `1e-6`).
    pub fn is_satisfied_by(&self, values: &[f64]) -> bool {
        const EPS: f64 = 1e-6;
        let lhs = self.lhs(values);
        let rhs = self.rhs as f64;
        match self.comparison {
            Comparison::LessOrEqual => lhs <= rhs + EPS,
            Comparison::Equal => (lhs - rhs).abs() <= EPS,
        }
    }
}

/// A complete binary integer program: variables, constraints, and a
/// maximisation objective.
#[derive(Debug, Clone, Default)]
pub struct BinaryProgram {
    name: String,
    variables: Vec<VarKey>,
    constraints: Vec<LinearConstraint>,
    objective: Vec<Term>,
    lookup: HashMap<VarKey, VarId>,
    plane_task_vars: HashMap<String, Vec<VarId>>,
    worker_vars: HashMap<String, Vec<VarId>>,
    assignee_vars: HashMap<(String, String), Vec<VarId>>,
}

impl BinaryProgram {
    /// Creates an empty program.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Program name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Adds a binary variable, returning the existing handle if the key
    /// is already present.
    pub fn add_variable(&mut self, key: VarKey) -> VarId {
        if let Some(&id) = self.lookup.get(&key) {
            return id;
        }

        let id = VarId(self.variables.len());
        match &key {
            VarKey::TaskDone { plane, .. } => {
                self.plane_task_vars.entry(plane.clone()).or_default().push(id);
            }
            VarKey::WorkerDoes {
                worker,
                plane,
                task,
            } => {
                self.worker_vars.entry(worker.clone()).or_default().push(id);
                self.assignee_vars
                    .entry((plane.clone(), task.clone()))
                    .or_default()
                    .push(id);
            }
            VarKey::PlaneReady { .. } => {}
        }
        self.lookup.insert(key.clone(), id);
        self.variables.push(key);
        id
    }

    /// Adds a constraint.
    pub fn add_constraint(&mut self, constraint: LinearConstraint) {
        self.constraints.push(constraint);
    }

    /// Sets the maximisation objective.
    pub fn set_objective(&mut self, terms: Vec<Term>) {
        self.objective = terms;
    }

    /// All variables, in [`VarId`] order.
    pub fn variables(&self) -> &[VarKey] {
        &self.variables
    }

    /// Number of variables.
    pub fn variable_count(&self) -> usize {
        self.variables.len()
    }

    /// Key of a variable.
    pub fn key(&self, id: VarId) -> &VarKey {
        &self.variables[id.index()]
    }

    /// Handle of the variable with this key.
    pub fn var(&self, key: &VarKey) -> Option<VarId> {
        self.lookup.get(key).copied()
    }

    /// `task_done[plane, task]`, if modelled.
    pub fn task_done(&self, plane: &str, task: &str) -> Option<VarId> {
        self.var(&VarKey::task_done(plane, task))
    }

    /// `worker_does[worker, plane, task]`, if modelled.
    pub fn worker_does(&self, worker: &str, plane: &str, task: &str) -> Option<VarId> {
        self.var(&VarKey::worker_does(worker, plane, task))
    }

    /// `plane_ready[plane]`, if modelled.
    pub fn plane_ready(&self, plane: &str) -> Option<VarId> {
        self.var(&VarKey::plane_ready(plane))
    }

    /// `task_done` variables of a plane.
    pub fn plane_task_vars(&self, plane: &str) -> &[VarId] {
        self.plane_task_vars.get(plane).map(Vec::as_slice).unwrap_or(&[])
    }

    /// `worker_does` variables of a worker.
    pub fn worker_vars(&self, worker: &str) -> &[VarId] {
        self.worker_vars.get(worker).map(Vec::as_slice).unwrap_or(&[])
    }

    /// `worker_does` variables of one plane task, one per worker.
    pub fn assignee_vars(&self, plane: &str, task: &str) -> &[VarId] {
        self.assignee_vars
            .get(&(plane.to_string(), task.to_string()))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// All constraints.
    pub fn constraints(&self) -> &[LinearConstraint] {
        &self.constraints
    }

    /// Number of constraints.
    pub fn constraint_count(&self) -> usize {
        self.constraints.len()
    }

    /// Constraints of one family.
    pub fn constraints_in(
        &self,
        family: ConstraintFamily,
    ) -> impl Iterator<Item = &LinearConstraint> + '_ {
        self.constraints.iter().filter(move |c| c.family == family)
    }

    /// Objective terms.
    pub fn objective(&self) -> &[Term] {
        &self.objective
    }

    /// Objective value at `values`.
    pub fn objective_value(&self, values: &[f64]) -> f64 {
        self.objective
            .iter()
            .map(|t| t.coefficient as f64 * values.get(t.var.index()).copied().unwrap_or(0.0))
            .sum()
    }

    /// Whether `values` satisfy every constraint and are binary.
    pub fn is_feasible(&self, values: &[f64]) -> bool {
        values.len() == self.variables.len()
            && values.iter().all(|&v| v.abs() < 1e-6 || (v - 1.0).abs() < 1e-6)
            && self.constraints.iter().all(|c| c.is_satisfied_by(values))
    }
}
