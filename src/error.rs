//! Error types.
//!
//! Two failures are fatal to a scheduling request:
//! - [`ConfigurationError`]: the request or catalog is malformed (raised
//!   before any program is built).
//! - [`ModelNotOptimalError`]: the solver did not prove optimality, so
//!   no schedule is decoded.

use std::fmt;

use thiserror::Error;

use crate::ilp::SolveStatus;

/// Crate-level result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Any error produced while building, solving, or decoding a request.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    ModelNotOptimal(#[from] ModelNotOptimalError),

    #[error("solution has {actual} values but the program has {expected} variables")]
    SolutionMismatch { expected: usize, actual: usize },
}

/// The domain description is invalid.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("invalid configuration: {}", IssueList(.0))]
    Invalid(Vec<ConfigurationIssue>),

    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ConfigurationError {
    /// Issues found by validation. Empty for parse failures.
    pub fn issues(&self) -> &[ConfigurationIssue] {
        match self {
            Self::Invalid(issues) => issues,
            Self::Parse(_) => &[],
        }
    }

    /// Whether any issue has the given kind.
    pub fn has_kind(&self, kind: &ConfigurationIssueKind) -> bool {
        self.issues().iter().any(|i| &i.kind == kind)
    }
}

/// A single configuration problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigurationIssue {
    /// Issue category.
    pub kind: ConfigurationIssueKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of configuration problems.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationIssueKind {
    /// A plane references a task that is not in the catalog.
    UnknownTask,
    /// Two planes share a name.
    DuplicatePlane,
    /// Two workers share a name.
    DuplicateWorker,
    /// A catalog task requires no qualification.
    EmptyQualifications,
    /// A catalog task takes zero hours.
    ZeroDuration,
}

impl ConfigurationIssue {
    pub(crate) fn new(kind: ConfigurationIssueKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ConfigurationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

struct IssueList<'a>(&'a [ConfigurationIssue]);

impl fmt::Display for IssueList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, issue) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{issue}")?;
        }
        Ok(())
    }
}

/// Decoding was attempted on a solve that did not end in proved optimality.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("model is not optimal (solver status: {status})")]
pub struct ModelNotOptimalError {
    /// The solver's terminal state.
    pub status: SolveStatus,
}
