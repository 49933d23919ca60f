//! Assertion Facade - fail-fast and batch entry points
//!
//! `assert` surfaces only the first problem as an error and drops the rest.
//! Callers that need every defect use `report` (or drive `inspect` directly).

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::problem::{PathSegment, Problem, ProblemKind};
use crate::validator::Validator;

/// The first defect found by [`assert`], rendered.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AssertionError {
    pub message: String,
    pub instance_path: Vec<PathSegment>,
    pub kind: ProblemKind,
}

impl From<Problem> for AssertionError {
    fn from(problem: Problem) -> Self {
        Self {
            message: problem.message(),
            instance_path: problem.instance_path.into(),
            kind: problem.kind,
        }
    }
}

/// Validate or abort: `Err` carrying the first problem, `Ok` if there is none.
pub fn assert<In, V>(input: &In, validator: &V) -> Result<(), AssertionError>
where
    In: ?Sized,
    V: Validator<In> + ?Sized,
{
    let Some(problem) = validator.inspect(input).next() else {
        return Ok(());
    };

    tracing::debug!(
        path = %problem.path(),
        kind = ?problem.kind,
        validator = %validator,
        "assertion failed"
    );

    Err(problem.into())
}

/// One rendered defect of a [`Report`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Violation {
    pub instance_path: Vec<PathSegment>,
    pub kind: ProblemKind,
    pub expected: String,
    pub actual: Value,
    pub message: String,
}

impl From<Problem> for Violation {
    fn from(problem: Problem) -> Self {
        let message = problem.message();
        Self {
            instance_path: problem.instance_path.into(),
            kind: problem.kind,
            expected: problem.expected,
            actual: problem.actual,
            message,
        }
    }
}

/// Every defect of one value, in traversal order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub valid: bool,
    pub violations: Vec<Violation>,
}

impl Report {
    pub fn success() -> Self {
        Self {
            valid: true,
            violations: vec![],
        }
    }

    pub fn failure(violations: Vec<Violation>) -> Self {
        Self {
            valid: false,
            violations,
        }
    }

    pub fn messages(&self) -> Vec<&str> {
        self.violations.iter().map(|v| v.message.as_str()).collect()
    }
}

/// Drive `inspect` to exhaustion and collect every defect.
pub fn report<In, V>(input: &In, validator: &V) -> Report
where
    In: ?Sized,
    V: Validator<In> + ?Sized,
{
    let violations: Vec<Violation> = validator.inspect(input).map(Violation::from).collect();

    tracing::trace!(violations = violations.len(), validator = %validator, "report complete");

    if violations.is_empty() {
        Report::success()
    } else {
        Report::failure(violations)
    }
}
