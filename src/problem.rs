//! Problem Model - one located validation defect
//!
//! Problems are produced bottom-up. Containers prepend their own key or index
//! when re-emitting a child's problems, so a path always reads outer to inner.

use std::collections::VecDeque;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::message::Messenger;
use crate::value::{dotted, Kind};

/// One step of an instance path: an object key or an array index.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathSegment {
    Index(usize),
    Key(String),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Index(i) => write!(f, "{}", i),
            PathSegment::Key(k) => f.write_str(k),
        }
    }
}

impl From<usize> for PathSegment {
    fn from(index: usize) -> Self {
        PathSegment::Index(index)
    }
}

impl From<&str> for PathSegment {
    fn from(key: &str) -> Self {
        PathSegment::Key(key.to_string())
    }
}

impl From<String> for PathSegment {
    fn from(key: String) -> Self {
        PathSegment::Key(key)
    }
}

/// Defect taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProblemKind {
    /// Runtime category differs from the expected primitive category.
    TypeMismatch,
    /// Value differs from a required literal.
    EqualityMismatch,
    /// Value is not the container category a combinator requires.
    ShapeMismatch,
    /// Value matches none of a union's branches.
    DisjunctionMismatch,
    /// Element count below the minimum.
    BelowMinimum,
    /// Element count above the maximum.
    AboveMaximum,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Problem {
    /// Path from the root value to the defect.
    pub instance_path: VecDeque<PathSegment>,
    pub kind: ProblemKind,
    /// What the raising validator expected, already rendered for humans.
    pub expected: String,
    /// The offending value. For type and shape mismatches this is the
    /// observed category name.
    pub actual: Value,
    /// Messenger of the validator that raised the problem.
    #[serde(skip)]
    pub by: Messenger,
}

impl Problem {
    /// A root-level problem.
    pub fn new(kind: ProblemKind, expected: impl Into<String>, actual: Value, by: Messenger) -> Self {
        Self {
            instance_path: VecDeque::new(),
            kind,
            expected: expected.into(),
            actual,
            by,
        }
    }

    /// The input is not the container category `expected`.
    pub fn shape(expected: impl Into<String>, input: &Value, by: Messenger) -> Self {
        let actual = Value::from(Kind::of(input).as_str());
        Self::new(ProblemKind::ShapeMismatch, expected, actual, by)
    }

    /// Prepend `segment` to the instance path.
    pub fn shift(mut self, segment: impl Into<PathSegment>) -> Self {
        self.instance_path.push_front(segment.into());
        self
    }

    pub fn is_root(&self) -> bool {
        self.instance_path.is_empty()
    }

    /// Instance path joined by `.`.
    pub fn path(&self) -> String {
        dotted(&self.instance_path)
    }

    /// Final human message, via the raising validator's messenger.
    pub fn message(&self) -> String {
        self.by.message(self)
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}
