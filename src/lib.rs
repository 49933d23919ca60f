//! ShapeCheck Core - Composable Runtime Validators
//!
//! Validators check already-decoded JSON-like values against schemas built
//! from small combinators, and report defects located by instance path.
//!
//! # Guarantees
//! 1. `is` agrees with `inspect`: accepted iff no problem
//! 2. Inspection is lazy, restartable and deterministic
//! 3. Schemas are immutable once built
//! 4. Defects are data; only `assert` turns one into an error

pub mod value;
pub mod problem;
pub mod message;
pub mod validator;
pub mod primitive;
pub mod container;
pub mod iterable;
pub mod logical;
pub mod assertion;
pub mod factory;

pub use serde_json::Value;

pub use value::{display, dotted, Kind};
pub use problem::{PathSegment, Problem, ProblemKind};
pub use message::{Expect, Message, Messenger};
pub use validator::{Problems, Validator};
pub use primitive::{EqualityValidator, TypeValidator};
pub use container::{ArrayValidator, PartialValidator, RecordValidator, TupleValidator};
pub use iterable::{IterableValidator, Lazy, MaxInspector, MinInspector};
pub use logical::{IntersectionValidator, UnionValidator};
pub use assertion::{assert, report, AssertionError, Report, Violation};
pub use factory::{
    and, array, array_of, boolean, iter, max, min, null, number, object, one_of, or, partial,
    record, string, tuple, value,
};
