//! Schema Construction
//!
//! Free functions that build validator trees. Construction is pure; the
//! resulting trees are immutable and can be shared across threads.

use serde_json::Value;

use crate::container::{ArrayValidator, PartialValidator, RecordValidator, TupleValidator};
use crate::iterable::{IterableValidator, MaxInspector, MinInspector};
use crate::logical::{IntersectionValidator, UnionValidator};
use crate::primitive::{EqualityValidator, TypeValidator};
use crate::validator::Validator;
use crate::value::Kind;

pub fn string() -> TypeValidator {
    TypeValidator::new(Kind::String)
}

pub fn number() -> TypeValidator {
    TypeValidator::new(Kind::Number)
}

pub fn boolean() -> TypeValidator {
    TypeValidator::new(Kind::Boolean)
}

pub fn null() -> TypeValidator {
    TypeValidator::new(Kind::Null)
}

/// A key-value mapping. Arrays and null are not objects.
pub fn object() -> TypeValidator {
    TypeValidator::new(Kind::Object)
}

/// Any array; elements are not checked.
pub fn array() -> ArrayValidator {
    ArrayValidator::new()
}

/// An array whose every element passes `element`.
pub fn array_of(element: impl Validator + 'static) -> ArrayValidator {
    ArrayValidator::of(element)
}

/// Exactly `literal`.
pub fn value(literal: impl Into<Value>) -> EqualityValidator {
    EqualityValidator::new(literal)
}

/// Any one of `literals`.
pub fn one_of<T: Into<Value>>(literals: impl IntoIterator<Item = T>) -> UnionValidator {
    UnionValidator::new(literals.into_iter().map(|literal| value(literal).boxed()))
}

/// An object whose declared keys, when present, pass their validators.
pub fn partial<K: Into<String>>(
    fields: impl IntoIterator<Item = (K, Box<dyn Validator>)>,
) -> PartialValidator {
    fields.into_iter().collect()
}

/// An object whose every key passes `key` and every value passes `value`.
pub fn record<K: Validator, V: Validator>(key: K, value: V) -> RecordValidator<K, V> {
    RecordValidator::new(key, value)
}

/// An array checked position by position.
pub fn tuple(positions: impl IntoIterator<Item = Box<dyn Validator>>) -> TupleValidator {
    TupleValidator::new(positions)
}

/// Any iterable whose every element passes `element`.
pub fn iter<V>(element: V) -> IterableValidator<V> {
    IterableValidator::new(element)
}

/// Passes when any branch passes.
pub fn or(branches: impl IntoIterator<Item = Box<dyn Validator>>) -> UnionValidator {
    UnionValidator::new(branches)
}

/// Passes when both `left` and `right` pass.
pub fn and<L, R>(left: L, right: R) -> IntersectionValidator<L, R> {
    IntersectionValidator::new(left, right)
}

/// At least `limit` elements.
pub fn min(limit: usize) -> MinInspector {
    MinInspector::new(limit)
}

/// At most `limit` elements.
pub fn max(limit: usize) -> MaxInspector {
    MaxInspector::new(limit)
}
