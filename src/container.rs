//! Container Combinators - validators that recurse into structure
//!
//! Child problems are re-emitted with the element's index or the entry's key
//! prepended to their path.

use std::fmt;

use serde_json::Value;

use crate::message::{Expect, Message, Messenger};
use crate::problem::{Problem, ProblemKind};
use crate::validator::{none, one, Problems, Validator};
use crate::value::Kind;

/// Ordered sequence, optionally with every element checked.
pub struct ArrayValidator {
    element: Option<Box<dyn Validator>>,
    messenger: Messenger,
}

impl ArrayValidator {
    /// Any array, elements unchecked.
    pub fn new() -> Self {
        Self {
            element: None,
            messenger: Messenger::default(),
        }
    }

    /// Arrays whose every element passes `element`.
    pub fn of(element: impl Validator + 'static) -> Self {
        Self {
            element: Some(element.boxed()),
            messenger: Messenger::default(),
        }
    }
}

impl Default for ArrayValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator for ArrayValidator {
    fn inspect<'a>(&'a self, input: &'a Value) -> Problems<'a> {
        let Value::Array(items) = input else {
            return one(Problem::shape(Kind::Array.as_str(), input, self.messenger.clone()));
        };

        match &self.element {
            None => none(),
            Some(element) => Box::new(items.iter().enumerate().flat_map(move |(index, item)| {
                element.inspect(item).map(move |problem| problem.shift(index))
            })),
        }
    }

    fn messenger(&self) -> Messenger {
        self.messenger.clone()
    }
}

impl Expect for ArrayValidator {
    fn expect(mut self, message: impl Into<Message>) -> Self {
        self.messenger = Messenger::custom(message);
        self
    }
}

impl fmt::Display for ArrayValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.element {
            Some(element) => write!(f, "{}[]", element),
            None => f.write_str("unknown[]"),
        }
    }
}

/// Positional, heterogeneous sequence check.
///
/// Elements beyond the last validator are not checked. A position that has a
/// validator but no element is reported at that index as `undefined`, rendered
/// by that position's validator.
pub struct TupleValidator {
    positions: Vec<Box<dyn Validator>>,
    messenger: Messenger,
}

impl TupleValidator {
    pub fn new(positions: impl IntoIterator<Item = Box<dyn Validator>>) -> Self {
        Self {
            positions: positions.into_iter().collect(),
            messenger: Messenger::default(),
        }
    }
}

impl Validator for TupleValidator {
    fn inspect<'a>(&'a self, input: &'a Value) -> Problems<'a> {
        let Value::Array(items) = input else {
            return one(Problem::shape(Kind::Array.as_str(), input, self.messenger.clone()));
        };

        Box::new(self.positions.iter().enumerate().flat_map(move |(index, validator)| {
            let problems = match items.get(index) {
                Some(item) => validator.inspect(item),
                None => one(Problem::new(
                    ProblemKind::ShapeMismatch,
                    validator.to_string(),
                    Value::from("undefined"),
                    validator.messenger(),
                )),
            };
            problems.map(move |problem| problem.shift(index))
        }))
    }

    fn messenger(&self) -> Messenger {
        self.messenger.clone()
    }
}

impl Expect for TupleValidator {
    fn expect(mut self, message: impl Into<Message>) -> Self {
        self.messenger = Messenger::custom(message);
        self
    }
}

impl fmt::Display for TupleValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let positions: Vec<String> = self.positions.iter().map(|v| v.to_string()).collect();
        write!(f, "[{}]", positions.join(", "))
    }
}

/// Every entry's key checked by `K`, every entry's value by `V`.
pub struct RecordValidator<K, V> {
    key: K,
    value: V,
    messenger: Messenger,
}

impl<K: Validator, V: Validator> RecordValidator<K, V> {
    pub fn new(key: K, value: V) -> Self {
        Self {
            key,
            value,
            messenger: Messenger::default(),
        }
    }
}

impl<K: Validator, V: Validator> Validator for RecordValidator<K, V> {
    fn inspect<'a>(&'a self, input: &'a Value) -> Problems<'a> {
        let Value::Object(entries) = input else {
            return one(Problem::shape(Kind::Object.as_str(), input, self.messenger.clone()));
        };

        Box::new(entries.iter().flat_map(move |(key, value)| {
            let name = Value::String(key.clone());
            let key_problems: Vec<Problem> = self.key.inspect(&name).collect();

            key_problems
                .into_iter()
                .chain(self.value.inspect(value))
                .map(move |problem| problem.shift(key.as_str()))
        }))
    }

    fn messenger(&self) -> Messenger {
        self.messenger.clone()
    }
}

impl<K, V> Expect for RecordValidator<K, V> {
    fn expect(mut self, message: impl Into<Message>) -> Self {
        self.messenger = Messenger::custom(message);
        self
    }
}

impl<K: fmt::Display, V: fmt::Display> fmt::Display for RecordValidator<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Record<{}, {}>", self.key, self.value)
    }
}

/// Declared keys checked only when present; undeclared keys ignored.
pub struct PartialValidator {
    fields: Vec<(String, Box<dyn Validator>)>,
    messenger: Messenger,
}

impl PartialValidator {
    pub fn new() -> Self {
        Self {
            fields: vec![],
            messenger: Messenger::default(),
        }
    }

    /// Declare `name`. Redeclaring a key replaces its validator in place.
    pub fn field(mut self, name: impl Into<String>, validator: impl Validator + 'static) -> Self {
        self.insert(name.into(), validator.boxed());
        self
    }

    fn insert(&mut self, name: String, validator: Box<dyn Validator>) {
        match self.fields.iter_mut().find(|(declared, _)| *declared == name) {
            Some((_, slot)) => *slot = validator,
            None => self.fields.push((name, validator)),
        }
    }

    pub fn declared(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }
}

impl Default for PartialValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Into<String>> FromIterator<(K, Box<dyn Validator>)> for PartialValidator {
    fn from_iter<I: IntoIterator<Item = (K, Box<dyn Validator>)>>(iter: I) -> Self {
        let mut partial = Self::new();
        for (name, validator) in iter {
            partial.insert(name.into(), validator);
        }
        partial
    }
}

impl Validator for PartialValidator {
    fn inspect<'a>(&'a self, input: &'a Value) -> Problems<'a> {
        let Value::Object(entries) = input else {
            return one(Problem::shape(Kind::Object.as_str(), input, self.messenger.clone()));
        };

        Box::new(
            self.fields
                .iter()
                .filter_map(move |(name, validator)| {
                    entries.get(name).map(|value| (name, validator, value))
                })
                .flat_map(|(name, validator, value)| {
                    validator
                        .inspect(value)
                        .map(move |problem| problem.shift(name.as_str()))
                }),
        )
    }

    fn messenger(&self) -> Messenger {
        self.messenger.clone()
    }
}

impl Expect for PartialValidator {
    fn expect(mut self, message: impl Into<Message>) -> Self {
        self.messenger = Messenger::custom(message);
        self
    }
}

impl fmt::Display for PartialValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.fields.is_empty() {
            return f.write_str("Partial<{}>");
        }

        let fields: Vec<String> = self
            .fields
            .iter()
            .map(|(name, validator)| format!("{}: {}", name, validator))
            .collect();
        write!(f, "Partial<{{ {} }}>", fields.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory::{array, array_of, boolean, number, partial, record, string, tuple, value};
    use crate::problem::PathSegment;
    use serde_json::json;

    fn paths(problems: Problems<'_>) -> Vec<Vec<PathSegment>> {
        problems.map(|p| p.instance_path.into()).collect()
    }

    #[test]
    fn test_array_without_element_accepts_any_array() {
        let validator = array();
        assert!(validator.is(&json!([1, "a", null])));
        assert!(!validator.is(&json!({})));
        assert_eq!(validator.to_string(), "unknown[]");

        let problems: Vec<_> = validator.inspect(&json!("a")).collect();
        assert_eq!(problems[0].kind, ProblemKind::ShapeMismatch);
        assert_eq!(problems[0].message(), "should be array but string");
    }

    #[test]
    fn test_array_shifts_index() {
        let validator = array_of(string());
        assert_eq!(validator.to_string(), "string[]");
        assert_eq!(
            paths(validator.inspect(&json!(["a", 1, "c", false]))),
            vec![vec![PathSegment::Index(1)], vec![PathSegment::Index(3)]]
        );
    }

    #[test]
    fn test_array_stops_early_for_is() {
        let validator = array_of(string());
        let input = json!([0, 1, 2]);
        let mut problems = validator.inspect(&input);
        assert_eq!(
            problems.next().map(|p| Vec::from(p.instance_path)),
            Some(vec![PathSegment::Index(0)])
        );
        assert_eq!(validator.inspect(&input).count(), 3);
    }

    #[test]
    fn test_tuple_is_positional() {
        let validator = tuple([string().boxed(), number().boxed()]);
        assert_eq!(validator.to_string(), "[string, number]");
        assert!(validator.is(&json!(["a", 1])));
        assert!(validator.is(&json!(["a", 1, "extra", null])));
        assert_eq!(
            paths(validator.inspect(&json!([1, "a"]))),
            vec![vec![PathSegment::Index(0)], vec![PathSegment::Index(1)]]
        );
    }

    #[test]
    fn test_tuple_missing_position() {
        let validator = tuple([string().boxed(), number().boxed()]);
        let problems: Vec<_> = validator.inspect(&json!(["a"])).collect();
        assert_eq!(problems.len(), 1);
        assert_eq!(problems[0].message(), "'1' should be number but undefined");
    }

    #[test]
    fn test_tuple_missing_position_uses_position_message() {
        let validator = tuple([string().expect("first must be a string").boxed()]);
        let problems: Vec<_> = validator.inspect(&json!([])).collect();
        assert_eq!(problems.len(), 1);
        assert_eq!(problems[0].instance_path, vec![PathSegment::Index(0)]);
        assert_eq!(problems[0].message(), "first must be a string");

        let outer = tuple([string().boxed()]).expect("pair expected");
        let problems: Vec<_> = outer.inspect(&json!([])).collect();
        assert_eq!(problems[0].message(), "'0' should be string but undefined");
    }

    #[test]
    fn test_record_checks_keys_and_values() {
        let validator = record(value("a"), boolean());
        assert_eq!(validator.to_string(), "Record<'a', boolean>");

        let problems: Vec<_> = validator.inspect(&json!({"a": true, "b": 0})).collect();
        assert_eq!(problems.len(), 2);
        assert_eq!(problems[0].message(), "'b' should be 'a' but 'b'");
        assert_eq!(problems[1].message(), "'b' should be boolean but number");
    }

    #[test]
    fn test_record_follows_document_order() {
        let validator = record(string(), string());
        assert_eq!(
            paths(validator.inspect(&json!({"z": 1, "a": "ok", "m": null}))),
            vec![vec![PathSegment::from("z")], vec![PathSegment::from("m")]]
        );
    }

    #[test]
    fn test_partial_skips_absent_and_undeclared() {
        let validator = partial([("a", string().boxed()), ("b", boolean().boxed())]);
        assert_eq!(validator.to_string(), "Partial<{ a: string, b: boolean }>");
        assert!(validator.is(&json!({})));
        assert!(validator.is(&json!({"a": "x", "extra": 0})));
        assert_eq!(
            paths(validator.inspect(&json!({"b": 1, "a": 2}))),
            vec![vec![PathSegment::from("a")], vec![PathSegment::from("b")]]
        );
    }

    #[test]
    fn test_partial_redeclared_field_replaces() {
        let validator = PartialValidator::new()
            .field("a", string())
            .field("b", boolean())
            .field("a", number());
        assert_eq!(validator.declared().collect::<Vec<_>>(), vec!["a", "b"]);
        assert!(validator.is(&json!({"a": 1})));
    }

    #[test]
    fn test_container_custom_message_applies_to_own_problems_only() {
        let validator = partial([("a", string().boxed())]).expect("not an object");
        let problems: Vec<_> = validator.inspect(&json!([])).collect();
        assert_eq!(problems[0].message(), "not an object");

        let problems: Vec<_> = validator.inspect(&json!({"a": 0})).collect();
        assert_eq!(problems[0].message(), "'a' should be string but number");
    }
}
