//! Primitive Validators - exact category and exact literal

use std::fmt;

use serde_json::Value;

use crate::message::{Expect, Message, Messenger};
use crate::problem::{Problem, ProblemKind};
use crate::validator::{none, one, Problems, Validator};
use crate::value::{display, literal_eq, Kind};

/// Accepts only values of one [`Kind`].
#[derive(Debug, Clone)]
pub struct TypeValidator {
    kind: Kind,
    messenger: Messenger,
}

impl TypeValidator {
    pub fn new(kind: Kind) -> Self {
        Self {
            kind,
            messenger: Messenger::default(),
        }
    }
}

impl Validator for TypeValidator {
    fn inspect<'a>(&'a self, input: &'a Value) -> Problems<'a> {
        let actual = Kind::of(input);

        if actual == self.kind {
            return none();
        }

        one(Problem::new(
            ProblemKind::TypeMismatch,
            self.kind.as_str(),
            Value::from(actual.as_str()),
            self.messenger.clone(),
        ))
    }

    fn is(&self, input: &Value) -> bool {
        Kind::of(input) == self.kind
    }

    fn messenger(&self) -> Messenger {
        self.messenger.clone()
    }
}

impl Expect for TypeValidator {
    fn expect(mut self, message: impl Into<Message>) -> Self {
        self.messenger = Messenger::custom(message);
        self
    }
}

impl fmt::Display for TypeValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}

/// Accepts only one literal.
#[derive(Debug, Clone)]
pub struct EqualityValidator {
    literal: Value,
    messenger: Messenger,
}

impl EqualityValidator {
    pub fn new(literal: impl Into<Value>) -> Self {
        Self {
            literal: literal.into(),
            messenger: Messenger::default(),
        }
    }
}

impl Validator for EqualityValidator {
    fn inspect<'a>(&'a self, input: &'a Value) -> Problems<'a> {
        if literal_eq(input, &self.literal) {
            return none();
        }

        one(Problem::new(
            ProblemKind::EqualityMismatch,
            display(&self.literal),
            input.clone(),
            self.messenger.clone(),
        ))
    }

    fn is(&self, input: &Value) -> bool {
        literal_eq(input, &self.literal)
    }

    fn messenger(&self) -> Messenger {
        self.messenger.clone()
    }
}

impl Expect for EqualityValidator {
    fn expect(mut self, message: impl Into<Message>) -> Self {
        self.messenger = Messenger::custom(message);
        self
    }
}

impl fmt::Display for EqualityValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&display(&self.literal))
    }
}
