//! Messaging - rendering a Problem as text
//!
//! Every validator owns a [`Messenger`] and hands a copy to each problem it
//! raises. Without a custom message the default template for the problem's
//! kind is used, prefixed by the quoted dotted path unless the problem sits at
//! the root.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::problem::{Problem, ProblemKind};
use crate::value::display;

type DynamicMessage = dyn Fn(&Problem) -> String + Send + Sync;

/// A custom message attached with [`Expect::expect`].
#[derive(Clone)]
pub enum Message {
    Text(Arc<str>),
    Dynamic(Arc<DynamicMessage>),
}

impl Message {
    /// A message computed from the problem.
    pub fn dynamic<F>(f: F) -> Self
    where
        F: Fn(&Problem) -> String + Send + Sync + 'static,
    {
        Message::Dynamic(Arc::new(f))
    }

    pub fn render(&self, problem: &Problem) -> String {
        match self {
            Message::Text(text) => text.to_string(),
            Message::Dynamic(f) => f(problem),
        }
    }
}

impl From<&str> for Message {
    fn from(text: &str) -> Self {
        Message::Text(text.into())
    }
}

impl From<String> for Message {
    fn from(text: String) -> Self {
        Message::Text(text.into())
    }
}

impl fmt::Debug for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Message::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Message::Dynamic(_) => f.write_str("Dynamic(..)"),
        }
    }
}

/// Turns a problem into the final human string.
#[derive(Debug, Clone, Default)]
pub struct Messenger {
    custom: Option<Message>,
}

impl Messenger {
    pub fn custom(message: impl Into<Message>) -> Self {
        Self {
            custom: Some(message.into()),
        }
    }

    pub fn is_custom(&self) -> bool {
        self.custom.is_some()
    }

    pub fn message(&self, problem: &Problem) -> String {
        match &self.custom {
            Some(message) => message.render(problem),
            None => default_message(problem),
        }
    }
}

/// Fluent attachment of a custom message.
///
/// The message only renders problems the validator raises itself; problems
/// re-emitted from its children keep their own messenger.
pub trait Expect: Sized {
    fn expect(self, message: impl Into<Message>) -> Self;
}

/// `"'<path>' <template>"`, or just the template at the root.
pub fn default_message(problem: &Problem) -> String {
    let body = template(problem);

    if problem.is_root() {
        body
    } else {
        format!("'{}' {}", problem.path(), body)
    }
}

/// Path-less body of the default message.
pub fn template(problem: &Problem) -> String {
    match problem.kind {
        ProblemKind::TypeMismatch | ProblemKind::ShapeMismatch => {
            format!("should be {} but {}", problem.expected, raw(&problem.actual))
        }
        ProblemKind::EqualityMismatch | ProblemKind::DisjunctionMismatch => {
            format!("should be {} but {}", problem.expected, display(&problem.actual))
        }
        ProblemKind::BelowMinimum => format!(
            "should be greater than or equal to {} but {}",
            problem.expected, problem.actual
        ),
        ProblemKind::AboveMaximum => format!(
            "should be less than or equal to {} but {}",
            problem.expected, problem.actual
        ),
    }
}

fn raw(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// English disjunctive list: `a`, `a or b`, `a, b, or c`.
pub fn disjunction<T: AsRef<str>>(items: &[T]) -> String {
    match items {
        [] => String::new(),
        [only] => only.as_ref().to_string(),
        [first, second] => format!("{} or {}", first.as_ref(), second.as_ref()),
        [init @ .., last] => {
            let head: Vec<&str> = init.iter().map(AsRef::as_ref).collect();
            format!("{}, or {}", head.join(", "), last.as_ref())
        }
    }
}
