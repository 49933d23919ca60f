//! Iterable Validators - element checks over forward-only sources, and
//! cardinality bounds
//!
//! Iterable inputs are JSON arrays, JSON strings (enumerated by character),
//! slices, and any cloneable iterator wrapped in [`Lazy`]. Element checks are
//! streamed; cardinality bounds count the whole source.

use std::fmt;

use serde_json::Value;

use crate::message::{Expect, Message, Messenger};
use crate::problem::{Problem, ProblemKind};
use crate::validator::{none, one, Problems, Validator};

const ITERABLE: &str = "iterable";

/// A forward-only source.
///
/// Each inspection clones the iterator, so the source is never consumed and
/// inspection stays restartable.
#[derive(Debug, Clone)]
pub struct Lazy<I>(I);

impl<I: Iterator + Clone> Lazy<I> {
    pub fn new(source: I) -> Self {
        Self(source)
    }

    fn iter(&self) -> I {
        self.0.clone()
    }
}

/// Every element checked by `V`, in enumeration order.
pub struct IterableValidator<V> {
    element: V,
    messenger: Messenger,
}

impl<V> IterableValidator<V> {
    pub fn new(element: V) -> Self {
        Self {
            element,
            messenger: Messenger::default(),
        }
    }

    /// Check owned elements one at a time. Only the current element's
    /// problems are buffered.
    fn owned<'a, In, I>(&'a self, elements: I) -> Problems<'a>
    where
        In: 'a,
        I: Iterator<Item = In> + 'a,
        V: Validator<In>,
    {
        Box::new(elements.enumerate().flat_map(move |(index, element)| {
            let problems: Vec<Problem> = self.element.inspect(&element).collect();
            problems.into_iter().map(move |problem| problem.shift(index))
        }))
    }
}

impl<V: Validator> Validator for IterableValidator<V> {
    fn inspect<'a>(&'a self, input: &'a Value) -> Problems<'a> {
        match input {
            Value::Array(items) => Box::new(items.iter().enumerate().flat_map(move |(index, item)| {
                self.element.inspect(item).map(move |problem| problem.shift(index))
            })),
            Value::String(text) => self.owned(text.chars().map(|c| Value::String(c.to_string()))),
            other => one(Problem::shape(ITERABLE, other, self.messenger.clone())),
        }
    }

    fn messenger(&self) -> Messenger {
        self.messenger.clone()
    }
}

impl<E, V: Validator<E>> Validator<[E]> for IterableValidator<V> {
    fn inspect<'a>(&'a self, input: &'a [E]) -> Problems<'a> {
        Box::new(input.iter().enumerate().flat_map(move |(index, item)| {
            self.element.inspect(item).map(move |problem| problem.shift(index))
        }))
    }
}

impl<I, V> Validator<Lazy<I>> for IterableValidator<V>
where
    I: Iterator + Clone,
    V: Validator<I::Item>,
{
    fn inspect<'a>(&'a self, input: &'a Lazy<I>) -> Problems<'a> {
        self.owned(input.iter())
    }
}

impl<V> Expect for IterableValidator<V> {
    fn expect(mut self, message: impl Into<Message>) -> Self {
        self.messenger = Messenger::custom(message);
        self
    }
}

impl<V: fmt::Display> fmt::Display for IterableValidator<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Iterable<{}>", self.element)
    }
}

/// Element count of an iterable value, `None` if the value is not iterable.
fn count(input: &Value) -> Option<usize> {
    match input {
        Value::Array(items) => Some(items.len()),
        Value::String(text) => Some(text.chars().count()),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy)]
enum Bound {
    Min,
    Max,
}

impl Bound {
    fn violated(self, limit: usize, actual: usize) -> bool {
        match self {
            Bound::Min => actual < limit,
            Bound::Max => actual > limit,
        }
    }

    fn kind(self) -> ProblemKind {
        match self {
            Bound::Min => ProblemKind::BelowMinimum,
            Bound::Max => ProblemKind::AboveMaximum,
        }
    }
}

/// Shared body of the cardinality inspectors.
#[derive(Debug, Clone)]
struct Cardinality {
    bound: Bound,
    limit: usize,
    messenger: Messenger,
}

impl Cardinality {
    fn new(bound: Bound, limit: usize) -> Self {
        Self {
            bound,
            limit,
            messenger: Messenger::default(),
        }
    }

    fn check<'a>(&self, actual: usize) -> Problems<'a> {
        if !self.bound.violated(self.limit, actual) {
            return none();
        }

        one(Problem::new(
            self.bound.kind(),
            self.limit.to_string(),
            Value::from(actual),
            self.messenger.clone(),
        ))
    }

    fn check_value<'a>(&self, input: &Value) -> Problems<'a> {
        match count(input) {
            Some(actual) => self.check(actual),
            None => one(Problem::shape(ITERABLE, input, self.messenger.clone())),
        }
    }
}

macro_rules! cardinality_inspector {
    ($(#[$doc:meta])* $name:ident, $bound:expr, $label:literal) => {
        $(#[$doc])*
        #[derive(Debug, Clone)]
        pub struct $name(Cardinality);

        impl $name {
            pub fn new(limit: usize) -> Self {
                Self(Cardinality::new($bound, limit))
            }
        }

        impl Validator for $name {
            fn inspect<'a>(&'a self, input: &'a Value) -> Problems<'a> {
                self.0.check_value(input)
            }

            fn messenger(&self) -> Messenger {
                self.0.messenger.clone()
            }
        }

        impl<E> Validator<[E]> for $name {
            fn inspect<'a>(&'a self, input: &'a [E]) -> Problems<'a> {
                self.0.check(input.len())
            }
        }

        impl<I: Iterator + Clone> Validator<Lazy<I>> for $name {
            fn inspect<'a>(&'a self, input: &'a Lazy<I>) -> Problems<'a> {
                self.0.check(input.iter().count())
            }
        }

        impl Expect for $name {
            fn expect(mut self, message: impl Into<Message>) -> Self {
                self.0.messenger = Messenger::custom(message);
                self
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", $label, self.0.limit)
            }
        }
    };
}

cardinality_inspector!(
    /// At least `limit` elements. Counts the whole source.
    MinInspector,
    Bound::Min,
    "Min"
);

cardinality_inspector!(
    /// At most `limit` elements. Counts the whole source.
    MaxInspector,
    Bound::Max,
    "Max"
);
