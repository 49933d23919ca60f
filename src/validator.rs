//! Validator Contract
//!
//! A validator tests membership (`is`) and enumerates defects lazily
//! (`inspect`). Each `inspect` call builds a fresh iterator, so the stream is
//! restartable, and `is` stops at the first defect.

use std::fmt;

use serde_json::Value;

use crate::message::Messenger;
use crate::problem::Problem;

/// Lazy, finite stream of problems.
pub type Problems<'a> = Box<dyn Iterator<Item = Problem> + 'a>;

/// Validation capability over inputs of type `In`.
///
/// `Display` is the human description of what the validator expects.
pub trait Validator<In: ?Sized = Value>: fmt::Display + Send + Sync {
    /// Enumerate every defect of `input`, in traversal order.
    fn inspect<'a>(&'a self, input: &'a In) -> Problems<'a>;

    /// True iff `inspect` yields nothing.
    fn is(&self, input: &In) -> bool {
        self.inspect(input).next().is_none()
    }

    /// Messenger handed to problems this validator raises itself.
    fn messenger(&self) -> Messenger {
        Messenger::default()
    }

    /// Erase the concrete type, for heterogeneous lists of branches.
    fn boxed<'v>(self) -> Box<dyn Validator<In> + 'v>
    where
        Self: Sized + 'v,
    {
        Box::new(self)
    }
}

impl<In: ?Sized, V: Validator<In> + ?Sized> Validator<In> for Box<V> {
    fn inspect<'a>(&'a self, input: &'a In) -> Problems<'a> {
        (**self).inspect(input)
    }

    fn is(&self, input: &In) -> bool {
        (**self).is(input)
    }

    fn messenger(&self) -> Messenger {
        (**self).messenger()
    }
}

/// Nothing to report.
pub(crate) fn none<'a>() -> Problems<'a> {
    Box::new(std::iter::empty())
}

/// Exactly one problem.
pub(crate) fn one<'a>(problem: Problem) -> Problems<'a> {
    Box::new(std::iter::once(problem))
}
