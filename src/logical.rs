//! Logical Combinators - union and intersection over acceptance

use std::fmt;

use serde_json::Value;

use crate::message::{disjunction, Expect, Message, Messenger};
use crate::problem::{Problem, ProblemKind};
use crate::validator::{none, one, Problems, Validator};

/// Accepts when any branch accepts.
///
/// On rejection a single root-level problem summarizes every branch; branch
/// problems are not forwarded.
pub struct UnionValidator {
    branches: Vec<Box<dyn Validator>>,
    messenger: Messenger,
}

impl UnionValidator {
    pub fn new(branches: impl IntoIterator<Item = Box<dyn Validator>>) -> Self {
        Self {
            branches: branches.into_iter().collect(),
            messenger: Messenger::default(),
        }
    }

    /// Disjunctive listing of the branch descriptions.
    pub fn expected(&self) -> String {
        if self.branches.is_empty() {
            return "never".to_string();
        }

        let branches: Vec<String> = self.branches.iter().map(|b| b.to_string()).collect();
        disjunction(&branches)
    }
}

impl Validator for UnionValidator {
    fn inspect<'a>(&'a self, input: &'a Value) -> Problems<'a> {
        if self.is(input) {
            return none();
        }

        one(Problem::new(
            ProblemKind::DisjunctionMismatch,
            self.expected(),
            input.clone(),
            self.messenger.clone(),
        ))
    }

    fn is(&self, input: &Value) -> bool {
        self.branches.iter().any(|branch| branch.is(input))
    }

    fn messenger(&self) -> Messenger {
        self.messenger.clone()
    }
}

impl Expect for UnionValidator {
    fn expect(mut self, message: impl Into<Message>) -> Self {
        self.messenger = Messenger::custom(message);
        self
    }
}

impl fmt::Display for UnionValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.branches.is_empty() {
            return f.write_str("never");
        }

        let branches: Vec<String> = self.branches.iter().map(|b| b.to_string()).collect();
        f.write_str(&branches.join(" | "))
    }
}

/// Accepts when both `left` and `right` accept.
///
/// Both sides always run; left problems come first. An intersection raises
/// nothing itself, so a message attached to it renders every problem it
/// yields.
pub struct IntersectionValidator<L, R> {
    left: L,
    right: R,
    messenger: Messenger,
}

impl<L, R> IntersectionValidator<L, R> {
    pub fn new(left: L, right: R) -> Self {
        Self {
            left,
            right,
            messenger: Messenger::default(),
        }
    }
}

impl<In, L, R> Validator<In> for IntersectionValidator<L, R>
where
    In: ?Sized,
    L: Validator<In>,
    R: Validator<In>,
{
    fn inspect<'a>(&'a self, input: &'a In) -> Problems<'a> {
        let problems = self.left.inspect(input).chain(self.right.inspect(input));

        if !self.messenger.is_custom() {
            return Box::new(problems);
        }

        Box::new(problems.map(move |mut problem| {
            problem.by = self.messenger.clone();
            problem
        }))
    }

    fn is(&self, input: &In) -> bool {
        self.left.is(input) && self.right.is(input)
    }

    fn messenger(&self) -> Messenger {
        if self.messenger.is_custom() {
            self.messenger.clone()
        } else {
            <L as Validator<In>>::messenger(&self.left)
        }
    }
}

impl<L, R> Expect for IntersectionValidator<L, R> {
    fn expect(mut self, message: impl Into<Message>) -> Self {
        self.messenger = Messenger::custom(message);
        self
    }
}

impl<L: fmt::Display, R: fmt::Display> fmt::Display for IntersectionValidator<L, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} & {}", self.left, self.right)
    }
}
