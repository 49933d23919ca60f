//! Value Categories - the closed universe being validated

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Runtime category of a [`Value`].
///
/// Null and array are categories of their own, never folded into `object`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    String,
    Number,
    Boolean,
    Null,
    Array,
    Object,
}

impl Kind {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::String(_) => Kind::String,
            Value::Number(_) => Kind::Number,
            Value::Bool(_) => Kind::Boolean,
            Value::Null => Kind::Null,
            Value::Array(_) => Kind::Array,
            Value::Object(_) => Kind::Object,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::String => "string",
            Kind::Number => "number",
            Kind::Boolean => "boolean",
            Kind::Null => "null",
            Kind::Array => "array",
            Kind::Object => "object",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Human form of a value: strings are single-quoted, everything else is
/// printed as compact JSON.
pub fn display(value: &Value) -> String {
    match value {
        Value::String(s) => format!("'{}'", s),
        other => other.to_string(),
    }
}

/// Join segments with `.`.
pub fn dotted<I, T>(segments: I) -> String
where
    I: IntoIterator<Item = T>,
    T: fmt::Display,
{
    segments
        .into_iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>()
        .join(".")
}

/// Strict literal equality.
///
/// Numbers compare numerically once a float is involved, so `1` and `1.0` are
/// the same literal. Two integers compare exactly.
pub fn literal_eq(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Number(l), Value::Number(r)) if l.is_f64() || r.is_f64() => {
            matches!((l.as_f64(), r.as_f64()), (Some(a), Some(b)) if a == b)
        }
        _ => left == right,
    }
}
