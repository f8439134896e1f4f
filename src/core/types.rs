//! VM-001: Value types for mixed sequences.
//!
//! Rust has no covariant mutable aliasing, so "string or number" is an
//! explicit tagged union. Integer sequences are widened into it before
//! anything heterogeneous is pushed.

use serde::Serialize;
use std::fmt;

/// A single element of a mixed sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// An integer
    Number(i64),

    /// A string
    Text(String),

    /// A nested integer list
    List(Vec<i64>),
}

impl Value {
    /// Human-readable one-line description (`A number: 2`).
    pub fn describe(&self) -> String {
        match self {
            Value::Number(n) => format!("A number: {}", n),
            Value::Text(s) => format!("A string: {}", s),
            Value::List(v) => format!("A vector: {:?}", v),
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<Vec<i64>> for Value {
    fn from(v: Vec<i64>) -> Self {
        Value::List(v)
    }
}

/// Text form matches Rust's debug list rendering: strings are quoted.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{}", n),
            Value::Text(s) => write!(f, "{:?}", s),
            Value::List(v) => write!(f, "{:?}", v),
        }
    }
}
