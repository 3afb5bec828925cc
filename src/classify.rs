use std::fmt::Display;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// The four possible outcomes of classifying an integer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Label {
    /// The input was divisible by 3 but not 5
    Fizz,
    /// The input was divisible by 5 but not 3
    Buzz,
    /// The input was divisible by both 3 and 5
    FizzBuzz,
    /// The input was divisible by neither; carries the input itself
    Number(i64),
}

impl Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Label::Fizz => write!(f, "Fizz"),
            Label::Buzz => write!(f, "Buzz"),
            Label::FizzBuzz => write!(f, "FizzBuzz"),
            Label::Number(n) => write!(f, "{}", n),
        }
    }
}

/// The error returned when a dynamically-typed input is not an integer
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClassifyError {
    /// The value had some other JSON type, named in `found`
    #[error("type mismatch: expected an integer, found {found}")]
    TypeMismatch {
        /// The JSON type of the rejected value
        found: &'static str,
    },
}

/// Classifies `n` by divisibility, checking the both-divisible case first.
/// The order matters: 15 must come out as `FizzBuzz`, not `Fizz`.
///
/// Zero divides evenly by everything, so `label(0)` is [`Label::FizzBuzz`].
/// Negative multiples behave like positive ones, since `-15 % 3 == 0` in Rust.
pub fn label(n: i64) -> Label {
    if n % 3 == 0 && n % 5 == 0 {
        Label::FizzBuzz
    } else if n % 3 == 0 {
        Label::Fizz
    } else if n % 5 == 0 {
        Label::Buzz
    } else {
        Label::Number(n)
    }
}

/// Classifies `n` and renders the label as a string, e.g. `classify(7) == "7"`
pub fn classify(n: i64) -> String {
    label(n).to_string()
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        // Integral numbers never get here; callers peel them off first
        Value::Number(_) => "a float",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Classifies a dynamically-typed value, rejecting anything that is not an
/// integer with [`ClassifyError::TypeMismatch`].
///
/// Floats are never truncated: `3.0` is rejected just like `3.5`. Booleans
/// do not coerce to 0/1. Integers beyond `i64` range (JSON allows up to
/// `u64::MAX`) are still integers and still get classified.
pub fn classify_value(value: &Value) -> Result<String, ClassifyError> {
    let Value::Number(num) = value else {
        return Err(ClassifyError::TypeMismatch {
            found: json_type_name(value),
        });
    };
    if let Some(n) = num.as_i64() {
        Ok(classify(n))
    } else if let Some(n) = num.as_u64() {
        // Same rules, above i64::MAX
        Ok(if n % 3 == 0 && n % 5 == 0 {
            "FizzBuzz".to_string()
        } else if n % 3 == 0 {
            "Fizz".to_string()
        } else if n % 5 == 0 {
            "Buzz".to_string()
        } else {
            n.to_string()
        })
    } else {
        Err(ClassifyError::TypeMismatch { found: "a float" })
    }
}
