//! Variant-dependent transformation of a text-or-number value.
//!
//! # Architecture Note
//! The source API accepts a union-typed parameter (`string | number`) and
//! inspects the runtime type. Rust replaces runtime inspection with a tagged
//! variant decided *at the call boundary*:
//!
//! - Typed callers construct a [`ScalarValue`] directly and can never hand us
//!   an invalid variant — [`process_value`] is total and infallible.
//! - Untyped callers (JSON input, say) go through
//!   `ScalarValue::try_from(serde_json::Value)`, which is where the
//!   [`ValueError::TypeMismatch`] taxonomy lives. Booleans, nulls, arrays and
//!   objects are rejected there instead of being silently coerced.

use serde::{Deserialize, Serialize};
use tracing::debug;

pub mod error;
pub use error::ValueError;

/// A value that is either text or numeric — the two admissible variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ScalarValue {
    Text(String),
    Numeric(f64),
}

impl From<&str> for ScalarValue {
    fn from(s: &str) -> Self {
        ScalarValue::Text(s.to_string())
    }
}

impl From<f64> for ScalarValue {
    fn from(n: f64) -> Self {
        ScalarValue::Numeric(n)
    }
}

impl TryFrom<serde_json::Value> for ScalarValue {
    type Error = ValueError;

    /// Admits a JSON value into the scalar domain.
    ///
    /// Strings and numbers convert; everything else is a
    /// [`ValueError::TypeMismatch`] naming the offending JSON type.
    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        match value {
            serde_json::Value::String(s) => Ok(ScalarValue::Text(s)),
            serde_json::Value::Number(n) => {
                // as_f64 covers u64/i64/f64 payloads alike.
                let n = n.as_f64().ok_or(ValueError::TypeMismatch { found: "number" })?;
                Ok(ScalarValue::Numeric(n))
            }
            serde_json::Value::Null => Err(ValueError::TypeMismatch { found: "null" }),
            serde_json::Value::Bool(_) => Err(ValueError::TypeMismatch { found: "boolean" }),
            serde_json::Value::Array(_) => Err(ValueError::TypeMismatch { found: "array" }),
            serde_json::Value::Object(_) => Err(ValueError::TypeMismatch { found: "object" }),
        }
    }
}

/// Computes a number from the value, with a different rule per variant:
/// text yields its length in characters, a number yields its double.
///
/// Total over the closed [`ScalarValue`] domain; the boundary conversion has
/// already rejected anything else.
pub fn process_value(value: &ScalarValue) -> f64 {
    let result = match value {
        ScalarValue::Text(s) => s.chars().count() as f64,
        ScalarValue::Numeric(n) => n * 2.0,
    };
    debug!(?value, result, "process_value");
    result
}
