//! Primitive conversion between argument values and declared types.
//!
//! This is the default coercion table a context uses when it has no
//! domain-specific conversion of its own. It is a single match over
//! `(value, target)`; anything not listed is a `ConversionError`.

use thiserror::Error;

use crate::{Value, ValueType};

/// A value could not be converted to a declared type.
///
/// The pipeline attaches the parameter name once it knows which parameter
/// the value was bound to.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error(
    "{}cannot convert {value} of type {actual} to {expected}",
    .parameter.as_deref().map(|name| format!("parameter `{name}`: ")).unwrap_or_default()
)]
pub struct ConversionError {
    /// Parameter the value was bound to, if known.
    pub parameter: Option<String>,
    /// Display form of the offending value.
    pub value: String,
    /// Observed type of the offending value.
    pub actual: ValueType,
    /// Expected type name (e.g. `integer`, `list<integer>`).
    pub expected: String,
}

impl ConversionError {
    /// Create an error for `value` failing to convert to `expected`.
    #[cold]
    pub fn new(value: &Value, expected: impl Into<String>) -> Self {
        ConversionError {
            parameter: None,
            value: value.to_string(),
            actual: value.value_type(),
            expected: expected.into(),
        }
    }

    /// Attach the parameter name.
    #[must_use]
    pub fn with_parameter(mut self, name: impl Into<String>) -> Self {
        self.parameter = Some(name.into());
        self
    }

    /// Replace the expected type name (used for element conversion of lists).
    #[must_use]
    pub fn with_expected(mut self, expected: impl Into<String>) -> Self {
        self.expected = expected.into();
        self
    }
}

/// Convert `value` to `target` using the default coercion table.
///
/// `Null` converts to every type unchanged; `Any` accepts every value.
pub fn convert(value: &Value, target: ValueType) -> Result<Value, ConversionError> {
    let converted = match (value, target) {
        (_, ValueType::Any) | (Value::Null, _) => Some(value.clone()),

        (Value::Bool(_), ValueType::Bool)
        | (Value::Int(_), ValueType::Int | ValueType::Number)
        | (Value::Float(_), ValueType::Float | ValueType::Number)
        | (Value::Str(_), ValueType::Str)
        | (Value::List(_), ValueType::List)
        | (Value::Ref(_), ValueType::Reference)
        | (Value::Expr(_), ValueType::Expression) => Some(value.clone()),

        (Value::Int(n), ValueType::Bool) => Some(Value::Bool(*n != 0)),
        (Value::Str(s), ValueType::Bool) => parse_bool(s).map(Value::Bool),

        (Value::Bool(b), ValueType::Int) => Some(Value::Int(i64::from(*b))),
        (Value::Float(x), ValueType::Int) => float_to_int(*x).map(Value::Int),
        (Value::Str(s), ValueType::Int) => s.trim().parse().ok().map(Value::Int),

        (Value::Int(_), ValueType::Float) => value.as_float().map(Value::Float),
        (Value::Str(s), ValueType::Float) => s.trim().parse().ok().map(Value::Float),
        (Value::Str(s), ValueType::Number) => parse_number(s),

        (Value::Bool(_) | Value::Int(_) | Value::Float(_), ValueType::Str) => {
            Some(Value::string(value.to_string()))
        }

        _ => None,
    };
    converted.ok_or_else(|| ConversionError::new(value, target.name()))
}

fn parse_bool(s: &str) -> Option<bool> {
    let s = s.trim();
    if s.eq_ignore_ascii_case("true") {
        Some(true)
    } else if s.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

fn parse_number(s: &str) -> Option<Value> {
    let s = s.trim();
    s.parse::<i64>()
        .map(Value::Int)
        .or_else(|_| s.parse::<f64>().map(Value::Float))
        .ok()
}

/// Integral, finite floats within `i64` range only.
#[allow(
    clippy::cast_possible_truncation,
    reason = "integral and range-checked before the cast"
)]
fn float_to_int(x: f64) -> Option<i64> {
    if !x.is_finite() || x.fract() != 0.0 {
        return None;
    }
    // -2^63 and 2^63 are exactly representable; valid range is [-2^63, 2^63)
    let two_pow_63 = 2.0_f64.powi(63);
    if x >= two_pow_63 || x < -two_pow_63 {
        return None;
    }
    Some(x as i64)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
