//! Runtime argument values.
//!
//! `Value` is the closed set of things an argument list can hold. Heap data
//! (strings, lists) sits behind `Arc` so argument lists clone cheaply and
//! can be shared across threads.

use std::fmt;
use std::sync::Arc;

use crate::{ExprHandle, Reference, ValueType};

/// A dynamically typed argument value.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// Explicit empty value (e.g. a reference that resolves to nothing).
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(Arc<str>),
    List(Arc<Vec<Value>>),
    /// Indirect value resolved through the context.
    Ref(Reference),
    /// Unevaluated sub-expression evaluated through the context.
    Expr(ExprHandle),
}

impl Value {
    /// Create a string value.
    #[inline]
    pub fn string(s: impl Into<Arc<str>>) -> Self {
        Value::Str(s.into())
    }

    /// Create a list value.
    #[inline]
    pub fn list(items: Vec<Value>) -> Self {
        Value::List(Arc::new(items))
    }

    /// Create a reference value.
    #[inline]
    pub fn reference(name: impl Into<Arc<str>>) -> Self {
        Value::Ref(Reference::new(name))
    }

    /// Create an unevaluated sub-expression value.
    #[inline]
    pub fn expr(index: u32) -> Self {
        Value::Expr(ExprHandle::from_raw(index))
    }

    /// The observed type of this value.
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Null => ValueType::Null,
            Value::Bool(_) => ValueType::Bool,
            Value::Int(_) => ValueType::Int,
            Value::Float(_) => ValueType::Float,
            Value::Str(_) => ValueType::Str,
            Value::List(_) => ValueType::List,
            Value::Ref(_) => ValueType::Reference,
            Value::Expr(_) => ValueType::Expression,
        }
    }

    /// Type name for error messages.
    #[inline]
    pub fn type_name(&self) -> &'static str {
        self.value_type().name()
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// List elements, if this is a list.
    #[inline]
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    #[inline]
    pub fn as_reference(&self) -> Option<&Reference> {
        match self {
            Value::Ref(reference) => Some(reference),
            _ => None,
        }
    }

    #[inline]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Numeric view: integers widen to float.
    #[allow(
        clippy::cast_precision_loss,
        reason = "numeric view of integer arguments follows f64 rounding"
    )]
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Int(n) => Some(*n as f64),
            _ => None,
        }
    }

    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    fn fmt_nested(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => write!(f, "{s:?}"),
            other => write!(f, "{other}"),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Str(s) => f.write_str(s),
            Value::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    item.fmt_nested(f)?;
                }
                f.write_str("]")
            }
            Value::Ref(reference) => write!(f, "{reference}"),
            Value::Expr(handle) => write!(f, "{handle}"),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::string(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::list(items)
    }
}
