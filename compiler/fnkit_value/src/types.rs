//! Declared types for parameters and results.

use std::fmt;

/// The declared type a parameter converts its argument to.
///
/// `List` is the only container type: a list-typed parameter carries exactly
/// one type parameter naming the element type.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ValueType {
    /// Accepts every value unchanged.
    Any,
    /// The explicit empty value.
    Null,
    Bool,
    Int,
    Float,
    /// Either `Int` or `Float`, kept as given.
    Number,
    Str,
    List,
    Reference,
    Expression,
}

impl ValueType {
    /// Human-readable type name used in error messages.
    pub const fn name(self) -> &'static str {
        match self {
            ValueType::Any => "any",
            ValueType::Null => "null",
            ValueType::Bool => "boolean",
            ValueType::Int => "integer",
            ValueType::Float => "float",
            ValueType::Number => "number",
            ValueType::Str => "string",
            ValueType::List => "list",
            ValueType::Reference => "reference",
            ValueType::Expression => "expression",
        }
    }

    /// Number of type parameters this type requires.
    #[inline]
    pub const fn type_parameter_count(self) -> usize {
        match self {
            ValueType::List => 1,
            _ => 0,
        }
    }

    /// Whether values of this type are list-like containers.
    #[inline]
    pub const fn is_container(self) -> bool {
        matches!(self, ValueType::List)
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
