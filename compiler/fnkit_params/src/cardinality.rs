//! Parameter cardinality.

use std::fmt;

/// How many argument values a parameter binds.
///
/// Within a parameter list, every `Required` parameter precedes every
/// `Optional` one, and only the final parameter may be `Variable`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Cardinality {
    /// Exactly one value, which must be present.
    Required,
    /// Zero or one value.
    Optional,
    /// Zero or more values; consumes every remaining positional argument.
    Variable,
}

impl Cardinality {
    /// Fewest argument values this parameter accepts.
    #[inline]
    pub const fn min(self) -> usize {
        match self {
            Cardinality::Required => 1,
            Cardinality::Optional | Cardinality::Variable => 0,
        }
    }

    /// Most argument values this parameter accepts, `None` for unbounded.
    #[inline]
    pub const fn max(self) -> Option<usize> {
        match self {
            Cardinality::Required | Cardinality::Optional => Some(1),
            Cardinality::Variable => None,
        }
    }

    /// Whether the parameter binds at most one value.
    #[inline]
    pub const fn is_single(self) -> bool {
        !matches!(self, Cardinality::Variable)
    }

    /// Suffix used when rendering a parameter (`b?`, `rest...`).
    pub(crate) const fn marker(self) -> &'static str {
        match self {
            Cardinality::Required => "",
            Cardinality::Optional => "?",
            Cardinality::Variable => "...",
        }
    }
}

impl fmt::Display for Cardinality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Cardinality::Required => "required",
            Cardinality::Optional => "optional",
            Cardinality::Variable => "variable",
        })
    }
}
