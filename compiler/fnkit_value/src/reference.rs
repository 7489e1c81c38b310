//! Indirect argument values.

use std::fmt;
use std::sync::Arc;

/// A named indirection that must be resolved through the caller's context.
///
/// References are cheap to clone; the name is shared.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Reference(Arc<str>);

impl Reference {
    /// Create a reference to `name`.
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Reference(name.into())
    }

    /// The referenced name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "&{}", self.0)
    }
}

/// Opaque handle to an unevaluated sub-expression.
///
/// The evaluator owns the expression tree; this core only hands the handle
/// back to the context when a parameter requires an evaluated value.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ExprHandle(u32);

impl ExprHandle {
    /// Create a handle from a raw index.
    #[inline]
    pub const fn from_raw(index: u32) -> Self {
        ExprHandle(index)
    }

    /// The raw index.
    #[inline]
    pub const fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ExprHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<expr #{}>", self.0)
    }
}
