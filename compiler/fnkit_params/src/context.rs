//! The caller-supplied context.
//!
//! The pipeline never evaluates, resolves or converts on its own: every such
//! step goes through `CallContext`, so the evaluator decides what a reference
//! means and how a sub-expression is computed.

use rustc_hash::{FxHashMap, FxHashSet};

use fnkit_value::{ConversionError, ExprHandle, Reference, Value, ValueType};

use crate::{evaluation_failed, CallResult};

/// Collaborator consulted while preparing and applying a call.
pub trait CallContext {
    /// Convert `value` to `target`.
    ///
    /// Defaults to the primitive table in `fnkit_value::convert`.
    fn convert(&self, value: &Value, target: ValueType) -> Result<Value, ConversionError> {
        fnkit_value::convert(value, target)
    }

    /// Resolve a reference.
    ///
    /// Outer `None`: the reference is unknown (fatal). Inner `None`: the
    /// reference resolves to an explicit empty value.
    fn resolve_reference(&self, reference: &Reference) -> Option<Option<Value>>;

    /// Evaluate an unevaluated sub-expression.
    fn evaluate(&self, expr: ExprHandle) -> CallResult<Value>;
}

/// A table-backed context.
///
/// References and sub-expressions are looked up in maps filled at build
/// time; function names listed as impure make `is_impure` report `true`.
#[derive(Clone, Debug, Default)]
pub struct SimpleContext {
    references: FxHashMap<Reference, Option<Value>>,
    expressions: FxHashMap<ExprHandle, Value>,
    impure: FxHashSet<String>,
}

impl SimpleContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name` to `value` (which may itself be a reference).
    #[must_use]
    pub fn with_reference(mut self, name: &str, value: Value) -> Self {
        self.references.insert(Reference::new(name), Some(value));
        self
    }

    /// Bind `name` to the explicit empty value.
    #[must_use]
    pub fn with_empty_reference(mut self, name: &str) -> Self {
        self.references.insert(Reference::new(name), None);
        self
    }

    /// Bind sub-expression `index` to the value it evaluates to.
    #[must_use]
    pub fn with_expression(mut self, index: u32, value: Value) -> Self {
        self.expressions.insert(ExprHandle::from_raw(index), value);
        self
    }

    /// Mark the function `name` as impure in this context.
    #[must_use]
    pub fn with_impure(mut self, name: &str) -> Self {
        self.impure.insert(name.to_string());
        self
    }

    /// Whether the function `name` was marked impure.
    pub fn is_impure(&self, name: &str) -> bool {
        self.impure.contains(name)
    }
}

impl CallContext for SimpleContext {
    fn resolve_reference(&self, reference: &Reference) -> Option<Option<Value>> {
        self.references.get(reference).cloned()
    }

    fn evaluate(&self, expr: ExprHandle) -> CallResult<Value> {
        self.expressions
            .get(&expr)
            .cloned()
            .ok_or_else(|| evaluation_failed(format!("cannot evaluate {expr}")))
    }
}
