//! Depth-first list flattening.

use fnkit_stack::{ensure_sufficient_stack, DepthBudget};
use fnkit_value::Value;

use super::resolve_with_budget;
use crate::{CallContext, CallResult};

/// Expands nested lists into their leaves, in order.
///
/// When `resolve` is set, references met at any depth are resolved and the
/// resolved value is flattened in their place. Each branch carries its own
/// hop budget, so a reference that resolves to a list containing itself
/// eventually fails instead of recursing forever.
pub(crate) struct Flattener<'a> {
    ctx: &'a dyn CallContext,
    resolve: bool,
}

impl<'a> Flattener<'a> {
    pub(crate) fn new(ctx: &'a dyn CallContext, resolve: bool) -> Self {
        Flattener { ctx, resolve }
    }

    /// Flatten `value` into a fresh vector of leaves.
    pub(crate) fn leaves(&self, value: Value, budget: DepthBudget) -> CallResult<Vec<Value>> {
        let mut out = Vec::new();
        self.flatten_into(value, budget, &mut out)?;
        Ok(out)
    }

    fn flatten_into(
        &self,
        value: Value,
        budget: DepthBudget,
        out: &mut Vec<Value>,
    ) -> CallResult<()> {
        ensure_sufficient_stack(|| match value {
            Value::List(items) => items
                .iter()
                .try_for_each(|item| self.flatten_into(item.clone(), budget, out)),
            Value::Ref(reference) if self.resolve => {
                let (resolved, budget) = resolve_with_budget(&reference, self.ctx, budget)?;
                self.flatten_into(resolved, budget, out)
            }
            leaf => {
                out.push(leaf);
                Ok(())
            }
        })
    }
}
