//! Reference resolution.

use fnkit_stack::DepthBudget;
use fnkit_value::{Reference, Value};

use crate::{reference_depth_exceeded, unresolved_reference, CallContext, CallResult};

/// Resolve `reference` through `ctx` until a non-reference value is reached.
///
/// A reference that resolves to another reference is followed again. An
/// unknown reference is fatal; an explicit empty resolution yields
/// `Value::Null`. More than `max_depth` hops fails with
/// `ReferenceDepthExceeded`, which is how cycles surface.
pub fn resolve_reference(
    reference: &Reference,
    ctx: &dyn CallContext,
    max_depth: usize,
) -> CallResult<Value> {
    resolve_with_budget(reference, ctx, DepthBudget::new(max_depth)).map(|(value, _)| value)
}

/// Resolve against an existing budget, returning what is left of it.
#[tracing::instrument(level = "trace", skip_all, fields(reference = %reference, used = budget.used()))]
pub(crate) fn resolve_with_budget(
    reference: &Reference,
    ctx: &dyn CallContext,
    mut budget: DepthBudget,
) -> CallResult<(Value, DepthBudget)> {
    let mut current = reference.clone();
    loop {
        budget = budget.descend().ok_or_else(|| {
            tracing::debug!(%reference, limit = budget.limit(), "reference chain too deep");
            reference_depth_exceeded(reference, budget.limit())
        })?;
        match ctx.resolve_reference(&current) {
            None => {
                tracing::debug!(reference = %current, "unknown reference");
                return Err(unresolved_reference(&current));
            }
            Some(None) => return Ok((Value::Null, budget)),
            Some(Some(Value::Ref(next))) => current = next,
            Some(Some(value)) => return Ok((value, budget)),
        }
    }
}
