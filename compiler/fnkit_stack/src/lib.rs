//! Stack safety utilities for recursive argument preparation.
//!
//! Flattening nested lists and following reference chains both recurse on
//! caller-supplied data of unknown depth. Two tools keep that safe:
//!
//! - [`ensure_sufficient_stack`] grows the native stack on demand so deeply
//!   nested lists cannot overflow it.
//! - [`DepthBudget`] bounds how many hops a single walk may take, so a cyclic
//!   reference graph fails fast instead of looping forever.
//!
//! # Platform Support
//!
//! - **Native targets**: Uses the `stacker` crate to grow the stack on demand.
//! - **WASM targets**: No-op passthrough (WASM has its own stack management).

/// Minimum stack space to keep available (100KB red zone).
const RED_ZONE: usize = 100 * 1024;

/// Stack space to allocate when growing (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Ensure sufficient stack space is available before executing `f`.
///
/// Wrap each recursive step of a walk over nested values:
///
/// ```text
/// fn flatten_into(value: &Value, out: &mut Vec<Value>) {
///     ensure_sufficient_stack(|| match value {
///         Value::List(items) => items.iter().for_each(|v| flatten_into(v, out)),
///         other => out.push(other.clone()),
///     })
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM version - just call directly (WASM has its own stack management).
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

/// A bounded hop counter for walks over caller-supplied graphs.
///
/// The budget is a plain value: each step produces a new budget with one
/// more hop used, so sibling branches of a walk never share a counter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DepthBudget {
    limit: usize,
    used: usize,
}

impl DepthBudget {
    /// Create a budget permitting `limit` hops.
    pub const fn new(limit: usize) -> Self {
        DepthBudget { limit, used: 0 }
    }

    /// Maximum number of hops.
    #[inline]
    pub const fn limit(self) -> usize {
        self.limit
    }

    /// Hops taken so far.
    #[inline]
    pub const fn used(self) -> usize {
        self.used
    }

    /// Take one hop, or `None` once the limit has been reached.
    #[inline]
    #[must_use]
    pub const fn descend(self) -> Option<Self> {
        if self.used >= self.limit {
            None
        } else {
            Some(DepthBudget {
                limit: self.limit,
                used: self.used + 1,
            })
        }
    }
}

#[cfg(test)]
mod tests;
