//! The function contract.

use std::fmt;

use fnkit_params::{CallContext, CallResult, FunctionKinds, ParameterList, PreparedArgs};
use fnkit_value::{Value, ValueType};

use crate::PurityContext;

/// A callable with a declared parameter contract.
///
/// Implementations are immutable and shared across threads. `apply` is only
/// called after arity validation and the value pipeline have run against
/// `parameters(arg_count)`.
pub trait Function: Send + Sync + fmt::Debug {
    /// The function's name, `None` when anonymous.
    fn name(&self) -> Option<&str>;

    /// Declared parameters for a call with `arg_count` arguments.
    ///
    /// Most functions ignore the count; generated signatures use it to
    /// present a per-arity contract.
    fn parameters(&self, arg_count: usize) -> ParameterList;

    fn return_type(&self) -> ValueType;

    /// Pipeline stages applied to every parameter.
    fn kinds(&self) -> FunctionKinds {
        FunctionKinds::empty()
    }

    /// Whether results may be cached in the given evaluation context.
    fn is_pure(&self, purity: &dyn PurityContext) -> bool {
        purity.is_pure(self.name())
    }

    /// Compute the result from prepared arguments.
    fn apply(&self, args: PreparedArgs, ctx: &dyn CallContext) -> CallResult<Value>;
}
