//! The caller side of a function call.

use fnkit_func::{Func, Function};
use fnkit_params::{prepare_arguments, validate_arity, CallContext, CallResult, PipelineConfig};
use fnkit_value::Value;

/// Runs calls: arity validation, then the value pipeline, then `apply`.
///
/// Holds only configuration, so one invoker can be shared freely.
#[derive(Clone, Debug, Default)]
pub struct Invoker {
    config: PipelineConfig,
}

impl Invoker {
    pub fn new(config: PipelineConfig) -> Self {
        Invoker { config }
    }

    #[inline]
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Call `func` with raw positional `args`.
    ///
    /// Arity errors carry the function's current name, so a renamed handle
    /// reports the name the caller used. Every failure propagates unchanged.
    pub fn invoke(
        &self,
        func: &Func,
        args: Vec<Value>,
        ctx: &dyn CallContext,
    ) -> CallResult<Value> {
        let span = tracing::debug_span!("invoke", function = %func, args = args.len());
        let _guard = span.enter();

        let parameters = func.parameters(args.len());
        validate_arity(args.len(), &parameters, func.name())?;
        let prepared = prepare_arguments(args, &parameters, func.kinds(), ctx, &self.config)?;
        let result = func.apply(prepared, ctx);
        if let Err(err) = &result {
            tracing::debug!(error = %err, "call failed");
        }
        result
    }
}
