//! The parameter value pipeline.
//!
//! Turns a raw positional argument list into `PreparedArgs`. Each argument
//! runs through four stages in a fixed order, each gated by the parameter's
//! effective kinds:
//!
//! 1. **Evaluate** an unevaluated sub-expression (`EVALUATE`)
//! 2. **Resolve** a reference, following chains (`RESOLVE_REFERENCES`)
//! 3. **Flatten** list arguments depth-first, resolving nested references
//!    when resolution is also active (`FLATTEN`)
//! 4. **Convert** every leaf to the declared type (`CONVERT`)
//!
//! The order matters: resolution may produce a list that must then be
//! flattened, and only flattened leaves are converted.

mod flatten;
mod resolve;

use smallvec::SmallVec;

use fnkit_stack::DepthBudget;
use fnkit_value::{Value, ValueType};

use crate::{
    validate_arity, CallContext, CallError, CallResult, FunctionKinds, Parameter, ParameterKinds,
    ParameterList, PipelineConfig, PreparedArgs,
};

pub(crate) use flatten::Flattener;
pub use resolve::resolve_reference;
use resolve::resolve_with_budget;

/// Run the value pipeline over `args`.
///
/// Arity is re-checked (unlabelled) so a caller that skipped validation gets
/// an `ArityError` rather than silently dropped arguments.
#[tracing::instrument(
    level = "trace",
    skip_all,
    fields(args = args.len(), params = parameters.len(), kinds = ?function_kinds)
)]
pub fn prepare_arguments(
    args: Vec<Value>,
    parameters: &ParameterList,
    function_kinds: FunctionKinds,
    ctx: &dyn CallContext,
    config: &PipelineConfig,
) -> CallResult<PreparedArgs> {
    validate_arity(args.len(), parameters, None)?;

    let fixed_len = parameters.fixed_len();
    let mut args = args.into_iter();

    let mut fixed: SmallVec<[Option<Value>; 4]> = SmallVec::with_capacity(fixed_len);
    for param in parameters.iter().take(fixed_len) {
        let stage = Stage::new(param, function_kinds, ctx, config);
        let value = match args.next() {
            Some(arg) => Some(stage.prepare_single(arg)?),
            None => match param.default_value() {
                Some(default) => Some(stage.prepare_default(default.provide(ctx))?),
                None => None,
            },
        };
        fixed.push(value);
    }

    let mut rest = Vec::new();
    if let Some(param) = parameters.variable() {
        let stage = Stage::new(param, function_kinds, ctx, config);
        for arg in args {
            stage.prepare_variable(arg, &mut rest)?;
        }
    }

    Ok(PreparedArgs::from_parts(parameters.clone(), fixed, rest))
}

/// Pipeline state for one parameter.
struct Stage<'a> {
    param: &'a Parameter,
    kinds: ParameterKinds,
    ctx: &'a dyn CallContext,
    config: &'a PipelineConfig,
}

impl<'a> Stage<'a> {
    fn new(
        param: &'a Parameter,
        function_kinds: FunctionKinds,
        ctx: &'a dyn CallContext,
        config: &'a PipelineConfig,
    ) -> Self {
        Stage {
            param,
            kinds: param.effective_kinds(function_kinds),
            ctx,
            config,
        }
    }

    /// Stages 1 and 2. Returns the hop budget left for nested references.
    ///
    /// Evaluation happens once, before resolution: a reference that resolves
    /// to a sub-expression yields the handle itself, unevaluated.
    fn evaluate_and_resolve(&self, value: Value) -> CallResult<(Value, DepthBudget)> {
        let value = match value {
            Value::Expr(expr) if self.kinds.contains(ParameterKinds::EVALUATE) => {
                self.ctx.evaluate(expr)?
            }
            other => other,
        };
        let budget = DepthBudget::new(self.config.max_reference_depth());
        match value {
            Value::Ref(reference) if self.kinds.contains(ParameterKinds::RESOLVE_REFERENCES) => {
                resolve_with_budget(&reference, self.ctx, budget)
            }
            other => Ok((other, budget)),
        }
    }

    fn flattener(&self) -> Flattener<'a> {
        Flattener::new(
            self.ctx,
            self.kinds.contains(ParameterKinds::RESOLVE_REFERENCES),
        )
    }

    fn prepare_single(&self, arg: Value) -> CallResult<Value> {
        let (value, budget) = self.evaluate_and_resolve(arg)?;
        if !self.kinds.contains(ParameterKinds::FLATTEN) || value.is_null() {
            return self.convert(value);
        }
        if self.param.declared_type().is_container() {
            let leaves = self.flattener().leaves(value, budget)?;
            return self.convert(Value::list(leaves));
        }
        if !matches!(value, Value::List(_)) {
            return self.convert(value);
        }
        // A scalar parameter takes the sole leaf; anything else is left for
        // conversion to reject.
        let leaves = self.flattener().leaves(value, budget)?;
        let flattened = match <[Value; 1]>::try_from(leaves) {
            Ok([only]) => only,
            Err(leaves) => Value::list(leaves),
        };
        self.convert(flattened)
    }

    fn prepare_default(&self, value: Value) -> CallResult<Value> {
        if self.config.convert_defaults() {
            self.convert(value)
        } else {
            Ok(value)
        }
    }

    /// Each tail value is one element: a list-typed parameter converts it to
    /// the element type, unless it is itself an unflattened list.
    fn prepare_variable(&self, arg: Value, out: &mut Vec<Value>) -> CallResult<()> {
        let (value, budget) = self.evaluate_and_resolve(arg)?;
        if self.kinds.contains(ParameterKinds::FLATTEN) && matches!(value, Value::List(_)) {
            for leaf in self.flattener().leaves(value, budget)? {
                out.push(self.convert_element(leaf)?);
            }
        } else {
            out.push(self.convert_element(value)?);
        }
        Ok(())
    }

    fn convert_element(&self, value: Value) -> CallResult<Value> {
        match self.param.element_type() {
            Some(element)
                if self.kinds.contains(ParameterKinds::CONVERT)
                    && !value.is_null()
                    && !matches!(value, Value::List(_)) =>
            {
                self.ctx
                    .convert(&value, element)
                    .map_err(|err| CallError::from(err.with_parameter(self.param.name())))
            }
            _ => self.convert(value),
        }
    }

    /// Stage 4. `Null` is never converted.
    fn convert(&self, value: Value) -> CallResult<Value> {
        if !self.kinds.contains(ParameterKinds::CONVERT) || value.is_null() {
            return Ok(value);
        }
        let name = self.param.name();
        let Some(element) = self.param.element_type() else {
            return self
                .ctx
                .convert(&value, self.param.declared_type())
                .map_err(|err| CallError::from(err.with_parameter(name)));
        };

        let list = self.ctx.convert(&value, ValueType::List).map_err(|err| {
            CallError::from(
                err.with_expected(self.param.expected_type_name())
                    .with_parameter(name),
            )
        })?;
        match list {
            Value::List(items) => {
                let converted = items
                    .iter()
                    .map(|item| {
                        self.ctx
                            .convert(item, element)
                            .map_err(|err| CallError::from(err.with_parameter(name)))
                    })
                    .collect::<CallResult<Vec<_>>>()?;
                Ok(Value::list(converted))
            }
            other => Ok(other),
        }
    }
}
