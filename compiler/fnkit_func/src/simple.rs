//! Closure-backed functions.

use std::fmt;
use std::sync::Arc;

use fnkit_params::{
    CallContext, CallResult, ConstructionError, FunctionKinds, ParameterList, PreparedArgs,
};
use fnkit_value::{Value, ValueType};

use crate::{Func, Function};

type Body = Arc<dyn Fn(PreparedArgs, &dyn CallContext) -> CallResult<Value> + Send + Sync>;
type Generator = Arc<dyn Fn(usize) -> ParameterList + Send + Sync>;

#[derive(Clone)]
enum Signature {
    Fixed(ParameterList),
    /// Parameter list chosen by argument count.
    Generated(Generator),
}

/// A function whose body is a closure.
///
/// Built through [`SimpleFunction::named`] or [`SimpleFunction::anonymous`].
#[derive(Clone)]
pub struct SimpleFunction {
    name: Option<Arc<str>>,
    return_type: ValueType,
    signature: Signature,
    kinds: FunctionKinds,
    body: Body,
}

impl SimpleFunction {
    /// Start building a named function.
    pub fn named(name: impl Into<Arc<str>>) -> SimpleFunctionBuilder {
        SimpleFunctionBuilder::new(Some(name.into()))
    }

    /// Start building an anonymous function.
    pub fn anonymous() -> SimpleFunctionBuilder {
        SimpleFunctionBuilder::new(None)
    }
}

impl Function for SimpleFunction {
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn parameters(&self, arg_count: usize) -> ParameterList {
        match &self.signature {
            Signature::Fixed(parameters) => parameters.clone(),
            Signature::Generated(generate) => generate(arg_count),
        }
    }

    fn return_type(&self) -> ValueType {
        self.return_type
    }

    fn kinds(&self) -> FunctionKinds {
        self.kinds
    }

    fn apply(&self, args: PreparedArgs, ctx: &dyn CallContext) -> CallResult<Value> {
        (self.body)(args, ctx)
    }
}

impl fmt::Debug for SimpleFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug = f.debug_struct("SimpleFunction");
        debug
            .field("name", &self.name)
            .field("return_type", &self.return_type)
            .field("kinds", &self.kinds);
        match &self.signature {
            Signature::Fixed(parameters) => debug.field("parameters", parameters),
            Signature::Generated(_) => debug.field("parameters", &"<generated>"),
        };
        debug.finish_non_exhaustive()
    }
}

/// Builder for [`SimpleFunction`].
///
/// Defaults: no parameters, return type `Any`, no kinds. A body is required.
#[must_use]
pub struct SimpleFunctionBuilder {
    name: Option<Arc<str>>,
    return_type: ValueType,
    signature: Signature,
    kinds: FunctionKinds,
    body: Option<Body>,
}

impl SimpleFunctionBuilder {
    fn new(name: Option<Arc<str>>) -> Self {
        SimpleFunctionBuilder {
            name,
            return_type: ValueType::Any,
            signature: Signature::Fixed(ParameterList::empty()),
            kinds: FunctionKinds::empty(),
            body: None,
        }
    }

    pub fn returns(mut self, return_type: ValueType) -> Self {
        self.return_type = return_type;
        self
    }

    /// Use one parameter list for every call.
    pub fn parameters(mut self, parameters: ParameterList) -> Self {
        self.signature = Signature::Fixed(parameters);
        self
    }

    /// Choose the parameter list from the argument count at call time.
    pub fn parameters_with(
        mut self,
        generate: impl Fn(usize) -> ParameterList + Send + Sync + 'static,
    ) -> Self {
        self.signature = Signature::Generated(Arc::new(generate));
        self
    }

    pub fn kinds(mut self, kinds: FunctionKinds) -> Self {
        self.kinds = kinds;
        self
    }

    pub fn body(
        mut self,
        body: impl Fn(PreparedArgs, &dyn CallContext) -> CallResult<Value> + Send + Sync + 'static,
    ) -> Self {
        self.body = Some(Arc::new(body));
        self
    }

    /// Finish the function and wrap it in a [`Func`] handle.
    pub fn build(self) -> Result<Func, ConstructionError> {
        if self.name.as_deref().is_some_and(str::is_empty) {
            return Err(ConstructionError::EmptyFunctionName);
        }
        let Some(body) = self.body else {
            return Err(ConstructionError::Missing {
                what: "function body",
            });
        };
        Ok(Func::new(SimpleFunction {
            name: self.name,
            return_type: self.return_type,
            signature: self.signature,
            kinds: self.kinds,
            body,
        }))
    }
}
