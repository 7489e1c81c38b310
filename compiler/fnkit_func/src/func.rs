//! The shared function handle and its decorators.
//!
//! A decorator overrides exactly one facet of the function it wraps and
//! delegates every other method. Decorators are nodes of a tagged enum, so
//! the collapsing rules are pattern matches:
//!
//! - renaming to the current name returns the same handle;
//! - renaming a renamed function re-wraps the original instead of stacking;
//! - the same two rules apply to kind overrides;
//! - re-applying the same mapper or filter returns the same handle.
//!
//! `is_pure` and `return_type` always delegate, whatever the decorator.

use std::fmt;
use std::sync::Arc;

use fnkit_params::{
    CallContext, CallError, CallResult, ConstructionError, FunctionKinds, ParameterList,
    PreparedArgs,
};
use fnkit_stack::ensure_sufficient_stack;
use fnkit_value::{Value, ValueType};

use crate::{Function, PurityContext};

type MapFn = dyn Fn(PreparedArgs, &dyn CallContext) -> CallResult<PreparedArgs> + Send + Sync;
type FilterFn = dyn Fn(&Value, &dyn CallContext) -> bool + Send + Sync;

/// Rewrites prepared arguments just before `apply`.
///
/// Compared by identity: clones of one mapper are equal, two mappers built
/// from identical closures are not.
#[derive(Clone)]
pub struct ArgumentMapper(Arc<MapFn>);

impl ArgumentMapper {
    pub fn new(
        map: impl Fn(PreparedArgs, &dyn CallContext) -> CallResult<PreparedArgs>
            + Send
            + Sync
            + 'static,
    ) -> Self {
        ArgumentMapper(Arc::new(map))
    }

    #[inline]
    pub fn map(&self, args: PreparedArgs, ctx: &dyn CallContext) -> CallResult<PreparedArgs> {
        (self.0)(args, ctx)
    }
}

impl PartialEq for ArgumentMapper {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for ArgumentMapper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ArgumentMapper(..)")
    }
}

/// Drops prepared values that fail a predicate just before `apply`.
///
/// Single-valued slots that fail become absent; failing values in a
/// variable tail are removed. Compared by identity, like [`ArgumentMapper`].
#[derive(Clone)]
pub struct ArgumentFilter(Arc<FilterFn>);

impl ArgumentFilter {
    pub fn new(keep: impl Fn(&Value, &dyn CallContext) -> bool + Send + Sync + 'static) -> Self {
        ArgumentFilter(Arc::new(keep))
    }

    #[inline]
    pub fn keep(&self, value: &Value, ctx: &dyn CallContext) -> bool {
        (self.0)(value, ctx)
    }
}

impl PartialEq for ArgumentFilter {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for ArgumentFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ArgumentFilter(..)")
    }
}

#[derive(Debug)]
enum Node {
    Plain(Arc<dyn Function>),
    Renamed { inner: Func, name: Arc<str> },
    Rekinded { inner: Func, kinds: FunctionKinds },
    Reparameterized { inner: Func, parameters: ParameterList },
    MappedArguments { inner: Func, mapper: ArgumentMapper },
    FilteredArguments { inner: Func, filter: ArgumentFilter },
}

/// Cheaply clonable handle to a function, possibly decorated.
///
/// Immutable and `Send + Sync`; one handle can serve concurrent callers.
#[derive(Clone, Debug)]
pub struct Func(Arc<Node>);

impl Func {
    /// Wrap a plain function.
    pub fn new(function: impl Function + 'static) -> Self {
        Func::from_arc(Arc::new(function))
    }

    /// Wrap an already shared function.
    pub fn from_arc(function: Arc<dyn Function>) -> Self {
        Func(Arc::new(Node::Plain(function)))
    }

    fn wrap(node: Node) -> Self {
        Func(Arc::new(node))
    }

    /// Reference identity.
    #[inline]
    pub fn ptr_eq(&self, other: &Func) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// The function this decorator wraps, `None` for a plain function.
    pub fn delegate(&self) -> Option<&Func> {
        match &*self.0 {
            Node::Plain(_) => None,
            Node::Renamed { inner, .. }
            | Node::Rekinded { inner, .. }
            | Node::Reparameterized { inner, .. }
            | Node::MappedArguments { inner, .. }
            | Node::FilteredArguments { inner, .. } => Some(inner),
        }
    }

    /// The plain function at the bottom of the decorator chain.
    fn innermost(&self) -> &Arc<dyn Function> {
        let mut current = self;
        loop {
            match &*current.0 {
                Node::Plain(function) => return function,
                Node::Renamed { inner, .. }
                | Node::Rekinded { inner, .. }
                | Node::Reparameterized { inner, .. }
                | Node::MappedArguments { inner, .. }
                | Node::FilteredArguments { inner, .. } => current = inner,
            }
        }
    }

    /// Number of decorator layers above the plain function.
    pub fn layers(&self) -> usize {
        let mut layers = 0;
        let mut current = self;
        while let Some(inner) = current.delegate() {
            layers += 1;
            current = inner;
        }
        layers
    }

    /// Override the name.
    ///
    /// Returns this handle when the name is unchanged. Renaming a renamed
    /// function wraps its original instead; renaming back to the original's
    /// own name returns the original.
    pub fn with_name(&self, name: impl Into<Arc<str>>) -> Result<Func, ConstructionError> {
        let name: Arc<str> = name.into();
        if name.is_empty() {
            return Err(ConstructionError::EmptyFunctionName);
        }
        if self.name() == Some(&*name) {
            return Ok(self.clone());
        }
        let inner = match &*self.0 {
            Node::Renamed { inner, .. } => {
                tracing::trace!(from = ?self.name(), to = %name, "collapsing rename");
                inner
            }
            _ => self,
        };
        if inner.name() == Some(&*name) {
            return Ok(inner.clone());
        }
        Ok(Func::wrap(Node::Renamed {
            inner: inner.clone(),
            name,
        }))
    }

    /// Override the function kinds, collapsing like [`with_name`](Self::with_name).
    #[must_use]
    pub fn with_kinds(&self, kinds: FunctionKinds) -> Func {
        if self.kinds() == kinds {
            return self.clone();
        }
        let inner = match &*self.0 {
            Node::Rekinded { inner, .. } => {
                tracing::trace!(from = ?self.kinds(), to = ?kinds, "collapsing kind override");
                inner
            }
            _ => self,
        };
        if inner.kinds() == kinds {
            return inner.clone();
        }
        Func::wrap(Node::Rekinded {
            inner: inner.clone(),
            kinds,
        })
    }

    /// Present `parameters` for every call, whatever the argument count.
    ///
    /// `apply` is untouched; only the contract the caller validates and
    /// prepares against changes.
    #[must_use]
    pub fn with_parameters(&self, parameters: ParameterList) -> Func {
        if let Node::Reparameterized {
            parameters: current,
            ..
        } = &*self.0
        {
            if *current == parameters {
                return self.clone();
            }
        }
        Func::wrap(Node::Reparameterized {
            inner: self.clone(),
            parameters,
        })
    }

    /// Rewrite prepared arguments before they reach `apply`.
    #[must_use]
    pub fn map_arguments(&self, mapper: ArgumentMapper) -> Func {
        if let Node::MappedArguments { mapper: current, .. } = &*self.0 {
            if *current == mapper {
                return self.clone();
            }
        }
        Func::wrap(Node::MappedArguments {
            inner: self.clone(),
            mapper,
        })
    }

    /// Drop prepared values that fail `filter` before they reach `apply`.
    #[must_use]
    pub fn filter_arguments(&self, filter: ArgumentFilter) -> Func {
        if let Node::FilteredArguments { filter: current, .. } = &*self.0 {
            if *current == filter {
                return self.clone();
            }
        }
        Func::wrap(Node::FilteredArguments {
            inner: self.clone(),
            filter,
        })
    }
}

impl Function for Func {
    fn name(&self) -> Option<&str> {
        match &*self.0 {
            Node::Plain(function) => function.name(),
            Node::Renamed { name, .. } => Some(&**name),
            Node::Rekinded { inner, .. }
            | Node::Reparameterized { inner, .. }
            | Node::MappedArguments { inner, .. }
            | Node::FilteredArguments { inner, .. } => inner.name(),
        }
    }

    fn parameters(&self, arg_count: usize) -> ParameterList {
        match &*self.0 {
            Node::Plain(function) => function.parameters(arg_count),
            Node::Reparameterized { parameters, .. } => parameters.clone(),
            Node::Renamed { inner, .. }
            | Node::Rekinded { inner, .. }
            | Node::MappedArguments { inner, .. }
            | Node::FilteredArguments { inner, .. } => inner.parameters(arg_count),
        }
    }

    fn return_type(&self) -> ValueType {
        self.innermost().return_type()
    }

    fn kinds(&self) -> FunctionKinds {
        match &*self.0 {
            Node::Plain(function) => function.kinds(),
            Node::Rekinded { kinds, .. } => *kinds,
            Node::Renamed { inner, .. }
            | Node::Reparameterized { inner, .. }
            | Node::MappedArguments { inner, .. }
            | Node::FilteredArguments { inner, .. } => inner.kinds(),
        }
    }

    fn is_pure(&self, purity: &dyn PurityContext) -> bool {
        self.innermost().is_pure(purity)
    }

    fn apply(&self, args: PreparedArgs, ctx: &dyn CallContext) -> CallResult<Value> {
        ensure_sufficient_stack(|| match &*self.0 {
            Node::Plain(function) => function.apply(args, ctx),
            Node::Renamed { inner, name } => inner
                .apply(args, ctx)
                .map_err(|err| relabel(err, inner.name(), name)),
            Node::Rekinded { inner, .. } | Node::Reparameterized { inner, .. } => {
                inner.apply(args, ctx)
            }
            Node::MappedArguments { inner, mapper } => inner.apply(mapper.map(args, ctx)?, ctx),
            Node::FilteredArguments { inner, filter } => {
                inner.apply(args.retain(|value| filter.keep(value, ctx)), ctx)
            }
        })
    }
}

/// Give the new name to arity errors that carry no name or the delegate's
/// own name. Errors labelled by other functions the body called keep theirs.
fn relabel(err: CallError, delegate_name: Option<&str>, name: &str) -> CallError {
    match &err {
        CallError::Arity(arity)
            if arity.function_name().is_none() || arity.function_name() == delegate_name =>
        {
            err.with_function_name(Some(name))
        }
        _ => err,
    }
}

/// Renders the decorator chain, outermost first:
/// `renamed("plus", kinds(FLATTEN, add))`.
impl fmt::Display for Func {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &*self.0 {
            Node::Plain(function) => f.write_str(function.name().unwrap_or("<anonymous>")),
            Node::Renamed { inner, name } => write!(f, "renamed({name:?}, {inner})"),
            Node::Rekinded { inner, kinds } => write!(f, "kinds({kinds}, {inner})"),
            Node::Reparameterized { inner, parameters } => {
                write!(f, "parameters({parameters}, {inner})")
            }
            Node::MappedArguments { inner, .. } => write!(f, "mapped({inner})"),
            Node::FilteredArguments { inner, .. } => write!(f, "filtered({inner})"),
        }
    }
}
