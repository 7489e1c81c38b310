//! Formal parameter descriptors.

use std::fmt;
use std::sync::Arc;

use smallvec::SmallVec;

use fnkit_value::{Value, ValueType};

use crate::{CallContext, Cardinality, ConstructionError, FunctionKinds, ParameterKinds};

/// Lazily computed default for an absent argument.
///
/// Invoked once per call that omits the argument and never cached, since the
/// context may differ between calls.
#[derive(Clone)]
pub struct DefaultValue(Arc<dyn Fn(&dyn CallContext) -> Value + Send + Sync>);

impl DefaultValue {
    /// Wrap a provider.
    pub fn new(provider: impl Fn(&dyn CallContext) -> Value + Send + Sync + 'static) -> Self {
        DefaultValue(Arc::new(provider))
    }

    /// A provider that always yields `value`.
    pub fn constant(value: Value) -> Self {
        DefaultValue::new(move |_| value.clone())
    }

    /// Produce the default for this call.
    #[inline]
    pub fn provide(&self, ctx: &dyn CallContext) -> Value {
        (self.0)(ctx)
    }
}

impl PartialEq for DefaultValue {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for DefaultValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DefaultValue(..)")
    }
}

/// One formal argument: name, declared type, cardinality, default and kinds.
///
/// Immutable once built. The constructors reject an empty name and a type
/// parameter count that does not match the declared type (exactly one for
/// `List`, none otherwise).
///
/// # Example
///
/// ```text
/// let a = Parameter::required("a", ValueType::Number)?;
/// let b = Parameter::optional("b", ValueType::Number)?
///     .with_default(DefaultValue::constant(Value::Int(0)));
/// let rest = Parameter::list("rest", Cardinality::Variable, ValueType::Str)?;
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Parameter {
    name: Arc<str>,
    cardinality: Cardinality,
    declared_type: ValueType,
    type_parameters: SmallVec<[ValueType; 1]>,
    default: Option<DefaultValue>,
    kinds: ParameterKinds,
    overrides_function_kinds: bool,
}

impl Parameter {
    /// Create a parameter, validating name and type parameter count.
    pub fn new(
        name: impl Into<Arc<str>>,
        cardinality: Cardinality,
        declared_type: ValueType,
        type_parameters: impl IntoIterator<Item = ValueType>,
    ) -> Result<Self, ConstructionError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ConstructionError::EmptyParameterName);
        }
        let type_parameters: SmallVec<[ValueType; 1]> = type_parameters.into_iter().collect();
        let expected = declared_type.type_parameter_count();
        if type_parameters.len() != expected {
            return Err(ConstructionError::TypeParameterCount {
                parameter: name.to_string(),
                declared: declared_type,
                expected,
                got: type_parameters.len(),
            });
        }
        Ok(Parameter {
            name,
            cardinality,
            declared_type,
            type_parameters,
            default: None,
            kinds: ParameterKinds::default(),
            overrides_function_kinds: false,
        })
    }

    /// A `Required` parameter of a non-generic type.
    pub fn required(
        name: impl Into<Arc<str>>,
        declared_type: ValueType,
    ) -> Result<Self, ConstructionError> {
        Self::new(name, Cardinality::Required, declared_type, [])
    }

    /// An `Optional` parameter of a non-generic type.
    pub fn optional(
        name: impl Into<Arc<str>>,
        declared_type: ValueType,
    ) -> Result<Self, ConstructionError> {
        Self::new(name, Cardinality::Optional, declared_type, [])
    }

    /// A `Variable` parameter of a non-generic type.
    pub fn variable(
        name: impl Into<Arc<str>>,
        declared_type: ValueType,
    ) -> Result<Self, ConstructionError> {
        Self::new(name, Cardinality::Variable, declared_type, [])
    }

    /// A list-typed parameter whose elements convert to `element`.
    pub fn list(
        name: impl Into<Arc<str>>,
        cardinality: Cardinality,
        element: ValueType,
    ) -> Result<Self, ConstructionError> {
        Self::new(name, cardinality, ValueType::List, [element])
    }

    /// Attach a default value provider.
    #[must_use]
    pub fn with_default(mut self, default: DefaultValue) -> Self {
        self.default = Some(default);
        self
    }

    /// Add kinds on top of the function-level kinds.
    #[must_use]
    pub fn with_kinds(mut self, kinds: ParameterKinds) -> Self {
        self.kinds |= kinds;
        self
    }

    /// Use exactly `kinds` for this parameter, ignoring function-level kinds.
    ///
    /// Lets one argument skip flattening or resolution while its siblings
    /// do not (e.g. a "current node" argument that must stay a reference).
    #[must_use]
    pub fn override_kinds(mut self, kinds: ParameterKinds) -> Self {
        self.kinds = kinds;
        self.overrides_function_kinds = true;
        self
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn cardinality(&self) -> Cardinality {
        self.cardinality
    }

    #[inline]
    pub fn declared_type(&self) -> ValueType {
        self.declared_type
    }

    #[inline]
    pub fn type_parameters(&self) -> &[ValueType] {
        &self.type_parameters
    }

    /// Element type of a list-typed parameter.
    #[inline]
    pub fn element_type(&self) -> Option<ValueType> {
        if self.declared_type.is_container() {
            self.type_parameters.first().copied()
        } else {
            None
        }
    }

    #[inline]
    pub fn default_value(&self) -> Option<&DefaultValue> {
        self.default.as_ref()
    }

    /// Kinds declared on the parameter itself.
    #[inline]
    pub fn kinds(&self) -> ParameterKinds {
        self.kinds
    }

    #[inline]
    pub fn overrides_function_kinds(&self) -> bool {
        self.overrides_function_kinds
    }

    /// Stages that run for this parameter under `function_kinds`.
    pub fn effective_kinds(&self, function_kinds: FunctionKinds) -> ParameterKinds {
        if self.overrides_function_kinds {
            self.kinds
        } else {
            self.kinds | function_kinds.as_parameter_kinds()
        }
    }

    /// Expected type name for error messages (`integer`, `list<integer>`).
    pub fn expected_type_name(&self) -> String {
        match self.element_type() {
            Some(element) => format!("{}<{}>", self.declared_type, element),
            None => self.declared_type.to_string(),
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}: {}",
            self.name,
            self.cardinality.marker(),
            self.expected_type_name()
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
