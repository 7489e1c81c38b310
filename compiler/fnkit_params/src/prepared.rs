//! Prepared arguments and their accessors.
//!
//! `PreparedArgs` holds one slot per single-valued parameter plus the
//! ordered tail bound to a trailing `Variable` parameter. Accessors are
//! checked against each parameter's cardinality, so a function body asking
//! for the wrong shape fails fast instead of misreading positions.

use smallvec::SmallVec;

use fnkit_stack::DepthBudget;
use fnkit_value::{ConversionError, Value, ValueType};

use crate::pipeline::Flattener;
use crate::{
    invalid_cardinality_usage, missing_required_parameter, parameter_index_out_of_range,
    CallContext, CallResult, Cardinality, Parameter, ParameterList, PipelineConfig,
};

/// The argument list after the value pipeline has run.
#[derive(Clone, Debug, PartialEq)]
pub struct PreparedArgs {
    parameters: ParameterList,
    fixed: SmallVec<[Option<Value>; 4]>,
    rest: Vec<Value>,
}

impl PreparedArgs {
    /// Assemble prepared arguments from per-slot values.
    ///
    /// `fixed` is padded or truncated to the number of single-valued
    /// parameters; `rest` is dropped when there is no `Variable` parameter.
    pub fn from_parts(
        parameters: ParameterList,
        fixed: impl IntoIterator<Item = Option<Value>>,
        rest: Vec<Value>,
    ) -> Self {
        let fixed_len = parameters.fixed_len();
        let mut fixed: SmallVec<[Option<Value>; 4]> = fixed.into_iter().take(fixed_len).collect();
        fixed.resize(fixed_len, None);
        let rest = if parameters.variable().is_some() {
            rest
        } else {
            Vec::new()
        };
        PreparedArgs {
            parameters,
            fixed,
            rest,
        }
    }

    /// The parameter list these arguments were prepared against.
    #[inline]
    pub fn parameters(&self) -> &ParameterList {
        &self.parameters
    }

    /// The flat prepared list: present single values, then the variable tail.
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.fixed.iter().flatten().chain(self.rest.iter())
    }

    /// Owned copy of [`values`](Self::values).
    pub fn to_vec(&self) -> Vec<Value> {
        self.values().cloned().collect()
    }

    /// Number of values in the flat prepared list.
    pub fn len(&self) -> usize {
        self.fixed.iter().flatten().count() + self.rest.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn parameter(&self, index: usize) -> CallResult<&Parameter> {
        self.parameters
            .get(index)
            .ok_or_else(|| parameter_index_out_of_range(index, self.parameters.len()))
    }

    /// The value of an `Optional` parameter, `None` when absent or empty.
    ///
    /// Fails with `InvalidCardinalityUsage` on any other cardinality.
    pub fn get(&self, index: usize) -> CallResult<Option<&Value>> {
        let param = self.parameter(index)?;
        if param.cardinality() != Cardinality::Optional {
            return Err(invalid_cardinality_usage(param, "get"));
        }
        Ok(self.present(index))
    }

    /// The value of a single-valued parameter, or `MissingRequiredParameter`.
    pub fn get_or_fail(&self, index: usize) -> CallResult<&Value> {
        let param = self.parameter(index)?;
        if !param.cardinality().is_single() {
            return Err(invalid_cardinality_usage(param, "get_or_fail"));
        }
        self.present(index)
            .ok_or_else(|| missing_required_parameter(param, index))
    }

    /// Every value bound to the `Variable` parameter at `index`, in order.
    pub fn get_variable(&self, index: usize) -> CallResult<&[Value]> {
        let param = self.parameter(index)?;
        if param.cardinality() != Cardinality::Variable {
            return Err(invalid_cardinality_usage(param, "get_variable"));
        }
        Ok(&self.rest)
    }

    /// Like [`get_variable`](Self::get_variable), additionally flattening
    /// lists and resolving references found among the values.
    ///
    /// Uses the same recursive resolution as the pipeline, bounded by
    /// `config.max_reference_depth()` per value.
    pub fn get_variable_flattened(
        &self,
        index: usize,
        ctx: &dyn CallContext,
        config: &PipelineConfig,
    ) -> CallResult<Vec<Value>> {
        let param = self.parameter(index)?;
        if param.cardinality() != Cardinality::Variable {
            return Err(invalid_cardinality_usage(param, "get_variable_flattened"));
        }
        let flattener = Flattener::new(ctx, true);
        let mut out = Vec::with_capacity(self.rest.len());
        for value in &self.rest {
            let budget = DepthBudget::new(config.max_reference_depth());
            out.extend(flattener.leaves(value.clone(), budget)?);
        }
        Ok(out)
    }

    /// Integer value of a single-valued parameter.
    pub fn int(&self, index: usize) -> CallResult<i64> {
        self.typed(index, ValueType::Int, Value::as_int)
    }

    /// Numeric value of a single-valued parameter (integers widen).
    pub fn float(&self, index: usize) -> CallResult<f64> {
        self.typed(index, ValueType::Float, Value::as_float)
    }

    /// Boolean value of a single-valued parameter.
    pub fn bool(&self, index: usize) -> CallResult<bool> {
        self.typed(index, ValueType::Bool, Value::as_bool)
    }

    /// String value of a single-valued parameter.
    pub fn str(&self, index: usize) -> CallResult<&str> {
        let value = self.get_or_fail(index)?;
        value.as_str().ok_or_else(|| self.mismatch(index, value, ValueType::Str))
    }

    /// Drop values failing `keep`: single slots become absent, tail entries
    /// are removed.
    #[must_use]
    pub fn retain(mut self, mut keep: impl FnMut(&Value) -> bool) -> Self {
        for slot in &mut self.fixed {
            if slot.as_ref().is_some_and(|value| !keep(value)) {
                *slot = None;
            }
        }
        self.rest.retain(|value| keep(value));
        self
    }

    /// Replace the value of the single-valued slot at `index`.
    pub fn with_value(mut self, index: usize, value: Option<Value>) -> CallResult<Self> {
        let param = self.parameter(index)?;
        if !param.cardinality().is_single() {
            return Err(invalid_cardinality_usage(param, "with_value"));
        }
        self.fixed[index] = value;
        Ok(self)
    }

    fn present(&self, index: usize) -> Option<&Value> {
        self.fixed
            .get(index)
            .and_then(Option::as_ref)
            .filter(|value| !value.is_null())
    }

    fn typed<T>(
        &self,
        index: usize,
        expected: ValueType,
        extract: impl FnOnce(&Value) -> Option<T>,
    ) -> CallResult<T> {
        let value = self.get_or_fail(index)?;
        extract(value).ok_or_else(|| self.mismatch(index, value, expected))
    }

    #[cold]
    fn mismatch(&self, index: usize, value: &Value, expected: ValueType) -> crate::CallError {
        let mut err = ConversionError::new(value, expected.name());
        if let Some(param) = self.parameters.get(index) {
            err = err.with_parameter(param.name());
        }
        err.into()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
