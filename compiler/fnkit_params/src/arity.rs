//! Arity validation.
//!
//! Checks an argument count against the range a parameter list accepts and
//! reports missing parameters by name, or the number of extra values.

use std::fmt;
use std::sync::Arc;

use crate::ParameterList;

/// Accepted argument-count range of a parameter list.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ArityBounds {
    pub min: usize,
    /// `None` when the last parameter is `Variable`.
    pub max: Option<usize>,
}

impl ArityBounds {
    /// Whether `count` lies within the bounds.
    #[inline]
    pub fn contains(self, count: usize) -> bool {
        count >= self.min && self.max.map_or(true, |max| count <= max)
    }
}

impl fmt::Display for ArityBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.max {
            Some(max) if max == self.min => write!(f, "{max}"),
            Some(max) => write!(f, "{}..={max}", self.min),
            None => write!(f, "{}..", self.min),
        }
    }
}

/// Argument count outside `[min, max]`.
///
/// Carries the count, bounds, the declared parameters and a function-name
/// label. The label can be replaced after construction with
/// [`with_function_name`](Self::with_function_name), which returns a new
/// error sharing the same parameter list; the error is otherwise immutable.
#[derive(Clone, Debug, PartialEq)]
pub struct ArityError {
    count: usize,
    bounds: ArityBounds,
    parameters: ParameterList,
    function_name: Option<Arc<str>>,
}

impl ArityError {
    /// Create an arity error for `count` arguments against `parameters`.
    #[cold]
    pub fn new(count: usize, parameters: ParameterList, function_name: Option<&str>) -> Self {
        ArityError {
            count,
            bounds: parameters.bounds(),
            parameters,
            function_name: function_name.map(Arc::from),
        }
    }

    /// Number of arguments supplied.
    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn min(&self) -> usize {
        self.bounds.min
    }

    /// `None` for unbounded.
    #[inline]
    pub fn max(&self) -> Option<usize> {
        self.bounds.max
    }

    #[inline]
    pub fn bounds(&self) -> ArityBounds {
        self.bounds
    }

    #[inline]
    pub fn parameters(&self) -> &ParameterList {
        &self.parameters
    }

    #[inline]
    pub fn function_name(&self) -> Option<&str> {
        self.function_name.as_deref()
    }

    /// Names of the parameters with no argument, in declaration order.
    ///
    /// Covers indices `[count, min)`; empty when the error is about extras.
    pub fn missing(&self) -> Vec<&str> {
        self.parameters
            .iter()
            .take(self.bounds.min)
            .skip(self.count)
            .map(crate::Parameter::name)
            .collect()
    }

    /// Number of values past the maximum, if that is the failure.
    pub fn extra(&self) -> Option<usize> {
        self.bounds
            .max
            .and_then(|max| self.count.checked_sub(max))
            .filter(|&extra| extra > 0)
    }

    /// The same error labelled with a different function name.
    #[must_use]
    pub fn with_function_name(self, name: Option<&str>) -> Self {
        ArityError {
            function_name: name.map(Arc::from),
            ..self
        }
    }
}

impl fmt::Display for ArityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = &self.function_name {
            write!(f, "{name}: ")?;
        }
        if let Some(extra) = self.extra() {
            let word = if extra == 1 { "argument" } else { "arguments" };
            write!(f, "{extra} extra {word}")?;
        } else {
            let missing = self.missing();
            let word = if missing.len() == 1 {
                "parameter"
            } else {
                "parameters"
            };
            let names = missing
                .iter()
                .map(|name| format!("`{name}`"))
                .collect::<Vec<_>>()
                .join(", ");
            write!(f, "missing value for {word} {names}")?;
        }
        let word = if self.bounds.max == Some(1) && self.bounds.min == 1 {
            "argument"
        } else {
            "arguments"
        };
        write!(f, ": expected {} {word}, got {}", self.bounds, self.count)
    }
}

impl std::error::Error for ArityError {}

/// Check `count` against the bounds of `parameters`.
///
/// `function_name` labels the error; anonymous functions pass `None`.
#[tracing::instrument(level = "trace", skip(parameters), fields(params = parameters.len()))]
pub fn validate_arity(
    count: usize,
    parameters: &ParameterList,
    function_name: Option<&str>,
) -> Result<(), ArityError> {
    if parameters.bounds().contains(count) {
        Ok(())
    } else {
        Err(ArityError::new(count, parameters.clone(), function_name))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
