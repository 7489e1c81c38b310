//! Validated, shareable parameter lists.

use std::fmt;
use std::sync::Arc;

use rustc_hash::FxHashSet;

use crate::{ArityBounds, Cardinality, ConstructionError, Parameter};

/// An ordered, validated list of parameters.
///
/// Construction enforces the list invariants:
/// - names are unique
/// - only the last parameter may be `Variable`
/// - no `Required` parameter follows an `Optional` or `Variable` one
///
/// Cheap to clone; the parameters are shared.
#[derive(Clone, Debug, PartialEq)]
pub struct ParameterList(Arc<[Parameter]>);

impl ParameterList {
    /// Validate and build a parameter list.
    pub fn new(parameters: Vec<Parameter>) -> Result<Self, ConstructionError> {
        Self::check(&parameters)?;
        Ok(ParameterList(parameters.into()))
    }

    /// A list with no parameters (accepts exactly zero arguments).
    pub fn empty() -> Self {
        ParameterList(Arc::from(Vec::new()))
    }

    /// Check the list invariants without building a list.
    pub fn check(parameters: &[Parameter]) -> Result<(), ConstructionError> {
        let mut seen = FxHashSet::default();
        let mut past_required = false;
        for (i, param) in parameters.iter().enumerate() {
            if !seen.insert(param.name()) {
                return Err(ConstructionError::DuplicateParameter {
                    name: param.name().to_string(),
                });
            }
            match param.cardinality() {
                Cardinality::Required if past_required => {
                    return Err(ConstructionError::RequiredAfterOptional {
                        name: param.name().to_string(),
                    });
                }
                Cardinality::Required => {}
                Cardinality::Variable if i + 1 != parameters.len() => {
                    return Err(ConstructionError::VariableNotLast {
                        name: param.name().to_string(),
                    });
                }
                Cardinality::Optional | Cardinality::Variable => past_required = true,
            }
        }
        Ok(())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Parameter> {
        self.0.get(index)
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Parameter> {
        self.0.iter()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Parameter] {
        &self.0
    }

    /// Look up a parameter by name.
    pub fn find(&self, name: &str) -> Option<(usize, &Parameter)> {
        self.0.iter().enumerate().find(|(_, p)| p.name() == name)
    }

    /// The trailing `Variable` parameter, if any.
    pub fn variable(&self) -> Option<&Parameter> {
        self.0
            .last()
            .filter(|p| p.cardinality() == Cardinality::Variable)
    }

    /// Number of single-valued (`Required`/`Optional`) parameters.
    pub fn fixed_len(&self) -> usize {
        if self.variable().is_some() {
            self.0.len() - 1
        } else {
            self.0.len()
        }
    }

    /// Accepted argument-count range.
    ///
    /// `min` sums each cardinality's minimum; `max` is unbounded when the
    /// last parameter is `Variable`.
    pub fn bounds(&self) -> ArityBounds {
        let min = self.0.iter().map(|p| p.cardinality().min()).sum();
        let max = self.0.iter().map(|p| p.cardinality().max()).sum();
        ArityBounds { min, max }
    }
}

impl<'a> IntoIterator for &'a ParameterList {
    type Item = &'a Parameter;
    type IntoIter = std::slice::Iter<'a, Parameter>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for ParameterList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, param) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{param}")?;
        }
        f.write_str(")")
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
