//! Error types for argument validation and preparation.
//!
//! `CallError` is the single error type every layer of a call propagates.
//! Factory functions (e.g. `unresolved_reference()`) are the preferred way
//! to build the structured variants; they are `#[cold]` so the happy path
//! stays tight.
//!
//! Nothing in this crate retries or recovers from an error: each one
//! propagates synchronously to the caller unchanged.

use thiserror::Error;

use fnkit_value::{ConversionError, Reference, ValueType};

use crate::{ArityError, Cardinality, Parameter};

/// Result of any fallible step of a call.
pub type CallResult<T> = Result<T, CallError>;

/// Error raised while validating, preparing or applying a call.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum CallError {
    /// Argument count outside the accepted range.
    #[error(transparent)]
    Arity(#[from] ArityError),

    /// A leaf value could not be converted to its parameter's declared type.
    #[error(transparent)]
    Conversion(#[from] ConversionError),

    /// The context does not know the reference. Never defaulted.
    #[error("unresolved reference: {reference}")]
    UnresolvedReference { reference: Reference },

    /// A reference chain did not terminate within the configured depth.
    #[error("reference {reference} did not resolve within {limit} steps")]
    ReferenceDepthExceeded { reference: Reference, limit: usize },

    /// `get_or_fail` on an absent value.
    #[error("missing value for required parameter `{parameter}` (index {index})")]
    MissingRequiredParameter { parameter: String, index: usize },

    /// An accessor was used against a parameter whose cardinality does not support it.
    #[error("`{accessor}` cannot be used on {cardinality} parameter `{parameter}`")]
    InvalidCardinalityUsage {
        parameter: String,
        cardinality: Cardinality,
        accessor: &'static str,
    },

    /// An accessor index past the end of the parameter list.
    #[error("no parameter at index {index} (function declares {count})")]
    ParameterIndexOutOfRange { index: usize, count: usize },

    /// A decorator, parameter or function was built from an absent or invalid value.
    #[error(transparent)]
    Construction(#[from] ConstructionError),

    /// Sub-expression evaluation or a function body failed.
    #[error("{message}")]
    Evaluation { message: String },
}

impl CallError {
    /// Relabel an arity error with a function name; other errors pass through.
    ///
    /// Used by renaming decorators so errors raised below them report the
    /// name the caller actually used.
    #[must_use]
    pub fn with_function_name(self, name: Option<&str>) -> Self {
        match self {
            CallError::Arity(err) => CallError::Arity(err.with_function_name(name)),
            other => other,
        }
    }
}

/// Invalid input to a constructor. Raised at construction time, never deferred.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConstructionError {
    #[error("parameter name must not be empty")]
    EmptyParameterName,

    #[error("function name must not be empty")]
    EmptyFunctionName,

    #[error("parameter `{parameter}` of type {declared} takes {expected} type parameter(s), got {got}")]
    TypeParameterCount {
        parameter: String,
        declared: ValueType,
        expected: usize,
        got: usize,
    },

    #[error("duplicate parameter name `{name}`")]
    DuplicateParameter { name: String },

    #[error("variable parameter `{name}` must be the last parameter")]
    VariableNotLast { name: String },

    #[error("required parameter `{name}` follows an optional or variable parameter")]
    RequiredAfterOptional { name: String },

    /// A required construction input was never supplied.
    #[error("missing {what}")]
    Missing { what: &'static str },
}

// Reference Errors

/// The context reported `reference` as unknown.
#[cold]
pub fn unresolved_reference(reference: &Reference) -> CallError {
    CallError::UnresolvedReference {
        reference: reference.clone(),
    }
}

/// Resolution of `reference` ran past `limit` hops.
#[cold]
pub fn reference_depth_exceeded(reference: &Reference, limit: usize) -> CallError {
    CallError::ReferenceDepthExceeded {
        reference: reference.clone(),
        limit,
    }
}

// Accessor Errors

/// No value for a parameter that must have one.
#[cold]
pub fn missing_required_parameter(parameter: &Parameter, index: usize) -> CallError {
    CallError::MissingRequiredParameter {
        parameter: parameter.name().to_string(),
        index,
    }
}

/// `accessor` does not apply to `parameter`'s cardinality.
#[cold]
pub fn invalid_cardinality_usage(parameter: &Parameter, accessor: &'static str) -> CallError {
    CallError::InvalidCardinalityUsage {
        parameter: parameter.name().to_string(),
        cardinality: parameter.cardinality(),
        accessor,
    }
}

/// Accessor index outside the declared parameters.
#[cold]
pub fn parameter_index_out_of_range(index: usize, count: usize) -> CallError {
    CallError::ParameterIndexOutOfRange { index, count }
}

// Evaluation Errors

/// A sub-expression or function body failed.
#[cold]
pub fn evaluation_failed(message: impl Into<String>) -> CallError {
    CallError::Evaluation {
        message: message.into(),
    }
}
