//! fnkit Params - the parameter contract every function call is subject to.
//!
//! This crate provides:
//! - `Cardinality`, `ParameterKinds`, `FunctionKinds`: the small closed
//!   vocabularies a parameter list is written in
//! - `Parameter`, `ParameterList`: immutable, validated formal arguments
//! - `validate_arity`, `ArityError`: argument-count checking
//! - `prepare_arguments`: the value pipeline (evaluate, resolve references,
//!   flatten, convert) producing `PreparedArgs`
//! - `CallContext`, `SimpleContext`: the caller-supplied collaborator
//! - `CallError`: the error taxonomy shared by every layer above
//!
//! # Call Order
//!
//! A caller validates arity, prepares arguments, then applies the function.
//! Nothing here applies a function; that lives in `fnkit_func`.

mod arity;
mod cardinality;
mod config;
mod context;
mod errors;
mod kinds;
mod parameter;
mod parameter_list;
mod pipeline;
mod prepared;

pub use arity::{validate_arity, ArityBounds, ArityError};
pub use cardinality::Cardinality;
pub use config::{PipelineConfig, DEFAULT_MAX_REFERENCE_DEPTH};
pub use context::{CallContext, SimpleContext};
pub use errors::{
    evaluation_failed, invalid_cardinality_usage, missing_required_parameter,
    parameter_index_out_of_range, reference_depth_exceeded, unresolved_reference, CallError,
    CallResult, ConstructionError,
};
pub use kinds::{FunctionKinds, ParameterKinds};
pub use parameter::{DefaultValue, Parameter};
pub use parameter_list::ParameterList;
pub use pipeline::{prepare_arguments, resolve_reference};
pub use prepared::PreparedArgs;

// Re-export the value domain for convenience
pub use fnkit_value::{convert, ConversionError, ExprHandle, Reference, Value, ValueType};
