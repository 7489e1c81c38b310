//! fnkit Value - the dynamically typed argument domain.
//!
//! Functions receive untyped argument lists. This crate fixes the closed set
//! of values those lists may hold and the declared types parameters convert
//! them to:
//!
//! - `Value`: the tagged argument value (`Null`, scalars, strings, lists,
//!   unresolved references, unevaluated sub-expressions)
//! - `ValueType`: the declared type of a parameter or result
//! - `Reference` / `ExprHandle`: indirect values resolved or evaluated
//!   through the caller's context
//! - `convert`: the default primitive coercion table

mod conversion;
mod reference;
mod types;
mod value;

pub use conversion::{convert, ConversionError};
pub use reference::{ExprHandle, Reference};
pub use types::ValueType;
pub use value::Value;
