//! Functions and their decorators.
//!
//! A [`Function`] declares its parameter contract, kinds and return type and
//! computes a result from prepared arguments. [`Func`] is the shared handle
//! callers hold; its decorator methods (`with_name`, `with_kinds`,
//! `with_parameters`, `map_arguments`, `filter_arguments`) each override one
//! facet and delegate everything else.
//!
//! # Example
//!
//! ```text
//! let add = SimpleFunction::named("add")
//!     .returns(ValueType::Number)
//!     .parameters(ParameterList::new(vec![
//!         Parameter::required("a", ValueType::Number)?,
//!         Parameter::required("b", ValueType::Number)?,
//!     ])?)
//!     .body(|args, _| Ok(Value::Int(args.int(0)? + args.int(1)?)))
//!     .build()?;
//! let plus = add.with_name("plus")?;
//! ```

mod func;
mod function;
mod purity;
mod simple;

pub use func::{ArgumentFilter, ArgumentMapper, Func};
pub use function::Function;
pub use purity::PurityContext;
pub use simple::{SimpleFunction, SimpleFunctionBuilder};
