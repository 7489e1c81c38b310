//! fnkit: the function-call core of an expression evaluator.
//!
//! A call runs three steps in a fixed order:
//!
//! 1. arity validation against the function's declared parameters,
//! 2. the value pipeline (evaluate, resolve references, flatten, convert),
//! 3. `apply` on the prepared arguments.
//!
//! [`Invoker`] drives that sequence. Everything it touches is immutable
//! after construction, so one [`Func`] can serve any number of threads.
//!
//! # Crates
//!
//! - `fnkit_value`: the closed `Value` domain and primitive conversion
//! - `fnkit_params`: parameters, arity, the pipeline and prepared arguments
//! - `fnkit_func`: the `Function` contract and the decorator algebra
//! - `fnkit_stack`: stack growth and depth budgets for recursive walks
//!
//! # Debugging
//!
//! Call [`init_tracing`] and set `RUST_LOG`, e.g. `RUST_LOG=fnkit=trace`.

mod invoker;

use std::sync::Once;

pub use fnkit_func::{
    ArgumentFilter, ArgumentMapper, Func, Function, PurityContext, SimpleFunction,
    SimpleFunctionBuilder,
};
pub use fnkit_params::{
    prepare_arguments, resolve_reference, validate_arity, ArityBounds, ArityError, CallContext,
    CallError, CallResult, Cardinality, ConstructionError, DefaultValue, FunctionKinds, Parameter,
    ParameterKinds, ParameterList, PipelineConfig, PreparedArgs, SimpleContext,
    DEFAULT_MAX_REFERENCE_DEPTH,
};
pub use fnkit_stack::{ensure_sufficient_stack, DepthBudget};
pub use fnkit_value::{convert, ConversionError, ExprHandle, Reference, Value, ValueType};
pub use invoker::Invoker;

static TRACING_INIT: Once = Once::new();

/// Install a tree-shaped tracing subscriber for debug output.
///
/// Safe to call more than once; only the first call has an effect, and only
/// when `RUST_LOG` is set.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};
        use tracing_tree::HierarchicalLayer;

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            // A subscriber installed elsewhere wins.
            let _ = tracing_subscriber::registry()
                .with(filter)
                .with(
                    HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_bracketed_fields(true),
                )
                .try_init();
        }
    });
}
