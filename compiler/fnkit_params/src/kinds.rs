//! Preparation kinds.
//!
//! Kinds select which pipeline stages run. The set is small and closed, so
//! both levels are bitflags rather than an open visitor.

use std::fmt;

use bitflags::bitflags;

bitflags! {
    /// Pipeline stages a single parameter participates in.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct ParameterKinds: u8 {
        /// Convert each leaf value to the declared type.
        const CONVERT = 1 << 0;
        /// Evaluate unevaluated sub-expressions first.
        const EVALUATE = 1 << 1;
        /// Expand list arguments in place, depth-first.
        const FLATTEN = 1 << 2;
        /// Replace references with their resolved value.
        const RESOLVE_REFERENCES = 1 << 3;
    }
}

bitflags! {
    /// Preparation requirements applied uniformly to every parameter.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct FunctionKinds: u8 {
        /// Sub-expressions must be fully evaluated before `apply`.
        const EVALUATED_PARAMETERS = 1 << 0;
        /// Top-level list arguments are flattened.
        const FLATTEN = 1 << 1;
        /// Reference arguments are resolved to their referenced value.
        const RESOLVE_REFERENCES = 1 << 2;
    }
}

impl Default for ParameterKinds {
    fn default() -> Self {
        ParameterKinds::CONVERT
    }
}

impl Default for FunctionKinds {
    fn default() -> Self {
        FunctionKinds::empty()
    }
}

impl FunctionKinds {
    /// The parameter-level stages implied by these function-level kinds.
    pub const fn as_parameter_kinds(self) -> ParameterKinds {
        let mut kinds = ParameterKinds::empty();
        if self.contains(FunctionKinds::EVALUATED_PARAMETERS) {
            kinds = kinds.union(ParameterKinds::EVALUATE);
        }
        if self.contains(FunctionKinds::FLATTEN) {
            kinds = kinds.union(ParameterKinds::FLATTEN);
        }
        if self.contains(FunctionKinds::RESOLVE_REFERENCES) {
            kinds = kinds.union(ParameterKinds::RESOLVE_REFERENCES);
        }
        kinds
    }
}

/// `FLATTEN | RESOLVE_REFERENCES`, or `none` for the empty set.
fn write_flags<B>(flags: &B, f: &mut fmt::Formatter<'_>) -> fmt::Result
where
    B: bitflags::Flags,
    B::Bits: bitflags::parser::WriteHex,
{
    if flags.is_empty() {
        f.write_str("none")
    } else {
        bitflags::parser::to_writer(flags, f)
    }
}

impl fmt::Display for ParameterKinds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_flags(self, f)
    }
}

impl fmt::Display for FunctionKinds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_flags(self, f)
    }
}

#[cfg(test)]
mod tests;
