//! Pipeline configuration.

/// Default number of reference hops permitted while resolving one argument.
pub const DEFAULT_MAX_REFERENCE_DEPTH: usize = 64;

/// Policy knobs for argument preparation.
///
/// Built with `Default` and adjusted with the `with_*` methods:
///
/// ```text
/// let config = PipelineConfig::default().with_max_reference_depth(8);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PipelineConfig {
    max_reference_depth: usize,
    convert_defaults: bool,
}

impl PipelineConfig {
    /// Set the maximum number of reference hops per argument.
    ///
    /// A chain longer than this, including any cycle, fails with
    /// `CallError::ReferenceDepthExceeded`.
    #[must_use]
    pub fn with_max_reference_depth(mut self, depth: usize) -> Self {
        self.max_reference_depth = depth;
        self
    }

    /// Whether values produced by default providers pass through conversion.
    #[must_use]
    pub fn with_convert_defaults(mut self, convert: bool) -> Self {
        self.convert_defaults = convert;
        self
    }

    #[inline]
    pub fn max_reference_depth(&self) -> usize {
        self.max_reference_depth
    }

    #[inline]
    pub fn convert_defaults(&self) -> bool {
        self.convert_defaults
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        PipelineConfig {
            max_reference_depth: DEFAULT_MAX_REFERENCE_DEPTH,
            convert_defaults: true,
        }
    }
}
