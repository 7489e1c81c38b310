use fnkit_params::SimpleContext;

/// Decides, per evaluation context, whether a function is pure.
///
/// The same function may be cacheable in one context and not in another
/// (e.g. one where external state changes between identical calls).
pub trait PurityContext {
    /// `name` is `None` for anonymous functions.
    fn is_pure(&self, name: Option<&str>) -> bool;
}

/// Named functions listed with `with_impure` are impure; everything else,
/// including anonymous functions, is pure.
impl PurityContext for SimpleContext {
    fn is_pure(&self, name: Option<&str>) -> bool {
        !name.is_some_and(|name| self.is_impure(name))
    }
}
