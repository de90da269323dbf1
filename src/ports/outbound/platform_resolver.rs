use crate::resolution::domain::ComponentInfo;
use crate::shared::ResolveResult;

/// PlatformResolver port for one marketplace's numbering scheme
///
/// A resolver both recognizes the shape of a code and knows how to turn a
/// recognized code into a [`ComponentInfo`]. Implementations hold no
/// per-call state, so a single instance may serve concurrent calls.
pub trait PlatformResolver: Send + Sync {
    /// Stable human-readable platform label used in messages and UI
    fn name(&self) -> &str;

    /// Pure, total predicate over the trimmed code. Never performs I/O.
    fn recognizes(&self, code: &str) -> bool;

    /// Resolves a recognized code into a fully identified record
    ///
    /// # Errors
    /// Returns a typed failure; partial records are never returned.
    fn resolve(&self, code: &str) -> ResolveResult<ComponentInfo>;
}
