use crate::shared::error::ResolveError;

/// Type alias for Result with anyhow::Error as the error type.
/// Used by the CLI, configuration and output layers.
pub type Result<T> = std::result::Result<T, anyhow::Error>;

/// Result of a resolution-core operation, carrying a typed failure kind.
pub type ResolveResult<T> = std::result::Result<T, ResolveError>;
