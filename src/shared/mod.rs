/// Shared utilities and error types used across all layers
pub mod error;
pub mod result;
pub mod security;

pub use result::{ResolveResult, Result};
