use crate::shared::error::ResolveError;
use crate::shared::{ResolveResult, Result};
use std::fs;
use std::path::Path;

/// Maximum accepted size of a raw code or QR payload (4 KiB).
/// Scanner payloads are tiny; anything larger is noise or abuse.
pub const MAX_INPUT_LENGTH: usize = 4 * 1024;

/// Maximum accepted size of a fetched marketplace page body (8 MiB).
pub const MAX_PAGE_BYTES: u64 = 8 * 1024 * 1024;

/// Validates that a path is not a symbolic link
///
/// # Security
/// This function uses `symlink_metadata()` instead of `metadata()` to ensure
/// we check the symlink itself, not the target it points to.
///
/// # Errors
/// Returns an error if the path is a symbolic link or if metadata cannot be read
pub fn validate_not_symlink(path: &Path, operation: &str) -> Result<()> {
    let metadata = fs::symlink_metadata(path).map_err(|e| {
        anyhow::anyhow!(
            "Failed to read metadata for {} operation on {}: {}",
            operation,
            path.display(),
            e
        )
    })?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. For security reasons, {} operations on symbolic links are not allowed.",
            path.display(),
            operation
        );
    }

    Ok(())
}

/// Validates that user input fits within [`MAX_INPUT_LENGTH`].
///
/// # Errors
/// Returns `InputTooLarge` naming the input kind when it is too long
pub fn validate_input_length(input: &str, input_kind: &str) -> ResolveResult<()> {
    if input.len() > MAX_INPUT_LENGTH {
        return Err(ResolveError::InputTooLarge {
            kind: input_kind.to_string(),
            length: input.len(),
            limit: MAX_INPUT_LENGTH,
        });
    }
    Ok(())
}
