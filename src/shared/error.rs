use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow scripts to tell a bad code apart from an
/// infrastructure failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the code was resolved (or platforms were listed)
    Success = 0,
    /// The input was not recognized by any QR format or platform
    NotRecognized = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (network error, page layout change, config, file I/O, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Picks the exit code for an error surfaced from `run()`.
    pub fn for_error(error: &anyhow::Error) -> Self {
        match error.downcast_ref::<ResolveError>() {
            Some(e) if e.is_user_input_error() => ExitCode::NotRecognized,
            _ => ExitCode::ApplicationError,
        }
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::NotRecognized => write!(f, "Not Recognized (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Failures of a single resolution or QR interpretation call.
///
/// Every variant is returned to the caller as a value; nothing in the
/// resolution core panics or logs on the caller's behalf.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("QR payload is empty\n\n💡 Hint: Scan the code again or paste the raw payload text")]
    EmptyInput,

    #[error("Unrecognized QR payload format: {raw}\n\n💡 Hint: Expected a payload such as {{pc:C2040,qty:10}}")]
    UnrecognizedFormat { raw: String },

    #[error("{kind} is too large ({length} bytes). Maximum allowed size is {limit} bytes.\n\n💡 Hint: Pass only the code or the raw QR text")]
    InputTooLarge {
        kind: String,
        length: usize,
        limit: usize,
    },

    #[error("No platform resolvers are registered\n\n💡 Hint: Check that at least one platform is enabled in the configuration")]
    NoResolversRegistered,

    #[error("Unrecognized platform code format: {code}\n\n💡 Hint: Supported platforms: {supported}")]
    NoResolverMatched { code: String, supported: String },

    #[error("Failed to reach {platform}: {url}\nDetails: {details}")]
    NetworkError {
        platform: String,
        url: String,
        details: String,
    },

    #[error("{platform} returned HTTP status {status} for {url}")]
    UnexpectedStatus {
        platform: String,
        url: String,
        status: u16,
    },

    #[error("Content region '{selector}' not found on {url}\n\n💡 Hint: The marketplace page layout may have changed")]
    MissingContentRegion { url: String, selector: String },

    #[error("Resolved page for {code} has no {field}\n\n💡 Hint: The marketplace page layout may have changed")]
    IncompleteResult { code: String, field: String },
}

impl ResolveError {
    /// Errors caused by what the user typed or scanned, as opposed to
    /// deployment problems or remote failures.
    pub fn is_user_input_error(&self) -> bool {
        matches!(
            self,
            ResolveError::EmptyInput
                | ResolveError::UnrecognizedFormat { .. }
                | ResolveError::InputTooLarge { .. }
                | ResolveError::NoResolverMatched { .. }
        )
    }

    /// Whether a caller-side retry has a chance of succeeding.
    ///
    /// Transport failures and 5xx/429 statuses are transient. A 404 usually
    /// means a dead code, and layout errors persist until extraction rules change.
    pub fn is_retryable(&self) -> bool {
        match self {
            ResolveError::NetworkError { .. } => true,
            ResolveError::UnexpectedStatus { status, .. } => *status >= 500 || *status == 429,
            _ => false,
        }
    }
}

/// Application-level errors outside of resolution itself.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    /// Validation error for settings and builders
    #[error("Validation error: {message}")]
    Validation { message: String },
}
