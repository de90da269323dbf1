use crate::adapters::outbound::network::{DEFAULT_TIMEOUT, DEFAULT_USER_AGENT};
use crate::adapters::outbound::platforms::{CODE_PLACEHOLDER, DEFAULT_LCSC_DETAIL_URL};
use crate::shared::error::AppError;
use crate::shared::Result;
use std::time::Duration;

/// Upper bound for the request timeout; resolution blocks its caller
const MAX_TIMEOUT: Duration = Duration::from_secs(120);

/// ResolverSettings - knobs for building the default resolver registry
///
/// Defaults come from the built-in constants; the config file and CLI
/// flags override them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverSettings {
    /// Bound on a single marketplace request
    pub timeout: Duration,
    /// User agent sent to scraped marketplaces
    pub user_agent: String,
    /// LCSC detail page template containing `{code}`
    pub lcsc_detail_url: String,
    /// Whether the synthetic Taobao resolver is registered
    pub enable_taobao: bool,
}

impl Default for ResolverSettings {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            lcsc_detail_url: DEFAULT_LCSC_DETAIL_URL.to_string(),
            enable_taobao: true,
        }
    }
}

impl ResolverSettings {
    /// Checks the settings before any resolver is built
    ///
    /// # Errors
    /// Returns a validation error for a zero or excessive timeout, a blank
    /// user agent, or a detail URL template without `{code}`
    pub fn validate(&self) -> Result<()> {
        if self.timeout.is_zero() || self.timeout > MAX_TIMEOUT {
            return Err(AppError::Validation {
                message: format!(
                    "timeout must be between 1 and {} seconds, got {:?}",
                    MAX_TIMEOUT.as_secs(),
                    self.timeout
                ),
            }
            .into());
        }

        if self.user_agent.trim().is_empty() {
            return Err(AppError::Validation {
                message: "user agent must not be empty".to_string(),
            }
            .into());
        }

        if !self.lcsc_detail_url.contains(CODE_PLACEHOLDER) {
            return Err(AppError::Validation {
                message: format!(
                    "lcsc_detail_url must contain the {} placeholder: {}",
                    CODE_PLACEHOLDER, self.lcsc_detail_url
                ),
            }
            .into());
        }

        Ok(())
    }
}
