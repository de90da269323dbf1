use super::lcsc_page::LcscPageExtractor;
use crate::ports::outbound::{PageFetcher, PlatformResolver};
use crate::resolution::domain::ComponentInfo;
use crate::shared::error::{AppError, ResolveError};
use crate::shared::{ResolveResult, Result};
use regex::Regex;

/// Display name of the LCSC platform
pub const LCSC_DISPLAY_NAME: &str = "立创商城(LCSC)";

/// Detail page template; `{code}` is replaced by the normalized code
pub const DEFAULT_LCSC_DETAIL_URL: &str = "https://www.jlc-smt.com/lcsc/detail/{code}.html";

/// Placeholder substituted in detail URL templates
pub const CODE_PLACEHOLDER: &str = "{code}";

/// LCSC codes: `C` or `c` followed by one or more ASCII digits (e.g. `C2040`)
const LCSC_CODE_PATTERN: &str = r"^[Cc][0-9]+$";

/// LcscResolver adapter for the LCSC electronic component marketplace
///
/// Recognizes `[Cc]\d+` codes and resolves them by fetching the product
/// detail page through a [`PageFetcher`] and scraping it.
pub struct LcscResolver<F: PageFetcher> {
    fetcher: F,
    extractor: LcscPageExtractor,
    pattern: Regex,
    detail_url_template: String,
}

impl<F: PageFetcher> LcscResolver<F> {
    pub fn new(fetcher: F) -> Result<Self> {
        Self::with_detail_url(fetcher, DEFAULT_LCSC_DETAIL_URL)
    }

    /// Creates a resolver against a different detail page template
    ///
    /// # Errors
    /// Returns an error if the template lacks the `{code}` placeholder
    pub fn with_detail_url(fetcher: F, detail_url_template: &str) -> Result<Self> {
        if !detail_url_template.contains(CODE_PLACEHOLDER) {
            return Err(AppError::Validation {
                message: format!(
                    "LCSC detail URL template must contain {}: {}",
                    CODE_PLACEHOLDER, detail_url_template
                ),
            }
            .into());
        }

        Ok(Self {
            fetcher,
            extractor: LcscPageExtractor::new()?,
            pattern: Regex::new(LCSC_CODE_PATTERN)?,
            detail_url_template: detail_url_template.to_string(),
        })
    }

    /// Normalizes a code: surrounding whitespace removed, uppercase
    pub fn normalize(code: &str) -> String {
        code.trim().to_uppercase()
    }

    /// Detail page URL for a normalized code
    pub fn detail_url(&self, code: &str) -> String {
        self.detail_url_template
            .replace(CODE_PLACEHOLDER, &urlencoding::encode(code))
    }
}

impl<F: PageFetcher> PlatformResolver for LcscResolver<F> {
    fn name(&self) -> &str {
        LCSC_DISPLAY_NAME
    }

    fn recognizes(&self, code: &str) -> bool {
        self.pattern.is_match(code.trim())
    }

    fn resolve(&self, code: &str) -> ResolveResult<ComponentInfo> {
        let code = Self::normalize(code);
        let url = self.detail_url(&code);

        let page = self
            .fetcher
            .fetch(&url)
            .map_err(|e| ResolveError::NetworkError {
                platform: self.name().to_string(),
                url: url.clone(),
                details: if e.timed_out {
                    format!("request timed out ({})", e.details)
                } else {
                    e.details
                },
            })?;

        if !page.is_success() {
            return Err(ResolveError::UnexpectedStatus {
                platform: self.name().to_string(),
                url,
                status: page.status,
            });
        }

        self.extractor.extract(&page.body, &code, &url)
    }
}
