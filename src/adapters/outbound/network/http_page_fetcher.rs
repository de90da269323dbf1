use crate::ports::outbound::{FetchError, FetchedPage, PageFetcher};
use crate::shared::security::MAX_PAGE_BYTES;
use crate::shared::Result;
use std::io::{self, Read};
use std::time::Duration;

/// Browser-like user agent; marketplaces block obvious bots
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7)";

/// Default bound on a single page fetch
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// HttpPageFetcher adapter issuing blocking GET requests with reqwest
///
/// This adapter implements the PageFetcher port. Each call performs one
/// request bounded by the configured timeout and blocks the calling thread
/// for at most that long. Failed requests are never retried.
pub struct HttpPageFetcher {
    client: reqwest::blocking::Client,
    max_body_bytes: u64,
}

impl HttpPageFetcher {
    /// Creates a fetcher with the default timeout and user agent
    pub fn new() -> Result<Self> {
        Self::with_settings(DEFAULT_TIMEOUT, DEFAULT_USER_AGENT)
    }

    /// Creates a fetcher with an explicit timeout and user agent
    pub fn with_settings(timeout: Duration, user_agent: &str) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            max_body_bytes: MAX_PAGE_BYTES,
        })
    }

    /// Caps the accepted response body size
    pub fn with_body_limit(mut self, max_body_bytes: u64) -> Self {
        self.max_body_bytes = max_body_bytes;
        self
    }

    fn body_too_large(&self) -> FetchError {
        FetchError {
            details: format!("response body exceeds {} bytes", self.max_body_bytes),
            timed_out: false,
        }
    }
}

impl PageFetcher for HttpPageFetcher {
    fn fetch(&self, url: &str) -> std::result::Result<FetchedPage, FetchError> {
        let to_fetch_error = |e: reqwest::Error| FetchError {
            timed_out: e.is_timeout(),
            details: e.to_string(),
        };

        let response = self.client.get(url).send().map_err(to_fetch_error)?;
        let status = response.status().as_u16();
        let final_url = response.url().to_string();

        if response
            .content_length()
            .is_some_and(|len| len > self.max_body_bytes)
        {
            return Err(self.body_too_large());
        }

        // Read one byte past the limit to detect oversized bodies without a Content-Length
        let mut body = Vec::new();
        response
            .take(self.max_body_bytes + 1)
            .read_to_end(&mut body)
            .map_err(|e| FetchError {
                timed_out: e.kind() == io::ErrorKind::TimedOut,
                details: e.to_string(),
            })?;
        if body.len() as u64 > self.max_body_bytes {
            return Err(self.body_too_large());
        }

        Ok(FetchedPage::new(
            final_url,
            status,
            String::from_utf8_lossy(&body).into_owned(),
        ))
    }
}
