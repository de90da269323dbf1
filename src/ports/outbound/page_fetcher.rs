/// A fetched HTTP response, reduced to what extraction needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedPage {
    /// Final URL after redirects
    pub url: String,
    pub status: u16,
    pub body: String,
}

impl FetchedPage {
    pub fn new(url: impl Into<String>, status: u16, body: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Transport-level failure reported by a [`PageFetcher`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{details}")]
pub struct FetchError {
    pub details: String,
    pub timed_out: bool,
}

/// PageFetcher port for issuing a single HTTP GET
///
/// Any HTTP status is a successful fetch; only transport failures
/// (DNS, connect, TLS, timeout, body read) are errors. Implementations
/// perform exactly one attempt with a bounded timeout and never retry.
pub trait PageFetcher: Send + Sync {
    fn fetch(&self, url: &str) -> Result<FetchedPage, FetchError>;
}
