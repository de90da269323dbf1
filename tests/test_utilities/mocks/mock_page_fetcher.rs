use component_resolver::prelude::*;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock PageFetcher serving canned responses keyed by URL
///
/// Unknown URLs answer 404. Every requested URL is recorded so tests can
/// assert how many network calls a resolution made.
#[derive(Default, Clone)]
pub struct MockPageFetcher {
    pages: HashMap<String, (u16, String)>,
    failure: Option<FetchError>,
    requests: Arc<Mutex<Vec<String>>>,
}

impl MockPageFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, url: &str, status: u16, body: &str) -> Self {
        self.pages
            .insert(url.to_string(), (status, body.to_string()));
        self
    }

    /// Every fetch fails at the transport level
    pub fn failing(details: &str, timed_out: bool) -> Self {
        Self {
            failure: Some(FetchError {
                details: details.to_string(),
                timed_out,
            }),
            ..Self::default()
        }
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

impl PageFetcher for MockPageFetcher {
    fn fetch(&self, url: &str) -> std::result::Result<FetchedPage, FetchError> {
        self.requests.lock().unwrap().push(url.to_string());

        if let Some(ref failure) = self.failure {
            return Err(failure.clone());
        }

        let (status, body) = self
            .pages
            .get(url)
            .cloned()
            .unwrap_or((404, "<html><body>Not Found</body></html>".to_string()));
        Ok(FetchedPage::new(url, status, body))
    }
}
