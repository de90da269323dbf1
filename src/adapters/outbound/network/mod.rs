/// Network adapters for marketplace HTTP access
mod http_page_fetcher;

pub use http_page_fetcher::{HttpPageFetcher, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT};
