/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the resolution core uses
/// to interact with marketplaces, the network, and the console.
pub mod formatter;
pub mod output_presenter;
pub mod page_fetcher;
pub mod platform_resolver;
pub mod progress_reporter;

pub use formatter::ComponentFormatter;
pub use output_presenter::OutputPresenter;
pub use page_fetcher::{FetchError, FetchedPage, PageFetcher};
pub use platform_resolver::PlatformResolver;
pub use progress_reporter::ProgressReporter;
