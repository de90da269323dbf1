/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the resolution domain isolated.
mod output_format;
mod resolver_settings;
mod scan_result;

pub use output_format::OutputFormat;
pub use resolver_settings::ResolverSettings;
pub use scan_result::ScanResult;
