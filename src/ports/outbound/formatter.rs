use crate::application::dto::ScanResult;
use crate::resolution::domain::ComponentInfo;
use crate::shared::Result;

/// ComponentFormatter port for rendering resolution results
///
/// Implemented once per output format (JSON, Markdown).
pub trait ComponentFormatter {
    /// Formats a component resolved from a typed code
    fn format_component(&self, component: &ComponentInfo) -> Result<String>;

    /// Formats the outcome of the scan flow (QR payload + resolved component)
    fn format_scan(&self, scan: &ScanResult) -> Result<String>;

    /// Formats the ordered list of supported platform names
    fn format_platforms(&self, platforms: &[String]) -> Result<String>;
}
