use crate::application::dto::ScanResult;
use crate::ports::outbound::ComponentFormatter;
use crate::resolution::domain::ComponentInfo;
use crate::shared::Result;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct PlatformList<'a> {
    platforms: &'a [String],
    count: usize,
}

/// JsonFormatter adapter producing pretty-printed JSON
///
/// Field names follow the snake_case keys consumed by the inventory UI
/// (`platform_code`, `datasheet_url`, ...).
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }

    fn to_json<T: Serialize>(value: &T) -> Result<String> {
        let mut json = serde_json::to_string_pretty(value)?;
        json.push('\n');
        Ok(json)
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ComponentFormatter for JsonFormatter {
    fn format_component(&self, component: &ComponentInfo) -> Result<String> {
        Self::to_json(component)
    }

    fn format_scan(&self, scan: &ScanResult) -> Result<String> {
        Self::to_json(scan)
    }

    fn format_platforms(&self, platforms: &[String]) -> Result<String> {
        Self::to_json(&PlatformList {
            platforms,
            count: platforms.len(),
        })
    }
}
