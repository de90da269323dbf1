use crate::application::dto::ScanResult;
use crate::ports::outbound::ComponentFormatter;
use crate::resolution::domain::ComponentInfo;
use crate::shared::Result;

/// Markdown table header for component fields
const TABLE_HEADER: &str = "| Field | Value |\n";

/// Markdown table separator line
const TABLE_SEPARATOR: &str = "|-------|-------|\n";

/// MarkdownFormatter adapter for human-readable component output
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', "<br>")
    }

    fn push_row(output: &mut String, field: &str, value: Option<&str>) {
        if let Some(value) = value {
            output.push_str(&format!(
                "| {} | {} |\n",
                field,
                Self::escape_markdown_table_cell(value)
            ));
        }
    }

    fn render_component(output: &mut String, component: &ComponentInfo) {
        output.push_str(&format!(
            "## {}\n\n",
            Self::escape_markdown_table_cell(component.name())
        ));
        output.push_str(TABLE_HEADER);
        output.push_str(TABLE_SEPARATOR);
        Self::push_row(output, "Name", Some(component.name()));
        Self::push_row(output, "Model", component.model());
        Self::push_row(output, "Value", component.value());
        Self::push_row(output, "Package", component.package());
        Self::push_row(output, "Manufacturer", component.manufacturer());
        let price = component.price().map(|p| format!("{:.4}", p));
        Self::push_row(output, "Price", price.as_deref());
        Self::push_row(output, "Description", component.description());
        Self::push_row(output, "Image", component.image_url());
        Self::push_row(output, "Datasheet", component.datasheet_url());
        Self::push_row(output, "Platform", Some(component.platform_name()));
        Self::push_row(output, "Platform Code", Some(component.platform_code()));
        Self::push_row(output, "Platform URL", component.platform_url());
        output.push('\n');
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ComponentFormatter for MarkdownFormatter {
    fn format_component(&self, component: &ComponentInfo) -> Result<String> {
        let mut output = String::from("# Component\n\n");
        Self::render_component(&mut output, component);
        Ok(output)
    }

    fn format_scan(&self, scan: &ScanResult) -> Result<String> {
        let mut output = String::from("# Scanned Component\n\n");
        output.push_str(&format!("**Quantity:** {}\n\n", scan.quantity));
        Self::render_component(&mut output, &scan.component);

        output.push_str("## QR Payload\n\n");
        output.push_str(TABLE_HEADER);
        output.push_str(TABLE_SEPARATOR);
        Self::push_row(&mut output, "Format", Some(scan.qrcode_info.platform()));
        Self::push_row(&mut output, "Raw", Some(scan.qrcode_info.raw()));
        for (key, value) in scan.qrcode_info.attributes() {
            Self::push_row(&mut output, key, Some(value.as_str()));
        }
        output.push('\n');
        Ok(output)
    }

    fn format_platforms(&self, platforms: &[String]) -> Result<String> {
        let mut output = String::from("# Supported Platforms\n\n");
        if platforms.is_empty() {
            output.push_str("*No platforms registered*\n");
        }
        for (index, platform) in platforms.iter().enumerate() {
            output.push_str(&format!("{}. {}\n", index + 1, platform));
        }
        Ok(output)
    }
}
