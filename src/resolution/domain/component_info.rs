use crate::shared::error::ResolveError;
use crate::shared::ResolveResult;
use serde::Serialize;

/// Separator between `label: value` lines folded into the description
pub const DESCRIPTION_SEPARATOR: &str = "\n";

/// Normalized component record produced by every platform resolver
///
/// Instances are immutable once built; each resolution produces a fresh
/// record. The provenance pair (`platform_code`, `platform_name`) is always
/// present, and `name` is guaranteed non-empty by [`ComponentInfoBuilder::build`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentInfo {
    name: String,
    model: Option<String>,
    value: Option<String>,
    package: Option<String>,
    description: Option<String>,
    manufacturer: Option<String>,
    price: Option<f64>,
    image_url: Option<String>,
    datasheet_url: Option<String>,
    platform_code: String,
    platform_name: String,
    platform_url: Option<String>,
}

impl ComponentInfo {
    /// Starts a record for a code resolved on the given platform
    pub fn builder(
        platform_code: impl Into<String>,
        platform_name: impl Into<String>,
    ) -> ComponentInfoBuilder {
        ComponentInfoBuilder {
            platform_code: platform_code.into(),
            platform_name: platform_name.into(),
            ..ComponentInfoBuilder::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn model(&self) -> Option<&str> {
        self.model.as_deref()
    }

    /// Value or parametric description (e.g. the product headline)
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn package(&self) -> Option<&str> {
        self.package.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn manufacturer(&self) -> Option<&str> {
        self.manufacturer.as_deref()
    }

    pub fn price(&self) -> Option<f64> {
        self.price
    }

    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }

    pub fn datasheet_url(&self) -> Option<&str> {
        self.datasheet_url.as_deref()
    }

    pub fn platform_code(&self) -> &str {
        &self.platform_code
    }

    pub fn platform_name(&self) -> &str {
        &self.platform_name
    }

    pub fn platform_url(&self) -> Option<&str> {
        self.platform_url.as_deref()
    }
}

/// Accumulates extracted fields before producing a [`ComponentInfo`]
///
/// Setters ignore blank values so that empty page elements never
/// overwrite or pollute a field.
#[derive(Debug, Default, Clone)]
pub struct ComponentInfoBuilder {
    name: Option<String>,
    model: Option<String>,
    value: Option<String>,
    package: Option<String>,
    description_lines: Vec<String>,
    manufacturer: Option<String>,
    price: Option<f64>,
    image_url: Option<String>,
    datasheet_url: Option<String>,
    platform_code: String,
    platform_name: String,
    platform_url: Option<String>,
}

fn non_empty(value: impl Into<String>) -> Option<String> {
    let value = value.into();
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

impl ComponentInfoBuilder {
    pub fn name(&mut self, name: impl Into<String>) -> &mut Self {
        if let Some(name) = non_empty(name) {
            self.name = Some(name);
        }
        self
    }

    pub fn model(&mut self, model: impl Into<String>) -> &mut Self {
        if let Some(model) = non_empty(model) {
            self.model = Some(model);
        }
        self
    }

    pub fn value(&mut self, value: impl Into<String>) -> &mut Self {
        if let Some(value) = non_empty(value) {
            self.value = Some(value);
        }
        self
    }

    pub fn package(&mut self, package: impl Into<String>) -> &mut Self {
        if let Some(package) = non_empty(package) {
            self.package = Some(package);
        }
        self
    }

    pub fn manufacturer(&mut self, manufacturer: impl Into<String>) -> &mut Self {
        if let Some(manufacturer) = non_empty(manufacturer) {
            self.manufacturer = Some(manufacturer);
        }
        self
    }

    /// Appends free text to the description, one entry per line
    pub fn description(&mut self, text: impl Into<String>) -> &mut Self {
        if let Some(text) = non_empty(text) {
            self.description_lines.push(text);
        }
        self
    }

    /// Appends a `label: value` line to the description
    pub fn description_entry(&mut self, label: &str, value: &str) -> &mut Self {
        let (label, value) = (label.trim(), value.trim());
        if !label.is_empty() && !value.is_empty() {
            self.description_lines.push(format!("{}: {}", label, value));
        }
        self
    }

    /// Unit price; negative and non-finite values are ignored
    pub fn price(&mut self, price: f64) -> &mut Self {
        if price.is_finite() && price >= 0.0 {
            self.price = Some(price);
        }
        self
    }

    pub fn image_url(&mut self, url: impl Into<String>) -> &mut Self {
        if let Some(url) = non_empty(url) {
            self.image_url = Some(url);
        }
        self
    }

    pub fn datasheet_url(&mut self, url: impl Into<String>) -> &mut Self {
        if let Some(url) = non_empty(url) {
            self.datasheet_url = Some(url);
        }
        self
    }

    pub fn platform_url(&mut self, url: impl Into<String>) -> &mut Self {
        if let Some(url) = non_empty(url) {
            self.platform_url = Some(url);
        }
        self
    }

    /// Finishes the record
    ///
    /// # Errors
    /// Returns `IncompleteResult` when no name was extracted, since a record
    /// without its primary identifying field is never returned.
    pub fn build(self) -> ResolveResult<ComponentInfo> {
        let name = self.name.ok_or_else(|| ResolveError::IncompleteResult {
            code: self.platform_code.clone(),
            field: "name".to_string(),
        })?;

        let description = if self.description_lines.is_empty() {
            None
        } else {
            Some(self.description_lines.join(DESCRIPTION_SEPARATOR))
        };

        Ok(ComponentInfo {
            name,
            model: self.model,
            value: self.value,
            package: self.package,
            description,
            manufacturer: self.manufacturer,
            price: self.price,
            image_url: self.image_url,
            datasheet_url: self.datasheet_url,
            platform_code: self.platform_code,
            platform_name: self.platform_name,
            platform_url: self.platform_url,
        })
    }
}
