use crate::shared::error::AppError;
use crate::shared::Result;
use serde::Serialize;
use std::collections::BTreeMap;

/// Code and quantity recovered from a scanned QR payload
///
/// A payload only exists when both the code and a non-zero quantity were
/// found; [`QrPayload::new`] enforces this so partially decoded payloads
/// cannot be constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QrPayload {
    code: String,
    quantity: u32,
    raw: String,
    platform: String,
    /// Optional extra tags carried by the payload (order number, etc.)
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    attributes: BTreeMap<String, String>,
}

impl QrPayload {
    pub fn new(code: String, quantity: u32, raw: String, platform: String) -> Result<Self> {
        if code.trim().is_empty() {
            return Err(AppError::Validation {
                message: "QR payload code cannot be empty".to_string(),
            }
            .into());
        }

        if quantity == 0 {
            return Err(AppError::Validation {
                message: "QR payload quantity must be non-zero".to_string(),
            }
            .into());
        }

        Ok(Self {
            code: code.trim().to_string(),
            quantity,
            raw,
            platform,
            attributes: BTreeMap::new(),
        })
    }

    /// Attaches an optional attribute; blank values are dropped
    pub fn with_attribute(mut self, key: &str, value: Option<&str>) -> Self {
        if let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) {
            self.attributes.insert(key.to_string(), value.to_string());
        }
        self
    }

    /// Canonical product code, ready to be passed to the resolver registry
    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Original payload text with the outer braces removed
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Label of the QR sub-format that produced this payload
    pub fn platform(&self) -> &str {
        &self.platform
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    pub fn attributes(&self) -> &BTreeMap<String, String> {
        &self.attributes
    }
}
