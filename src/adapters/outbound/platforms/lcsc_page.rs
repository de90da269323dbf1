//! Extraction rules for LCSC product detail pages.
//!
//! The page is rendered with CSS-module class names; when LCSC ships a new
//! build these hashes change and extraction fails with `MissingContentRegion`
//! or `IncompleteResult` until the selectors below are updated.

use crate::resolution::domain::ComponentInfo;
use crate::shared::error::ResolveError;
use crate::shared::{ResolveResult, Result};
use scraper::{ElementRef, Html, Selector};

/// Primary content region holding the headline and the attribute list
pub const CONTENT_REGION_SELECTOR: &str = ".BaseInfo_component-info__yuOgz";
const HEADING_SELECTOR: &str = "h1.BaseInfo_component-name__7OSgG";
const ENTRY_SELECTOR: &str = "dl > div";
const TERM_SELECTOR: &str = "dt";
const DEFINITION_SELECTOR: &str = "dd";
const PARAMETER_ROW_SELECTOR: &str = ".GoodsParameter_table__VYg5o tbody > tr";
const CELL_SELECTOR: &str = "td";
const DATASHEET_SELECTOR: &str = ".DataBookPDF_link__h7pPt";

/// Platform name recorded on LCSC results
pub const LCSC_PLATFORM_NAME: &str = "立创商城";

const LABEL_BRAND: &str = "品牌名称";
const LABEL_FACTORY_MODEL: &str = "厂家型号";
const LABEL_PACKAGE: &str = "商品封装";
const LABEL_CATALOG: &str = "商品目录";

/// Compiled selectors for the LCSC detail page
pub struct LcscPageExtractor {
    content_region: Selector,
    heading: Selector,
    entry: Selector,
    term: Selector,
    definition: Selector,
    parameter_row: Selector,
    cell: Selector,
    datasheet: Selector,
}

fn compile(selector: &str) -> Result<Selector> {
    Selector::parse(selector)
        .map_err(|e| anyhow::anyhow!("Invalid CSS selector '{}': {:?}", selector, e))
}

fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

impl LcscPageExtractor {
    pub fn new() -> Result<Self> {
        Ok(Self {
            content_region: compile(CONTENT_REGION_SELECTOR)?,
            heading: compile(HEADING_SELECTOR)?,
            entry: compile(ENTRY_SELECTOR)?,
            term: compile(TERM_SELECTOR)?,
            definition: compile(DEFINITION_SELECTOR)?,
            parameter_row: compile(PARAMETER_ROW_SELECTOR)?,
            cell: compile(CELL_SELECTOR)?,
            datasheet: compile(DATASHEET_SELECTOR)?,
        })
    }

    /// Extracts a component record from a detail page
    ///
    /// # Arguments
    /// * `html` - Page body
    /// * `code` - Normalized (trimmed, uppercase) product code
    /// * `url` - Detail page URL, recorded as provenance
    ///
    /// # Errors
    /// - `MissingContentRegion` when the base-info region is absent
    /// - `IncompleteResult` when the catalog name could not be found
    pub fn extract(&self, html: &str, code: &str, url: &str) -> ResolveResult<ComponentInfo> {
        let document = Html::parse_document(html);

        let region = document.select(&self.content_region).next().ok_or_else(|| {
            ResolveError::MissingContentRegion {
                url: url.to_string(),
                selector: CONTENT_REGION_SELECTOR.to_string(),
            }
        })?;

        let mut builder = ComponentInfo::builder(code, LCSC_PLATFORM_NAME);
        builder.platform_url(url);

        if let Some(heading) = region.select(&self.heading).next() {
            builder.value(element_text(heading));
        }

        for entry in region.select(&self.entry) {
            let label = entry.select(&self.term).next().map(element_text);
            let value = entry.select(&self.definition).next().map(element_text);
            let (Some(label), Some(value)) = (label, value) else {
                continue;
            };

            match label.as_str() {
                LABEL_BRAND => builder.manufacturer(value),
                LABEL_FACTORY_MODEL => builder.model(value),
                LABEL_PACKAGE => builder.package(value),
                _ => builder.description_entry(&label, &value),
            };
        }

        if let Some(catalog) = self.catalog_name(&document) {
            builder.name(catalog);
        }

        if let Some(href) = document
            .select(&self.datasheet)
            .find_map(|link| link.value().attr("href"))
        {
            builder.datasheet_url(href);
        }

        builder.build()
    }

    /// Second cell of the first parameter row labelled with the catalog label
    fn catalog_name(&self, document: &Html) -> Option<String> {
        document.select(&self.parameter_row).find_map(|row| {
            let mut cells = row.select(&self.cell);
            let key = cells.next().map(element_text)?;
            if key != LABEL_CATALOG {
                return None;
            }
            cells.next().map(element_text).filter(|v| !v.is_empty())
        })
    }
}
