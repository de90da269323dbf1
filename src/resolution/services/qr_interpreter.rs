use crate::resolution::domain::QrPayload;
use crate::resolution::services::code_format::{strip_braces, DecodeError, DecodedFields, FieldSpec};
use crate::shared::error::ResolveError;
use crate::shared::security::MAX_INPUT_LENGTH;
use crate::shared::ResolveResult;

/// A QR payload encoding the interpreter knows how to decode
pub trait QrSubFormat: Send + Sync {
    /// Label recorded on payloads produced by this format
    fn label(&self) -> &'static str;

    /// Decodes the raw payload, failing unless both code and a non-zero
    /// quantity are present.
    fn decode(&self, raw: &str) -> Result<QrPayload, DecodeError>;
}

/// Brace micro-format printed on LCSC reels and bags,
/// e.g. `{pbn:PICK2401,on:SO2401,pc:C2040,pm:RP2040,qty:10,pdi:1234}`
pub struct LcscQrFormat;

impl LcscQrFormat {
    const PRODUCT_CODE: FieldSpec = FieldSpec::required("pc");
    const QUANTITY: FieldSpec = FieldSpec::required("qty");
    const ORDER_NUMBER: FieldSpec = FieldSpec::optional("on");
    const PART_MODEL: FieldSpec = FieldSpec::optional("pm");
    const PART_DETAIL_ID: FieldSpec = FieldSpec::optional("pdi");
}

impl QrSubFormat for LcscQrFormat {
    fn label(&self) -> &'static str {
        "LCSC"
    }

    fn decode(&self, raw: &str) -> Result<QrPayload, DecodeError> {
        let fields = DecodedFields::parse(raw);

        let code = fields
            .text(Self::PRODUCT_CODE)?
            .ok_or(DecodeError::MissingTag {
                tag: Self::PRODUCT_CODE.tag,
            })?;
        let quantity = fields
            .unsigned(Self::QUANTITY)?
            .ok_or(DecodeError::MissingTag {
                tag: Self::QUANTITY.tag,
            })?;
        let order_number = fields.text(Self::ORDER_NUMBER)?;
        let part_model = fields.text(Self::PART_MODEL)?;
        let part_detail_id = fields.text(Self::PART_DETAIL_ID)?;

        let payload = QrPayload::new(
            code,
            quantity,
            strip_braces(raw).to_string(),
            self.label().to_string(),
        )
        .map_err(|e| DecodeError::Rejected {
            reason: e.to_string(),
        })?;

        Ok(payload
            .with_attribute("order_number", order_number.as_deref())
            .with_attribute("part_model", part_model.as_deref())
            .with_attribute("part_detail_id", part_detail_id.as_deref()))
    }
}

/// Turns scanned QR text into a [`QrPayload`]
///
/// Sub-formats are tried in priority order and the first one that yields a
/// valid payload wins. Interpretation is purely computational.
pub struct QrInterpreter {
    formats: Vec<Box<dyn QrSubFormat>>,
}

impl QrInterpreter {
    /// Creates an interpreter with the built-in formats
    pub fn new() -> Self {
        Self::with_formats(vec![Box::new(LcscQrFormat)])
    }

    /// Creates an interpreter with an explicit priority order
    pub fn with_formats(formats: Vec<Box<dyn QrSubFormat>>) -> Self {
        Self { formats }
    }

    /// Labels of the known formats, in priority order
    pub fn format_labels(&self) -> Vec<&'static str> {
        self.formats.iter().map(|f| f.label()).collect()
    }

    /// Interprets a raw QR payload
    ///
    /// # Errors
    /// - `EmptyInput` when the payload is empty or whitespace only
    /// - `UnrecognizedFormat` when no format produces a valid payload
    pub fn interpret(&self, raw: &str) -> ResolveResult<QrPayload> {
        if raw.trim().is_empty() {
            return Err(ResolveError::EmptyInput);
        }

        if raw.len() <= MAX_INPUT_LENGTH {
            for format in &self.formats {
                if let Ok(payload) = format.decode(raw) {
                    return Ok(payload);
                }
            }
        }

        Err(ResolveError::UnrecognizedFormat {
            raw: raw.chars().take(64).collect(),
        })
    }
}

impl Default for QrInterpreter {
    fn default() -> Self {
        Self::new()
    }
}
