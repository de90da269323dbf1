use crate::application::dto::ScanResult;
use crate::resolution::domain::{ComponentInfo, QrPayload};
use crate::shared::ResolveResult;

/// ComponentResolutionPort - Inbound port for code resolution
///
/// This port is the boundary exposed to callers (CLI, HTTP handlers, ...).
/// It represents the resolution core's public API. All operations are
/// stateless with respect to each other.
pub trait ComponentResolutionPort {
    /// Resolves a manually entered platform code
    ///
    /// # Errors
    /// Returns an error if:
    /// - No resolvers are registered
    /// - No registered platform recognizes the code
    /// - The selected platform fails (network, status, page layout)
    fn resolve_code(&self, code: &str) -> ResolveResult<ComponentInfo>;

    /// Interprets a scanned QR payload into a code and a quantity
    ///
    /// # Errors
    /// Returns `EmptyInput` or `UnrecognizedFormat`
    fn interpret_qr_payload(&self, raw: &str) -> ResolveResult<QrPayload>;

    /// Display names of registered platforms, in dispatch order
    fn list_supported_platforms(&self) -> Vec<String>;

    /// Interprets a scanned payload and resolves the code it carries
    ///
    /// # Errors
    /// Returns the first failure of either step
    fn scan(&self, raw: &str) -> ResolveResult<ScanResult> {
        let payload = self.interpret_qr_payload(raw)?;
        let component = self.resolve_code(payload.code())?;
        Ok(ScanResult::new(component, payload))
    }
}
