use crate::resolution::domain::{ComponentInfo, QrPayload};
use serde::Serialize;

/// ScanResult - outcome of the scan flow
///
/// Pairs the component resolved from a scanned code with the quantity
/// and details read from the QR payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScanResult {
    pub component: ComponentInfo,
    pub quantity: u32,
    pub qrcode_info: QrPayload,
}

impl ScanResult {
    pub fn new(component: ComponentInfo, payload: QrPayload) -> Self {
        Self {
            component,
            quantity: payload.quantity(),
            qrcode_info: payload,
        }
    }
}
