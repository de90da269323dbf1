pub mod component_info;
pub mod qr_payload;

pub use component_info::{ComponentInfo, ComponentInfoBuilder, DESCRIPTION_SEPARATOR};
pub use qr_payload::QrPayload;
