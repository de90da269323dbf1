pub mod code_format;
pub mod qr_interpreter;
pub mod resolver_registry;

pub use code_format::{DecodeError, DecodedFields, FieldSpec};
pub use qr_interpreter::{LcscQrFormat, QrInterpreter, QrSubFormat};
pub use resolver_registry::ResolverRegistry;
