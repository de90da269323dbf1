//! component-resolver - resolve marketplace part codes into component records
//!
//! This library turns an opaque product code (typed by hand or read from a
//! QR label) into a normalized [`ComponentInfo`](resolution::domain::ComponentInfo)
//! by dispatching it to the marketplace that recognizes it, following
//! hexagonal architecture.
//!
//! # Architecture
//!
//! - **Domain Layer** (`resolution`): component records, the QR micro-format
//!   decoder and interpreter, and the first-match resolver registry
//! - **Application Layer** (`application`): the resolution service, DTOs and factories
//! - **Ports** (`ports`): interfaces for resolvers, page fetching and output
//! - **Adapters** (`adapters`): LCSC and Taobao resolvers, reqwest fetcher, formatters
//! - **Shared** (`shared`): error taxonomy and common utilities
//!
//! # Example
//!
//! ```no_run
//! use component_resolver::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let registry = RegistryFactory::create(&ResolverSettings::default())?;
//! let service = ComponentResolutionService::new(registry);
//!
//! let payload = service.interpret_qr_payload("{pc:C2040,qty:10}")?;
//! let component = service.resolve_code(payload.code())?;
//! println!("{} x{}", component.name(), payload.quantity());
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod ports;
pub mod resolution;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
    pub use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
    pub use crate::adapters::outbound::network::HttpPageFetcher;
    pub use crate::adapters::outbound::platforms::{
        LcscPageExtractor, LcscResolver, TaobaoResolver,
    };
    pub use crate::application::dto::{OutputFormat, ResolverSettings, ScanResult};
    pub use crate::application::factories::{FormatterFactory, RegistryFactory};
    pub use crate::application::use_cases::ComponentResolutionService;
    pub use crate::ports::inbound::ComponentResolutionPort;
    pub use crate::ports::outbound::{
        ComponentFormatter, FetchError, FetchedPage, OutputPresenter, PageFetcher,
        PlatformResolver, ProgressReporter,
    };
    pub use crate::resolution::domain::{ComponentInfo, ComponentInfoBuilder, QrPayload};
    pub use crate::resolution::services::{
        DecodeError, DecodedFields, FieldSpec, LcscQrFormat, QrInterpreter, QrSubFormat,
        ResolverRegistry,
    };
    pub use crate::shared::error::{AppError, ExitCode, ResolveError};
    pub use crate::shared::{ResolveResult, Result};
}
