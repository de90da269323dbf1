/// Factories for assembling adapters from application settings
mod formatter_factory;
mod registry_factory;

pub use formatter_factory::FormatterFactory;
pub use registry_factory::RegistryFactory;
