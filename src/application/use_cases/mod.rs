/// Use cases - Application-specific business logic
mod resolve_component;

pub use resolve_component::ComponentResolutionService;
