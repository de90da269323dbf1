/// Inbound ports (Driving ports) - Use case interfaces
///
/// These ports define the interfaces that external adapters (e.g., CLI)
/// use to interact with the resolution core.
pub mod component_resolution_port;

pub use component_resolution_port::ComponentResolutionPort;
