/// Adapters layer - Infrastructure implementations
///
/// This layer contains concrete implementations of the ports,
/// providing the actual integration with marketplaces, the network,
/// the filesystem and the console.
pub mod outbound;
