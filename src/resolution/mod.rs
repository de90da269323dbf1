/// Resolution domain: component records, QR payload decoding and
/// first-match dispatch across platform resolvers.
pub mod domain;
pub mod services;
