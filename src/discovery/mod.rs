// Device discovery support
pub mod properties;

pub use properties::DiscoveryProperties;
