// Core module containing the shared EEP data model
pub mod channel;
pub mod config;
pub mod constants;

// Re-export commonly used types
pub use channel::{ChannelKind, ChannelSpec, ChannelValue, Command, OnOff, OpenClosed, State, Unit};
pub use config::{ChannelTransformationConfig, Configuration};
pub use constants::*;
