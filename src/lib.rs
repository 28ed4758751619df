// enocean-eep: EnOcean Equipment Profile telegram codec
// Decodes ERP1 radio telegrams into typed channel values and encodes commands back

pub mod bitwise;
pub mod core;
pub mod discovery;
pub mod eep;
pub mod profiles;
pub mod telegram;

// Re-export commonly used types
pub use bitwise::{linear_scale, linear_unscale};
pub use crate::core::{
    constants::*, ChannelKind, ChannelSpec, ChannelValue, Command, Configuration, OnOff, OpenClosed,
    State, Unit,
};
pub use discovery::DiscoveryProperties;
pub use eep::{
    BuiltinTransformations, Eep, EepError, EepId, EepMessage, EepResult, ProfileDescriptor,
    ProfileRegistry, TransformationService,
};
pub use telegram::{Erp1Telegram, OptionalData, Rorg, TelegramError};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
