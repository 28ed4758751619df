// Telegram envelope: wire layout shared by every profile
pub mod erp1;
pub mod optional;
pub mod rorg;

pub use erp1::{sender_id_from_slice, Erp1Telegram};
pub use optional::{receiving_state_description, OptionalData};
pub use rorg::Rorg;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TelegramError {
    #[error("Malformed telegram: need at least {expected} bytes, got {actual}")]
    MalformedLength { expected: usize, actual: usize },

    #[error("Illegal sender id: expected 4 bytes, got {0}")]
    IllegalSenderId(usize),

    #[error("Cannot determine data length for RORG {0:#04x}")]
    UnknownDataLength(u8),
}

pub type Result<T> = std::result::Result<T, TelegramError>;
