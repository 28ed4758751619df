// Profile codec trait and error types

use super::id::EepId;
use super::message::EepMessage;
use super::transform::TransformError;
use crate::bitwise::ElementError;
use crate::core::constants::{CHANNEL_RECEIVINGSTATE, CHANNEL_TEACHINCMD};
use crate::core::{ChannelKind, ChannelValue, Command, Configuration, OnOff, State};
use crate::telegram::TelegramError;
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EepError {
    #[error("Malformed telegram: need at least {expected} bytes, got {actual}")]
    MalformedLength { expected: usize, actual: usize },

    #[error("Invalid payload length: expected {expected} bytes, got {actual}")]
    InvalidPayloadLength { expected: usize, actual: usize },

    #[error("Illegal sender id: expected 4 bytes, got {0}")]
    IllegalSenderId(usize),

    #[error("Channel {channel} is not supported by {eep}")]
    UnsupportedChannel { eep: EepId, channel: String },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Profile {0} not found")]
    ProfileNotFound(EepId),

    #[error("Profile {0} registered twice")]
    DuplicateProfile(EepId),

    #[error("Telegram RORG {actual:#04x} does not match profile RORG {expected:#04x}")]
    RorgMismatch { expected: u8, actual: u8 },

    #[error("Transformation failed: {0}")]
    TransformFailure(#[from] TransformError),
}

impl From<TelegramError> for EepError {
    fn from(err: TelegramError) -> Self {
        match err {
            TelegramError::MalformedLength { expected, actual } => {
                EepError::MalformedLength { expected, actual }
            }
            TelegramError::IllegalSenderId(len) => EepError::IllegalSenderId(len),
            TelegramError::UnknownDataLength(rorg) => {
                EepError::InvalidArgument(format!("No fixed data length for RORG {:#04x}", rorg))
            }
        }
    }
}

impl From<ElementError> for EepError {
    fn from(err: ElementError) -> Self {
        EepError::InvalidArgument(format!("Payload field error: {}", err))
    }
}

pub type EepResult<T> = std::result::Result<T, EepError>;

/// Factory that wraps a validated message in its profile codec
pub type EepFactory = fn(EepMessage) -> Box<dyn Eep>;

/// Codec for one EnOcean Equipment Profile.
///
/// Implementors only provide access to their [`EepMessage`] and override the
/// `*_impl` hooks they need. The provided methods check channel support and
/// route the standard channels before a hook runs.
pub trait Eep: Send + Sync {
    /// The telegram this codec works on
    fn message(&self) -> &EepMessage;

    /// Mutable access for outbound construction
    fn message_mut(&mut self) -> &mut EepMessage;

    /// Apply a command to the payload. Default: no-op.
    fn convert_from_command_impl(
        &mut self,
        _channel_id: &str,
        _command: &Command,
        _current_state: &State,
        _config: &Configuration,
    ) -> EepResult<()> {
        Ok(())
    }

    /// Decode a state channel. Default: not reported.
    fn convert_to_state_impl(
        &self,
        _channel_id: &str,
        _current_state: &State,
        _config: &Configuration,
    ) -> State {
        State::Undef
    }

    /// Decode an event channel. Default: no event.
    fn convert_to_event_impl(
        &self,
        _channel_id: &str,
        _last_event: Option<&str>,
        _config: &Configuration,
    ) -> Option<String> {
        None
    }

    /// Fill the payload with a teach-in telegram. Default: no-op.
    fn teach_in_query_impl(&mut self, _config: &Configuration) -> EepResult<()> {
        Ok(())
    }

    fn eep_id(&self) -> EepId {
        self.message().eep_id()
    }

    fn thing_type(&self) -> &'static str {
        self.message().descriptor().thing_type
    }

    fn supported_channels(&self) -> Vec<&'static str> {
        self.message().descriptor().channel_ids()
    }

    /// Encode a host command into the payload
    fn convert_from_command(
        &mut self,
        channel_id: &str,
        command: &Command,
        current_state: &State,
        config: &Configuration,
    ) -> EepResult<()> {
        self.message().require_channel(channel_id)?;

        tracing::debug!("{}: command {} on channel {}", self.eep_id(), command, channel_id);

        if channel_id == CHANNEL_TEACHINCMD && *command == Command::OnOff(OnOff::On) {
            self.teach_in_query_impl(config)
        } else {
            self.convert_from_command_impl(channel_id, command, current_state, config)
        }
    }

    /// Decode the state of one channel
    fn convert_to_state(
        &self,
        channel_id: &str,
        config: &Configuration,
        current_state: &State,
    ) -> EepResult<State> {
        self.message().require_channel(channel_id)?;

        if channel_id == CHANNEL_RECEIVINGSTATE {
            return Ok(self.message().receiving_state());
        }

        // Teach-in telegrams carry profile identity, not readings
        if self.message().is_teach_in() {
            return Ok(State::Undef);
        }

        Ok(self.convert_to_state_impl(channel_id, current_state, config))
    }

    /// Decode the event of one trigger channel, given the previous event on it
    fn convert_to_event(
        &self,
        channel_id: &str,
        last_event: Option<&str>,
        config: &Configuration,
    ) -> EepResult<Option<String>> {
        let channel = self.message().require_channel(channel_id)?;
        if channel.kind != ChannelKind::Event {
            return Err(EepError::InvalidArgument(format!(
                "Channel {} of {} does not emit events",
                channel_id,
                self.eep_id()
            )));
        }

        Ok(self.convert_to_event_impl(channel_id, last_event, config))
    }

    /// Decode every state and event channel of the profile
    fn decode(&self, config: &Configuration) -> BTreeMap<String, ChannelValue> {
        let mut values = BTreeMap::new();

        for channel in self.message().descriptor().channels {
            let value = match channel.kind {
                ChannelKind::State => self
                    .convert_to_state(channel.id, config, &State::Undef)
                    .ok()
                    .map(ChannelValue::State),
                ChannelKind::Event => self
                    .convert_to_event(channel.id, None, config)
                    .ok()
                    .flatten()
                    .map(ChannelValue::Event),
                ChannelKind::Command => None,
            };

            if let Some(value) = value {
                values.insert(channel.id.to_string(), value);
            }
        }

        values
    }

    /// Wire bytes of the telegram, ready for transport
    fn serialize(&self) -> EepResult<Vec<u8>> {
        self.message().serialize()
    }
}
