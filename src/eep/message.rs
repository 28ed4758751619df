// Working telegram of a profile codec
// Holds one payload's worth of data plus the envelope fields around it

use super::id::EepId;
use super::registry::ProfileDescriptor;
use super::teach_in;
use super::traits::{EepError, EepResult};
use super::transform::TransformationService;
use crate::core::constants::{SENDER_ID_LENGTH, STATUS_REPEATER_MASK};
use crate::core::{ChannelSpec, State};
use crate::telegram::{
    receiving_state_description, sender_id_from_slice, Erp1Telegram, OptionalData,
};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct EepMessage {
    descriptor: Arc<ProfileDescriptor>,
    transformations: Arc<dyn TransformationService>,
    payload: Vec<u8>,
    sender_id: Option<[u8; SENDER_ID_LENGTH]>,
    status: u8,
    optional_data: Vec<u8>,
    destination_id: Option<[u8; SENDER_ID_LENGTH]>,
}

impl EepMessage {
    /// Outbound message with a zeroed payload
    pub fn new(
        descriptor: Arc<ProfileDescriptor>,
        transformations: Arc<dyn TransformationService>,
    ) -> Self {
        let payload = vec![0u8; descriptor.data_length];
        Self {
            descriptor,
            transformations,
            payload,
            sender_id: None,
            status: 0x00,
            optional_data: Vec::new(),
            destination_id: None,
        }
    }

    /// Inbound message, validated against the profile layout
    pub fn from_telegram(
        descriptor: Arc<ProfileDescriptor>,
        transformations: Arc<dyn TransformationService>,
        telegram: &Erp1Telegram,
    ) -> EepResult<Self> {
        if telegram.rorg() != descriptor.eep.rorg {
            return Err(EepError::RorgMismatch {
                expected: descriptor.eep.rorg,
                actual: telegram.rorg(),
            });
        }

        let mut message = Self::new(descriptor, transformations);
        message.set_data(telegram.payload())?;
        message.sender_id = Some(*telegram.sender_id());
        message.status = telegram.status();
        message.optional_data = telegram.optional_data().to_vec();
        message.destination_id = telegram.optional().map(|o| o.destination_id);
        Ok(message)
    }

    pub fn descriptor(&self) -> &ProfileDescriptor {
        &self.descriptor
    }

    pub fn eep_id(&self) -> EepId {
        self.descriptor.eep
    }

    pub fn transformations(&self) -> &dyn TransformationService {
        self.transformations.as_ref()
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Replace the payload; its length must match the profile
    pub fn set_data(&mut self, data: &[u8]) -> EepResult<&mut Self> {
        if data.len() != self.descriptor.data_length {
            return Err(EepError::InvalidPayloadLength {
                expected: self.descriptor.data_length,
                actual: data.len(),
            });
        }

        self.payload.clear();
        self.payload.extend_from_slice(data);
        Ok(self)
    }

    /// Data byte DB_n. DB_0 is the last payload byte.
    pub fn db(&self, index: usize) -> u8 {
        self.payload
            .len()
            .checked_sub(index + 1)
            .and_then(|i| self.payload.get(i))
            .copied()
            .unwrap_or(0)
    }

    /// Set data byte DB_n; indices outside the payload are ignored
    pub fn set_db(&mut self, index: usize, value: u8) -> &mut Self {
        if let Some(i) = self.payload.len().checked_sub(index + 1) {
            self.payload[i] = value;
        }
        self
    }

    pub fn sender_id(&self) -> Option<&[u8; SENDER_ID_LENGTH]> {
        self.sender_id.as_ref()
    }

    pub fn set_sender_id(&mut self, sender_id: &[u8]) -> EepResult<&mut Self> {
        self.sender_id = Some(sender_id_from_slice(sender_id)?);
        Ok(self)
    }

    pub fn status(&self) -> u8 {
        self.status
    }

    pub fn set_status(&mut self, status: u8) -> &mut Self {
        self.status = status;
        self
    }

    pub fn repeater_count(&self) -> u8 {
        self.status & STATUS_REPEATER_MASK
    }

    pub fn optional_data(&self) -> &[u8] {
        &self.optional_data
    }

    pub fn set_optional_data(&mut self, optional_data: &[u8]) -> &mut Self {
        self.optional_data = optional_data.to_vec();
        self
    }

    pub fn destination_id(&self) -> Option<&[u8; SENDER_ID_LENGTH]> {
        self.destination_id.as_ref()
    }

    /// Address the telegram to one device; rewrites the optional data
    pub fn set_destination_id(&mut self, destination_id: &[u8]) -> EepResult<&mut Self> {
        let destination_id: [u8; SENDER_ID_LENGTH] =
            destination_id.try_into().map_err(|_| {
                EepError::InvalidArgument(format!(
                    "Destination id must be 4 bytes, got {}",
                    destination_id.len()
                ))
            })?;

        self.destination_id = Some(destination_id);
        self.optional_data = OptionalData::for_destination(destination_id).to_bytes();
        Ok(self)
    }

    /// True for 1BS/4BS teach-in telegrams (LRN bit cleared)
    pub fn is_teach_in(&self) -> bool {
        teach_in::is_teach_in(self.descriptor.eep.rorg, &self.payload)
    }

    /// The standard reception quality channel
    pub fn receiving_state(&self) -> State {
        match receiving_state_description(&self.optional_data, self.status) {
            Some(text) => State::Text(text),
            None => State::Undef,
        }
    }

    /// Look up a channel, failing if the profile does not expose it
    pub fn require_channel(&self, channel_id: &str) -> EepResult<ChannelSpec> {
        self.descriptor
            .channel(channel_id)
            .ok_or_else(|| EepError::UnsupportedChannel {
                eep: self.descriptor.eep,
                channel: channel_id.to_string(),
            })
    }

    /// Assemble the envelope. A sender id must have been set.
    pub fn to_telegram(&self) -> EepResult<Erp1Telegram> {
        let sender_id = self.sender_id.ok_or(EepError::IllegalSenderId(0))?;

        let telegram = Erp1Telegram::new(
            self.descriptor.eep.rorg,
            self.payload.clone(),
            &sender_id,
            self.status,
        )?;

        Ok(telegram.with_optional_data(self.optional_data.clone()))
    }

    pub fn serialize(&self) -> EepResult<Vec<u8>> {
        Ok(self.to_telegram()?.serialize())
    }
}
