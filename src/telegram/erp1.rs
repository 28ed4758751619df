// ERP1 radio telegram envelope
// Layout: RORG (1) | payload (data length) | sender id (4) | status (1) | optional data (0..n)

use super::optional::{receiving_state_description, OptionalData};
use super::rorg::Rorg;
use super::{Result, TelegramError};
use crate::bitwise::bytes_to_hex;
use crate::core::constants::{
    RORG_LENGTH, SENDER_ID_LENGTH, STATUS_LENGTH, STATUS_REPEATER_MASK,
};
use nom::{bytes::complete::take, IResult};
use std::fmt;

/// Fixed part of a telegram as sliced from the wire
struct Fields<'a> {
    rorg: u8,
    payload: &'a [u8],
    sender_id: &'a [u8],
    status: u8,
}

fn fields(input: &[u8], data_length: usize) -> IResult<&[u8], Fields<'_>> {
    let (input, rorg) = take(RORG_LENGTH)(input)?;
    let (input, payload) = take(data_length)(input)?;
    let (input, sender_id) = take(SENDER_ID_LENGTH)(input)?;
    let (input, status) = take(STATUS_LENGTH)(input)?;

    Ok((
        input,
        Fields {
            rorg: rorg[0],
            payload,
            sender_id,
            status: status[0],
        },
    ))
}

/// Check a sender id and copy it into its fixed-size form
pub fn sender_id_from_slice(sender_id: &[u8]) -> Result<[u8; SENDER_ID_LENGTH]> {
    sender_id
        .try_into()
        .map_err(|_| TelegramError::IllegalSenderId(sender_id.len()))
}

/// One complete radio telegram
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Erp1Telegram {
    rorg: u8,
    payload: Vec<u8>,
    sender_id: [u8; SENDER_ID_LENGTH],
    status: u8,
    optional_data: Vec<u8>,
}

impl Erp1Telegram {
    /// Build a telegram from its parts. The sender id must be exactly 4 bytes.
    pub fn new(rorg: u8, payload: Vec<u8>, sender_id: &[u8], status: u8) -> Result<Self> {
        Ok(Self {
            rorg,
            payload,
            sender_id: sender_id_from_slice(sender_id)?,
            status,
            optional_data: Vec::new(),
        })
    }

    /// Attach optional data (replaces any existing trailer)
    pub fn with_optional_data(mut self, optional_data: Vec<u8>) -> Self {
        self.optional_data = optional_data;
        self
    }

    /// Split raw bytes using a payload length that the caller resolved beforehand.
    /// Everything after the status byte is optional data.
    pub fn parse(raw: &[u8], data_length: usize) -> Result<Self> {
        let required = Self::fixed_length(data_length);
        let (rest, fields) = fields(raw, data_length).map_err(|_| TelegramError::MalformedLength {
            expected: required,
            actual: raw.len(),
        })?;

        Ok(Self {
            rorg: fields.rorg,
            payload: fields.payload.to_vec(),
            sender_id: sender_id_from_slice(fields.sender_id)?,
            status: fields.status,
            optional_data: rest.to_vec(),
        })
    }

    /// Parse a telegram whose RORG fixes the payload length (RPS, 1BS, 4BS)
    pub fn parse_fixed(raw: &[u8]) -> Result<Self> {
        let header = *raw.first().ok_or(TelegramError::MalformedLength {
            expected: Self::fixed_length(0),
            actual: 0,
        })?;

        let data_length = Rorg::from_u8(header)
            .and_then(|rorg| rorg.data_length())
            .ok_or(TelegramError::UnknownDataLength(header))?;

        Self::parse(raw, data_length)
    }

    /// Length of header, payload, sender id and status for a given payload length
    pub const fn fixed_length(data_length: usize) -> usize {
        RORG_LENGTH + data_length + SENDER_ID_LENGTH + STATUS_LENGTH
    }

    /// Concatenate header, payload, sender id, status and optional data
    pub fn serialize(&self) -> Vec<u8> {
        let mut raw = Vec::with_capacity(self.wire_length());
        raw.push(self.rorg);
        raw.extend_from_slice(&self.payload);
        raw.extend_from_slice(&self.sender_id);
        raw.push(self.status);
        raw.extend_from_slice(&self.optional_data);
        raw
    }

    /// Total serialized length
    pub fn wire_length(&self) -> usize {
        Self::fixed_length(self.payload.len()) + self.optional_data.len()
    }

    pub fn rorg(&self) -> u8 {
        self.rorg
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    pub fn sender_id(&self) -> &[u8; SENDER_ID_LENGTH] {
        &self.sender_id
    }

    pub fn status(&self) -> u8 {
        self.status
    }

    pub fn optional_data(&self) -> &[u8] {
        &self.optional_data
    }

    /// Decoded optional data, if the trailer is long enough
    pub fn optional(&self) -> Option<OptionalData> {
        OptionalData::from_bytes(&self.optional_data)
    }

    pub fn repeater_count(&self) -> u8 {
        self.status & STATUS_REPEATER_MASK
    }

    pub fn receiving_state_description(&self) -> Option<String> {
        receiving_state_description(&self.optional_data, self.status)
    }
}

impl fmt::Display for Erp1Telegram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ERP1 {:02X} data={} sender={} status={:02X}",
            self.rorg,
            bytes_to_hex(&self.payload),
            bytes_to_hex(&self.sender_id),
            self.status
        )?;
        if !self.optional_data.is_empty() {
            write!(f, " optional={}", bytes_to_hex(&self.optional_data))?;
        }
        Ok(())
    }
}
