// D5-00-01: single input contact (window/door)

use crate::bitwise::bit;
use crate::core::constants::*;
use crate::core::{ChannelSpec, Configuration, OpenClosed, State};
use crate::eep::{Eep, EepId, EepMessage};

const CHANNELS: &[ChannelSpec] = &[
    ChannelSpec::state(CHANNEL_CONTACT),
    ChannelSpec::state(CHANNEL_RECEIVINGSTATE),
];

const THING_TYPE: &str = "contact";

/// DB_0 bit 0: 1 = closed
const CONTACT_BIT: u8 = 0;

pub struct ContactSensor {
    message: EepMessage,
}

impl ContactSensor {
    pub fn create(message: EepMessage) -> Box<dyn Eep> {
        Box::new(Self { message })
    }
}

impl Eep for ContactSensor {
    fn message(&self) -> &EepMessage {
        &self.message
    }

    fn message_mut(&mut self) -> &mut EepMessage {
        &mut self.message
    }

    fn convert_to_state_impl(
        &self,
        channel_id: &str,
        _current_state: &State,
        _config: &Configuration,
    ) -> State {
        if channel_id != CHANNEL_CONTACT {
            return State::Undef;
        }

        if bit(self.message.db(0), CONTACT_BIT) {
            State::OpenClosed(OpenClosed::Closed)
        } else {
            State::OpenClosed(OpenClosed::Open)
        }
    }
}

crate::register_profile!(
    EepId::new(0xD5, 0x00, 0x01),
    1,
    CHANNELS,
    THING_TYPE,
    "Single input contact",
    ContactSensor::create
);
