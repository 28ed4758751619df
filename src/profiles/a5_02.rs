// A5-02: temperature sensors with an 8-bit inverted reading
// Types 01..0B span 40 K, types 10..1B span 80 K

use crate::bitwise::linear_scale;
use crate::core::constants::*;
use crate::core::{ChannelSpec, Configuration, State, Unit};
use crate::eep::{Eep, EepId, EepMessage};

const CHANNELS: &[ChannelSpec] = &[
    ChannelSpec::state(CHANNEL_TEMPERATURE),
    ChannelSpec::state(CHANNEL_RECEIVINGSTATE),
];

const THING_TYPE: &str = "temperatureSensor";

pub struct TemperatureSensor {
    message: EepMessage,
}

impl TemperatureSensor {
    pub fn create(message: EepMessage) -> Box<dyn Eep> {
        Box::new(Self { message })
    }

    /// Measurement range in °C for a profile type
    pub fn range(type_: u8) -> (f64, f64) {
        match type_ {
            0x10..=0x1B => {
                let min = -60.0 + (type_ - 0x10) as f64 * 10.0;
                (min, min + 80.0)
            }
            _ => {
                let min = -40.0 + type_.saturating_sub(1) as f64 * 10.0;
                (min, min + 40.0)
            }
        }
    }
}

impl Eep for TemperatureSensor {
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
        match channel_id {
            CHANNEL_TEMPERATURE => {
                let (min, max) = Self::range(self.eep_id().type_);
                let raw = self.message.db(1) as u32;
                State::quantity(linear_scale(raw, 255, 0, min, max), Unit::Celsius)
            }
            _ => State::Undef,
        }
    }
}

macro_rules! temperature_profiles {
    ($($type_:expr => $description:expr),* $(,)?) => {
        $(
            crate::register_profile!(
                EepId::new(0xA5, 0x02, $type_),
                4,
                CHANNELS,
                THING_TYPE,
                $description,
                TemperatureSensor::create
            );
        )*
    };
}

temperature_profiles! {
    0x01 => "Temperature sensor -40..0 °C",
    0x02 => "Temperature sensor -30..10 °C",
    0x03 => "Temperature sensor -20..20 °C",
    0x04 => "Temperature sensor -10..30 °C",
    0x05 => "Temperature sensor 0..40 °C",
    0x06 => "Temperature sensor 10..50 °C",
    0x07 => "Temperature sensor 20..60 °C",
    0x08 => "Temperature sensor 30..70 °C",
    0x09 => "Temperature sensor 40..80 °C",
    0x0A => "Temperature sensor 50..90 °C",
    0x0B => "Temperature sensor 60..100 °C",
    0x10 => "Temperature sensor -60..20 °C",
    0x11 => "Temperature sensor -50..30 °C",
    0x12 => "Temperature sensor -40..40 °C",
    0x13 => "Temperature sensor -30..50 °C",
    0x14 => "Temperature sensor -20..60 °C",
    0x15 => "Temperature sensor -10..70 °C",
    0x16 => "Temperature sensor 0..80 °C",
    0x17 => "Temperature sensor 10..90 °C",
    0x18 => "Temperature sensor 20..100 °C",
    0x19 => "Temperature sensor 30..110 °C",
    0x1A => "Temperature sensor 40..120 °C",
    0x1B => "Temperature sensor 50..130 °C",
}
