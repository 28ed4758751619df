// A5-04: temperature and humidity sensors
// Humidity is always sent; the temperature byte is only valid when DB_0 bit 1 is set

use crate::bitwise::{bit, linear_scale};
use crate::core::constants::*;
use crate::core::{ChannelSpec, Configuration, State, Unit};
use crate::eep::{Eep, EepId, EepMessage};

const CHANNELS: &[ChannelSpec] = &[
    ChannelSpec::state(CHANNEL_HUMIDITY),
    ChannelSpec::state(CHANNEL_TEMPERATURE),
    ChannelSpec::state(CHANNEL_RECEIVINGSTATE),
];

const THING_TYPE: &str = "temperatureHumiditySensor";

/// DB_0 bit 1: temperature sensor present
const TSN_BIT: u8 = 1;

pub struct TemperatureHumiditySensor {
    message: EepMessage,
}

impl TemperatureHumiditySensor {
    pub fn create(message: EepMessage) -> Box<dyn Eep> {
        Box::new(Self { message })
    }

    fn temperature_range(&self) -> (f64, f64) {
        match self.eep_id().type_ {
            0x02 => (-20.0, 60.0),
            _ => (0.0, 40.0),
        }
    }
}

impl Eep for TemperatureHumiditySensor {
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
            CHANNEL_HUMIDITY => {
                let raw = self.message.db(2) as u32;
                State::quantity(linear_scale(raw, 0, 250, 0.0, 100.0), Unit::Percent)
            }
            CHANNEL_TEMPERATURE if bit(self.message.db(0), TSN_BIT) => {
                let (min, max) = self.temperature_range();
                let raw = self.message.db(1) as u32;
                State::quantity(linear_scale(raw, 0, 250, min, max), Unit::Celsius)
            }
            _ => State::Undef,
        }
    }
}

crate::register_profile!(
    EepId::new(0xA5, 0x04, 0x01),
    4,
    CHANNELS,
    THING_TYPE,
    "Temperature 0..40 °C and humidity 0..100 %",
    TemperatureHumiditySensor::create
);

crate::register_profile!(
    EepId::new(0xA5, 0x04, 0x02),
    4,
    CHANNELS,
    THING_TYPE,
    "Temperature -20..60 °C and humidity 0..100 %",
    TemperatureHumiditySensor::create
);
