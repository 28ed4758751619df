// A5-06: light sensors with two switchable illumination ranges

use crate::bitwise::{bit, linear_scale};
use crate::core::constants::*;
use crate::core::{ChannelSpec, Configuration, State, Unit};
use crate::eep::{Eep, EepId, EepMessage};

const CHANNELS: &[ChannelSpec] = &[
    ChannelSpec::state(CHANNEL_ILLUMINATION),
    ChannelSpec::state(CHANNEL_SUPPLYVOLTAGE),
    ChannelSpec::state(CHANNEL_RECEIVINGSTATE),
];

const THING_TYPE: &str = "lightSensor";

/// DB_0 bit 0: 0 = ILL1 in DB_1, 1 = ILL2 in DB_2
const RANGE_SELECT_BIT: u8 = 0;

pub struct LightSensor {
    message: EepMessage,
}

impl LightSensor {
    pub fn create(message: EepMessage) -> Box<dyn Eep> {
        Box::new(Self { message })
    }

    /// (ILL1, ILL2) ranges in lux
    fn ranges(&self) -> ((f64, f64), (f64, f64)) {
        match self.eep_id().type_ {
            0x02 => ((0.0, 1020.0), (0.0, 510.0)),
            _ => ((600.0, 60000.0), (300.0, 30000.0)),
        }
    }

    fn illumination(&self) -> f64 {
        let (ill1, ill2) = self.ranges();
        let (raw, (min, max)) = if bit(self.message.db(0), RANGE_SELECT_BIT) {
            (self.message.db(2), ill2)
        } else {
            (self.message.db(1), ill1)
        };

        linear_scale(raw as u32, 0, 255, min, max)
    }
}

impl Eep for LightSensor {
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
            CHANNEL_ILLUMINATION => State::quantity(self.illumination(), Unit::Lux),
            CHANNEL_SUPPLYVOLTAGE => {
                let raw = self.message.db(3) as u32;
                State::quantity(linear_scale(raw, 0, 255, 0.0, 5.1), Unit::Volt)
            }
            _ => State::Undef,
        }
    }
}

crate::register_profile!(
    EepId::new(0xA5, 0x06, 0x01),
    4,
    CHANNELS,
    THING_TYPE,
    "Light sensor 300..60000 lx",
    LightSensor::create
);

crate::register_profile!(
    EepId::new(0xA5, 0x06, 0x02),
    4,
    CHANNELS,
    THING_TYPE,
    "Light sensor 0..1020 lx",
    LightSensor::create
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eep::FourBsTeachIn;
    use crate::profiles::testing::{assert_quantity, decode};

    fn state(eep: &str, payload: &[u8], channel: &str) -> State {
        decode(eep, payload, 0x00)
            .convert_to_state(channel, &Configuration::new(), &State::Undef)
            .unwrap()
    }

    #[test]
    fn test_range_select() {
        // ILL1 from DB_1
        assert_eq!(
            state("A5-06-01", &[0x00, 0x00, 0xFF, 0x08], CHANNEL_ILLUMINATION),
            State::quantity(60000.0, Unit::Lux)
        );
        // ILL2 from DB_2
        assert_eq!(
            state("A5-06-01", &[0x00, 0xFF, 0x00, 0x09], CHANNEL_ILLUMINATION),
            State::quantity(30000.0, Unit::Lux)
        );
        assert_eq!(
            state("A5-06-02", &[0x00, 0x00, 0xFF, 0x08], CHANNEL_ILLUMINATION),
            State::quantity(1020.0, Unit::Lux)
        );
        assert_eq!(
            state("A5-06-02", &[0x00, 0x00, 0x00, 0x08], CHANNEL_ILLUMINATION),
            State::quantity(0.0, Unit::Lux)
        );
    }

    #[test]
    fn test_supply_voltage() {
        assert_quantity(
            &state("A5-06-01", &[0xFF, 0x00, 0x00, 0x08], CHANNEL_SUPPLYVOLTAGE),
            5.1,
            Unit::Volt,
        );
        assert_eq!(
            state("A5-06-01", &[0x00, 0x00, 0x00, 0x08], CHANNEL_SUPPLYVOLTAGE),
            State::quantity(0.0, Unit::Volt)
        );
    }

    #[test]
    fn test_teach_in_is_not_a_reading() {
        let payload = FourBsTeachIn::new(0x06, 0x01, 0x00D).to_payload();
        let codec = decode("A5-06-01", &payload, 0x00);
        assert!(codec.message().is_teach_in());

        for channel in [CHANNEL_ILLUMINATION, CHANNEL_SUPPLYVOLTAGE] {
            assert_eq!(
                codec.convert_to_state(channel, &Configuration::new(), &State::Undef).unwrap(),
                State::Undef,
                "{} reported a reading",
                channel
            );
        }
    }
}
