// A5-07: occupancy sensors
// Reference: EEP 2.6 A5-07-01..03

use crate::bitwise::{bit, linear_scale, read_be};
use crate::core::constants::*;
use crate::core::{ChannelSpec, Configuration, OnOff, State, Unit};
use crate::eep::{Eep, EepId, EepMessage};

const CHANNELS: &[ChannelSpec] = &[
    ChannelSpec::state(CHANNEL_MOTIONDETECTION),
    ChannelSpec::state(CHANNEL_ILLUMINATION),
    ChannelSpec::state(CHANNEL_SUPPLYVOLTAGE),
    ChannelSpec::state(CHANNEL_RECEIVINGSTATE),
];

const THING_TYPE: &str = "occupancySensor";

/// A5-07-01 PIR status: 0..127 uncertain, 128..255 motion detected
const PIR_OFF: u8 = 0x7F;

/// A5-07-01 DB_0 bit 0: supply voltage is available
const SVA_BIT: u8 = 0;

/// A5-07-02/03 DB_0 bit 7: motion detected
const PIR_BIT: u8 = 7;

/// A5-07-03 illumination upper bound; larger readings are over range
const ILLUMINATION_MAX: u32 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Variant {
    /// PIR level in DB_1, optional voltage
    Level,
    /// PIR flag in DB_0, voltage always present
    Flag,
    /// As `Flag`, plus 10-bit illumination
    FlagWithIllumination,
}

pub struct OccupancySensor {
    message: EepMessage,
    variant: Variant,
}

impl OccupancySensor {
    pub fn create(message: EepMessage) -> Box<dyn Eep> {
        let variant = match message.eep_id().type_ {
            0x02 => Variant::Flag,
            0x03 => Variant::FlagWithIllumination,
            _ => Variant::Level,
        };
        Box::new(Self { message, variant })
    }

    fn motion(&self) -> State {
        let detected = match self.variant {
            Variant::Level => self.message.db(1) > PIR_OFF,
            Variant::Flag | Variant::FlagWithIllumination => bit(self.message.db(0), PIR_BIT),
        };
        State::OnOff(OnOff::from(detected))
    }

    fn supply_voltage(&self) -> State {
        if self.variant == Variant::Level && !bit(self.message.db(0), SVA_BIT) {
            return State::Undef;
        }

        let raw = self.message.db(3) as u32;
        State::quantity(linear_scale(raw, 0, 250, 0.0, 5.0), Unit::Volt)
    }

    fn illumination(&self) -> State {
        if self.variant != Variant::FlagWithIllumination {
            return State::Undef;
        }

        // DB_2 and the top two bits of DB_1
        match read_be(self.message.payload(), 1, 2) {
            Ok(word) => {
                let lux = word >> 6;
                if lux > ILLUMINATION_MAX {
                    State::Undef
                } else {
                    State::quantity(lux as f64, Unit::Lux)
                }
            }
            Err(e) => {
                tracing::debug!("{}: illumination unreadable: {}", self.eep_id(), e);
                State::Undef
            }
        }
    }
}

impl Eep for OccupancySensor {
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
            CHANNEL_MOTIONDETECTION => self.motion(),
            CHANNEL_ILLUMINATION => self.illumination(),
            CHANNEL_SUPPLYVOLTAGE => self.supply_voltage(),
            _ => State::Undef,
        }
    }
}

crate::register_profile!(
    EepId::new(0xA5, 0x07, 0x01),
    4,
    CHANNELS,
    THING_TYPE,
    "Occupancy sensor with supply voltage monitor",
    OccupancySensor::create
);

crate::register_profile!(
    EepId::new(0xA5, 0x07, 0x02),
    4,
    CHANNELS,
    THING_TYPE,
    "Occupancy sensor with supply voltage",
    OccupancySensor::create
);

crate::register_profile!(
    EepId::new(0xA5, 0x07, 0x03),
    4,
    CHANNELS,
    THING_TYPE,
    "Occupancy sensor with supply voltage and illumination",
    OccupancySensor::create
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ChannelValue, Command};
    use crate::eep::{EepError, FourBsTeachIn};
    use crate::profiles::testing::decode;

    fn state(eep: &str, payload: &[u8], channel: &str) -> State {
        decode(eep, payload, 0x00)
            .convert_to_state(channel, &Configuration::new(), &State::Undef)
            .unwrap()
    }

    #[test]
    fn test_motion_level() {
        assert_eq!(
            state("A5-07-01", &[0x00, 0x00, 0x50, 0x08], CHANNEL_MOTIONDETECTION),
            State::OnOff(OnOff::Off)
        );
        assert_eq!(
            state("A5-07-01", &[0x00, 0x00, 0xA0, 0x08], CHANNEL_MOTIONDETECTION),
            State::OnOff(OnOff::On)
        );
        // boundary
        assert_eq!(
            state("A5-07-01", &[0x00, 0x00, 0x7F, 0x08], CHANNEL_MOTIONDETECTION),
            State::OnOff(OnOff::Off)
        );
        assert_eq!(
            state("A5-07-01", &[0x00, 0x00, 0x80, 0x08], CHANNEL_MOTIONDETECTION),
            State::OnOff(OnOff::On)
        );
    }

    #[test]
    fn test_voltage_availability() {
        assert_eq!(
            state("A5-07-01", &[125, 0x00, 0xA0, 0x08], CHANNEL_SUPPLYVOLTAGE),
            State::Undef
        );
        assert_eq!(
            state("A5-07-01", &[125, 0x00, 0xA0, 0x09], CHANNEL_SUPPLYVOLTAGE),
            State::quantity(2.5, Unit::Volt)
        );
        assert_eq!(
            state("A5-07-01", &[125, 0x00, 0xA0, 0x09], CHANNEL_ILLUMINATION),
            State::Undef
        );
    }

    #[test]
    fn test_flag_variant() {
        assert_eq!(
            state("A5-07-02", &[250, 0x00, 0x00, 0x88], CHANNEL_MOTIONDETECTION),
            State::OnOff(OnOff::On)
        );
        assert_eq!(
            state("A5-07-02", &[250, 0x00, 0xFF, 0x08], CHANNEL_MOTIONDETECTION),
            State::OnOff(OnOff::Off)
        );
        assert_eq!(
            state("A5-07-02", &[250, 0x00, 0x00, 0x08], CHANNEL_SUPPLYVOLTAGE),
            State::quantity(5.0, Unit::Volt)
        );
    }

    #[test]
    fn test_illumination() {
        // 500 lx = 0b01_1111_0100: DB_2 = 0x7D, DB_1 = 0x00
        assert_eq!(
            state("A5-07-03", &[0x00, 0x7D, 0x00, 0x08], CHANNEL_ILLUMINATION),
            State::quantity(500.0, Unit::Lux)
        );
        // 1001 lx = 0b11_1110_1001: DB_2 = 0xFA, DB_1 = 0x40
        assert_eq!(
            state("A5-07-03", &[0x00, 0xFA, 0x40, 0x08], CHANNEL_ILLUMINATION),
            State::Undef
        );
        // 1000 lx: DB_2 = 0xFA, DB_1 = 0x00
        assert_eq!(
            state("A5-07-03", &[0x00, 0xFA, 0x00, 0x08], CHANNEL_ILLUMINATION),
            State::quantity(1000.0, Unit::Lux)
        );
    }

    #[test]
    fn test_unsupported_channel() {
        let config = Configuration::new();
        let mut codec = decode("A5-07-01", &[0x00, 0x00, 0xA0, 0x08], 0x00);

        assert!(matches!(
            codec.convert_to_state(CHANNEL_DIMMER, &config, &State::Undef),
            Err(EepError::UnsupportedChannel { .. })
        ));
        assert!(matches!(
            codec.convert_from_command(
                CHANNEL_DIMMER,
                &Command::Percent(50.0),
                &State::Undef,
                &config
            ),
            Err(EepError::UnsupportedChannel { .. })
        ));
    }

    #[test]
    fn test_decode_all() {
        let codec = decode("A5-07-01", &[125, 0x00, 0xA0, 0x09], 0x00);
        let values = codec.decode(&Configuration::new());
        assert_eq!(
            values[CHANNEL_MOTIONDETECTION],
            ChannelValue::State(State::OnOff(OnOff::On))
        );
        assert_eq!(
            values[CHANNEL_SUPPLYVOLTAGE],
            ChannelValue::State(State::quantity(2.5, Unit::Volt))
        );
        assert_eq!(values[CHANNEL_ILLUMINATION], ChannelValue::State(State::Undef));
    }

    #[test]
    fn test_teach_in_is_not_a_reading() {
        let payload = FourBsTeachIn::new(0x07, 0x01, 0x00D).to_payload();
        let codec = decode("A5-07-01", &payload, 0x00);
        assert!(codec.message().is_teach_in());

        for channel in [CHANNEL_MOTIONDETECTION, CHANNEL_ILLUMINATION, CHANNEL_SUPPLYVOLTAGE] {
            assert_eq!(
                codec.convert_to_state(channel, &Configuration::new(), &State::Undef).unwrap(),
                State::Undef,
                "{} reported a reading",
                channel
            );
        }
    }
}
