// F6-02-01: light and blind control, two rockers (application style 1)
// Pressed telegrams carry T21 and NU; the release telegram only carries T21

use crate::bitwise::{bit, bits};
use crate::core::constants::*;
use crate::core::{ChannelSpec, Configuration};
use crate::eep::{Eep, EepId, EepMessage};

const CHANNELS: &[ChannelSpec] = &[
    ChannelSpec::event(CHANNEL_ROCKERSWITCH_CHANNELA),
    ChannelSpec::event(CHANNEL_ROCKERSWITCH_CHANNELB),
    ChannelSpec::state(CHANNEL_RECEIVINGSTATE),
];

const THING_TYPE: &str = "rockerSwitch";

// Rocker action codes
const AI: u8 = 0;
const A0: u8 = 1;
const BI: u8 = 2;
const B0: u8 = 3;

/// Energy bow pressed
const PRESSED: u8 = 0x10;

/// Second action valid
const SA_BIT: u8 = 0;

pub struct RockerSwitch {
    message: EepMessage,
}

impl RockerSwitch {
    pub fn create(message: EepMessage) -> Box<dyn Eep> {
        Box::new(Self { message })
    }

    /// Action codes for DIR1 and DIR2 of a rocker channel
    fn directions(channel_id: &str) -> Option<(u8, u8)> {
        match channel_id {
            CHANNEL_ROCKERSWITCH_CHANNELA => Some((AI, A0)),
            CHANNEL_ROCKERSWITCH_CHANNELB => Some((BI, B0)),
            _ => None,
        }
    }

    fn pressed_event(&self, channel_id: &str) -> Option<String> {
        let (dir1, dir2) = Self::directions(channel_id)?;
        let data = self.message.db(0);
        let pressed = data & PRESSED != 0;

        let first = bits(data, 5, 3);
        let second = bit(data, SA_BIT).then(|| bits(data, 1, 3));

        let token = if first == dir1 || second == Some(dir1) {
            if pressed {
                DIR1_PRESSED
            } else {
                DIR1_RELEASED
            }
        } else if first == dir2 || second == Some(dir2) {
            if pressed {
                DIR2_PRESSED
            } else {
                DIR2_RELEASED
            }
        } else {
            return None;
        };

        Some(token.to_string())
    }

    fn released_event(last_event: Option<&str>) -> Option<String> {
        match last_event {
            Some(DIR1_PRESSED) => Some(DIR1_RELEASED.to_string()),
            Some(DIR2_PRESSED) => Some(DIR2_RELEASED.to_string()),
            _ => None,
        }
    }
}

impl Eep for RockerSwitch {
    fn message(&self) -> &EepMessage {
        &self.message
    }

    fn message_mut(&mut self) -> &mut EepMessage {
        &mut self.message
    }

    fn convert_to_event_impl(
        &self,
        channel_id: &str,
        last_event: Option<&str>,
        _config: &Configuration,
    ) -> Option<String> {
        let status = self.message.status();
        let t21 = status & STATUS_T21 != 0;
        let nu = status & STATUS_NU != 0;

        match (t21, nu) {
            (true, true) => self.pressed_event(channel_id),
            (true, false) => Self::released_event(last_event),
            _ => None,
        }
    }
}

crate::register_profile!(
    EepId::new(0xF6, 0x02, 0x01),
    1,
    CHANNELS,
    THING_TYPE,
    "Two-rocker light and blind switch",
    RockerSwitch::create
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::State;
    use crate::eep::EepError;
    use crate::profiles::testing::decode;

    fn event(data: u8, status: u8, channel: &str, last: Option<&str>) -> Option<String> {
        decode("F6-02-01", &[data], status)
            .convert_to_event(channel, last, &Configuration::new())
            .unwrap()
    }

    #[test]
    fn test_first_action() {
        let a = CHANNEL_ROCKERSWITCH_CHANNELA;
        let b = CHANNEL_ROCKERSWITCH_CHANNELB;

        assert_eq!(event(0x10, 0x30, a, None).as_deref(), Some(DIR1_PRESSED));
        assert_eq!(event(0x30, 0x30, a, None).as_deref(), Some(DIR2_PRESSED));
        assert_eq!(event(0x50, 0x30, b, None).as_deref(), Some(DIR1_PRESSED));
        assert_eq!(event(0x70, 0x30, b, None).as_deref(), Some(DIR2_PRESSED));
        assert_eq!(event(0x50, 0x30, a, None), None);
    }

    #[test]
    fn test_second_action() {
        let b = CHANNEL_ROCKERSWITCH_CHANNELB;

        // AI and BI together
        assert_eq!(event(0x15, 0x30, b, None).as_deref(), Some(DIR1_PRESSED));
        assert_eq!(
            event(0x15, 0x30, CHANNEL_ROCKERSWITCH_CHANNELA, None).as_deref(),
            Some(DIR1_PRESSED)
        );
        // second action not flagged valid
        assert_eq!(event(0x14, 0x30, b, None), None);
    }

    #[test]
    fn test_release() {
        let a = CHANNEL_ROCKERSWITCH_CHANNELA;

        assert_eq!(event(0x00, 0x20, a, Some(DIR1_PRESSED)).as_deref(), Some(DIR1_RELEASED));
        assert_eq!(event(0x00, 0x20, a, Some(DIR2_PRESSED)).as_deref(), Some(DIR2_RELEASED));
        assert_eq!(event(0x00, 0x20, a, Some(DIR1_RELEASED)), None);
        assert_eq!(event(0x00, 0x20, a, None), None);
        // neither T21 nor NU
        assert_eq!(event(0x10, 0x00, a, Some(DIR1_PRESSED)), None);
    }

    #[test]
    fn test_events_are_not_states() {
        let codec = decode("F6-02-01", &[0x10], 0x30);
        let config = Configuration::new();

        assert!(matches!(
            codec.convert_to_event(CHANNEL_RECEIVINGSTATE, None, &config),
            Err(EepError::InvalidArgument(_))
        ));
        assert_eq!(
            codec
                .convert_to_state(CHANNEL_ROCKERSWITCH_CHANNELA, &config, &State::Undef)
                .unwrap(),
            State::Undef
        );
    }

    #[test]
    fn test_receiving_state() {
        let eep: EepId = "F6-02-01".parse().unwrap();
        let registry = crate::eep::ProfileRegistry::builtin().unwrap();
        let raw = [
            0xF6, 0x10, 0x01, 0x82, 0x5D, 0xAB, 0x33, 0x01, 0xFF, 0xFF, 0xFF, 0xFF, 42, 0x00,
        ];
        let codec = registry.decode(&raw, &eep).unwrap();

        assert_eq!(
            codec
                .convert_to_state(CHANNEL_RECEIVINGSTATE, &Configuration::new(), &State::Undef)
                .unwrap(),
            State::Text("Rssi 42, repeated 3".to_string())
        );
        assert_eq!(
            codec.decode(&Configuration::new())[CHANNEL_ROCKERSWITCH_CHANNELA],
            crate::core::ChannelValue::Event(DIR1_PRESSED.to_string())
        );
    }
}
