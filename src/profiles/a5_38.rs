// A5-38-08: central command gateway (outbound)
// Supports switching (CMD 0x01), dimming (CMD 0x02) and the 4BS teach-in query

use crate::bitwise::set_bit;
use crate::core::constants::*;
use crate::core::{ChannelSpec, Command, Configuration, OnOff, State};
use crate::eep::teach_in::FourBsTeachIn;
use crate::eep::{Eep, EepError, EepId, EepMessage, EepResult};
use serde::{Deserialize, Serialize};

const CHANNELS: &[ChannelSpec] = &[
    ChannelSpec::command(CHANNEL_GENERAL_SWITCHING),
    ChannelSpec::command(CHANNEL_DIMMER),
    ChannelSpec::command(CHANNEL_TEACHINCMD),
    ChannelSpec::state(CHANNEL_RECEIVINGSTATE),
];

const THING_TYPE: &str = "centralCommand";

const CMD_SWITCHING: u8 = 0x01;
const CMD_DIMMING: u8 = 0x02;

// DB_0 flags
const LRN_BIT: u8 = 3;
const RELATIVE_BIT: u8 = 2;
const STORE_BIT: u8 = 1;
const ON_BIT: u8 = 0;

/// Device configuration for central command actuators
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CentralCommandConfig {
    /// Dimming ramp in seconds (0 = immediate)
    pub ramping_time: u8,
    pub manufacturer_id: u16,
    /// Ask the actuator to remember the dim value
    pub store_value: bool,
}

impl Default for CentralCommandConfig {
    fn default() -> Self {
        Self {
            ramping_time: 0,
            manufacturer_id: MANUFACTURER_MULTI_USER,
            store_value: false,
        }
    }
}

impl CentralCommandConfig {
    /// Typed view of a configuration, falling back to defaults
    pub fn from_configuration(config: &Configuration) -> Self {
        config.as_typed().unwrap_or_else(|e| {
            tracing::debug!("Ignoring invalid central command configuration: {}", e);
            Self::default()
        })
    }
}

pub struct CentralCommand {
    message: EepMessage,
}

impl CentralCommand {
    pub fn create(message: EepMessage) -> Box<dyn Eep> {
        Box::new(Self { message })
    }

    fn switching(&mut self, on: OnOff) -> EepResult<()> {
        let db0 = set_bit(set_bit(0, LRN_BIT, true), ON_BIT, on == OnOff::On);
        self.message
            .set_data(&[0u8; 4])?
            .set_db(3, CMD_SWITCHING)
            .set_db(0, db0);
        Ok(())
    }

    fn dimming(&mut self, percent: f64, config: &CentralCommandConfig) -> EepResult<()> {
        let value = if percent.is_nan() {
            0
        } else {
            percent.clamp(0.0, 100.0).round() as u8
        };

        let mut db0 = set_bit(0, LRN_BIT, true);
        db0 = set_bit(db0, RELATIVE_BIT, true);
        db0 = set_bit(db0, STORE_BIT, config.store_value);
        db0 = set_bit(db0, ON_BIT, value > 0);

        self.message
            .set_data(&[0u8; 4])?
            .set_db(3, CMD_DIMMING)
            .set_db(2, value)
            .set_db(1, config.ramping_time)
            .set_db(0, db0);
        Ok(())
    }
}

impl Eep for CentralCommand {
    fn message(&self) -> &EepMessage {
        &self.message
    }

    fn message_mut(&mut self) -> &mut EepMessage {
        &mut self.message
    }

    fn convert_from_command_impl(
        &mut self,
        channel_id: &str,
        command: &Command,
        _current_state: &State,
        config: &Configuration,
    ) -> EepResult<()> {
        match (channel_id, command) {
            (_, Command::Refresh) => Ok(()),
            (CHANNEL_GENERAL_SWITCHING, Command::OnOff(on)) => self.switching(*on),
            (CHANNEL_DIMMER, Command::Percent(percent)) => {
                self.dimming(*percent, &CentralCommandConfig::from_configuration(config))
            }
            (CHANNEL_DIMMER, Command::OnOff(on)) => {
                let percent = if *on == OnOff::On { 100.0 } else { 0.0 };
                self.dimming(percent, &CentralCommandConfig::from_configuration(config))
            }
            // teachInCMD OFF
            (CHANNEL_TEACHINCMD, Command::OnOff(_)) => Ok(()),
            _ => Err(EepError::InvalidArgument(format!(
                "Command {} not applicable to channel {} of {}",
                command,
                channel_id,
                self.eep_id()
            ))),
        }
    }

    fn teach_in_query_impl(&mut self, config: &Configuration) -> EepResult<()> {
        let config = CentralCommandConfig::from_configuration(config);
        let eep = self.eep_id();
        let teach_in = FourBsTeachIn::new(eep.func, eep.type_, config.manufacturer_id);

        self.message.set_data(&teach_in.to_payload())?;
        Ok(())
    }
}

crate::register_profile!(
    EepId::new(0xA5, 0x38, 0x08),
    4,
    CHANNELS,
    THING_TYPE,
    "Central command gateway: switching and dimming",
    CentralCommand::create
);
