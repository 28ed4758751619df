// A5-3F-7F: universal 4BS profile
// Command text is mapped to raw payload bytes by a host-configured transformation

use crate::bitwise::hex_to_bytes;
use crate::core::constants::*;
use crate::core::{ChannelSpec, ChannelTransformationConfig, Command, Configuration, State};
use crate::eep::{Eep, EepError, EepId, EepMessage, EepResult};

const CHANNELS: &[ChannelSpec] = &[
    ChannelSpec::command(CHANNEL_UNIVERSAL_COMMAND),
    ChannelSpec::command(CHANNEL_TEACHINCMD),
    ChannelSpec::state(CHANNEL_RECEIVINGSTATE),
];

const THING_TYPE: &str = "universalActuator";

pub struct UniversalProfile {
    message: EepMessage,
}

impl UniversalProfile {
    pub fn create(message: EepMessage) -> Box<dyn Eep> {
        Box::new(Self { message })
    }

    /// Run the configured transformation and decode its hex output
    fn transform(&self, command: &Command, config: &Configuration) -> EepResult<Option<Vec<u8>>> {
        let transformation: ChannelTransformationConfig = config
            .as_typed()
            .map_err(|e| EepError::InvalidArgument(format!("Transformation config: {}", e)))?;

        let input = command.to_string();
        let output = self.message.transformations().transform(
            &transformation.transformation_type,
            &transformation.transformation_function,
            &input,
        )?;

        if output == input {
            return Ok(None);
        }

        match hex_to_bytes(&output) {
            Some(data) => Ok(Some(data)),
            None => Err(EepError::InvalidArgument(format!(
                "Transformation result {:?} is not hex",
                output
            ))),
        }
    }
}

impl Eep for UniversalProfile {
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
        if channel_id != CHANNEL_UNIVERSAL_COMMAND || *command == Command::Refresh {
            return Ok(());
        }

        // A command that cannot be transformed leaves the payload as it was
        match self.transform(command, config) {
            Ok(Some(data)) => {
                if let Err(e) = self.message.set_data(&data) {
                    tracing::debug!("Command {} could not be transformed: {}", command, e);
                }
            }
            Ok(None) => {
                tracing::debug!("Command {} left unchanged by transformation", command);
            }
            Err(e) => {
                tracing::debug!("Command {} could not be transformed: {}", command, e);
            }
        }

        Ok(())
    }
}

crate::register_profile!(
    EepId::new(0xA5, 0x3F, 0x7F),
    4,
    CHANNELS,
    THING_TYPE,
    "Universal 4BS actuator driven by command transformations",
    UniversalProfile::create
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::OnOff;
    use crate::eep::transform::{TransformError, TransformationService};
    use crate::eep::ProfileRegistry;
    use crate::profiles::testing::create;
    use std::sync::Arc;

    fn send(command: Command, config: &Configuration) -> Vec<u8> {
        let mut codec = create("A5-3F-7F");
        codec.message_mut().set_data(&[0x00, 0x00, 0x00, 0x08]).unwrap();
        codec
            .convert_from_command(CHANNEL_UNIVERSAL_COMMAND, &command, &State::Undef, config)
            .unwrap();
        codec.message().payload().to_vec()
    }

    #[test]
    fn test_map_transformation() {
        let config = Configuration::new()
            .with("transformationType", "MAP")
            .with("transformationFunction", "ON=01000009;OFF=01000008");

        assert_eq!(send(Command::OnOff(OnOff::On), &config), vec![0x01, 0x00, 0x00, 0x09]);
        assert_eq!(send(Command::OnOff(OnOff::Off), &config), vec![0x01, 0x00, 0x00, 0x08]);
    }

    #[test]
    fn test_regex_transformation() {
        let config = Configuration::new()
            .with("transformationType", "REGEX")
            .with("transformationFunction", r"s/^(\d+)$/02\1000D/");

        // 42 -> "0242000D"
        assert_eq!(send(Command::Percent(42.0), &config), vec![0x02, 0x42, 0x00, 0x0D]);
    }

    #[test]
    fn test_failures_leave_payload() {
        let untouched = vec![0x00, 0x00, 0x00, 0x08];

        // no transformation configured
        assert_eq!(send(Command::OnOff(OnOff::On), &Configuration::new()), untouched);

        // key missing from the map
        let map = Configuration::new()
            .with("transformationType", "MAP")
            .with("transformationFunction", "ON=01000009");
        assert_eq!(send(Command::OnOff(OnOff::Off), &map), untouched);

        // wrong length
        let short = Configuration::new()
            .with("transformationType", "MAP")
            .with("transformationFunction", "ON=0100");
        assert_eq!(send(Command::OnOff(OnOff::On), &short), untouched);

        // not hex
        let text = Configuration::new()
            .with("transformationType", "MAP")
            .with("transformationFunction", "ON=bright");
        assert_eq!(send(Command::OnOff(OnOff::On), &text), untouched);

        // unchanged
        let identity = Configuration::new()
            .with("transformationType", "REGEX")
            .with("transformationFunction", "s/x/y/");
        assert_eq!(send(Command::Text("A5A5A5A5".to_string()), &identity), untouched);
    }

    #[derive(Debug)]
    struct Fixed;

    impl TransformationService for Fixed {
        fn transform(
            &self,
            _kind: &str,
            _function: &str,
            _input: &str,
        ) -> Result<String, TransformError> {
            Ok("AABBCCDD".to_string())
        }
    }

    #[test]
    fn test_host_transformation_service() {
        let registry = ProfileRegistry::builtin().unwrap().with_transformations(Arc::new(Fixed));
        let mut codec = registry.create(&EepId::new(0xA5, 0x3F, 0x7F)).unwrap();

        let config = Configuration::new()
            .with("transformationType", "SCRIPT")
            .with("transformationFunction", "anything");
        codec
            .convert_from_command(
                CHANNEL_UNIVERSAL_COMMAND,
                &Command::OnOff(OnOff::On),
                &State::Undef,
                &config,
            )
            .unwrap();

        assert_eq!(codec.message().payload(), &[0xAA, 0xBB, 0xCC, 0xDD]);
    }
}
