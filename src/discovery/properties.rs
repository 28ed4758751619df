// Discovery properties for newly seen devices
// The host uses these to register a device with the right profile and channels

use crate::bitwise::bytes_to_hex;
use crate::eep::{Eep, EepId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Properties describing a device found from one of its telegrams
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscoveryProperties {
    /// Profile the device sends with
    #[serde(rename = "receivingEEPId")]
    pub receiving_eep_id: EepId,

    /// Sender id as upper-case hex
    #[serde(default)]
    pub sender_id: String,

    #[serde(default)]
    pub thing_type: String,

    #[serde(default)]
    pub description: String,

    /// Supported channel ids
    #[serde(default)]
    pub channels: Vec<String>,

    /// Crate version that produced the properties
    #[serde(default)]
    pub version: String,

    /// Additional properties
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl DiscoveryProperties {
    /// Describe the device behind a decoded telegram
    pub fn from_eep(eep: &dyn Eep) -> Self {
        let message = eep.message();
        let descriptor = message.descriptor();

        Self {
            receiving_eep_id: eep.eep_id(),
            sender_id: message.sender_id().map(|id| bytes_to_hex(id)).unwrap_or_default(),
            thing_type: descriptor.thing_type.to_string(),
            description: descriptor.description.to_string(),
            channels: eep.supported_channels().into_iter().map(String::from).collect(),
            version: crate::VERSION.to_string(),
            extra: HashMap::new(),
        }
    }

    /// Set an extra property
    pub fn set_extra(&mut self, key: impl Into<String>, value: serde_json::Value) {
        self.extra.insert(key.into(), value);
    }

    /// Get an extra property
    pub fn get_extra(&self, key: &str) -> Option<&serde_json::Value> {
        self.extra.get(key)
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serialize to indented JSON
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::*;
    use crate::profiles::testing::decode;

    #[test]
    fn test_from_decoded_telegram() {
        let codec = decode("A5-07-01", &[0x00, 0x00, 0xA0, 0x08], 0x00);
        let props = DiscoveryProperties::from_eep(codec.as_ref());

        assert_eq!(props.receiving_eep_id, EepId::new(0xA5, 0x07, 0x01));
        assert_eq!(props.sender_id, "01825DAB");
        assert_eq!(props.thing_type, "occupancySensor");
        assert!(props.channels.iter().any(|c| c == CHANNEL_MOTIONDETECTION));
        assert!(!props.version.is_empty());
    }

    #[test]
    fn test_json_keys() {
        let codec = decode("D5-00-01", &[0x09], 0x00);
        let props = DiscoveryProperties::from_eep(codec.as_ref());

        let value: serde_json::Value = serde_json::from_str(&props.to_json().unwrap()).unwrap();
        assert_eq!(value[PARAMETER_SENDERID], "01825DAB");
        assert_eq!(value[PARAMETER_RECEIVINGEEPID]["rorg"], 0xD5);
        assert_eq!(value["thingType"], "contact");
    }

    #[test]
    fn test_extra_round_trip() {
        let codec = decode("F6-02-01", &[0x10], 0x30);
        let mut props = DiscoveryProperties::from_eep(codec.as_ref());
        props.set_extra("manufacturerId", serde_json::json!(13));

        let again = DiscoveryProperties::from_json(&props.to_json().unwrap()).unwrap();
        assert_eq!(again.receiving_eep_id, props.receiving_eep_id);
        assert_eq!(again.channels, props.channels);
        assert_eq!(again.get_extra("manufacturerId"), Some(&serde_json::json!(13)));
    }
}
