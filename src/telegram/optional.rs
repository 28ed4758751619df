// ERP1 optional data trailer
// Layout: sub telegram count (1) | destination id (4) | dBm (1) | security level (1)

use crate::core::constants::{
    OPTIONAL_DATA_DBM_OFFSET, OPTIONAL_DATA_RSSI_MIN, SECURITY_LEVEL_OFFSET, SENDER_ID_LENGTH,
    SEND_DBM, SEND_SECURITY_LEVEL, SEND_SUBTELEGRAM, STATUS_REPEATER_MASK,
};

/// Decoded optional data of a radio telegram
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionalData {
    pub sub_telegram_count: u8,
    pub destination_id: [u8; SENDER_ID_LENGTH],
    /// Signal strength as reported by the transceiver (-dBm on receive)
    pub dbm: u8,
    pub security_level: u8,
}

impl OptionalData {
    /// Optional data addressing a single destination on send
    pub fn for_destination(destination_id: [u8; SENDER_ID_LENGTH]) -> Self {
        Self {
            sub_telegram_count: SEND_SUBTELEGRAM,
            destination_id,
            dbm: SEND_DBM,
            security_level: SEND_SECURITY_LEVEL,
        }
    }

    /// Decode from raw optional bytes. The security level byte may be missing.
    pub fn from_bytes(data: &[u8]) -> Option<Self> {
        if data.len() < OPTIONAL_DATA_RSSI_MIN {
            return None;
        }

        let mut destination_id = [0u8; SENDER_ID_LENGTH];
        destination_id.copy_from_slice(&data[1..1 + SENDER_ID_LENGTH]);

        Some(Self {
            sub_telegram_count: data[0],
            destination_id,
            dbm: data[OPTIONAL_DATA_DBM_OFFSET],
            security_level: data.get(SECURITY_LEVEL_OFFSET).copied().unwrap_or(0),
        })
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(SECURITY_LEVEL_OFFSET + 1);
        bytes.push(self.sub_telegram_count);
        bytes.extend_from_slice(&self.destination_id);
        bytes.push(self.dbm);
        bytes.push(self.security_level);
        bytes
    }

    pub fn is_broadcast(&self) -> bool {
        self.destination_id == [0xFF; SENDER_ID_LENGTH]
    }
}

/// Describe reception quality: signal strength from the optional data and the
/// repeater count from the low nibble of the status byte.
/// Returns None when the optional data is too short to carry a signal byte.
pub fn receiving_state_description(optional_data: &[u8], status: u8) -> Option<String> {
    if optional_data.len() < OPTIONAL_DATA_RSSI_MIN {
        return None;
    }

    Some(format!(
        "Rssi {}, repeated {}",
        optional_data[OPTIONAL_DATA_DBM_OFFSET],
        status & STATUS_REPEATER_MASK
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_destination() {
        let optional = OptionalData::for_destination([0x01, 0x02, 0x03, 0x04]);
        assert_eq!(
            optional.to_bytes(),
            vec![0x01, 0x01, 0x02, 0x03, 0x04, 0xFF, 0x00]
        );
        assert!(!optional.is_broadcast());
    }

    #[test]
    fn test_from_bytes() {
        let raw = [0x03, 0xFF, 0xFF, 0xFF, 0xFF, 0x4A, 0x00];
        let optional = OptionalData::from_bytes(&raw).unwrap();
        assert_eq!(optional.sub_telegram_count, 3);
        assert!(optional.is_broadcast());
        assert_eq!(optional.dbm, 0x4A);
        assert_eq!(optional.to_bytes(), raw.to_vec());

        // Six bytes are enough, security level defaults to zero
        let optional = OptionalData::from_bytes(&raw[..6]).unwrap();
        assert_eq!(optional.security_level, 0);

        assert!(OptionalData::from_bytes(&raw[..5]).is_none());
    }

    #[test]
    fn test_receiving_state_description() {
        let optional = [0x01, 0xFF, 0xFF, 0xFF, 0xFF, 42, 0x00];
        assert_eq!(
            receiving_state_description(&optional, 0b0011),
            Some("Rssi 42, repeated 3".to_string())
        );

        // Only the low nibble counts as repeater count
        assert_eq!(
            receiving_state_description(&optional[..6], 0x32),
            Some("Rssi 42, repeated 2".to_string())
        );

        assert_eq!(receiving_state_description(&optional[..5], 0x03), None);
        assert_eq!(receiving_state_description(&[], 0x03), None);
    }
}
