// Radio protocol families (RORG) and their fixed data lengths

use serde::{Deserialize, Serialize};
use std::fmt;

/// Radio organisation byte leading every ERP1 telegram
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rorg {
    /// Repeated switch communication
    Rps,
    /// 1 byte communication
    OneBs,
    /// 4 byte communication
    FourBs,
    /// Variable length data
    Vld,
}

impl Rorg {
    pub const ALL: [Rorg; 4] = [Rorg::Rps, Rorg::OneBs, Rorg::FourBs, Rorg::Vld];

    pub const fn value(&self) -> u8 {
        match self {
            Rorg::Rps => 0xF6,
            Rorg::OneBs => 0xD5,
            Rorg::FourBs => 0xA5,
            Rorg::Vld => 0xD2,
        }
    }

    pub fn from_u8(value: u8) -> Option<Self> {
        Self::ALL.iter().copied().find(|r| r.value() == value)
    }

    /// Payload length fixed by the family, None when the profile defines it (VLD)
    pub const fn data_length(&self) -> Option<usize> {
        match self {
            Rorg::Rps | Rorg::OneBs => Some(1),
            Rorg::FourBs => Some(4),
            Rorg::Vld => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Rorg::Rps => "RPS",
            Rorg::OneBs => "1BS",
            Rorg::FourBs => "4BS",
            Rorg::Vld => "VLD",
        }
    }
}

impl fmt::Display for Rorg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:02X})", self.name(), self.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rorg_values() {
        assert_eq!(Rorg::from_u8(0xA5), Some(Rorg::FourBs));
        assert_eq!(Rorg::from_u8(0xF6), Some(Rorg::Rps));
        assert_eq!(Rorg::from_u8(0x00), None);

        for rorg in Rorg::ALL {
            assert_eq!(Rorg::from_u8(rorg.value()), Some(rorg));
        }
    }

    #[test]
    fn test_data_lengths() {
        assert_eq!(Rorg::FourBs.data_length(), Some(4));
        assert_eq!(Rorg::OneBs.data_length(), Some(1));
        assert_eq!(Rorg::Vld.data_length(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Rorg::FourBs.to_string(), "4BS (A5)");
    }
}
