// 4BS and 1BS teach-in telegrams
// LRN bit is DB_0 bit 3 (0 = teach-in); 4BS variant 3 carries FUNC, TYPE and manufacturer

use super::id::EepId;
use crate::bitwise::{bit, set_bit};
use crate::telegram::Rorg;

const LRN_BIT: u8 = 3;
const LRN_TYPE_BIT: u8 = 7;

/// True when a 1BS or 4BS payload has its LRN bit cleared
pub fn is_teach_in(rorg: u8, payload: &[u8]) -> bool {
    match Rorg::from_u8(rorg) {
        Some(Rorg::FourBs) | Some(Rorg::OneBs) => {
            payload.last().map(|&db0| !bit(db0, LRN_BIT)).unwrap_or(false)
        }
        _ => false,
    }
}

/// Teach-in telegram that announces its profile and manufacturer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FourBsTeachIn {
    pub func: u8,
    pub type_: u8,
    pub manufacturer_id: u16,
}

impl FourBsTeachIn {
    pub fn new(func: u8, type_: u8, manufacturer_id: u16) -> Self {
        Self {
            func,
            type_,
            manufacturer_id,
        }
    }

    /// DB_3..DB_0:
    /// FUNC(6) TYPE(7) MANUFACTURER(11) LRN_TYPE(1) ... LRN(1) ...
    pub fn to_payload(&self) -> [u8; 4] {
        let func = self.func & 0x3F;
        let type_ = self.type_ & 0x7F;
        let manufacturer = self.manufacturer_id & 0x7FF;

        let db3 = (func << 2) | (type_ >> 5);
        let db2 = ((type_ & 0x1F) << 3) | (manufacturer >> 8) as u8;
        let db1 = (manufacturer & 0xFF) as u8;
        let db0 = set_bit(set_bit(0, LRN_TYPE_BIT, true), LRN_BIT, false);

        [db3, db2, db1, db0]
    }

    /// Decode a variant-3 teach-in; `None` for data telegrams or teach-ins without profile
    pub fn from_payload(payload: &[u8]) -> Option<Self> {
        let [db3, db2, db1, db0]: [u8; 4] = payload.try_into().ok()?;
        if bit(db0, LRN_BIT) || !bit(db0, LRN_TYPE_BIT) {
            return None;
        }

        Some(Self {
            func: db3 >> 2,
            type_: ((db3 & 0x03) << 5) | (db2 >> 3),
            manufacturer_id: (((db2 & 0x07) as u16) << 8) | db1 as u16,
        })
    }

    pub fn eep(&self) -> EepId {
        EepId::new(Rorg::FourBs.value(), self.func, self.type_)
    }
}
