// Profile identity: RORG, function and type bytes (e.g. A5-07-01)

use super::traits::EepError;
use crate::bitwise::parse_eep_id;
use crate::telegram::Rorg;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EepId {
    pub rorg: u8,
    pub func: u8,
    #[serde(rename = "type")]
    pub type_: u8,
}

impl EepId {
    pub const fn new(rorg: u8, func: u8, type_: u8) -> Self {
        Self { rorg, func, type_ }
    }

    /// Radio protocol family, if it is one we know
    pub fn family(&self) -> Option<Rorg> {
        Rorg::from_u8(self.rorg)
    }
}

impl fmt::Display for EepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02X}-{:02X}-{:02X}", self.rorg, self.func, self.type_)
    }
}

impl FromStr for EepId {
    type Err = EepError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match parse_eep_id(s.trim()) {
            Ok((rest, (rorg, func, type_))) if rest.is_empty() => Ok(Self::new(rorg, func, type_)),
            _ => Err(EepError::InvalidArgument(format!(
                "Invalid profile identifier: {:?}",
                s
            ))),
        }
    }
}
