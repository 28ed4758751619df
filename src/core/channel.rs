// Channel descriptions and the typed values that flow through them
// A channel is a named capability a profile exposes: a reading, a command or an event

use serde::{Deserialize, Serialize};
use std::fmt;

/// What kind of value a channel carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChannelKind {
    /// Measurement or actuator feedback, produced on receive
    State,
    /// Actuator instruction, consumed on send
    Command,
    /// Trigger token derived from a telegram (e.g. rocker presses)
    Event,
}

/// One entry in a profile's channel set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ChannelSpec {
    pub id: &'static str,
    pub kind: ChannelKind,
}

impl ChannelSpec {
    pub const fn state(id: &'static str) -> Self {
        Self {
            id,
            kind: ChannelKind::State,
        }
    }

    pub const fn command(id: &'static str) -> Self {
        Self {
            id,
            kind: ChannelKind::Command,
        }
    }

    pub const fn event(id: &'static str) -> Self {
        Self {
            id,
            kind: ChannelKind::Event,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OnOff {
    On,
    Off,
}

impl From<bool> for OnOff {
    fn from(on: bool) -> Self {
        if on {
            OnOff::On
        } else {
            OnOff::Off
        }
    }
}

impl fmt::Display for OnOff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OnOff::On => write!(f, "ON"),
            OnOff::Off => write!(f, "OFF"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OpenClosed {
    Open,
    Closed,
}

impl fmt::Display for OpenClosed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpenClosed::Open => write!(f, "OPEN"),
            OpenClosed::Closed => write!(f, "CLOSED"),
        }
    }
}

/// Physical units produced by the built-in profiles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Unit {
    Volt,
    Lux,
    Celsius,
    Percent,
}

impl Unit {
    pub fn symbol(&self) -> &'static str {
        match self {
            Unit::Volt => "V",
            Unit::Lux => "lx",
            Unit::Celsius => "°C",
            Unit::Percent => "%",
        }
    }
}

/// Value of a state channel.
///
/// `Undef` means the telegram did not populate the field, which is different from
/// a zero reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum State {
    Undef,
    OnOff(OnOff),
    OpenClosed(OpenClosed),
    Quantity { value: f64, unit: Unit },
    Percent(f64),
    Decimal(f64),
    Text(String),
}

impl State {
    pub fn quantity(value: f64, unit: Unit) -> Self {
        State::Quantity { value, unit }
    }

    pub fn is_undef(&self) -> bool {
        matches!(self, State::Undef)
    }
}

impl Default for State {
    fn default() -> Self {
        State::Undef
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            State::Undef => write!(f, "UNDEF"),
            State::OnOff(v) => write!(f, "{}", v),
            State::OpenClosed(v) => write!(f, "{}", v),
            State::Quantity { value, unit } => write!(f, "{} {}", value, unit.symbol()),
            State::Percent(v) | State::Decimal(v) => write!(f, "{}", v),
            State::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Instruction sent from the host towards an actuator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Command {
    OnOff(OnOff),
    Percent(f64),
    Decimal(f64),
    Text(String),
    Refresh,
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::OnOff(v) => write!(f, "{}", v),
            Command::Percent(v) | Command::Decimal(v) => write!(f, "{}", v),
            Command::Text(s) => write!(f, "{}", s),
            Command::Refresh => write!(f, "REFRESH"),
        }
    }
}

/// Result of decoding one channel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ChannelValue {
    State(State),
    Event(String),
}

impl fmt::Display for ChannelValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChannelValue::State(state) => write!(f, "{}", state),
            ChannelValue::Event(token) => write!(f, "event {}", token),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_text() {
        assert_eq!(Command::OnOff(OnOff::On).to_string(), "ON");
        assert_eq!(Command::Percent(42.0).to_string(), "42");
        assert_eq!(Command::Text("A5 00".to_string()).to_string(), "A5 00");
        assert_eq!(Command::Refresh.to_string(), "REFRESH");
    }

    #[test]
    fn test_state_display() {
        assert_eq!(State::Undef.to_string(), "UNDEF");
        assert_eq!(State::quantity(2.5, Unit::Volt).to_string(), "2.5 V");
        assert_eq!(State::OpenClosed(OpenClosed::Closed).to_string(), "CLOSED");
        assert!(State::default().is_undef());
    }

    #[test]
    fn test_on_off_from_bool() {
        assert_eq!(OnOff::from(true), OnOff::On);
        assert_eq!(OnOff::from(false), OnOff::Off);
    }

    #[test]
    fn test_state_json() {
        let state = State::quantity(21.5, Unit::Celsius);
        let json = serde_json::to_string(&state).unwrap();
        let back: State = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }
}
