use std::fmt;

use crate::parameter::{Parameter, Port, Zone, ZoneAndPort};

/// Left or right half of a stereo level meter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

/// A decoded host-to-surface update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HuiEvent {
    /// The host checks the surface is alive; answer with a ping reply.
    PingReceived,
    /// LED or switch state at a zone/port address.
    Switch { zone: Zone, port: Port, state: bool },
    /// 14-bit motor fader position.
    FaderLevel { channel: u8, level: u16 },
    /// V-Pot LED ring code, uninterpreted. Channels 8-11 are the parameter
    /// edit knobs.
    VPot { channel: u8, value: u8 },
    LevelMeter { channel: u8, side: Side, level: u8 },
    ChannelName { channel: u8, text: String },
    SelectAssignText { text: String },
    /// The whole 8-component buffer after the update.
    LargeDisplay { components: [String; 8] },
    /// All 8 digits, leftmost first.
    TimeDisplay { digits: [String; 8] },
}

impl HuiEvent {
    /// The control a switch event addresses, if the address is defined.
    pub fn parameter(&self) -> Option<Parameter> {
        match *self {
            HuiEvent::Switch { zone, port, .. } => Parameter::from_zone_port(zone, port),
            _ => None,
        }
    }

    pub fn address(&self) -> Option<ZoneAndPort> {
        match *self {
            HuiEvent::Switch { zone, port, .. } => Some(ZoneAndPort::new(zone, port)),
            _ => None,
        }
    }
}

impl fmt::Display for HuiEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HuiEvent::PingReceived => write!(f, "ping"),
            HuiEvent::Switch { zone, port, state } => {
                let onoff = if *state { "on" } else { "off" };
                match Parameter::from_zone_port(*zone, *port) {
                    Some(param) => write!(f, "{param} {onoff}"),
                    None => write!(f, "{} {onoff}", ZoneAndPort::new(*zone, *port)),
                }
            }
            HuiEvent::FaderLevel { channel, level } => write!(f, "fader {channel} = {level}"),
            HuiEvent::VPot { channel, value } => write!(f, "v-pot {channel} = {value:#04x}"),
            HuiEvent::LevelMeter {
                channel,
                side,
                level,
            } => write!(f, "meter {channel} {side:?} = {level}"),
            HuiEvent::ChannelName { channel, text } => write!(f, "name {channel} = {text:?}"),
            HuiEvent::SelectAssignText { text } => write!(f, "select assign = {text:?}"),
            HuiEvent::LargeDisplay { components } => {
                write!(f, "large display {:?} / {:?}", components[..4].concat(), components[4..].concat())
            }
            HuiEvent::TimeDisplay { digits } => write!(f, "time display {:?}", digits.concat()),
        }
    }
}
