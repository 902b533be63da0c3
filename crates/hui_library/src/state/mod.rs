//! Mirrored state of a whole HUI surface.
//!
//! The state only changes through [`State::apply`] with decoded events, or
//! through the setters when the owner wants to record what it transmitted.

mod channel_strip;
mod display;
mod sections;

pub use channel_strip::{ChannelStrip, Fader, StereoLevelMeter};
pub use display::{LargeDisplay, TimeDisplay};
pub use sections::{ControlRoom, HotKeys, Transport};

use crate::constants::{CHANNEL_STRIPS, NAME_WIDTH};
use crate::event::HuiEvent;
use crate::parameter::{Parameter, ZoneAndPort};

const PARAMETER_EDIT_VPOTS: usize = 4;
const LED_ZONES: usize = 32;

pub(crate) fn fixed_width(text: &str, width: usize) -> String {
    text.chars().chain(std::iter::repeat(' ')).take(width).collect()
}

fn replace_changed<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        return false;
    }
    *slot = value;
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct State {
    pub channel_strips: [ChannelStrip; CHANNEL_STRIPS],
    pub transport: Transport,
    pub control_room: ControlRoom,
    pub hot_keys: HotKeys,
    pub large_display: LargeDisplay,
    pub time_display: TimeDisplay,
    /// LED ring codes for the 4 parameter edit V-Pots.
    pub parameter_edit_vpots: [u8; PARAMETER_EDIT_VPOTS],
    select_assign_text: String,
    // Sections without a struct of their own, one bit per port.
    leds: [u16; LED_ZONES],
}

impl Default for State {
    fn default() -> Self {
        Self {
            channel_strips: Default::default(),
            transport: Transport::default(),
            control_room: ControlRoom::default(),
            hot_keys: HotKeys::default(),
            large_display: LargeDisplay::default(),
            time_display: TimeDisplay::default(),
            parameter_edit_vpots: [0; PARAMETER_EDIT_VPOTS],
            select_assign_text: fixed_width("", NAME_WIDTH),
            leds: [0; LED_ZONES],
        }
    }
}

impl State {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn select_assign_text(&self) -> &str {
        &self.select_assign_text
    }

    pub fn set_select_assign_text(&mut self, text: &str) {
        self.select_assign_text = fixed_width(text, NAME_WIDTH);
    }

    /// State of any addressable switch or LED.
    pub fn switch(&self, param: Parameter) -> bool {
        match param {
            Parameter::ChannelStrip(strip, p) => self.channel_strips[strip.index() as usize].state(p),
            Parameter::Transport(p) => self.transport.state(p),
            Parameter::ControlRoom(p) => self.control_room.state(p),
            Parameter::HotKey(p) => self.hot_keys.state(p),
            other => {
                let ZoneAndPort { zone, port } = other.zone_and_port();
                self.leds[zone as usize] & (1 << port) != 0
            }
        }
    }

    pub fn set_switch(&mut self, param: Parameter, state: bool) {
        match param {
            Parameter::ChannelStrip(strip, p) => {
                self.channel_strips[strip.index() as usize].set_state(p, state)
            }
            Parameter::Transport(p) => self.transport.set_state(p, state),
            Parameter::ControlRoom(p) => self.control_room.set_state(p, state),
            Parameter::HotKey(p) => self.hot_keys.set_state(p, state),
            other => {
                let ZoneAndPort { zone, port } = other.zone_and_port();
                let bits = &mut self.leds[zone as usize];
                if state {
                    *bits |= 1 << port;
                } else {
                    *bits &= !(1 << port);
                }
            }
        }
    }

    /// Applies one decoded event. Returns whether anything changed.
    pub fn apply(&mut self, event: &HuiEvent) -> bool {
        match event {
            HuiEvent::PingReceived => false,
            HuiEvent::Switch { zone, port, state } => match Parameter::from_zone_port(*zone, *port) {
                Some(param) => {
                    let changed = self.switch(param) != *state;
                    self.set_switch(param, *state);
                    changed
                }
                None => {
                    log::debug!("HUI: no control at {}", ZoneAndPort::new(*zone, *port));
                    false
                }
            },
            HuiEvent::FaderLevel { channel, level } => match self.strip_mut(*channel) {
                Some(strip) => {
                    let before = strip.fader.level();
                    strip.fader.set_level(*level);
                    strip.fader.level() != before
                }
                None => false,
            },
            HuiEvent::VPot { channel, value } => {
                let channel = *channel as usize;
                let vpot = match channel.checked_sub(CHANNEL_STRIPS) {
                    None => self.channel_strips.get_mut(channel).map(|strip| &mut strip.vpot),
                    Some(edit) => self.parameter_edit_vpots.get_mut(edit),
                };
                match vpot {
                    Some(vpot) => replace_changed(vpot, *value),
                    None => {
                        log::debug!("HUI: no V-Pot {channel}");
                        false
                    }
                }
            }
            HuiEvent::LevelMeter {
                channel,
                side,
                level,
            } => match self.strip_mut(*channel) {
                Some(strip) => {
                    let before = strip.level_meter;
                    strip.level_meter.set_level(*side, *level);
                    strip.level_meter != before
                }
                None => false,
            },
            HuiEvent::ChannelName { channel, text } => match self.strip_mut(*channel) {
                Some(strip) => {
                    let name = fixed_width(text, NAME_WIDTH);
                    let changed = strip.name() != name;
                    strip.set_name(&name);
                    changed
                }
                None => false,
            },
            HuiEvent::SelectAssignText { text } => {
                replace_changed(&mut self.select_assign_text, fixed_width(text, NAME_WIDTH))
            }
            HuiEvent::LargeDisplay { components } => {
                let changed = self.large_display.components() != components;
                self.large_display.set_components(components.iter().cloned());
                changed
            }
            HuiEvent::TimeDisplay { digits } => {
                let changed = self.time_display.digits() != digits;
                self.time_display.set_digits(digits.clone());
                changed
            }
        }
    }

    fn strip_mut(&mut self, channel: u8) -> Option<&mut ChannelStrip> {
        let strip = self.channel_strips.get_mut(channel as usize);
        if strip.is_none() {
            log::debug!("HUI: no channel strip {channel}");
        }
        strip
    }
}
