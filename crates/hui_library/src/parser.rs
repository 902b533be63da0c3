//! Host-to-surface message decoder.
//!
//! HUI spreads one logical update over several MIDI messages (zone select then
//! port on/off, fader MSB then LSB), so the parser keeps a little correlation
//! state between calls. Messages must be fed in arrival order from a single
//! connection; use one parser per connection.

use midly::MidiMessage;
use midly::live::LiveEvent;

use crate::charset::{Charset, PLACEHOLDER, blank_large_component, blank_time_digit};
use crate::constants::*;
use crate::error::ParseError;
use crate::event::{HuiEvent, Side};
use crate::message::hex;
use crate::parameter::{Parameter, Zone};

#[derive(Debug, Clone)]
pub struct Parser {
    time_display: [String; TIME_DISPLAY_DIGITS],
    large_display: [String; LARGE_DISPLAY_COMPONENTS],
    fader_msb: [u8; CHANNEL_STRIPS],
    zone_select: Option<Zone>,
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser {
    pub fn new() -> Self {
        Self {
            time_display: std::array::from_fn(|_| blank_time_digit()),
            large_display: std::array::from_fn(|_| blank_large_component()),
            fader_msb: [0; CHANNEL_STRIPS],
            zone_select: None,
        }
    }

    /// Clears all correlation state and display buffers.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// The zone latched by a zone select, waiting for its port on/off.
    pub fn pending_zone(&self) -> Option<Zone> {
        self.zone_select
    }

    /// Decodes one message, logging and dropping anything malformed.
    pub fn midi_in(&mut self, raw: &[u8]) -> Option<HuiEvent> {
        match self.parse(raw) {
            Ok(event) => {
                if let Some(event) = &event {
                    log::trace!("HUI: {event}");
                }
                event
            }
            Err(err) => {
                log::debug!("HUI: dropping [{}]: {err}", hex(raw));
                None
            }
        }
    }

    /// Decodes one message. On error the message has had no effect, except
    /// that a port on/off always consumes the pending zone select.
    pub fn parse(&mut self, raw: &[u8]) -> Result<Option<HuiEvent>, ParseError> {
        // Status 0x9 is hijacked: only this exact message means anything.
        if raw == PING_FROM_HOST {
            return Ok(Some(HuiEvent::PingReceived));
        }

        match raw.first() {
            None => Ok(None),
            Some(&SYSEX_START) => self.parse_sysex(raw),
            Some(_) => {
                let event = LiveEvent::parse(raw).map_err(|e| ParseError::Midi(e.to_string()))?;
                match event {
                    LiveEvent::Midi { channel, message } if channel.as_int() == 0 => match message {
                        MidiMessage::Controller { controller, value } => {
                            self.parse_control(controller.as_int(), value.as_int())
                        }
                        MidiMessage::Aftertouch { key, vel } => {
                            parse_level_meter(key.as_int(), vel.as_int()).map(Some)
                        }
                        _ => Ok(None),
                    },
                    _ => Ok(None),
                }
            }
        }
    }

    fn parse_sysex(&mut self, raw: &[u8]) -> Result<Option<HuiEvent>, ParseError> {
        let body = raw.strip_suffix(&[SYSEX_END]).unwrap_or(raw);
        let body = &body[1..];

        let Some((header, payload)) = body.split_at_checked(5) else {
            return Err(ParseError::BadSysExHeader);
        };
        if header[..3] != SYSEX_MANUFACTURER
            || header[3] != SYSEX_SUB_ID1
            || header[4] != SYSEX_SUB_ID2
        {
            return Err(ParseError::BadSysExHeader);
        }

        let Some((&tag, data)) = payload.split_first() else {
            return Err(ParseError::EmptySysEx);
        };

        match tag {
            DISPLAY_SMALL => parse_small_display(data).map(Some),
            DISPLAY_LARGE => self.parse_large_display(data).map(Some),
            DISPLAY_TIME => self.parse_time_display(data).map(Some),
            _ => Err(ParseError::UnknownSysExTag(tag)),
        }
    }

    // zone [10 chars] (zone [10 chars])*
    fn parse_large_display(&mut self, data: &[u8]) -> Result<HuiEvent, ParseError> {
        if data.is_empty() || data.len() % LARGE_DISPLAY_BLOCK != 0 {
            return Err(ParseError::LargeDisplayLength(data.len()));
        }

        let mut components = self.large_display.clone();
        for block in data.chunks_exact(LARGE_DISPLAY_BLOCK) {
            let zone = block[0];
            let slot = components
                .get_mut(zone as usize)
                .ok_or(ParseError::LargeDisplayZone(zone))?;
            *slot = Charset::decode_large(&block[1..]);
        }

        self.large_display = components.clone();
        Ok(HuiEvent::LargeDisplay { components })
    }

    // Digits arrive rightmost first.
    fn parse_time_display(&mut self, data: &[u8]) -> Result<HuiEvent, ParseError> {
        let codes: Vec<u8> = data.iter().copied().filter(|&c| c != SYSEX_END).collect();
        if codes.len() > TIME_DISPLAY_DIGITS {
            return Err(ParseError::TimeDisplayOverflow(codes.len()));
        }

        let mut digits = self.time_display.clone();
        for (i, code) in codes.into_iter().enumerate() {
            let digit = Charset::time_display(code).unwrap_or_else(|| {
                log::debug!("HUI: time display character code {code:#04x} not recognized");
                PLACEHOLDER
            });
            digits[TIME_DISPLAY_DIGITS - 1 - i] = digit.to_string();
        }

        self.time_display = digits.clone();
        Ok(HuiEvent::TimeDisplay { digits })
    }

    fn parse_control(&mut self, controller: u8, value: u8) -> Result<Option<HuiEvent>, ParseError> {
        match controller {
            FADER_MSB_FIRST..=FADER_MSB_LAST => {
                self.fader_msb[(controller & 0x0F) as usize] = value;
                Ok(None)
            }
            FADER_LSB_FIRST..=FADER_LSB_LAST => {
                let channel = controller & 0x0F;
                let msb = u16::from(self.fader_msb[channel as usize]);
                let level = (msb << 7) | u16::from(value);
                Ok(Some(HuiEvent::FaderLevel { channel, level }))
            }
            VPOT_FIRST..=VPOT_LAST => Ok(Some(HuiEvent::VPot {
                channel: controller % 0x10,
                value,
            })),
            ZONE_SELECT => {
                if let Some(previous) = self.zone_select.replace(value) {
                    log::debug!(
                        "HUI: zone select {value:#04x} replaces pending zone {previous:#04x}"
                    );
                }
                Ok(None)
            }
            PORT_ON_OFF => {
                // The transaction is consumed whether or not it decodes.
                let zone = self.zone_select.take();
                let port = value & 0x0F;
                let state = match value & 0xF0 {
                    PORT_STATE_OFF => false,
                    PORT_STATE_ON => true,
                    _ => {
                        if let Some(guess) = zone.and_then(|z| Parameter::from_zone_port(z, port)) {
                            log::debug!("HUI: bad state nibble for a switch matching {guess}");
                        }
                        return Err(ParseError::PortStateNibble(value));
                    }
                };
                let zone = zone.ok_or(ParseError::PortWithoutZone(value))?;
                Ok(Some(HuiEvent::Switch { zone, port, state }))
            }
            _ => Err(ParseError::UnknownControl(controller)),
        }
    }
}

// channel [4 chars]; channel 8 is the Select-Assign display.
fn parse_small_display(data: &[u8]) -> Result<HuiEvent, ParseError> {
    let [channel, codes @ ..] = data else {
        return Err(ParseError::SmallDisplayLength(1));
    };
    if codes.len() != NAME_WIDTH {
        return Err(ParseError::SmallDisplayLength(data.len() + 1));
    }

    let text = Charset::decode_small(codes);
    match *channel {
        c if (c as usize) < CHANNEL_STRIPS => Ok(HuiEvent::ChannelName { channel: c, text }),
        SELECT_ASSIGN_CHANNEL => Ok(HuiEvent::SelectAssignText { text }),
        c => Err(ParseError::SmallDisplayChannel(c)),
    }
}

fn parse_level_meter(channel: u8, side_and_level: u8) -> Result<HuiEvent, ParseError> {
    if channel as usize >= CHANNEL_STRIPS {
        return Err(ParseError::LevelMeterChannel(channel));
    }
    let (side, level) = if side_and_level >= 0x10 {
        (Side::Right, side_and_level - 0x10)
    } else {
        (Side::Left, side_and_level)
    };
    if level > LEVEL_METER_MAX {
        return Err(ParseError::LevelMeterLevel(side_and_level));
    }
    Ok(HuiEvent::LevelMeter {
        channel,
        side,
        level,
    })
}
