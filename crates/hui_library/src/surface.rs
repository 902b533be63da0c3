//! A HUI surface endpoint: one decoder, the mirrored state, and a queue of
//! messages waiting to go back to the host.

use crate::error::EncodeError;
use crate::event::HuiEvent;
use crate::message::HuiMessage;
use crate::parameter::Parameter;
use crate::parser::Parser;
use crate::state::State;
use crate::transmit;

#[derive(Debug, Clone)]
pub struct Surface {
    parser: Parser,
    state: State,
    outbound: Vec<HuiMessage>,
    reply_to_ping: bool,
}

impl Default for Surface {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface {
    pub fn new() -> Self {
        Self {
            parser: Parser::new(),
            state: State::new(),
            outbound: Vec::new(),
            reply_to_ping: true,
        }
    }

    /// Whether a ping from the host queues a reply automatically.
    pub fn with_ping_reply(mut self, reply_to_ping: bool) -> Self {
        self.reply_to_ping = reply_to_ping;
        self
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut State {
        &mut self.state
    }

    pub fn parser(&self) -> &Parser {
        &self.parser
    }

    /// Feeds one inbound message. Decoded events are applied to the state
    /// before being handed back.
    pub fn midi_in(&mut self, raw: &[u8]) -> Option<HuiEvent> {
        let event = self.parser.midi_in(raw)?;
        match &event {
            HuiEvent::PingReceived if self.reply_to_ping => {
                self.outbound.push(transmit::ping_reply_message());
            }
            _ => {
                self.state.apply(&event);
            }
        }
        Some(event)
    }

    /// Drains queued outbound messages in send order.
    pub fn take_outbound(&mut self) -> Vec<HuiMessage> {
        std::mem::take(&mut self.outbound)
    }

    pub fn has_outbound(&self) -> bool {
        !self.outbound.is_empty()
    }

    pub fn transmit_switch(&mut self, param: Parameter, state: bool) {
        self.outbound.extend(transmit::switch_messages(param, state));
    }

    /// Queues a fader move and records it as the local fader position.
    pub fn transmit_fader_level(&mut self, channel: u8, level: u16) -> Result<(), EncodeError> {
        let messages = transmit::fader_level_messages(channel, level)?;
        self.state.channel_strips[channel as usize].fader.set_level(level);
        self.outbound.extend(messages);
        Ok(())
    }

    pub fn transmit_fader_touch(&mut self, channel: u8, touched: bool) -> Result<(), EncodeError> {
        let messages = transmit::fader_touch_messages(channel, touched)?;
        self.state.channel_strips[channel as usize].fader.touched = touched;
        self.outbound.extend(messages);
        Ok(())
    }

    /// Announces the surface to the host and starts from a clean slate.
    pub fn power_on(&mut self) {
        self.reset();
        log::info!("HUI: surface online");
        self.outbound.push(transmit::system_reset_message());
    }

    pub fn power_off(&mut self) {
        log::info!("HUI: surface offline");
        self.outbound.push(transmit::system_reset_message());
    }

    /// Clears the decoder, the state and anything not yet sent.
    pub fn reset(&mut self) {
        self.parser.reset();
        self.state.reset();
        self.outbound.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parameter::Transport;

    fn wire(surface: &mut Surface) -> Vec<Vec<u8>> {
        surface.take_outbound().iter().map(HuiMessage::to_bytes).collect()
    }

    #[test]
    fn ping_is_answered() {
        let mut surface = Surface::new();
        assert_eq!(surface.midi_in(&[0x90, 0x00, 0x00]), Some(HuiEvent::PingReceived));
        assert_eq!(wire(&mut surface), vec![vec![0x90, 0x00, 0x7F]]);
        assert!(!surface.has_outbound());
    }

    #[test]
    fn ping_reply_can_be_disabled() {
        let mut surface = Surface::new().with_ping_reply(false);
        assert_eq!(surface.midi_in(&[0x90, 0x00, 0x00]), Some(HuiEvent::PingReceived));
        assert!(wire(&mut surface).is_empty());
    }

    #[test]
    fn inbound_updates_state() {
        let mut surface = Surface::new();
        assert_eq!(surface.midi_in(&[0xB0, 0x0C, 0x0E]), None);
        assert_eq!(surface.parser().pending_zone(), Some(0x0E));
        assert!(surface.midi_in(&[0xB0, 0x2C, 0x44]).is_some());
        assert!(surface.state().transport.play);
        assert!(surface.midi_in(&[0xB0, 0x2C, 0x44]).is_none());
    }

    #[test]
    fn transmit_queues_in_order() {
        let mut surface = Surface::new();
        surface.transmit_switch(Parameter::Transport(Transport::Stop), true);
        surface.transmit_fader_level(1, 0x3FFF).unwrap();
        assert_eq!(
            wire(&mut surface),
            vec![
                vec![0xB0, 0x0C, 0x0E],
                vec![0xB0, 0x2C, 0x43],
                vec![0xB0, 0x01, 0x7F],
                vec![0xB0, 0x21, 0x7F],
            ]
        );
        assert_eq!(surface.state().channel_strips[1].fader.level(), 0x3FFF);
    }

    #[test]
    fn rejected_transmit_queues_nothing() {
        let mut surface = Surface::new();
        assert_eq!(
            surface.transmit_fader_level(8, 0),
            Err(EncodeError::ChannelOutOfRange(8))
        );
        assert_eq!(
            surface.transmit_fader_touch(8, true),
            Err(EncodeError::ChannelOutOfRange(8))
        );
        assert!(!surface.has_outbound());
    }

    #[test]
    fn fader_touch_is_mirrored() {
        let mut surface = Surface::new();
        surface.transmit_fader_touch(5, true).unwrap();
        assert!(surface.state().channel_strips[5].fader.touched);
        assert_eq!(
            wire(&mut surface),
            vec![vec![0xB0, 0x0F, 0x05], vec![0xB0, 0x2F, 0x40]]
        );
    }

    #[test]
    fn power_cycle() {
        let mut surface = Surface::new();
        surface.midi_in(&[0xB0, 0x0C, 0x03]);
        surface.state_mut().channel_strips[0].set_name("Kick");
        surface.power_on();
        assert_eq!(surface.parser().pending_zone(), None);
        assert_eq!(surface.state(), &State::new());
        assert_eq!(wire(&mut surface), vec![vec![0xFF]]);
        surface.power_off();
        assert_eq!(wire(&mut surface), vec![vec![0xFF]]);
    }
}
