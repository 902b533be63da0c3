//! Surface-to-host message encoding.
//!
//! Multi-message actions come back as an ordered pair. Send both halves
//! back to back on one output: the host correlates them by position.

use midly::num::u7;

use crate::constants::*;
use crate::error::EncodeError;
use crate::message::HuiMessage;
use crate::parameter::ZoneAndPort;

fn check_channel(channel: u8) -> Result<(), EncodeError> {
    if channel as usize >= CHANNEL_STRIPS {
        return Err(EncodeError::ChannelOutOfRange(channel));
    }
    Ok(())
}

/// Zone select then port on/off. The zone is masked to 7 bits and the port
/// to 4 bits.
pub fn switch_messages(address: impl Into<ZoneAndPort>, state: bool) -> [HuiMessage; 2] {
    let ZoneAndPort { zone, port } = address.into();
    let state_bits = if state { PORT_STATE_ON } else { PORT_STATE_OFF };
    [
        HuiMessage::cc(ZONE_SELECT, zone & 0x7F),
        HuiMessage::cc(PORT_ON_OFF, (port & 0x0F) | state_bits),
    ]
}

/// Fader MSB then LSB for `channel` 0-7, `level` 0-16383.
pub fn fader_level_messages(channel: u8, level: u16) -> Result<[HuiMessage; 2], EncodeError> {
    check_channel(channel)?;
    if level > FADER_MAX {
        return Err(EncodeError::LevelOutOfRange(level));
    }
    let msb = (level >> 7) as u8;
    let lsb = (level & 0x7F) as u8;
    Ok([
        HuiMessage::cc(channel, msb),
        HuiMessage::cc(channel + FADER_LSB_FIRST, lsb),
    ])
}

pub fn fader_touch_messages(channel: u8, touched: bool) -> Result<[HuiMessage; 2], EncodeError> {
    check_channel(channel)?;
    let state_bits = if touched { PORT_STATE_ON } else { PORT_STATE_OFF };
    Ok([
        HuiMessage::cc(FADER_TOUCH_SELECT, channel),
        HuiMessage::cc(FADER_TOUCH_STATE, state_bits),
    ])
}

pub fn ping_reply_message() -> HuiMessage {
    HuiMessage::NoteOn {
        key: u7::new(PING_REPLY_KEY),
        velocity: u7::new(PING_REPLY_VELOCITY),
    }
}

/// Tells the host the surface is powering on or off.
pub fn system_reset_message() -> HuiMessage {
    HuiMessage::SystemReset
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parameter::{ChannelParameter, Parameter, Transport};

    fn bytes(messages: &[HuiMessage]) -> Vec<Vec<u8>> {
        messages.iter().map(HuiMessage::to_bytes).collect()
    }

    #[test]
    fn switch_on_and_off() {
        let play = Parameter::Transport(Transport::Play);
        assert_eq!(
            bytes(&switch_messages(play, true)),
            vec![vec![0xB0, 0x0C, 0x0E], vec![0xB0, 0x2C, 0x44]]
        );
        assert_eq!(
            bytes(&switch_messages(ZoneAndPort::new(0x0E, 0x4), false)),
            vec![vec![0xB0, 0x0C, 0x0E], vec![0xB0, 0x2C, 0x04]]
        );
    }

    #[test]
    fn channel_strip_switch() {
        let mute = Parameter::channel_strip(6, ChannelParameter::Mute).unwrap();
        assert_eq!(
            bytes(&switch_messages(mute, true)),
            vec![vec![0xB0, 0x0C, 0x06], vec![0xB0, 0x2C, 0x42]]
        );
    }

    #[test]
    fn fader_level() {
        assert_eq!(
            bytes(&fader_level_messages(3, 2048).unwrap()),
            vec![vec![0xB0, 0x03, 0x10], vec![0xB0, 0x23, 0x00]]
        );
        assert_eq!(
            bytes(&fader_level_messages(7, 16383).unwrap()),
            vec![vec![0xB0, 0x07, 0x7F], vec![0xB0, 0x27, 0x7F]]
        );
    }

    #[test]
    fn fader_preconditions() {
        assert_eq!(fader_level_messages(8, 0), Err(EncodeError::ChannelOutOfRange(8)));
        assert_eq!(fader_level_messages(0, 16384), Err(EncodeError::LevelOutOfRange(16384)));
        assert_eq!(fader_touch_messages(9, true), Err(EncodeError::ChannelOutOfRange(9)));
    }

    #[test]
    fn fader_touch() {
        assert_eq!(
            bytes(&fader_touch_messages(2, true).unwrap()),
            vec![vec![0xB0, 0x0F, 0x02], vec![0xB0, 0x2F, 0x40]]
        );
        assert_eq!(
            bytes(&fader_touch_messages(2, false).unwrap()),
            vec![vec![0xB0, 0x0F, 0x02], vec![0xB0, 0x2F, 0x00]]
        );
    }

    #[test]
    fn fixed_messages() {
        assert_eq!(ping_reply_message().to_bytes(), vec![0x90, 0x00, 0x7F]);
        assert_eq!(system_reset_message().to_bytes(), vec![0xFF]);
    }
}
