use midly::MidiMessage;
use midly::live::{LiveEvent, SystemRealtime};
use midly::num::{u4, u7};
use std::fmt;
use std::io;

/// An outbound HUI wire message. HUI only ever talks on MIDI channel 0.
/// Data bytes are 7-bit by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HuiMessage {
    ControlChange { controller: u7, value: u7 },
    NoteOn { key: u7, velocity: u7 },
    SystemReset,
}

impl HuiMessage {
    // Callers mask or range check first.
    pub(crate) fn cc(controller: u8, value: u8) -> Self {
        HuiMessage::ControlChange {
            controller: u7::new(controller),
            value: u7::new(value),
        }
    }

    pub fn live_event(&self) -> LiveEvent<'static> {
        match *self {
            HuiMessage::ControlChange { controller, value } => LiveEvent::Midi {
                channel: u4::new(0),
                message: MidiMessage::Controller { controller, value },
            },
            HuiMessage::NoteOn { key, velocity } => LiveEvent::Midi {
                channel: u4::new(0),
                message: MidiMessage::NoteOn { key, vel: velocity },
            },
            HuiMessage::SystemReset => LiveEvent::Realtime(SystemRealtime::Reset),
        }
    }

    pub fn write<W: io::Write>(&self, out: W) -> io::Result<()> {
        self.live_event().write_std(out)
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(3);
        self.write(&mut buf)
            .expect("writing a MIDI message into a Vec cannot fail");
        buf
    }
}

impl fmt::Display for HuiMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex(&self.to_bytes()))
    }
}

/// Space separated hex dump, e.g. `B0 0C 05`.
pub fn hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{b:02X}"))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn control_change_bytes() {
        assert_eq!(HuiMessage::cc(0x0C, 0x05).to_bytes(), vec![0xB0, 0x0C, 0x05]);
    }

    #[test]
    fn note_on_bytes() {
        let msg = HuiMessage::NoteOn {
            key: u7::new(0x00),
            velocity: u7::new(0x7F),
        };
        assert_eq!(msg.to_bytes(), vec![0x90, 0x00, 0x7F]);
    }

    #[test]
    fn data_bytes_stay_seven_bit() {
        assert_eq!(u7::try_from(0x85), None);
        let msg = HuiMessage::ControlChange {
            controller: u7::new(0x0C),
            value: u7::new(0x7F),
        };
        assert_eq!(msg.to_bytes(), vec![0xB0, 0x0C, 0x7F]);
    }

    #[test]
    fn reset_is_one_byte() {
        assert_eq!(HuiMessage::SystemReset.to_bytes(), vec![0xFF]);
    }

    #[test]
    fn display_as_hex() {
        assert_eq!(HuiMessage::cc(0x2C, 0x44).to_string(), "B0 2C 44");
        assert_eq!(hex(&[]), "");
    }
}
