use thiserror::Error;

/// Precondition violations when building outbound messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EncodeError {
    #[error("channel strip {0} out of range (expected 0-7)")]
    ChannelOutOfRange(u8),
    #[error("fader level {0} out of range (expected 0-16383)")]
    LevelOutOfRange(u16),
}

/// Why an inbound message was dropped. Never fatal: the parser is ready for
/// the next message after any of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("not a valid MIDI message: {0}")]
    Midi(String),
    #[error("SysEx header is not HUI")]
    BadSysExHeader,
    #[error("HUI SysEx has no payload")]
    EmptySysEx,
    #[error("unknown SysEx display tag {0:#04x}")]
    UnknownSysExTag(u8),
    #[error("small display payload is {0} bytes (expected 6)")]
    SmallDisplayLength(usize),
    #[error("small display channel {0} not expected")]
    SmallDisplayChannel(u8),
    #[error("large display payload is {0} bytes (expected a positive multiple of 11)")]
    LargeDisplayLength(usize),
    #[error("large display zone {0} out of range (expected 0-7)")]
    LargeDisplayZone(u8),
    #[error("time display carries {0} digits (at most 8)")]
    TimeDisplayOverflow(usize),
    #[error("port on/off {0:#04x} without a preceding zone select")]
    PortWithoutZone(u8),
    #[error("port on/off {0:#04x} has unexpected state nibble")]
    PortStateNibble(u8),
    #[error("unrecognized control {0:#04x}")]
    UnknownControl(u8),
    #[error("level meter channel {0} out of range (expected 0-7)")]
    LevelMeterChannel(u8),
    #[error("level meter value {0:#04x} out of range")]
    LevelMeterLevel(u8),
}
