// Ping from host: note-on, note 0, velocity 0. HUI hijacks status 0x9.
pub const PING_FROM_HOST: [u8; 3] = [0x90, 0x00, 0x00];
// Ping reply to host: note-on, note 0, velocity 0x7F.
pub const PING_REPLY_KEY: u8 = 0x00;
pub const PING_REPLY_VELOCITY: u8 = 0x7F;

pub const SYSTEM_RESET: u8 = 0xFF;

// SysEx envelope: F0 00 00 66 05 00 <payload> F7
pub const SYSEX_START: u8 = 0xF0;
pub const SYSEX_END: u8 = 0xF7;
pub const SYSEX_MANUFACTURER: [u8; 3] = [0x00, 0x00, 0x66];
pub const SYSEX_SUB_ID1: u8 = 0x05;
pub const SYSEX_SUB_ID2: u8 = 0x00;

/// 4-character channel name displays, and the Select-Assign display
pub const DISPLAY_SMALL: u8 = 0x10;
/// Main time display (timecode, feet, bars/beats)
pub const DISPLAY_TIME: u8 = 0x11;
/// Main 40x2 character display
pub const DISPLAY_LARGE: u8 = 0x12;

// Status 0xA is normally poly aftertouch, HUI uses it for level meters.
pub const LEVEL_METERS_STATUS: u8 = 0xA0;
// HUI only ever uses the first channel, so this is exactly 0xB0.
pub const CONTROL_STATUS: u8 = 0xB0;

pub const ZONE_SELECT: u8 = 0x0C;
pub const PORT_ON_OFF: u8 = 0x2C;
pub const FADER_TOUCH_SELECT: u8 = 0x0F;
pub const FADER_TOUCH_STATE: u8 = 0x2F;

pub const FADER_MSB_FIRST: u8 = 0x00;
pub const FADER_MSB_LAST: u8 = 0x07;
pub const FADER_LSB_FIRST: u8 = 0x20;
pub const FADER_LSB_LAST: u8 = 0x27;
pub const VPOT_FIRST: u8 = 0x10;
pub const VPOT_LAST: u8 = 0x1B;

pub const PORT_STATE_OFF: u8 = 0x00;
pub const PORT_STATE_ON: u8 = 0x40;

/// HUI has exactly 8 channel strips, even on surfaces with a master fader.
pub const CHANNEL_STRIPS: usize = 8;
pub const FADER_MAX: u16 = 0x3FFF;
pub const LEVEL_METER_MAX: u8 = 0x0F;
pub const SELECT_ASSIGN_CHANNEL: u8 = 8;

pub const LARGE_DISPLAY_COMPONENTS: usize = 8;
pub const LARGE_DISPLAY_COMPONENT_WIDTH: usize = 10;
pub const LARGE_DISPLAY_BLOCK: usize = 1 + LARGE_DISPLAY_COMPONENT_WIDTH;
pub const TIME_DISPLAY_DIGITS: usize = 8;
pub const NAME_WIDTH: usize = 4;
