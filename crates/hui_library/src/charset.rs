//! Character tables for the HUI text displays.
//!
//! Each display region has its own coding. Codes that fall outside a table
//! render as [`PLACEHOLDER`].

use crate::constants::LARGE_DISPLAY_COMPONENT_WIDTH;

pub const PLACEHOLDER: &str = "?";

pub(crate) fn blank_large_component() -> String {
    " ".repeat(LARGE_DISPLAY_COMPONENT_WIDTH)
}

pub(crate) fn blank_time_digit() -> String {
    " ".to_string()
}

const TIME_DISPLAY: [&str; 0x31] = [
    "0", "1", "2", "3", "4", "5", "6", "7", // 0x00
    "8", "9", "A", "B", "C", "D", "E", "F", // 0x08
    "0.", "1.", "2.", "3.", "4.", "5.", "6.", "7.", // 0x10
    "8.", "9.", "A.", "B.", "C.", "D.", "E.", "F.", // 0x18
    " ", "?", "?", "?", "?", "?", "?", "?", // 0x20
    "?", "?", "?", "?", "?", "?", "?", "?", // 0x28
    " .", // 0x30
];

const LARGE_DISPLAY: [&str; 0x80] = [
    "", "", "", "", "", "", "", "", // 0x00
    "", "", "", "", "", "", "", "", // 0x08
    "11", "12", "13", "14", "full", "r4", "r3", "r2", // 0x10
    "r1", "♪", "°C", "°F", "▼", "▶", "◀", "▲", // 0x18
    " ", "!", "\"", "#", "$", "%", "&", "'", // 0x20
    "(", ")", "*", "+", ",", "-", ".", "/", // 0x28
    "0", "1", "2", "3", "4", "5", "6", "7", // 0x30
    "8", "9", ":", ";", "<", "=", ">", "?", // 0x38
    "@", "A", "B", "C", "D", "E", "F", "G", // 0x40
    "H", "I", "J", "K", "L", "M", "N", "O", // 0x48
    "P", "Q", "R", "S", "T", "U", "V", "W", // 0x50
    "X", "Y", "Z", "[", "\\", "]", "^", "_", // 0x58
    "`", "a", "b", "c", "d", "e", "f", "g", // 0x60
    "h", "i", "j", "k", "l", "m", "n", "o", // 0x68
    "p", "q", "r", "s", "t", "u", "v", "w", // 0x70
    "x", "y", "z", "{", "|", "}", "→", "←", // 0x78
];

const SMALL_DISPLAY: [&str; 0x80] = [
    "ì", "↑", "→", "↓", "←", "¿", "à", "Ø", "ø", "ò", "ù", "Ň", "Ç", "ê", "É", "é", // 0x00
    "è", "Æ", "æ", "Å", "å", "Ä", "ä", "Ö", "ö", "Ü", "ü", "°C", "°F", "ß", "£", "¥", // 0x10
    " ", "!", "\"", "#", "$", "%", "&", "'", "(", ")", "*", "+", ",", "-", ".", "/", // 0x20
    "0", "1", "2", "3", "4", "5", "6", "7", "8", "9", ":", ";", "<", "=", ">", "?", // 0x30
    "@", "A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L", "M", "N", "O", // 0x40
    "P", "Q", "R", "S", "T", "U", "V", "W", "X", "Y", "Z", "[", "\\", "]", "^", "_", // 0x50
    "`", "a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k", "l", "m", "n", "o", // 0x60
    "p", "q", "r", "s", "t", "u", "v", "w", "x", "y", "z", "{", "|", "}", "~", "░", // 0x70
];

// 11 LEDs per ring. Upper nibble selects the mode: dot, boost/cut, wrap, spread.
const VPOT_LED_RING: [&str; 0x40] = [
    "           ", "*          ", " *         ", "  *        ", // 0x00
    "   *       ", "    *      ", "     *     ", "      *    ", // 0x04
    "       *   ", "        *  ", "         * ", "          *", // 0x08
    "           ", "           ", "           ", "           ", // 0x0C
    "           ", "******     ", " *****     ", "  ****     ", // 0x10
    "   ***     ", "    **     ", "     *     ", "     **    ", // 0x14
    "     ***   ", "     ****  ", "     ***** ", "     ******", // 0x18
    "           ", "           ", "           ", "           ", // 0x1C
    "           ", "*          ", "**         ", "***        ", // 0x20
    "****       ", "*****      ", "******     ", "*******    ", // 0x24
    "********   ", "*********  ", "********** ", "***********", // 0x28
    "           ", "           ", "           ", "           ", // 0x2C
    "           ", "     *     ", "    ***    ", "   *****   ", // 0x30
    "  *******  ", " ********* ", "***********", "***********", // 0x34
    "***********", "***********", "***********", "***********", // 0x38
    "           ", "           ", "           ", "           ", // 0x3C
];

/// Lights the single LED below the ring.
pub const VPOT_CENTER_LED: u8 = 0x40;

pub struct Charset {}

impl Charset {
    pub fn time_display(code: u8) -> Option<&'static str> {
        TIME_DISPLAY.get(code as usize).copied()
    }

    pub fn large_display(code: u8) -> Option<&'static str> {
        LARGE_DISPLAY.get(code as usize).copied()
    }

    pub fn small_display(code: u8) -> Option<&'static str> {
        SMALL_DISPLAY.get(code as usize).copied()
    }

    /// The 11-LED ring pattern for a V-Pot code, `*` lit and space dark.
    pub fn vpot_led_ring(code: u8) -> &'static str {
        VPOT_LED_RING[(code & 0x3F) as usize]
    }

    pub fn vpot_center_led(code: u8) -> bool {
        code & VPOT_CENTER_LED != 0
    }

    /// Decodes a run of small display codes, substituting the placeholder for
    /// unknown codes.
    pub fn decode_small(codes: &[u8]) -> String {
        codes
            .iter()
            .map(|&c| Self::small_display(c).unwrap_or(PLACEHOLDER))
            .collect()
    }

    pub fn decode_large(codes: &[u8]) -> String {
        codes
            .iter()
            .map(|&c| Self::large_display(c).unwrap_or(PLACEHOLDER))
            .collect()
    }
}
