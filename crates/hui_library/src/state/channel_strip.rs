use crate::charset::Charset;
use crate::constants::{FADER_MAX, LEVEL_METER_MAX, NAME_WIDTH};
use crate::event::Side;
use crate::parameter::ChannelParameter;

use super::fixed_width;

/// Motorized fader.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Fader {
    level: u16,
    pub touched: bool,
}

impl Fader {
    pub fn level(&self) -> u16 {
        self.level
    }

    /// Levels above 16383 are clamped.
    pub fn set_level(&mut self, level: u16) {
        self.level = level.min(FADER_MAX);
    }

    pub fn level_unit_interval(&self) -> f64 {
        f64::from(self.level) / f64::from(FADER_MAX)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct StereoLevelMeter {
    pub left: u8,
    pub right: u8,
}

impl StereoLevelMeter {
    pub fn level(&self, side: Side) -> u8 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn set_level(&mut self, side: Side, level: u8) {
        let level = level.min(LEVEL_METER_MAX);
        match side {
            Side::Left => self.left = level,
            Side::Right => self.right = level,
        }
    }
}

/// One channel strip and its components.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChannelStrip {
    pub level_meter: StereoLevelMeter,
    pub record_ready: bool,
    pub insert: bool,
    pub vpot_select: bool,
    /// Last V-Pot LED ring code from the host.
    pub vpot: u8,
    pub auto: bool,
    pub solo: bool,
    pub mute: bool,
    pub select: bool,
    name: String,
    pub fader: Fader,
}

impl Default for ChannelStrip {
    fn default() -> Self {
        Self {
            level_meter: StereoLevelMeter::default(),
            record_ready: false,
            insert: false,
            vpot_select: false,
            vpot: 0,
            auto: false,
            solo: false,
            mute: false,
            select: false,
            name: fixed_width("", NAME_WIDTH),
            fader: Fader::default(),
        }
    }
}

impl ChannelStrip {
    /// The 4-character scribble strip.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Pads with spaces or truncates to exactly 4 characters.
    pub fn set_name(&mut self, text: &str) {
        self.name = fixed_width(text, NAME_WIDTH);
    }

    pub fn vpot_led_ring(&self) -> &'static str {
        Charset::vpot_led_ring(self.vpot)
    }

    pub fn state(&self, param: ChannelParameter) -> bool {
        match param {
            ChannelParameter::RecordReady => self.record_ready,
            ChannelParameter::Insert => self.insert,
            ChannelParameter::VPotSelect => self.vpot_select,
            ChannelParameter::Auto => self.auto,
            ChannelParameter::Solo => self.solo,
            ChannelParameter::Mute => self.mute,
            ChannelParameter::Select => self.select,
            ChannelParameter::FaderTouched => self.fader.touched,
        }
    }

    pub fn set_state(&mut self, param: ChannelParameter, state: bool) {
        match param {
            ChannelParameter::RecordReady => self.record_ready = state,
            ChannelParameter::Insert => self.insert = state,
            ChannelParameter::VPotSelect => self.vpot_select = state,
            ChannelParameter::Auto => self.auto = state,
            ChannelParameter::Solo => self.solo = state,
            ChannelParameter::Mute => self.mute = state,
            ChannelParameter::Select => self.select = state,
            ChannelParameter::FaderTouched => self.fader.touched = state,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_is_always_four_characters() {
        let mut strip = ChannelStrip::default();
        assert_eq!(strip.name(), "    ");
        strip.set_name("AB");
        assert_eq!(strip.name(), "AB  ");
        strip.set_name("ABCDE");
        assert_eq!(strip.name(), "ABCD");
        strip.set_name("°CÜx");
        assert_eq!(strip.name(), "°CÜx");
    }

    #[test]
    fn fader_clamps() {
        let mut fader = Fader::default();
        fader.set_level(20000);
        assert_eq!(fader.level(), 16383);
        assert_eq!(fader.level_unit_interval(), 1.0);
    }

    #[test]
    fn meter_sides() {
        let mut meter = StereoLevelMeter::default();
        meter.set_level(Side::Right, 9);
        meter.set_level(Side::Left, 40);
        assert_eq!(meter.level(Side::Right), 9);
        assert_eq!(meter.left, 15);
    }

    #[test]
    fn generic_switch_access() {
        let mut strip = ChannelStrip::default();
        for &param in ChannelParameter::ALL {
            strip.set_state(param, true);
            assert!(strip.state(param));
        }
        assert!(strip.fader.touched);
    }
}
