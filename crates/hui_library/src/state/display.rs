use crate::constants::{LARGE_DISPLAY_COMPONENTS, TIME_DISPLAY_DIGITS};
use crate::charset::{blank_large_component, blank_time_digit};

/// The 40x2 character display, kept as 8 components of 10 characters.
/// Components 0-3 make up the top line, 4-7 the bottom line.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LargeDisplay {
    components: [String; LARGE_DISPLAY_COMPONENTS],
}

impl Default for LargeDisplay {
    fn default() -> Self {
        Self {
            components: std::array::from_fn(|_| blank_large_component()),
        }
    }
}

impl LargeDisplay {
    pub fn components(&self) -> &[String; LARGE_DISPLAY_COMPONENTS] {
        &self.components
    }

    /// Missing components are blanked, anything past the eighth is dropped.
    pub fn set_components<I, S>(&mut self, components: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut components = components.into_iter().map(Into::into);
        self.components = std::array::from_fn(|_| components.next().unwrap_or_else(blank_large_component));
    }

    pub fn top(&self) -> String {
        self.components[..4].concat()
    }

    pub fn bottom(&self) -> String {
        self.components[4..].concat()
    }
}

/// The 8-digit time display.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TimeDisplay {
    digits: [String; TIME_DISPLAY_DIGITS],
}

impl Default for TimeDisplay {
    fn default() -> Self {
        Self {
            digits: std::array::from_fn(|_| blank_time_digit()),
        }
    }
}

impl TimeDisplay {
    pub fn digits(&self) -> &[String; TIME_DISPLAY_DIGITS] {
        &self.digits
    }

    pub fn set_digits(&mut self, digits: [String; TIME_DISPLAY_DIGITS]) {
        self.digits = digits;
    }

    pub fn text(&self) -> String {
        self.digits.concat()
    }
}
