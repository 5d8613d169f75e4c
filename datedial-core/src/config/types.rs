//! Configuration type definitions

use core::fmt;

use heapless::String;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::events::KnobId;
use crate::knob::debounce::DEFAULT_DEBOUNCE_MS;

/// Maximum knob name length
pub const MAX_NAME_LEN: usize = 16;

/// Highest usable GPIO number (0-29 for RP2040)
pub const MAX_PIN: u8 = 29;

/// Configuration errors
///
/// All of these are fatal: the build script refuses to generate a panel
/// from an invalid `panel.toml`, and the firmware refuses to wire a knob
/// whose configuration does not validate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// `min` is greater than `max`
    EmptyRange,
    /// `initial` lies outside `[min, max]`
    InitialOutOfRange,
    /// Same GPIO used twice (within a knob or across knobs)
    DuplicatePin(u8),
    /// GPIO number beyond the chip's pin count
    InvalidPin(u8),
    /// GPIO claimed by another peripheral (e.g. the display bus)
    ReservedPin(u8),
    /// Knob name does not fit in [`MAX_NAME_LEN`] bytes
    NameTooLong,
    /// Debounce window of zero
    ZeroDebounce,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyRange => write!(f, "range is empty (min > max)"),
            ConfigError::InitialOutOfRange => write!(f, "initial value outside [min, max]"),
            ConfigError::DuplicatePin(pin) => write!(f, "GPIO{} assigned more than once", pin),
            ConfigError::InvalidPin(pin) => {
                write!(f, "GPIO{} does not exist (max GPIO{})", pin, MAX_PIN)
            }
            ConfigError::ReservedPin(pin) => write!(f, "GPIO{} is reserved", pin),
            ConfigError::NameTooLong => {
                write!(f, "knob name longer than {} bytes", MAX_NAME_LEN)
            }
            ConfigError::ZeroDebounce => write!(f, "debounce_ms must be greater than zero"),
        }
    }
}

/// The three GPIOs of one knob
///
/// In TOML this is written as `pins = [a, b, button]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(from = "[u8; 3]", into = "[u8; 3]")
)]
pub struct PinAssignment {
    /// Rotation line A (clock)
    pub rotation_a: u8,
    /// Rotation line B (data)
    pub rotation_b: u8,
    /// Pushbutton line
    pub button: u8,
}

impl PinAssignment {
    pub const fn new(rotation_a: u8, rotation_b: u8, button: u8) -> Self {
        Self {
            rotation_a,
            rotation_b,
            button,
        }
    }

    /// Pins in `[a, b, button]` order
    pub const fn as_array(&self) -> [u8; 3] {
        [self.rotation_a, self.rotation_b, self.button]
    }
}

impl From<[u8; 3]> for PinAssignment {
    fn from(pins: [u8; 3]) -> Self {
        Self::new(pins[0], pins[1], pins[2])
    }
}

impl From<PinAssignment> for [u8; 3] {
    fn from(pins: PinAssignment) -> Self {
        pins.as_array()
    }
}

#[cfg(feature = "serde")]
fn default_debounce_ms() -> u32 {
    DEFAULT_DEBOUNCE_MS
}

/// Configuration for one knob
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct KnobConfig {
    /// Display/log label
    pub name: String<MAX_NAME_LEN>,
    /// GPIO assignment
    pub pins: PinAssignment,
    /// Lowest selectable value (inclusive)
    pub min: i32,
    /// Highest selectable value (inclusive)
    pub max: i32,
    /// Value at startup (defaults to `min`)
    #[cfg_attr(feature = "serde", serde(default))]
    pub initial: Option<i32>,
    /// Per-line debounce window (ms)
    #[cfg_attr(feature = "serde", serde(default = "default_debounce_ms"))]
    pub debounce_ms: u32,
}

impl KnobConfig {
    /// Build a knob config with the default debounce window
    pub fn new(
        name: &str,
        pins: PinAssignment,
        min: i32,
        max: i32,
        initial: Option<i32>,
    ) -> Result<Self, ConfigError> {
        let mut label = String::new();
        label
            .push_str(name)
            .map_err(|_| ConfigError::NameTooLong)?;
        Ok(Self {
            name: label,
            pins,
            min,
            max,
            initial,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
        })
    }

    /// Override the debounce window
    pub fn with_debounce_ms(mut self, debounce_ms: u32) -> Self {
        self.debounce_ms = debounce_ms;
        self
    }

    /// Value the knob starts at
    pub fn initial_value(&self) -> i32 {
        self.initial.unwrap_or(self.min)
    }

    /// Check this knob on its own
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min > self.max {
            return Err(ConfigError::EmptyRange);
        }
        let initial = self.initial_value();
        if initial < self.min || initial > self.max {
            return Err(ConfigError::InitialOutOfRange);
        }
        if self.debounce_ms == 0 {
            return Err(ConfigError::ZeroDebounce);
        }
        let pins = self.pins.as_array();
        for (i, &pin) in pins.iter().enumerate() {
            if pin > MAX_PIN {
                return Err(ConfigError::InvalidPin(pin));
            }
            if pins[..i].contains(&pin) {
                return Err(ConfigError::DuplicatePin(pin));
            }
        }
        Ok(())
    }
}

/// Configuration of the whole three-knob panel
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PanelConfig {
    pub year: KnobConfig,
    pub month: KnobConfig,
    pub day: KnobConfig,
}

impl PanelConfig {
    /// Config of one knob
    pub fn knob(&self, id: KnobId) -> &KnobConfig {
        match id {
            KnobId::Year => &self.year,
            KnobId::Month => &self.month,
            KnobId::Day => &self.day,
        }
    }

    /// Check every knob, then pin uniqueness across knobs
    pub fn validate(&self) -> Result<(), ConfigError> {
        for id in KnobId::ALL {
            self.knob(id).validate()?;
        }
        let mut seen: heapless::Vec<u8, 9> = heapless::Vec::new();
        for id in KnobId::ALL {
            for pin in self.knob(id).pins.as_array() {
                if seen.contains(&pin) {
                    return Err(ConfigError::DuplicatePin(pin));
                }
                // Capacity is exactly 3 knobs x 3 pins
                let _ = seen.push(pin);
            }
        }
        Ok(())
    }

    /// Reject knob pins that collide with pins claimed elsewhere
    pub fn check_reserved(&self, reserved: &[u8]) -> Result<(), ConfigError> {
        for id in KnobId::ALL {
            for pin in self.knob(id).pins.as_array() {
                if reserved.contains(&pin) {
                    return Err(ConfigError::ReservedPin(pin));
                }
            }
        }
        Ok(())
    }
}

impl Default for PanelConfig {
    /// Year 1965-1995, month 1-12, day 1-31, starting at 1979-11-02
    fn default() -> Self {
        fn knob(name: &str, pins: [u8; 3], min: i32, max: i32, initial: i32) -> KnobConfig {
            let mut label = String::new();
            let _ = label.push_str(name);
            KnobConfig {
                name: label,
                pins: PinAssignment::from(pins),
                min,
                max,
                initial: Some(initial),
                debounce_ms: DEFAULT_DEBOUNCE_MS,
            }
        }

        Self {
            year: knob("year", [13, 19, 26], 1965, 1995, 1979),
            month: knob("month", [16, 20, 21], 1, 12, 11),
            // The day knob turns through more detents, so it gets a shorter window
            day: knob("day", [12, 5, 6], 1, 31, 2).with_debounce_ms(100),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_panel_is_valid() {
        let config = PanelConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.year.initial_value(), 1979);
        assert_eq!(config.month.initial_value(), 11);
        assert_eq!(config.day.initial_value(), 2);
        assert_eq!(config.day.debounce_ms, 100);
        assert_eq!(config.year.debounce_ms, DEFAULT_DEBOUNCE_MS);
    }

    #[test]
    fn test_initial_defaults_to_min() {
        let knob = KnobConfig::new("month", PinAssignment::new(1, 2, 3), 1, 12, None).unwrap();
        assert_eq!(knob.initial_value(), 1);
    }

    #[test]
    fn test_name_too_long() {
        let result = KnobConfig::new(
            "a-very-long-knob-name",
            PinAssignment::new(1, 2, 3),
            1,
            12,
            None,
        );
        assert_eq!(result, Err(ConfigError::NameTooLong));
    }

    #[test]
    fn test_knob_validation() {
        let base = KnobConfig::new("day", PinAssignment::new(1, 2, 3), 1, 31, Some(2)).unwrap();
        assert_eq!(base.validate(), Ok(()));

        let mut bad = base.clone();
        bad.min = 40;
        assert_eq!(bad.validate(), Err(ConfigError::EmptyRange));

        let mut bad = base.clone();
        bad.initial = Some(32);
        assert_eq!(bad.validate(), Err(ConfigError::InitialOutOfRange));

        let bad = base.clone().with_debounce_ms(0);
        assert_eq!(bad.validate(), Err(ConfigError::ZeroDebounce));

        let mut bad = base.clone();
        bad.pins = PinAssignment::new(4, 4, 5);
        assert_eq!(bad.validate(), Err(ConfigError::DuplicatePin(4)));

        let mut bad = base;
        bad.pins = PinAssignment::new(4, 30, 5);
        assert_eq!(bad.validate(), Err(ConfigError::InvalidPin(30)));
    }

    #[test]
    fn test_pins_shared_across_knobs_rejected() {
        let mut config = PanelConfig::default();
        config.day.pins = PinAssignment::new(12, 5, 26); // 26 is the year button
        assert_eq!(config.validate(), Err(ConfigError::DuplicatePin(26)));
    }

    #[test]
    fn test_reserved_pins() {
        let config = PanelConfig::default();
        assert_eq!(config.check_reserved(&[17, 18, 19]), Err(ConfigError::ReservedPin(19)));
        assert_eq!(config.check_reserved(&[0, 1, 2, 3]), Ok(()));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_parse_panel_toml() {
        let text = r#"
            [year]
            name = "year"
            pins = [13, 19, 26]
            min = 1965
            max = 1995
            initial = 1979

            [month]
            name = "month"
            pins = [16, 20, 21]
            min = 1
            max = 12
            initial = 11

            [day]
            name = "day"
            pins = [12, 5, 6]
            min = 1
            max = 31
            initial = 2
            debounce_ms = 100
        "#;
        let config: PanelConfig = toml::from_str(text).unwrap();
        assert_eq!(config, PanelConfig::default());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_parse_applies_serde_defaults() {
        let text = r#"
            [year]
            name = "y"
            pins = [0, 1, 2]
            min = 2000
            max = 2030
            [month]
            name = "m"
            pins = [3, 4, 7]
            min = 1
            max = 12
            [day]
            name = "d"
            pins = [8, 9, 10]
            min = 1
            max = 31
        "#;
        let config: PanelConfig = toml::from_str(text).unwrap();
        assert_eq!(config.year.initial, None);
        assert_eq!(config.year.initial_value(), 2000);
        assert_eq!(config.month.debounce_ms, DEFAULT_DEBOUNCE_MS);
        assert_eq!(config.validate(), Ok(()));
    }
}
