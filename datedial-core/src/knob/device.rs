//! Knob: a named bounded value driven by an encoder and a button
//!
//! A knob has two halves built from the same [`KnobConfig`]:
//!
//! - [`Knob`] holds the value and press bookkeeping. It is owned by the
//!   knob panel, which is the only writer of knob values.
//! - [`KnobSense`] holds the decoder and push detector debounce state. It
//!   lives with the input task that watches the knob's pins and turns
//!   edges into [`KnobEvent`]s.
//!
//! Neither half is ever shared between knobs.

use core::fmt;

use heapless::String;

use super::bounded::BoundedValue;
use super::push::PushDetector;
use super::quadrature::{Level, Line, PendingEdge, QuadratureDecoder};
use crate::config::{ConfigError, KnobConfig, PinAssignment, MAX_NAME_LEN};
use crate::events::{KnobEvent, KnobId, Step};

/// Outcome of a day correction on a knob
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DayRepair {
    /// Value already valid, nothing written
    Unchanged,
    /// Value saturated at a month-table limit
    Clamped { from: i32, to: i32 },
    /// Value stepped back by one
    Decremented { from: i32, to: i32 },
}

/// Value half of a knob
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Knob {
    id: KnobId,
    name: String<MAX_NAME_LEN>,
    pins: PinAssignment,
    value: BoundedValue,
    debounce_ms: u32,
    last_press_ms: Option<u64>,
}

impl Knob {
    /// Build a knob from its validated configuration
    pub fn new(id: KnobId, config: &KnobConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            id,
            name: config.name.clone(),
            pins: config.pins,
            value: BoundedValue::new(config.min, config.max, config.initial)?,
            debounce_ms: config.debounce_ms,
            last_press_ms: None,
        })
    }

    /// Edge half for the input task watching this knob
    pub fn sense(&self) -> KnobSense {
        KnobSense::new(self.id, self.debounce_ms)
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Current value
    pub fn value(&self) -> i32 {
        self.value.get()
    }

    /// Store a value, clamped to the knob's range
    pub fn set_value(&mut self, value: i32) {
        self.value.set(value);
    }

    /// Apply a confirmed rotation step; returns the new value
    pub fn apply_step(&mut self, step: Step) -> i32 {
        self.value.step(step.delta());
        self.value.get()
    }

    /// Note a button notification
    pub fn record_press(&mut self, at_ms: u64) {
        self.last_press_ms = Some(at_ms);
    }

    /// Timestamp of the latest button notification
    pub fn last_press_ms(&self) -> Option<u64> {
        self.last_press_ms
    }

    /// Saturate the value at `limit` if it is above it
    pub fn clamp_to(&mut self, limit: i32) -> DayRepair {
        let from = self.value.get();
        if from <= limit {
            return DayRepair::Unchanged;
        }
        self.value.set(limit);
        DayRepair::Clamped {
            from,
            to: self.value.get(),
        }
    }

    /// Step the value back by one if it exceeds `max_day`
    ///
    /// This is the day knob's side of date assembly: a day that is too
    /// large for the selected month rolls back by a single step. It does
    /// not loop; callers must re-check the result.
    pub fn repair_day_if_invalid(&mut self, max_day: i32) -> DayRepair {
        let from = self.value.get();
        if from <= max_day {
            return DayRepair::Unchanged;
        }
        self.value.set(from - 1);
        DayRepair::Decremented {
            from,
            to: self.value.get(),
        }
    }
}

impl fmt::Display for Knob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: pins a:{}, b:{}, sw:{}. Value: {}",
            self.name,
            self.pins.rotation_a,
            self.pins.rotation_b,
            self.pins.button,
            self.value.get()
        )
    }
}

/// Edge half of a knob
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KnobSense {
    id: KnobId,
    decoder: QuadratureDecoder,
    push: PushDetector,
}

impl KnobSense {
    pub const fn new(id: KnobId, debounce_ms: u32) -> Self {
        Self {
            id,
            decoder: QuadratureDecoder::new(debounce_ms),
            push: PushDetector::new(debounce_ms),
        }
    }

    pub fn id(&self) -> KnobId {
        self.id
    }

    /// First half of rotation handling: debounce and first far-line sample
    pub fn rotation_edge(&mut self, line: Line, now_ms: u64, far_level: Level) -> Option<PendingEdge> {
        self.decoder.begin(line, now_ms, far_level)
    }

    /// Second half of rotation handling, after the settle wait
    pub fn settle(&self, pending: PendingEdge, far_after: Level) -> Option<KnobEvent> {
        self.decoder
            .resolve(pending, far_after)
            .map(|step| KnobEvent::step(self.id, step, pending.at_ms))
    }

    /// Button edge handling
    pub fn button_edge(&mut self, now_ms: u64) -> Option<KnobEvent> {
        self.push
            .on_edge(now_ms)
            .map(|press| KnobEvent::press(self.id, press.at_ms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PanelConfig;
    use crate::events::KnobAction;
    use std::string::ToString;

    fn day_knob(value: i32) -> Knob {
        let mut knob = Knob::new(KnobId::Day, &PanelConfig::default().day).unwrap();
        knob.set_value(value);
        knob
    }

    #[test]
    fn test_knob_from_config() {
        let config = PanelConfig::default();
        let mut year = Knob::new(KnobId::Year, &config.year).unwrap();
        assert_eq!(year.value(), 1979);
        assert_eq!(year.name(), "year");
        year.set_value(1900);
        assert_eq!(year.value(), 1965);
        year.set_value(2100);
        assert_eq!(year.value(), 1995);
        year.set_value(1979);
        assert_eq!(year.last_press_ms(), None);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = PanelConfig::default().month;
        config.initial = Some(13);
        assert_eq!(
            Knob::new(KnobId::Month, &config),
            Err(ConfigError::InitialOutOfRange)
        );
    }

    #[test]
    fn test_apply_step_clamps() {
        let mut knob = day_knob(31);
        assert_eq!(knob.apply_step(Step::Increment), 31);
        assert_eq!(knob.apply_step(Step::Decrement), 30);
        knob.set_value(1);
        assert_eq!(knob.apply_step(Step::Decrement), 1);
    }

    #[test]
    fn test_repair_day_decrements_once() {
        let mut knob = day_knob(30);
        assert_eq!(
            knob.repair_day_if_invalid(28),
            DayRepair::Decremented { from: 30, to: 29 }
        );
        // Still above the limit: a single call never loops
        assert_eq!(knob.value(), 29);
    }

    #[test]
    fn test_repair_day_leaves_valid_value() {
        let mut knob = day_knob(28);
        assert_eq!(knob.repair_day_if_invalid(28), DayRepair::Unchanged);
        assert_eq!(knob.value(), 28);
    }

    #[test]
    fn test_clamp_to() {
        let mut knob = day_knob(31);
        assert_eq!(knob.clamp_to(30), DayRepair::Clamped { from: 31, to: 30 });
        assert_eq!(knob.clamp_to(30), DayRepair::Unchanged);
    }

    #[test]
    fn test_display() {
        let knob = day_knob(2);
        assert_eq!(knob.to_string(), "day: pins a:12, b:5, sw:6. Value: 2");
    }

    #[test]
    fn test_sense_emits_events() {
        let knob = day_knob(2);
        let mut sense = knob.sense();
        assert_eq!(sense.id(), KnobId::Day);

        let pending = sense.rotation_edge(Line::B, 1_000, Level::High).unwrap();
        let event = sense.settle(pending, Level::High).unwrap();
        assert_eq!(event, KnobEvent::step(KnobId::Day, Step::Decrement, 1_000));

        let press = sense.button_edge(2_000).unwrap();
        assert_eq!(press.action, KnobAction::Press);
        // Day knob debounce is 100 ms
        assert!(sense.button_edge(2_050).is_none());
        assert!(sense.button_edge(2_100).is_some());
    }
}
