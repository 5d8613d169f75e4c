//! Knob events
//!
//! Events flow from the per-knob input tasks to the task that owns the
//! knob panel. Input tasks never write knob values themselves.

use core::fmt;

/// Identity of one of the three knobs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KnobId {
    Year,
    Month,
    Day,
}

impl KnobId {
    /// All knobs, in panel order
    pub const ALL: [KnobId; 3] = [KnobId::Year, KnobId::Month, KnobId::Day];

    /// Default label for this knob
    pub fn label(self) -> &'static str {
        match self {
            KnobId::Year => "year",
            KnobId::Month => "month",
            KnobId::Day => "day",
        }
    }
}

impl fmt::Display for KnobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A confirmed rotation step (one detent)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Step {
    /// Line A fell while line B was stably high
    Increment,
    /// Line B fell while line A was stably high
    Decrement,
}

impl Step {
    /// Returns the step as a signed delta (+1 or -1)
    pub fn delta(self) -> i32 {
        match self {
            Step::Increment => 1,
            Step::Decrement => -1,
        }
    }
}

/// What happened on a knob
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KnobAction {
    /// Rotation by one detent
    Step(Step),
    /// Button edge (press or release) outside the debounce window
    Press,
}

/// Event sent from a knob input task to the panel owner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KnobEvent {
    /// Knob that produced the event
    pub knob: KnobId,
    /// What happened
    pub action: KnobAction,
    /// Timestamp of the triggering edge (ms since boot)
    pub at_ms: u64,
}

impl KnobEvent {
    /// Rotation event
    pub fn step(knob: KnobId, step: Step, at_ms: u64) -> Self {
        Self {
            knob,
            action: KnobAction::Step(step),
            at_ms,
        }
    }

    /// Button event
    pub fn press(knob: KnobId, at_ms: u64) -> Self {
        Self {
            knob,
            action: KnobAction::Press,
            at_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_delta() {
        assert_eq!(Step::Increment.delta(), 1);
        assert_eq!(Step::Decrement.delta(), -1);
    }

    #[test]
    fn test_event_constructors() {
        assert_eq!(
            KnobEvent::step(KnobId::Month, Step::Decrement, 40).action,
            KnobAction::Step(Step::Decrement)
        );
        let press = KnobEvent::press(KnobId::Day, 90);
        assert_eq!((press.knob, press.action, press.at_ms), (KnobId::Day, KnobAction::Press, 90));
    }
}
