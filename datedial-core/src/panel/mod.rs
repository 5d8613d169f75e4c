//! Knob panel
//!
//! The panel owns the year, month and day knobs and is the only writer of
//! their values. Rotation and button events from the input tasks are
//! applied here, and date assembly (which may correct the day knob) runs
//! here too. Since both paths need `&mut KnobPanel`, a user's turn of the
//! day knob and a concurrent day repair are serialized by construction.

pub mod watch;

pub use watch::{DateChange, DateWatch, POLL_INTERVAL_MS};

use crate::calendar::{Assembled, AssemblyError, DateAssembler};
use crate::config::{ConfigError, PanelConfig};
use crate::events::{KnobAction, KnobEvent, KnobId};
use crate::knob::Knob;

/// What applying an event did to the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Applied {
    /// Knob value changed (old, new)
    Moved { knob: KnobId, from: i32, to: i32 },
    /// Rotation at a range end; value unchanged
    Saturated { knob: KnobId, value: i32 },
    /// Button notification recorded
    Pressed { knob: KnobId, at_ms: u64 },
}

/// The three knobs of the date picker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnobPanel {
    year: Knob,
    month: Knob,
    day: Knob,
}

impl KnobPanel {
    /// Build all three knobs from a validated panel configuration
    pub fn new(config: &PanelConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            year: Knob::new(KnobId::Year, &config.year)?,
            month: Knob::new(KnobId::Month, &config.month)?,
            day: Knob::new(KnobId::Day, &config.day)?,
        })
    }

    /// Borrow a knob
    pub fn knob(&self, id: KnobId) -> &Knob {
        match id {
            KnobId::Year => &self.year,
            KnobId::Month => &self.month,
            KnobId::Day => &self.day,
        }
    }

    /// Borrow a knob mutably
    pub fn knob_mut(&mut self, id: KnobId) -> &mut Knob {
        match id {
            KnobId::Year => &mut self.year,
            KnobId::Month => &mut self.month,
            KnobId::Day => &mut self.day,
        }
    }

    /// Apply one event from an input task
    pub fn apply(&mut self, event: KnobEvent) -> Applied {
        let knob = self.knob_mut(event.knob);
        match event.action {
            KnobAction::Step(step) => {
                let from = knob.value();
                let to = knob.apply_step(step);
                if from == to {
                    Applied::Saturated {
                        knob: event.knob,
                        value: to,
                    }
                } else {
                    Applied::Moved {
                        knob: event.knob,
                        from,
                        to,
                    }
                }
            }
            KnobAction::Press => {
                knob.record_press(event.at_ms);
                Applied::Pressed {
                    knob: event.knob,
                    at_ms: event.at_ms,
                }
            }
        }
    }

    /// Assemble the current date, correcting the day knob if necessary
    pub fn assemble(&mut self) -> Result<Assembled, AssemblyError> {
        DateAssembler::assemble(&self.year, &self.month, &mut self.day)
    }
}
