//! Async knob input
//!
//! Watches the three lines of one encoder and turns their edges into
//! [`KnobEvent`]s. Rotation lines are awaited for falling edges, the
//! button for any edge. After an accepted rotation edge the far line is
//! sampled, the driver sleeps for [`SETTLE_MS`], and the far line is
//! sampled again before the decoder decides.
//!
//! The settle sleep is an `await`, so other knobs keep running while one
//! of them is settling.

use core::fmt;

use datedial_core::events::KnobEvent;
use datedial_core::knob::{KnobSense, Level, Line, SETTLE_MS};
use datedial_core::traits::Clock;
use embassy_futures::select::{select3, Either3};
use embedded_hal::digital::{ErrorType, InputPin};
use embedded_hal_async::delay::DelayNs;
use embedded_hal_async::digital::Wait;

/// Errors from the knob input driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputError<E> {
    /// Reading or waiting on a pin failed
    Pin(E),
}

impl<E: fmt::Debug> fmt::Display for InputError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::Pin(e) => write!(f, "pin error: {:?}", e),
        }
    }
}

enum Edge {
    Rotation(Line),
    Button,
}

/// One encoder's rotation lines, button, and edge state
pub struct KnobInput<A, B, S, D, C> {
    sense: KnobSense,
    a: A,
    b: B,
    button: S,
    delay: D,
    clock: C,
}

impl<A, B, S, D, C, E> KnobInput<A, B, S, D, C>
where
    A: InputPin + Wait + ErrorType<Error = E>,
    B: InputPin + Wait + ErrorType<Error = E>,
    S: Wait + ErrorType<Error = E>,
    D: DelayNs,
    C: Clock,
{
    /// Create a knob input
    ///
    /// # Arguments
    /// - `sense`: Debounce and decoder state for this knob
    /// - `a`, `b`: Rotation lines (pulled up, fall on a detent)
    /// - `button`: Pushbutton line
    /// - `delay`: Timer used for the settle wait
    /// - `clock`: Timestamp source for debouncing
    pub fn new(sense: KnobSense, a: A, b: B, button: S, delay: D, clock: C) -> Self {
        Self {
            sense,
            a,
            b,
            button,
            delay,
            clock,
        }
    }

    /// Edge state of this input
    pub fn sense(&self) -> &KnobSense {
        &self.sense
    }

    /// Wait for the next edge on any of the knob's lines and decode it
    ///
    /// Returns `Ok(None)` when the edge was rejected (inside the debounce
    /// window, or the far line did not read high on both samples).
    pub async fn next_event(&mut self) -> Result<Option<KnobEvent>, InputError<E>> {
        let edge = match select3(
            self.a.wait_for_falling_edge(),
            self.b.wait_for_falling_edge(),
            self.button.wait_for_any_edge(),
        )
        .await
        {
            Either3::First(r) => r.map(|_| Edge::Rotation(Line::A)),
            Either3::Second(r) => r.map(|_| Edge::Rotation(Line::B)),
            Either3::Third(r) => r.map(|_| Edge::Button),
        }
        .map_err(InputError::Pin)?;

        let now_ms = self.clock.now_ms();
        match edge {
            Edge::Rotation(line) => {
                let far = line.far();
                let before = self.read_level(far)?;
                let Some(pending) = self.sense.rotation_edge(line, now_ms, before) else {
                    return Ok(None);
                };

                self.delay.delay_ms(SETTLE_MS).await;

                let after = self.read_level(far)?;
                Ok(self.sense.settle(pending, after))
            }
            Edge::Button => Ok(self.sense.button_edge(now_ms)),
        }
    }

    fn read_level(&mut self, line: Line) -> Result<Level, InputError<E>> {
        let high = match line {
            Line::A => self.a.is_high(),
            Line::B => self.b.is_high(),
        };
        high.map(Level::from).map_err(InputError::Pin)
    }
}
