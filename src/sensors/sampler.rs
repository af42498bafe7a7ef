//! Button sampler: press-edge detection with a blocking debounce window.
//!
//! Each control tick samples both raw lines once.  A line that reads active
//! (LOW) now but did not at the previous sample is a press edge, and each
//! edge inverts its logical sensor flag exactly once:
//!
//! | Line | Flag inverted      |
//! |------|--------------------|
//! | A    | `well_has_water`   |
//! | B    | `tank_level_low`   |
//!
//! After any edge the sampler blocks for the debounce window before handing
//! control back, so contact bounce in the first milliseconds after a press
//! is never sampled.  Holding a button down keeps the line active across
//! samples and therefore never produces a second edge.
//!
//! Both lines are read before either flag changes.  Simultaneous presses
//! invert both flags in the same tick and share one debounce wait; the two
//! windows run concurrently and do not extend each other.

use log::debug;

use crate::app::ports::{ClockPort, InputLine, InputPort};
use crate::app::state::ControllerState;

/// Flags inverted by one sampling pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Toggles {
    pub well: bool,
    pub tank: bool,
}

impl Toggles {
    pub fn any(self) -> bool {
        self.well || self.tank
    }
}

/// Per-line edge memory.  Lines start released.
#[derive(Debug, Default)]
pub struct InputSampler {
    a_active: bool,
    b_active: bool,
}

impl InputSampler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sample both lines, invert the flags of lines that just became active,
    /// then hold for `debounce_ms` if anything toggled.
    pub fn sample(
        &mut self,
        state: &mut ControllerState,
        inputs: &mut impl InputPort,
        clock: &mut impl ClockPort,
        debounce_ms: u32,
    ) -> Toggles {
        let toggles = Toggles {
            well: self.press_edge(InputLine::A, inputs),
            tank: self.press_edge(InputLine::B, inputs),
        };

        if toggles.well {
            state.well_has_water = !state.well_has_water;
        }
        if toggles.tank {
            state.tank_level_low = !state.tank_level_low;
        }

        if toggles.any() {
            debug!("sampler: {:?}, debouncing {}ms", toggles, debounce_ms);
            clock.sleep_ms(debounce_ms);
        }

        toggles
    }

    /// Whether `line` is currently held, as of the last sample.
    pub fn is_held(&self, line: InputLine) -> bool {
        match line {
            InputLine::A => self.a_active,
            InputLine::B => self.b_active,
        }
    }

    fn press_edge(&mut self, line: InputLine, inputs: &mut impl InputPort) -> bool {
        // Active-low: a pressed button pulls the line to ground.
        let active = !inputs.read_level(line);
        let held = match line {
            InputLine::A => &mut self.a_active,
            InputLine::B => &mut self.b_active,
        };
        let edge = active && !*held;
        *held = active;
        edge
    }
}
