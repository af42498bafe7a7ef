//! Status indicators on the 5×5 LED matrix.
//!
//! Only the last three pixels of the first row carry information; every
//! other pixel stays dark.
//!
//! | Index | Meaning | Colour                          |
//! |-------|---------|---------------------------------|
//! | 2     | well    | green = has water, red = low    |
//! | 3     | tank    | green = level ok, red = low     |
//! | 4     | pump    | blue = running, off = stopped   |
//!
//! The palette runs at the lowest non-zero channel value; the matrix sits
//! next to the OLED and anything brighter washes it out.

use crate::app::ports::LedStripPort;
use crate::app::state::ControllerState;
use crate::pins::LED_MATRIX_PIXELS;

/// Colour as (R, G, B) tuple, each 0–255.
pub type Rgb = (u8, u8, u8);

pub const RED: Rgb = (1, 0, 0);
pub const GREEN: Rgb = (0, 1, 0);
pub const BLUE: Rgb = (0, 0, 1);
pub const OFF: Rgb = (0, 0, 0);

pub const WELL_PIXEL: usize = 2;
pub const TANK_PIXEL: usize = 3;
pub const PUMP_PIXEL: usize = 4;

/// One full matrix frame, row-major.
pub type Frame = [Rgb; LED_MATRIX_PIXELS];

/// Map the three flags onto a matrix frame.
pub fn indicator_frame(state: &ControllerState) -> Frame {
    let mut frame = [OFF; LED_MATRIX_PIXELS];
    frame[WELL_PIXEL] = if state.well_has_water { GREEN } else { RED };
    frame[TANK_PIXEL] = if state.tank_level_low { RED } else { GREEN };
    frame[PUMP_PIXEL] = if state.pump_enabled { BLUE } else { OFF };
    frame
}

/// Stream the indicator frame to the matrix, index 0 first.
pub fn render_indicators(state: &ControllerState, strip: &mut impl LedStripPort) {
    for colour in indicator_frame(state) {
        strip.write_pixel(colour);
    }
}
