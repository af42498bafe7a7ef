//! Status text for the OLED.
//!
//! Three fixed lines, one per flag:
//!
//! ```text
//! (2, 0)   POCO N: ALTO | BAIXO
//! (2, 20)  TANQUE N: ALTO | BAIXO
//! (2, 40)  BOMBA AGUA: ON | OFF
//! ```
//!
//! The tank line maps the other way round from the well line: for the
//! tank, `BAIXO` is the low (needs refill) state.

use heapless::String;

use crate::app::ports::DisplayPort;
use crate::app::state::ControllerState;

/// Capacity of one display line in bytes; longer text is truncated.
pub const LINE_CAPACITY: usize = 32;

/// One rendered display line.
pub type Line = String<LINE_CAPACITY>;

/// Left margin and row positions of the three lines (pixels).
pub const LINE_X: i32 = 2;
pub const WELL_LINE_Y: i32 = 0;
pub const TANK_LINE_Y: i32 = 20;
pub const PUMP_LINE_Y: i32 = 40;

const WELL_LABEL: &str = "POCO N: ";
const TANK_LABEL: &str = "TANQUE N: ";
const PUMP_LABEL: &str = "BOMBA AGUA: ";

const LEVEL_HIGH: &str = "ALTO";
const LEVEL_LOW: &str = "BAIXO";

/// The three status lines for a given state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusText {
    pub well: Line,
    pub tank: Line,
    pub pump: Line,
}

impl StatusText {
    pub fn from_state(state: &ControllerState) -> Self {
        let well = if state.well_has_water { LEVEL_HIGH } else { LEVEL_LOW };
        let tank = if state.tank_level_low { LEVEL_LOW } else { LEVEL_HIGH };
        let pump = if state.pump_enabled { "ON" } else { "OFF" };

        Self {
            well: line(WELL_LABEL, well),
            tank: line(TANK_LABEL, tank),
            pump: line(PUMP_LABEL, pump),
        }
    }

    /// Lines paired with their (x, y) positions, top to bottom.
    pub fn placed(&self) -> [(&str, i32, i32); 3] {
        [
            (self.well.as_str(), LINE_X, WELL_LINE_Y),
            (self.tank.as_str(), LINE_X, TANK_LINE_Y),
            (self.pump.as_str(), LINE_X, PUMP_LINE_Y),
        ]
    }
}

/// Clear the display, draw the three status lines and flush.
pub fn render_status(state: &ControllerState, display: &mut impl DisplayPort) {
    let text = StatusText::from_state(state);
    display.clear();
    for (s, x, y) in text.placed() {
        display.draw_text(s, x, y);
    }
    display.flush();
}

fn line(label: &str, value: &str) -> Line {
    let mut out = Line::new();
    push_truncated(&mut out, label);
    push_truncated(&mut out, value);
    out
}

/// Append as many whole characters of `s` as fit.
pub(crate) fn push_truncated<const N: usize>(out: &mut String<N>, s: &str) {
    for c in s.chars() {
        if out.push(c).is_err() {
            break;
        }
    }
}
