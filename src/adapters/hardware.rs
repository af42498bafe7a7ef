//! Hardware adapter — bridges peripherals to domain port traits.
//!
//! Owns both level switches, the buzzer and the two presentation buffers,
//! exposing them through [`InputPort`], [`BuzzerPort`], [`DisplayPort`] and
//! [`LedStripPort`].  Pins are generic `embedded-hal` types, so the same
//! adapter runs on ESP-IDF `PinDriver`s and on host test doubles.

use embedded_hal::digital::{InputPin, OutputPin};

use crate::app::ports::{BuzzerPort, DisplayPort, InputLine, InputPort, LedStripPort};
use crate::drivers::buzzer::BuzzerDriver;
use crate::drivers::led_matrix::LedMatrix;
use crate::drivers::text_display::TextDisplay;
use crate::render::indicator::Rgb;
use crate::sensors::LevelSwitch;

/// Concrete adapter that combines all hardware behind port traits.
pub struct HardwareAdapter<A, B, Z> {
    well_switch: LevelSwitch<A>,
    tank_switch: LevelSwitch<B>,
    buzzer: BuzzerDriver<Z>,
    display: TextDisplay,
    matrix: LedMatrix,
}

impl<A, B, Z> HardwareAdapter<A, B, Z>
where
    A: InputPin,
    B: InputPin,
    Z: OutputPin,
{
    pub fn new(
        well_switch: LevelSwitch<A>,
        tank_switch: LevelSwitch<B>,
        buzzer: BuzzerDriver<Z>,
        display: TextDisplay,
        matrix: LedMatrix,
    ) -> Self {
        Self {
            well_switch,
            tank_switch,
            buzzer,
            display,
            matrix,
        }
    }

    pub fn display(&self) -> &TextDisplay {
        &self.display
    }

    pub fn matrix(&self) -> &LedMatrix {
        &self.matrix
    }

    pub fn buzzer(&self) -> &BuzzerDriver<Z> {
        &self.buzzer
    }
}

// ── InputPort implementation ──────────────────────────────────

impl<A: InputPin, B: InputPin, Z> InputPort for HardwareAdapter<A, B, Z> {
    fn read_level(&mut self, line: InputLine) -> bool {
        match line {
            InputLine::A => self.well_switch.read_level(),
            InputLine::B => self.tank_switch.read_level(),
        }
    }
}

// ── Output port implementations ───────────────────────────────

impl<A, B, Z: OutputPin> BuzzerPort for HardwareAdapter<A, B, Z> {
    fn set_buzzer(&mut self, on: bool) {
        // Skip redundant pin writes; the driver tracks the level.
        if self.buzzer.is_on() != on {
            self.buzzer.set(on);
        }
    }
}

impl<A, B, Z> DisplayPort for HardwareAdapter<A, B, Z> {
    fn clear(&mut self) {
        self.display.clear();
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32) {
        self.display.draw_text(text, x, y);
    }

    fn flush(&mut self) {
        self.display.flush();
    }
}

impl<A, B, Z> LedStripPort for HardwareAdapter<A, B, Z> {
    fn write_pixel(&mut self, colour: Rgb) {
        self.matrix.write_pixel(colour);
    }
}
