//! Digital level switch on a pulled-up GPIO.
//!
//! The demo board uses push-buttons in place of float switches.  Each one
//! shorts its line to ground when pressed, so the raw level is HIGH at rest
//! and LOW while active.  This driver only reports the raw level; edge
//! detection and debounce live in [`sampler`](super::sampler).

use embedded_hal::digital::InputPin;
use log::warn;

pub struct LevelSwitch<P> {
    pin: P,
    gpio: i32,
    read_errors: u32,
}

impl<P: InputPin> LevelSwitch<P> {
    /// Wrap an already-configured input pin.  `gpio` is only used in logs.
    pub fn new(pin: P, gpio: i32) -> Self {
        Self {
            pin,
            gpio,
            read_errors: 0,
        }
    }

    /// Raw line level (`true` = HIGH = released).
    ///
    /// A failed read is reported as HIGH so a flaky pin can never
    /// fabricate a press.
    pub fn read_level(&mut self) -> bool {
        match self.pin.is_high() {
            Ok(level) => level,
            Err(e) => {
                self.read_errors = self.read_errors.saturating_add(1);
                warn!("GPIO{} read failed: {:?}", self.gpio, e);
                true
            }
        }
    }

    /// GPIO number this switch is attached to.
    pub fn gpio(&self) -> i32 {
        self.gpio
    }

    /// Number of failed reads since construction.
    pub fn read_errors(&self) -> u32 {
        self.read_errors
    }
}
