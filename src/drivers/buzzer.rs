//! Active buzzer on a plain digital output.
//!
//! The buzzer has its own oscillator, so driving the pin HIGH is enough to
//! sound it; no PWM channel is involved.  The driver remembers the level it
//! last wrote successfully so callers never need to read the pin back.

use embedded_hal::digital::OutputPin;
use log::warn;

pub struct BuzzerDriver<P> {
    pin: P,
    gpio: i32,
    on: bool,
}

impl<P: OutputPin> BuzzerDriver<P> {
    /// Wrap an output pin and drive it LOW.
    pub fn new(pin: P, gpio: i32) -> Self {
        let mut driver = Self {
            pin,
            gpio,
            on: true,
        };
        driver.set(false);
        driver
    }

    /// Drive the buzzer.  On a write error the tracked level is unchanged.
    pub fn set(&mut self, on: bool) {
        let result = if on {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        };
        match result {
            Ok(()) => self.on = on,
            Err(e) => warn!("Buzzer GPIO{} write failed: {:?}", self.gpio, e),
        }
    }

    pub fn is_on(&self) -> bool {
        self.on
    }

    pub fn gpio(&self) -> i32 {
        self.gpio
    }
}
