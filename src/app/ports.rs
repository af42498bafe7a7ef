//! Port traits — the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ AppService (domain)
//! ```
//!
//! Driven adapters (buttons, buzzer, display, LED matrix, clock, event sinks)
//! implement these traits.  The [`AppService`](super::service::AppService)
//! consumes them via generics, so the domain core never touches hardware
//! directly and every timing decision can run on virtual time in tests.
//!
//! All steady-state ports are infallible by signature: the control loop has
//! no recovery path, so adapters decide locally what a failed transfer means.

use crate::render::indicator::Rgb;

// ───────────────────────────────────────────────────────────────
// Input port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// The two sampled digital lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputLine {
    /// Button A — well level sensor.
    A,
    /// Button B — tank level sensor.
    B,
}

/// Read-side port: raw line levels.
pub trait InputPort {
    /// Instantaneous raw level of `line`.
    ///
    /// Lines are pulled up and active-low: `false` means the sensor
    /// (button) is active.
    fn read_level(&mut self, line: InputLine) -> bool;
}

// ───────────────────────────────────────────────────────────────
// Output ports (driven adapters: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Buzzer output pin.
pub trait BuzzerPort {
    /// Drive the buzzer pin (`true` = sounding).
    fn set_buzzer(&mut self, on: bool);
}

/// Character display surface.
pub trait DisplayPort {
    /// Blank the whole surface.
    fn clear(&mut self);

    /// Draw `text` with its top-left corner at pixel (`x`, `y`).
    fn draw_text(&mut self, text: &str, x: i32, y: i32);

    /// Push the drawn surface to the physical device.
    fn flush(&mut self);
}

/// Addressable LED chain.
///
/// Pixels are written one per call in chain order.  There is no explicit
/// end-of-frame call; adapters latch whenever their protocol requires.
pub trait LedStripPort {
    fn write_pixel(&mut self, colour: Rgb);
}

// ───────────────────────────────────────────────────────────────
// Clock port
// ───────────────────────────────────────────────────────────────

/// Monotonic time source plus the blocking delay primitive.
///
/// Sleeping is a hard block: nothing else runs while the control loop
/// waits.  Test doubles advance virtual time instead.
pub trait ClockPort {
    /// Microseconds since boot (monotonic).
    fn now_us(&self) -> u64;

    /// Block the control loop for `ms` milliseconds.
    fn sleep_ms(&mut self, ms: u32);
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port.  Adapters decide where they go.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}
