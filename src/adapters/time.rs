//! Monotonic clock and blocking delay.
//!
//! Implements [`ClockPort`] on top of two pieces:
//!
//! - **time base** — `esp_timer_get_time()` on ESP-IDF (µs since boot,
//!   monotonic); `std::time::Instant` on host.
//! - **delay** — any `embedded-hal` [`DelayNs`].  Firmware passes
//!   `esp_idf_hal::delay::FreeRtos`; host simulation passes [`StdDelay`].

use embedded_hal::delay::DelayNs;

use crate::app::ports::ClockPort;

/// Time adapter for the control loop.
pub struct SystemClock<D> {
    delay: D,
    #[cfg(not(target_os = "espidf"))]
    start: std::time::Instant,
}

impl<D: DelayNs> SystemClock<D> {
    pub fn new(delay: D) -> Self {
        Self {
            delay,
            #[cfg(not(target_os = "espidf"))]
            start: std::time::Instant::now(),
        }
    }
}

impl<D: DelayNs> ClockPort for SystemClock<D> {
    /// Microseconds since boot (monotonic).
    #[cfg(target_os = "espidf")]
    fn now_us(&self) -> u64 {
        // SAFETY: esp_timer_get_time reads the free-running system timer;
        // no preconditions beyond the timer service started by the runtime.
        (unsafe { esp_idf_svc::sys::esp_timer_get_time() }) as u64
    }

    /// Microseconds since construction (monotonic).
    #[cfg(not(target_os = "espidf"))]
    fn now_us(&self) -> u64 {
        self.start.elapsed().as_micros() as u64
    }

    fn sleep_ms(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }
}

/// Thread-sleep delay for host builds.
#[cfg(not(target_os = "espidf"))]
#[derive(Debug, Default, Clone, Copy)]
pub struct StdDelay;

#[cfg(not(target_os = "espidf"))]
impl DelayNs for StdDelay {
    fn delay_ns(&mut self, ns: u32) {
        std::thread::sleep(std::time::Duration::from_nanos(u64::from(ns)));
    }
}
