//! System configuration parameters
//!
//! All tunable parameters for the WellPump controller.  There is no runtime
//! configuration source: the defaults below are the firmware's compile-time
//! thresholds, gathered in one struct so the control loop can be built and
//! tested with alternative timings.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Control loop period (milliseconds).
pub const DEFAULT_TICK_INTERVAL_MS: u32 = 100;
/// Blocking debounce window after a detected button press (milliseconds).
pub const DEFAULT_DEBOUNCE_MS: u32 = 200;
/// Buzzer half-period while the pump runs (microseconds).
pub const DEFAULT_BUZZER_TOGGLE_INTERVAL_US: u64 = 100_000;
/// Ticks between periodic status reports (50 × 100 ms = 5 s).
pub const DEFAULT_STATUS_INTERVAL_TICKS: u32 = 50;

/// Core system configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemConfig {
    // --- Timing ---
    /// Sleep between control ticks (milliseconds)
    pub tick_interval_ms: u32,
    /// Debounce window applied after each detected press (milliseconds)
    pub debounce_ms: u32,
    /// Minimum time between buzzer flips while pumping (microseconds)
    pub buzzer_toggle_interval_us: u64,

    // --- Initial sensor state ---
    /// Well starts with enough water (level high)
    pub initial_well_has_water: bool,
    /// Tank starts below its refill threshold
    pub initial_tank_level_low: bool,

    // --- Diagnostics ---
    /// Ticks between status reports on the event sink (0 = disabled)
    pub status_interval_ticks: u32,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            buzzer_toggle_interval_us: DEFAULT_BUZZER_TOGGLE_INTERVAL_US,

            initial_well_has_water: true,
            initial_tank_level_low: false,

            status_interval_ticks: DEFAULT_STATUS_INTERVAL_TICKS,
        }
    }
}

impl SystemConfig {
    /// Check that every timing parameter is usable by the control loop.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::ValidationFailed("tick_interval_ms must be > 0"));
        }
        if self.buzzer_toggle_interval_us == 0 {
            return Err(ConfigError::ValidationFailed(
                "buzzer_toggle_interval_us must be > 0",
            ));
        }
        // A window shorter than one tick would let a held button re-arm
        // between samples and chatter.
        if self.debounce_ms < self.tick_interval_ms {
            return Err(ConfigError::ValidationFailed(
                "debounce_ms must be >= tick_interval_ms",
            ));
        }
        Ok(())
    }
}
