//! Controller state threaded through every component.
//!
//! `ControllerState` replaces the firmware's process-wide flags.  It is
//! owned by the [`AppService`](super::service::AppService) and handed by
//! reference to the sampler, the pump controller and both renderers, in
//! that order, once per tick.

use crate::config::SystemConfig;

/// Every flag the control loop reads or writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerState {
    /// Well level is high enough to feed the pump.
    /// Inverted only by a debounced press on line A.
    pub well_has_water: bool,
    /// Tank level is below its refill threshold.
    /// Inverted only by a debounced press on line B.
    pub tank_level_low: bool,
    /// Derived every tick: `tank_level_low && well_has_water`.
    pub pump_enabled: bool,
    /// Current level of the buzzer pin.  Always `false` while the pump is off.
    pub buzzer_on: bool,
    /// Timestamp (µs) of the last buzzer flip.
    pub last_buzzer_toggle_us: u64,
}

impl Default for ControllerState {
    fn default() -> Self {
        Self::new(true, false)
    }
}

impl ControllerState {
    /// Fresh state with the given sensor flags; all outputs off.
    pub fn new(well_has_water: bool, tank_level_low: bool) -> Self {
        Self {
            well_has_water,
            tank_level_low,
            pump_enabled: false,
            buzzer_on: false,
            last_buzzer_toggle_us: 0,
        }
    }

    /// Initial state described by `config`.
    pub fn from_config(config: &SystemConfig) -> Self {
        Self::new(config.initial_well_has_water, config.initial_tank_level_low)
    }
}
