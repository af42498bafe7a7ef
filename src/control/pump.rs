//! Pump-enable rule and the buzzer cadence that accompanies it.
//!
//! ## Enable rule
//!
//! | Tank level low | Well has water | Pump |
//! |----------------|----------------|------|
//! | no             | —              | off  |
//! | yes            | no             | off (dry-run protection) |
//! | yes            | yes            | on   |
//!
//! ## Buzzer
//!
//! While the pump runs the buzzer alternates on/off with a fixed
//! half-period, so it reads as "pump running" rather than as a continuous
//! alarm tone.  Whenever the pump is off the buzzer is forced off.

use crate::app::state::ControllerState;

/// The pump may run only when the tank needs water and the well can supply it.
pub const fn pump_should_run(well_has_water: bool, tank_level_low: bool) -> bool {
    tank_level_low && well_has_water
}

/// Result of one [`PumpController::update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PumpUpdate {
    /// `pump_enabled` differs from the previous tick.
    pub pump_changed: bool,
    /// `buzzer_on` differs from the previous tick.
    pub buzzer_changed: bool,
}

/// Alternates the buzzer at a fixed half-period.
#[derive(Debug, Clone, Copy)]
pub struct BuzzerCadence {
    toggle_interval_us: u64,
}

impl BuzzerCadence {
    pub const fn new(toggle_interval_us: u64) -> Self {
        Self { toggle_interval_us }
    }

    /// Apply the cadence for the current `pump_enabled` value.
    /// Returns `true` if `buzzer_on` changed.
    pub fn update(&self, state: &mut ControllerState, now_us: u64) -> bool {
        if !state.pump_enabled {
            let was_on = state.buzzer_on;
            state.buzzer_on = false;
            return was_on;
        }

        let elapsed = now_us.saturating_sub(state.last_buzzer_toggle_us);
        if elapsed >= self.toggle_interval_us {
            state.buzzer_on = !state.buzzer_on;
            state.last_buzzer_toggle_us = now_us;
            true
        } else {
            false
        }
    }

    pub fn toggle_interval_us(&self) -> u64 {
        self.toggle_interval_us
    }
}

/// Derives `pump_enabled` and drives the buzzer cadence.
#[derive(Debug, Clone, Copy)]
pub struct PumpController {
    cadence: BuzzerCadence,
}

impl PumpController {
    pub const fn new(buzzer_toggle_interval_us: u64) -> Self {
        Self {
            cadence: BuzzerCadence::new(buzzer_toggle_interval_us),
        }
    }

    /// Recompute the pump decision from the sensor flags, then advance the
    /// buzzer.  After this call `pump_enabled == tank_level_low && well_has_water`
    /// and `buzzer_on` is `false` unless the pump is enabled.
    pub fn update(&self, state: &mut ControllerState, now_us: u64) -> PumpUpdate {
        let running = pump_should_run(state.well_has_water, state.tank_level_low);
        let pump_changed = running != state.pump_enabled;
        state.pump_enabled = running;

        let buzzer_changed = self.cadence.update(state, now_us);

        PumpUpdate {
            pump_changed,
            buzzer_changed,
        }
    }
}
