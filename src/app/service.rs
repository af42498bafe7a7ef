//! Application service — the hexagonal core.
//!
//! [`AppService`] owns the controller state and runs the control loop.
//! All I/O flows through port traits injected at call sites, making the
//! entire loop testable with mock adapters and a virtual clock.
//!
//! ```text
//!   InputPort ──▶ ┌─────────────────────────────┐ ──▶ BuzzerPort
//!                 │         AppService          │ ──▶ DisplayPort
//!   ClockPort ◀──▶│  Sampler · Pump · Renderers │ ──▶ LedStripPort
//!                 └─────────────────────────────┘ ──▶ EventSink
//! ```
//!
//! ## Tick order
//!
//! 1. sample inputs (may block for the debounce window)
//! 2. pump decision + buzzer cadence
//! 3. status text → display
//! 4. indicators → LED matrix
//! 5. events → sink
//!
//! [`cycle`](AppService::cycle) then sleeps the inter-tick interval.

use log::info;

use crate::config::SystemConfig;
use crate::control::pump::PumpController;
use crate::error::Result;
use crate::render::{render_indicators, render_status};
use crate::sensors::sampler::{InputSampler, Toggles};

use super::events::{AppEvent, Sensor, StatusReport};
use super::ports::{BuzzerPort, ClockPort, DisplayPort, EventSink, InputPort, LedStripPort};
use super::state::ControllerState;

/// What happened during one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickReport {
    /// Sensor flags inverted by this tick's sample.
    pub toggles: Toggles,
    /// `pump_enabled` changed value this tick.
    pub pump_changed: bool,
    /// `buzzer_on` changed value this tick.
    pub buzzer_changed: bool,
    /// State as rendered at the end of the tick.
    pub state: ControllerState,
}

/// The application service orchestrates all domain logic.
pub struct AppService {
    config: SystemConfig,
    state: ControllerState,
    sampler: InputSampler,
    pump: PumpController,
    tick_count: u64,
}

impl AppService {
    /// Construct the service from a validated configuration.
    pub fn new(config: SystemConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            state: ControllerState::from_config(&config),
            sampler: InputSampler::new(),
            pump: PumpController::new(config.buzzer_toggle_interval_us),
            tick_count: 0,
            config,
        })
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Announce the initial sensor state.
    pub fn start(&mut self, sink: &mut impl EventSink) {
        info!(
            "AppService started (well_has_water={}, tank_level_low={})",
            self.state.well_has_water, self.state.tank_level_low
        );
        sink.emit(&AppEvent::Started {
            well_has_water: self.state.well_has_water,
            tank_level_low: self.state.tank_level_low,
        });
    }

    /// Run the control loop forever.
    pub fn run(
        &mut self,
        hw: &mut (impl InputPort + BuzzerPort + DisplayPort + LedStripPort),
        clock: &mut impl ClockPort,
        sink: &mut impl EventSink,
    ) -> ! {
        loop {
            self.cycle(hw, clock, sink);
        }
    }

    // ── Per-tick orchestration ────────────────────────────────

    /// One loop iteration: [`tick`](Self::tick), then the inter-tick sleep.
    pub fn cycle(
        &mut self,
        hw: &mut (impl InputPort + BuzzerPort + DisplayPort + LedStripPort),
        clock: &mut impl ClockPort,
        sink: &mut impl EventSink,
    ) -> TickReport {
        let report = self.tick(hw, clock, sink);
        clock.sleep_ms(self.config.tick_interval_ms);
        report
    }

    /// Run one control cycle: sample → decide → render → report.
    ///
    /// The `hw` parameter satisfies every hardware port at once — this
    /// avoids multiple mutable borrows of one adapter while keeping the
    /// port boundary explicit.
    pub fn tick(
        &mut self,
        hw: &mut (impl InputPort + BuzzerPort + DisplayPort + LedStripPort),
        clock: &mut impl ClockPort,
        sink: &mut impl EventSink,
    ) -> TickReport {
        self.tick_count += 1;

        // 1. Inputs (blocks for the debounce window after a press)
        let toggles = self
            .sampler
            .sample(&mut self.state, hw, clock, self.config.debounce_ms);

        // 2. Pump decision + buzzer, timed after any debounce wait
        let update = self.pump.update(&mut self.state, clock.now_us());
        hw.set_buzzer(self.state.buzzer_on);

        // 3–4. Presentation always reflects this tick's decision
        render_status(&self.state, hw);
        render_indicators(&self.state, hw);

        // 5. Events
        self.emit_events(toggles, update.pump_changed, sink);

        TickReport {
            toggles,
            pump_changed: update.pump_changed,
            buzzer_changed: update.buzzer_changed,
            state: self.state,
        }
    }

    // ── Queries ───────────────────────────────────────────────

    /// Current controller state.
    pub fn state(&self) -> &ControllerState {
        &self.state
    }

    /// Total control ticks executed since startup.
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Active configuration.
    pub fn config(&self) -> &SystemConfig {
        &self.config
    }

    /// Status snapshot of the current state.
    pub fn status_report(&self) -> StatusReport {
        StatusReport {
            tick: self.tick_count,
            well_has_water: self.state.well_has_water,
            tank_level_low: self.state.tank_level_low,
            pump_enabled: self.state.pump_enabled,
            buzzer_on: self.state.buzzer_on,
        }
    }

    // ── Internal ──────────────────────────────────────────────

    fn emit_events(&self, toggles: Toggles, pump_changed: bool, sink: &mut impl EventSink) {
        if toggles.well {
            sink.emit(&AppEvent::SensorToggled {
                sensor: Sensor::Well,
                value: self.state.well_has_water,
            });
        }
        if toggles.tank {
            sink.emit(&AppEvent::SensorToggled {
                sensor: Sensor::Tank,
                value: self.state.tank_level_low,
            });
        }
        if pump_changed {
            sink.emit(&AppEvent::PumpChanged {
                running: self.state.pump_enabled,
            });
        }

        let every = u64::from(self.config.status_interval_ticks);
        if every > 0 && self.tick_count % every == 0 {
            sink.emit(&AppEvent::Status(self.status_report()));
        }
    }
}
