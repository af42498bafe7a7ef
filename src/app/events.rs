//! Outbound application events.
//!
//! The [`AppService`](super::service::AppService) emits these through the
//! [`EventSink`](super::ports::EventSink) port.  Adapters on the other
//! side decide what to do with them — usually one line on the serial log.

/// Which logical sensor a toggle applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sensor {
    /// Well level (line A).
    Well,
    /// Tank level (line B).
    Tank,
}

/// Structured events emitted by the application core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// The control loop has started (carries the initial sensor flags).
    Started {
        well_has_water: bool,
        tank_level_low: bool,
    },

    /// A debounced press inverted a sensor flag; `value` is the new flag.
    SensorToggled { sensor: Sensor, value: bool },

    /// The pump-enable decision changed.
    PumpChanged { running: bool },

    /// Periodic status snapshot.
    Status(StatusReport),
}

/// A point-in-time status snapshot suitable for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusReport {
    pub tick: u64,
    pub well_has_water: bool,
    pub tank_level_low: bool,
    pub pump_enabled: bool,
    pub buzzer_on: bool,
}
