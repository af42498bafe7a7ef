//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to
//! the logger (UART / USB-CDC in production).

use log::info;

use crate::app::events::{AppEvent, Sensor};
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`] to the serial console.
#[derive(Debug, Default)]
pub struct LogEventSink {
    emitted: u64,
}

impl LogEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Events written since construction.
    pub fn emitted(&self) -> u64 {
        self.emitted
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        self.emitted += 1;
        match event {
            AppEvent::Started {
                well_has_water,
                tank_level_low,
            } => {
                info!(
                    "START | well={} tank={}",
                    well_level(*well_has_water),
                    tank_level(*tank_level_low)
                );
            }
            AppEvent::SensorToggled { sensor, value } => match sensor {
                Sensor::Well => info!("SENSOR | well -> {}", well_level(*value)),
                Sensor::Tank => info!("SENSOR | tank -> {}", tank_level(*value)),
            },
            AppEvent::PumpChanged { running } => {
                info!("PUMP | {}", if *running { "ON" } else { "OFF" });
            }
            AppEvent::Status(s) => {
                info!(
                    "STATUS | tick={} | well={} tank={} | pump={} buzzer={}",
                    s.tick,
                    well_level(s.well_has_water),
                    tank_level(s.tank_level_low),
                    if s.pump_enabled { "ON" } else { "OFF" },
                    if s.buzzer_on { "ON" } else { "OFF" },
                );
            }
        }
    }
}

fn well_level(has_water: bool) -> &'static str {
    if has_water { "HIGH" } else { "LOW" }
}

fn tank_level(level_low: bool) -> &'static str {
    if level_low { "LOW" } else { "HIGH" }
}
