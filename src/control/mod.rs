//! Control decisions derived from the sensor flags.

pub mod pump;

pub use pump::{pump_should_run, BuzzerCadence, PumpController, PumpUpdate};
