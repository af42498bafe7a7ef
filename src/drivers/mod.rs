//! Actuator and presentation drivers.

pub mod buzzer;
pub mod led_matrix;
pub mod text_display;
