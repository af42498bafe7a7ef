//! Pure state → presentation mappings, plus the thin functions that push
//! the result into a display or LED sink.

pub mod indicator;
pub mod status;

pub use indicator::{indicator_frame, render_indicators, Frame, Rgb};
pub use status::{render_status, StatusText};
