//! Sensor subsystem — raw level switches and the debounced [`InputSampler`].

pub mod level_switch;
pub mod sampler;

pub use level_switch::LevelSwitch;
pub use sampler::{InputSampler, Toggles};
