//! Frame buffer for the 5×5 WS2812 matrix.
//!
//! Pixels arrive one at a time in chain order with no end-of-frame marker.
//! The buffer latches a frame each time the last pixel of the chain is
//! written and wraps back to index 0, which matches how the physical chain
//! shifts data: the 26th colour lands on the first LED again.
//!
//! The GRB bit-stream encoding is the job of the RMT/PIO driver that reads
//! [`LedMatrix::latched`].

use log::debug;

use crate::pins::{LED_MATRIX_PIXELS, LED_MATRIX_WIDTH};
use crate::render::indicator::{Frame, Rgb, OFF};

pub struct LedMatrix {
    pending: Frame,
    cursor: usize,
    latched: Frame,
    frames: u32,
}

impl Default for LedMatrix {
    fn default() -> Self {
        Self::new()
    }
}

impl LedMatrix {
    pub fn new() -> Self {
        Self {
            pending: [OFF; LED_MATRIX_PIXELS],
            cursor: 0,
            latched: [OFF; LED_MATRIX_PIXELS],
            frames: 0,
        }
    }

    /// Shift one colour into the chain.
    pub fn write_pixel(&mut self, colour: Rgb) {
        self.pending[self.cursor] = colour;
        self.cursor += 1;
        if self.cursor == LED_MATRIX_PIXELS {
            self.cursor = 0;
            self.latched = self.pending;
            self.frames = self.frames.wrapping_add(1);
            debug!("matrix row0 {:?}", &self.latched[..LED_MATRIX_WIDTH]);
        }
    }

    /// Last complete frame.
    pub fn latched(&self) -> &Frame {
        &self.latched
    }

    /// Number of complete frames latched since construction.
    pub fn frame_count(&self) -> u32 {
        self.frames
    }

    /// Index the next written pixel will land on.
    pub fn cursor(&self) -> usize {
        self.cursor
    }
}
