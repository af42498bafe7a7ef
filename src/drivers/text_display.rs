//! Text frame buffer for the 128×64 OLED.
//!
//! Drawing happens into a back buffer of positioned text runs; `flush()`
//! publishes it as the visible frame.  Glyph rasterisation and the SSD1306
//! I²C transfer belong to the panel driver that consumes
//! [`TextDisplay::visible`]; this buffer mirrors each published frame to the
//! log so the board can be followed on the serial console without a panel.
//!
//! ## Dual-target design
//!
//! Identical on ESP-IDF and host: the buffer is plain memory.

use heapless::{String, Vec};
use log::debug;

use crate::pins::{OLED_HEIGHT, OLED_WIDTH};
use crate::render::status::{push_truncated, LINE_CAPACITY};

/// Maximum text runs per frame.
pub const MAX_RUNS: usize = 8;

/// One string drawn at a pixel position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextRun {
    pub x: i32,
    pub y: i32,
    pub text: String<LINE_CAPACITY>,
}

pub type TextFrame = Vec<TextRun, MAX_RUNS>;

pub struct TextDisplay {
    back: TextFrame,
    visible: TextFrame,
    flushes: u32,
    dropped_runs: u32,
}

impl Default for TextDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl TextDisplay {
    pub fn new() -> Self {
        Self {
            back: Vec::new(),
            visible: Vec::new(),
            flushes: 0,
            dropped_runs: 0,
        }
    }

    /// Blank the back buffer.
    pub fn clear(&mut self) {
        self.back.clear();
    }

    /// Add a text run to the back buffer.  Runs that start off-panel or
    /// exceed [`MAX_RUNS`] are dropped.
    pub fn draw_text(&mut self, text: &str, x: i32, y: i32) {
        if !Self::on_panel(x, y) {
            self.dropped_runs = self.dropped_runs.saturating_add(1);
            debug!("oled: run at ({}, {}) is off-panel, dropped", x, y);
            return;
        }
        let mut run = TextRun {
            x,
            y,
            text: String::new(),
        };
        push_truncated(&mut run.text, text);
        if self.back.push(run).is_err() {
            self.dropped_runs = self.dropped_runs.saturating_add(1);
            debug!("oled: frame full, run dropped");
        }
    }

    /// Publish the back buffer as the visible frame.
    pub fn flush(&mut self) {
        self.visible.clone_from(&self.back);
        self.flushes = self.flushes.wrapping_add(1);
        for run in &self.visible {
            debug!("oled @({:>3},{:>2}) {}", run.x, run.y, run.text);
        }
    }

    /// The frame most recently flushed.
    pub fn visible(&self) -> &TextFrame {
        &self.visible
    }

    /// Number of `flush()` calls since construction.
    pub fn flush_count(&self) -> u32 {
        self.flushes
    }

    /// Runs rejected by `draw_text()` since construction.
    pub fn dropped_runs(&self) -> u32 {
        self.dropped_runs
    }

    fn on_panel(x: i32, y: i32) -> bool {
        (0..OLED_WIDTH as i32).contains(&x) && (0..OLED_HEIGHT as i32).contains(&y)
    }
}
