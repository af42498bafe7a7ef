//! Mock hardware and virtual clock for integration tests.
//!
//! `MockClock` keeps time in microseconds and only advances when the code
//! under test sleeps.  `MockHardware` shares that time base so input lines
//! can be scripted as "active between t0 and t1", and it records every
//! buzzer write, display frame and LED pixel for later assertions.

#![allow(dead_code)]

use std::cell::Cell;
use std::rc::Rc;

use wellpump::app::events::AppEvent;
use wellpump::app::ports::{
    BuzzerPort, ClockPort, DisplayPort, EventSink, InputLine, InputPort, LedStripPort,
};
use wellpump::pins::LED_MATRIX_PIXELS;
use wellpump::render::Rgb;

// ── MockClock ─────────────────────────────────────────────────

pub struct MockClock {
    now_us: Rc<Cell<u64>>,
    pub sleeps: Vec<u32>,
}

impl MockClock {
    pub fn new() -> Self {
        Self::starting_at_ms(0)
    }

    pub fn starting_at_ms(ms: u64) -> Self {
        Self {
            now_us: Rc::new(Cell::new(ms * 1000)),
            sleeps: Vec::new(),
        }
    }

    pub fn now_ms(&self) -> u64 {
        self.now_us.get() / 1000
    }

    /// Shared handle to the time base.
    pub fn time_base(&self) -> Rc<Cell<u64>> {
        Rc::clone(&self.now_us)
    }
}

impl ClockPort for MockClock {
    fn now_us(&self) -> u64 {
        self.now_us.get()
    }

    fn sleep_ms(&mut self, ms: u32) {
        self.sleeps.push(ms);
        self.now_us.set(self.now_us.get() + u64::from(ms) * 1000);
    }
}

// ── Drawn text record ─────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Drawn {
    pub text: String,
    pub x: i32,
    pub y: i32,
}

// ── MockHardware ──────────────────────────────────────────────

pub struct MockHardware {
    now_us: Rc<Cell<u64>>,
    /// Active windows per line, `[start_us, end_us)`.
    active_a: Vec<(u64, u64)>,
    active_b: Vec<(u64, u64)>,
    pub reads: Vec<InputLine>,

    pub buzzer_on: bool,
    pub buzzer_writes: Vec<bool>,

    drawing: Vec<Drawn>,
    pub clears: u32,
    pub frames: Vec<Vec<Drawn>>,

    pub pixels: Vec<Rgb>,
}

impl MockHardware {
    pub fn new(clock: &MockClock) -> Self {
        Self {
            now_us: clock.time_base(),
            active_a: Vec::new(),
            active_b: Vec::new(),
            reads: Vec::new(),
            buzzer_on: false,
            buzzer_writes: Vec::new(),
            drawing: Vec::new(),
            clears: 0,
            frames: Vec::new(),
            pixels: Vec::new(),
        }
    }

    /// Hold `line` active from `from_ms` (inclusive) to `to_ms` (exclusive).
    pub fn press(&mut self, line: InputLine, from_ms: u64, to_ms: u64) {
        let window = (from_ms * 1000, to_ms * 1000);
        match line {
            InputLine::A => self.active_a.push(window),
            InputLine::B => self.active_b.push(window),
        }
    }

    /// Text of the most recently flushed frame, top to bottom.
    pub fn last_texts(&self) -> Vec<String> {
        self.frames
            .last()
            .map(|f| f.iter().map(|d| d.text.clone()).collect())
            .unwrap_or_default()
    }

    /// The most recent complete matrix frame.
    pub fn last_matrix(&self) -> &[Rgb] {
        let complete = self.pixels.len() - self.pixels.len() % LED_MATRIX_PIXELS;
        &self.pixels[complete.saturating_sub(LED_MATRIX_PIXELS)..complete]
    }

    fn is_active(&self, line: InputLine) -> bool {
        let now = self.now_us.get();
        let windows = match line {
            InputLine::A => &self.active_a,
            InputLine::B => &self.active_b,
        };
        windows.iter().any(|&(start, end)| (start..end).contains(&now))
    }
}

impl InputPort for MockHardware {
    fn read_level(&mut self, line: InputLine) -> bool {
        self.reads.push(line);
        // Active-low.
        !self.is_active(line)
    }
}

impl BuzzerPort for MockHardware {
    fn set_buzzer(&mut self, on: bool) {
        self.buzzer_on = on;
        self.buzzer_writes.push(on);
    }
}

impl DisplayPort for MockHardware {
    fn clear(&mut self) {
        self.clears += 1;
        self.drawing.clear();
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32) {
        self.drawing.push(Drawn {
            text: text.to_string(),
            x,
            y,
        });
    }

    fn flush(&mut self) {
        self.frames.push(self.drawing.clone());
    }
}

impl LedStripPort for MockHardware {
    fn write_pixel(&mut self, colour: Rgb) {
        self.pixels.push(colour);
    }
}

// ── RecordingSink ─────────────────────────────────────────────

#[derive(Default)]
pub struct RecordingSink {
    pub events: Vec<AppEvent>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(event.clone());
    }
}
