//! The control loop driving the real adapter stack over fake GPIO pins.

use std::cell::Cell;
use std::convert::Infallible;
use std::rc::Rc;

use embedded_hal::digital::{ErrorKind, ErrorType, InputPin, OutputPin};

use super::mock_hw::{MockClock, RecordingSink};

use wellpump::adapters::hardware::HardwareAdapter;
use wellpump::app::service::AppService;
use wellpump::config::SystemConfig;
use wellpump::drivers::buzzer::BuzzerDriver;
use wellpump::drivers::led_matrix::LedMatrix;
use wellpump::drivers::text_display::TextDisplay;
use wellpump::render::{indicator_frame, StatusText};
use wellpump::sensors::LevelSwitch;

// ── Fake pins ─────────────────────────────────────────────────

/// Pulled-up input whose level the test controls.
#[derive(Clone)]
struct SharedInput {
    high: Rc<Cell<bool>>,
}

impl SharedInput {
    fn released() -> Self {
        Self {
            high: Rc::new(Cell::new(true)),
        }
    }

    fn hold(&self) {
        self.high.set(false);
    }

    fn release(&self) {
        self.high.set(true);
    }
}

impl ErrorType for SharedInput {
    type Error = Infallible;
}

impl InputPin for SharedInput {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.high.get())
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.high.get())
    }
}

/// Input that always fails to read.
struct BrokenInput;

impl ErrorType for BrokenInput {
    type Error = ErrorKind;
}

impl InputPin for BrokenInput {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Err(ErrorKind::Other)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Err(ErrorKind::Other)
    }
}

/// Output that counts pin writes.
#[derive(Clone, Default)]
struct SharedOutput {
    high: Rc<Cell<bool>>,
    writes: Rc<Cell<u32>>,
}

impl ErrorType for SharedOutput {
    type Error = Infallible;
}

impl OutputPin for SharedOutput {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.high.set(false);
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.high.set(true);
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}

type Adapter<A> = HardwareAdapter<A, SharedInput, SharedOutput>;

fn make_adapter<A: InputPin>(well: A, tank: SharedInput, buzzer: SharedOutput) -> Adapter<A> {
    HardwareAdapter::new(
        LevelSwitch::new(well, 5),
        LevelSwitch::new(tank, 6),
        BuzzerDriver::new(buzzer, 10),
        TextDisplay::new(),
        LedMatrix::new(),
    )
}

fn visible_texts<A: InputPin>(hw: &Adapter<A>) -> Vec<(String, i32, i32)> {
    hw.display()
        .visible()
        .iter()
        .map(|run| (run.text.as_str().to_string(), run.x, run.y))
        .collect()
}

fn expected_texts(app: &AppService) -> Vec<(String, i32, i32)> {
    StatusText::from_state(app.state())
        .placed()
        .iter()
        .map(|&(t, x, y)| (t.to_string(), x, y))
        .collect()
}

// ── Tests ─────────────────────────────────────────────────────

#[test]
fn idle_board_shows_power_on_state() {
    let well = SharedInput::released();
    let tank = SharedInput::released();
    let buzzer = SharedOutput::default();
    let mut hw = make_adapter(well, tank, buzzer.clone());
    let mut clock = MockClock::new();
    let mut sink = RecordingSink::new();
    let mut app = AppService::new(SystemConfig::default()).unwrap();

    app.cycle(&mut hw, &mut clock, &mut sink);

    assert_eq!(
        visible_texts(&hw),
        vec![
            ("POCO N: ALTO".to_string(), 2, 0),
            ("TANQUE N: ALTO".to_string(), 2, 20),
            ("BOMBA AGUA: OFF".to_string(), 2, 40),
        ]
    );
    assert_eq!(hw.matrix().latched(), &indicator_frame(app.state()));
    assert_eq!(hw.matrix().frame_count(), 1);
    assert_eq!(hw.matrix().cursor(), 0);
    assert!(!hw.buzzer().is_on());
    assert!(!buzzer.high.get());
}

#[test]
fn tank_press_runs_pump_and_sounds_buzzer_on_pin() {
    let well = SharedInput::released();
    let tank = SharedInput::released();
    let buzzer = SharedOutput::default();
    let mut hw = make_adapter(well, tank.clone(), buzzer.clone());
    let mut clock = MockClock::starting_at_ms(1_000);
    let mut sink = RecordingSink::new();
    let mut app = AppService::new(SystemConfig::default()).unwrap();

    tank.hold();
    app.cycle(&mut hw, &mut clock, &mut sink);
    tank.release();

    assert!(app.state().pump_enabled);
    assert!(hw.buzzer().is_on());
    assert!(buzzer.high.get());
    assert_eq!(visible_texts(&hw), expected_texts(&app));
    assert_eq!(hw.matrix().latched(), &indicator_frame(app.state()));

    app.cycle(&mut hw, &mut clock, &mut sink);
    assert!(!buzzer.high.get(), "buzzer alternates on the next tick");
}

#[test]
fn unchanged_buzzer_level_is_not_rewritten() {
    let buzzer = SharedOutput::default();
    let mut hw = make_adapter(
        SharedInput::released(),
        SharedInput::released(),
        buzzer.clone(),
    );
    let mut clock = MockClock::new();
    let mut sink = RecordingSink::new();
    let mut app = AppService::new(SystemConfig::default()).unwrap();
    // Construction drives the pin low once.
    assert_eq!(buzzer.writes.get(), 1);

    for _ in 0..10 {
        app.cycle(&mut hw, &mut clock, &mut sink);
    }

    assert_eq!(buzzer.writes.get(), 1);
}

#[test]
fn display_keeps_only_the_latest_frame() {
    let tank = SharedInput::released();
    let mut hw = make_adapter(
        SharedInput::released(),
        tank.clone(),
        SharedOutput::default(),
    );
    let mut clock = MockClock::new();
    let mut sink = RecordingSink::new();
    let mut app = AppService::new(SystemConfig::default()).unwrap();

    for _ in 0..3 {
        app.cycle(&mut hw, &mut clock, &mut sink);
    }
    tank.hold();
    app.cycle(&mut hw, &mut clock, &mut sink);

    assert_eq!(hw.display().flush_count(), 4);
    assert_eq!(hw.display().visible().len(), 3);
    assert_eq!(hw.display().dropped_runs(), 0);
    assert_eq!(visible_texts(&hw)[1].0, "TANQUE N: BAIXO");
}

#[test]
fn failing_input_reads_as_released() {
    let mut hw = make_adapter(
        BrokenInput,
        SharedInput::released(),
        SharedOutput::default(),
    );
    let mut clock = MockClock::new();
    let mut sink = RecordingSink::new();
    let mut app = AppService::new(SystemConfig::default()).unwrap();

    for _ in 0..5 {
        let r = app.cycle(&mut hw, &mut clock, &mut sink);
        assert!(!r.toggles.any());
    }

    assert!(app.state().well_has_water);
    assert_eq!(clock.sleeps.iter().filter(|&&ms| ms == 200).count(), 0);
}
