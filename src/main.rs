//! WellPump Firmware — Main Entry Point
//!
//! Hexagonal layout: the control loop only sees port traits; this file
//! builds the concrete adapters and hands them over.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                      Adapters (outer ring)                     │
//! │                                                                │
//! │  HardwareAdapter            SystemClock        LogEventSink    │
//! │  (Input+Buzzer+Display+Led) (Clock)            (EventSink)     │
//! │                                                                │
//! │  ──────────────── Port Trait Boundary ───────────────────      │
//! │                                                                │
//! │  ┌────────────────────────────────────────────────────────┐    │
//! │  │              AppService (pure logic)                   │    │
//! │  │  Sampler · Pump/Buzzer · Status text · Indicators      │    │
//! │  └────────────────────────────────────────────────────────┘    │
//! └────────────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use anyhow::Result;
use esp_idf_hal::delay::FreeRtos;
use esp_idf_hal::gpio::{AnyIOPin, AnyOutputPin, PinDriver, Pull};
use log::info;

use wellpump::adapters::hardware::HardwareAdapter;
use wellpump::adapters::log_sink::LogEventSink;
use wellpump::adapters::time::SystemClock;
use wellpump::app::service::AppService;
use wellpump::config::SystemConfig;
use wellpump::drivers::buzzer::BuzzerDriver;
use wellpump::drivers::led_matrix::LedMatrix;
use wellpump::drivers::text_display::TextDisplay;
use wellpump::pins;
use wellpump::sensors::LevelSwitch;

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("╔══════════════════════════════════════╗");
    info!("║  WellPump v{}                        ║", env!("CARGO_PKG_VERSION"));
    info!("╚══════════════════════════════════════╝");

    // ── 2. Configuration (compile-time defaults) ──────────────
    let config = SystemConfig::default();
    info!("Config: {:?}", config);

    // ── 3. GPIO bring-up ──────────────────────────────────────
    // SAFETY: each GPIO number below is claimed exactly once, here, and
    // nothing else in the firmware constructs a driver for it.
    let mut button_a = PinDriver::input(unsafe { AnyIOPin::new(pins::BUTTON_A_GPIO) })?;
    button_a.set_pull(Pull::Up)?;
    let mut button_b = PinDriver::input(unsafe { AnyIOPin::new(pins::BUTTON_B_GPIO) })?;
    button_b.set_pull(Pull::Up)?;
    let buzzer_pin = PinDriver::output(unsafe { AnyOutputPin::new(pins::BUZZER_GPIO) })?;
    info!(
        "GPIO: button A={} button B={} buzzer={}",
        pins::BUTTON_A_GPIO,
        pins::BUTTON_B_GPIO,
        pins::BUZZER_GPIO
    );

    // ── 4. Construct adapters ─────────────────────────────────
    let mut hw = HardwareAdapter::new(
        LevelSwitch::new(button_a, pins::BUTTON_A_GPIO),
        LevelSwitch::new(button_b, pins::BUTTON_B_GPIO),
        BuzzerDriver::new(buzzer_pin, pins::BUZZER_GPIO),
        TextDisplay::new(),
        LedMatrix::new(),
    );
    let mut clock = SystemClock::new(FreeRtos);
    let mut log_sink = LogEventSink::new();

    // ── 5. Construct app service ──────────────────────────────
    let mut app = AppService::new(config)?;
    app.start(&mut log_sink);

    info!("System ready. Entering control loop.");

    // ── 6. Control loop (never returns) ───────────────────────
    app.run(&mut hw, &mut clock, &mut log_sink)
}
