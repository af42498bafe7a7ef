//! GPIO / peripheral pin assignments for the WellPump demo board.
//!
//! Single source of truth — every driver references this module rather than
//! hard-coding pin numbers.  Change a pin here and it propagates everywhere.

// ---------------------------------------------------------------------------
// Level sensors (push-buttons standing in for float switches)
// ---------------------------------------------------------------------------

/// Button A — simulates the well "level high" sensor.
/// Active-low with internal pull-up: pressed reads LOW.
pub const BUTTON_A_GPIO: i32 = 5;
/// Button B — simulates the tank "level low" sensor.
/// Active-low with internal pull-up: pressed reads LOW.
pub const BUTTON_B_GPIO: i32 = 6;

// ---------------------------------------------------------------------------
// Buzzer (plain digital output, not PWM)
// ---------------------------------------------------------------------------

/// Digital output: HIGH = buzzer sounding.
pub const BUZZER_GPIO: i32 = 10;

// ---------------------------------------------------------------------------
// WS2812 5×5 LED matrix
// ---------------------------------------------------------------------------

/// Data line of the addressable LED chain.
pub const LED_MATRIX_GPIO: i32 = 7;
/// Pixels per matrix row.
pub const LED_MATRIX_WIDTH: usize = 5;
/// Total pixels in the chain (5 × 5, row-major).
pub const LED_MATRIX_PIXELS: usize = LED_MATRIX_WIDTH * LED_MATRIX_WIDTH;

// ---------------------------------------------------------------------------
// I²C bus — SSD1306 OLED
// ---------------------------------------------------------------------------

pub const I2C_SDA_GPIO: i32 = 14;
pub const I2C_SCL_GPIO: i32 = 15;
/// I²C bus clock for the display (400 kHz fast mode).
pub const I2C_FREQ_HZ: u32 = 400_000;
/// 7-bit I²C address of the OLED controller.
pub const OLED_I2C_ADDR: u8 = 0x3C;
pub const OLED_WIDTH: u32 = 128;
pub const OLED_HEIGHT: u32 = 64;
