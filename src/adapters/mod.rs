//! Adapters — concrete implementations of the hexagonal port traits.
//!
//! | Adapter    | Implements     | Connects to                       |
//! |------------|----------------|-----------------------------------|
//! | `hardware` | InputPort      | button GPIOs (embedded-hal pins)  |
//! |            | BuzzerPort     | buzzer GPIO                       |
//! |            | DisplayPort    | OLED text frame buffer            |
//! |            | LedStripPort   | WS2812 matrix frame buffer        |
//! | `log_sink` | EventSink      | Serial log output                 |
//! | `time`     | ClockPort      | ESP32 system timer / FreeRTOS     |

pub mod hardware;
pub mod log_sink;
pub mod time;
