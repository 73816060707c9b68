//! GPIO / peripheral pin assignments for the PapaGuy controller board.
//!
//! Single source of truth: every driver references this module rather than
//! hard-coding pin numbers.  Re-wire the figure, change it here.

use crate::motion::Axis;

/// Sentinel for "nothing wired to this slot".
pub const NO_PIN: i32 = -1;

// ---------------------------------------------------------------------------
// Servos (LEDC PWM, 50 Hz)
// ---------------------------------------------------------------------------

/// Servo outputs in LEDC channel order, each bound to the axis it moves.
pub const SERVO_PINS: [(Axis, i32); 5] = [
    (Axis::HeadRotate, 8),
    (Axis::Wings, 9),
    (Axis::Beak, 10),
    (Axis::HeadTilt, 11),
    (Axis::BodyTilt, 12),
];

/// Pulse width at 0 units (µs).
pub const SERVO_MIN_PULSE_US: u32 = 544;
/// Pulse width at full scale (µs).
pub const SERVO_MAX_PULSE_US: u32 = 2400;
/// Servo frame rate.
pub const SERVO_PWM_FREQ_HZ: u32 = 50;

// ---------------------------------------------------------------------------
// Radar (proximity) inputs, ADC1
// ---------------------------------------------------------------------------

/// Number of radar directions reported to the host, left to right.
pub const RADAR_CHANNELS: usize = 5;

/// Analog input per radar direction.  Only the centre one is populated on
/// the current build.
pub const RADAR_PINS: [i32; RADAR_CHANNELS] = [NO_PIN, NO_PIN, 1, NO_PIN, NO_PIN];

/// ADC attenuation for the radar modules (11 dB → 0 – 3.1 V range).
pub const RADAR_ADC_ATTEN: u32 = 3;

// ---------------------------------------------------------------------------
// Binary outputs
// ---------------------------------------------------------------------------

/// Eye LEDs (active HIGH).
pub const EYE_GPIO: i32 = 13;
/// Fog machine relay.  Not fitted.
pub const FOG_GPIO: i32 = NO_PIN;
/// On-board LED mirroring "radar currently detecting".
pub const INDICATOR_GPIO: i32 = 2;

// ---------------------------------------------------------------------------
// UART link to the show controller
// ---------------------------------------------------------------------------

/// UART port carrying command frames (console UART).
pub const HOST_UART_PORT: i32 = 0;
pub const UART_TX_GPIO: i32 = 43;
pub const UART_RX_GPIO: i32 = 44;

/// Map a bound radar GPIO to its ADC1 channel on the ESP32-S3 (GPIO n → CH n-1).
pub const fn radar_adc_channel(gpio: i32) -> Option<u32> {
    if gpio >= 1 && gpio <= 10 {
        Some((gpio - 1) as u32)
    } else {
        None
    }
}
