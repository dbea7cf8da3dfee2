//! Compile-time constants shared by the pipeline.
//!
//! Every timing and threshold the firmware relies on lives here, together
//! with where the number comes from.

use embassy_time::Duration;

/// Illuminance at which the intensity factor saturates at 1.0.
pub const MAX_LUX: u16 = 1000;

/// Main loop cadence of the sensor-driven policy.
pub const SENSOR_TICK_PERIOD: Duration = Duration::from_millis(250);

/// Main loop cadence of the button-cycled policy.
pub const BUTTON_TICK_PERIOD: Duration = Duration::from_millis(500);

/// Minimum time between two accepted mode button edges.
pub const DEBOUNCE_INTERVAL: Duration = Duration::from_millis(250);

/// Wait between triggering a BH1750 high resolution measurement and reading it.
///
/// The datasheet gives 120 ms typical and 180 ms worst case.
pub const ILLUMINANCE_SETTLE_TIME: Duration = Duration::from_millis(200);

/// One TCS34725 integration cycle for `ATIME = 0xF5`.
///
/// `(256 - 0xF5) * 2.4 ms = 26.4 ms`, rounded up.
pub const COLOR_INTEGRATION_TIME: Duration = Duration::from_millis(27);

/// How many consecutive failed reads reuse the last valid sample
/// before the outputs are forced to the fail-safe state.
pub const MAX_HELD_SAMPLES: u8 = 3;

/// PWM counter wrap of the buzzer slice.
pub const BUZZER_WRAP: u16 = 59609;

/// Integer clock divider of the buzzer slice.
pub const BUZZER_CLOCK_DIVIDER: u32 = 16;

/// Buzzer compare level while alerting: 30% of [`BUZZER_WRAP`].
#[allow(clippy::cast_possible_truncation)]
pub const BUZZER_ALERT_DUTY: u16 = (BUZZER_WRAP as u32 * 3 / 10) as u16;

/// Buzzer compare level while silent.
pub const BUZZER_SILENT_DUTY: u16 = 0;

/// Compare level that keeps a PWM output permanently high.
pub const PWM_FULL_DUTY: u16 = u16::MAX;

/// Matrix intensity (percent) used by the button-cycled policy.
pub const MODE_MATRIX_INTENSITY: u8 = 20;

/// Tone frequency produced by the buzzer slice for a given system clock.
///
/// `f = f_sys / (BUZZER_CLOCK_DIVIDER * (BUZZER_WRAP + 1))`
pub const fn buzzer_frequency_hz(sys_clock_hz: u32) -> u32 {
    sys_clock_hz / (BUZZER_CLOCK_DIVIDER * (BUZZER_WRAP as u32 + 1))
}
