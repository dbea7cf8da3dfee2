//! Output policies
//!
//! A policy decides what every output shows on a tick. The sensor-driven
//! policy derives everything from the sensors; the button-cycled policy shows
//! the color selected with the mode button.

mod button_cycled;
mod sensor_driven;

use embassy_time::{Duration, Instant};

pub use button_cycled::{ButtonCycled, ButtonCycledConfig};
pub use sensor_driven::{SensorDriven, SensorDrivenConfig};

use crate::composer::PwmLevels;
use crate::config::BUZZER_SILENT_DUTY;
use crate::display::{self, DisplayConfig, DisplayLines};
use crate::matrix::{DARK_FRAME, MatrixFrame};

/// Values written to every output in one tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// RGB LED duty cycles
    pub pwm: PwmLevels,
    /// Matrix pixels in transmission order
    pub matrix: MatrixFrame,
    /// Buzzer compare level
    pub buzzer_duty: u16,
    /// Display screen
    pub display: DisplayLines,
}

impl Frame {
    /// LEDs off, buzzer silent, error on the display
    pub fn fail_safe(config: &DisplayConfig) -> Self {
        Self {
            pwm: PwmLevels::OFF,
            matrix: DARK_FRAME,
            buzzer_duty: BUZZER_SILENT_DUTY,
            display: display::sensor_error(config),
        }
    }
}

/// Strategy producing the frame of each tick
pub trait OutputPolicy {
    /// Time between two ticks
    fn tick_period(&self) -> Duration;

    /// Compute the frame for the tick at `now`
    fn evaluate(&mut self, now: Instant) -> Frame;
}
