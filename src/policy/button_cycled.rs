use embassy_time::{Duration, Instant};

use super::{Frame, OutputPolicy};
use crate::composer::PwmLevels;
use crate::config::{BUTTON_TICK_PERIOD, BUZZER_SILENT_DUTY, MODE_MATRIX_INTENSITY};
use crate::display::{self, DisplayConfig};
use crate::matrix::{self, Glyph};
use crate::mode_cycle::{Mode, SharedModeCycle};

/// Configuration of the button-cycled policy
#[derive(Debug, Clone, Copy)]
pub struct ButtonCycledConfig {
    pub tick_period: Duration,
    /// Matrix intensity in percent
    pub matrix_intensity: u8,
    pub glyph: Glyph,
    pub display: DisplayConfig,
}

impl ButtonCycledConfig {
    pub const fn new() -> Self {
        Self {
            tick_period: BUTTON_TICK_PERIOD,
            matrix_intensity: MODE_MATRIX_INTENSITY,
            glyph: Glyph::FULL,
            display: DisplayConfig::new(),
        }
    }

    /// Frame for a mode
    pub fn frame(&self, mode: Mode) -> Frame {
        let (red, green, blue) = mode.led_pins();
        let color = mode.matrix_color().compose(self.matrix_intensity);

        Frame {
            pwm: PwmLevels::digital(red, green, blue),
            matrix: matrix::render(&self.glyph, color),
            buzzer_duty: BUZZER_SILENT_DUTY,
            display: display::mode_screen(mode, &self.display),
        }
    }
}

impl Default for ButtonCycledConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Shows the color selected with the mode button
pub struct ButtonCycled<'a> {
    modes: &'a SharedModeCycle,
    config: ButtonCycledConfig,
}

impl<'a> ButtonCycled<'a> {
    pub const fn new(modes: &'a SharedModeCycle, config: ButtonCycledConfig) -> Self {
        Self { modes, config }
    }
}

impl OutputPolicy for ButtonCycled<'_> {
    fn tick_period(&self) -> Duration {
        self.config.tick_period
    }

    fn evaluate(&mut self, _now: Instant) -> Frame {
        self.config.frame(self.modes.mode())
    }
}
