//! Output sinks
//!
//! Hardware facing traits for every peripheral the pipeline drives, and
//! [`OutputSinks`] which writes a whole [`Frame`] to them.

use crate::OutputDriver;
use crate::composer::PwmChannel;
use crate::display::DisplayLine;
use crate::policy::Frame;

/// PWM slices of the RGB LED
pub trait PwmSink {
    fn set_duty(&mut self, channel: PwmChannel, value: u16);
}

/// PWM slice of the buzzer
pub trait BuzzerSink {
    fn set_duty(&mut self, value: u16);
}

/// Monochrome text display
pub trait DisplaySink {
    /// Clear the pixel buffer
    fn clear(&mut self);

    /// Draw text into the pixel buffer with its top-left corner at (x, y)
    fn draw_text(&mut self, line: &str, x: i32, y: i32);

    /// Transmit the pixel buffer to the panel
    fn flush(&mut self);

    /// Replace the screen content with `lines`
    fn render(&mut self, lines: &[DisplayLine]) {
        self.clear();
        for line in lines {
            self.draw_text(&line.text, line.x, line.y);
        }
        self.flush();
    }
}

/// Consumer of complete frames
pub trait FrameSink {
    fn apply(&mut self, frame: &Frame);
}

/// The board's output peripherals
pub struct OutputSinks<P, M, B, D> {
    pub pwm: P,
    pub matrix: M,
    pub buzzer: B,
    pub display: D,
}

impl<P, M, B, D> OutputSinks<P, M, B, D>
where
    P: PwmSink,
    M: OutputDriver,
    B: BuzzerSink,
    D: DisplaySink,
{
    pub const fn new(pwm: P, matrix: M, buzzer: B, display: D) -> Self {
        Self {
            pwm,
            matrix,
            buzzer,
            display,
        }
    }
}

impl<P, M, B, D> FrameSink for OutputSinks<P, M, B, D>
where
    P: PwmSink,
    M: OutputDriver,
    B: BuzzerSink,
    D: DisplaySink,
{
    /// Write LED, matrix, buzzer and display in that order
    fn apply(&mut self, frame: &Frame) {
        for (channel, level) in frame.pwm.channels() {
            self.pwm.set_duty(channel, level);
        }
        self.matrix.write(&frame.matrix);
        self.buzzer.set_duty(frame.buzzer_duty);
        self.display.render(&frame.display);
    }
}
