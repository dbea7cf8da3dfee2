//! Telemetry text for the monochrome display
//!
//! Lines are plain values with their pixel position; the display sink only
//! has to draw them.

use core::fmt::{self, Write};

use heapless::{String, Vec};

use crate::mode_cycle::Mode;
use crate::sample::Sample;

/// Characters stored per line. `Lux:65535`, the longest telemetry line, fits
/// exactly.
pub const LINE_CAPACITY: usize = 9;

/// Maximum number of lines on one screen
pub const MAX_LINES: usize = 6;

/// Text of a single line
pub type LineText = String<LINE_CAPACITY>;

/// Lines of one screen
pub type DisplayLines = Vec<DisplayLine, MAX_LINES>;

/// A line of text and its top-left position in pixels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayLine {
    pub text: LineText,
    pub x: i32,
    pub y: i32,
}

/// Static text shown above the telemetry
#[derive(Debug, Clone, Copy)]
pub struct DisplayConfig {
    pub banner: [&'static str; 2],
}

impl DisplayConfig {
    pub const fn new() -> Self {
        Self {
            banner: ["AMB LIGHT", "RGB + LUX"],
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self::new()
    }
}

const BANNER_POSITIONS: [(i32, i32); 2] = [(8, 6), (20, 16)];

/// Banners followed by the raw channel counts and the illuminance
pub fn telemetry(sample: &Sample, config: &DisplayConfig) -> DisplayLines {
    let mut lines = banner(config);
    push(&mut lines, line(format_args!("R:{}", sample.color.r), 14, 30));
    push(&mut lines, line(format_args!("G:{}", sample.color.g), 14, 40));
    push(&mut lines, line(format_args!("B:{}", sample.color.b), 14, 50));
    push(&mut lines, line(format_args!("Lux:{}", sample.lux), 60, 40));
    lines
}

/// Screen shown while the outputs are in the fail-safe state
pub fn sensor_error(config: &DisplayConfig) -> DisplayLines {
    let mut lines = banner(config);
    push(&mut lines, line(format_args!("NO SENSOR"), 14, 30));
    lines
}

/// Screen shown by the button-cycled policy
pub fn mode_screen(mode: Mode, config: &DisplayConfig) -> DisplayLines {
    let mut lines = banner(config);
    push(&mut lines, line(format_args!("Mode:{}", mode.label()), 14, 30));
    lines
}

fn banner(config: &DisplayConfig) -> DisplayLines {
    let mut lines = DisplayLines::new();
    for (text, (x, y)) in config.banner.iter().zip(BANNER_POSITIONS) {
        push(&mut lines, line(format_args!("{}", text), x, y));
    }
    lines
}

fn push(lines: &mut DisplayLines, line: DisplayLine) {
    // Screens are built with at most MAX_LINES lines
    let _ = lines.push(line);
}

/// Format a line, cutting it at [`LINE_CAPACITY`] characters
fn line(args: fmt::Arguments<'_>, x: i32, y: i32) -> DisplayLine {
    let mut text = LineText::new();
    let _ = Truncating(&mut text).write_fmt(args);
    DisplayLine { text, x, y }
}

struct Truncating<'a>(&'a mut LineText);

impl Write for Truncating<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for ch in s.chars() {
            if self.0.push(ch).is_err() {
                break;
            }
        }
        Ok(())
    }
}
