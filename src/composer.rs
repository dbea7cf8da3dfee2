//! Output composition
//!
//! Combines the normalized color with the intensity factor and derives the
//! values written to the PWM driven RGB LED.
//!
//! The PWM LED gets squared (gamma corrected) levels while the matrix is fed
//! the linear levels. The two therefore follow different brightness curves
//! for the same sample.

use crate::color::Rgb;
use crate::config::PWM_FULL_DUTY;
use crate::gamma::square;
use crate::intensity::Intensity;

/// PWM output channels of the RGB LED
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PwmChannel {
    Red,
    Green,
    Blue,
}

/// Duty cycle levels for the three LED channels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PwmLevels {
    pub r: u16,
    pub g: u16,
    pub b: u16,
}

impl PwmLevels {
    /// All channels off
    pub const OFF: Self = Self { r: 0, g: 0, b: 0 };

    /// Gamma corrected levels (`x²`) for a final brightness
    pub const fn gamma_corrected(brightness: Rgb) -> Self {
        Self {
            r: square(brightness.r),
            g: square(brightness.g),
            b: square(brightness.b),
        }
    }

    /// Fully on / fully off levels, for driving the LED as plain outputs
    pub const fn digital(red: bool, green: bool, blue: bool) -> Self {
        const fn level(on: bool) -> u16 {
            if on { PWM_FULL_DUTY } else { 0 }
        }
        Self {
            r: level(red),
            g: level(green),
            b: level(blue),
        }
    }

    /// Channel and level pairs in write order
    pub const fn channels(self) -> [(PwmChannel, u16); 3] {
        [
            (PwmChannel::Red, self.r),
            (PwmChannel::Green, self.g),
            (PwmChannel::Blue, self.b),
        ]
    }
}

/// Scale a normalized color by the intensity factor.
///
/// Returns the final (linear) brightness of each channel.
pub fn scale_color(normalized: Rgb, intensity: Intensity) -> Rgb {
    Rgb {
        r: intensity.scale(normalized.r),
        g: intensity.scale(normalized.g),
        b: intensity.scale(normalized.b),
    }
}

/// Final brightness together with its PWM representation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Composition {
    /// Linear levels, as sent to the matrix
    pub brightness: Rgb,
    /// Squared levels, as sent to the PWM LED
    pub pwm: PwmLevels,
}

impl Composition {
    pub fn new(normalized: Rgb, intensity: Intensity) -> Self {
        let brightness = scale_color(normalized, intensity);
        Self {
            brightness,
            pwm: PwmLevels::gamma_corrected(brightness),
        }
    }
}
