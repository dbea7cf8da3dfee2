//! Perceptual correction for PWM driven LEDs.

/// Square an 8-bit level into the 16-bit PWM domain (0-65025).
///
/// Linear duty cycle looks too dim at the low end, squaring
/// approximates the eye's power-law response.
#[inline]
#[allow(clippy::cast_lossless)]
pub const fn square(level: u8) -> u16 {
    level as u16 * level as u16
}
