use libm::roundf;

/// Scale an 8-bit value by a real factor, rounding to the nearest integer.
///
/// The result saturates at 0 and 255.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn scale_rounded(value: u8, factor: f32) -> u8 {
    let scaled = roundf(f32::from(value) * factor);
    scaled.clamp(0.0, 255.0) as u8
}

/// Map a 0-100 percentage onto 0-255.
///
/// Values above 100 are treated as 100.
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn percent8(percent: u8) -> u8 {
    let percent = if percent > 100 { 100 } else { percent };
    (percent as u16 * 255 / 100) as u8
}
