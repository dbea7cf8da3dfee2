//! Brightness independent color extraction
//!
//! Scales the raw sensor channels so the strongest one lands on 255,
//! keeping the proportions between them.

use libm::roundf;

use crate::color::{BLACK, Rgb};
use crate::sample::RawColorSample;

/// Normalize raw channel counts into a 0-255 color.
///
/// The largest of R, G and B maps to exactly 255. A sample with all three
/// color channels at zero yields black regardless of the clear channel.
pub fn normalize(sample: RawColorSample) -> Rgb {
    let max = sample.max_channel();
    if max == 0 {
        return BLACK;
    }

    let max = f32::from(max);
    Rgb {
        r: proportion(sample.r, max),
        g: proportion(sample.g, max),
        b: proportion(sample.b, max),
    }
}

#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn proportion(value: u16, max: f32) -> u8 {
    // value <= max, so the result never exceeds 255
    roundf(f32::from(value) * 255.0 / max) as u8
}
