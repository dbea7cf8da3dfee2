//! Illuminance to brightness factor mapping

use crate::math8::scale_rounded;
use crate::sample::Lux;

/// Brightness factor in `[0.0, 1.0]` derived from the ambient illuminance.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct Intensity(f32);

impl Intensity {
    pub const ZERO: Self = Self(0.0);
    pub const FULL: Self = Self(1.0);

    /// Linear ramp from 0 lux to `max_lux`, saturating above it.
    ///
    /// A `max_lux` of zero is always saturated.
    pub fn from_lux(lux: Lux, max_lux: u16) -> Self {
        if lux >= max_lux {
            return Self::FULL;
        }
        Self(f32::from(lux) / f32::from(max_lux))
    }

    pub const fn value(self) -> f32 {
        self.0
    }

    /// Scale a single 8-bit channel by this factor
    pub fn scale(self, channel: u8) -> u8 {
        scale_rounded(channel, self.0)
    }
}
