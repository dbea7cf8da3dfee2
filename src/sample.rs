/// Illuminance in lux as reported by the light sensor.
pub type Lux = u16;

/// Raw channel counts of the color sensor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RawColorSample {
    pub r: u16,
    pub g: u16,
    pub b: u16,
    /// Clear (unfiltered) channel
    pub c: u16,
}

impl RawColorSample {
    pub const fn new(r: u16, g: u16, b: u16, c: u16) -> Self {
        Self { r, g, b, c }
    }

    /// Largest of the three color channels (clear is ignored)
    pub const fn max_channel(self) -> u16 {
        let max = if self.r > self.g { self.r } else { self.g };
        if max > self.b { max } else { self.b }
    }

    /// Red is strictly greater than both green and blue
    pub const fn is_red_dominant(self) -> bool {
        self.r > self.g && self.r > self.b
    }
}

/// One reading of both sensors, taken in the same loop iteration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sample {
    pub color: RawColorSample,
    pub lux: Lux,
}

impl Sample {
    pub const fn new(color: RawColorSample, lux: Lux) -> Self {
        Self { color, lux }
    }
}
