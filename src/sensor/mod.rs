//! Sensor capabilities
//!
//! The pipeline only depends on the [`IlluminanceSensor`] and [`ColorSensor`]
//! traits. Blocking `embedded-hal` drivers for the BH1750 and TCS34725 are
//! bundled.

mod bh1750;
mod hold;
mod tcs34725;

use core::fmt;

#[cfg(feature = "esp32-log")]
use esp_println::println;

pub use bh1750::{BH1750_ADDR, BH1750_ADDR_ALT, Bh1750, raw_to_lux};
pub use hold::{Reading, SampleHold};
pub use tcs34725::{TCS34725_ADDR, Tcs34725};

use crate::sample::{Lux, RawColorSample, Sample};

/// Sensor read failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorError {
    /// The device did not respond or the bus failed
    Unavailable,
    /// The device responded but never produced valid data
    Timeout,
}

impl fmt::Display for SensorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable => f.write_str("sensor unavailable"),
            Self::Timeout => f.write_str("sensor timed out"),
        }
    }
}

impl core::error::Error for SensorError {}

/// Ambient light sensor
pub trait IlluminanceSensor {
    /// Bring the sensor into measuring state
    fn init(&mut self) -> Result<(), SensorError> {
        Ok(())
    }

    /// Take one blocking illuminance measurement
    fn read_illuminance(&mut self) -> Result<Lux, SensorError>;
}

/// RGB + clear color sensor
pub trait ColorSensor {
    /// Bring the sensor into measuring state
    fn init(&mut self) -> Result<(), SensorError> {
        Ok(())
    }

    /// Read all four channels
    fn read_color(&mut self) -> Result<RawColorSample, SensorError>;
}

/// Both sensors of the board, read together once per tick
pub struct SensorPair<L, C> {
    light: L,
    color: C,
}

impl<L: IlluminanceSensor, C: ColorSensor> SensorPair<L, C> {
    pub const fn new(light: L, color: C) -> Self {
        Self { light, color }
    }

    /// Initialize both sensors
    pub fn init(&mut self) -> Result<(), SensorError> {
        self.light.init()?;
        self.color.init()
    }

    /// Read color first, then illuminance
    pub fn read(&mut self) -> Result<Sample, SensorError> {
        let color = self.color.read_color()?;
        let lux = self.light.read_illuminance()?;
        Ok(Sample::new(color, lux))
    }

    /// Release the sensors
    pub fn destroy(self) -> (L, C) {
        (self.light, self.color)
    }
}

/// Map a bus error onto [`SensorError::Unavailable`]
pub(crate) fn bus_error<E: embedded_hal::i2c::Error>(error: E) -> SensorError {
    #[cfg(feature = "esp32-log")]
    println!("[sensor] i2c error: {:?}", error.kind());
    #[cfg(not(feature = "esp32-log"))]
    let _ = error;
    SensorError::Unavailable
}
