use embassy_time::{Duration, Instant};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use super::{Frame, OutputPolicy};
use crate::alert::{buzzer_duty, is_alert};
use crate::color::normalize;
use crate::composer::Composition;
use crate::config::{MAX_HELD_SAMPLES, MAX_LUX, SENSOR_TICK_PERIOD};
use crate::display::{self, DisplayConfig};
use crate::intensity::Intensity;
use crate::matrix::{self, Glyph};
use crate::sample::Sample;
use crate::sensor::{ColorSensor, IlluminanceSensor, Reading, SampleHold, SensorError, SensorPair};

/// Configuration of the sensor-driven policy
#[derive(Debug, Clone, Copy)]
pub struct SensorDrivenConfig {
    /// Illuminance mapped to full intensity
    pub max_lux: u16,
    pub tick_period: Duration,
    /// Failed reads that may reuse the last valid sample
    pub max_held_samples: u8,
    /// Matrix cells lit with the measured color
    pub glyph: Glyph,
    pub display: DisplayConfig,
}

impl SensorDrivenConfig {
    pub const fn new() -> Self {
        Self {
            max_lux: MAX_LUX,
            tick_period: SENSOR_TICK_PERIOD,
            max_held_samples: MAX_HELD_SAMPLES,
            glyph: Glyph::FULL,
            display: DisplayConfig::new(),
        }
    }

    /// Frame for a single sample
    pub fn frame(&self, sample: &Sample) -> Frame {
        let normalized = normalize(sample.color);
        let intensity = Intensity::from_lux(sample.lux, self.max_lux);
        let composition = Composition::new(normalized, intensity);

        Frame {
            pwm: composition.pwm,
            matrix: matrix::render(&self.glyph, composition.brightness),
            buzzer_duty: buzzer_duty(is_alert(sample)),
            display: display::telemetry(sample, &self.display),
        }
    }
}

impl Default for SensorDrivenConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Mirrors the measured color and light level on the outputs
pub struct SensorDriven<L, C> {
    sensors: SensorPair<L, C>,
    hold: SampleHold,
    config: SensorDrivenConfig,
}

impl<L: IlluminanceSensor, C: ColorSensor> SensorDriven<L, C> {
    pub const fn new(light: L, color: C, config: SensorDrivenConfig) -> Self {
        Self {
            sensors: SensorPair::new(light, color),
            hold: SampleHold::new(config.max_held_samples),
            config,
        }
    }

    /// Initialize both sensors
    pub fn init(&mut self) -> Result<(), SensorError> {
        self.sensors.init()
    }

    /// Read the sensors and apply the failure policy
    pub fn read(&mut self) -> Reading {
        let reading = self.hold.update(self.sensors.read());
        #[cfg(feature = "esp32-log")]
        if let Reading::Fresh(sample) = reading {
            println!(
                "R={}, G={}, B={}, C={}, Lux={}",
                sample.color.r, sample.color.g, sample.color.b, sample.color.c, sample.lux
            );
        }
        reading
    }

    /// Release the sensors
    pub fn destroy(self) -> (L, C) {
        self.sensors.destroy()
    }
}

impl<L: IlluminanceSensor, C: ColorSensor> OutputPolicy for SensorDriven<L, C> {
    fn tick_period(&self) -> Duration {
        self.config.tick_period
    }

    fn evaluate(&mut self, _now: Instant) -> Frame {
        match self.read().sample() {
            Some(sample) => self.config.frame(&sample),
            None => Frame::fail_safe(&self.config.display),
        }
    }
}
