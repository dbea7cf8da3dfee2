#![no_std]

pub mod alert;
pub mod color;
pub mod composer;
pub mod config;
pub mod display;
pub mod gamma;
pub mod intensity;
pub mod interrupt;
pub mod math8;
pub mod matrix;
pub mod mode_cycle;
pub mod output;
pub mod policy;
pub mod sample;
pub mod sensor;
pub mod tick_scheduler;

pub use composer::{Composition, PwmChannel, PwmLevels};
pub use display::{DisplayConfig, DisplayLine, DisplayLines};
pub use intensity::Intensity;
pub use interrupt::{BootloaderEntry, ButtonEvent, InterruptCommand};
pub use matrix::{Glyph, MatrixColor, MatrixFrame};
pub use mode_cycle::{Mode, ModeCycle, SharedModeCycle};
pub use output::{BuzzerSink, DisplaySink, FrameSink, OutputSinks, PwmSink};
pub use policy::{
    ButtonCycled, ButtonCycledConfig, Frame, OutputPolicy, SensorDriven, SensorDrivenConfig,
};
pub use sample::{Lux, RawColorSample, Sample};
pub use sensor::{ColorSensor, IlluminanceSensor, Reading, SampleHold, SensorError};
pub use tick_scheduler::{TickResult, TickScheduler};

pub use color::Rgb;
pub use embassy_time::{Duration, Instant};

/// Abstract LED driver trait
///
/// Implement this trait to drive the addressable LED matrix.
/// Colors arrive in transmission order.
pub trait OutputDriver {
    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]);
}
