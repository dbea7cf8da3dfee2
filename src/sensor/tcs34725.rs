//! TCS34725 color sensor (GY-33 module)

use embedded_hal::{delay::DelayNs, i2c::I2c};

use super::{ColorSensor, SensorError, bus_error};
use crate::config::COLOR_INTEGRATION_TIME;
use crate::sample::RawColorSample;

pub const TCS34725_ADDR: u8 = 0x29;

// Register addresses already carry the command bit (0x80)
const REG_ENABLE: u8 = 0x80;
const REG_ATIME: u8 = 0x81;
const REG_CONTROL: u8 = 0x8F;
const REG_STATUS: u8 = 0x93;
const REG_CDATA: u8 = 0x94;
const REG_RDATA: u8 = 0x96;
const REG_GDATA: u8 = 0x98;
const REG_BDATA: u8 = 0x9A;

/// Power on + RGBC enable
const ENABLE_PON_AEN: u8 = 0x03;
/// 11 integration cycles, 26.4 ms
const ATIME_26_MS: u8 = 0xF5;
/// 1x gain
const CONTROL_GAIN_1X: u8 = 0x00;

const STATUS_AVALID: u8 = 0x01;

/// Status polls before giving up on a measurement
const READY_POLL_ATTEMPTS: u8 = 3;

/// Blocking TCS34725 driver
pub struct Tcs34725<I2C, D> {
    i2c: I2C,
    delay: D,
}

impl<I2C: I2c, D: DelayNs> Tcs34725<I2C, D> {
    pub const fn new(i2c: I2C, delay: D) -> Self {
        Self { i2c, delay }
    }

    /// Power on with 26.4 ms integration time and 1x gain
    pub fn enable(&mut self) -> Result<(), SensorError> {
        self.write_register(REG_ENABLE, ENABLE_PON_AEN)?;
        self.write_register(REG_ATIME, ATIME_26_MS)?;
        self.write_register(REG_CONTROL, CONTROL_GAIN_1X)
    }

    /// Wait for a completed integration cycle.
    ///
    /// Returns [`SensorError::Timeout`] if none completes within
    /// `READY_POLL_ATTEMPTS` integration periods.
    #[allow(clippy::cast_possible_truncation)]
    pub fn wait_ready(&mut self) -> Result<(), SensorError> {
        for _ in 0..READY_POLL_ATTEMPTS {
            if self.read_byte(REG_STATUS)? & STATUS_AVALID != 0 {
                return Ok(());
            }
            self.delay
                .delay_ms(COLOR_INTEGRATION_TIME.as_millis() as u32);
        }
        Err(SensorError::Timeout)
    }

    /// Release the bus and delay provider
    pub fn destroy(self) -> (I2C, D) {
        (self.i2c, self.delay)
    }

    fn write_register(&mut self, register: u8, value: u8) -> Result<(), SensorError> {
        self.i2c
            .write(TCS34725_ADDR, &[register, value])
            .map_err(bus_error)
    }

    fn read_byte(&mut self, register: u8) -> Result<u8, SensorError> {
        let mut buffer = [0u8; 1];
        self.i2c
            .write_read(TCS34725_ADDR, &[register], &mut buffer)
            .map_err(bus_error)?;
        Ok(buffer[0])
    }

    fn read_word(&mut self, register: u8) -> Result<u16, SensorError> {
        let mut buffer = [0u8; 2];
        self.i2c
            .write_read(TCS34725_ADDR, &[register], &mut buffer)
            .map_err(bus_error)?;
        Ok(u16::from_le_bytes(buffer))
    }
}

impl<I2C: I2c, D: DelayNs> ColorSensor for Tcs34725<I2C, D> {
    fn init(&mut self) -> Result<(), SensorError> {
        self.enable()
    }

    fn read_color(&mut self) -> Result<RawColorSample, SensorError> {
        self.wait_ready()?;
        let c = self.read_word(REG_CDATA)?;
        let r = self.read_word(REG_RDATA)?;
        let g = self.read_word(REG_GDATA)?;
        let b = self.read_word(REG_BDATA)?;
        Ok(RawColorSample::new(r, g, b, c))
    }
}
