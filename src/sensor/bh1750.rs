//! BH1750 ambient light sensor

use embedded_hal::{delay::DelayNs, i2c::I2c};

use super::{IlluminanceSensor, SensorError, bus_error};
use crate::config::ILLUMINANCE_SETTLE_TIME;
use crate::sample::Lux;

/// Address with the ADDR pin low
pub const BH1750_ADDR: u8 = 0x23;
/// Address with the ADDR pin high
pub const BH1750_ADDR_ALT: u8 = 0x5C;

const CMD_POWER_ON: u8 = 0x01;
const CMD_CONTINUOUS_HIGH_RES: u8 = 0x10;

/// Convert a raw high resolution count into lux (`raw / 1.2`)
#[allow(clippy::cast_possible_truncation)]
pub const fn raw_to_lux(raw: u16) -> Lux {
    (raw as u32 * 5 / 6) as Lux
}

/// Blocking BH1750 driver
pub struct Bh1750<I2C, D> {
    i2c: I2C,
    delay: D,
    address: u8,
}

impl<I2C: I2c, D: DelayNs> Bh1750<I2C, D> {
    pub const fn new(i2c: I2C, delay: D) -> Self {
        Self::with_address(i2c, delay, BH1750_ADDR)
    }

    pub const fn with_address(i2c: I2C, delay: D, address: u8) -> Self {
        Self {
            i2c,
            delay,
            address,
        }
    }

    pub fn power_on(&mut self) -> Result<(), SensorError> {
        self.write_command(CMD_POWER_ON)
    }

    /// Trigger a high resolution measurement and read the raw count.
    ///
    /// Blocks for [`ILLUMINANCE_SETTLE_TIME`].
    #[allow(clippy::cast_possible_truncation)]
    pub fn read_raw(&mut self) -> Result<u16, SensorError> {
        self.write_command(CMD_CONTINUOUS_HIGH_RES)?;
        self.delay
            .delay_ms(ILLUMINANCE_SETTLE_TIME.as_millis() as u32);

        let mut buffer = [0u8; 2];
        self.i2c
            .read(self.address, &mut buffer)
            .map_err(bus_error)?;
        Ok(u16::from_be_bytes(buffer))
    }

    /// Release the bus and delay provider
    pub fn destroy(self) -> (I2C, D) {
        (self.i2c, self.delay)
    }

    fn write_command(&mut self, command: u8) -> Result<(), SensorError> {
        self.i2c
            .write(self.address, &[command])
            .map_err(bus_error)
    }
}

impl<I2C: I2c, D: DelayNs> IlluminanceSensor for Bh1750<I2C, D> {
    fn init(&mut self) -> Result<(), SensorError> {
        self.power_on()
    }

    fn read_illuminance(&mut self) -> Result<Lux, SensorError> {
        self.read_raw().map(raw_to_lux)
    }
}
