//! I2C abstractions for RP2040
//!
//! Adapts a blocking embassy-rp I2C peripheral to the
//! [`carom_hal::I2cBus`] trait.

use carom_hal::I2cBus;
use embassy_rp::i2c::{self, Blocking, I2c, Instance};

/// Blocking I2C port
pub struct I2cPort<'d, T: Instance> {
    bus: I2c<'d, T, Blocking>,
}

impl<'d, T: Instance> I2cPort<'d, T> {
    /// Take ownership of a configured I2C peripheral
    pub fn new(bus: I2c<'d, T, Blocking>) -> Self {
        Self { bus }
    }
}

impl<T: Instance> I2cBus for I2cPort<'_, T> {
    type Error = i2c::Error;

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error> {
        embedded_hal::i2c::I2c::write(&mut self.bus, address, data)
    }

    fn read(&mut self, address: u8, buf: &mut [u8]) -> Result<(), Self::Error> {
        embedded_hal::i2c::I2c::read(&mut self.bus, address, buf)
    }

    fn write_read(
        &mut self,
        address: u8,
        write_data: &[u8],
        read_buf: &mut [u8],
    ) -> Result<(), Self::Error> {
        embedded_hal::i2c::I2c::write_read(&mut self.bus, address, write_data, read_buf)
    }
}
