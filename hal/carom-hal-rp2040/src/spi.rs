//! SPI abstractions for RP2040
//!
//! Adapts a blocking embassy-rp SPI peripheral to the write-only
//! [`carom_hal::SpiBus`] trait. The chip-select line lives here so that
//! every trait-level write lands on the wire as one framed transaction.

use carom_hal::SpiBus;
use embassy_rp::gpio::Output;
use embassy_rp::spi::{self, Blocking, Instance, Spi};

/// Write-only SPI port with a dedicated chip-select line
pub struct SpiPort<'d, T: Instance> {
    spi: Spi<'d, T, Blocking>,
    cs: Output<'d>,
}

impl<'d, T: Instance> SpiPort<'d, T> {
    /// Take ownership of a configured SPI peripheral and its CS pin
    ///
    /// `cs` should already be driven high (deselected).
    pub fn new(spi: Spi<'d, T, Blocking>, cs: Output<'d>) -> Self {
        Self { spi, cs }
    }
}

impl<T: Instance> SpiBus for SpiPort<'_, T> {
    type Error = spi::Error;

    fn write(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.cs.set_low();
        let res = self.spi.blocking_write(data);
        self.cs.set_high();
        res
    }
}
