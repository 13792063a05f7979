//! RP2040 implementation of the Carom hardware abstraction layer
//!
//! Wraps embassy-rp peripherals in newtypes that implement the traits
//! from [`carom_hal`], so the display driver and bus utilities stay
//! chip-agnostic while the firmware binaries own the concrete wiring.

#![no_std]

pub mod gpio;
pub mod i2c;
pub mod spi;

pub use gpio::OutputLine;
pub use i2c::I2cPort;
pub use spi::SpiPort;
