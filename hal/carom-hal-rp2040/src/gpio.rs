//! GPIO abstractions for RP2040
//!
//! Adapts an embassy-rp output pin to the [`carom_hal::OutputPin`] trait.

use carom_hal::OutputPin;
use embassy_rp::gpio::Output;

/// Push-pull output line backed by an embassy-rp GPIO
pub struct OutputLine<'d> {
    inner: Output<'d>,
}

impl<'d> OutputLine<'d> {
    /// Wrap a configured embassy-rp output
    pub fn new(inner: Output<'d>) -> Self {
        Self { inner }
    }
}

impl OutputPin for OutputLine<'_> {
    fn set_high(&mut self) {
        self.inner.set_high();
    }

    fn set_low(&mut self) {
        self.inner.set_low();
    }
}
