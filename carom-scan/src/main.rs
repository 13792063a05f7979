//! I2C bus scanner
//!
//! Small bring-up utility: walks the 7-bit I2C address space on the
//! expansion header and reports every device that acknowledges a read.
//! Useful for checking wiring before flashing the main firmware.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::i2c::{self, I2c};
use embassy_time::Timer;
use {defmt_rtt as _, panic_probe as _};

use carom_hal::I2cBus;
use carom_hal_rp2040::I2cPort;

/// First scanned address; 0x00-0x07 are reserved
const SCAN_START: u8 = 0x08;
/// Last scanned address; 0x78-0x7f are reserved
const SCAN_END: u8 = 0x77;

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Carom scan starting...");

    let p = embassy_rp::init(Default::default());

    // I2C0 on the expansion header, standard mode
    let mut cfg = i2c::Config::default();
    cfg.frequency = 100_000;
    let bus = I2c::new_blocking(p.I2C0, p.PIN_5, p.PIN_4, cfg);
    let mut port = I2cPort::new(bus);

    info!(
        "Scanning 0x{=u8:02x}..0x{=u8:02x}",
        SCAN_START, SCAN_END
    );

    let mut probe = [0u8; 1];
    let mut found = 0u32;
    for addr in SCAN_START..=SCAN_END {
        if port.read(addr, &mut probe).is_ok() {
            info!("Device found at 0x{=u8:02x}", addr);
            found += 1;
        }
    }
    info!("Scan complete: {} device(s) found", found);

    loop {
        Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
