//! Input task
//!
//! Watches the user key and requests a clean animation stop.

use defmt::*;
use embassy_rp::gpio::Input;
use embassy_time::{Duration, Timer};

use crate::channels::STOP;

#[embassy_executor::task]
pub async fn input_task(mut key: Input<'static>) {
    info!("Input task started");

    loop {
        key.wait_for_falling_edge().await;

        // Debounce
        Timer::after(Duration::from_millis(20)).await;
        if key.is_low() {
            info!("Stop requested");
            STOP.signal(());

            // Wait for release, then settle
            key.wait_for_rising_edge().await;
            Timer::after(Duration::from_millis(50)).await;
        }
    }
}
