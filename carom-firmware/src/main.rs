//! Carom - Bouncing-Ball Display Demo Firmware
//!
//! Main firmware binary for RP2040 boards driving a 240x240 ST7789V TFT
//! (wired like the Waveshare Pico-LCD-1.3). Paints a three-band backdrop
//! and bounces a ball over it, repainting only the dirty patch each
//! frame. The A key requests a clean stop.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::spi::{self, Spi};
use embassy_time::{Delay, Timer};
use embedded_alloc::LlffHeap as Heap;
use {defmt_rtt as _, panic_probe as _};

use carom_core::config::DemoMode;
use carom_core::scene::Scene;
use carom_drivers::st7789::St7789;
use carom_hal_rp2040::{OutputLine, SpiPort};

mod channels;
mod config;
mod render;
mod tasks;

// Heap allocator for the render scratch buffer
#[global_allocator]
static HEAP: Heap = Heap::empty();
const HEAP_SIZE: usize = 32 * 1024;

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Carom firmware starting...");

    init_heap();

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Panel control lines (Pico-LCD-1.3 wiring)
    let mut backlight = Output::new(p.PIN_13, Level::Low);
    let dc = OutputLine::new(Output::new(p.PIN_8, Level::Low));
    let rst = OutputLine::new(Output::new(p.PIN_12, Level::Low));
    let cs = Output::new(p.PIN_9, Level::High);

    // SPI1 to the panel, write-only
    let mut spi_config = spi::Config::default();
    spi_config.frequency = config::SPI_FREQ_HZ;
    let spi = Spi::new_blocking_txonly(p.SPI1, p.PIN_10, p.PIN_11, spi_config);

    let mut screen = St7789::new(SpiPort::new(spi, cs), dc, rst);
    let mut delay = Delay;
    screen.hard_reset(&mut delay);
    backlight.set_high();

    if let Err(e) = screen.init(&mut delay) {
        defmt::panic!("Panel init failed: {}", e);
    }
    info!("Panel initialized");

    match config::DEMO.mode {
        DemoMode::Static => {
            let scene = Scene::new(config::PANEL, config::BANDS, config::FOREGROUND);
            match render::render_static(&mut screen, &scene) {
                Ok(()) => info!("Static pattern rendered"),
                Err(e) => error!("Static render failed: {}", e),
            }
        }
        DemoMode::Bounce => {
            let key_a = Input::new(p.PIN_15, Pull::Up);
            spawner.spawn(tasks::input_task(key_a)).unwrap();
            spawner.spawn(tasks::animation_task(screen)).unwrap();
            info!("All tasks spawned");
        }
    }

    loop {
        Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}

fn init_heap() {
    use core::mem::MaybeUninit;
    static mut HEAP_MEM: [MaybeUninit<u8>; HEAP_SIZE] = [MaybeUninit::uninit(); HEAP_SIZE];
    #[allow(static_mut_refs)]
    unsafe {
        HEAP.init(HEAP_MEM.as_ptr() as usize, HEAP_SIZE)
    }
}
