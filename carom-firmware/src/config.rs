//! Compile-time demo configuration
//!
//! The firmware has no configuration channel at runtime; these constants
//! fill that role. Edit and rebuild to change the demo.

use carom_core::color::{self, Rgb565};
use carom_core::config::{DemoConfig, DemoMode, PanelConfig};
use carom_core::scene::BAND_COUNT;

/// Panel dimensions as wired on this board
pub const PANEL: PanelConfig = PanelConfig::new(240, 240);

/// Demo selection and motion parameters
pub const DEMO: DemoConfig = DemoConfig {
    mode: DemoMode::Bounce,
    radius: 18,
    start_x: 22,
    start_y: 22,
    velocity_x: 2,
    velocity_y: 2,
    frame_delay_ms: 10,
    unlimited: false,
    margin: 2,
};

/// Backdrop band colors, top to bottom
pub const BANDS: [Rgb565; BAND_COUNT] = [color::RED, color::GREEN, color::BLUE];

/// Ball and static-square fill color
pub const FOREGROUND: Rgb565 = color::WHITE;

/// Side length of the centered square in the static demo
pub const SQUARE_SIDE: u16 = 80;

/// SPI clock for the panel
pub const SPI_FREQ_HZ: u32 = 62_500_000;
