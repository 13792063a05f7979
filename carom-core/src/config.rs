//! Configuration type definitions
//!
//! The demo has no runtime configuration channel; firmware binaries bake
//! these values in as constants. Defaults describe the 240x240 panel the
//! project ships on.

/// Panel geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PanelConfig {
    /// Visible width in pixels
    pub width: u16,
    /// Visible height in pixels
    pub height: u16,
}

impl PanelConfig {
    /// Create a panel description
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Largest valid x coordinate
    pub const fn max_x(&self) -> i32 {
        self.width as i32 - 1
    }

    /// Largest valid y coordinate
    pub const fn max_y(&self) -> i32 {
        self.height as i32 - 1
    }
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self::new(240, 240)
    }
}

/// What the firmware draws after bring-up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DemoMode {
    /// Render the band backdrop with a centered square once, then idle
    Static,
    /// Run the bouncing-ball animation loop
    #[default]
    Bounce,
}

/// Demo parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DemoConfig {
    /// Rendering mode
    pub mode: DemoMode,
    /// Ball radius in pixels
    pub radius: i32,
    /// Ball starting center, x
    pub start_x: i32,
    /// Ball starting center, y
    pub start_y: i32,
    /// Ball velocity per tick, x (pixels)
    pub velocity_x: i32,
    /// Ball velocity per tick, y (pixels)
    pub velocity_y: i32,
    /// Pause between animation ticks in milliseconds
    pub frame_delay_ms: u64,
    /// Skip the inter-tick pause and run flat out
    pub unlimited: bool,
    /// Extra pixels added around the ball when computing dirty bounds
    pub margin: i32,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            mode: DemoMode::Bounce,
            radius: 18,
            start_x: 22,
            start_y: 22,
            velocity_x: 2,
            velocity_y: 2,
            frame_delay_ms: 10,
            unlimited: false,
            margin: 2,
        }
    }
}
