//! Ball kinematics with edge reflection
//!
//! Each animation tick advances the ball by its velocity and reflects it
//! off the panel edges. Axes are independent, so corner hits reverse both
//! velocity components in the same tick. Positions and velocities are
//! plain pixel integers; one tick moves the ball by one velocity step.

use crate::config::PanelConfig;

/// A ball moving across the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Ball {
    /// Center x in pixels
    pub x: i32,
    /// Center y in pixels
    pub y: i32,
    /// Velocity x in pixels per tick
    pub vx: i32,
    /// Velocity y in pixels per tick
    pub vy: i32,
    /// Radius in pixels
    pub radius: i32,
}

impl Ball {
    /// Place a ball with an initial velocity
    pub const fn new(x: i32, y: i32, vx: i32, vy: i32, radius: i32) -> Self {
        Self { x, y, vx, vy, radius }
    }

    /// Advance one tick, reflecting off the panel edges
    ///
    /// A bounce off the near edge rests the center at `radius`, so the
    /// ball touches coordinate zero exactly. A bounce off the far edge
    /// rests one pixel short of it, at `max - radius - 1`.
    pub fn step(&mut self, panel: &PanelConfig) {
        self.x = step_axis(self.x, &mut self.vx, self.radius, panel.max_x());
        self.y = step_axis(self.y, &mut self.vy, self.radius, panel.max_y());
    }
}

fn step_axis(pos: i32, vel: &mut i32, radius: i32, max: i32) -> i32 {
    let next = pos + *vel;
    if next - radius < 0 {
        *vel = -*vel;
        radius
    } else if next + radius > max {
        *vel = -*vel;
        max - radius - 1
    } else {
        next
    }
}
