//! Board-agnostic core logic for the Carom display demo
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - RGB565 color packing
//! - Inclusive pixel rectangles and dirty-region math
//! - Grow-only scratch buffer for composed pixel runs
//! - Ball kinematics with edge reflection
//! - Scene composition (backdrop bands plus the ball)
//! - Frame-rate accounting
//! - Configuration type definitions

#![no_std]
#![deny(unsafe_code)]

extern crate alloc;

pub mod buffer;
pub mod color;
pub mod config;
pub mod fps;
pub mod motion;
pub mod rect;
pub mod scene;
