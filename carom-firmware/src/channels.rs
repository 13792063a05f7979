//! Inter-task communication channels
//!
//! Defines the static signals used for communication between
//! tasks using embassy-sync primitives.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

/// Raised by the input task to ask the animation loop to stop cleanly
pub static STOP: Signal<CriticalSectionRawMutex, ()> = Signal::new();
