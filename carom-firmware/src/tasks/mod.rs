//! Embassy async tasks
//!
//! Each task runs independently and communicates via channels/signals.

pub mod animation;
pub mod input;

pub use animation::animation_task;
pub use input::input_task;
