//! Platform abstraction layer
//!
//! Handles the host-facing pieces around the simulation:
//! - Time source (`time`)
//! - The dedicated simulation/render thread and its control handle (`thread`)

pub mod thread;
pub mod time;

pub use thread::{SessionHandle, SimulationThread};
pub use time::{Clock, ManualClock, SystemClock};
