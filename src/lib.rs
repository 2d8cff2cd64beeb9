//! Spring Snake - a spring-driven body that must not bite its own tail
//!
//! Core modules:
//! - `sim`: Simulation (force law, RK4 integrator, trail, raster collision, session)
//! - `platform`: Clock and simulation thread
//! - `renderer`: Read-only snapshots and the render collaborator trait
//! - `persistence`: Saved head position across interruptions
//! - `settings`: Data-driven simulation parameters

pub mod error;
pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::{Error, Result};
pub use settings::Settings;

/// Simulation configuration constants
pub mod consts {
    /// Spring tightness (pull toward the goal)
    pub const SPRING_CONSTANT: f32 = 80.0;
    /// Damping coefficient
    pub const DAMPING: f32 = 50.0;

    /// Stroke width of the rendered body, also used for the collision raster
    pub const BODY_WIDTH: f32 = 10.0;
    /// Maximum arclength of the trail
    pub const MAX_TRAIL_LENGTH: f32 = 500.0;
    /// Fraction of the trail nearest the head left out of the collision raster
    pub const HEAD_EXCLUSION_FRACTION: f32 = 0.05;

    /// Distance the goal is kept in front of the head
    pub const GOAL_DISTANCE: f32 = 50.0;
    /// How far the goal recedes along the velocity after each step
    pub const GOAL_STEP: f32 = 10.0;
    pub const GOAL_SPEED_FACTOR: f32 = 1.0;

    /// Frames are skipped for this long after start/resume
    pub const RESUME_GRACE_MS: u64 = 100;

    /// Head anchor after a resize, as fractions of the surface size
    pub const ANCHOR_X_FRACTION: f32 = 0.5;
    pub const ANCHOR_Y_FRACTION: f32 = 5.0 / 8.0;

    /// Opaque red (ARGB)
    pub const SNAKE_COLOR: u32 = 0xFFFF_0000;
}
