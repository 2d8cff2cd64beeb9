//! Simulation module
//!
//! Everything that decides where the snake is and whether it touches
//! itself lives here. No drawing, threading or platform code: time comes
//! in as milliseconds, input as plain method calls, and frames go out as
//! owned snapshots.

pub mod collision;
pub mod force;
pub mod integrator;
pub mod raster;
pub mod session;
pub mod snake;
pub mod state;
pub mod trail;
pub mod vector;

pub use collision::CollisionDetector;
pub use force::{Derivative, SpringParams, acceleration};
pub use integrator::rk4_step;
pub use raster::{BACKGROUND, FOREGROUND, Raster};
pub use session::{MAX_PENDING_EVENTS, Session};
pub use snake::{Snake, SnakeParams, anchor_for};
pub use state::{GameState, Mode, ModeChange, SimEvent};
pub use trail::Trail;
pub use vector::{State, normalized};
