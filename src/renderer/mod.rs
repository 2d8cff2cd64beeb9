//! Render collaborator interface
//!
//! The simulation hands renderers an owned, read-only `Snapshot` taken under
//! the session lock; drawing happens after the lock is released.

pub mod text;

pub use text::TextRenderer;

use glam::Vec2;
use thiserror::Error;

use crate::sim::{GameState, Mode};

/// Everything a renderer may look at for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub position: Vec2,
    pub goal: Vec2,
    /// Trail points, tail first
    pub trail: Vec<Vec2>,
    pub mode: Mode,
    /// ARGB
    pub color: u32,
    /// Body stroke width
    pub width: f32,
    pub state: GameState,
    pub boundary: Option<(u32, u32)>,
}

#[derive(Debug, Error)]
pub enum RenderError {
    /// Drawing surface went away mid-frame; the frame is dropped
    #[error("render surface lost")]
    Lost,
    #[error("render output failed: {0}")]
    Io(#[from] std::io::Error),
}

pub trait Renderer: Send {
    /// Draw one frame. Any resource acquired for the frame must be released
    /// before returning, on error paths too.
    fn render(&mut self, snapshot: &Snapshot) -> Result<(), RenderError>;
}

/// Presents at a fixed cadence, like a display with vsync
///
/// The wrapped renderer draws; `Paced` then blocks until the next frame
/// slot, which is what paces the simulation loop.
pub struct Paced<R> {
    inner: R,
    interval: std::time::Duration,
    next: Option<std::time::Instant>,
}

impl<R: Renderer> Paced<R> {
    pub fn new(inner: R, fps: u32) -> Self {
        Self {
            inner,
            interval: std::time::Duration::from_secs_f64(1.0 / fps.max(1) as f64),
            next: None,
        }
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Renderer> Renderer for Paced<R> {
    fn render(&mut self, snapshot: &Snapshot) -> Result<(), RenderError> {
        let result = self.inner.render(snapshot);

        let now = std::time::Instant::now();
        let next = self.next.unwrap_or(now) + self.interval;
        if next > now {
            std::thread::sleep(next - now);
            self.next = Some(next);
        } else {
            // Fell behind; restart the cadence from here
            self.next = Some(now);
        }
        result
    }
}
