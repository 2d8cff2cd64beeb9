//! Raster self-collision test
//!
//! The trail, minus a stretch next to the head, is stroked into an
//! offscreen raster the size of the drawable area. The head touches its
//! own body when the raster cell under it is marked. This is a bitmap
//! resolution test, not exact segment intersection.

use glam::Vec2;

use super::raster::Raster;
use super::state::Mode;
use super::trail::Trail;

#[derive(Debug, Clone, Default)]
pub struct CollisionDetector {
    raster: Raster,
    exclude_fraction: f32,
}

impl CollisionDetector {
    pub fn new(exclude_fraction: f32) -> Self {
        Self {
            raster: Raster::default(),
            exclude_fraction: exclude_fraction.clamp(0.0, 1.0),
        }
    }

    /// Resize the backing raster to the drawable area
    pub fn set_boundary(&mut self, width: u32, height: u32) {
        self.raster.resize(width as usize, height as usize);
    }

    pub fn has_boundary(&self) -> bool {
        !self.raster.is_empty()
    }

    pub fn raster(&self) -> &Raster {
        &self.raster
    }

    /// The part of the trail that can collide with the head
    ///
    /// At least one stroke width is left out next to the head, so the round
    /// cap of the newest segment cannot reach it.
    pub fn collidable_path(&self, trail: &Trail, width: f32) -> Vec<Vec2> {
        trail.tail_path(self.exclude_fraction, width)
    }

    /// Re-rasterize the trail and report whether `head` touches it
    pub fn test(&mut self, trail: &Trail, head: Vec2, width: f32) -> Mode {
        if self.raster.is_empty() {
            return Mode::Forced;
        }

        self.raster.clear();
        let tail = self.collidable_path(trail, width);
        self.raster.stroke_polyline(&tail, width);

        if self.raster.is_marked_at(head) {
            Mode::Crash
        } else {
            Mode::Forced
        }
    }
}
