//! Offscreen byte raster used as a collision lookup
//!
//! Polylines are stroked with round caps and joins: a cell is covered when
//! its center lies within half the stroke width of any segment.

use glam::Vec2;

use super::vector::distance_to_segment;

pub const BACKGROUND: u8 = 0;
pub const FOREGROUND: u8 = 1;

#[derive(Debug, Clone, Default)]
pub struct Raster {
    width: usize,
    height: usize,
    cells: Vec<u8>,
}

impl Raster {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![BACKGROUND; width * height],
        }
    }

    /// Reallocate for a new size; contents are cleared
    pub fn resize(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
        self.cells.clear();
        self.cells.resize(width * height, BACKGROUND);
    }

    /// True when no boundary has been set yet
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn clear(&mut self) {
        self.cells.fill(BACKGROUND);
    }

    /// Cell value, or `None` outside the raster
    pub fn get(&self, x: i64, y: i64) -> Option<u8> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.cells[y * self.width + x])
    }

    /// Whether the cell containing `p` is foreground
    pub fn is_marked_at(&self, p: Vec2) -> bool {
        if !p.is_finite() {
            return false;
        }
        self.get(p.x.floor() as i64, p.y.floor() as i64) == Some(FOREGROUND)
    }

    pub fn count_marked(&self) -> usize {
        self.cells.iter().filter(|&&c| c == FOREGROUND).count()
    }

    /// Stroke a polyline of the given width
    pub fn stroke_polyline(&mut self, points: &[Vec2], width: f32) {
        match points {
            [] => {}
            [p] => self.stroke_segment(*p, *p, width),
            _ => {
                for pair in points.windows(2) {
                    self.stroke_segment(pair[0], pair[1], width);
                }
            }
        }
    }

    /// Mark every cell whose center is within `width / 2` of segment a-b
    pub fn stroke_segment(&mut self, a: Vec2, b: Vec2, width: f32) {
        if self.cells.is_empty() || !a.is_finite() || !b.is_finite() {
            return;
        }
        let radius = width * 0.5;
        let min = a.min(b) - Vec2::splat(radius);
        let max = a.max(b) + Vec2::splat(radius);

        let x0 = (min.x.floor().max(0.0)) as usize;
        let y0 = (min.y.floor().max(0.0)) as usize;
        let x1 = (max.x.ceil().max(0.0) as usize).min(self.width);
        let y1 = (max.y.ceil().max(0.0) as usize).min(self.height);

        for y in y0..y1 {
            let row = y * self.width;
            for x in x0..x1 {
                let center = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
                if distance_to_segment(center, a, b) <= radius {
                    self.cells[row + x] = FOREGROUND;
                }
            }
        }
    }
}
