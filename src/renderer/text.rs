//! Character-grid renderer for terminals and logs
//!
//! Scales the drawable area down by `cell_size` and strokes the trail into
//! a raster, then prints one character per cell.

use std::io::Write;

use glam::Vec2;

use super::{RenderError, Renderer, Snapshot};
use crate::sim::{Mode, Raster};

pub struct TextRenderer<W: Write + Send> {
    out: W,
    cell_size: f32,
    /// Print every n-th frame
    every: u64,
    frame: u64,
}

impl<W: Write + Send> TextRenderer<W> {
    pub fn new(out: W, cell_size: f32, every: u64) -> Self {
        Self {
            out,
            cell_size: cell_size.max(1.0),
            every: every.max(1),
            frame: 0,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Lay out the snapshot as text rows
    pub fn draw(&self, snapshot: &Snapshot) -> String {
        let Some((w, h)) = snapshot.boundary else {
            return String::new();
        };
        let cols = (w as f32 / self.cell_size).ceil() as usize;
        let rows = (h as f32 / self.cell_size).ceil() as usize;

        let scale = 1.0 / self.cell_size;
        let trail: Vec<Vec2> = snapshot.trail.iter().map(|p| *p * scale).collect();
        let mut raster = Raster::new(cols, rows);
        raster.stroke_polyline(&trail, (snapshot.width * scale).max(1.0));

        let head = snapshot.position * scale;
        let head_cell = (head.x.floor() as i64, head.y.floor() as i64);
        let head_char = match snapshot.mode {
            Mode::Crash => 'X',
            _ => '@',
        };

        let mut text = String::with_capacity((cols + 1) * (rows + 1));
        if let Some(status) = snapshot.state.status_text() {
            text.push_str(status);
            text.push('\n');
        }
        for y in 0..rows as i64 {
            for x in 0..cols as i64 {
                let c = if (x, y) == head_cell {
                    head_char
                } else if raster.get(x, y) == Some(crate::sim::FOREGROUND) {
                    '#'
                } else {
                    '.'
                };
                text.push(c);
            }
            text.push('\n');
        }
        text
    }
}

impl<W: Write + Send> Renderer for TextRenderer<W> {
    fn render(&mut self, snapshot: &Snapshot) -> Result<(), RenderError> {
        self.frame += 1;
        if self.frame % self.every != 0 {
            return Ok(());
        }
        if snapshot.boundary.is_none() {
            return Err(RenderError::Lost);
        }
        let text = self.draw(snapshot);
        self.out.write_all(text.as_bytes())?;
        self.out.write_all(b"\n")?;
        self.out.flush()?;
        Ok(())
    }
}
