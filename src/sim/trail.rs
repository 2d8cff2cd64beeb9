//! Bounded-length trail traced by the head
//!
//! The trail is a polyline stored tail first, head last. Its arclength is
//! kept at or below `max_length` by cutting from the tail end; the cut
//! point is interpolated on the oldest remaining segment so the polyline
//! never gains a gap.

use std::collections::VecDeque;

use glam::Vec2;

#[derive(Debug, Clone)]
pub struct Trail {
    points: VecDeque<Vec2>,
    /// Cached arclength of `points`
    length: f32,
    max_length: f32,
}

impl Trail {
    pub fn new(max_length: f32) -> Self {
        Self {
            points: VecDeque::new(),
            length: 0.0,
            max_length: max_length.max(0.0),
        }
    }

    /// Drop everything and start over at `head`
    pub fn reset(&mut self, head: Vec2) {
        self.points.clear();
        self.points.push_back(head);
        self.length = 0.0;
    }

    /// Total arclength
    pub fn length(&self) -> f32 {
        self.length
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn head(&self) -> Option<Vec2> {
        self.points.back().copied()
    }

    pub fn points(&self) -> impl ExactSizeIterator<Item = Vec2> + '_ {
        self.points.iter().copied()
    }

    pub fn to_vec(&self) -> Vec<Vec2> {
        self.points.iter().copied().collect()
    }

    /// Extend the trail with a segment to `head`
    pub fn append(&mut self, head: Vec2) {
        match self.points.back() {
            Some(&last) => {
                let seg = last.distance(head);
                if seg <= f32::EPSILON {
                    return;
                }
                self.length += seg;
                self.points.push_back(head);
            }
            None => self.points.push_back(head),
        }
    }

    /// Cut the oldest part of the trail so its arclength is at most `max_length`
    pub fn trim(&mut self) {
        let mut excess = self.length - self.max_length;
        if excess <= 0.0 {
            return;
        }

        while self.points.len() >= 2 {
            let p0 = self.points[0];
            let p1 = self.points[1];
            let seg = p0.distance(p1);
            if seg <= excess {
                self.points.pop_front();
                excess -= seg;
            } else {
                self.points[0] = p0.lerp(p1, excess / seg);
                break;
            }
        }

        self.length = polyline_length(self.points.iter().copied());
    }

    /// The trail without the stretch next to the head
    ///
    /// Leaves out `exclude_fraction` of the arclength, and never less than
    /// `min_exclude` units.
    pub fn tail_path(&self, exclude_fraction: f32, min_exclude: f32) -> Vec<Vec2> {
        let exclude = (self.length * exclude_fraction.clamp(0.0, 1.0)).max(min_exclude);
        self.truncated(self.length - exclude)
    }

    /// The first `keep` units of arclength, measured from the tail
    pub fn truncated(&self, keep: f32) -> Vec<Vec2> {
        if keep <= 0.0 || self.points.len() < 2 {
            return Vec::new();
        }

        let mut out = Vec::with_capacity(self.points.len());
        let mut remaining = keep;
        out.push(self.points[0]);
        for (&a, &b) in self.points.iter().zip(self.points.iter().skip(1)) {
            let seg = a.distance(b);
            if seg < remaining {
                out.push(b);
                remaining -= seg;
            } else {
                out.push(a.lerp(b, remaining / seg));
                break;
            }
        }
        out
    }
}

/// Sum of segment lengths
pub fn polyline_length(points: impl IntoIterator<Item = Vec2>) -> f32 {
    let mut iter = points.into_iter();
    let Some(mut prev) = iter.next() else {
        return 0.0;
    };
    let mut total = 0.0;
    for p in iter {
        total += prev.distance(p);
        prev = p;
    }
    total
}
