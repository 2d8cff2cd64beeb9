//! 2D vector primitive
//!
//! Head position, velocity and goal are plain `glam::Vec2` values. The
//! helpers here cover the few operations glam spells differently.

use glam::Vec2;

/// Position/velocity state of the body
pub type State = Vec2;

/// Unit vector along `v`, or zero when `v` is zero (or not finite)
#[inline]
pub fn normalized(v: Vec2) -> Vec2 {
    v.normalize_or_zero()
}

/// Distance from `p` to the segment `a`-`b`
pub fn distance_to_segment(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq <= f32::EPSILON {
        return (p - a).length();
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    (p - (a + ab * t)).length()
}
