//! Spring-damper force law
//!
//! The head is a unit mass pulled toward the goal:
//! `a = -k * (p - g) - b * v`

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Spring and damping constants
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpringParams {
    /// Spring tightness
    pub k: f32,
    /// Damping coefficient
    pub b: f32,
}

impl Default for SpringParams {
    fn default() -> Self {
        Self {
            k: crate::consts::SPRING_CONSTANT,
            b: crate::consts::DAMPING,
        }
    }
}

impl SpringParams {
    pub fn new(k: f32, b: f32) -> Self {
        Self { k, b }
    }

    /// Damping at which the spring stops oscillating (unit mass)
    pub fn critical_damping(&self) -> f32 {
        2.0 * self.k.max(0.0).sqrt()
    }
}

/// Rate of change of (position, velocity) at one integration sub-step
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Derivative {
    pub vel: Vec2,
    pub acc: Vec2,
}

impl Derivative {
    pub const ZERO: Self = Self {
        vel: Vec2::ZERO,
        acc: Vec2::ZERO,
    };
}

/// Acceleration of the head at `pos` moving with `vel`
#[inline]
pub fn acceleration(pos: Vec2, vel: Vec2, goal: Vec2, spring: &SpringParams) -> Vec2 {
    -spring.k * (pos - goal) - spring.b * vel
}
