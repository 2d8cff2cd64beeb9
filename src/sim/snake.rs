//! The snake body: spring-driven head, trail, and mode
//!
//! Goal policy is the receding goal: the goal is always kept `goal_distance`
//! ahead of the head, toward the requested target, and after each step it
//! is pushed further along the velocity. The body therefore keeps moving
//! instead of settling on the goal.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::CollisionDetector;
use super::force::SpringParams;
use super::integrator::rk4_step;
use super::state::{Mode, ModeChange};
use super::trail::Trail;
use super::vector::normalized;
use crate::consts::*;

/// Simulation parameters, fixed for the life of a body
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnakeParams {
    pub spring: SpringParams,
    /// Stroke width of the body
    pub width: f32,
    pub max_trail_length: f32,
    /// Fraction of the trail next to the head ignored by the collision test
    pub head_exclusion: f32,
    pub goal_distance: f32,
    pub goal_step: f32,
    pub goal_speed_factor: f32,
}

impl Default for SnakeParams {
    fn default() -> Self {
        Self {
            spring: SpringParams::default(),
            width: BODY_WIDTH,
            max_trail_length: MAX_TRAIL_LENGTH,
            head_exclusion: HEAD_EXCLUSION_FRACTION,
            goal_distance: GOAL_DISTANCE,
            goal_step: GOAL_STEP,
            goal_speed_factor: GOAL_SPEED_FACTOR,
        }
    }
}

/// Head anchor for a drawable area of the given size
pub fn anchor_for(width: u32, height: u32) -> Vec2 {
    Vec2::new(
        width as f32 * ANCHOR_X_FRACTION,
        height as f32 * ANCHOR_Y_FRACTION,
    )
}

#[derive(Debug, Clone)]
pub struct Snake {
    color: u32,
    params: SnakeParams,
    position: Vec2,
    velocity: Vec2,
    goal: Vec2,
    trail: Trail,
    mode: Mode,
    boundary: Option<(u32, u32)>,
    collision: CollisionDetector,
}

impl Snake {
    pub fn new(color: u32, params: SnakeParams) -> Self {
        let mut trail = Trail::new(params.max_trail_length);
        trail.reset(Vec2::ZERO);
        Self {
            color,
            params,
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            goal: Vec2::ZERO,
            trail,
            mode: Mode::Free,
            boundary: None,
            collision: CollisionDetector::new(params.head_exclusion),
        }
    }

    pub fn color(&self) -> u32 {
        self.color
    }

    pub fn params(&self) -> &SnakeParams {
        &self.params
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn goal(&self) -> Vec2 {
        self.goal
    }

    pub fn trail(&self) -> &Trail {
        &self.trail
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Last drawable area, if one has been set
    pub fn boundary(&self) -> Option<(u32, u32)> {
        self.boundary
    }

    pub fn distance_to_goal(&self) -> f32 {
        self.position.distance(self.goal)
    }

    pub fn set_constants(&mut self, k: f32, b: f32) {
        self.params.spring = SpringParams::new(k, b);
    }

    /// New drawable area: resize the collision raster and re-center the body
    pub fn set_boundary(&mut self, width: u32, height: u32) {
        log::info!("Snake boundary set to {}x{}", width, height);
        self.boundary = Some((width, height));
        self.collision.set_boundary(width, height);
        self.set_position(anchor_for(width, height));
    }

    /// Place the head at rest on `p`, with the goal on the head and an empty trail
    pub fn set_position(&mut self, p: Vec2) {
        log::debug!("Snake position set to ({}, {})", p.x, p.y);
        self.position = p;
        self.goal = p;
        self.velocity = Vec2::ZERO;
        self.trail.reset(p);
    }

    /// Move the head only; velocity, goal, trail and mode are left alone
    pub fn restore_position(&mut self, p: Vec2) {
        self.position = p;
    }

    /// Aim at `target`. The first goal takes the body out of `Free`.
    pub fn set_goal(&mut self, target: Vec2) -> Option<ModeChange> {
        self.project_goal(target);
        if self.mode == Mode::Free {
            self.set_mode(Mode::Forced)
        } else {
            None
        }
    }

    fn project_goal(&mut self, target: Vec2) {
        let dir = normalized(target - self.position);
        self.goal = self.position + dir * self.params.goal_distance;
    }

    /// Advance the body by `dt` seconds.
    ///
    /// Non-positive (or NaN) `dt` is ignored. Returns the mode transition,
    /// if the collision test changed the mode.
    pub fn integrate(&mut self, dt: f32) -> Option<ModeChange> {
        if !(dt > 0.0) {
            return None;
        }

        let (position, velocity) =
            rk4_step(self.position, self.velocity, self.goal, &self.params.spring, dt);
        self.position = position;
        self.velocity = velocity;

        self.trail.append(position);
        self.trail.trim();

        let change = if self.mode != Mode::Free {
            let mode = self
                .collision
                .test(&self.trail, self.position, self.params.width);
            self.set_mode(mode)
        } else {
            None
        };

        let lead = normalized(self.velocity) * self.params.goal_speed_factor * self.params.goal_step;
        self.project_goal(self.goal + lead);

        change
    }

    fn set_mode(&mut self, mode: Mode) -> Option<ModeChange> {
        if mode == self.mode {
            return None;
        }
        let change = ModeChange {
            from: self.mode,
            to: mode,
        };
        match (change.from, change.to) {
            (_, Mode::Crash) => log::debug!("Collision!"),
            (Mode::Crash, _) => log::debug!("Uncrash"),
            _ => log::debug!("Snake mode {} -> {}", change.from.as_str(), change.to.as_str()),
        }
        self.mode = mode;
        Some(change)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    fn snake_at(width: u32, height: u32) -> Snake {
        let mut snake = Snake::new(SNAKE_COLOR, SnakeParams::default());
        snake.set_boundary(width, height);
        snake
    }

    #[test]
    fn test_new_snake_is_free() {
        let snake = Snake::new(SNAKE_COLOR, SnakeParams::default());
        assert_eq!(snake.mode(), Mode::Free);
        assert_eq!(snake.boundary(), None);
        assert_eq!(snake.color(), SNAKE_COLOR);
    }

    #[test]
    fn test_goal_is_projected_to_fixed_distance() {
        let mut snake = snake_at(400, 480);
        let head = snake.position();
        assert_eq!(head, Vec2::new(200.0, 300.0));

        let change = snake.set_goal(Vec2::new(400.0, 300.0));
        assert_eq!(
            change,
            Some(ModeChange {
                from: Mode::Free,
                to: Mode::Forced
            })
        );
        assert!((snake.goal() - Vec2::new(250.0, 300.0)).length() < 1e-4);

        // Closer than goal_distance is pushed out too
        snake.set_goal(Vec2::new(200.0, 290.0));
        assert!((snake.goal() - Vec2::new(200.0, 250.0)).length() < 1e-4);
        assert!((snake.distance_to_goal() - GOAL_DISTANCE).abs() < 1e-4);
    }

    #[test]
    fn test_goal_on_head_stays_at_rest() {
        let mut snake = snake_at(200, 160);
        let p = Vec2::new(100.0, 100.0);
        assert_eq!(snake.position(), p);

        snake.set_goal(p);
        assert_eq!(snake.mode(), Mode::Forced);
        for _ in 0..600 {
            assert_eq!(snake.integrate(DT), None);
            assert_eq!(snake.velocity(), Vec2::ZERO);
            assert_eq!(snake.position(), p);
            assert_ne!(snake.mode(), Mode::Crash);
        }
    }

    #[test]
    fn test_non_positive_dt_is_ignored() {
        let mut snake = snake_at(400, 480);
        snake.set_goal(Vec2::new(400.0, 300.0));
        snake.integrate(DT);

        let pos = snake.position();
        let vel = snake.velocity();
        let trail = snake.trail().to_vec();
        for dt in [0.0, -0.5, f32::NAN] {
            assert_eq!(snake.integrate(dt), None);
            assert_eq!(snake.position(), pos);
            assert_eq!(snake.velocity(), vel);
            assert_eq!(snake.trail().to_vec(), trail);
        }
    }

    #[test]
    fn test_receding_goal_keeps_moving() {
        let mut snake = snake_at(1000, 1000);
        snake.set_goal(Vec2::new(1000.0, 625.0));
        for _ in 0..120 {
            snake.integrate(DT);
        }
        // The goal keeps running ahead, so the body never settles
        assert!(snake.velocity().x > 10.0);
        assert!((snake.distance_to_goal() - GOAL_DISTANCE).abs() < 1e-3);
    }

    #[test]
    fn test_trail_stays_bounded() {
        let mut snake = snake_at(800, 800);
        snake.set_goal(Vec2::new(4000.0, 500.0));
        for _ in 0..1200 {
            snake.integrate(DT);
            assert!(snake.trail().length() <= MAX_TRAIL_LENGTH + 1e-2);
            assert_eq!(snake.trail().head(), Some(snake.position()));
        }
    }

    #[test]
    fn test_doubling_back_crashes_then_clears() {
        let mut snake = snake_at(400, 480);
        let start = snake.position();

        for _ in 0..60 {
            snake.set_goal(Vec2::new(1000.0, start.y));
            snake.integrate(DT);
        }
        assert_eq!(snake.mode(), Mode::Forced);

        // Half a second back along the same line stays over the old trail
        let mut crashed = false;
        for _ in 0..30 {
            snake.set_goal(Vec2::new(-1000.0, start.y));
            if let Some(change) = snake.integrate(DT) {
                crashed |= change.is_crash();
            }
        }
        assert!(crashed, "reversing over the trail should crash");
        assert_eq!(snake.mode(), Mode::Crash);

        let mut cleared = false;
        for _ in 0..60 {
            snake.set_goal(Vec2::new(snake.position().x, -1000.0));
            if let Some(change) = snake.integrate(DT) {
                cleared |= change.from == Mode::Crash && change.to == Mode::Forced;
            }
        }
        assert!(cleared);
        assert_eq!(snake.mode(), Mode::Forced);
    }

    #[test]
    fn test_set_constants_changes_next_step() {
        let mut stiff = snake_at(400, 480);
        let mut soft = stiff.clone();
        soft.set_constants(10.0, 5.0);
        assert_eq!(soft.params().spring, SpringParams::new(10.0, 5.0));

        stiff.set_goal(Vec2::new(400.0, 300.0));
        soft.set_goal(Vec2::new(400.0, 300.0));
        stiff.integrate(DT);
        soft.integrate(DT);

        // Same pull distance, weaker spring: less speed after one frame
        assert!(soft.velocity().x > 0.0);
        assert!(soft.velocity().x < stiff.velocity().x);
    }

    #[test]
    fn test_resize_resets_to_new_anchor() {
        let mut snake = snake_at(400, 600);
        snake.set_goal(Vec2::new(0.0, 0.0));
        for _ in 0..30 {
            snake.integrate(DT);
        }
        assert!(snake.trail().length() > 0.0);

        snake.set_boundary(800, 1200);
        assert_eq!(snake.position(), Vec2::new(400.0, 750.0));
        assert_eq!(snake.velocity(), Vec2::ZERO);
        assert_eq!(snake.goal(), snake.position());
        assert_eq!(snake.trail().len(), 1);
        assert_eq!(snake.trail().length(), 0.0);
        assert_eq!(snake.boundary(), Some((800, 1200)));
    }

    #[test]
    fn test_restore_position_moves_head_only() {
        let mut snake = snake_at(400, 480);
        snake.set_goal(Vec2::new(400.0, 300.0));
        for _ in 0..10 {
            snake.integrate(DT);
        }
        let goal = snake.goal();
        let vel = snake.velocity();
        let trail = snake.trail().to_vec();

        snake.restore_position(Vec2::new(12.0, 34.0));
        assert_eq!(snake.position(), Vec2::new(12.0, 34.0));
        assert_eq!(snake.goal(), goal);
        assert_eq!(snake.velocity(), vel);
        assert_eq!(snake.trail().to_vec(), trail);
    }
}
