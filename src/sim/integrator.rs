//! Classical 4th-order Runge-Kutta stepper
//!
//! Integrates `dp/dt = v`, `dv/dt = acceleration(p, v, goal)` with the
//! goal held fixed over the step.

use glam::Vec2;

use super::force::{Derivative, SpringParams, acceleration};

/// Derivative at the state reached by following `d` for `dt` from (pos, vel)
fn evaluate(pos: Vec2, vel: Vec2, goal: Vec2, spring: &SpringParams, dt: f32, d: &Derivative) -> Derivative {
    let p = pos + d.vel * dt;
    let v = vel + d.acc * dt;
    Derivative {
        vel: v,
        acc: acceleration(p, v, goal, spring),
    }
}

/// Advance (pos, vel) by `dt` seconds. Returns the new (pos, vel).
///
/// No clamping on `dt`: callers decide whether a step should happen at all.
pub fn rk4_step(pos: Vec2, vel: Vec2, goal: Vec2, spring: &SpringParams, dt: f32) -> (Vec2, Vec2) {
    let half = dt * 0.5;
    let a = evaluate(pos, vel, goal, spring, 0.0, &Derivative::ZERO);
    let b = evaluate(pos, vel, goal, spring, half, &a);
    let c = evaluate(pos, vel, goal, spring, half, &b);
    let d = evaluate(pos, vel, goal, spring, dt, &c);

    let dpdt = (a.vel + 2.0 * (b.vel + c.vel) + d.vel) / 6.0;
    let dvdt = (a.acc + 2.0 * (b.acc + c.acc) + d.acc) / 6.0;

    (pos + dpdt * dt, vel + dvdt * dt)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    #[test]
    fn test_overdamped_converges_monotonically() {
        let spring = SpringParams::default();
        assert!(spring.b > spring.critical_damping());

        let goal = Vec2::new(100.0, 40.0);
        let mut pos = Vec2::ZERO;
        let mut vel = Vec2::ZERO;
        let mut last_dist = pos.distance(goal);

        for _ in 0..600 {
            (pos, vel) = rk4_step(pos, vel, goal, &spring, DT);
            let dist = pos.distance(goal);
            assert!(
                dist <= last_dist + 1e-4,
                "distance grew from {} to {}",
                last_dist,
                dist
            );
            last_dist = dist;
        }

        assert!(last_dist < 0.01, "final distance {} should be near zero", last_dist);
        assert!(vel.length() < 0.01);
    }

    #[test]
    fn test_rest_at_goal_stays_put() {
        let spring = SpringParams::default();
        let p = Vec2::new(100.0, 100.0);
        let (pos, vel) = rk4_step(p, Vec2::ZERO, p, &spring, DT);
        assert_eq!(pos, p);
        assert_eq!(vel, Vec2::ZERO);
    }

    #[test]
    fn test_undamped_oscillator_period() {
        // k = 1, b = 0: x(t) = cos(t), back to the start after 2*pi
        let spring = SpringParams::new(1.0, 0.0);
        let dt = 0.001;
        let steps = (std::f32::consts::TAU / dt).round() as usize;
        let mut pos = Vec2::new(1.0, 0.0);
        let mut vel = Vec2::ZERO;
        for _ in 0..steps {
            (pos, vel) = rk4_step(pos, vel, Vec2::ZERO, &spring, dt);
        }
        assert!((pos.x - 1.0).abs() < 1e-2, "x = {}", pos.x);
        assert!(vel.length() < 1e-2, "vel = {:?}", vel);
    }

    #[test]
    fn test_zero_dt_is_identity() {
        let spring = SpringParams::default();
        let pos = Vec2::new(5.0, 6.0);
        let vel = Vec2::new(-1.0, 2.0);
        let (p, v) = rk4_step(pos, vel, Vec2::ZERO, &spring, 0.0);
        assert_eq!(p, pos);
        assert_eq!(v, vel);
    }
}
