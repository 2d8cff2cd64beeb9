//! Play session: the snake plus the outer game state and frame clock
//!
//! Physics only advances while the state is `Running`. Time enters as
//! wall-clock milliseconds; start and resume move the frame reference a
//! short grace period into the future so the first step after a pause is
//! one normal frame long.

use std::collections::VecDeque;

use glam::Vec2;

use super::snake::{Snake, SnakeParams};
use super::state::{GameState, Mode, SimEvent};
use crate::consts::RESUME_GRACE_MS;
use crate::persistence::SavedState;
use crate::renderer::Snapshot;

/// Undrained events kept before the oldest are dropped
pub const MAX_PENDING_EVENTS: usize = 256;

#[derive(Debug, Clone)]
pub struct Session {
    snake: Snake,
    state: GameState,
    /// Wall-clock time (ms) of the last integrated frame
    last_frame_ms: u64,
    /// Pending events for collaborators, drained by the host
    events: VecDeque<SimEvent>,
}

impl Session {
    pub fn new(color: u32, params: SnakeParams) -> Self {
        Self {
            snake: Snake::new(color, params),
            state: GameState::Ready,
            last_frame_ms: 0,
            events: VecDeque::new(),
        }
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn last_frame_ms(&self) -> u64 {
        self.last_frame_ms
    }

    fn set_state(&mut self, state: GameState) {
        if state == self.state {
            return;
        }
        log::debug!("Game state is now {}", state.as_str());
        self.push_event(SimEvent::StateChanged {
            from: self.state,
            to: state,
        });
        self.state = state;
    }

    /// Begin the session paused
    pub fn start(&mut self, now_ms: u64) {
        log::info!("Session started");
        self.last_frame_ms = now_ms + RESUME_GRACE_MS;
        self.set_state(GameState::Pause);
    }

    pub fn pause(&mut self) {
        if self.state == GameState::Running {
            self.set_state(GameState::Pause);
        }
    }

    /// Run from Ready or Pause. Terminal states stay put.
    pub fn resume(&mut self, now_ms: u64) {
        if self.state.is_terminal() {
            return;
        }
        self.last_frame_ms = now_ms + RESUME_GRACE_MS;
        self.set_state(GameState::Running);
    }

    pub fn toggle_running(&mut self, now_ms: u64) {
        if self.state == GameState::Running {
            self.pause();
        } else {
            self.resume(now_ms);
        }
    }

    /// Losing focus pauses; regaining it does not resume
    pub fn on_focus_changed(&mut self, has_focus: bool) {
        log::debug!("Focus changed: {}", has_focus);
        if !has_focus {
            self.pause();
        }
    }

    /// Goal input from the user, honoured only while running
    pub fn set_goal(&mut self, x: f32, y: f32) -> bool {
        if self.state != GameState::Running {
            return false;
        }
        if let Some(change) = self.snake.set_goal(Vec2::new(x, y)) {
            self.push_event(change.into());
        }
        true
    }

    /// Drawable area changed
    pub fn set_boundary(&mut self, width: u32, height: u32) {
        self.snake.set_boundary(width, height);
    }

    /// Called once per display refresh
    pub fn on_frame(&mut self, now_ms: u64) {
        if self.state == GameState::Running {
            self.update_physics(now_ms);
        }
    }

    fn update_physics(&mut self, now_ms: u64) {
        if self.last_frame_ms >= now_ms {
            return;
        }
        let dt = (now_ms - self.last_frame_ms) as f32 / 1000.0;
        if let Some(change) = self.snake.integrate(dt) {
            self.push_event(change.into());
        }
        self.last_frame_ms = now_ms;
    }

    pub fn mode(&self) -> Mode {
        self.snake.mode()
    }

    pub fn save_state(&self) -> SavedState {
        let p = self.snake.position();
        SavedState { pos_x: p.x, pos_y: p.y }
    }

    /// Put the head back where it was; trail, goal and mode are not restored
    pub fn restore_state(&mut self, saved: &SavedState) {
        self.snake.restore_position(Vec2::new(saved.pos_x, saved.pos_y));
    }

    fn push_event(&mut self, event: SimEvent) {
        if self.events.len() == MAX_PENDING_EVENTS {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }

    /// Take the pending events, oldest first
    ///
    /// At most `MAX_PENDING_EVENTS` are held; a host that never drains
    /// only loses the oldest ones.
    pub fn drain_events(&mut self) -> Vec<SimEvent> {
        self.events.drain(..).collect()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            position: self.snake.position(),
            goal: self.snake.goal(),
            trail: self.snake.trail().to_vec(),
            mode: self.snake.mode(),
            color: self.snake.color(),
            width: self.snake.params().width,
            state: self.state,
            boundary: self.snake.boundary(),
        }
    }
}
