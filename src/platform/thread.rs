//! Simulation/render thread and the control-side handle
//!
//! One `parking_lot::Mutex` guards the whole session. The simulation thread
//! takes it for one frame update plus snapshot, then renders without it.
//! The control side takes it for each input or state command.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::thread::{self, JoinHandle};

use parking_lot::Mutex;

use super::time::Clock;
use crate::persistence::SavedState;
use crate::renderer::{RenderError, Renderer, Snapshot};
use crate::sim::{GameState, Session, SimEvent};
use crate::{Error, Result};

/// Control-thread view of a shared session
#[derive(Clone)]
pub struct SessionHandle<C: Clock + Clone> {
    session: Arc<Mutex<Session>>,
    clock: C,
}

impl<C: Clock + Clone + 'static> SessionHandle<C> {
    pub fn new(session: Session, clock: C) -> Self {
        Self {
            session: Arc::new(Mutex::new(session)),
            clock,
        }
    }

    /// Start the simulation/render loop on its own thread
    pub fn spawn_loop<R: Renderer + 'static>(&self, renderer: R) -> Result<SimulationThread> {
        SimulationThread::spawn(self.session.clone(), self.clock.clone(), renderer)
    }

    pub fn set_goal(&self, x: f32, y: f32) -> bool {
        self.session.lock().set_goal(x, y)
    }

    pub fn start(&self) {
        let now = self.clock.now_millis();
        self.session.lock().start(now);
    }

    pub fn pause(&self) {
        self.session.lock().pause();
    }

    pub fn resume(&self) {
        let now = self.clock.now_millis();
        self.session.lock().resume(now);
    }

    pub fn toggle_running(&self) {
        let now = self.clock.now_millis();
        self.session.lock().toggle_running(now);
    }

    pub fn on_focus_changed(&self, has_focus: bool) {
        self.session.lock().on_focus_changed(has_focus);
    }

    pub fn set_boundary(&self, width: u32, height: u32) {
        self.session.lock().set_boundary(width, height);
    }

    pub fn state(&self) -> GameState {
        self.session.lock().state()
    }

    pub fn save_state(&self) -> SavedState {
        self.session.lock().save_state()
    }

    pub fn restore_state(&self, saved: &SavedState) {
        self.session.lock().restore_state(saved);
    }

    /// Pending events, oldest first; only the newest `MAX_PENDING_EVENTS` are kept
    pub fn drain_events(&self) -> Vec<SimEvent> {
        self.session.lock().drain_events()
    }

    pub fn snapshot(&self) -> Snapshot {
        self.session.lock().snapshot()
    }
}

/// The running simulation/render loop
pub struct SimulationThread {
    running: Arc<AtomicBool>,
    frames: Arc<AtomicU64>,
    handle: Option<JoinHandle<()>>,
}

impl SimulationThread {
    pub fn spawn<C, R>(session: Arc<Mutex<Session>>, clock: C, mut renderer: R) -> Result<Self>
    where
        C: Clock + 'static,
        R: Renderer + 'static,
    {
        let running = Arc::new(AtomicBool::new(true));
        let frames = Arc::new(AtomicU64::new(0));

        let handle = {
            let running = running.clone();
            let frames = frames.clone();
            thread::Builder::new()
                .name("snake-sim".into())
                .spawn(move || {
                    log::info!("Simulation thread started");
                    while running.load(Ordering::Acquire) {
                        let snapshot = {
                            let mut session = session.lock();
                            session.on_frame(clock.now_millis());
                            session.snapshot()
                        };
                        frames.fetch_add(1, Ordering::Relaxed);

                        match renderer.render(&snapshot) {
                            Ok(()) => {}
                            Err(RenderError::Lost) => log::debug!("Render surface lost, frame dropped"),
                            Err(e) => log::warn!("Render error: {}", e),
                        }
                    }
                    log::info!("Simulation thread stopped");
                })
                .map_err(Error::ThreadSpawn)?
        };

        Ok(Self {
            running,
            frames,
            handle: Some(handle),
        })
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some() && self.running.load(Ordering::Acquire)
    }

    /// Frames run so far
    pub fn frames(&self) -> u64 {
        self.frames.load(Ordering::Relaxed)
    }

    /// Clear the run flag and wait for the thread to finish
    pub fn stop(mut self) -> Result<()> {
        self.shutdown()
    }

    fn shutdown(&mut self) -> Result<()> {
        self.running.store(false, Ordering::Release);
        let Some(handle) = self.handle.take() else {
            return Ok(());
        };
        handle.join().map_err(|_| {
            log::error!("Simulation thread panicked");
            Error::ThreadPanicked
        })
    }
}

impl Drop for SimulationThread {
    fn drop(&mut self) {
        let _ = self.shutdown();
    }
}
