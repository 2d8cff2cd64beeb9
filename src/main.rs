//! Spring Snake entry point
//!
//! Runs the simulation headless: a seeded autopilot stands in for touch
//! input, and frames are printed to stdout as text.
//!
//! Usage: `spring-snake [settings.json] [seconds]`

use std::io;
use std::thread;
use std::time::Duration;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use spring_snake::Settings;
use spring_snake::platform::{SessionHandle, SystemClock};
use spring_snake::renderer::{Paced, TextRenderer};
use spring_snake::sim::{Mode, Session, SimEvent};

const DEFAULT_SECONDS: u64 = 10;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run() -> spring_snake::Result<()> {
    let mut args = std::env::args().skip(1);
    let settings = match args.next() {
        Some(path) => Settings::load_or_default(path),
        None => Settings::default(),
    };
    let seconds = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_SECONDS);
    let demo = settings.demo.clone();

    let handle = SessionHandle::new(Session::new(settings.color, settings.snake), SystemClock);
    handle.set_boundary(demo.surface_width, demo.surface_height);

    let renderer = Paced::new(
        TextRenderer::new(io::stdout(), demo.cell_size, demo.print_every),
        demo.fps,
    );
    let sim = handle.spawn_loop(renderer)?;
    handle.start();
    handle.resume();

    // Autopilot: steer toward a random point on the surface every so often
    let mut rng = Pcg32::seed_from_u64(demo.seed);
    let retarget_ms = demo.retarget_ms.max(1);
    let width = demo.surface_width.max(1) as f32;
    let height = demo.surface_height.max(1) as f32;
    let mut crashes = 0u32;

    for _ in 0..(seconds.saturating_mul(1000) / retarget_ms) {
        let x = rng.random_range(0.0..width);
        let y = rng.random_range(0.0..height);
        handle.set_goal(x, y);
        thread::sleep(Duration::from_millis(retarget_ms));

        for event in handle.drain_events() {
            match event {
                SimEvent::ModeChanged { to: Mode::Crash, .. } => {
                    crashes += 1;
                    log::info!("Bit own tail ({} so far)", crashes);
                }
                SimEvent::ModeChanged { from, to } => {
                    log::debug!("Mode {} -> {}", from.as_str(), to.as_str());
                }
                SimEvent::StateChanged { to, .. } => {
                    log::info!("Status: {}", to.status_text().unwrap_or(""));
                }
            }
        }
    }

    handle.pause();
    let saved = handle.save_state();
    sim.stop()?;

    log::info!("Done after {} crashes", crashes);
    println!("{}", saved.to_json()?);
    Ok(())
}
