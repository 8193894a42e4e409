//! Heli Run headless demo driver
//!
//! Runs a scripted session against the bookkeeping world: periodic pointer
//! impulses, a fixed number of 60 Hz ticks, and a JSON summary of where the
//! corridor ended up. Useful for eyeballing stream behavior and log output
//! without an engine attached.

use heli_run::consts::NOMINAL_FRAME_MS;
use heli_run::engine::{BeforeUpdate, HeadlessWorld, PointerDown};
use heli_run::ui::RecordingHud;
use heli_run::{GamePhase, Session, Viewport};
use serde::Serialize;

#[derive(Serialize)]
struct RunSummary {
    seed: u64,
    ticks: u32,
    lower_walls: usize,
    upper_walls: usize,
    floating_walls: usize,
    trail_particles: usize,
    world_bodies: usize,
    clock: String,
    phase: GamePhase,
}

fn main() {
    env_logger::init();

    let seed = 0x48454C49; // "HELI"
    let viewport = Viewport::new(1280.0, 720.0);
    let mut world = HeadlessWorld::new();
    let mut hud = RecordingHud::default();
    let mut session = Session::new(seed, viewport);

    session.setup(&mut world);
    world.resume_stepping();
    session.start(&mut hud);

    // 30 seconds of simulated flight at 60 Hz, with a tap every ~0.4 s
    let ticks = 1800u32;
    for frame in 0..ticks {
        if frame % 23 == 0 {
            session.on_pointer_down(
                &mut world,
                &PointerDown {
                    delta_ms: Some(NOMINAL_FRAME_MS),
                },
            );
        }
        let event = BeforeUpdate {
            delta_ms: Some(NOMINAL_FRAME_MS),
            timestamp_ms: (frame + 1) as f64 * NOMINAL_FRAME_MS as f64,
        };
        session.tick(&mut world, &mut hud, &event);

        if (frame + 1) % 600 == 0 {
            log::info!(
                "t={} floating={} trail={}",
                hud.clock,
                session.stream.floating.len(),
                session.trail.len(),
            );
        }
    }

    let summary = RunSummary {
        seed,
        ticks,
        lower_walls: session.stream.lower.len(),
        upper_walls: session.stream.upper.len(),
        floating_walls: session.stream.floating.len(),
        trail_particles: session.trail.len(),
        world_bodies: world.body_count(),
        clock: hud.clock.clone(),
        phase: session.phase(),
    };
    match serde_json::to_string_pretty(&summary) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("summary serialization failed: {e}"),
    }
}
