//! Rockfield entry point
//!
//! Headless driver: the simulation core ships no renderer, so the native
//! binary runs a scripted session and logs the run. A windowed host would
//! instead feed key events into `HeldKeys`, call `tick` once per frame, and
//! draw the `Scene::capture` output.
//!
//! Usage: `rockfield [seed] [--dump-scene]`

use std::env;
use std::time::{SystemTime, UNIX_EPOCH};

use rockfield::Config;
use rockfield::consts::SIM_DT;
use rockfield::input::{GameKey, HeldKeys};
use rockfield::sim::{GamePhase, World, tick};
use rockfield::snapshot::Scene;

fn main() {
    env_logger::init();

    let seed = env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or(0)
        });

    log::info!("rockfield starting with seed {seed}");

    let mut world = World::new(Config::default(), seed);
    let mut keys = HeldKeys::default();

    // Scripted session: a short burn, then spin slowly with the trigger held
    keys.key_down(GameKey::Left);
    keys.key_down(GameKey::Fire);
    keys.key_down(GameKey::ThrustForward);

    let mut last_phase = world.phase;
    for t in 0..3600u32 {
        if t == 30 {
            keys.key_up(GameKey::ThrustForward);
        }
        let input = keys.take_input();
        tick(&mut world, &input, SIM_DT);

        if world.phase != last_phase {
            log::info!(
                "tick {}: {:?} -> {:?}",
                world.time_ticks,
                last_phase,
                world.phase
            );
            last_phase = world.phase;
        }
        if world.phase == GamePhase::GameOver {
            break;
        }
    }

    log::info!(
        "stopped after {} ticks: {:?}, {} rocks left, {} lives left",
        world.time_ticks,
        world.phase,
        world.rocks.len(),
        world.ship.lives
    );

    if env::args().any(|arg| arg == "--dump-scene") {
        match serde_json::to_string_pretty(&Scene::capture(&world)) {
            Ok(json) => println!("{json}"),
            Err(err) => log::error!("scene dump failed: {err}"),
        }
    }
}
