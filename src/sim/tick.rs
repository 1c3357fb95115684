//! Fixed per-frame simulation tick
//!
//! Core update loop that advances the world deterministically. One call per
//! rendered frame. Hosts hand in their frame delta for interface parity, but
//! the physics is frame-based and does not scale by it.

use super::collision::entities_collide;
use super::entity::Mobile;
use super::state::{GamePhase, Rock, World};

/// Input commands for a single tick, resolved from the host's held-key set
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Turn direction: +1 counter-clockwise, -1 clockwise, 0 coasting
    pub turn: i8,
    /// Thrust direction: +1 forward, -1 backward, 0 off
    pub thrust: i8,
    /// Fire this frame (gated by the ship's cooldown, so holding is safe)
    pub fire: bool,
    /// A thrust key was released; hides the flame
    pub cut_thrusters: bool,
    /// Restart command; only honored in `GameOver`
    pub restart: bool,
}

/// Advance the world by one frame.
///
/// `_dt` is the host's frame delta; the simulation steps in whole frames and
/// ignores it, so any value yields the same trajectory.
pub fn tick(world: &mut World, input: &TickInput, _dt: f32) {
    if world.phase == GamePhase::GameOver {
        // Terminal state: nothing moves until an explicit restart
        if input.restart {
            restart(world);
        }
        world.time_ticks += 1;
        return;
    }

    resolve_input(world, input);
    resolve_collisions(world);
    wrap_off_screen(world);
    cleanup_dead(world);
    check_resets(world);
    advance_all(world);

    world.time_ticks += 1;
}

/// Translate held-key commands into ship calls
fn resolve_input(world: &mut World, input: &TickInput) {
    let cfg = world.config;
    if input.turn != 0 {
        world.ship.turn(input.turn as f32, &cfg);
    }
    if input.thrust != 0 {
        world.ship.thrust(input.thrust as f32, &cfg);
    }
    if input.cut_thrusters {
        world.ship.thrusters_on = false;
    }
    if input.fire && world.ship.alive {
        if let Some(bullet) = world.ship.fire(&cfg) {
            world.bullets.push(bullet);
        }
    }
}

/// Collision pass: ship vs rocks, then bullets vs rocks.
///
/// Fragments are collected and appended after the sweep; nothing is removed
/// or inserted while the collections are being read. A bullet dies on its
/// first hit, so it splits at most one rock per frame.
fn resolve_collisions(world: &mut World) {
    let cfg = world.config;
    let mut fragments: Vec<Rock> = Vec::new();

    for rock in &mut world.rocks {
        if entities_collide(&world.ship, rock) {
            world.ship.hit(&cfg);
            world.life_tokens.pop();
            log::info!("ship destroyed, {} lives left", world.ship.lives);
        }

        for bullet in &mut world.bullets {
            if entities_collide(bullet, rock) {
                bullet.alive = false;
                fragments.extend(rock.break_apart(&cfg));
            }
        }
    }

    world.rocks.extend(fragments);
}

/// Wrap pass: teleport anything past an edge to the opposite one
fn wrap_off_screen(world: &mut World) {
    let bounds = world.config.bounds();
    for rock in &mut world.rocks {
        rock.wrap_if_off_screen(bounds);
    }
    for bullet in &mut world.bullets {
        bullet.wrap_if_off_screen(bounds);
    }
    world.ship.wrap_if_off_screen(bounds);
}

/// Cleanup pass: compact the collections down to alive entities
fn cleanup_dead(world: &mut World) {
    world.rocks.retain(|r| r.alive);
    world.bullets.retain(|b| b.alive);
}

/// Lifecycle pass: ship respawn, cleared-field countdown, game over
fn check_resets(world: &mut World) {
    let cfg = world.config;

    if !world.ship.alive {
        world.reset_counter += 1;
        if world.reset_counter >= cfg.ship_respawn_delay && world.ship.lives > 0 {
            world.ship.reset(&cfg);
            world.reset_counter = 0;
            log::info!("ship respawned");
        }
        try_end_game(world);
    } else if world.rocks.is_empty() {
        world.reset_counter += 1;
        try_end_game(world);
    }

    if world.phase != GamePhase::GameOver {
        world.phase = if world.ship.alive {
            GamePhase::Playing
        } else {
            GamePhase::ShipDown
        };
    }
}

/// Enter `GameOver` once the reset counter runs out
fn try_end_game(world: &mut World) {
    if world.reset_counter >= world.config.game_over_delay {
        world.rocks.clear();
        world.ship.alive = false;
        world.ship.lives = 0;
        world.life_tokens.clear();
        world.phase = GamePhase::GameOver;
        log::info!("game over after {} ticks", world.time_ticks);
    }
}

/// Advance pass: one frame of motion for everything alive or not-yet-culled
fn advance_all(world: &mut World) {
    world.ship.advance();
    for bullet in &mut world.bullets {
        bullet.advance();
    }
    for rock in &mut world.rocks {
        rock.advance();
    }
}

/// Full re-initialization out of `GameOver`: fresh ship, lives, and rock
/// field; the RNG stream advances so the new field differs from the last
fn restart(world: &mut World) {
    let cfg = world.config;
    world.reset_counter = 0;
    world.ship.lives = cfg.ship_lives;
    world.ship.reset(&cfg);
    world.rebuild_life_tokens();
    world.spawn_rock_field();
    world.phase = GamePhase::Playing;
    log::info!("game restarted");
}
