//! Rockfield - a wrapped-playfield asteroids arcade core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, physics, collisions, game state)
//! - `input`: Held-key tracking resolved into per-tick commands
//! - `snapshot`: Read-only drawable scene for the host renderer
//! - `config`: Data-driven tuning

pub mod config;
pub mod input;
pub mod sim;
pub mod snapshot;

pub use config::Config;

use glam::Vec2;

/// Game tuning defaults, matching the reference playfield
pub mod consts {
    /// Playfield dimensions (pixels)
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// Nominal frame delta for hosts driving `tick` at 60 Hz
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Ship defaults
    pub const SHIP_RADIUS: f32 = 30.0;
    /// Degrees turned per frame while a turn key is held
    pub const SHIP_TURN_RATE: f32 = 3.0;
    /// Velocity impulse per frame while thrusting (pixels/frame²)
    pub const SHIP_THRUST: f32 = 0.25;
    pub const SHIP_LIVES: u8 = 3;
    /// Minimum frames between shots
    pub const FIRING_COOLDOWN: u32 = 10;

    /// Bullet defaults (the radius is generous - the laser sprite is long)
    pub const BULLET_RADIUS: f32 = 30.0;
    pub const BULLET_SPEED: f32 = 10.0;
    /// Bullet lifetime in frames
    pub const BULLET_LIFE: u32 = 60;

    /// Rock size classes: collision radius, spin (degrees/frame), cruise speed
    pub const BIG_ROCK_RADIUS: f32 = 15.0;
    pub const BIG_ROCK_SPIN: f32 = 1.0;
    pub const BIG_ROCK_SPEED: f32 = 1.5;
    pub const MEDIUM_ROCK_RADIUS: f32 = 5.0;
    pub const MEDIUM_ROCK_SPIN: f32 = -2.0;
    pub const SMALL_ROCK_RADIUS: f32 = 2.0;
    pub const SMALL_ROCK_SPIN: f32 = 5.0;

    /// Big rocks seeded at game start / restart
    pub const INITIAL_ROCK_COUNT: usize = 5;

    /// Frames a downed ship waits before respawning
    pub const SHIP_RESPAWN_DELAY: u32 = 120;
    /// Frames of dead-ship (or cleared-field) time before the run ends
    pub const GAME_OVER_DELAY: u32 = 360;

    /// Life-token row layout (top-left corner of the screen)
    pub const LIFE_TOKEN_MARGIN: f32 = 30.0;
    pub const LIFE_TOKEN_SPACING: f32 = 40.0;
}

/// Unit vector for a heading given in degrees
#[inline]
pub fn heading_vec(degrees: f32) -> Vec2 {
    let (sin, cos) = degrees.to_radians().sin_cos();
    Vec2::new(cos, sin)
}
