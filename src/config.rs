//! Game tuning
//!
//! A single immutable `Config` is built at startup and handed to the world
//! and entity constructors. Defaults mirror the `consts` module; everything
//! is serde round-trippable so hosts can load tuning from JSON.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Immutable tuning for one run of the game
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Playfield size in pixels
    pub screen_width: f32,
    pub screen_height: f32,

    // === Ship ===
    pub ship_radius: f32,
    /// Degrees per frame while turning
    pub ship_turn_rate: f32,
    /// Velocity impulse per thrusting frame
    pub ship_thrust: f32,
    pub ship_lives: u8,
    /// Frames that must elapse between shots
    pub firing_cooldown: u32,

    // === Bullets ===
    pub bullet_radius: f32,
    pub bullet_speed: f32,
    /// Frames before a bullet expires on its own
    pub bullet_life: u32,

    // === Rocks ===
    pub big_rock_radius: f32,
    pub big_rock_spin: f32,
    pub big_rock_speed: f32,
    pub medium_rock_radius: f32,
    pub medium_rock_spin: f32,
    pub small_rock_radius: f32,
    pub small_rock_spin: f32,
    /// Big rocks spawned at game start and on restart
    pub initial_rock_count: usize,

    // === Lifecycle delays (frames) ===
    pub ship_respawn_delay: u32,
    pub game_over_delay: u32,

    // === Life-token row ===
    pub life_token_margin: f32,
    pub life_token_spacing: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,

            ship_radius: SHIP_RADIUS,
            ship_turn_rate: SHIP_TURN_RATE,
            ship_thrust: SHIP_THRUST,
            ship_lives: SHIP_LIVES,
            firing_cooldown: FIRING_COOLDOWN,

            bullet_radius: BULLET_RADIUS,
            bullet_speed: BULLET_SPEED,
            bullet_life: BULLET_LIFE,

            big_rock_radius: BIG_ROCK_RADIUS,
            big_rock_spin: BIG_ROCK_SPIN,
            big_rock_speed: BIG_ROCK_SPEED,
            medium_rock_radius: MEDIUM_ROCK_RADIUS,
            medium_rock_spin: MEDIUM_ROCK_SPIN,
            small_rock_radius: SMALL_ROCK_RADIUS,
            small_rock_spin: SMALL_ROCK_SPIN,
            initial_rock_count: INITIAL_ROCK_COUNT,

            ship_respawn_delay: SHIP_RESPAWN_DELAY,
            game_over_delay: GAME_OVER_DELAY,

            life_token_margin: LIFE_TOKEN_MARGIN,
            life_token_spacing: LIFE_TOKEN_SPACING,
        }
    }
}

impl Config {
    /// Playfield bounds as a vector
    #[inline]
    pub fn bounds(&self) -> Vec2 {
        Vec2::new(self.screen_width, self.screen_height)
    }

    /// Center of the playfield (ship spawn point)
    #[inline]
    pub fn center(&self) -> Vec2 {
        self.bounds() / 2.0
    }

    /// Parked position for a downed ship, well outside the playfield so it
    /// cannot register collisions while waiting in a collection
    #[inline]
    pub fn offscreen_sentinel(&self) -> Vec2 {
        self.bounds() * 2.0
    }
}
