//! Game state and core simulation types
//!
//! All state that the per-frame update mutates lives here. Everything is
//! serde-derived and deterministic given the seed.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::entity::Mobile;
use crate::config::Config;
use crate::heading_vec;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ship alive and flying
    Playing,
    /// Ship destroyed with lives remaining, counting toward respawn
    ShipDown,
    /// Run ended; only a restart command does anything
    GameOver,
}

/// Which way the thruster flame points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThrusterFacing {
    Forward,
    Backward,
}

/// The player's ship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ship {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Heading in degrees; the nose points along `heading + 90°`
    pub heading: f32,
    pub alive: bool,
    pub radius: f32,
    /// Frames since the last shot
    pub firing_cooldown: u32,
    pub lives: u8,
    pub thrusters_on: bool,
    pub thrusters_facing: ThrusterFacing,
}

impl Ship {
    pub fn new(config: &Config) -> Self {
        Self {
            pos: config.center(),
            vel: Vec2::ZERO,
            heading: 0.0,
            alive: true,
            radius: config.ship_radius,
            // Start off cooldown so the first shot is immediate
            firing_cooldown: config.firing_cooldown,
            lives: config.ship_lives,
            thrusters_on: false,
            thrusters_facing: ThrusterFacing::Forward,
        }
    }

    /// Rotate by one frame's turn rate; `direction` is -1, 0, or +1
    pub fn turn(&mut self, direction: f32, config: &Config) {
        self.heading += direction * config.ship_turn_rate;
    }

    /// Accumulate one frame of thrust along the nose (or tail, if negative).
    /// No damping is modeled; impulses add up until the player counters them.
    pub fn thrust(&mut self, direction: f32, config: &Config) {
        self.thrusters_facing = if direction > 0.0 {
            ThrusterFacing::Forward
        } else {
            ThrusterFacing::Backward
        };
        self.vel += heading_vec(self.heading + 90.0) * config.ship_thrust * direction;
        self.thrusters_on = true;
    }

    /// Fire a bullet from the nose, inheriting the ship's velocity.
    ///
    /// A no-op (`None`) while the cooldown has not elapsed; otherwise the
    /// cooldown resets to 0 and the caller owns the new bullet.
    pub fn fire(&mut self, config: &Config) -> Option<Bullet> {
        if self.firing_cooldown < config.firing_cooldown {
            return None;
        }
        self.firing_cooldown = 0;
        Some(Bullet::fired(self, config))
    }

    /// Take an asteroid hit: park the ship at the off-field sentinel so it
    /// cannot collide again before cleanup, spend a life, go down.
    pub fn hit(&mut self, config: &Config) {
        self.pos = config.offscreen_sentinel();
        self.lives = self.lives.saturating_sub(1);
        self.alive = false;
    }

    /// Respawn at the center, if any lives remain
    pub fn reset(&mut self, config: &Config) {
        if self.lives > 0 {
            self.pos = config.center();
            self.vel = Vec2::ZERO;
            self.heading = 0.0;
            self.alive = true;
        }
    }
}

impl Mobile for Ship {
    fn pos(&self) -> Vec2 {
        self.pos
    }
    fn pos_mut(&mut self) -> &mut Vec2 {
        &mut self.pos
    }
    fn vel(&self) -> Vec2 {
        self.vel
    }
    fn heading(&self) -> f32 {
        self.heading
    }
    fn is_alive(&self) -> bool {
        self.alive
    }
    fn radius(&self) -> f32 {
        self.radius
    }

    fn advance(&mut self) {
        self.pos += self.vel;
        self.firing_cooldown += 1;
    }
}

/// A fired bullet
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bullet {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Heading in degrees (travel direction)
    pub heading: f32,
    pub alive: bool,
    pub radius: f32,
    /// Frames since firing
    pub age: u32,
    pub max_life: u32,
}

impl Bullet {
    /// Construct a bullet at the ship's nose: positioned half a combined
    /// radius ahead, headed the way the nose points, at bullet speed plus
    /// the ship's own velocity.
    fn fired(ship: &Ship, config: &Config) -> Self {
        let heading = ship.heading + 90.0;
        let muzzle_offset = (ship.radius + config.bullet_radius) / 2.0;
        Self {
            pos: ship.pos + heading_vec(heading) * muzzle_offset,
            vel: heading_vec(heading) * config.bullet_speed + ship.vel,
            heading,
            alive: true,
            radius: config.bullet_radius,
            age: 0,
            max_life: config.bullet_life,
        }
    }
}

impl Mobile for Bullet {
    fn pos(&self) -> Vec2 {
        self.pos
    }
    fn pos_mut(&mut self) -> &mut Vec2 {
        &mut self.pos
    }
    fn vel(&self) -> Vec2 {
        self.vel
    }
    fn heading(&self) -> f32 {
        self.heading
    }
    fn is_alive(&self) -> bool {
        self.alive
    }
    fn radius(&self) -> f32 {
        self.radius
    }

    fn advance(&mut self) {
        self.pos += self.vel;
        self.age += 1;
        if self.age >= self.max_life {
            self.alive = false;
        }
    }
}

/// Rock size class; fixes radius, spin, and fragmentation output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RockSize {
    Big,
    Medium,
    Small,
}

impl RockSize {
    pub fn radius(&self, config: &Config) -> f32 {
        match self {
            RockSize::Big => config.big_rock_radius,
            RockSize::Medium => config.medium_rock_radius,
            RockSize::Small => config.small_rock_radius,
        }
    }

    /// Degrees of rotation per frame
    pub fn spin(&self, config: &Config) -> f32 {
        match self {
            RockSize::Big => config.big_rock_spin,
            RockSize::Medium => config.medium_rock_spin,
            RockSize::Small => config.small_rock_spin,
        }
    }
}

/// An asteroid
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rock {
    pub size: RockSize,
    pub pos: Vec2,
    pub vel: Vec2,
    /// Display rotation in degrees, driven by `spin`
    pub heading: f32,
    pub spin: f32,
    pub alive: bool,
    pub radius: f32,
}

impl Rock {
    /// A rock of the given class at an explicit position and velocity
    pub fn with_size(size: RockSize, pos: Vec2, vel: Vec2, heading: f32, config: &Config) -> Self {
        Self {
            size,
            pos,
            vel,
            heading,
            spin: size.spin(config),
            alive: true,
            radius: size.radius(config),
        }
    }

    /// A big rock at a random spot, cruising on a random heading.
    ///
    /// Each axis is sampled uniformly but outside the central band of
    /// `±2·radius` around the midpoint, which keeps the spawn clear of the
    /// ship's safe zone.
    pub fn spawn_big(config: &Config, rng: &mut Pcg32) -> Self {
        let exclusion = config.big_rock_radius * 2.0;
        let x = scatter_coord(rng, config.screen_width, exclusion);
        let y = scatter_coord(rng, config.screen_height, exclusion);
        let heading = rng.random_range(0..=360) as f32;
        let vel = heading_vec(heading) * config.big_rock_speed;
        Self::with_size(RockSize::Big, Vec2::new(x, y), vel, heading, config)
    }

    /// Break into smaller rocks at this position, marking self dead.
    ///
    /// Fragment velocities are fixed offsets from the parent velocity:
    /// - Big: two mediums at `(vx, vy ± 2)` and a small at `(vx + 5, vy)`
    /// - Medium: two smalls at `(vx ± 1.5, vy ± 1.5)`
    /// - Small: nothing smaller exists; returns itself already dead so the
    ///   call contract stays uniform and cleanup removes both copies
    pub fn break_apart(&mut self, config: &Config) -> Vec<Rock> {
        self.alive = false;
        let (p, v, h) = (self.pos, self.vel, self.heading);
        match self.size {
            RockSize::Big => vec![
                Rock::with_size(RockSize::Medium, p, Vec2::new(v.x, v.y + 2.0), h, config),
                Rock::with_size(RockSize::Medium, p, Vec2::new(v.x, v.y - 2.0), h, config),
                Rock::with_size(RockSize::Small, p, Vec2::new(v.x + 5.0, v.y), h, config),
            ],
            RockSize::Medium => vec![
                Rock::with_size(RockSize::Small, p, Vec2::new(v.x + 1.5, v.y + 1.5), h, config),
                Rock::with_size(RockSize::Small, p, Vec2::new(v.x - 1.5, v.y - 1.5), h, config),
            ],
            RockSize::Small => vec![self.clone()],
        }
    }
}

impl Mobile for Rock {
    fn pos(&self) -> Vec2 {
        self.pos
    }
    fn pos_mut(&mut self) -> &mut Vec2 {
        &mut self.pos
    }
    fn vel(&self) -> Vec2 {
        self.vel
    }
    fn heading(&self) -> f32 {
        self.heading
    }
    fn is_alive(&self) -> bool {
        self.alive
    }
    fn radius(&self) -> f32 {
        self.radius
    }

    fn advance(&mut self) {
        self.pos += self.vel;
        self.heading += self.spin;
    }
}

/// Uniform coordinate in `[0, extent]` excluding the central band of
/// `±exclusion` around the midpoint
fn scatter_coord(rng: &mut Pcg32, extent: f32, exclusion: f32) -> f32 {
    let band_lo = extent / 2.0 - exclusion;
    let band_width = exclusion * 2.0;
    let sample = rng.random_range(0.0..extent - band_width);
    if sample >= band_lo {
        sample + band_width
    } else {
        sample
    }
}

/// RNG state wrapper for serialization; each spawn batch takes a fresh
/// stream so restarts stay deterministic but distinct
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
    pub stream: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed, stream: 0 }
    }

    /// Deterministic generator for the next spawn batch
    pub fn next_batch(&mut self) -> Pcg32 {
        let rng = Pcg32::new(self.seed, self.stream);
        self.stream += 1;
        rng
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    pub config: Config,
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng_state: RngState,
    pub ship: Ship,
    pub bullets: Vec<Bullet>,
    pub rocks: Vec<Rock>,
    /// Screen positions of the remaining-lives markers; one pops per hit
    pub life_tokens: Vec<Vec2>,
    /// Frame counter gating both ship respawn and the game-over trigger
    pub reset_counter: u32,
    pub phase: GamePhase,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl World {
    /// New world with the starting rock field seeded from `seed`
    pub fn new(config: Config, seed: u64) -> Self {
        let mut world = Self {
            config,
            seed,
            rng_state: RngState::new(seed),
            ship: Ship::new(&config),
            bullets: Vec::new(),
            rocks: Vec::new(),
            life_tokens: Vec::new(),
            reset_counter: 0,
            phase: GamePhase::Playing,
            time_ticks: 0,
        };
        world.rebuild_life_tokens();
        world.spawn_rock_field();
        world
    }

    /// Replace the rock collection with a fresh batch of big rocks
    pub fn spawn_rock_field(&mut self) {
        let mut rng = self.rng_state.next_batch();
        self.rocks = (0..self.config.initial_rock_count)
            .map(|_| Rock::spawn_big(&self.config, &mut rng))
            .collect();
        log::info!("spawned {} big rocks", self.rocks.len());
    }

    /// Lay out one life marker per remaining life along the top edge
    pub fn rebuild_life_tokens(&mut self) {
        let cfg = &self.config;
        self.life_tokens = (0..self.ship.lives)
            .map(|i| {
                Vec2::new(
                    cfg.life_token_margin + cfg.life_token_spacing * i as f32,
                    cfg.screen_height - cfg.life_token_margin,
                )
            })
            .collect();
    }
}
