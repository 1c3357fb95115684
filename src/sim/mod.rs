//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed per-frame stepping only (physics is frame-based, not delta-scaled)
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod entity;
pub mod state;
pub mod tick;

pub use collision::within_reach;
pub use entity::Mobile;
pub use state::{Bullet, GamePhase, Rock, RockSize, RngState, Ship, ThrusterFacing, World};
pub use tick::{TickInput, tick};
