//! Drawable scene snapshot
//!
//! The renderer never touches simulation state directly: after each tick the
//! host captures a `Scene` - plain sprite data in draw order - and iterates
//! it read-only. Texture lookup, text layout, and the actual draw calls stay
//! on the host side.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::heading_vec;
use crate::sim::{GamePhase, RockSize, ThrusterFacing, World};

/// What a sprite depicts; the host maps this to a texture or text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpriteKind {
    Bullet,
    BigRock,
    MediumRock,
    SmallRock,
    Thruster,
    Ship,
    LifeToken,
    GameOverBanner,
}

/// One drawable element
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Sprite {
    pub kind: SpriteKind,
    pub pos: Vec2,
    /// Rotation in degrees
    pub angle: f32,
    /// 0.0 invisible, 1.0 opaque
    pub opacity: f32,
}

/// A consistent post-update view of everything to draw, in draw order:
/// bullets, rocks, thruster flame, ship, life tokens, banner
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scene {
    pub sprites: Vec<Sprite>,
    pub game_over: bool,
}

/// A destroyed ship is drawn as a faint ghost rather than dropped, the same
/// near-zero alpha the reference uses
const GHOST_OPACITY: f32 = 1.0 / 255.0;

impl Scene {
    pub fn capture(world: &World) -> Self {
        let cfg = &world.config;
        let mut sprites = Vec::with_capacity(
            world.bullets.len() + world.rocks.len() + world.life_tokens.len() + 3,
        );

        for bullet in &world.bullets {
            sprites.push(Sprite {
                kind: SpriteKind::Bullet,
                pos: bullet.pos,
                angle: bullet.heading,
                opacity: 1.0,
            });
        }

        for rock in &world.rocks {
            let kind = match rock.size {
                RockSize::Big => SpriteKind::BigRock,
                RockSize::Medium => SpriteKind::MediumRock,
                RockSize::Small => SpriteKind::SmallRock,
            };
            sprites.push(Sprite {
                kind,
                pos: rock.pos,
                angle: rock.heading,
                opacity: 1.0,
            });
        }

        // Thruster flame, placed at the tail (or nose, when reversing)
        let ship = &world.ship;
        let nose = heading_vec(ship.heading + 90.0);
        let (flame_pos, flame_angle) = match ship.thrusters_facing {
            ThrusterFacing::Forward => (ship.pos - nose * ship.radius, ship.heading + 180.0),
            ThrusterFacing::Backward => (ship.pos + nose * (ship.radius - 10.0), ship.heading),
        };
        sprites.push(Sprite {
            kind: SpriteKind::Thruster,
            pos: flame_pos,
            angle: flame_angle,
            opacity: if ship.thrusters_on && ship.alive {
                1.0
            } else {
                GHOST_OPACITY
            },
        });
        sprites.push(Sprite {
            kind: SpriteKind::Ship,
            pos: ship.pos,
            angle: ship.heading,
            opacity: if ship.alive { 1.0 } else { GHOST_OPACITY },
        });

        for token in &world.life_tokens {
            sprites.push(Sprite {
                kind: SpriteKind::LifeToken,
                pos: *token,
                angle: 0.0,
                opacity: 1.0,
            });
        }

        let game_over = world.phase == GamePhase::GameOver;
        if game_over {
            sprites.push(Sprite {
                kind: SpriteKind::GameOverBanner,
                pos: cfg.center(),
                angle: 0.0,
                opacity: 1.0,
            });
        }

        Self { sprites, game_over }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Config;
    use crate::consts::SIM_DT;
    use crate::sim::{TickInput, tick};

    #[test]
    fn test_scene_counts_match_world() {
        let world = World::new(Config::default(), 5);
        let scene = Scene::capture(&world);

        let count = |kind: SpriteKind| scene.sprites.iter().filter(|s| s.kind == kind).count();
        assert_eq!(count(SpriteKind::BigRock), world.rocks.len());
        assert_eq!(count(SpriteKind::LifeToken), world.ship.lives as usize);
        assert_eq!(count(SpriteKind::Ship), 1);
        assert_eq!(count(SpriteKind::Thruster), 1);
        assert_eq!(count(SpriteKind::Bullet), 0);
        assert!(!scene.game_over);
        assert_eq!(count(SpriteKind::GameOverBanner), 0);
    }

    #[test]
    fn test_dead_ship_is_a_ghost() {
        let mut world = World::new(Config::default(), 5);
        let cfg = world.config;
        world.ship.hit(&cfg);
        let scene = Scene::capture(&world);
        let ship = scene
            .sprites
            .iter()
            .find(|s| s.kind == SpriteKind::Ship)
            .unwrap();
        assert!(ship.opacity < 0.01);
    }

    #[test]
    fn test_flame_visible_only_while_thrusting() {
        let mut world = World::new(Config::default(), 5);
        // No incidental collisions while we watch the flame
        world.rocks.clear();
        let flame_opacity = |world: &World| {
            Scene::capture(world)
                .sprites
                .iter()
                .find(|s| s.kind == SpriteKind::Thruster)
                .unwrap()
                .opacity
        };
        assert!(flame_opacity(&world) < 0.01);

        tick(
            &mut world,
            &TickInput {
                thrust: 1,
                ..Default::default()
            },
            SIM_DT,
        );
        assert!(flame_opacity(&world) > 0.9);

        tick(
            &mut world,
            &TickInput {
                cut_thrusters: true,
                ..Default::default()
            },
            SIM_DT,
        );
        assert!(flame_opacity(&world) < 0.01);
    }

    #[test]
    fn test_banner_appears_at_game_over() {
        let mut world = World::new(Config::default(), 5);
        world.ship.lives = 0;
        world.ship.alive = false;
        let coast = TickInput::default();
        for _ in 0..world.config.game_over_delay {
            tick(&mut world, &coast, SIM_DT);
        }
        let scene = Scene::capture(&world);
        assert!(scene.game_over);
        assert!(
            scene
                .sprites
                .iter()
                .any(|s| s.kind == SpriteKind::GameOverBanner)
        );
        assert!(
            !scene
                .sprites
                .iter()
                .any(|s| s.kind == SpriteKind::LifeToken)
        );
    }

    #[test]
    fn test_scene_serializes() {
        let world = World::new(Config::default(), 5);
        let scene = Scene::capture(&world);
        let json = serde_json::to_string(&scene).unwrap();
        assert!(json.contains("BigRock"));
    }
}
