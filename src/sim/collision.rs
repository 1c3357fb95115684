//! Collision detection
//!
//! The reference model tests proximity per axis rather than true circular
//! distance: two entities collide when both `|dx|` and `|dy|` are under the
//! sum of their radii. That is a square around each entity, a deliberate
//! cheap approximation, and gameplay is tuned around it.

use glam::Vec2;

use super::entity::Mobile;

/// Axis-aligned proximity test: true when `a` and `b` are within `reach`
/// of each other on both axes
#[inline]
pub fn within_reach(a: Vec2, b: Vec2, reach: f32) -> bool {
    (a.x - b.x).abs() < reach && (a.y - b.y).abs() < reach
}

/// Collision test between two alive entities using their combined radii.
/// Dead entities never collide.
pub fn entities_collide<A: Mobile, B: Mobile>(a: &A, b: &B) -> bool {
    a.is_alive() && b.is_alive() && within_reach(a.pos(), b.pos(), a.radius() + b.radius())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Config;
    use crate::sim::state::{Rock, RockSize, Ship};

    #[test]
    fn test_within_reach_basics() {
        let a = Vec2::new(100.0, 100.0);
        assert!(within_reach(a, Vec2::new(104.0, 97.0), 5.0));
        assert!(!within_reach(a, Vec2::new(106.0, 100.0), 5.0));
        assert!(!within_reach(a, Vec2::new(100.0, 94.0), 5.0));
        // The threshold itself does not collide
        assert!(!within_reach(a, Vec2::new(105.0, 100.0), 5.0));
    }

    #[test]
    fn test_reach_is_square_not_circular() {
        // Diagonal corner: inside the square but outside the circle
        let a = Vec2::ZERO;
        let b = Vec2::new(4.0, 4.0);
        assert!(b.length() > 5.0);
        assert!(within_reach(a, b, 5.0));
    }

    #[test]
    fn test_dead_entities_never_collide() {
        let cfg = Config::default();
        let ship = Ship::new(&cfg);
        let mut rock = Rock::with_size(RockSize::Big, ship.pos, Vec2::ZERO, 0.0, &cfg);
        assert!(entities_collide(&ship, &rock));
        rock.alive = false;
        assert!(!entities_collide(&ship, &rock));
    }
}
