//! Held-key tracking
//!
//! The host delivers discrete key-down/key-up events; the simulation wants
//! one resolved command set per tick. `HeldKeys` sits between the two:
//! directional keys act while held, fire is safe to hold (the ship's
//! cooldown gates it), and releasing a thrust key douses the flame.

use crate::sim::TickInput;

/// The fixed set of keys the game understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameKey {
    /// Turn counter-clockwise
    Left,
    /// Turn clockwise
    Right,
    /// Thrust along the nose
    ThrustForward,
    /// Thrust backward
    ThrustBackward,
    Fire,
    /// Restart confirmation on the game-over screen
    Confirm,
}

/// Currently-held keys plus one-shot events pending for the next tick
#[derive(Debug, Clone, Copy, Default)]
pub struct HeldKeys {
    left: bool,
    right: bool,
    forward: bool,
    backward: bool,
    fire: bool,
    cut_thrusters: bool,
    restart: bool,
}

impl HeldKeys {
    pub fn key_down(&mut self, key: GameKey) {
        match key {
            GameKey::Left => self.left = true,
            GameKey::Right => self.right = true,
            GameKey::ThrustForward => self.forward = true,
            GameKey::ThrustBackward => self.backward = true,
            GameKey::Fire => self.fire = true,
            GameKey::Confirm => self.restart = true,
        }
    }

    pub fn key_up(&mut self, key: GameKey) {
        match key {
            GameKey::Left => self.left = false,
            GameKey::Right => self.right = false,
            GameKey::ThrustForward => {
                self.forward = false;
                self.cut_thrusters = true;
            }
            GameKey::ThrustBackward => {
                self.backward = false;
                self.cut_thrusters = true;
            }
            GameKey::Fire => self.fire = false,
            GameKey::Confirm => {}
        }
    }

    /// Resolve the current key state into this tick's commands, consuming
    /// one-shot events (restart, thruster cut)
    pub fn take_input(&mut self) -> TickInput {
        let mut turn = 0i8;
        if self.left {
            turn += 1;
        }
        if self.right {
            turn -= 1;
        }
        let mut thrust = 0i8;
        if self.forward {
            thrust += 1;
        }
        if self.backward {
            thrust -= 1;
        }

        let input = TickInput {
            turn,
            thrust,
            fire: self.fire,
            cut_thrusters: self.cut_thrusters,
            restart: self.restart,
        };
        self.cut_thrusters = false;
        self.restart = false;
        input
    }
}
