//! Player vertical kinematics
//!
//! The avatar runs in place: the world scrolls, the player only moves
//! vertically. Horizontal position changes solely through obstacle
//! knockback, which is never undone.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// The runner avatar
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    pub jumping: bool,
    pub ducking: bool,
    pub jump_vel: f32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            x: PLAYER_START_X,
            y: GROUND_Y,
            jumping: false,
            ducking: false,
            jump_vel: 0.0,
        }
    }
}

impl Player {
    /// Start a jump. No-op while airborne - no mid-air double jump.
    pub fn apply_jump(&mut self) {
        if !self.jumping && self.y == GROUND_Y {
            self.jumping = true;
            self.jump_vel = JUMP_VELOCITY;
        }
    }

    /// Level-triggered duck pose. Legal while airborne; only the hitbox
    /// height changes.
    pub fn set_ducking(&mut self, held: bool) {
        self.ducking = held;
    }

    /// Integrate one tick of vertical motion. Landing snaps exactly to
    /// ground level and zeroes the velocity - no residual drift.
    pub fn advance(&mut self) {
        if self.jumping {
            self.y += self.jump_vel;
            self.jump_vel -= GRAVITY;
            if self.y <= GROUND_Y {
                self.y = GROUND_Y;
                self.jumping = false;
                self.jump_vel = 0.0;
            }
        }
    }

    /// Hitbox height for collectable and power-up checks
    pub fn hitbox_height(&self) -> f32 {
        if self.ducking {
            PLAYER_DUCK_HEIGHT
        } else {
            PLAYER_HEIGHT
        }
    }
}
