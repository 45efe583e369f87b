//! Side Runner - a 2D side-scrolling runner
//!
//! Core modules:
//! - `sim`: Deterministic simulation (kinematics, spawning, collisions, state)
//! - `session`: Owning facade a host loop drives: input latching, `tick()`,
//!   read-only snapshots for the rendering collaborator

pub mod session;
pub mod sim;

pub use session::{GameSession, Snapshot};
pub use sim::{EndReason, GamePhase};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// World dimensions (world units); entities spawn at the right edge
    pub const WORLD_WIDTH: f32 = 800.0;
    pub const WORLD_HEIGHT: f32 = 600.0;
    /// Ground level - the player and ground obstacles rest here
    pub const GROUND_Y: f32 = 50.0;

    /// Player defaults
    pub const PLAYER_START_X: f32 = 100.0;
    pub const PLAYER_WIDTH: f32 = 30.0;
    pub const PLAYER_HEIGHT: f32 = 50.0;
    pub const PLAYER_DUCK_HEIGHT: f32 = 25.0;
    /// Initial upward velocity of a jump (units per tick)
    pub const JUMP_VELOCITY: f32 = 13.0;
    /// Downward acceleration (units per tick squared)
    pub const GRAVITY: f32 = 0.5;
    /// Extra height granted to the player's box in obstacle checks when
    /// standing. Obstacle checks only; item checks use the bare hitbox.
    pub const OBSTACLE_HIT_MARGIN: f32 = 10.0;
    /// Gap behind an obstacle's left edge the player is knocked back to
    pub const KNOCKBACK_GAP: f32 = 5.0;

    /// Entity sizes
    pub const OBSTACLE_WIDTH: f32 = 30.0;
    pub const OBSTACLE_HEIGHT: f32 = 55.0;
    /// Tall obstacles collide half again as high as the base height
    pub const TALL_OBSTACLE_FACTOR: f32 = 1.5;
    pub const COLLECTABLE_SIZE: f32 = 20.0;
    pub const POWERUP_SIZE: f32 = 25.0;

    /// Session tuning
    pub const INITIAL_GAME_SPEED: f32 = 2.0;
    /// Speed gain per tick, unbounded - difficulty only ever increases
    pub const SPEED_INCREMENT: f32 = 0.001;
    /// Session length in ticks (100 seconds at 60 Hz)
    pub const GAME_DURATION: u32 = 6000;
    pub const MAX_HEALTH: u8 = 5;
    /// Power-up effect length in ticks
    pub const POWERUP_DURATION: u32 = 500;

    /// Coin magnet attraction radius
    pub const MAGNET_RADIUS: f32 = 250.0;
    /// Fraction of the remaining delta a magnetized collectable covers per tick
    pub const MAGNET_PULL: f32 = 0.1;

    /// Per-tick spawn odds as (numerator, denominator) Bernoulli trials
    pub const OBSTACLE_SPAWN_ODDS: (u32, u32) = (2, 800);
    pub const COLLECTABLE_SPAWN_ODDS: (u32, u32) = (3, 200);
    pub const POWERUP_SPAWN_ODDS: (u32, u32) = (5, 1200);
    /// Items spawn at ground level plus an integer offset below this bound
    pub const SPAWN_BAND: u32 = 100;

    /// Cosmetic bob animation for collectables and power-ups
    pub const BOB_AMPLITUDE: f32 = 5.0;
    /// Bob angular rate in radians per second of simulation time
    pub const BOB_RATE: f32 = 5.0;
}
