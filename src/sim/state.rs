//! Game state and core simulation types
//!
//! Everything a tick mutates lives here, owned by one `GameState`.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::player::Player;
use crate::consts::*;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Simulation is advancing
    Running,
    /// Session finished; only a restart leaves this phase
    Ended(EndReason),
}

/// Why the session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndReason {
    /// The countdown ran out
    TimeExpired,
    /// Health hit zero
    HealthDepleted,
}

impl EndReason {
    /// Display string for the rendering collaborator's end screen
    pub fn message(&self) -> &'static str {
        match self {
            EndReason::TimeExpired => "GAME END",
            EndReason::HealthDepleted => "GAME LOST",
        }
    }
}

/// A ground or floating obstacle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub pos: Vec2,
    /// Tall obstacles spawn floating one base height up; the player ducks
    /// under them instead of jumping
    pub tall: bool,
    pub active: bool,
}

impl Obstacle {
    /// Collision height of this obstacle's box
    pub fn height(&self) -> f32 {
        if self.tall {
            OBSTACLE_HEIGHT * TALL_OBSTACLE_FACTOR
        } else {
            OBSTACLE_HEIGHT
        }
    }
}

/// A collectable coin
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Collectable {
    pub pos: Vec2,
    /// Cosmetic bob, never part of collision geometry
    pub anim_offset: f32,
    pub active: bool,
}

/// Power-up kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerUpKind {
    /// Pulls nearby collectables toward the player
    CoinMagnet,
    /// Doubles the score gained per collectable
    DoublePoints,
}

/// A floating power-up pickup
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PowerUp {
    pub pos: Vec2,
    pub kind: PowerUpKind,
    /// Cosmetic bob, never part of collision geometry
    pub anim_offset: f32,
    pub active: bool,
}

/// Active power-up countdowns in ticks; zero means inactive.
/// The two effects run independently.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveEffects {
    pub magnet_ticks: u32,
    pub double_points_ticks: u32,
}

impl ActiveEffects {
    pub fn magnet_active(&self) -> bool {
        self.magnet_ticks > 0
    }

    pub fn double_points_active(&self) -> bool {
        self.double_points_ticks > 0
    }

    /// Start (or refresh) an effect. Re-activation resets the timer; there
    /// is no stacking beyond that.
    pub fn activate(&mut self, kind: PowerUpKind) {
        match kind {
            PowerUpKind::CoinMagnet => self.magnet_ticks = POWERUP_DURATION,
            PowerUpKind::DoublePoints => self.double_points_ticks = POWERUP_DURATION,
        }
    }

    /// Decrement both countdowns; runs once per tick after collision
    /// resolution
    pub fn advance(&mut self) {
        self.magnet_ticks = self.magnet_ticks.saturating_sub(1);
        self.double_points_ticks = self.double_points_ticks.saturating_sub(1);
    }
}

/// Complete session state (deterministic given seed and input sequence)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Spawn RNG. The stream survives restart - a restarted session rolls
    /// fresh spawns rather than replaying the previous run.
    pub rng: Pcg32,
    /// Simulation tick counter, also the cosmetic animation clock
    pub time_ticks: u64,
    pub phase: GamePhase,
    pub score: u32,
    pub health: u8,
    /// Remaining session time in ticks
    pub time_remaining: u32,
    /// World scroll speed; strictly increasing while running
    pub speed: f32,
    pub player: Player,
    pub obstacles: Vec<Obstacle>,
    pub collectables: Vec<Collectable>,
    pub power_ups: Vec<PowerUp>,
    pub effects: ActiveEffects,
}

impl GameState {
    /// Create a fresh session with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            time_ticks: 0,
            phase: GamePhase::Running,
            score: 0,
            health: MAX_HEALTH,
            time_remaining: GAME_DURATION,
            speed: INITIAL_GAME_SPEED,
            player: Player::default(),
            obstacles: Vec::new(),
            collectables: Vec::new(),
            power_ups: Vec::new(),
            effects: ActiveEffects::default(),
        }
    }

    /// Reset to the initial state, keeping the RNG stream
    pub fn reset(&mut self) {
        self.time_ticks = 0;
        self.phase = GamePhase::Running;
        self.score = 0;
        self.health = MAX_HEALTH;
        self.time_remaining = GAME_DURATION;
        self.speed = INITIAL_GAME_SPEED;
        self.player = Player::default();
        self.obstacles.clear();
        self.collectables.clear();
        self.power_ups.clear();
        self.effects = ActiveEffects::default();
    }

    /// Drop deactivated entities. External behavior is defined over active
    /// entities only, so storage may be compacted freely.
    pub fn compact(&mut self) {
        self.obstacles.retain(|o| o.active);
        self.collectables.retain(|c| c.active);
        self.power_ups.retain(|p| p.active);
    }
}
