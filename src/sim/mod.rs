//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering, input plumbing, or platform dependencies

pub mod collision;
pub mod player;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Aabb, player_item_box, player_obstacle_box};
pub use player::Player;
pub use state::{
    ActiveEffects, Collectable, EndReason, GamePhase, GameState, Obstacle, PowerUp, PowerUpKind,
};
pub use tick::{TickInput, magnet_pull, tick};
