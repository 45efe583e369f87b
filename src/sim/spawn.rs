//! Probabilistic per-tick entity spawning
//!
//! Each pool rolls an independent Bernoulli trial every tick, so
//! inter-arrival times are geometric; there is no minimum-gap guarantee.
//! All randomness comes from the session's seeded RNG.

use glam::Vec2;
use rand::Rng;

use super::state::{Collectable, GameState, Obstacle, PowerUp, PowerUpKind};
use crate::consts::*;

/// Roll the three spawn trials and push any new entities at the right edge
/// of the world
pub fn spawn_entities(state: &mut GameState) {
    if state
        .rng
        .random_ratio(OBSTACLE_SPAWN_ODDS.0, OBSTACLE_SPAWN_ODDS.1)
    {
        let tall = state.rng.random();
        let y = if tall {
            GROUND_Y + OBSTACLE_HEIGHT
        } else {
            GROUND_Y
        };
        state.obstacles.push(Obstacle {
            pos: Vec2::new(WORLD_WIDTH, y),
            tall,
            active: true,
        });
        log::trace!("spawned {} obstacle", if tall { "tall" } else { "ground" });
    }

    if state
        .rng
        .random_ratio(COLLECTABLE_SPAWN_ODDS.0, COLLECTABLE_SPAWN_ODDS.1)
    {
        let y = item_spawn_y(state);
        state.collectables.push(Collectable {
            pos: Vec2::new(WORLD_WIDTH, y),
            anim_offset: 0.0,
            active: true,
        });
    }

    if state
        .rng
        .random_ratio(POWERUP_SPAWN_ODDS.0, POWERUP_SPAWN_ODDS.1)
    {
        let kind = if state.rng.random() {
            PowerUpKind::CoinMagnet
        } else {
            PowerUpKind::DoublePoints
        };
        let y = item_spawn_y(state);
        state.power_ups.push(PowerUp {
            pos: Vec2::new(WORLD_WIDTH, y),
            kind,
            anim_offset: 0.0,
            active: true,
        });
        log::debug!("spawned power-up {kind:?}");
    }
}

/// Ground level plus a uniform integer offset within the spawn band
fn item_spawn_y(state: &mut GameState) -> f32 {
    GROUND_Y + state.rng.random_range(0..SPAWN_BAND) as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    #[test]
    fn test_spawns_are_seed_deterministic() {
        let mut a = GameState::new(4242);
        let mut b = GameState::new(4242);
        for _ in 0..2000 {
            spawn_entities(&mut a);
            spawn_entities(&mut b);
        }
        assert_eq!(a.obstacles, b.obstacles);
        assert_eq!(a.collectables, b.collectables);
        assert_eq!(a.power_ups, b.power_ups);
    }

    #[test]
    fn test_spawned_entities_sit_at_right_edge_within_band() {
        let mut state = GameState::new(7);
        for _ in 0..20_000 {
            spawn_entities(&mut state);
        }
        assert!(!state.collectables.is_empty());
        assert!(!state.obstacles.is_empty());

        for c in &state.collectables {
            assert_eq!(c.pos.x, WORLD_WIDTH);
            assert!(c.pos.y >= GROUND_Y && c.pos.y < GROUND_Y + SPAWN_BAND as f32);
        }
        for o in &state.obstacles {
            assert_eq!(o.pos.x, WORLD_WIDTH);
            let expected = if o.tall {
                GROUND_Y + OBSTACLE_HEIGHT
            } else {
                GROUND_Y
            };
            assert_eq!(o.pos.y, expected);
        }
    }
}
