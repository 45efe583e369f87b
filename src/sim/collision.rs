//! Axis-aligned collision tests between the player and each pool
//!
//! Obstacle checks grant a standing player an extra height margin; item
//! checks use the bare hitbox. Collision geometry always uses the unoffset
//! entity y; the cosmetic bob never participates.

use glam::Vec2;

use super::player::Player;
use super::state::{Collectable, GameState, Obstacle, PowerUp};
use crate::consts::*;

/// Axis-aligned bounding box (min/max corners)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Strict overlap; boxes that merely touch do not collide
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

/// Player box used against obstacles. A standing player is treated as
/// `OBSTACLE_HIT_MARGIN` taller here than for item checks; a ducking player
/// gets the bare duck height.
pub fn player_obstacle_box(player: &Player) -> Aabb {
    let height = if player.ducking {
        PLAYER_DUCK_HEIGHT
    } else {
        PLAYER_HEIGHT + OBSTACLE_HIT_MARGIN
    };
    Aabb::new(
        Vec2::new(player.x, player.y),
        Vec2::new(player.x + PLAYER_WIDTH, player.y + height),
    )
}

/// Player box used against collectables and power-ups (no margin)
pub fn player_item_box(player: &Player) -> Aabb {
    Aabb::new(
        Vec2::new(player.x, player.y),
        Vec2::new(player.x + PLAYER_WIDTH, player.y + player.hitbox_height()),
    )
}

/// An obstacle's box: centered horizontally on its position, taller for
/// tall obstacles
pub fn obstacle_box(obstacle: &Obstacle) -> Aabb {
    Aabb::new(
        Vec2::new(obstacle.pos.x - OBSTACLE_WIDTH / 2.0, obstacle.pos.y),
        Vec2::new(
            obstacle.pos.x + OBSTACLE_WIDTH / 2.0,
            obstacle.pos.y + obstacle.height(),
        ),
    )
}

pub fn collectable_box(collectable: &Collectable) -> Aabb {
    Aabb::new(
        Vec2::new(collectable.pos.x - COLLECTABLE_SIZE / 2.0, collectable.pos.y),
        Vec2::new(
            collectable.pos.x + COLLECTABLE_SIZE / 2.0,
            collectable.pos.y + COLLECTABLE_SIZE,
        ),
    )
}

pub fn power_up_box(power_up: &PowerUp) -> Aabb {
    Aabb::new(
        Vec2::new(power_up.pos.x - POWERUP_SIZE / 2.0, power_up.pos.y),
        Vec2::new(
            power_up.pos.x + POWERUP_SIZE / 2.0,
            power_up.pos.y + POWERUP_SIZE,
        ),
    )
}

/// Resolve obstacle hits. First overlap in iteration order only: damage,
/// deactivate, knock the player back behind the obstacle, stop scanning.
pub fn resolve_obstacles(state: &mut GameState) {
    let player_box = player_obstacle_box(&state.player);
    for obstacle in &mut state.obstacles {
        if !obstacle.active {
            continue;
        }
        if player_box.overlaps(&obstacle_box(obstacle)) {
            state.health = state.health.saturating_sub(1);
            obstacle.active = false;
            state.player.x = obstacle.pos.x - PLAYER_WIDTH - KNOCKBACK_GAP;
            log::debug!("obstacle hit, health now {}", state.health);
            break;
        }
    }
}

/// Resolve collectable pickups; several can land in one tick
pub fn resolve_collectables(state: &mut GameState) {
    let player_box = player_item_box(&state.player);
    let gain = if state.effects.double_points_active() {
        2
    } else {
        1
    };
    for collectable in &mut state.collectables {
        if collectable.active && player_box.overlaps(&collectable_box(collectable)) {
            state.score += gain;
            collectable.active = false;
        }
    }
}

/// Resolve power-up pickups; activation resets the matching timer and never
/// touches the other effect
pub fn resolve_power_ups(state: &mut GameState) {
    let player_box = player_item_box(&state.player);
    for power_up in &mut state.power_ups {
        if power_up.active && player_box.overlaps(&power_up_box(power_up)) {
            state.effects.activate(power_up.kind);
            power_up.active = false;
            log::debug!("power-up collected: {:?}", power_up.kind);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::PowerUpKind;

    fn ground_obstacle(x: f32) -> Obstacle {
        Obstacle {
            pos: Vec2::new(x, GROUND_Y),
            tall: false,
            active: true,
        }
    }

    fn tall_obstacle(x: f32) -> Obstacle {
        Obstacle {
            pos: Vec2::new(x, GROUND_Y + OBSTACLE_HEIGHT),
            tall: true,
            active: true,
        }
    }

    #[test]
    fn test_ground_obstacle_hits_grounded_player() {
        let player = Player::default();
        let obstacle = ground_obstacle(player.x + 20.0);
        assert!(player_obstacle_box(&player).overlaps(&obstacle_box(&obstacle)));
    }

    #[test]
    fn test_touching_boxes_do_not_collide() {
        let player = Player::default();
        // Obstacle left edge exactly at the player's right edge
        let obstacle = ground_obstacle(player.x + PLAYER_WIDTH + OBSTACLE_WIDTH / 2.0);
        assert!(!player_obstacle_box(&player).overlaps(&obstacle_box(&obstacle)));
    }

    #[test]
    fn test_tall_obstacle_clips_standing_player_via_margin() {
        // A tall obstacle floats at ground + 55. A standing player's bare
        // hitbox tops out at exactly 100 < 105; only the obstacle-check
        // margin makes the boxes meet.
        let player = Player::default();
        let obstacle = tall_obstacle(player.x + 20.0);

        assert!(player_obstacle_box(&player).overlaps(&obstacle_box(&obstacle)));
        assert!(player_item_box(&player).max.y <= obstacle_box(&obstacle).min.y);
    }

    #[test]
    fn test_ducking_clears_tall_obstacle() {
        let mut player = Player::default();
        player.set_ducking(true);
        let obstacle = tall_obstacle(player.x + 20.0);
        assert!(!player_obstacle_box(&player).overlaps(&obstacle_box(&obstacle)));
    }

    #[test]
    fn test_first_obstacle_hit_wins() {
        let mut state = GameState::new(1);
        state.obstacles.push(ground_obstacle(state.player.x + 15.0));
        state.obstacles.push(ground_obstacle(state.player.x + 25.0));

        resolve_obstacles(&mut state);

        assert_eq!(state.health, MAX_HEALTH - 1);
        assert!(!state.obstacles[0].active);
        assert!(state.obstacles[1].active);
    }

    #[test]
    fn test_obstacle_hit_knocks_player_back() {
        let mut state = GameState::new(1);
        let obstacle_x = state.player.x + 20.0;
        state.obstacles.push(ground_obstacle(obstacle_x));

        resolve_obstacles(&mut state);

        assert_eq!(state.player.x, obstacle_x - PLAYER_WIDTH - KNOCKBACK_GAP);
    }

    #[test]
    fn test_multiple_collectables_in_one_tick() {
        let mut state = GameState::new(1);
        let pos = Vec2::new(state.player.x + 15.0, GROUND_Y + 10.0);
        for _ in 0..3 {
            state.collectables.push(Collectable {
                pos,
                anim_offset: 0.0,
                active: true,
            });
        }

        resolve_collectables(&mut state);

        assert_eq!(state.score, 3);
        assert!(state.collectables.iter().all(|c| !c.active));
    }

    #[test]
    fn test_double_points_doubles_collectable_score() {
        let mut state = GameState::new(1);
        state.effects.double_points_ticks = 10;
        state.collectables.push(Collectable {
            pos: Vec2::new(state.player.x + 15.0, GROUND_Y + 10.0),
            anim_offset: 0.0,
            active: true,
        });

        resolve_collectables(&mut state);

        assert_eq!(state.score, 2);
    }

    #[test]
    fn test_power_up_pickup_starts_effect_and_leaves_other_alone() {
        let mut state = GameState::new(1);
        state.effects.double_points_ticks = 42;
        state.power_ups.push(PowerUp {
            pos: Vec2::new(state.player.x + 15.0, GROUND_Y + 10.0),
            kind: PowerUpKind::CoinMagnet,
            anim_offset: 0.0,
            active: true,
        });

        resolve_power_ups(&mut state);

        assert_eq!(state.effects.magnet_ticks, POWERUP_DURATION);
        assert_eq!(state.effects.double_points_ticks, 42);
        assert!(!state.power_ups[0].active);
    }
}
