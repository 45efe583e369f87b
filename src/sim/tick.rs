//! Fixed timestep simulation tick
//!
//! One call advances the whole session by a single step. The stage order is
//! load-bearing for determinism: player, pools, spawn, collisions (obstacles,
//! collectables, power-ups), effect timers, session clock, end check.

use glam::Vec2;

use super::collision;
use super::spawn;
use super::state::{EndReason, GamePhase, GameState};
use crate::consts::*;

/// Input sampled at a tick boundary. Jump and restart are edge flags the
/// driver clears after the tick; duck is the currently held level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Jump key went down since the last tick
    pub jump_pressed: bool,
    /// Duck key is currently held
    pub duck_held: bool,
    /// Restart requested; honored from any state
    pub restart: bool,
}

/// Advance the session by one fixed step
pub fn tick(state: &mut GameState, input: &TickInput) {
    if input.restart {
        state.reset();
        log::info!("session restarted");
        return;
    }
    if matches!(state.phase, GamePhase::Ended(_)) {
        return;
    }

    state.time_ticks += 1;

    // 1. Player kinematics
    state.player.set_ducking(input.duck_held);
    if input.jump_pressed {
        state.player.apply_jump();
    }
    state.player.advance();

    // 2. Scroll, cull, animate, magnet pull
    advance_pools(state);

    // 3. Spawn
    spawn::spawn_entities(state);

    // 4-6. Collisions; obstacles first, with first-hit early exit
    collision::resolve_obstacles(state);
    collision::resolve_collectables(state);
    collision::resolve_power_ups(state);

    // 7. Effect countdowns
    state.effects.advance();

    // 8. Session clock and difficulty ramp
    if state.time_remaining > 0 {
        state.time_remaining -= 1;
    }
    state.speed += SPEED_INCREMENT;

    // 9. End conditions; the time-out message wins if both trip this tick
    if state.time_remaining == 0 {
        end_session(state, EndReason::TimeExpired);
    } else if state.health == 0 {
        end_session(state, EndReason::HealthDepleted);
    }

    state.compact();
}

fn end_session(state: &mut GameState, reason: EndReason) {
    state.phase = GamePhase::Ended(reason);
    log::info!("session over ({}), final score {}", reason.message(), state.score);
}

/// Scroll every pool left by the current speed, cull entities past their
/// off-screen threshold, refresh cosmetic bobs, and pull collectables while
/// the magnet is active.
fn advance_pools(state: &mut GameState) {
    let speed = state.speed;
    // Bob phase comes from the simulation clock, never wall time
    let time_secs = state.time_ticks as f32 * SIM_DT;

    for obstacle in &mut state.obstacles {
        if !obstacle.active {
            continue;
        }
        obstacle.pos.x -= speed;
        if obstacle.pos.x < -OBSTACLE_WIDTH {
            obstacle.active = false;
        }
    }

    let magnet = state.effects.magnet_active();
    let player_pos = Vec2::new(state.player.x, state.player.y);
    for collectable in &mut state.collectables {
        if !collectable.active {
            continue;
        }
        collectable.pos.x -= speed;
        collectable.anim_offset = (time_secs * BOB_RATE).sin() * BOB_AMPLITUDE;
        if collectable.pos.x < -COLLECTABLE_SIZE {
            collectable.active = false;
            continue;
        }
        // Attraction only acts on collectables still ahead of the player
        if magnet && collectable.pos.x > player_pos.x {
            collectable.pos += magnet_pull(player_pos, collectable.pos);
        }
    }

    for power_up in &mut state.power_ups {
        if !power_up.active {
            continue;
        }
        power_up.pos.x -= speed;
        power_up.anim_offset = (time_secs * BOB_RATE).cos() * BOB_AMPLITUDE;
        if power_up.pos.x < -POWERUP_SIZE {
            power_up.active = false;
        }
    }
}

/// Per-tick magnet displacement: a fixed fraction of the remaining delta,
/// zero outside the attraction radius. An exponential approach - the entity
/// closes in over several ticks and never overshoots.
pub fn magnet_pull(player_pos: Vec2, entity_pos: Vec2) -> Vec2 {
    let delta = player_pos - entity_pos;
    if delta.length() < MAGNET_RADIUS {
        delta * MAGNET_PULL
    } else {
        Vec2::ZERO
    }
}
