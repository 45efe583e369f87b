//! Session facade: input latching, tick driving, and render snapshots
//!
//! The host loop (window, timer, test harness) talks to the simulation only
//! through `GameSession`. Inputs are latched here and sampled at the next
//! tick boundary; nothing interrupts a tick in progress.

use serde::Serialize;

use crate::sim::{
    self, Collectable, GamePhase, GameState, Obstacle, Player, PowerUp, TickInput,
};

/// One game session. Exclusively owns all simulation state.
#[derive(Debug, Clone)]
pub struct GameSession {
    state: GameState,
    pending: TickInput,
}

impl GameSession {
    pub fn new(seed: u64) -> Self {
        log::info!("new session, seed {seed}");
        Self {
            state: GameState::new(seed),
            pending: TickInput::default(),
        }
    }

    /// Edge-triggered jump input, consumed by the next tick
    pub fn on_jump_pressed(&mut self) {
        self.pending.jump_pressed = true;
    }

    /// Level-triggered duck input; persists until released
    pub fn on_duck_changed(&mut self, held: bool) {
        self.pending.duck_held = held;
    }

    /// Ask the next tick to restart the session
    pub fn request_restart(&mut self) {
        self.pending.restart = true;
    }

    /// Immediate reset to the initial state. The RNG stream continues - a
    /// restarted session rolls fresh spawns.
    pub fn restart(&mut self) {
        let duck = self.pending.duck_held;
        self.state.reset();
        self.pending = TickInput {
            duck_held: duck,
            ..Default::default()
        };
    }

    /// Advance one fixed step, then clear the edge-triggered flags. The duck
    /// level survives until the host reports a release.
    pub fn tick(&mut self) {
        let input = self.pending;
        sim::tick(&mut self.state, &input);
        self.pending.jump_pressed = false;
        self.pending.restart = false;
    }

    /// Read-only view for the rendering collaborator
    pub fn snapshot(&self) -> Snapshot {
        let state = &self.state;
        Snapshot {
            phase: state.phase,
            player: state.player,
            obstacles: active(&state.obstacles),
            collectables: active(&state.collectables),
            power_ups: active(&state.power_ups),
            score: state.score,
            health: state.health,
            time_remaining: state.time_remaining,
            speed: state.speed,
            magnet_ticks: state.effects.magnet_ticks,
            double_points_ticks: state.effects.double_points_ticks,
        }
    }

    /// Direct state access for tests and tooling
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }
}

fn active<T: ActiveEntity>(pool: &[T]) -> Vec<T> {
    pool.iter().filter(|e| e.is_active()).copied().collect()
}

trait ActiveEntity: Copy {
    fn is_active(&self) -> bool;
}

impl ActiveEntity for Obstacle {
    fn is_active(&self) -> bool {
        self.active
    }
}

impl ActiveEntity for Collectable {
    fn is_active(&self) -> bool {
        self.active
    }
}

impl ActiveEntity for PowerUp {
    fn is_active(&self) -> bool {
        self.active
    }
}

/// Owned read-only view of the state after a tick
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub player: Player,
    pub obstacles: Vec<Obstacle>,
    pub collectables: Vec<Collectable>,
    pub power_ups: Vec<PowerUp>,
    pub score: u32,
    pub health: u8,
    pub time_remaining: u32,
    pub speed: f32,
    pub magnet_ticks: u32,
    pub double_points_ticks: u32,
}

impl Snapshot {
    /// End-of-session display message, if the session is over
    pub fn end_message(&self) -> Option<&'static str> {
        match self.phase {
            GamePhase::Ended(reason) => Some(reason.message()),
            GamePhase::Running => None,
        }
    }
}
