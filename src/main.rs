//! Side Runner headless demo
//!
//! Drives a wall-clock-seeded session at the fixed tick rate with a crude
//! autopilot, then dumps the final snapshot as JSON. Rendering and real
//! input are external collaborators; this binary stands in for them.

use std::time::{SystemTime, UNIX_EPOCH};

use side_runner::consts::GAME_DURATION;
use side_runner::{GamePhase, GameSession};

fn main() {
    env_logger::init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    let mut session = GameSession::new(seed);
    log::info!("Side Runner (headless) starting, seed {seed}");

    for tick_no in 0..GAME_DURATION as u64 {
        // Autopilot: hop periodically, duck for a stretch in between
        if tick_no % 120 == 0 {
            session.on_jump_pressed();
        }
        session.on_duck_changed(tick_no % 240 >= 180);

        session.tick();
        if matches!(session.state().phase, GamePhase::Ended(_)) {
            break;
        }
    }

    let snapshot = session.snapshot();
    match serde_json::to_string_pretty(&snapshot) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("snapshot serialization failed: {e}"),
    }
    if let Some(message) = snapshot.end_message() {
        log::info!("{message} - final score {}", snapshot.score);
    }
}
