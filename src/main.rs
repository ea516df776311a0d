//! Block Breaker entry point
//!
//! Headless native host: runs a session with a pointer that follows the ball
//! and a recording renderer, then prints the final state as JSON.
//!
//! Usage: `block-breaker [settings.json]`

use block_breaker::{DrawList, Flow, PointerInput, Session, Settings};

/// Hard stop for a game that never ends (ball trapped bouncing between walls)
const MAX_FRAMES: u64 = 200_000;

fn main() {
    env_logger::init();
    log::info!("Block Breaker (native) starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load(path),
        None => Settings::default(),
    };

    let mut session = Session::new(&settings);
    let mut renderer = DrawList::new();
    let mut input = PointerInput::new(session.arena, session.paddle.width);

    let mut frames = 0;
    let outcome = loop {
        // Keep the paddle under the ball, slightly off-center so the ball drifts
        input.set_pointer(session.ball.pos.x + session.paddle.width / 8.0);

        let outcome = session.step(&mut renderer, &mut input);
        frames += 1;
        if outcome.flow == Flow::Stop || frames >= MAX_FRAMES {
            break outcome;
        }
    };

    log::info!(
        "Finished after {} frames: {:?}, {} blocks left, {} misses",
        frames,
        outcome.phase,
        outcome.snapshot.active_blocks,
        outcome.snapshot.miss_count
    );
    if outcome.flow == Flow::Continue {
        log::warn!("Frame limit reached before the game ended");
    }

    match serde_json::to_string_pretty(&outcome.snapshot) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Failed to serialize snapshot: {}", e),
    }
}
