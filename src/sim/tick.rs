//! Frame driver
//!
//! One call to [`tick`] is one frame: read input, draw, resolve collisions,
//! move the ball. The caller owns scheduling and decides from the returned
//! [`Flow`] whether to call again.

use serde::{Deserialize, Serialize};

use super::collision::{ball_block_collision, ball_paddle_collision, ball_wall_collision};
use super::state::{GameEvent, GamePhase, Session, Snapshot};
use crate::platform::InputProvider;
use crate::renderer::Renderer;

/// Whether the host should schedule another frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Flow {
    Continue,
    Stop,
}

/// Result of one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepOutcome {
    pub phase: GamePhase,
    pub flow: Flow,
    /// Events in the order they occurred this frame
    pub events: Vec<GameEvent>,
    pub snapshot: Snapshot,
}

/// Advance the session by one frame
pub fn tick<R, I>(session: &mut Session, renderer: &mut R, input: &mut I) -> StepOutcome
where
    R: Renderer + ?Sized,
    I: InputProvider + ?Sized,
{
    if let Some(x) = input.latest_paddle_x() {
        session.set_paddle_position(x);
    }

    renderer.clear(&session.arena);
    let mut events = Vec::new();

    let flow = match session.state.phase {
        GamePhase::Running => run_frame(session, renderer, &mut events),
        GamePhase::Won => {
            renderer.draw_win(&session.arena);
            Flow::Stop
        }
        GamePhase::Lost => {
            renderer.draw_game_over(&session.arena);
            Flow::Stop
        }
    };

    StepOutcome {
        phase: session.state.phase,
        flow,
        events,
        snapshot: session.snapshot(),
    }
}

fn run_frame<R>(session: &mut Session, renderer: &mut R, events: &mut Vec<GameEvent>) -> Flow
where
    R: Renderer + ?Sized,
{
    renderer.draw_ball(&session.ball);
    renderer.draw_paddle(&session.paddle);
    for block in session.grid.active() {
        renderer.draw_block(block);
    }
    renderer.draw_miss_count(session.state.miss_count);

    // Blocks first; the winning hit freezes the ball in place
    if let Some(hit) = ball_block_collision(session.ball.pos, &session.grid) {
        if session.register_block_hit(hit.column, hit.row, events) {
            renderer.draw_win(&session.arena);
            renderer.show_retry(true);
            return Flow::Stop;
        }
    }

    session.ball.advance();

    let contact = ball_wall_collision(&session.ball, &session.arena);
    if contact.side {
        session.ball.vel.x = -session.ball.vel.x;
    }
    if contact.ceiling {
        session.ball.vel.y = -session.ball.vel.y;
    }
    if contact.floor {
        session.register_miss(events);
    }

    // Evaluated against the post-respawn ball when a miss just happened
    if ball_paddle_collision(&session.ball, &session.paddle) {
        session.ball.vel.y = -session.ball.vel.y;
    }

    if session.state.phase == GamePhase::Lost {
        renderer.draw_game_over(&session.arena);
        renderer.show_retry(true);
        return Flow::Stop;
    }

    Flow::Continue
}

impl Session {
    /// Advance one frame, drawing into `renderer`
    pub fn step<R, I>(&mut self, renderer: &mut R, input: &mut I) -> StepOutcome
    where
        R: Renderer + ?Sized,
        I: InputProvider + ?Sized,
    {
        tick(self, renderer, input)
    }

    /// Retry control handler: full reset, hide the control, draw the first frame
    pub fn retry<R, I>(&mut self, renderer: &mut R, input: &mut I) -> StepOutcome
    where
        R: Renderer + ?Sized,
        I: InputProvider + ?Sized,
    {
        self.reset();
        renderer.show_retry(false);
        tick(self, renderer, input)
    }
}
