//! Pointer input
//!
//! Values are last-write-wins: nothing is queued, and only the latest
//! position matters when the next frame reads it.

use crate::sim::Arena;

/// Source of paddle positions, polled once per frame
pub trait InputProvider {
    /// Latest desired paddle left edge, or `None` if nothing changed
    fn latest_paddle_x(&mut self) -> Option<f32>;
}

/// No input at all
impl InputProvider for () {
    fn latest_paddle_x(&mut self) -> Option<f32> {
        None
    }
}

/// Map a pointer x (relative to the arena's left edge) to a paddle left edge
/// that centers the paddle under the pointer. Pointers outside the arena are
/// ignored.
pub fn pointer_to_paddle_x(pointer_x: f32, arena: &Arena, paddle_width: f32) -> Option<f32> {
    if pointer_x > 0.0 && pointer_x < arena.width_f() {
        Some(pointer_x - paddle_width / 2.0)
    } else {
        None
    }
}

/// Mouse/touch style input holding the most recent accepted pointer position
#[derive(Debug, Clone)]
pub struct PointerInput {
    arena: Arena,
    paddle_width: f32,
    latest: Option<f32>,
}

impl PointerInput {
    pub fn new(arena: Arena, paddle_width: f32) -> Self {
        Self {
            arena,
            paddle_width,
            latest: None,
        }
    }

    /// Record a pointer move. Out-of-arena moves leave the last value in place.
    pub fn set_pointer(&mut self, pointer_x: f32) {
        if let Some(x) = pointer_to_paddle_x(pointer_x, &self.arena, self.paddle_width) {
            self.latest = Some(x);
        }
    }
}

impl InputProvider for PointerInput {
    fn latest_paddle_x(&mut self) -> Option<f32> {
        self.latest.take()
    }
}
