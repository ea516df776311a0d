//! Rendering capability
//!
//! The simulation draws through [`Renderer`] and never depends on a concrete
//! backend. [`DrawList`] records primitives for headless hosts and tests.

pub mod draw_list;

pub use draw_list::{DrawCommand, DrawList, Rgba};

use crate::sim::{Arena, Ball, Block, Paddle};

/// Drawing surface the frame driver renders into
pub trait Renderer {
    /// Clear the whole arena
    fn clear(&mut self, arena: &Arena);

    fn draw_ball(&mut self, ball: &Ball);

    fn draw_paddle(&mut self, paddle: &Paddle);

    /// Called for active blocks only
    fn draw_block(&mut self, block: &Block);

    /// Miss counter HUD
    fn draw_miss_count(&mut self, misses: u32);

    /// Victory banner
    fn draw_win(&mut self, arena: &Arena);

    /// Defeat banner
    fn draw_game_over(&mut self, arena: &Arena);

    /// Show or hide the retry control of the UI layer
    fn show_retry(&mut self, visible: bool);
}
