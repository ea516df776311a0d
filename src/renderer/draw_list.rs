//! Recording renderer
//!
//! Turns renderer calls into a flat list of 2D primitives. A host replays the
//! list onto whatever surface it has; tests inspect it directly.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::Renderer;
use crate::sim::{Arena, Ball, Block, Paddle};

pub type Rgba = [f32; 4];

/// Colors for game elements
pub mod colors {
    use super::Rgba;

    pub const ENTITY: Rgba = [1.0, 1.0, 1.0, 1.0];
    pub const HUD: Rgba = [1.0, 1.0, 1.0, 1.0];
    pub const WIN: Rgba = [0.0, 1.0, 0.0, 1.0];
    pub const GAME_OVER: Rgba = [1.0, 0.0, 0.0, 1.0];
}

/// Font sizes in pixels
pub const HUD_FONT_SIZE: f32 = 20.0;
pub const BANNER_FONT_SIZE: f32 = 50.0;

/// HUD text anchor
pub const MISS_COUNT_POS: Vec2 = Vec2::new(20.0, 30.0);

/// A single 2D primitive
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    Clear { width: u32, height: u32 },
    Circle { center: Vec2, radius: f32, color: Rgba },
    /// `pos` is the top-left corner
    Rect { pos: Vec2, size: Vec2, color: Rgba },
    /// `pos` is the text baseline start
    Text { text: String, pos: Vec2, size: f32, color: Rgba },
    RetryVisible(bool),
}

/// Renderer that records every primitive of the current frame
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
    retry_visible: bool,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands recorded since the last clear
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Whether the retry control is currently shown
    pub fn retry_visible(&self) -> bool {
        self.retry_visible
    }

    /// Number of rectangles in the frame (blocks plus paddle)
    pub fn rect_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Rect { .. }))
            .count()
    }

    /// All text drawn this frame
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    fn text(&mut self, text: String, pos: Vec2, size: f32, color: Rgba) {
        self.commands.push(DrawCommand::Text {
            text,
            pos,
            size,
            color,
        });
    }
}

impl Renderer for DrawList {
    fn clear(&mut self, arena: &Arena) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear {
            width: arena.width,
            height: arena.height,
        });
    }

    fn draw_ball(&mut self, ball: &Ball) {
        self.commands.push(DrawCommand::Circle {
            center: ball.pos,
            radius: ball.radius,
            color: colors::ENTITY,
        });
    }

    fn draw_paddle(&mut self, paddle: &Paddle) {
        self.commands.push(DrawCommand::Rect {
            pos: paddle.pos,
            size: Vec2::new(paddle.width, paddle.height),
            color: colors::ENTITY,
        });
    }

    fn draw_block(&mut self, block: &Block) {
        self.commands.push(DrawCommand::Rect {
            pos: block.pos,
            size: block.size,
            color: colors::ENTITY,
        });
    }

    fn draw_miss_count(&mut self, misses: u32) {
        self.text(
            format!("Deaths: {}", misses),
            MISS_COUNT_POS,
            HUD_FONT_SIZE,
            colors::HUD,
        );
    }

    fn draw_win(&mut self, arena: &Arena) {
        let pos = Vec2::new(arena.width_f() / 2.0 - 130.0, arena.height_f() / 2.0);
        self.text("You Win!".to_string(), pos, BANNER_FONT_SIZE, colors::WIN);
    }

    fn draw_game_over(&mut self, arena: &Arena) {
        let pos = Vec2::new(arena.width_f() / 2.0 - 150.0, arena.height_f() / 2.0);
        self.text("Game Over".to_string(), pos, BANNER_FONT_SIZE, colors::GAME_OVER);
    }

    fn show_retry(&mut self, visible: bool) {
        self.retry_visible = visible;
        self.commands.push(DrawCommand::RetryVisible(visible));
    }
}
