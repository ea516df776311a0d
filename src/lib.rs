//! Block Breaker - a single-screen ball-and-paddle arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (geometry, collisions, game state, frame driver)
//! - `renderer`: Renderer capability and a recording draw-list backend
//! - `platform`: Input-position provider abstraction
//! - `settings`: Data-driven configuration

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use platform::{InputProvider, PointerInput};
pub use renderer::{DrawCommand, DrawList, Renderer};
pub use settings::Settings;
pub use sim::{Flow, GameEvent, GamePhase, Session, Snapshot, StepOutcome};

/// Game configuration constants
pub mod consts {
    /// Largest arena the viewport is fitted to
    pub const ARENA_MAX_WIDTH: u32 = 600;
    pub const ARENA_MAX_HEIGHT: u32 = 800;
    /// Margin subtracted from viewports smaller than the maximum arena
    pub const VIEWPORT_MARGIN: u32 = 20;
    /// Viewport assumed when none is configured (a desktop window)
    pub const DEFAULT_VIEWPORT_WIDTH: u32 = 1280;
    pub const DEFAULT_VIEWPORT_HEIGHT: u32 = 1024;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_START_DX: f32 = 4.0;
    pub const BALL_START_DY: f32 = -4.0;
    /// Carried as configuration, not applied as a velocity multiplier
    pub const BALL_SPEED: f32 = 6.0;
    /// Horizontal speed range drawn after a miss: [min, max)
    pub const RESPAWN_DX_MIN: f32 = 2.0;
    pub const RESPAWN_DX_MAX: f32 = 6.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 150.0;
    pub const PADDLE_HEIGHT: f32 = 20.0;
    /// Distance from arena floor to paddle top edge
    pub const PADDLE_FLOOR_OFFSET: f32 = 50.0;
    pub const PADDLE_SPEED: f32 = 20.0;

    /// Block grid defaults
    pub const BLOCK_ROWS: usize = 5;
    pub const BLOCK_COLUMNS: usize = 8;
    pub const BLOCK_HEIGHT: f32 = 20.0;
    pub const BLOCK_PADDING: f32 = 10.0;
    pub const BLOCK_OFFSET_TOP: f32 = 50.0;
    pub const BLOCK_OFFSET_LEFT: f32 = 35.0;

    /// Misses allowed before the game is lost
    pub const MAX_MISSES: u32 = 5;

    /// Default RNG seed
    pub const DEFAULT_SEED: u64 = 0x5EED_B10C;
}
