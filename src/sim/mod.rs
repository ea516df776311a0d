//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per frame
//! - Seeded RNG only
//! - Stable iteration order (column-major over the block grid)
//! - Rendering and input only through the capability traits

pub mod arena;
pub mod collision;
pub mod rules;
pub mod state;
pub mod tick;

pub use arena::{Arena, GridLayout, block_origin};
pub use collision::{
    BlockHit, WallContact, ball_block_collision, ball_paddle_collision, ball_wall_collision,
};
pub use rules::respawn_dx;
pub use state::{
    Ball, Block, BlockGrid, BlockStatus, GameEvent, GamePhase, GameState, Paddle, Session,
    Snapshot,
};
pub use tick::{Flow, StepOutcome, tick};
