//! Game state and core simulation types
//!
//! All mutable state for a game lives in [`Session`]; there are no globals.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::arena::{Arena, GridLayout};
use crate::settings::Settings;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    #[default]
    Running,
    /// Every block destroyed
    Won,
    /// Miss threshold reached
    Lost,
}

impl GamePhase {
    /// Terminal phases only leave through an explicit reset
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GamePhase::Running)
    }
}

/// Something that happened during a step, in the order it happened
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    BlockDestroyed { column: usize, row: usize },
    /// Ball crossed the floor; `count` is the miss total after this one
    Miss { count: u32 },
    Won,
    Lost,
}

/// The ball
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Nominal speed. Kept as configuration; velocity is not scaled by it.
    pub speed: f32,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32, speed: f32) -> Self {
        Self {
            pos,
            vel,
            radius,
            speed,
        }
    }

    /// Ball at the arena center with the configured launch velocity
    pub fn centered(arena: &Arena, settings: &Settings) -> Self {
        Self::new(
            arena.center(),
            Vec2::new(settings.ball_dx, settings.ball_dy),
            settings.ball_radius,
            settings.ball_speed,
        )
    }

    /// Advance by one frame of velocity
    #[inline]
    pub fn advance(&mut self) {
        self.pos += self.vel;
    }
}

/// The player's paddle. `pos` is the top-left corner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    /// Keyboard step size. Kept as configuration; pointer input moves the paddle directly.
    pub speed: f32,
}

impl Paddle {
    /// Paddle centered horizontally, `floor_offset` above the arena floor
    pub fn centered(arena: &Arena, settings: &Settings) -> Self {
        Self {
            pos: Vec2::new(
                arena.width_f() / 2.0 - settings.paddle_width / 2.0,
                arena.height_f() - settings.paddle_floor_offset,
            ),
            width: settings.paddle_width,
            height: settings.paddle_height,
            speed: settings.paddle_speed,
        }
    }

    /// Move the left edge to `x`. No clamping: the paddle may extend past the walls.
    #[inline]
    pub fn set_x(&mut self, x: f32) {
        self.pos.x = x;
    }
}

/// Block status; destruction is one-way
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BlockStatus {
    #[default]
    Active,
    Destroyed,
}

/// A block in the grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub column: usize,
    pub row: usize,
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    pub status: BlockStatus,
}

impl Block {
    #[inline]
    pub fn is_active(&self) -> bool {
        self.status == BlockStatus::Active
    }

    /// Strict containment test: points on an edge are outside
    #[inline]
    pub fn contains_strict(&self, point: Vec2) -> bool {
        point.x > self.pos.x
            && point.x < self.pos.x + self.size.x
            && point.y > self.pos.y
            && point.y < self.pos.y + self.size.y
    }
}

/// Fixed-shape grid of blocks, stored column-major
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockGrid {
    columns: usize,
    rows: usize,
    blocks: Vec<Block>,
}

impl BlockGrid {
    /// A fully active grid laid out by `layout`
    pub fn new(layout: &GridLayout) -> Self {
        let size = Vec2::new(layout.cell_width, layout.cell_height);
        let mut blocks = Vec::with_capacity(layout.cell_count());
        for column in 0..layout.columns {
            for row in 0..layout.rows {
                blocks.push(Block {
                    column,
                    row,
                    pos: layout.block_origin(column, row),
                    size,
                    status: BlockStatus::Active,
                });
            }
        }
        Self {
            columns: layout.columns,
            rows: layout.rows,
            blocks,
        }
    }

    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    fn index(&self, column: usize, row: usize) -> usize {
        assert!(
            column < self.columns && row < self.rows,
            "block ({column}, {row}) outside {}x{} grid",
            self.columns,
            self.rows
        );
        column * self.rows + row
    }

    /// Block at (column, row). Panics if the index is outside the grid.
    pub fn get(&self, column: usize, row: usize) -> &Block {
        &self.blocks[self.index(column, row)]
    }

    pub fn get_mut(&mut self, column: usize, row: usize) -> &mut Block {
        let idx = self.index(column, row);
        &mut self.blocks[idx]
    }

    /// All blocks in column-major order (column 0 row 0, column 0 row 1, ...)
    pub fn iter(&self) -> impl Iterator<Item = &Block> {
        self.blocks.iter()
    }

    pub fn active(&self) -> impl Iterator<Item = &Block> {
        self.blocks.iter().filter(|b| b.is_active())
    }

    pub fn active_count(&self) -> usize {
        self.active().count()
    }

    /// Mark a block destroyed. Returns false if it was already destroyed.
    pub fn destroy(&mut self, column: usize, row: usize) -> bool {
        let block = self.get_mut(column, row);
        let was_active = block.is_active();
        block.status = BlockStatus::Destroyed;
        was_active
    }
}

/// Counters and phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub miss_count: u32,
    pub active_blocks: usize,
    pub phase: GamePhase,
}

impl GameState {
    /// Fresh counters. A zero miss threshold is already lost; otherwise an
    /// empty grid is already won.
    pub fn new(block_count: usize, max_misses: u32) -> Self {
        let phase = if max_misses == 0 {
            GamePhase::Lost
        } else if block_count == 0 {
            GamePhase::Won
        } else {
            GamePhase::Running
        };
        Self {
            miss_count: 0,
            active_blocks: block_count,
            phase,
        }
    }
}

/// Read-only copy of everything a renderer or host needs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub arena: Arena,
    pub ball: Ball,
    pub paddle: Paddle,
    pub blocks: Vec<Block>,
    pub miss_count: u32,
    pub active_blocks: usize,
    pub phase: GamePhase,
}

/// One game session: fixed geometry plus all mutable entity state
#[derive(Debug, Clone)]
pub struct Session {
    pub arena: Arena,
    pub layout: GridLayout,
    pub ball: Ball,
    pub paddle: Paddle,
    pub(crate) grid: BlockGrid,
    pub(crate) state: GameState,
    /// Misses allowed before the game is lost
    pub max_misses: u32,
    pub(crate) settings: Settings,
    pub(crate) rng: Pcg32,
}

impl Session {
    /// Build a session from settings; the arena is fitted to the configured viewport
    pub fn new(settings: &Settings) -> Self {
        let arena = Arena::fit_viewport(settings.viewport_width, settings.viewport_height);
        let layout = settings.grid_layout(&arena);
        Self::with_geometry(arena, layout, settings)
    }

    /// Build a session with explicit geometry
    pub fn with_geometry(arena: Arena, layout: GridLayout, settings: &Settings) -> Self {
        let grid = BlockGrid::new(&layout);
        let session = Self {
            arena,
            layout,
            ball: Ball::centered(&arena, settings),
            paddle: Paddle::centered(&arena, settings),
            state: GameState::new(grid.active_count(), settings.max_misses),
            grid,
            max_misses: settings.max_misses,
            settings: settings.clone(),
            rng: Pcg32::seed_from_u64(settings.seed),
        };
        log::info!(
            "Session created: arena {}x{}, {} blocks, seed {}",
            arena.width,
            arena.height,
            session.state.active_blocks,
            settings.seed
        );
        session
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    pub fn paddle(&self) -> &Paddle {
        &self.paddle
    }

    pub fn blocks(&self) -> &BlockGrid {
        &self.grid
    }

    pub fn miss_count(&self) -> u32 {
        self.state.miss_count
    }

    pub fn active_blocks(&self) -> usize {
        self.state.active_blocks
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    /// External input: desired paddle left edge. Not validated.
    pub fn set_paddle_position(&mut self, x: f32) {
        self.paddle.set_x(x);
    }

    /// Owned copy of the drawable state
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            arena: self.arena,
            ball: self.ball.clone(),
            paddle: self.paddle.clone(),
            blocks: self.grid.iter().cloned().collect(),
            miss_count: self.state.miss_count,
            active_blocks: self.state.active_blocks,
            phase: self.state.phase,
        }
    }
}
