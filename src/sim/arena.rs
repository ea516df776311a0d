//! Arena bounds and block grid layout
//!
//! Everything here is fixed for the lifetime of a session. Block positions are
//! derived from a (column, row) index so the grid never stores free-floating
//! coordinates.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Rectangular simulation bounds, origin at the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Arena {
    pub width: u32,
    pub height: u32,
}

impl Arena {
    pub fn new(width: u32, height: u32) -> Self {
        debug_assert!(width > 0 && height > 0, "arena must have positive extent");
        Self { width, height }
    }

    /// Fit the arena into a viewport: the full 600x800 field when the viewport
    /// is larger, otherwise the viewport minus a margin.
    pub fn fit_viewport(viewport_width: u32, viewport_height: u32) -> Self {
        let fit = |available: u32, max: u32| {
            if available > max {
                max
            } else {
                available.saturating_sub(VIEWPORT_MARGIN).max(1)
            }
        };
        Self::new(
            fit(viewport_width, ARENA_MAX_WIDTH),
            fit(viewport_height, ARENA_MAX_HEIGHT),
        )
    }

    #[inline]
    pub fn width_f(&self) -> f32 {
        self.width as f32
    }

    #[inline]
    pub fn height_f(&self) -> f32 {
        self.height as f32
    }

    /// Arena center point
    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width_f() / 2.0, self.height_f() / 2.0)
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self::new(ARENA_MAX_WIDTH, ARENA_MAX_HEIGHT)
    }
}

/// Fixed shape and spacing of the block grid
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridLayout {
    pub columns: usize,
    pub rows: usize,
    pub cell_width: f32,
    pub cell_height: f32,
    pub padding: f32,
    pub offset_x: f32,
    pub offset_y: f32,
}

impl GridLayout {
    /// Layout with cell width stretched so the grid spans the arena between
    /// two `offset_x` margins.
    pub fn fitted(
        arena: &Arena,
        columns: usize,
        rows: usize,
        cell_height: f32,
        padding: f32,
        offset_x: f32,
        offset_y: f32,
    ) -> Self {
        let cell_width = (arena.width_f() - 2.0 * offset_x) / columns.max(1) as f32;
        Self {
            columns,
            rows,
            cell_width,
            cell_height,
            padding,
            offset_x,
            offset_y,
        }
    }

    /// Default layout for an arena
    pub fn for_arena(arena: &Arena) -> Self {
        Self::fitted(
            arena,
            BLOCK_COLUMNS,
            BLOCK_ROWS,
            BLOCK_HEIGHT,
            BLOCK_PADDING,
            BLOCK_OFFSET_LEFT,
            BLOCK_OFFSET_TOP,
        )
    }

    /// Total number of cells in the grid
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.columns * self.rows
    }

    /// Top-left corner of the block at (column, row)
    #[inline]
    pub fn block_origin(&self, column: usize, row: usize) -> Vec2 {
        block_origin(
            column,
            row,
            self.columns,
            self.rows,
            self.cell_width,
            self.cell_height,
            self.padding,
            self.offset_x,
            self.offset_y,
        )
    }
}

/// Map a grid index to the top-left corner of its block.
///
/// The column and row counts only bound the index; spacing is
/// `cell + padding` along each axis, shifted by the offsets.
#[allow(clippy::too_many_arguments)]
pub fn block_origin(
    column: usize,
    row: usize,
    column_count: usize,
    row_count: usize,
    cell_width: f32,
    cell_height: f32,
    padding: f32,
    offset_x: f32,
    offset_y: f32,
) -> Vec2 {
    debug_assert!(column < column_count, "column {column} out of range");
    debug_assert!(row < row_count, "row {row} out of range");
    Vec2::new(
        column as f32 * (cell_width + padding) + offset_x,
        row as f32 * (cell_height + padding) + offset_y,
    )
}
