//! Collision detection for ball, walls, paddle and blocks
//!
//! All checks are axis-aligned and pure: they inspect state and report what
//! was hit. Applying the outcome (flipping velocity, destroying blocks,
//! counting misses) is left to the frame driver and the rules.

use glam::Vec2;

use super::arena::Arena;
use super::state::{Ball, BlockGrid, Paddle};

/// Grid index of a block the ball is inside
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockHit {
    pub column: usize,
    pub row: usize,
}

/// Which arena boundaries the ball crossed. Each flag is independent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WallContact {
    /// Left or right wall: horizontal velocity flips
    pub side: bool,
    /// Top wall: vertical velocity flips
    pub ceiling: bool,
    /// Floor: the ball was missed
    pub floor: bool,
}

impl WallContact {
    pub fn any(&self) -> bool {
        self.side || self.ceiling || self.floor
    }
}

/// First active block whose rectangle strictly contains the ball center.
///
/// Blocks are scanned column-major; only the first match is reported, so at
/// most one block can be destroyed per frame.
pub fn ball_block_collision(ball_pos: Vec2, grid: &BlockGrid) -> Option<BlockHit> {
    grid.active()
        .find(|block| block.contains_strict(ball_pos))
        .map(|block| BlockHit {
            column: block.column,
            row: block.row,
        })
}

/// Check the ball's extent against each arena boundary
pub fn ball_wall_collision(ball: &Ball, arena: &Arena) -> WallContact {
    let (x, y, r) = (ball.pos.x, ball.pos.y, ball.radius);
    WallContact {
        side: x + r > arena.width_f() || x - r < 0.0,
        ceiling: y - r < 0.0,
        floor: y + r > arena.height_f(),
    }
}

/// Paddle deflection test.
///
/// Only a lower bound on y and the open horizontal span are checked, so a ball
/// anywhere below the paddle's top edge within its span is deflected.
pub fn ball_paddle_collision(ball: &Ball, paddle: &Paddle) -> bool {
    ball.pos.y + ball.radius > paddle.pos.y
        && ball.pos.x > paddle.pos.x
        && ball.pos.x < paddle.pos.x + paddle.width
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::arena::GridLayout;

    fn ball_at(x: f32, y: f32) -> Ball {
        Ball::new(Vec2::new(x, y), Vec2::new(4.0, -4.0), 10.0, 6.0)
    }

    fn paddle_at(x: f32, y: f32) -> Paddle {
        Paddle {
            pos: Vec2::new(x, y),
            width: 150.0,
            height: 20.0,
            speed: 20.0,
        }
    }

    fn small_grid() -> BlockGrid {
        // Two columns, two rows of 60x20 cells starting at (35, 50)
        BlockGrid::new(&GridLayout {
            columns: 2,
            rows: 2,
            cell_width: 60.0,
            cell_height: 20.0,
            padding: 10.0,
            offset_x: 35.0,
            offset_y: 50.0,
        })
    }

    #[test]
    fn test_block_hit_inside() {
        let grid = small_grid();
        let hit = ball_block_collision(Vec2::new(40.0, 55.0), &grid);
        assert_eq!(hit, Some(BlockHit { column: 0, row: 0 }));

        let hit = ball_block_collision(Vec2::new(110.0, 85.0), &grid);
        assert_eq!(hit, Some(BlockHit { column: 1, row: 1 }));
    }

    #[test]
    fn test_block_edges_are_outside() {
        let grid = small_grid();
        assert_eq!(ball_block_collision(Vec2::new(35.0, 55.0), &grid), None);
        assert_eq!(ball_block_collision(Vec2::new(95.0, 55.0), &grid), None);
        assert_eq!(ball_block_collision(Vec2::new(40.0, 50.0), &grid), None);
        assert_eq!(ball_block_collision(Vec2::new(40.0, 70.0), &grid), None);
        // Padding gap between cells
        assert_eq!(ball_block_collision(Vec2::new(100.0, 55.0), &grid), None);
    }

    #[test]
    fn test_destroyed_blocks_ignored() {
        let mut grid = small_grid();
        grid.destroy(0, 0);
        assert_eq!(ball_block_collision(Vec2::new(40.0, 55.0), &grid), None);
    }

    #[test]
    fn test_first_match_in_column_major_order() {
        // Overlapping cells (negative padding) so one point lies in several blocks
        let grid = BlockGrid::new(&GridLayout {
            columns: 2,
            rows: 2,
            cell_width: 60.0,
            cell_height: 20.0,
            padding: -10.0,
            offset_x: 0.0,
            offset_y: 0.0,
        });
        // Columns step by 50, rows by 10: (55, 15) lies in every cell
        let point = Vec2::new(55.0, 15.0);
        for block in grid.iter() {
            assert!(block.contains_strict(point));
        }
        let hit = ball_block_collision(point, &grid);
        assert_eq!(hit, Some(BlockHit { column: 0, row: 0 }));

        // Next in column-major order is (0, 1); row-major would give (1, 0)
        let mut grid = grid;
        grid.destroy(0, 0);
        let hit = ball_block_collision(point, &grid);
        assert_eq!(hit, Some(BlockHit { column: 0, row: 1 }));

        grid.destroy(0, 1);
        let hit = ball_block_collision(point, &grid);
        assert_eq!(hit, Some(BlockHit { column: 1, row: 0 }));
    }

    #[test]
    fn test_wall_contacts() {
        let arena = Arena::new(600, 800);

        assert!(!ball_wall_collision(&ball_at(100.0, 100.0), &arena).any());

        let contact = ball_wall_collision(&ball_at(595.0, 100.0), &arena);
        assert!(contact.side && !contact.ceiling && !contact.floor);

        let contact = ball_wall_collision(&ball_at(5.0, 100.0), &arena);
        assert!(contact.side);

        let contact = ball_wall_collision(&ball_at(100.0, 5.0), &arena);
        assert!(contact.ceiling && !contact.side);

        let contact = ball_wall_collision(&ball_at(100.0, 795.0), &arena);
        assert!(contact.floor && !contact.ceiling);

        // Corner: independent flags both set
        let contact = ball_wall_collision(&ball_at(5.0, 5.0), &arena);
        assert!(contact.side && contact.ceiling);
    }

    #[test]
    fn test_wall_touching_is_not_contact() {
        let arena = Arena::new(600, 800);
        assert!(!ball_wall_collision(&ball_at(590.0, 10.0), &arena).any());
        assert!(!ball_wall_collision(&ball_at(10.0, 790.0), &arena).any());
    }

    #[test]
    fn test_paddle_hit() {
        let paddle = paddle_at(225.0, 750.0);
        assert!(ball_paddle_collision(&ball_at(300.0, 745.0), &paddle));
        assert!(!ball_paddle_collision(&ball_at(300.0, 740.0), &paddle));
        assert!(!ball_paddle_collision(&ball_at(225.0, 745.0), &paddle));
        assert!(!ball_paddle_collision(&ball_at(375.0, 745.0), &paddle));
    }

    #[test]
    fn test_paddle_has_no_lower_bound() {
        // Far below the paddle, still within its span
        let paddle = paddle_at(225.0, 750.0);
        assert!(ball_paddle_collision(&ball_at(300.0, 790.0), &paddle));
    }
}
