//! Brick grid state
//!
//! Owns per-brick alive status and laid-out positions. A brick transitions
//! alive -> destroyed exactly once within a level; the whole grid is rebuilt
//! (all alive) at session start and on every level-up. Positions are
//! recomputed from the layout parameters every tick before collision
//! testing; the recomputation is idempotent and cheap.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::point_in_rect;
use crate::config::BrickConfig;

/// A static destroyable rectangle in the grid
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Brick {
    /// Laid-out top-left corner in arena coordinates.
    pub pos: Vec2,
    pub alive: bool,
}

/// Read-only laid-out brick rectangle for the render boundary
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrickView {
    pub pos: Vec2,
    pub size: Vec2,
}

/// Fixed-size (column, row) -> brick mapping
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrickGrid {
    columns: u32,
    rows: u32,
    /// Column-major: index = col * rows + row, so index order matches the
    /// column-then-row collision scan order.
    bricks: Vec<Brick>,
}

impl BrickGrid {
    /// Fresh grid, all bricks alive, positions not yet laid out.
    pub fn new(columns: u32, rows: u32) -> Self {
        let mut grid = Self {
            columns,
            rows,
            bricks: Vec::new(),
        };
        grid.reset();
        grid
    }

    pub fn columns(&self) -> u32 {
        self.columns
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Rebuild the grid with every brick alive.
    pub fn reset(&mut self) {
        let total = (self.columns * self.rows) as usize;
        self.bricks.clear();
        self.bricks.resize(
            total,
            Brick {
                pos: Vec2::ZERO,
                alive: true,
            },
        );
    }

    fn index(&self, col: u32, row: u32) -> usize {
        debug_assert!(col < self.columns && row < self.rows);
        (col * self.rows + row) as usize
    }

    /// Assign every brick its arena position from the layout parameters.
    /// Must run before collision testing each tick.
    pub fn layout(&mut self, cfg: &BrickConfig) {
        for col in 0..self.columns {
            for row in 0..self.rows {
                let idx = self.index(col, row);
                self.bricks[idx].pos = Vec2::new(
                    col as f32 * (cfg.width + cfg.padding) + cfg.offset_left,
                    row as f32 * (cfg.height + cfg.padding) + cfg.offset_top,
                );
            }
        }
    }

    pub fn is_alive(&self, col: u32, row: u32) -> bool {
        self.bricks[self.index(col, row)].alive
    }

    /// Transition one brick alive -> destroyed. Returns false (and changes
    /// nothing) if it was already destroyed.
    pub fn mark_destroyed(&mut self, col: u32, row: u32) -> bool {
        let idx = self.index(col, row);
        let was_alive = self.bricks[idx].alive;
        self.bricks[idx].alive = false;
        was_alive
    }

    pub fn alive_count(&self) -> u32 {
        self.bricks.iter().filter(|b| b.alive).count() as u32
    }

    /// Level-clear signal: no alive bricks remain.
    pub fn is_cleared(&self) -> bool {
        self.bricks.iter().all(|b| !b.alive)
    }

    /// First alive brick strictly containing the point, scanning columns
    /// then rows (ties broken by lowest column, then lowest row).
    pub fn first_hit(&self, point: Vec2, cfg: &BrickConfig) -> Option<(u32, u32)> {
        let size = cfg.size();
        for col in 0..self.columns {
            for row in 0..self.rows {
                let brick = &self.bricks[self.index(col, row)];
                if brick.alive && point_in_rect(point, brick.pos, size) {
                    return Some((col, row));
                }
            }
        }
        None
    }

    /// Currently alive bricks with their laid-out rectangles.
    pub fn alive_views(&self, cfg: &BrickConfig) -> Vec<BrickView> {
        let size = cfg.size();
        self.bricks
            .iter()
            .filter(|b| b.alive)
            .map(|b| BrickView { pos: b.pos, size })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn laid_out_grid() -> (BrickGrid, BrickConfig) {
        let cfg = BrickConfig::default();
        let mut grid = BrickGrid::new(cfg.column_count, cfg.row_count);
        grid.layout(&cfg);
        (grid, cfg)
    }

    #[test]
    fn fresh_grid_is_fully_alive() {
        let (grid, cfg) = laid_out_grid();
        assert_eq!(grid.alive_count(), cfg.total());
        assert!(!grid.is_cleared());
    }

    #[test]
    fn layout_positions_match_formula() {
        let (grid, cfg) = laid_out_grid();
        let views = grid.alive_views(&cfg);
        // Column-major order: first entry is (0,0), second is (0,1).
        assert_eq!(views[0].pos, Vec2::new(30.0, 30.0));
        assert_eq!(views[1].pos, Vec2::new(30.0, 60.0));
        // (1,0) comes after a full column of rows.
        assert_eq!(views[cfg.row_count as usize].pos, Vec2::new(115.0, 30.0));
    }

    #[test]
    fn layout_is_idempotent() {
        let (mut grid, cfg) = laid_out_grid();
        let before = grid.alive_views(&cfg);
        grid.layout(&cfg);
        grid.layout(&cfg);
        assert_eq!(before, grid.alive_views(&cfg));
    }

    #[test]
    fn destroy_is_one_way_and_once() {
        let (mut grid, cfg) = laid_out_grid();
        assert!(grid.mark_destroyed(2, 1));
        assert!(!grid.is_alive(2, 1));
        assert_eq!(grid.alive_count(), cfg.total() - 1);
        // Second destruction is a silent no-op.
        assert!(!grid.mark_destroyed(2, 1));
        assert_eq!(grid.alive_count(), cfg.total() - 1);
    }

    #[test]
    fn reset_revives_everything() {
        let (mut grid, cfg) = laid_out_grid();
        grid.mark_destroyed(0, 0);
        grid.mark_destroyed(4, 2);
        grid.reset();
        assert_eq!(grid.alive_count(), cfg.total());
    }

    #[test]
    fn cleared_only_when_every_brick_is_gone() {
        let (mut grid, _) = laid_out_grid();
        for col in 0..grid.columns() {
            for row in 0..grid.rows() {
                assert!(!grid.is_cleared());
                grid.mark_destroyed(col, row);
            }
        }
        assert!(grid.is_cleared());
    }

    #[test]
    fn first_hit_prefers_lowest_column_then_row() {
        let (mut grid, cfg) = laid_out_grid();
        // Point inside brick (1, 2).
        let point = Vec2::new(130.0, 100.0);
        assert_eq!(grid.first_hit(point, &cfg), Some((1, 2)));
        grid.mark_destroyed(1, 2);
        assert_eq!(grid.first_hit(point, &cfg), None);
        // A point in the padding between bricks hits nothing.
        assert_eq!(grid.first_hit(Vec2::new(110.0, 40.0), &cfg), None);
    }
}
