use std::fmt::{self, Debug, Display, Formatter};

use crate::data::{Dir, MapCell, Pos, DIRECTIONS};
use crate::vec2d::Vec2d;

/// The static part of a level - obstacles and dimensions.
#[derive(Clone, PartialEq, Eq)]
pub struct World {
    pub(crate) grid: Vec2d<MapCell>,
}

impl World {
    pub(crate) fn new(grid: Vec2d<MapCell>) -> Self {
        World { grid }
    }

    pub fn cols(&self) -> usize {
        self.grid.cols()
    }

    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    /// Off-grid positions count as blocked.
    pub fn is_free(&self, pos: Pos) -> bool {
        self.grid.contains(pos) && self.grid[pos] != MapCell::Obstacle
    }

    /// In-bounds non-obstacle neighbors in `N, S, E, W` order.
    ///
    /// `pos` must be inside the grid.
    pub fn neighbors(&self, pos: Pos) -> Vec<(Dir, Pos)> {
        DIRECTIONS
            .iter()
            .map(|&dir| (dir, pos + dir))
            .filter(|&(_, new_pos)| self.is_free(new_pos))
            .collect()
    }

    /// Flood fill over free cells.
    pub(crate) fn reachable_from(&self, start: Pos) -> Vec2d<bool> {
        let mut reachable = self.grid.scratchpad(false);
        reachable[start] = true;
        let mut to_visit = vec![start];

        while let Some(cur) = to_visit.pop() {
            for (_, new_pos) in self.neighbors(cur) {
                if !reachable[new_pos] {
                    reachable[new_pos] = true;
                    to_visit.push(new_pos);
                }
            }
        }

        reachable
    }
}

impl Display for World {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.grid)
    }
}

impl Debug for World {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
