use std::fmt::{self, Display, Formatter};
use std::ops::{Index, IndexMut};

use crate::data::{MapCell, Pos};

#[derive(Clone, PartialEq, Eq)]
pub(crate) struct Vec2d<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T> Vec2d<T> {
    pub(crate) fn rows(&self) -> usize {
        self.rows
    }

    pub(crate) fn cols(&self) -> usize {
        self.cols
    }

    pub(crate) fn contains(&self, pos: Pos) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.cols && (pos.y as usize) < self.rows
    }

    pub(crate) fn scratchpad<U: Copy>(&self, default: U) -> Vec2d<U> {
        Vec2d {
            data: vec![default; self.data.len()],
            rows: self.rows,
            cols: self.cols,
        }
    }

    fn index_of(&self, pos: Pos) -> usize {
        debug_assert!(self.contains(pos), "{} out of bounds", pos);
        pos.y as usize * self.cols + pos.x as usize
    }
}

impl Vec2d<MapCell> {
    /// Rows shorter than `cols` are padded with empty cells.
    pub(crate) fn new(grid: &[Vec<MapCell>], cols: usize) -> Self {
        let mut data = Vec::with_capacity(grid.len() * cols);
        for row in grid {
            data.extend(row.iter().cloned().take(cols));
            for _ in row.len()..cols {
                data.push(MapCell::Empty);
            }
        }
        Vec2d {
            data,
            rows: grid.len(),
            cols,
        }
    }
}

impl Display for Vec2d<bool> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in self.data.chunks(self.cols.max(1)) {
            for &cell in row {
                write!(f, "{}", if cell { 1 } else { 0 })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Display for Vec2d<MapCell> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in self.data.chunks(self.cols.max(1)) {
            for &cell in row {
                match cell {
                    MapCell::Empty => write!(f, " ")?,
                    MapCell::Obstacle => write!(f, "#")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<T> Index<Pos> for Vec2d<T> {
    type Output = T;

    fn index(&self, index: Pos) -> &Self::Output {
        &self.data[self.index_of(index)]
    }
}

impl<T> IndexMut<Pos> for Vec2d<T> {
    fn index_mut(&mut self, index: Pos) -> &mut Self::Output {
        let index = self.index_of(index);
        &mut self.data[index]
    }
}
