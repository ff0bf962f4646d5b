use std::fmt::{self, Debug, Display, Formatter};

use crate::data::{MapCell, Pos, DIRTY, OBSTACLE, ROBOT, ROBOT_ON_DIRTY};
use crate::state::State;
use crate::world::World;

/// Renders a world with a state on top of it using the description syntax.
pub struct MapFormatter<'a> {
    world: &'a World,
    state: &'a State,
}

impl<'a> MapFormatter<'a> {
    pub(crate) fn new(world: &'a World, state: &'a State) -> Self {
        Self { world, state }
    }

    fn cell_char(&self, x: usize, y: usize) -> char {
        let pos = Pos::new(x, y);
        let robot = self.state.robot_pos() == pos;
        let dirty = self.state.is_dirty(pos);
        match (self.world.grid[pos], robot, dirty) {
            (MapCell::Obstacle, _, _) => OBSTACLE,
            (MapCell::Empty, true, true) => ROBOT_ON_DIRTY,
            (MapCell::Empty, true, false) => ROBOT,
            (MapCell::Empty, false, true) => DIRTY,
            (MapCell::Empty, false, false) => ' ',
        }
    }
}

impl<'a> Display for MapFormatter<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for y in 0..self.world.rows() {
            let row: String = (0..self.world.cols())
                .map(|x| self.cell_char(x, y))
                .collect();
            // don't print trailing empty cells to match the input rows
            writeln!(f, "{}", row.trim_end())?;
        }
        Ok(())
    }
}

impl<'a> Debug for MapFormatter<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
