use std::fmt::{self, Display, Formatter};
use std::ops::Add;

pub(crate) const OBSTACLE: char = '#';
pub(crate) const DIRTY: char = '*';
pub(crate) const ROBOT: char = '@';
pub(crate) const ROBOT_ON_DIRTY: char = '+';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MapCell {
    Empty,
    Obstacle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub x: i32,
    pub y: i32,
}

impl Pos {
    pub fn new(x: usize, y: usize) -> Pos {
        Pos {
            x: x as i32,
            y: y as i32,
        }
    }
}

impl Display for Pos {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dir {
    North,
    South,
    East,
    West,
}

/// Order in which neighbors are enumerated.
pub(crate) const DIRECTIONS: [Dir; 4] = [Dir::North, Dir::South, Dir::East, Dir::West];

impl Add<Dir> for Pos {
    type Output = Pos;

    fn add(self, dir: Dir) -> Pos {
        match dir {
            Dir::North => Pos { x: self.x, y: self.y - 1 },
            Dir::South => Pos { x: self.x, y: self.y + 1 },
            Dir::East => Pos { x: self.x + 1, y: self.y },
            Dir::West => Pos { x: self.x - 1, y: self.y },
        }
    }
}

impl Display for Dir {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Dir::North => write!(f, "N"),
            Dir::South => write!(f, "S"),
            Dir::East => write!(f, "E"),
            Dir::West => write!(f, "W"),
        }
    }
}
