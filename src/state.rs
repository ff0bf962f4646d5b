use crate::data::Pos;

/// Robot position and the cells that still need cleaning.
#[derive(Debug, Clone, PartialEq, Eq, Ord, PartialOrd, Hash)]
pub struct State {
    pub(crate) robot_pos: Pos,
    pub(crate) dirty: Vec<Pos>,
}

impl State {
    pub(crate) fn new(robot_pos: Pos, mut dirty: Vec<Pos>) -> State {
        // sort so equal sets compare and hash equal
        dirty.sort();
        dirty.dedup();
        State { robot_pos, dirty }
    }

    pub fn robot_pos(&self) -> Pos {
        self.robot_pos
    }

    pub fn dirty(&self) -> &[Pos] {
        &self.dirty
    }

    pub fn is_dirty(&self, pos: Pos) -> bool {
        self.dirty.binary_search(&pos).is_ok()
    }

    pub fn is_clean(&self) -> bool {
        self.dirty.is_empty()
    }

    pub(crate) fn moved_to(&self, robot_pos: Pos) -> State {
        State {
            robot_pos,
            dirty: self.dirty.clone(),
        }
    }

    /// Copy without the cell under the robot. Same state if it's already clean.
    pub(crate) fn vacuumed(&self) -> State {
        let mut dirty = self.dirty.clone();
        if let Ok(index) = dirty.binary_search(&self.robot_pos) {
            dirty.remove(index);
        }
        State {
            robot_pos: self.robot_pos,
            dirty,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn equality_ignores_dirty_order() {
        let a = State::new(Pos::new(0, 0), vec![Pos::new(2, 1), Pos::new(1, 0)]);
        let b = State::new(Pos::new(0, 0), vec![Pos::new(1, 0), Pos::new(2, 1)]);
        assert_eq!(a, b);

        let mut set = HashSet::new();
        set.insert(a);
        assert!(set.contains(&b));
    }

    #[test]
    fn vacuuming() {
        let state = State::new(Pos::new(1, 0), vec![Pos::new(1, 0), Pos::new(2, 0)]);
        let clean = state.vacuumed();
        assert_eq!(clean.dirty(), &[Pos::new(2, 0)]);
        assert!(state.is_dirty(Pos::new(1, 0)));
        assert!(!clean.is_dirty(Pos::new(1, 0)));

        // nothing to do here
        assert_eq!(clean.vacuumed(), clean);
    }

    #[test]
    fn moving_keeps_dirty() {
        let state = State::new(Pos::new(0, 0), vec![Pos::new(2, 0)]);
        let moved = state.moved_to(Pos::new(1, 0));
        assert_eq!(moved.robot_pos(), Pos::new(1, 0));
        assert_eq!(moved.dirty(), state.dirty());
        assert_ne!(moved, state);
        assert!(!moved.is_clean());
        assert!(State::new(Pos::new(0, 0), vec![]).is_clean());
    }
}
