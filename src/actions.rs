use std::fmt::{self, Debug, Display, Formatter};

use crate::data::Dir;

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Move(Dir),
    Vacuum,
}

impl Action {
    pub fn is_vacuum(self) -> bool {
        self == Action::Vacuum
    }
}

impl Display for Action {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Action::Move(dir) => write!(f, "{}", dir),
            Action::Vacuum => write!(f, "V"),
        }
    }
}

impl Debug for Action {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Actions(Vec<Action>);

impl Actions {
    pub fn new(actions: Vec<Action>) -> Self {
        Actions(actions)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn move_cnt(&self) -> usize {
        self.0.iter().filter(|a| !a.is_vacuum()).count()
    }

    pub fn vacuum_cnt(&self) -> usize {
        self.0.iter().filter(|a| a.is_vacuum()).count()
    }

    pub fn iter(&self) -> ::std::slice::Iter<'_, Action> {
        self.0.iter()
    }
}

impl IntoIterator for Actions {
    type Item = Action;
    type IntoIter = ::std::vec::IntoIter<Action>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Actions {
    type Item = &'a Action;
    type IntoIter = ::std::slice::Iter<'a, Action>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// One label per line.
impl Display for Actions {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for action in self {
            writeln!(f, "{}", action)?;
        }
        Ok(())
    }
}

impl Debug for Actions {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for action in self {
            write!(f, "{}", action)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all() -> Vec<Action> {
        vec![
            Action::Move(Dir::North),
            Action::Move(Dir::South),
            Action::Vacuum,
            Action::Move(Dir::East),
            Action::Move(Dir::West),
            Action::Vacuum,
        ]
    }

    #[test]
    fn formatting_actions() {
        let actions = Actions::new(all());
        assert_eq!(actions.to_string(), "N\nS\nV\nE\nW\nV\n");
        assert_eq!(format!("{:?}", actions), "NSVEWV");
        assert_eq!(Actions::default().to_string(), "");
    }

    #[test]
    fn counting() {
        let actions = Actions::new(all());
        assert_eq!(actions.len(), 6);
        assert_eq!(actions.move_cnt(), 4);
        assert_eq!(actions.vacuum_cnt(), 2);
        assert!(!actions.is_empty());
        assert!(Actions::default().is_empty());
    }

    #[test]
    fn iterating() {
        let v = all();
        let actions = Actions::new(v.clone());

        let mut v2 = Vec::new();
        for &a in &actions {
            v2.push(a);
        }
        for &a in actions.iter() {
            v2.push(a);
        }
        for a in actions {
            v2.push(a);
        }

        assert_eq!(v2.len(), 18);
        for chunk in v2.chunks(6) {
            assert_eq!(chunk, &v[..]);
        }
    }
}
