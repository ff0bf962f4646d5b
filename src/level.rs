use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};

use crate::actions::{Action, Actions};
use crate::data::Pos;
use crate::map_formatter::MapFormatter;
use crate::solution_formatter::SolutionFormatter;
use crate::state::State;
use crate::world::World;

#[derive(Clone, PartialEq, Eq)]
pub struct Level {
    pub world: World,
    pub state: State,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplayErr {
    /// The action at `step` would move the robot onto an obstacle or off the grid.
    Blocked { step: usize, pos: Pos },
}

impl Display for ReplayErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            ReplayErr::Blocked { step, pos } => {
                write!(f, "Action {} moves the robot to blocked position {}", step, pos)
            }
        }
    }
}

impl Error for ReplayErr {}

impl Level {
    pub fn new(world: World, state: State) -> Self {
        Level { world, state }
    }

    /// Dirty cells the robot can never get to.
    pub fn unreachable_dirty(&self) -> Vec<Pos> {
        let reachable = self.world.reachable_from(self.state.robot_pos());
        trace!("Reachable cells:\n{}", reachable);
        self.state
            .dirty()
            .iter()
            .cloned()
            .filter(|&pos| !reachable[pos])
            .collect()
    }

    /// Returns the blocked position when a move would hit an obstacle or leave the grid.
    pub(crate) fn apply(&self, state: &State, action: Action) -> Result<State, Pos> {
        match action {
            Action::Vacuum => Ok(state.vacuumed()),
            Action::Move(dir) => {
                let new_pos = state.robot_pos() + dir;
                if self.world.is_free(new_pos) {
                    Ok(state.moved_to(new_pos))
                } else {
                    Err(new_pos)
                }
            }
        }
    }

    /// Applies `actions` to the initial state and returns the final one.
    ///
    /// Vacuuming a clean cell is allowed and does nothing.
    pub fn replay(&self, actions: &Actions) -> Result<State, ReplayErr> {
        let mut state = self.state.clone();
        for (step, &action) in actions.iter().enumerate() {
            state = self
                .apply(&state, action)
                .map_err(|pos| ReplayErr::Blocked { step, pos })?;
        }
        Ok(state)
    }

    pub fn format_with_state<'a>(&'a self, state: &'a State) -> MapFormatter<'a> {
        MapFormatter::new(&self.world, state)
    }

    pub fn format_solution<'a>(&'a self, actions: &'a Actions) -> SolutionFormatter<'a> {
        SolutionFormatter::new(self, actions)
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_with_state(&self.state))
    }
}

impl Debug for Level {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
