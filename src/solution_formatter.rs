use std::fmt::{self, Debug, Display, Formatter};

use crate::actions::Actions;
use crate::level::Level;

/// Renders the world before the first action and after each one.
pub struct SolutionFormatter<'a> {
    level: &'a Level,
    actions: &'a Actions,
}

impl<'a> SolutionFormatter<'a> {
    pub(crate) fn new(level: &'a Level, actions: &'a Actions) -> Self {
        Self { level, actions }
    }
}

impl Display for SolutionFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.level)?;
        let mut last_state = self.level.state.clone();
        for (step, &action) in self.actions.iter().enumerate() {
            match self.level.apply(&last_state, action) {
                Ok(new_state) => {
                    writeln!(f, "{}: {}", step + 1, action)?;
                    writeln!(f, "{}", self.level.format_with_state(&new_state))?;
                    last_state = new_state;
                }
                Err(pos) => {
                    // somebody passed actions from a different level
                    writeln!(f, "{}: {} is blocked at {}", step + 1, action, pos)?;
                    break;
                }
            }
        }
        Ok(())
    }
}

impl Debug for SolutionFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
