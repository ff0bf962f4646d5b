mod frontier;
mod stats;

use std::fmt::{self, Debug, Display, Formatter};

use fnv::FnvHashSet;
use typed_arena::Arena;

use crate::actions::{Action, Actions};
use crate::config::Method;
use crate::level::Level;
use crate::state::State;
use crate::world::World;
use crate::Solve;

use self::frontier::{CostOrdered, Frontier, RecencyOrdered};

pub use self::stats::Stats;

pub struct SolverOk {
    pub actions: Option<Actions>,
    pub stats: Stats,
    pub(crate) method: Method,
}

impl SolverOk {
    fn new(actions: Option<Actions>, stats: Stats, method: Method) -> Self {
        Self {
            actions,
            stats,
            method,
        }
    }
}

/// The plan (or `No solution`) followed by node counts.
impl Display for SolverOk {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.actions {
            None => writeln!(f, "No solution")?,
            Some(ref actions) => write!(f, "{}", actions)?,
        }
        write!(f, "{}", self.stats)
    }
}

impl Debug for SolverOk {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.actions {
            None => writeln!(f, "{}: no solution", self.method)?,
            Some(ref actions) => writeln!(
                f,
                "{}: {} actions ({} moves, {} vacuums)",
                self.method,
                actions.len(),
                actions.move_cnt(),
                actions.vacuum_cnt()
            )?,
        }
        writeln!(f, "Max depth: {}", self.stats.max_depth())?;
        write!(f, "{:?}", self.stats)
    }
}

impl Solve for Level {
    fn solve(&self, method: Method) -> SolverOk {
        solve(self, method)
    }
}

fn solve(level: &Level, method: Method) -> SolverOk {
    let unreachable = level.unreachable_dirty();
    if !unreachable.is_empty() {
        info!(
            "{} dirty cells can't be reached, the search will exhaust",
            unreachable.len()
        );
    }

    debug!("Search called using {}", method);
    let arena = Arena::new();
    let (actions, stats) = match method {
        Method::UniformCost => Search::new(level, &arena, CostOrdered::new()).run(),
        Method::DepthFirst => Search::new(level, &arena, RecencyOrdered::new()).run(),
    };
    SolverOk::new(actions, stats, method)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Status {
    Running,
    GoalFound,
    Exhausted,
}

/// A state together with how the search got there.
#[derive(Debug)]
pub(crate) struct Node<'a> {
    state: State,
    prev: Option<&'a Node<'a>>,
    action: Option<Action>,
    dist: u32,
}

pub(crate) struct Search<'a, F> {
    world: &'a World,
    arena: &'a Arena<Node<'a>>,
    frontier: F,
    visited: FnvHashSet<&'a State>,
    stats: Stats,
    status: Status,
    goal: Option<&'a Node<'a>>,
}

impl<'a, F: Frontier<&'a Node<'a>>> Search<'a, F> {
    pub(crate) fn new(level: &'a Level, arena: &'a Arena<Node<'a>>, mut frontier: F) -> Self {
        let mut stats = Stats::new();
        let start: &'a Node<'a> = arena.alloc(Node {
            state: level.state.clone(),
            prev: None,
            action: None,
            dist: 0,
        });
        stats.add_generated(start.dist);
        frontier.push(start.dist, start);

        Self {
            world: &level.world,
            arena,
            frontier,
            visited: FnvHashSet::default(),
            stats,
            status: Status::Running,
            goal: None,
        }
    }

    /// Expands at most one node.
    pub(crate) fn step(&mut self) -> Status {
        if self.status != Status::Running {
            return self.status;
        }

        let cur_node = match self.frontier.pop() {
            Some(node) => node,
            None => {
                debug!("Frontier exhausted, no solution");
                self.status = Status::Exhausted;
                return self.status;
            }
        };

        if !self.visited.insert(&cur_node.state) {
            self.stats.add_duplicate(cur_node.dist);
            return self.status;
        }
        if self.stats.add_expanded(cur_node.dist) {
            debug!(
                "Expanded new depth: {}, frontier size: {}",
                cur_node.dist,
                self.frontier.len()
            );
        }

        if cur_node.state.is_clean() {
            debug!("Solved at depth {}, backtracking path", cur_node.dist);
            self.goal = Some(cur_node);
            self.status = Status::GoalFound;
            return self.status;
        }

        let arena = self.arena;
        for (action, new_state) in expand(self.world, &cur_node.state) {
            let next_node: &'a Node<'a> = arena.alloc(Node {
                state: new_state,
                prev: Some(cur_node),
                action: Some(action),
                dist: cur_node.dist + 1,
            });
            self.stats.add_generated(next_node.dist);
            // every action costs 1 so cost == depth
            self.frontier.push(next_node.dist, next_node);
        }

        self.status
    }

    pub(crate) fn run(mut self) -> (Option<Actions>, Stats) {
        while self.step() == Status::Running {}

        let actions = self.goal.map(backtrack_actions);
        (actions, self.stats)
    }
}

/// Vacuuming first (if the cell is dirty), then moves in `N, S, E, W` order.
fn expand(world: &World, state: &State) -> Vec<(Action, State)> {
    let mut new_states = Vec::with_capacity(5);

    if state.is_dirty(state.robot_pos()) {
        new_states.push((Action::Vacuum, state.vacuumed()));
    }
    for (dir, new_pos) in world.neighbors(state.robot_pos()) {
        new_states.push((Action::Move(dir), state.moved_to(new_pos)));
    }

    new_states
}

fn backtrack_actions(final_node: &Node<'_>) -> Actions {
    let mut ret = Vec::with_capacity(final_node.dist as usize);
    let mut node = final_node;
    while let (Some(action), Some(prev)) = (node.action, node.prev) {
        ret.push(action);
        node = prev;
    }
    ret.reverse();
    Actions::new(ret)
}
