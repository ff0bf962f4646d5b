// Opt in to warnings about new 2018 idioms
#![warn(rust_2018_idioms)]
// Additional warnings that are allow by default (`rustc -W help`)
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused)]

#[macro_use]
extern crate log;

pub mod actions;
pub mod config;
pub mod level;
pub mod map_formatter;
pub mod parser;
pub mod solution_formatter;
pub mod solver;
pub mod state;
pub mod world;

mod data;
mod fs;
mod vec2d;

use std::error::Error;

use crate::config::Method;
use crate::level::Level;
use crate::solver::SolverOk;

pub use crate::data::{Dir, Pos};

pub trait LoadLevel {
    fn load_level(&self) -> Result<Level, Box<dyn Error>>;
}

pub trait Solve {
    fn solve(&self, method: Method) -> SolverOk;
}
