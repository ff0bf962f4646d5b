use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::data::{MapCell, Pos, DIRTY, OBSTACLE, ROBOT};
use crate::level::Level;
use crate::state::State;
use crate::vec2d::Vec2d;
use crate::world::World;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParserErr {
    InvalidHeader(&'static str, String),
    TooFewRows { expected: usize, found: usize },
    RowTooLong { row: usize, len: usize, cols: usize },
    NoStart,
    MultipleStarts(Pos, Pos),
    TooLarge { cols: usize, rows: usize },
}

/// Upper bound on `cols * rows`.
pub const MAX_CELLS: usize = 1 << 24;

impl Display for ParserErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            ParserErr::InvalidHeader(name, ref line) => write!(
                f,
                "Expected the number of {} as a non-negative integer, got: {:?}",
                name, line
            ),
            ParserErr::TooFewRows { expected, found } => write!(
                f,
                "Not enough rows provided: expected {}, found {}",
                expected, found
            ),
            ParserErr::RowTooLong { row, len, cols } => write!(
                f,
                "Row {} has {} cells but only {} columns were specified",
                row, len, cols
            ),
            ParserErr::NoStart => write!(f, "No robot start position '{}' found", ROBOT),
            ParserErr::MultipleStarts(first, second) => write!(
                f,
                "More than one robot start position: {} and {}",
                first, second
            ),
            ParserErr::TooLarge { cols, rows } => write!(
                f,
                "World of {}x{} cells exceeds the limit of {} cells",
                cols, rows, MAX_CELLS
            ),
        }
    }
}

impl Error for ParserErr {}

impl FromStr for Level {
    type Err = ParserErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

/// Parses the world description format:
///
/// ```text
/// <cols>
/// <rows>
/// <row 0>
/// ...
/// <row rows-1>
/// ```
///
/// Rows may be shorter than `cols`, anything after the last row is ignored.
/// Worlds with more than `MAX_CELLS` cells are rejected once all rows are read.
pub(crate) fn parse(description: &str) -> Result<Level, ParserErr> {
    // files saved by some editors start with a BOM
    let description = description.trim_start_matches('\u{feff}');
    let mut lines = description.lines();

    let cols = parse_header(lines.next(), "columns")?;
    let rows = parse_header(lines.next(), "rows")?;

    let mut grid = Vec::new();
    let mut dirty = Vec::new();
    let mut start = None;

    for y in 0..rows {
        let line = lines.next().ok_or(ParserErr::TooFewRows {
            expected: rows,
            found: y,
        })?;

        let len = line.chars().count();
        if len > cols {
            return Err(ParserErr::RowTooLong { row: y, len, cols });
        }

        let mut row = Vec::with_capacity(len);
        for (x, cur_char) in line.chars().enumerate() {
            let pos = Pos::new(x, y);
            let cell = match cur_char {
                OBSTACLE => MapCell::Obstacle,
                DIRTY => {
                    dirty.push(pos);
                    MapCell::Empty
                }
                ROBOT => {
                    if let Some(first) = start {
                        return Err(ParserErr::MultipleStarts(first, pos));
                    }
                    start = Some(pos);
                    MapCell::Empty
                }
                _ => MapCell::Empty,
            };
            row.push(cell);
        }
        grid.push(row);
    }

    match cols.checked_mul(rows) {
        Some(cells) if cells <= MAX_CELLS => {}
        _ => return Err(ParserErr::TooLarge { cols, rows }),
    }

    let start = start.ok_or(ParserErr::NoStart)?;
    debug!(
        "Parsed {}x{} world, start {}, {} dirty cells",
        cols,
        rows,
        start,
        dirty.len()
    );

    Ok(Level::new(
        World::new(Vec2d::new(&grid, cols)),
        State::new(start, dirty),
    ))
}

fn parse_header(line: Option<&str>, name: &'static str) -> Result<usize, ParserErr> {
    let line = line.unwrap_or("").trim();
    let invalid = || ParserErr::InvalidHeader(name, line.to_owned());
    if line.is_empty() || !line.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }
    line.parse().map_err(|_| invalid())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simplest() {
        let level: Level = "3\n1\n@*#\n".parse().unwrap();
        assert_eq!(level.world.cols(), 3);
        assert_eq!(level.world.rows(), 1);
        assert_eq!(level.state.robot_pos(), Pos::new(0, 0));
        assert_eq!(level.state.dirty(), &[Pos::new(1, 0)]);
        assert!(!level.world.is_free(Pos::new(2, 0)));
    }

    #[test]
    fn other_chars_are_empty() {
        let level: Level = "5\n2\nab.-@\n\t*x*\n".parse().unwrap();
        assert_eq!(level.state.robot_pos(), Pos::new(4, 0));
        assert_eq!(level.state.dirty(), &[Pos::new(1, 1), Pos::new(3, 1)]);
        for y in 0..2 {
            for x in 0..5 {
                assert!(level.world.is_free(Pos::new(x, y)));
            }
        }
    }

    #[test]
    fn leading_spaces_are_cells() {
        let level: Level = "3\n1\n  @\n".parse().unwrap();
        assert_eq!(level.state.robot_pos(), Pos::new(2, 0));
    }

    #[test]
    fn windows_line_endings_and_bom() {
        let level: Level = "\u{feff}2\r\n2\r\n@#\r\n *\r\n".parse().unwrap();
        assert_eq!(level.world.cols(), 2);
        assert_eq!(level.state.dirty(), &[Pos::new(1, 1)]);
        assert!(!level.world.is_free(Pos::new(1, 0)));
    }

    #[test]
    fn header_whitespace() {
        let level: Level = " 2 \n1\t\n@*\n".parse().unwrap();
        assert_eq!(level.world.cols(), 2);
    }

    #[test]
    fn extra_lines_ignored() {
        let level: Level = "2\n1\n@*\n##\nwhatever\n".parse().unwrap();
        assert_eq!(level.world.rows(), 1);
        assert_eq!(level.state.dirty().len(), 1);
    }

    #[test]
    fn empty_rows() {
        let level: Level = "3\n3\n\n @\n\n".parse().unwrap();
        assert_eq!(level.world.rows(), 3);
        assert_eq!(level.state.robot_pos(), Pos::new(1, 1));
    }

    #[test]
    fn fail_header() {
        assert_failure("", ParserErr::InvalidHeader("columns", "".to_owned()));
        assert_failure("x\n1\n@", ParserErr::InvalidHeader("columns", "x".to_owned()));
        assert_failure("-1\n1\n@", ParserErr::InvalidHeader("columns", "-1".to_owned()));
        assert_failure("1\n", ParserErr::InvalidHeader("rows", "".to_owned()));
        assert_failure("1\n1.5\n@", ParserErr::InvalidHeader("rows", "1.5".to_owned()));
    }

    #[test]
    fn fail_too_few_rows() {
        assert_failure(
            "3\n3\n@\n*\n",
            ParserErr::TooFewRows {
                expected: 3,
                found: 2,
            },
        );
    }

    #[test]
    fn fail_huge_rows_header() {
        // only one row line is present so nothing is allocated for the rest
        assert_failure(
            "1\n100000000000000\n@\n",
            ParserErr::TooFewRows {
                expected: 100_000_000_000_000,
                found: 1,
            },
        );
    }

    #[test]
    fn fail_too_large() {
        assert_failure(
            "100000000000000\n1\n@*\n",
            ParserErr::TooLarge {
                cols: 100_000_000_000_000,
                rows: 1,
            },
        );
        assert_failure(
            &format!("{}\n2\n@*\n\n", usize::max_value()),
            ParserErr::TooLarge {
                cols: usize::max_value(),
                rows: 2,
            },
        );
        assert_failure(
            "4097\n4096\n@\n",
            ParserErr::TooFewRows {
                expected: 4096,
                found: 1,
            },
        );
        let mut input = "4097\n4096\n@\n".to_owned();
        input.push_str(&"\n".repeat(4095));
        assert_failure(
            &input,
            ParserErr::TooLarge {
                cols: 4097,
                rows: 4096,
            },
        );
    }

    #[test]
    fn largest_allowed() {
        let level: Level = "16777216\n1\n@*\n".parse().unwrap();
        assert_eq!(level.world.cols(), MAX_CELLS);
        assert_eq!(level.state.dirty(), &[Pos::new(1, 0)]);
    }

    #[test]
    fn fail_row_too_long() {
        assert_failure(
            "2\n2\n@\n* #\n",
            ParserErr::RowTooLong {
                row: 1,
                len: 3,
                cols: 2,
            },
        );
    }

    #[test]
    fn fail_no_start() {
        assert_failure("2\n1\n *\n", ParserErr::NoStart);
        assert_failure("0\n0\n", ParserErr::NoStart);
    }

    #[test]
    fn fail_multiple_starts() {
        assert_failure(
            "3\n2\n@\n *@\n",
            ParserErr::MultipleStarts(Pos::new(0, 0), Pos::new(2, 1)),
        );
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            ParserErr::RowTooLong {
                row: 1,
                len: 3,
                cols: 2
            }
            .to_string(),
            "Row 1 has 3 cells but only 2 columns were specified"
        );
        assert_eq!(
            ParserErr::NoStart.to_string(),
            "No robot start position '@' found"
        );
        assert_eq!(
            ParserErr::TooLarge { cols: 5000, rows: 5000 }.to_string(),
            "World of 5000x5000 cells exceeds the limit of 16777216 cells"
        );
    }

    fn assert_failure(input: &str, expected_err: ParserErr) {
        assert_eq!(input.parse::<Level>().unwrap_err(), expected_err);
    }
}
