pub mod cell;
mod grid;

use std::fmt;
use std::str::FromStr;

pub use cell::Cell;
use grid::Grid;

use crate::error::{MazeError, MazeFileError};

/// A (row, column) coordinate in the maze. Also the graph-node identity used
/// by the solvers; equality and ordering are the tuple's.
pub type Position = (u16, u16);

/// A rectangular maze of wall, open, start, and goal cells.
///
/// Dimensions are fixed after construction. A maze produced by the generator
/// or loaded from well-formed text has exactly one start and one goal cell;
/// one built with [`Maze::new`] has neither until its cells are assigned.
#[derive(Debug)]
pub struct Maze {
    grid: Grid,
}

impl Maze {
    /// Creates a maze of the given dimensions with every cell a wall.
    ///
    /// # Panics
    /// If either dimension is zero.
    pub fn new(width: u16, height: u16) -> Self {
        assert!(
            width > 0 && height > 0,
            "Maze dimensions must be positive"
        );
        Maze {
            grid: Grid::new(width, height, Cell::Wall),
        }
    }

    /// Returns the width of the maze in cells.
    pub fn width(&self) -> u16 {
        self.grid.width()
    }

    /// Returns the height of the maze in cells.
    pub fn height(&self) -> u16 {
        self.grid.height()
    }

    /// Checks if the given coordinate is within the bounds of the maze.
    pub fn is_in_bounds(&self, (row, col): Position) -> bool {
        row < self.height() && col < self.width()
    }

    /// The start cell, found by a row-major scan for the first [`Cell::Start`].
    pub fn start(&self) -> Option<Position> {
        self.find(Cell::Start)
    }

    /// The goal cell, found by a row-major scan for the first [`Cell::Goal`].
    pub fn goal(&self) -> Option<Position> {
        self.find(Cell::Goal)
    }

    fn find(&self, target: Cell) -> Option<Position> {
        self.grid
            .iter()
            .find(|&(_, cell)| cell == target)
            .map(|(pos, _)| pos)
    }

    /// The walkable 4-connected neighbors of a cell, in fixed east, south,
    /// west, north order. The order is part of the solving contract: every
    /// solver expands neighbors the same way, so ties break identically from
    /// run to run.
    pub fn neighbors(&self, pos: Position) -> impl Iterator<Item = Position> {
        let neighbors: Vec<Position> = if self.is_in_bounds(pos) {
            let (row, col) = pos;
            vec![
                // NOTE: This way of handling underflow/overflow is overflow-safe.
                // When row < 1 or col < 1, wrap row - 1 or col - 1 to u16::MAX to
                // avoid underflow, and automatically filter it out in the bounds
                // check. Saturating row + 1 or col + 1 at u16::MAX is likewise
                // filtered out, since dimensions never exceed u16::MAX.
                (row, col.saturating_add(1)),
                (row.saturating_add(1), col),
                (row, col.wrapping_sub(1)),
                (row.wrapping_sub(1), col),
            ]
        } else {
            // No neighbors if the coordinate is out of bounds
            vec![]
        };

        neighbors
            .into_iter()
            .filter(move |&p| self.is_in_bounds(p) && self[p] != Cell::Wall)
    }
}

impl std::ops::Index<Position> for Maze {
    type Output = Cell;

    fn index(&self, pos: Position) -> &Self::Output {
        &self.grid[pos]
    }
}

impl std::ops::IndexMut<Position> for Maze {
    fn index_mut(&mut self, pos: Position) -> &mut Self::Output {
        &mut self.grid[pos]
    }
}

/// Writes the maze in its text interchange format: one row per line, one
/// character per cell. [`Maze::from_str`] parses the same format back.
impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height() {
            for col in 0..self.width() {
                write!(f, "{}", self[(row, col)].as_char())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl FromStr for Maze {
    type Err = MazeError;

    /// Parses the maze text format, rejecting unequal row lengths,
    /// unrecognized characters, and anything but exactly one start and one
    /// goal marker. All validation happens here, before any solving starts.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines: Vec<&str> = s.lines().collect();
        let height = lines.len();
        let width = lines.first().map_or(0, |line| line.chars().count());
        if height == 0 || width == 0 {
            return Err(MazeFileError::Empty.into());
        }
        if height > u16::MAX as usize || width > u16::MAX as usize {
            return Err(MazeFileError::TooLarge {
                rows: height,
                cols: width,
            }
            .into());
        }

        let mut maze = Maze::new(width as u16, height as u16);
        let mut starts = 0;
        let mut goals = 0;
        for (row, line) in lines.iter().enumerate() {
            if line.chars().count() != width {
                return Err(MazeFileError::UnequalRowLength { line: row + 1 }.into());
            }
            for (col, c) in line.chars().enumerate() {
                let cell = Cell::from_char(c).ok_or(MazeFileError::UnrecognizedCell {
                    line: row + 1,
                    column: col + 1,
                    found: c,
                })?;
                match cell {
                    Cell::Start => starts += 1,
                    Cell::Goal => goals += 1,
                    _ => {}
                }
                maze[(row as u16, col as u16)] = cell;
            }
        }
        if starts != 1 {
            return Err(MazeFileError::MarkerCount {
                marker: 'A',
                count: starts,
            }
            .into());
        }
        if goals != 1 {
            return Err(MazeFileError::MarkerCount {
                marker: 'B',
                count: goals,
            }
            .into());
        }
        Ok(maze)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL: &str = "#####\n#A  #\n# # #\n#  B#\n#####\n";

    #[test]
    fn test_maze_indexing() {
        let mut maze = Maze::new(5, 5);
        maze[(2, 3)] = Cell::Start;
        assert_eq!(maze[(2, 3)], Cell::Start);
    }

    #[test]
    fn test_out_of_bounds() {
        let maze = Maze::new(5, 4);
        assert!(!maze.is_in_bounds((4, 0)));
        assert!(!maze.is_in_bounds((0, 5)));
        assert!(maze.is_in_bounds((3, 4)));
    }

    #[test]
    fn test_parse_finds_endpoints() {
        let maze: Maze = SMALL.parse().unwrap();
        assert_eq!(maze.width(), 5);
        assert_eq!(maze.height(), 5);
        assert_eq!(maze.start(), Some((1, 1)));
        assert_eq!(maze.goal(), Some((3, 3)));
    }

    #[test]
    fn test_text_round_trip() {
        let maze: Maze = SMALL.parse().unwrap();
        let text = maze.to_string();
        assert_eq!(text, SMALL);
        let again: Maze = text.parse().unwrap();
        for row in 0..maze.height() {
            for col in 0..maze.width() {
                assert_eq!(maze[(row, col)], again[(row, col)]);
            }
        }
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert_eq!(
            "".parse::<Maze>().unwrap_err(),
            MazeFileError::Empty.into(),
        );
    }

    #[test]
    fn test_parse_rejects_unequal_rows() {
        assert_eq!(
            "###\n##\n###".parse::<Maze>().unwrap_err(),
            MazeFileError::UnequalRowLength { line: 2 }.into(),
        );
    }

    #[test]
    fn test_parse_rejects_unknown_characters() {
        assert_eq!(
            "###\n#x#\n###".parse::<Maze>().unwrap_err(),
            MazeFileError::UnrecognizedCell {
                line: 2,
                column: 2,
                found: 'x'
            }
            .into(),
        );
    }

    #[test]
    fn test_parse_rejects_bad_marker_counts() {
        assert_eq!(
            "###\n# #\n###".parse::<Maze>().unwrap_err(),
            MazeFileError::MarkerCount {
                marker: 'A',
                count: 0
            }
            .into(),
        );
        assert_eq!(
            "A#A\n# #\n##B".parse::<Maze>().unwrap_err(),
            MazeFileError::MarkerCount {
                marker: 'A',
                count: 2
            }
            .into(),
        );
        assert_eq!(
            "A##\n# #\n###".parse::<Maze>().unwrap_err(),
            MazeFileError::MarkerCount {
                marker: 'B',
                count: 0
            }
            .into(),
        );
    }

    #[test]
    fn test_neighbor_order_is_east_south_west_north() {
        // Open cross around (1, 1) with no walls anywhere.
        let mut maze = Maze::new(3, 3);
        for row in 0..3 {
            for col in 0..3 {
                maze[(row, col)] = Cell::Open;
            }
        }
        let neighbors: Vec<Position> = maze.neighbors((1, 1)).collect();
        assert_eq!(neighbors, vec![(1, 2), (2, 1), (1, 0), (0, 1)]);
    }

    #[test]
    fn test_neighbors_skip_walls_and_edges() {
        let maze: Maze = SMALL.parse().unwrap();
        // (1, 1) is the start corner: only east and south are open.
        let neighbors: Vec<Position> = maze.neighbors((1, 1)).collect();
        assert_eq!(neighbors, vec![(1, 2), (2, 1)]);
        // Out-of-bounds coordinates have no neighbors.
        assert_eq!(maze.neighbors((9, 9)).count(), 0);
    }
}
