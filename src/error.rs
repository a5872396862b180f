use std::fmt;

/// Errors raised by maze generation, loading, and solving.
///
/// An unreachable goal is not an error: `solve` reports it as `Ok(None)`, so
/// callers can tell "ran successfully, no path" apart from "failed to run".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    /// Maze generation was requested with even or sub-minimum dimensions.
    /// Carving needs odd dimensions of at least 3 so every cell at an even
    /// coordinate is a wall.
    InvalidDimensions { width: u16, height: u16 },
    /// The maze text could not be parsed into a grid.
    MalformedMazeFile(MazeFileError),
    /// The grid has no start or goal cell to search between.
    MissingEndpoint,
}

/// How a maze text failed to parse. All of these are detected up front,
/// before any search work begins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MazeFileError {
    /// The text contained no rows or no columns.
    Empty,
    /// A row's length differs from the first row's (1-based line number).
    UnequalRowLength { line: usize },
    /// A character outside the `#`, ` `, `A`, `B` alphabet (1-based line and
    /// column).
    UnrecognizedCell { line: usize, column: usize, found: char },
    /// A start or goal marker appeared zero or more than one times.
    MarkerCount { marker: char, count: usize },
    /// The text describes a grid larger than the coordinate space.
    TooLarge { rows: usize, cols: usize },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MazeError::InvalidDimensions { width, height } => write!(
                f,
                "invalid maze dimensions {}x{}: width and height must be odd and at least 3",
                width, height
            ),
            MazeError::MalformedMazeFile(e) => write!(f, "malformed maze file: {}", e),
            MazeError::MissingEndpoint => {
                write!(f, "the maze has no start or goal cell to search between")
            }
        }
    }
}

impl fmt::Display for MazeFileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MazeFileError::Empty => write!(f, "the maze text is empty"),
            MazeFileError::UnequalRowLength { line } => {
                write!(f, "row at line {} has a different length", line)
            }
            MazeFileError::UnrecognizedCell {
                line,
                column,
                found,
            } => write!(
                f,
                "unrecognized cell character {:?} at line {}, column {}",
                found, line, column
            ),
            MazeFileError::MarkerCount { marker, count } => write!(
                f,
                "expected exactly one {:?} marker, found {}",
                marker, count
            ),
            MazeFileError::TooLarge { rows, cols } => write!(
                f,
                "maze of {} rows by {} columns exceeds the supported grid size",
                rows, cols
            ),
        }
    }
}

impl std::error::Error for MazeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MazeError::MalformedMazeFile(e) => Some(e),
            _ => None,
        }
    }
}

impl std::error::Error for MazeFileError {}

impl From<MazeFileError> for MazeError {
    fn from(e: MazeFileError) -> Self {
        MazeError::MalformedMazeFile(e)
    }
}
