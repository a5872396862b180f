use std::collections::HashSet;
use std::io::Write;

use crossterm::style::{Color, Stylize};

use crate::maze::{Cell, Maze, Position};
use crate::solvers::Path;

/// Writes the maze to `out`, one styled two-column glyph per cell, with the
/// solution path (if any) overlaid in yellow. Start and goal keep their own
/// colors even when the route crosses them. A pure function of the maze and
/// path; the maze itself is untouched.
pub fn render(maze: &Maze, path: Option<&Path>, out: &mut impl Write) -> std::io::Result<()> {
    let route: HashSet<Position> = path
        .map(|p| p.iter().copied().collect())
        .unwrap_or_default();
    for row in 0..maze.height() {
        for col in 0..maze.width() {
            let pos = (row, col);
            if route.contains(&pos) && maze[pos] == Cell::Open {
                write!(out, "{}", "🟨".with(Color::Yellow))?;
            } else {
                write!(out, "{}", maze[pos])?;
            }
        }
        writeln!(out)?;
    }
    out.flush()
}
