mod engine;
mod frontier;

use crate::error::MazeError;
use crate::maze::{Maze, Position};
use engine::search;
use frontier::{CostFrontier, FifoFrontier, LifoFrontier};

/// An ordered walk of 4-connected cells from the start to the goal,
/// both inclusive.
pub type Path = Vec<Position>;

/// The available maze solving strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Solver {
    Bfs,
    Dfs,
    Ucs,
    AStar,
}

impl Solver {
    /// Every solver, in menu order.
    pub const ALL: [Solver; 4] = [Solver::Bfs, Solver::Dfs, Solver::Ucs, Solver::AStar];
}

impl std::fmt::Display for Solver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Solver::Bfs => write!(f, "Breadth-First Search (BFS)"),
            Solver::Dfs => write!(f, "Depth-First Search (DFS)"),
            Solver::Ucs => write!(f, "Uniform-Cost Search (Dijkstra)"),
            Solver::AStar => write!(f, "A* Search"),
        }
    }
}

/// Solves the maze with the chosen strategy.
///
/// Returns `Ok(None)` when the goal is unreachable; that is a defined
/// outcome, not an error. Fails with [`MazeError::MissingEndpoint`] when the
/// maze lacks a start or goal cell. The maze itself is never mutated, so
/// solving the same maze twice yields identical paths.
pub fn solve(maze: &Maze, solver: Solver) -> Result<Option<Path>, MazeError> {
    let start = maze.start().ok_or(MazeError::MissingEndpoint)?;
    let goal = maze.goal().ok_or(MazeError::MissingEndpoint)?;

    let path = match solver {
        Solver::Bfs => search::<FifoFrontier>(maze, start, goal, |_, _| 0),
        Solver::Dfs => search::<LifoFrontier>(maze, start, goal, |_, _| 0),
        Solver::Ucs => search::<CostFrontier>(maze, start, goal, |_, _| 0),
        Solver::AStar => search::<CostFrontier>(maze, start, goal, manhattan),
    };
    tracing::debug!(
        "{} on {}x{} maze: {}",
        solver,
        maze.width(),
        maze.height(),
        match &path {
            Some(p) => format!("path of {} steps", p.len() - 1),
            None => "no path".to_string(),
        }
    );
    Ok(path)
}

/// Manhattan distance, the admissible and consistent A* heuristic for a
/// 4-connected grid with uniform step costs.
fn manhattan(a: Position, b: Position) -> u64 {
    a.0.abs_diff(b.0) as u64 + a.1.abs_diff(b.1) as u64
}
