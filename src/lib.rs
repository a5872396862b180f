pub mod error;
pub mod generator;
pub mod maze;
pub mod render;
pub mod solvers;

pub use error::MazeError;
pub use maze::{Cell, Maze, Position};
pub use solvers::{Path, Solver};
