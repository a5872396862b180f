use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};

use crate::error::MazeError;
use crate::maze::{Cell, Maze, Position};

/// The four two-step carve directions. Stepping two cells at a time keeps a
/// wall cell between every pair of carve candidates.
const CARVE_DIRECTIONS: [(i32, i32); 4] = [(-2, 0), (2, 0), (0, -2), (0, 2)];

/// Get a random number generator, optionally seeded for reproducibility.
fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// One carve site on the explicit stack: a visited cell and the shuffled
/// directions it has not tried yet.
struct CarveFrame {
    pos: Position,
    directions: Vec<(i32, i32)>,
}

impl CarveFrame {
    fn new(pos: Position, rng: &mut StdRng) -> Self {
        let mut directions = CARVE_DIRECTIONS.to_vec();
        directions.shuffle(rng);
        CarveFrame { pos, directions }
    }
}

/// Generates a random maze with a randomized depth-first backtracker.
///
/// Both dimensions must be odd and at least 3, so the border and every cell
/// at an even coordinate stay walls. The start is carved at (1, 1) and the
/// goal forced at (height - 2, width - 2); the carve walk links the two
/// through a single connected structure of open cells.
///
/// The recursion of the textbook algorithm is replaced by an explicit stack
/// of [`CarveFrame`]s, so memory stays bounded on large mazes. Pass a seed to
/// reproduce a maze exactly.
pub fn generate(width: u16, height: u16, seed: Option<u64>) -> Result<Maze, MazeError> {
    if width < 3 || height < 3 || width % 2 == 0 || height % 2 == 0 {
        return Err(MazeError::InvalidDimensions { width, height });
    }

    let mut rng = get_rng(seed);
    let mut maze = Maze::new(width, height);
    let start: Position = (1, 1);
    let goal: Position = (height - 2, width - 2);

    // Visited mask over carve candidates, parallel to the maze and dropped
    // when generation finishes.
    let mut visited = vec![false; width as usize * height as usize];
    let ravel = |(row, col): Position| row as usize * width as usize + col as usize;

    maze[start] = Cell::Start;
    visited[ravel(start)] = true;

    let mut stack = vec![CarveFrame::new(start, &mut rng)];
    while let Some(frame) = stack.last_mut() {
        let Some((d_row, d_col)) = frame.directions.pop() else {
            // Every direction from this cell was tried, backtrack.
            stack.pop();
            continue;
        };
        let (row, col) = frame.pos;
        let next_row = row as i32 + d_row;
        let next_col = col as i32 + d_col;
        // Strictly inside the border. Odd dimensions make the border itself
        // unreachable by two-cell steps from (1, 1).
        if next_row <= 0
            || next_row >= height as i32
            || next_col <= 0
            || next_col >= width as i32
        {
            continue;
        }
        let next: Position = (next_row as u16, next_col as u16);
        if visited[ravel(next)] {
            continue;
        }
        // Carve the wall between the two cells, then the cell itself.
        let wall: Position = (
            (row as i32 + d_row / 2) as u16,
            (col as i32 + d_col / 2) as u16,
        );
        maze[wall] = Cell::Open;
        maze[next] = Cell::Open;
        visited[ravel(next)] = true;
        stack.push(CarveFrame::new(next, &mut rng));
    }

    // Corner-to-corner carving over an odd-sized grid always reaches the
    // goal cell; check it instead of assuming it.
    debug_assert!(
        visited[ravel(goal)],
        "carve walk never reached the goal cell"
    );
    maze[goal] = Cell::Goal;

    tracing::debug!("Generated {}x{} maze (seed: {:?})", width, height, seed);
    Ok(maze)
}
