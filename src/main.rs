use std::time::Instant;

use mazerace::{generator, maze::Maze, render, solvers};

/// Where the generated maze is persisted between generation and solving.
const MAZE_FILE: &str = "generated_maze/m.txt";

/// Log to a file so log lines never interleave with the rendered maze.
fn init_logging() -> tracing_appender::non_blocking::WorkerGuard {
    let file_appender = tracing_appender::rolling::never("logs", "mazerace.log");
    let (writer, guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .init();
    guard
}

fn main() -> std::io::Result<()> {
    let _log_guard = init_logging();

    let mut input = String::new();
    println!("Enter maze dimensions (width height). Both must be odd and at least 3:");
    std::io::stdin().read_line(&mut input)?;

    // Parse the input dimensions
    let dims = input
        .split_whitespace()
        .take(2)
        .filter_map(|s| s.parse::<u16>().ok())
        .collect::<Vec<_>>();

    if dims.len() != 2 {
        eprintln!("Please enter two valid numbers for width and height.");
        return Ok(());
    }
    let (width, height) = (dims[0], dims[1]);

    let maze = match generator::generate(width, height, None) {
        Ok(maze) => maze,
        Err(e) => {
            eprintln!("{e}");
            return Ok(());
        }
    };

    // Persist the maze so the solver runs against exactly what was saved
    std::fs::create_dir_all("generated_maze")?;
    std::fs::write(MAZE_FILE, maze.to_string())?;
    tracing::info!("Saved generated {width}x{height} maze to {MAZE_FILE}");

    // Let user select the solving algorithm
    println!("Select maze solving algorithm:");
    for (i, solver) in solvers::Solver::ALL.iter().enumerate() {
        println!("{}. {}", i + 1, solver);
    }
    input.clear();
    std::io::stdin().read_line(&mut input)?;
    let solver = match input
        .trim()
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| solvers::Solver::ALL.get(i).copied())
    {
        Some(solver) => solver,
        None => {
            eprintln!("Invalid selection.");
            return Ok(());
        }
    };

    // Reload the maze from its text form
    let text = std::fs::read_to_string(MAZE_FILE)?;
    let loaded: Maze = match text.parse() {
        Ok(maze) => maze,
        Err(e) => {
            eprintln!("{MAZE_FILE}: {e}");
            return Ok(());
        }
    };

    // Solve the maze using the selected algorithm, timing the solve alone
    let started = Instant::now();
    let outcome = solvers::solve(&loaded, solver);
    let elapsed = started.elapsed();

    match outcome {
        Err(e) => eprintln!("{e}"),
        Ok(path) => {
            let mut stdout = std::io::stdout();
            render::render(&loaded, path.as_ref(), &mut stdout)?;
            match path {
                Some(path) => {
                    println!("{solver}: {}-step path found in {elapsed:.2?}", path.len() - 1)
                }
                None => println!("{solver}: no path to the goal ({elapsed:.2?})"),
            }
            tracing::info!("{solver} finished in {elapsed:?}");
        }
    }
    Ok(())
}
