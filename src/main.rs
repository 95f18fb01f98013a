//! mazesolve: load a maze file, search it breadth-first and print the shortest route.

use clap::Parser;
use maze_bfs::{LogObserver, Maze, MazeError, PathFormat, LOG_FILE_LOAD};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "mazesolve")]
#[command(version)]
#[command(about = "Solve a maze file with breadth-first search")]
struct Cli {
    /// Verbosity of the search log: 1 steps, 2 states, 3 paths, 4 skipped tiles,
    /// 5 solution, 6 file loading, 10 everything
    #[arg(short, long, value_name = "N", default_value_t = 0)]
    log: u32,

    /// Print the distance of every reached tile after the search
    #[arg(long)]
    show_distances: bool,

    /// Maze file to solve
    maze_file: std::path::PathBuf,
}

fn main() {
    let cli = Cli::parse();

    let filter = match cli.log {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        n if n >= LOG_FILE_LOAD => EnvFilter::new("trace"),
        _ => EnvFilter::new("info"),
    };
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let code = match run(&cli) {
        Ok(()) => 0,
        Err(e) => {
            let code = e.exit_code();
            match e {
                MazeError::Io { .. } | MazeError::Parse(_) => {
                    println!("Could not load maze file. Exiting with error code {}", code);
                }
                _ => println!("Search failed. Exiting with error code {}", code),
            }
            eprintln!("Error: {}", e);
            code
        }
    };
    std::process::exit(code);
}

fn run(cli: &Cli) -> Result<(), MazeError> {
    let mut maze = Maze::from_file(&cli.maze_file)?;
    print!("{}", maze);

    let mut observer = LogObserver::new(cli.log);
    if maze.unreachable(maze.start(), maze.end()) {
        log::info!("{} and {} are in different regions", maze.start(), maze.end());
    }
    maze.bfs_iterate(&mut observer)?;
    if cli.show_distances {
        print!("{}", maze.state_view());
    }

    if maze.set_solution(&mut observer)? {
        println!("SOLUTION:");
        print!("{}", maze);
        print!("{}", maze.render_end_path(PathFormat::Verbose));
    } else {
        println!("NO SOLUTION FOUND");
    }
    Ok(())
}
