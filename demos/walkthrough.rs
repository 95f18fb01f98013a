use maze_bfs::{BfsState, Maze, NoOpObserver, PathFormat};

// Steps through the corridor maze one expansion at a time and prints the distance map
// every ten steps.
// ################
// #S             #
// # ### ###### # #
// # ### ##E  #   #
// # ### #### ##  #
// #              #
// ################
fn main() {
    let path = format!("{}/mazes/maze-simple.txt", env!("CARGO_MANIFEST_DIR"));
    let mut maze = match Maze::from_file(&path) {
        Ok(maze) => maze,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(e.exit_code());
        }
    };
    print!("{}", maze);

    if let Err(e) = maze.bfs_init(&mut NoOpObserver) {
        eprintln!("{}", e);
        return;
    }
    let mut step = 0;
    while maze.bfs_state() == BfsState::Running {
        step += 1;
        match maze.bfs_step(&mut NoOpObserver) {
            Ok(found) if step % 10 == 0 => {
                println!("STEP {}: found {} new tiles", step, found.len());
                print!("{}", maze.state_view());
            }
            Ok(_) => {}
            Err(e) => {
                eprintln!("{}", e);
                return;
            }
        }
    }
    println!("search finished after {} steps", step);
    print!("{}", maze.render_end_path(PathFormat::Verbose));
}
