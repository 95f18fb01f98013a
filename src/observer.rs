use crate::bfs::Expansion;
use crate::coord::Coord;
use crate::direction::Direction;
use crate::maze::Maze;
use crate::render::{render_path, PathFormat};
use log::info;

/// Report each BFS step and its step number.
pub const LOG_BFS_STEPS: u32 = 1;
/// Dump the search state after initialization and after every step.
pub const LOG_BFS_STATES: u32 = 2;
/// Report every newly found tile with its path.
pub const LOG_BFS_PATHS: u32 = 3;
/// Report neighbours skipped because they are blocked or already found.
pub const LOG_SKIPPED_TILES: u32 = 4;
/// Report each move while the solution is marked.
pub const LOG_SET_SOLUTION: u32 = 5;
/// Trace maze loading tile by tile.
pub const LOG_FILE_LOAD: u32 = 6;
pub const LOG_ALL: u32 = 10;

/// Hooks invoked by the search at fixed points. All methods default to doing nothing, so an
/// observer only implements what it cares about. Observers only ever see the maze immutably
/// and cannot change the course of a search.
pub trait BfsObserver {
    /// The Start tile is found and alone in the queue.
    fn on_init(&mut self, _maze: &Maze) {}
    /// Called by [Maze::bfs_iterate] before step `step`, counting from 1.
    fn on_iteration(&mut self, _step: usize) {}
    /// The neighbours of `current` are about to be expanded.
    fn on_step_start(&mut self, _current: Coord) {}
    /// `coord` has just been found and queued.
    fn on_tile_found(&mut self, _maze: &Maze, _coord: Coord) {}
    /// `coord` was not expanded, for the reason given.
    fn on_skip(&mut self, _coord: Coord, _reason: Expansion) {}
    /// The front of the queue has been expanded and removed.
    fn on_step_complete(&mut self, _maze: &Maze) {}
    fn on_solution_start(&mut self, _start: Coord) {}
    /// Move `index` of the solution, `dir`, led to `coord`.
    fn on_solution_step(&mut self, _index: usize, _dir: Direction, _coord: Coord) {}
    fn on_solution_end(&mut self, _end: Coord) {}
}

#[derive(Clone, Copy, Debug, Default)]
pub struct NoOpObserver;
impl BfsObserver for NoOpObserver {}

/// Emits `log` records for every event at or below its verbosity `level`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogObserver {
    pub level: u32,
}

impl LogObserver {
    pub fn new(level: u32) -> LogObserver {
        LogObserver { level }
    }
    fn enabled(&self, threshold: u32) -> bool {
        self.level >= threshold
    }
}

impl BfsObserver for LogObserver {
    fn on_init(&mut self, maze: &Maze) {
        if self.enabled(LOG_BFS_STATES) {
            info!("BFS initialization complete\n{}", maze.state_view());
        }
    }
    fn on_iteration(&mut self, step: usize) {
        if self.enabled(LOG_BFS_STEPS) {
            info!("BFS STEP {}", step);
        }
    }
    fn on_step_start(&mut self, current: Coord) {
        if self.enabled(LOG_BFS_STEPS) {
            info!("processing neighbors of {}", current);
        }
    }
    fn on_tile_found(&mut self, maze: &Maze, coord: Coord) {
        if self.enabled(LOG_BFS_PATHS) {
            let path = maze.path_to(coord).unwrap_or_default();
            info!(
                "Found tile at {} with len {} path: {}",
                coord,
                path.len(),
                render_path(&path, PathFormat::Compact)
            );
        }
    }
    fn on_skip(&mut self, coord: Coord, reason: Expansion) {
        if self.enabled(LOG_SKIPPED_TILES) {
            match reason {
                Expansion::Blocked => info!("Skipping BLOCKED tile at {}", coord),
                Expansion::AlreadyFound => info!("Skipping FOUND tile at {}", coord),
                Expansion::Found => {}
            }
        }
    }
    fn on_step_complete(&mut self, maze: &Maze) {
        if self.enabled(LOG_BFS_STATES) {
            info!("maze state after BFS step\n{}", maze.state_view());
        }
    }
    fn on_solution_start(&mut self, start: Coord) {
        if self.enabled(LOG_SET_SOLUTION) {
            info!("solution START at {}", start);
        }
    }
    fn on_solution_step(&mut self, index: usize, dir: Direction, coord: Coord) {
        if self.enabled(LOG_SET_SOLUTION) {
            info!("solution path[{}] is {}, set {} to ONPATH", index, dir, coord);
        }
    }
    fn on_solution_end(&mut self, end: Coord) {
        if self.enabled(LOG_SET_SOLUTION) {
            info!("solution END at {}", end);
        }
    }
}
