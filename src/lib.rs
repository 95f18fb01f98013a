//! # maze_bfs
//!
//! Breadth-first maze solving on a 4-connected tile grid. A [Maze] is loaded from a small text
//! format, searched from its Start tile one step at a time or all at once, and the shortest route
//! to its End tile is marked on the tiles. Since every move has the same cost, the first time
//! the search reaches a tile is also the shortest way there.
//!
//! Direction handling is table driven: the offsets and names of every [Direction] live in
//! [DIRECTION_TABLE], and both recording and replaying a path go through it.
//!
//! The maze keeps its open regions in a [UnionFind](petgraph::unionfind::UnionFind) structure,
//! so reachability can be checked without searching. The search reports its progress to a
//! [BfsObserver], either the silent [NoOpObserver] or a [LogObserver] that writes `log` records.
//!
//! ```
//! use maze_bfs::{Maze, NoOpObserver, PathFormat};
//!
//! let mut maze: Maze = "rows: 3 cols: 6\ntiles:\n######\n#S  E#\n######\n".parse().unwrap();
//! assert!(maze.solve(&mut NoOpObserver).unwrap());
//! assert_eq!(maze.render_end_path(PathFormat::Compact), "EEE");
//! ```
mod bfs;
mod coord;
mod coord_queue;
mod direction;
mod error;
mod loader;
mod maze;
mod observer;
mod render;
mod solution;
mod tile;

pub use crate::bfs::{BfsState, Expansion};
pub use crate::coord::Coord;
pub use crate::coord_queue::CoordQueue;
pub use crate::direction::{Direction, DirectionInfo, DIRECTION_COUNT, DIRECTION_TABLE};
pub use crate::error::{
    MazeError, ParseError, Result, EXIT_INTERNAL, EXIT_IO, EXIT_MALFORMED,
};
pub use crate::maze::Maze;
pub use crate::observer::{
    BfsObserver, LogObserver, NoOpObserver, LOG_ALL, LOG_BFS_PATHS, LOG_BFS_STATES,
    LOG_BFS_STEPS, LOG_FILE_LOAD, LOG_SET_SOLUTION, LOG_SKIPPED_TILES,
};
pub use crate::render::{distance_char, render_path, PathFormat, StateView, DIGIT10_CHARS};
pub use crate::tile::{SearchState, Tile, TileKind, TILE_CHARS, TILE_KIND_COUNT};
