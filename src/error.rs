//! Error types for loading and searching mazes.
//!
//! An unreachable End tile is not an error: the search finishes normally and
//! [Maze::set_solution](crate::Maze::set_solution) reports `false`.

use crate::coord::Coord;
use std::collections::TryReserveError;
use std::path::PathBuf;
use thiserror::Error;

/// Exit code used by the command line tool when the maze file cannot be read.
pub const EXIT_IO: i32 = 1;
/// Exit code used when the maze file is read but malformed.
pub const EXIT_MALFORMED: i32 = 2;
/// Exit code for every other failure.
pub const EXIT_INTERNAL: i32 = 3;

#[derive(Debug, Error)]
pub enum MazeError {
    /// The maze file could not be opened or read.
    #[error("could not read maze file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The maze text does not follow the map format.
    #[error("malformed maze: {0}")]
    Parse(#[from] ParseError),

    /// A step was requested while the search queue is empty.
    #[error("BFS queue is empty, cannot step")]
    EmptyQueue,

    /// A search operation ran before `bfs_init`.
    #[error("no search has been started on this maze")]
    SearchNotStarted,

    /// Expansion was requested from a tile the search has not reached.
    #[error("tile at {0} has not been found by the search")]
    NotFound(Coord),

    #[error("{coord} is outside the {rows}x{cols} maze")]
    OutOfBounds { coord: Coord, rows: usize, cols: usize },

    /// Start and End are fixed once the maze is loaded.
    #[error("tile at {0} is a start/end marker and cannot be changed")]
    MarkerTile(Coord),

    /// The dimensions do not fit in a [Coord] or their product overflows.
    #[error("a {rows}x{cols} maze is too large")]
    TooLarge { rows: usize, cols: usize },

    #[error("out of memory: {0}")]
    OutOfMemory(#[from] TryReserveError),
}

impl MazeError {
    /// Process exit code for this error. I/O failures and malformed files are kept apart so
    /// scripts can tell them from each other.
    pub fn exit_code(&self) -> i32 {
        match self {
            MazeError::Io { .. } => EXIT_IO,
            MazeError::Parse(_) => EXIT_MALFORMED,
            _ => EXIT_INTERNAL,
        }
    }
}

/// What exactly is wrong with a maze text. Row indexes count tile rows from 0, after the
/// header and the `tiles:` marker.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("missing `rows: <n> cols: <n>` header")]
    MissingHeader,

    #[error("invalid header line {0:?}")]
    InvalidHeader(String),

    #[error("maze must have at least one row and one column, got {rows}x{cols}")]
    ZeroDimensions { rows: usize, cols: usize },

    #[error("missing `tiles:` marker on line 2")]
    MissingTilesMarker,

    #[error("expected {expected} rows of tiles but the input ends after {found}")]
    MissingRow { expected: usize, found: usize },

    #[error("row {row} has {found} tiles, expected {expected}")]
    RowLength { row: usize, expected: usize, found: usize },

    #[error("unknown tile character {ch:?} at {coord}")]
    UnknownTile { ch: char, coord: Coord },

    #[error("maze has no {0} tile")]
    MissingMarker(&'static str),

    #[error("second {marker} tile at {coord}")]
    DuplicateMarker { marker: &'static str, coord: Coord },
}

pub type Result<T, E = MazeError> = std::result::Result<T, E>;
