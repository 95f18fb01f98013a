//! Text views of a maze for terminals and logs.
//!
//! The tiles view is the [Display](core::fmt::Display) impl of [Maze]; this module adds the
//! search state view and path formatting.

use crate::direction::Direction;
use crate::maze::Maze;
use core::fmt;
use itertools::Itertools;

/// Characters for found tiles whose distance is a multiple of ten: `a` is 10, `b` is 20 and so on.
pub const DIGIT10_CHARS: &str = "0abcdefghijklmnopqrstuvwxyzABCDE%GHIJKLMNOPQR$TUVWXYZ";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PathFormat {
    /// One letter per move, e.g. `NEES`.
    Compact,
    /// The length on its own line, then one indexed line per move.
    Verbose,
}

/// Formats a direction sequence. An empty sequence is still a path (the one to Start itself).
pub fn render_path(path: &[Direction], format: PathFormat) -> String {
    match format {
        PathFormat::Compact => path.iter().map(|d| d.compact_str()).join(""),
        PathFormat::Verbose => {
            let mut out = format!("path length: {}\n", path.len());
            for (ix, dir) in path.iter().enumerate() {
                out.push_str(&format!("{:2}: {}\n", ix, dir.verbose_str()));
            }
            out
        }
    }
}

/// Single character for a found tile at distance `len`.
pub fn distance_char(len: usize) -> char {
    if len % 10 == 0 {
        if let Some(ch) = DIGIT10_CHARS.chars().nth(len / 10) {
            return ch;
        }
    }
    char::from(b'0' + (len % 10) as u8)
}

/// The search progress: found tiles show their distance from Start, the rest their terrain.
pub struct StateView<'a> {
    maze: &'a Maze,
}

impl Maze {
    pub fn state_view(&self) -> StateView<'_> {
        StateView { maze: self }
    }
    /// The End tile's path in the given format, or `No path found`.
    pub fn render_end_path(&self, format: PathFormat) -> String {
        match self.path_to(self.end) {
            Some(path) => render_path(&path, format),
            None => "No path found\n".to_owned(),
        }
    }
}

impl fmt::Display for StateView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let maze = self.maze;
        // Tiles, with the row number to the right
        for (r, row) in maze.tiles.chunks(maze.cols()).enumerate() {
            let line = row
                .iter()
                .map(|tile| match tile.path_len() {
                    Some(len) => distance_char(len),
                    None => tile.kind().as_char(),
                })
                .join("");
            writeln!(f, "{}: {}", line, r)?;
        }
        // Column axis: units, then a tens digit every ten columns
        writeln!(f, "{}", (0..maze.cols()).map(|c| c % 10).join(""))?;
        let tens = (0..maze.cols())
            .map(|c| {
                if c % 10 == 0 {
                    ((c / 10) % 10).to_string()
                } else {
                    " ".to_owned()
                }
            })
            .join("");
        writeln!(f, "{}", tens)?;
        match maze.queue() {
            Some(queue) => write!(f, "{}", queue),
            None => writeln!(f, "null queue"),
        }
    }
}
