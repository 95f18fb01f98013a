//! Reading mazes from the text map format:
//!
//! ```text
//! rows: 3 cols: 5
//! tiles:
//! #####
//! #S E#
//! #####
//! ```
//!
//! Every row must hold exactly `cols` characters from [TILE_CHARS](crate::tile::TILE_CHARS) and
//! the maze must contain exactly one `S` and one `E`.

use crate::coord::Coord;
use crate::error::{MazeError, ParseError, Result};
use crate::maze::{allocate_tiles, tile_count, Maze};
use crate::tile::TileKind;
use log::{debug, info, trace};
use std::fs;
use std::path::Path;
use std::str::FromStr;

impl Maze {
    /// Loads a maze file. A file that cannot be read yields [MazeError::Io], one that is read but
    /// malformed yields [MazeError::Parse].
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Maze> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| MazeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        info!("Loading maze from {}", path.display());
        text.parse()
    }
}

impl FromStr for Maze {
    type Err = MazeError;

    fn from_str(text: &str) -> Result<Maze> {
        let mut lines = text.lines();
        let header = lines
            .next()
            .filter(|l| !l.trim().is_empty())
            .ok_or(ParseError::MissingHeader)?;
        let (rows, cols) = parse_header(header)?;
        debug!("expecting {} rows and {} columns", rows, cols);

        match lines.next().map(str::trim) {
            Some("tiles:") | Some("tiles") => {}
            _ => return Err(ParseError::MissingTilesMarker.into()),
        }
        debug!("beginning to read tiles");

        // Rows are checked against the header before the grid is allocated.
        let body = lines.take(rows).collect::<Vec<_>>();
        if body.len() < rows {
            return Err(ParseError::MissingRow {
                expected: rows,
                found: body.len(),
            }
            .into());
        }
        for (r, line) in body.iter().enumerate() {
            let found = line.chars().count();
            if found != cols {
                return Err(ParseError::RowLength {
                    row: r,
                    expected: cols,
                    found,
                }
                .into());
            }
        }

        let mut tiles = allocate_tiles(rows * cols, TileKind::Unset)?;
        let mut start: Option<Coord> = None;
        let mut end: Option<Coord> = None;
        for (r, line) in body.iter().enumerate() {
            for (c, ch) in line.chars().enumerate() {
                let coord = Coord::new(r as i32, c as i32);
                let kind = TileKind::from_char(ch).ok_or(ParseError::UnknownTile { ch, coord })?;
                trace!("{} has character {:?} type {}", coord, ch, kind as usize);
                let marker = match kind {
                    TileKind::Start => Some(("START", &mut start)),
                    TileKind::End => Some(("END", &mut end)),
                    _ => None,
                };
                if let Some((name, slot)) = marker {
                    if slot.is_some() {
                        return Err(ParseError::DuplicateMarker { marker: name, coord }.into());
                    }
                    debug!("setting {} at {}", name, coord);
                    *slot = Some(coord);
                }
                tiles[r * cols + c].kind = kind;
            }
            trace!("finished reading row {} of tiles", r);
        }

        let start = start.ok_or(ParseError::MissingMarker("START"))?;
        let end = end.ok_or(ParseError::MissingMarker("END"))?;
        Ok(Maze::from_parts(rows, cols, tiles, start, end))
    }
}

/// Parses `rows: <n> cols: <n>`.
fn parse_header(line: &str) -> Result<(usize, usize), ParseError> {
    let invalid = || ParseError::InvalidHeader(line.to_owned());
    let words = line.split_whitespace().collect::<Vec<_>>();
    let (rows, cols) = match words.as_slice() {
        ["rows:", rows, "cols:", cols] => (
            rows.parse::<usize>().map_err(|_| invalid())?,
            cols.parse::<usize>().map_err(|_| invalid())?,
        ),
        _ => return Err(invalid()),
    };
    if rows == 0 || cols == 0 {
        return Err(ParseError::ZeroDimensions { rows, cols });
    }
    tile_count(rows, cols).ok_or_else(invalid)?;
    Ok((rows, cols))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_err(text: &str) -> ParseError {
        match text.parse::<Maze>() {
            Err(MazeError::Parse(e)) => e,
            other => panic!("expected a parse error, got {:?}", other.map(|m| m.to_string())),
        }
    }

    #[test]
    fn parses_small_maze() {
        let maze: Maze = "rows: 3 cols: 5\ntiles:\n#####\n#S E#\n#####\n".parse().unwrap();
        assert_eq!((maze.rows(), maze.cols()), (3, 5));
        assert_eq!(maze.start(), Coord::new(1, 1));
        assert_eq!(maze.end(), Coord::new(1, 3));
        assert_eq!(maze.tile(Coord::new(1, 2)).unwrap().kind(), TileKind::Open);
        assert_eq!(maze.tile(Coord::new(0, 0)).unwrap().kind(), TileKind::Wall);
        assert!(maze.coords().all(|c| !maze.tile(c).unwrap().is_found()));
        assert!(maze.reachable(maze.start(), maze.end()));
    }

    #[test]
    fn accepts_crlf_and_bare_marker() {
        let maze: Maze = "rows: 1 cols: 3\r\ntiles\r\nS?E\r\n".parse().unwrap();
        assert_eq!(maze.tile(Coord::new(0, 1)).unwrap().kind(), TileKind::Unset);
    }

    #[test]
    fn header_errors() {
        assert_eq!(parse_err(""), ParseError::MissingHeader);
        assert!(matches!(parse_err("rows 3 cols 4\ntiles:\n"), ParseError::InvalidHeader(_)));
        assert!(matches!(parse_err("rows: x cols: 4\ntiles:\n"), ParseError::InvalidHeader(_)));
        assert_eq!(
            parse_err("rows: 0 cols: 4\ntiles:\n"),
            ParseError::ZeroDimensions { rows: 0, cols: 4 }
        );
        assert_eq!(parse_err("rows: 1 cols: 2\nSE\n"), ParseError::MissingTilesMarker);
    }

    #[test]
    fn short_input_is_malformed() {
        assert_eq!(
            parse_err("rows: 3 cols: 2\ntiles:\nSE\n##\n"),
            ParseError::MissingRow { expected: 3, found: 2 }
        );
        assert_eq!(
            parse_err("rows: 2 cols: 3\ntiles:\nS E\n#\n"),
            ParseError::RowLength { row: 1, expected: 3, found: 1 }
        );
    }

    #[test]
    fn large_header_with_short_body() {
        assert_eq!(
            parse_err("rows: 1000000000 cols: 1000000000\ntiles:\nSE\n"),
            ParseError::MissingRow { expected: 1_000_000_000, found: 1 }
        );
        assert_eq!(
            parse_err("rows: 6000 cols: 6000\ntiles:\n"),
            ParseError::MissingRow { expected: 6000, found: 0 }
        );
        assert!(matches!(
            parse_err("rows: 4294967296 cols: 2\ntiles:\nSE\n"),
            ParseError::InvalidHeader(_)
        ));
    }

    #[test]
    fn tile_and_marker_errors() {
        assert_eq!(
            parse_err("rows: 1 cols: 3\ntiles:\nSxE\n"),
            ParseError::UnknownTile { ch: 'x', coord: Coord::new(0, 1) }
        );
        assert_eq!(parse_err("rows: 1 cols: 2\ntiles:\nS \n"), ParseError::MissingMarker("END"));
        assert_eq!(parse_err("rows: 1 cols: 2\ntiles:\n E\n"), ParseError::MissingMarker("START"));
        assert_eq!(
            parse_err("rows: 1 cols: 3\ntiles:\nSES\n"),
            ParseError::DuplicateMarker { marker: "START", coord: Coord::new(0, 2) }
        );
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = Maze::from_file("definitely/not/here.maze").unwrap_err();
        assert!(matches!(err, MazeError::Io { .. }));
    }
}
