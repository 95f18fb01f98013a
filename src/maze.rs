use crate::coord::Coord;
use crate::coord_queue::CoordQueue;
use crate::direction::Direction;
use crate::error::{MazeError, Result};
use crate::tile::{Tile, TileKind};
use core::fmt;
use itertools::Itertools;
use petgraph::unionfind::UnionFind;

/// A rectangular maze of [Tile]s with fixed Start and End positions.
///
/// Besides the tiles the maze owns the frontier queue of the current search and a [UnionFind]
/// structure of its 4-connected open regions, which answers reachability questions without
/// searching. The components are kept up to date when tiles are opened and flagged as dirty
/// when a wall could split a region; call [update](Self::update) before relying on them again.
#[derive(Clone, Debug)]
pub struct Maze {
    pub(crate) rows: usize,
    pub(crate) cols: usize,
    pub(crate) tiles: Vec<Tile>,
    pub(crate) start: Coord,
    pub(crate) end: Coord,
    pub(crate) queue: Option<CoordQueue>,
    pub(crate) components: UnionFind<usize>,
    pub(crate) components_dirty: bool,
}

impl Maze {
    /// Builds a maze of open tiles with Start and End at the given positions.
    pub fn open(rows: usize, cols: usize, start: Coord, end: Coord) -> Result<Maze> {
        let count = tile_count(rows, cols).ok_or(MazeError::TooLarge { rows, cols })?;
        let mut tiles = allocate_tiles(count, TileKind::Open)?;
        let ix_of = |c: Coord| -> Result<usize> {
            if c.row >= 0 && c.col >= 0 && (c.row as usize) < rows && (c.col as usize) < cols {
                Ok(c.row as usize * cols + c.col as usize)
            } else {
                Err(MazeError::OutOfBounds { coord: c, rows, cols })
            }
        };
        let (start_ix, end_ix) = (ix_of(start)?, ix_of(end)?);
        if start_ix == end_ix {
            return Err(MazeError::MarkerTile(end));
        }
        tiles[start_ix].kind = TileKind::Start;
        tiles[end_ix].kind = TileKind::End;
        Ok(Maze::from_parts(rows, cols, tiles, start, end))
    }

    /// Assembles a maze from already validated parts and computes its components.
    pub(crate) fn from_parts(
        rows: usize,
        cols: usize,
        tiles: Vec<Tile>,
        start: Coord,
        end: Coord,
    ) -> Maze {
        debug_assert_eq!(tiles.len(), rows * cols);
        let mut maze = Maze {
            rows,
            cols,
            tiles,
            start,
            end,
            queue: None,
            components: UnionFind::new(0),
            components_dirty: false,
        };
        maze.generate_components();
        maze
    }

    pub fn rows(&self) -> usize {
        self.rows
    }
    pub fn cols(&self) -> usize {
        self.cols
    }
    pub fn start(&self) -> Coord {
        self.start
    }
    pub fn end(&self) -> Coord {
        self.end
    }
    /// The frontier of the current search, if one was started.
    pub fn queue(&self) -> Option<&CoordQueue> {
        self.queue.as_ref()
    }

    pub fn in_bounds(&self, coord: Coord) -> bool {
        coord.row >= 0
            && coord.col >= 0
            && (coord.row as usize) < self.rows
            && (coord.col as usize) < self.cols
    }
    pub(crate) fn get_ix(&self, coord: Coord) -> Option<usize> {
        self.in_bounds(coord)
            .then(|| coord.row as usize * self.cols + coord.col as usize)
    }
    pub(crate) fn checked_ix(&self, coord: Coord) -> Result<usize> {
        self.get_ix(coord).ok_or(MazeError::OutOfBounds {
            coord,
            rows: self.rows,
            cols: self.cols,
        })
    }
    pub fn tile(&self, coord: Coord) -> Option<&Tile> {
        self.get_ix(coord).map(|ix| &self.tiles[ix])
    }
    pub(crate) fn tile_mut(&mut self, coord: Coord) -> Option<&mut Tile> {
        match self.get_ix(coord) {
            Some(ix) => Some(&mut self.tiles[ix]),
            None => None,
        }
    }
    /// Tiles of one row, west to east. `None` past the last row.
    pub fn row(&self, row: usize) -> Option<&[Tile]> {
        (row < self.rows).then(|| &self.tiles[row * self.cols..(row + 1) * self.cols])
    }
    /// Every coordinate in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> {
        (0..self.rows as i32).cartesian_product(0..self.cols as i32).map(Coord::from)
    }

    /// A coordinate is blocked if it lies outside the maze or holds a wall.
    pub fn is_blocked(&self, coord: Coord) -> bool {
        match self.tile(coord) {
            Some(tile) => tile.kind == TileKind::Wall,
            None => true,
        }
    }

    /// Changes the terrain of a tile. Start and End cannot be moved, overwritten or duplicated.
    /// Opening a tile joins it with its open neighbours; adding a wall marks the components
    /// dirty since it may split a region.
    pub fn set_kind(&mut self, coord: Coord, kind: TileKind) -> Result<()> {
        let ix = self.checked_ix(coord)?;
        if kind.is_marker() || self.tiles[ix].kind.is_marker() {
            return Err(MazeError::MarkerTile(coord));
        }
        let blocked = kind == TileKind::Wall;
        if blocked {
            if self.tiles[ix].kind != TileKind::Wall {
                self.components_dirty = true;
            }
        } else {
            for dir in Direction::SEARCH_ORDER {
                let n = coord + dir;
                if !self.is_blocked(n) {
                    let n_ix = self.checked_ix(n)?;
                    self.components.union(ix, n_ix);
                }
            }
        }
        self.tiles[ix].kind = kind;
        Ok(())
    }

    /// Clears the search data of every tile and drops the queue, so the maze can be searched
    /// again. [bfs_init](Self::bfs_init) alone only resets the Start tile.
    pub fn reset_search(&mut self) {
        for tile in self.tiles.iter_mut() {
            tile.forget();
        }
        self.queue = None;
    }

    /// Moves from Start to `coord` as recorded by the search, rebuilt by stepping back along
    /// each tile's arrival direction. `None` if the tile has not been found.
    pub fn path_to(&self, coord: Coord) -> Option<Vec<Direction>> {
        let len = self.tile(coord)?.path_len()?;
        let mut path = Vec::with_capacity(len);
        let mut current = coord;
        while let Some(dir) = self.tile(current).and_then(Tile::arrived_by) {
            if dir == Direction::None || path.len() == len {
                break;
            }
            path.push(dir);
            current = current - dir;
        }
        path.reverse();
        Some(path)
    }

    /// Retrieves the component id of a coordinate.
    pub fn get_component(&self, coord: Coord) -> Option<usize> {
        self.get_ix(coord).map(|ix| self.components.find(ix))
    }
    /// Checks if `a` and `b` are in the same open region.
    pub fn reachable(&self, a: Coord, b: Coord) -> bool {
        !self.unreachable(a, b)
    }
    /// Checks if `a` and `b` are in different regions, or either is blocked.
    pub fn unreachable(&self, a: Coord, b: Coord) -> bool {
        if self.is_blocked(a) || self.is_blocked(b) {
            return true;
        }
        match (self.get_ix(a), self.get_ix(b)) {
            (Some(a_ix), Some(b_ix)) => !self.components.equiv(a_ix, b_ix),
            _ => true,
        }
    }
    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            self.generate_components();
        }
    }
    /// Generates a new [UnionFind] structure and joins every open tile with its open southern
    /// and eastern neighbours.
    pub fn generate_components(&mut self) {
        self.components = UnionFind::new(self.tiles.len());
        self.components_dirty = false;
        let coords = self.coords().collect::<Vec<_>>();
        for coord in coords {
            if self.is_blocked(coord) {
                continue;
            }
            let ix = coord.row as usize * self.cols + coord.col as usize;
            for dir in [Direction::South, Direction::East] {
                let n = coord + dir;
                if !self.is_blocked(n) {
                    let n_ix = n.row as usize * self.cols + n.col as usize;
                    self.components.union(ix, n_ix);
                }
            }
        }
    }
}

/// Number of tiles in a `rows` x `cols` maze, if both fit in a [Coord] and the product fits
/// in `usize`.
pub(crate) fn tile_count(rows: usize, cols: usize) -> Option<usize> {
    if rows > i32::MAX as usize || cols > i32::MAX as usize {
        return None;
    }
    rows.checked_mul(cols)
}

pub(crate) fn allocate_tiles(count: usize, kind: TileKind) -> Result<Vec<Tile>> {
    let mut tiles = Vec::new();
    tiles.try_reserve_exact(count)?;
    tiles.resize(count, Tile::new(kind));
    Ok(tiles)
}

/// Header with the size and markers followed by one character per tile.
impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "maze: {} rows {} cols", self.rows, self.cols)?;
        writeln!(f, "      {} start", self.start)?;
        writeln!(f, "      {} end", self.end)?;
        writeln!(f, "maze tiles:")?;
        for row in self.tiles.chunks(self.cols) {
            writeln!(f, "{}", row.iter().map(|t| t.kind.as_char()).join(""))?;
        }
        Ok(())
    }
}
