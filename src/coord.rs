use crate::direction::Direction;
use core::fmt;
use core::ops::{Add, Sub};
use grid_util::point::Point;

/// A (row, col) position. Signed so that a neighbour one step outside the maze can still be
/// represented and rejected by [Maze::is_blocked](crate::Maze::is_blocked).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    pub const fn new(row: i32, col: i32) -> Coord {
        Coord { row, col }
    }
    /// Number of cardinal moves between two coordinates, ignoring walls.
    pub fn manhattan_distance(&self, other: &Coord) -> i32 {
        Point::from(*self).manhattan_distance(&Point::from(*other))
    }
}

/// Moves one step in `dir`, looked up in the direction table.
impl Add<Direction> for Coord {
    type Output = Coord;
    fn add(self, dir: Direction) -> Coord {
        Coord::new(self.row + dir.row_delta(), self.col + dir.col_delta())
    }
}

/// Steps back against `dir`; used to follow a tile's arrival direction to its parent.
impl Sub<Direction> for Coord {
    type Output = Coord;
    fn sub(self, dir: Direction) -> Coord {
        Coord::new(self.row - dir.row_delta(), self.col - dir.col_delta())
    }
}

/// Columns map to `x` and rows to `y`, the layout used by [grid_util].
impl From<Coord> for Point {
    fn from(c: Coord) -> Point {
        Point::new(c.col, c.row)
    }
}

impl From<Point> for Coord {
    fn from(p: Point) -> Coord {
        Coord::new(p.y, p.x)
    }
}

impl From<(i32, i32)> for Coord {
    fn from((row, col): (i32, i32)) -> Coord {
        Coord::new(row, col)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}
