use core::fmt;

/// A single move on the maze grid. [Direction::None] marks the Start tile, which is not
/// entered from anywhere.
///
/// Every per-direction property is looked up in [DIRECTION_TABLE] by discriminant, so recording
/// a path and replaying it always agree on what a direction means.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Direction {
    None = 0,
    North = 1,
    South = 2,
    West = 3,
    East = 4,
}

/// Row/column offset and display names of a [Direction].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DirectionInfo {
    pub row_delta: i32,
    pub col_delta: i32,
    pub compact: &'static str,
    pub verbose: &'static str,
}

pub const DIRECTION_COUNT: usize = 5;

pub const DIRECTION_TABLE: [DirectionInfo; DIRECTION_COUNT] = [
    DirectionInfo { row_delta: 0, col_delta: 0, compact: "?", verbose: "NONE" },
    DirectionInfo { row_delta: -1, col_delta: 0, compact: "N", verbose: "NORTH" },
    DirectionInfo { row_delta: 1, col_delta: 0, compact: "S", verbose: "SOUTH" },
    DirectionInfo { row_delta: 0, col_delta: -1, compact: "W", verbose: "WEST" },
    DirectionInfo { row_delta: 0, col_delta: 1, compact: "E", verbose: "EAST" },
];

impl Direction {
    /// Order in which the neighbours of a tile are expanded.
    pub const SEARCH_ORDER: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::West,
        Direction::East,
    ];

    #[inline]
    pub fn info(self) -> &'static DirectionInfo {
        &DIRECTION_TABLE[self as usize]
    }
    #[inline]
    pub fn row_delta(self) -> i32 {
        self.info().row_delta
    }
    #[inline]
    pub fn col_delta(self) -> i32 {
        self.info().col_delta
    }
    pub fn compact_str(self) -> &'static str {
        self.info().compact
    }
    pub fn verbose_str(self) -> &'static str {
        self.info().verbose
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.verbose_str())
    }
}
