use crate::direction::Direction;

/// Number of [TileKind] variants.
pub const TILE_KIND_COUNT: usize = 6;

/// Character used for each [TileKind], indexed by discriminant. Loading a maze searches this
/// table and rendering indexes into it.
pub const TILE_CHARS: [char; TILE_KIND_COUNT] = ['?', '#', ' ', '.', 'S', 'E'];

/// Terrain of a tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum TileKind {
    #[default]
    Unset = 0,
    Wall = 1,
    Open = 2,
    OnPath = 3,
    Start = 4,
    End = 5,
}

impl TileKind {
    pub const ALL: [TileKind; TILE_KIND_COUNT] = [
        TileKind::Unset,
        TileKind::Wall,
        TileKind::Open,
        TileKind::OnPath,
        TileKind::Start,
        TileKind::End,
    ];

    pub fn as_char(self) -> char {
        TILE_CHARS[self as usize]
    }
    pub fn from_char(ch: char) -> Option<TileKind> {
        TILE_CHARS
            .iter()
            .position(|&c| c == ch)
            .map(|ix| TileKind::ALL[ix])
    }
    /// Start and End are placed once at load time.
    pub fn is_marker(self) -> bool {
        matches!(self, TileKind::Start | TileKind::End)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SearchState {
    #[default]
    NotFound,
    Found,
}

/// Where the search first reached a tile: the hop count from Start and the move that led here.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Discovery {
    pub len: usize,
    pub arrived_by: Direction,
}

/// One cell of a [Maze](crate::Maze).
///
/// Instead of owning a copy of its whole path, a found tile stores how it was entered. Following
/// those moves backwards always ends at Start, so the path can be rebuilt on demand with
/// [Maze::path_to](crate::Maze::path_to).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Tile {
    pub(crate) kind: TileKind,
    pub(crate) discovery: Option<Discovery>,
}

impl Tile {
    pub fn new(kind: TileKind) -> Tile {
        Tile {
            kind,
            discovery: None,
        }
    }
    pub fn kind(&self) -> TileKind {
        self.kind
    }
    pub fn state(&self) -> SearchState {
        if self.discovery.is_some() {
            SearchState::Found
        } else {
            SearchState::NotFound
        }
    }
    pub fn is_found(&self) -> bool {
        self.discovery.is_some()
    }
    /// Length of the shortest path from Start, once found.
    pub fn path_len(&self) -> Option<usize> {
        self.discovery.map(|d| d.len)
    }
    /// Last move of the path to this tile; [Direction::None] for the Start tile.
    pub fn arrived_by(&self) -> Option<Direction> {
        self.discovery.map(|d| d.arrived_by)
    }
    pub(crate) fn forget(&mut self) {
        self.discovery = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn char_table_round_trips() {
        for kind in TileKind::ALL {
            assert_eq!(TileKind::from_char(kind.as_char()), Some(kind));
        }
        assert_eq!(TileKind::from_char('x'), None);
        assert_eq!(TileKind::from_char(' '), Some(TileKind::Open));
    }

    #[test]
    fn new_tiles_are_unfound() {
        let tile = Tile::new(TileKind::Open);
        assert_eq!(tile.state(), SearchState::NotFound);
        assert_eq!(tile.path_len(), None);
        assert_eq!(tile.arrived_by(), None);
    }

    #[test]
    fn found_state_follows_discovery() {
        let mut tile = Tile::new(TileKind::End);
        tile.discovery = Some(Discovery {
            len: 3,
            arrived_by: Direction::East,
        });
        assert_eq!(tile.state(), SearchState::Found);
        assert_eq!(tile.path_len(), Some(3));
        tile.forget();
        assert!(!tile.is_found());
    }

    #[test]
    fn compact_layout() {
        use std::mem::size_of;
        assert_eq!(size_of::<TileKind>(), 1);
        assert_eq!(size_of::<Direction>(), 1);
        // Direction leaves room for the `None` of the option
        assert_eq!(size_of::<Option<Discovery>>(), size_of::<Discovery>());
        assert_eq!(size_of::<Discovery>(), 2 * size_of::<usize>());
    }
}
