use crate::coord::Coord;
use crate::coord_queue::CoordQueue;
use crate::direction::Direction;
use crate::error::{MazeError, Result};
use crate::maze::Maze;
use crate::observer::BfsObserver;
use crate::tile::{Discovery, Tile};
use log::debug;
use smallvec::SmallVec;

/// Lifecycle of the search on a [Maze], derived from its queue.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BfsState {
    /// `bfs_init` has not run, there is no queue.
    Uninitialized,
    /// The frontier is not empty.
    Running,
    /// Every reachable tile has been found and expanded.
    Done,
}

/// Outcome of expanding one neighbour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Expansion {
    /// The neighbour was newly found and queued.
    Found,
    /// Outside the maze or a wall.
    Blocked,
    /// Found earlier, at a distance no larger than this route offers.
    AlreadyFound,
}

impl Expansion {
    pub fn is_found(self) -> bool {
        self == Expansion::Found
    }
}

impl Maze {
    pub fn bfs_state(&self) -> BfsState {
        match &self.queue {
            None => BfsState::Uninitialized,
            Some(q) if q.is_empty() => BfsState::Done,
            Some(_) => BfsState::Running,
        }
    }

    /// Starts a search: Start is found with an empty path and becomes the only queued tile. A
    /// previous queue is replaced, but tiles found by an earlier run stay found; use
    /// [reset_search](Self::reset_search) first to search the same maze again.
    pub fn bfs_init<O>(&mut self, observer: &mut O) -> Result<()>
    where
        O: BfsObserver + ?Sized,
    {
        let mut queue = CoordQueue::new();
        queue.add_rear(self.start)?;
        let start_ix = self.checked_ix(self.start)?;
        self.tiles[start_ix].discovery = Some(Discovery {
            len: 0,
            arrived_by: Direction::None,
        });
        self.queue = Some(queue);
        observer.on_init(self);
        Ok(())
    }

    /// Looks at the neighbour of `current` in direction `dir`. If it is open and not yet found,
    /// its path becomes the path of `current` plus `dir`, it is marked found and queued. Found
    /// tiles are never revisited, so every tile keeps the path from its first and therefore
    /// shallowest discovery.
    ///
    /// `current` must itself be found by the running search.
    pub fn bfs_process_neighbor<O>(
        &mut self,
        current: Coord,
        dir: Direction,
        observer: &mut O,
    ) -> Result<Expansion>
    where
        O: BfsObserver + ?Sized,
    {
        if self.queue.is_none() {
            return Err(MazeError::SearchNotStarted);
        }
        let current_len = self
            .tile(current)
            .and_then(Tile::path_len)
            .ok_or(MazeError::NotFound(current))?;
        let next = current + dir;
        if self.is_blocked(next) {
            observer.on_skip(next, Expansion::Blocked);
            return Ok(Expansion::Blocked);
        }
        let ix = self.checked_ix(next)?;
        if self.tiles[ix].is_found() {
            observer.on_skip(next, Expansion::AlreadyFound);
            return Ok(Expansion::AlreadyFound);
        }
        // Queue first: if that fails the tile is left untouched.
        if let Some(queue) = self.queue.as_mut() {
            queue.add_rear(next)?;
        }
        self.tiles[ix].discovery = Some(Discovery {
            len: current_len + 1,
            arrived_by: dir,
        });
        observer.on_tile_found(self, next);
        Ok(Expansion::Found)
    }

    /// Expands the tile at the front of the queue in north, south, west, east order, then
    /// removes it. Returns the tiles found by this step.
    ///
    /// Stepping a search whose queue is empty is an error, not a way to detect the end of the
    /// search; check [bfs_state](Self::bfs_state) instead.
    pub fn bfs_step<O>(&mut self, observer: &mut O) -> Result<SmallVec<[Coord; 4]>>
    where
        O: BfsObserver + ?Sized,
    {
        let current = self
            .queue
            .as_ref()
            .ok_or(MazeError::SearchNotStarted)?
            .get_front()
            .ok_or(MazeError::EmptyQueue)?;
        observer.on_step_start(current);
        let mut found = SmallVec::new();
        for dir in Direction::SEARCH_ORDER {
            if self.bfs_process_neighbor(current, dir, observer)?.is_found() {
                found.push(current + dir);
            }
        }
        if let Some(queue) = self.queue.as_mut() {
            queue.remove_front();
        }
        observer.on_step_complete(self);
        Ok(found)
    }

    /// Runs a complete search from Start: afterwards every reachable tile, End included, holds
    /// its shortest path. Returns the number of steps taken, one per reachable tile.
    pub fn bfs_iterate<O>(&mut self, observer: &mut O) -> Result<usize>
    where
        O: BfsObserver + ?Sized,
    {
        self.bfs_init(observer)?;
        let mut steps = 0;
        while self.bfs_state() == BfsState::Running {
            steps += 1;
            observer.on_iteration(steps);
            self.bfs_step(observer)?;
        }
        debug!("BFS finished after {} steps", steps);
        Ok(steps)
    }

    /// Searches the maze and marks the solution. Returns whether End was reached.
    pub fn solve<O>(&mut self, observer: &mut O) -> Result<bool>
    where
        O: BfsObserver + ?Sized,
    {
        self.bfs_iterate(observer)?;
        self.set_solution(observer)
    }
}
