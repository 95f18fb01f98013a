use crate::coord::Coord;
use crate::direction::Direction;
use crate::error::{MazeError, Result};
use crate::maze::Maze;
use crate::observer::BfsObserver;
use crate::tile::TileKind;
use log::debug;

impl Maze {
    /// Coordinate reached by following `path` from Start.
    pub fn replay(&self, path: &[Direction]) -> Coord {
        path.iter().fold(self.start, |c, &dir| c + dir)
    }

    /// Marks the route stored in the End tile as [TileKind::OnPath], walking it from Start with
    /// the same direction table the search recorded it with. Start and End keep their kind.
    ///
    /// Returns `false` without touching the maze if End was not reached. Calling this before
    /// any search has been started is an error.
    pub fn set_solution<O>(&mut self, observer: &mut O) -> Result<bool>
    where
        O: BfsObserver + ?Sized,
    {
        if self.queue.is_none() {
            return Err(MazeError::SearchNotStarted);
        }
        let Some(path) = self.path_to(self.end) else {
            debug!("End tile {} was not reached", self.end);
            return Ok(false);
        };
        observer.on_solution_start(self.start);
        let mut current = self.start;
        for (ix, &dir) in path.iter().enumerate() {
            current = current + dir;
            let tile_ix = self.checked_ix(current)?;
            let tile = &mut self.tiles[tile_ix];
            if !tile.kind.is_marker() {
                tile.kind = TileKind::OnPath;
            }
            observer.on_solution_step(ix, dir, current);
        }
        debug_assert_eq!(current, self.end);
        observer.on_solution_end(self.end);
        Ok(true)
    }

    /// Number of tiles currently marked as part of the solution.
    pub fn on_path_count(&self) -> usize {
        self.tiles
            .iter()
            .filter(|t| t.kind == TileKind::OnPath)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::NoOpObserver;

    #[derive(Default)]
    struct Recorder {
        steps: Vec<(usize, Direction, Coord)>,
        ends: Vec<Coord>,
    }

    impl BfsObserver for Recorder {
        fn on_solution_start(&mut self, start: Coord) {
            self.ends.push(start);
        }
        fn on_solution_step(&mut self, index: usize, dir: Direction, coord: Coord) {
            self.steps.push((index, dir, coord));
        }
        fn on_solution_end(&mut self, end: Coord) {
            self.ends.push(end);
        }
    }

    #[test]
    fn marks_route_between_markers() {
        // |S E|
        let mut maze = Maze::open(1, 4, Coord::new(0, 0), Coord::new(0, 3)).unwrap();
        maze.bfs_iterate(&mut NoOpObserver).unwrap();
        let mut recorder = Recorder::default();
        assert!(maze.set_solution(&mut recorder).unwrap());
        assert_eq!(maze.on_path_count(), 2);
        assert_eq!(maze.tile(maze.start()).unwrap().kind(), TileKind::Start);
        assert_eq!(maze.tile(maze.end()).unwrap().kind(), TileKind::End);
        assert_eq!(recorder.ends, vec![Coord::new(0, 0), Coord::new(0, 3)]);
        assert_eq!(
            recorder.steps,
            vec![
                (0, Direction::East, Coord::new(0, 1)),
                (1, Direction::East, Coord::new(0, 2)),
                (2, Direction::East, Coord::new(0, 3)),
            ]
        );
    }

    #[test]
    fn unreached_end_changes_nothing() {
        let mut maze = Maze::open(1, 3, Coord::new(0, 0), Coord::new(0, 2)).unwrap();
        maze.set_kind(Coord::new(0, 1), TileKind::Wall).unwrap();
        maze.bfs_iterate(&mut NoOpObserver).unwrap();
        let before = maze.tiles.clone();
        assert!(!maze.set_solution(&mut NoOpObserver).unwrap());
        assert_eq!(maze.tiles, before);
        assert_eq!(maze.on_path_count(), 0);
    }

    #[test]
    fn solution_before_search_is_an_error() {
        let mut maze = Maze::open(1, 2, Coord::new(0, 0), Coord::new(0, 1)).unwrap();
        assert!(matches!(
            maze.set_solution(&mut NoOpObserver),
            Err(MazeError::SearchNotStarted)
        ));
    }

    #[test]
    fn replay_follows_direction_table() {
        let maze = Maze::open(3, 3, Coord::new(1, 1), Coord::new(0, 0)).unwrap();
        let path = [Direction::North, Direction::West, Direction::South];
        assert_eq!(maze.replay(&path), Coord::new(1, 0));
        assert_eq!(maze.replay(&[]), maze.start());
    }
}
