use crate::coord::Coord;
use crate::error::Result;
use core::fmt;
use std::collections::VecDeque;

/// FIFO of coordinates forming the BFS frontier. Both ends are O(1).
///
/// The queue is empty exactly when it has neither a front nor a rear element; `len` always
/// equals the number of stored coordinates.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CoordQueue {
    items: VecDeque<Coord>,
}

impl CoordQueue {
    pub fn new() -> CoordQueue {
        CoordQueue {
            items: VecDeque::new(),
        }
    }
    /// Appends `coord` at the rear. Room for the element is reserved fallibly so running out of
    /// memory is reported instead of aborting.
    pub fn add_rear(&mut self, coord: Coord) -> Result<()> {
        self.items.try_reserve(1)?;
        self.items.push_back(coord);
        Ok(())
    }
    /// Front coordinate without removing it.
    pub fn get_front(&self) -> Option<Coord> {
        self.items.front().copied()
    }
    pub fn get_rear(&self) -> Option<Coord> {
        self.items.back().copied()
    }
    /// Drops the front coordinate. Returns `false` if the queue was already empty.
    pub fn remove_front(&mut self) -> bool {
        self.items.pop_front().is_some()
    }
    pub fn len(&self) -> usize {
        self.items.len()
    }
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item = &Coord> + '_ {
        self.items.iter()
    }
}

impl fmt::Display for CoordQueue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "queue count: {}", self.len())?;
        writeln!(f, "NN ROW COL")?;
        for (ix, c) in self.iter().enumerate() {
            writeln!(f, "{:2} {:3} {:3}", ix, c.row, c.col)?;
        }
        Ok(())
    }
}
