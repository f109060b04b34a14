use std::collections::HashSet;

use log::{debug, trace};
use rand::Rng;

use super::{Cell, Coord, LifeError, Pattern};

/// Moore neighborhood offsets, (0, 0) excluded.
const NEIGHBOR_OFFSETS: [Coord; 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1, 0),           (1, 0),
    (-1, 1),  (0, 1),  (1, 1),
];

/// World owns a bounded grid of cells and the generation step.
/// Only live cells are stored; edges are hard boundaries (no wrapping).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct World {
    width: i32,
    height: i32,
    alive: HashSet<Coord>,
}

impl World {
    /// Create an empty world. Both dimensions must be positive.
    pub fn new(width: i32, height: i32) -> Result<Self, LifeError> {
        if width <= 0 || height <= 0 {
            return Err(LifeError::InvalidDimension { width, height });
        }
        Ok(Self {
            width,
            height,
            alive: HashSet::new(),
        })
    }

    pub const fn size(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    const fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width && y >= 0 && y < self.height
    }

    fn validate_in_bounds(&self, x: i32, y: i32) -> Result<(), LifeError> {
        if self.contains(x, y) {
            Ok(())
        } else {
            Err(LifeError::OutOfBounds { x, y })
        }
    }

    pub fn is_alive(&self, x: i32, y: i32) -> Result<bool, LifeError> {
        self.validate_in_bounds(x, y)?;
        Ok(self.alive.contains(&(x, y)))
    }

    /// Owned snapshot of every live cell; unordered.
    pub fn alive_cells(&self) -> HashSet<Coord> {
        self.alive.clone()
    }

    /// Borrowing view of the live cells, for callers that only read.
    pub fn iter_alive(&self) -> impl Iterator<Item = Coord> + '_ {
        self.alive.iter().copied()
    }

    pub fn population(&self) -> usize {
        self.alive.len()
    }

    pub fn set_alive(&mut self, x: i32, y: i32) -> Result<(), LifeError> {
        self.validate_in_bounds(x, y)?;
        self.alive.insert((x, y));
        Ok(())
    }

    /// Killing an already dead cell is a no-op.
    pub fn set_dead(&mut self, x: i32, y: i32) -> Result<(), LifeError> {
        self.validate_in_bounds(x, y)?;
        self.alive.remove(&(x, y));
        Ok(())
    }

    /// Flip a cell and return its new state.
    pub fn toggle(&mut self, x: i32, y: i32) -> Result<Cell, LifeError> {
        let next = Cell::from(self.is_alive(x, y)?).toggle();
        match next {
            Cell::Alive => self.alive.insert((x, y)),
            Cell::Dead => self.alive.remove(&(x, y)),
        };
        Ok(next)
    }

    pub fn clear(&mut self) {
        self.alive.clear();
    }

    /// Replace the world's contents with `pattern`, centered on the grid.
    /// The world is left untouched if the pattern does not fit.
    pub fn seed(&mut self, pattern: &Pattern) -> Result<(), LifeError> {
        let cells = pattern.place_on_grid(self.width, self.height)?;
        debug!("seeding {} cells from {:?}", cells.len(), pattern.name());
        self.alive = cells.into_iter().collect();
        Ok(())
    }

    /// Fill every cell alive with probability `density` (clamped to [0, 1]).
    pub fn randomize<R: Rng>(&mut self, rng: &mut R, density: f64) {
        let density = if density.is_nan() { 0.0 } else { density.clamp(0.0, 1.0) };
        let (width, height) = self.size();
        self.alive = (0..height)
            .flat_map(|y| (0..width).map(move |x| (x, y)))
            .filter(|_| rng.random_bool(density))
            .collect();
        debug!("randomized world to {} live cells", self.alive.len());
    }

    /// In-bounds Moore neighbors of (x, y): 8 inside, 5 on an edge, 3 in a corner.
    fn neighbors(&self, x: i32, y: i32) -> impl Iterator<Item = Coord> + '_ {
        NEIGHBOR_OFFSETS
            .into_iter()
            .map(move |(dx, dy)| (x + dx, y + dy))
            .filter(move |&(nx, ny)| self.contains(nx, ny))
    }

    fn count_live_neighbors(&self, x: i32, y: i32) -> u8 {
        self.neighbors(x, y)
            .filter(|pos| self.alive.contains(pos))
            .count() as u8
    }

    /// Compute the next generation synchronously.
    ///
    /// Only neighbors of live cells are evaluated: a cell with no live
    /// neighbor is dead next generation whatever its current state.
    /// Every count reads the current alive set, which is replaced only
    /// once all candidates are decided.
    pub fn advance(&mut self) {
        let candidates: HashSet<Coord> = self
            .alive
            .iter()
            .flat_map(|&(x, y)| self.neighbors(x, y))
            .collect();

        let next: HashSet<Coord> = candidates
            .into_iter()
            .filter(|&(x, y)| {
                let current = Cell::from(self.alive.contains(&(x, y)));
                current.evolve(self.count_live_neighbors(x, y)).is_alive()
            })
            .collect();

        trace!("advance: {} -> {} live cells", self.alive.len(), next.len());
        self.alive = next;
    }
}
