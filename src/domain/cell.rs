/// State of a single grid position.
/// A position absent from the world's alive set is `Dead`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Cell {
    Dead,
    Alive,
}

impl Cell {
    pub const fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }

    pub const fn toggle(self) -> Self {
        match self {
            Cell::Alive => Cell::Dead,
            Cell::Dead => Cell::Alive,
        }
    }

    /// Next state under B3/S23:
    /// 1. Live cell with 2-3 live neighbors survives
    /// 2. Dead cell with exactly 3 live neighbors becomes alive
    /// 3. Everything else is dead next generation
    pub const fn evolve(self, live_neighbors: u8) -> Self {
        match (self, live_neighbors) {
            (Cell::Alive, 2 | 3) => Cell::Alive,
            (Cell::Dead, 3) => Cell::Alive,
            _ => Cell::Dead,
        }
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive { Cell::Alive } else { Cell::Dead }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_isolation() {
        assert_eq!(Cell::Alive.evolve(0), Cell::Dead);
        assert_eq!(Cell::Alive.evolve(1), Cell::Dead);
    }

    #[test]
    fn test_survival() {
        assert_eq!(Cell::Alive.evolve(2), Cell::Alive);
        assert_eq!(Cell::Alive.evolve(3), Cell::Alive);
    }

    #[test]
    fn test_overpopulation() {
        for n in 4..=8 {
            assert_eq!(Cell::Alive.evolve(n), Cell::Dead);
        }
    }

    #[test]
    fn test_birth_needs_exactly_three() {
        assert_eq!(Cell::Dead.evolve(3), Cell::Alive);
        for n in [0, 1, 2, 4, 5, 6, 7, 8] {
            assert_eq!(Cell::Dead.evolve(n), Cell::Dead);
        }
    }

    #[test]
    fn test_toggle_and_from_bool() {
        assert_eq!(Cell::Dead.toggle(), Cell::Alive);
        assert_eq!(Cell::Alive.toggle(), Cell::Dead);
        assert_eq!(Cell::from(true), Cell::Alive);
        assert!(!Cell::from(false).is_alive());
    }
}
