use std::borrow::Cow;
use std::fmt;

use super::{Coord, LifeError};

/// A named set of cell offsets around an implicit (0, 0) origin.
/// Pattern space has y growing upward; grid space has y growing downward.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pattern {
    name: Cow<'static, str>,
    cells: Cow<'static, [Coord]>,
}

impl Pattern {
    /// Create a pattern from offsets, keeping their order (duplicates included).
    pub fn new(name: impl Into<String>, cells: impl IntoIterator<Item = Coord>) -> Self {
        Self {
            name: Cow::Owned(name.into()),
            cells: Cow::Owned(cells.into_iter().collect()),
        }
    }

    /// Compile-time pattern over static data, used by the presets.
    pub const fn from_static(name: &'static str, cells: &'static [Coord]) -> Self {
        Self {
            name: Cow::Borrowed(name),
            cells: Cow::Borrowed(cells),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn relative_cells(&self) -> &[Coord] {
        &self.cells
    }

    /// Smallest (width, height) the pattern fits in when centered,
    /// or `None` for an empty pattern.
    pub fn min_size(&self) -> Option<(i64, i64)> {
        let max_dx = self.cells.iter().map(|(dx, _)| dx.unsigned_abs()).max()?;
        let max_dy = self.cells.iter().map(|(_, dy)| dy.unsigned_abs()).max()?;
        Some((1 + 2 * i64::from(max_dx), 1 + 2 * i64::from(max_dy)))
    }

    /// Translate the offsets to absolute coordinates centered on a
    /// `width` x `height` grid, flipping the vertical axis.
    /// Output order follows `relative_cells`.
    pub fn place_on_grid(&self, width: i32, height: i32) -> Result<Vec<Coord>, LifeError> {
        let Some((min_width, min_height)) = self.min_size() else {
            return Ok(Vec::new());
        };
        if i64::from(width) < min_width || i64::from(height) < min_height {
            return Err(LifeError::PatternTooLarge {
                min_width,
                min_height,
                width,
                height,
            });
        }

        // The size check bounds |dx| <= width / 2 and |dy| <= height / 2,
        // so these sums cannot overflow.
        let (cx, cy) = (width / 2, height / 2);
        Ok(self.cells.iter().map(|&(dx, dy)| (dx + cx, -dy + cy)).collect())
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Pattern {:?}>: (", self.name)?;
        for (i, (dx, dy)) in self.cells.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "({dx}, {dy})")?;
        }
        write!(f, ")")
    }
}

/// Seed patterns offered to the user, in menu order.
pub mod presets {
    use super::*;

    /// Empty pattern; selecting it wipes the world.
    pub const CLEAR: Pattern = Pattern::from_static("Clear", &[]);

    /// Moves diagonally (period 4)
    pub const GLIDER: Pattern = Pattern::from_static(
        "Glider",
        &[(1, 0), (0, 1), (-1, -1), (0, -1), (1, -1)],
    );

    pub const SMALL_EXPLODER: Pattern = Pattern::from_static(
        "Small Exploder",
        &[
            (0, 0), (1, 0), (-1, 0),
            (0, 1),
            (-1, -1), (1, -1),
            (0, -2),
        ],
    );

    pub const EXPLODER: Pattern = Pattern::from_static(
        "Exploder",
        &[
            (0, 2), (0, -2),
            (-2, 2), (-2, 1), (-2, 0), (-2, -1), (-2, -2),
            (2, 2), (2, 1), (2, 0), (2, -1), (2, -2),
        ],
    );

    static ALL: [Pattern; 4] = [CLEAR, GLIDER, SMALL_EXPLODER, EXPLODER];

    /// Get all available patterns
    pub fn all_patterns() -> &'static [Pattern] {
        &ALL
    }

    /// `(name, pattern)` pairs for selection menus.
    pub fn catalog() -> Vec<(&'static str, &'static Pattern)> {
        ALL.iter().map(|p| (p.name(), p)).collect()
    }

    /// Look a preset up by its display name.
    pub fn find(name: &str) -> Result<&'static Pattern, LifeError> {
        ALL.iter()
            .find(|p| p.name() == name)
            .ok_or_else(|| LifeError::UnknownPattern(name.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn glider() -> Pattern {
        Pattern::new("Glider", [(1, 0), (0, 1), (-1, -1), (0, -1), (1, -1)])
    }

    #[test]
    fn test_accessors() {
        let pattern = glider();
        assert_eq!(pattern.name(), "Glider");
        assert_eq!(
            pattern.relative_cells(),
            &[(1, 0), (0, 1), (-1, -1), (0, -1), (1, -1)]
        );
    }

    #[test]
    fn test_display() {
        let pattern = Pattern::new("FooBar", [(1, 0), (0, 1)]);
        assert_eq!(pattern.to_string(), r#"<Pattern "FooBar">: ((1, 0), (0, 1))"#);
        assert_eq!(presets::CLEAR.to_string(), r#"<Pattern "Clear">: ()"#);
    }

    #[test]
    fn test_place_on_grid_flips_and_centers() {
        assert_eq!(
            glider().place_on_grid(11, 33).unwrap(),
            vec![(6, 16), (5, 15), (4, 17), (5, 17), (6, 17)]
        );
    }

    #[test]
    fn test_place_empty_pattern_skips_size_check() {
        let empty = Pattern::new("Empty", []);
        assert!(empty.place_on_grid(11, 33).unwrap().is_empty());
        assert!(empty.place_on_grid(0, -5).unwrap().is_empty());
        assert_eq!(empty.min_size(), None);
    }

    #[test]
    fn test_pattern_too_large() {
        let pattern = Pattern::new("FooBar", [(10, 5), (-8, -10)]);
        assert_eq!(pattern.min_size(), Some((21, 21)));
        assert_eq!(
            pattern.place_on_grid(20, 20),
            Err(LifeError::PatternTooLarge {
                min_width: 21,
                min_height: 21,
                width: 20,
                height: 20,
            })
        );
        assert!(pattern.place_on_grid(21, 20).is_err());
        assert_eq!(pattern.place_on_grid(21, 21).unwrap(), vec![(20, 5), (2, 20)]);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let pattern = Pattern::new("Twice", [(0, 0), (0, 0)]);
        assert_eq!(pattern.place_on_grid(3, 3).unwrap(), vec![(1, 1), (1, 1)]);
    }

    #[test]
    fn test_extreme_offsets_do_not_overflow() {
        let pattern = Pattern::new("Far", [(i32::MIN, 0)]);
        assert!(matches!(
            pattern.place_on_grid(i32::MAX, 1),
            Err(LifeError::PatternTooLarge { .. })
        ));
    }

    #[test]
    fn test_catalog_order_and_lookup() {
        let names: Vec<_> = presets::catalog().iter().map(|(name, _)| *name).collect();
        assert_eq!(names, ["Clear", "Glider", "Small Exploder", "Exploder"]);
        assert_eq!(presets::all_patterns().len(), 4);
        assert_eq!(presets::find("Exploder").unwrap(), &presets::EXPLODER);
        assert_eq!(
            presets::find("Gun"),
            Err(LifeError::UnknownPattern("Gun".to_owned()))
        );
    }

    #[test]
    fn test_presets_fit_default_grid() {
        for pattern in presets::all_patterns() {
            assert_eq!(
                pattern.place_on_grid(50, 50).unwrap().len(),
                pattern.relative_cells().len()
            );
        }
    }
}
