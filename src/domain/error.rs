use thiserror::Error;

/// Errors reported by the world, patterns and the session driving them.
/// None of these are transient, so callers should never retry.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LifeError {
    #[error("world dimensions must be positive, got {width}x{height}")]
    InvalidDimension { width: i32, height: i32 },

    #[error("cell ({x}, {y}) is outside the world")]
    OutOfBounds { x: i32, y: i32 },

    #[error("pattern needs at least {min_width}x{min_height} cells, grid is {width}x{height}")]
    PatternTooLarge {
        min_width: i64,
        min_height: i64,
        width: i32,
        height: i32,
    },

    #[error("no pattern named {0:?}")]
    UnknownPattern(String),

    #[error("no pattern at catalog index {0}")]
    PatternIndex(usize),
}
