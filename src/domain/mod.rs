mod cell;
mod error;
mod patterns;
mod world;

pub use cell::Cell;
pub use error::LifeError;
pub use patterns::{Pattern, presets};
pub use world::World;

/// Integer (x, y) position: absolute on a grid, relative inside a pattern.
pub type Coord = (i32, i32);
