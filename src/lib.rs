// Domain layer - World engine and seed patterns
pub mod domain;

// Application layer - Session driven by user events and timer ticks
pub mod application;

pub mod config;

// Re-exports for convenience
pub use application::{CellLayout, Event, Session};
pub use config::Config;
pub use domain::{Cell, Coord, LifeError, Pattern, World, presets};
