//! Runtime configuration for the driver binaries.

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::application::{MAX_SPEED, MIN_SPEED, snap_speed};
use crate::domain::{LifeError, Pattern, presets};

pub const DEFAULT_WIDTH: i32 = 50;
pub const DEFAULT_HEIGHT: i32 = 50;
pub const DEFAULT_SPEED: u32 = 50;

#[derive(Debug, Clone, Parser)]
#[command(name = "life-engine", about = "Conway's Game of Life on a bounded grid")]
pub struct Config {
    /// Grid width in cells
    #[arg(long, default_value_t = DEFAULT_WIDTH, allow_negative_numbers = true)]
    pub width: i32,

    /// Grid height in cells
    #[arg(long, default_value_t = DEFAULT_HEIGHT, allow_negative_numbers = true)]
    pub height: i32,

    /// Simulation speed, 10 (one generation per second) to 100
    #[arg(
        long,
        default_value_t = DEFAULT_SPEED,
        value_parser = clap::value_parser!(u32).range(i64::from(MIN_SPEED)..=i64::from(MAX_SPEED))
    )]
    pub speed: u32,

    /// Preset to seed the world with
    #[arg(long, default_value = "Glider")]
    pub pattern: String,

    /// Fill the world randomly with this density instead of a preset
    #[arg(long, conflicts_with = "pattern")]
    pub random: Option<f64>,

    /// RNG seed for --random
    #[arg(long, requires = "random")]
    pub seed: Option<u64>,

    /// Number of generations to run
    #[arg(long, default_value_t = 100)]
    pub generations: u64,

    /// Sleep between generations instead of running as fast as possible
    #[arg(long)]
    pub realtime: bool,
}

impl Config {
    /// Speed snapped to the slider grid.
    pub fn speed(&self) -> u32 {
        snap_speed(self.speed)
    }

    pub fn pattern(&self) -> Result<&'static Pattern, LifeError> {
        presets::find(&self.pattern)
    }

    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}
