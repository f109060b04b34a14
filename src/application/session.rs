use std::collections::HashSet;
use std::time::Duration;

use log::{debug, info, warn};
use rand::Rng;

use crate::domain::{Coord, LifeError, Pattern, World, presets};

/// Slider range for simulation speed; speed 10 is one generation per second.
pub const MIN_SPEED: u32 = 10;
pub const MAX_SPEED: u32 = 100;
pub const SPEED_STEP: u32 = 10;

/// Snap a raw slider value onto the speed grid.
pub fn snap_speed(value: u32) -> u32 {
    let rounded = value.saturating_add(SPEED_STEP / 2) / SPEED_STEP * SPEED_STEP;
    rounded.clamp(MIN_SPEED, MAX_SPEED)
}

/// User input delivered by the presentation layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    CellClicked { x: i32, y: i32 },
    StartStopToggled,
    NextClicked,
    SpeedChanged { value: u32 },
    PatternSelected { index: usize },
}

/// Session drives a World from user events and timer ticks.
/// This is the application layer between the engine and whatever draws it.
pub struct Session {
    world: World,
    is_running: bool,
    generation: u64,
    speed: u32,
    update_timer: Duration,
}

impl Session {
    /// Create a stopped session over an empty world.
    pub fn new(width: i32, height: i32, speed: u32) -> Result<Self, LifeError> {
        let world = World::new(width, height)?;
        info!("new {width}x{height} session");
        Ok(Self {
            world,
            is_running: false,
            generation: 0,
            speed: snap_speed(speed),
            update_timer: Duration::ZERO,
        })
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Snapshot for the renderer, which diffs it against its last frame.
    pub fn alive_cells(&self) -> HashSet<Coord> {
        self.world.alive_cells()
    }

    pub const fn is_running(&self) -> bool {
        self.is_running
    }

    pub const fn generation(&self) -> u64 {
        self.generation
    }

    pub const fn speed(&self) -> u32 {
        self.speed
    }

    /// Text for the start/stop control.
    pub const fn start_stop_label(&self) -> &'static str {
        if self.is_running { "Stop" } else { "Start" }
    }

    /// Time between generations while running.
    pub fn interval(&self) -> Duration {
        Duration::from_millis(10_000 / u64::from(self.speed))
    }

    pub fn start(&mut self) {
        self.is_running = true;
        self.update_timer = Duration::ZERO;
    }

    pub fn stop(&mut self) {
        self.is_running = false;
    }

    pub fn set_speed(&mut self, value: u32) {
        self.speed = snap_speed(value);
        debug!("speed {value} -> {}", self.speed);
    }

    /// Advance exactly one generation.
    pub fn step(&mut self) {
        self.world.advance();
        self.generation += 1;
        debug!(
            "generation {}: {} alive",
            self.generation,
            self.world.population()
        );
    }

    /// Reseed the world from `pattern`, stopping the simulation.
    /// On error the world and counters are unchanged.
    pub fn load_pattern(&mut self, pattern: &Pattern) -> Result<(), LifeError> {
        self.world.seed(pattern)?;
        self.reset_counters();
        info!("loaded pattern {:?}", pattern.name());
        Ok(())
    }

    pub fn randomize<R: Rng>(&mut self, rng: &mut R, density: f64) {
        self.world.randomize(rng, density);
        self.reset_counters();
    }

    fn reset_counters(&mut self) {
        self.is_running = false;
        self.generation = 0;
        self.update_timer = Duration::ZERO;
    }

    /// Apply one user event. Errors leave the session unchanged.
    pub fn handle(&mut self, event: Event) -> Result<(), LifeError> {
        debug!("event {event:?}");
        let result = match event {
            Event::CellClicked { x, y } => self.world.toggle(x, y).map(|_| ()),
            Event::StartStopToggled => {
                if self.is_running {
                    self.stop();
                } else {
                    self.start();
                }
                Ok(())
            }
            Event::NextClicked => {
                self.step();
                Ok(())
            }
            Event::SpeedChanged { value } => {
                self.set_speed(value);
                Ok(())
            }
            Event::PatternSelected { index } => presets::all_patterns()
                .get(index)
                .ok_or(LifeError::PatternIndex(index))
                .and_then(|pattern| self.load_pattern(pattern)),
        };
        result.inspect_err(|err| warn!("rejected {event:?}: {err}"))
    }

    /// Timer hook. Advances at most one generation once `interval()` has
    /// accumulated; returns whether it did. Does nothing while stopped.
    pub fn tick(&mut self, elapsed: Duration) -> bool {
        if !self.is_running {
            return false;
        }

        self.update_timer += elapsed;
        if self.update_timer < self.interval() {
            return false;
        }

        self.update_timer = Duration::ZERO;
        self.step();
        true
    }
}
