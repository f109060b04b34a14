use std::thread;

use anyhow::Context;
use clap::Parser;
use life_engine::{Config, Session};
use log::info;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let config = Config::parse();

    let mut session = Session::new(config.width, config.height, config.speed())
        .context("cannot create world")?;

    match config.random {
        Some(density) => {
            session.randomize(&mut config.rng(), density);
            info!("random fill at density {density}");
        }
        None => {
            let pattern = config.pattern()?;
            session
                .load_pattern(pattern)
                .with_context(|| format!("cannot seed {:?}", pattern.name()))?;
        }
    }

    // Fixed timestep: each tick covers exactly one interval.
    let interval = session.interval();
    session.start();
    while session.generation() < config.generations {
        if config.realtime {
            thread::sleep(interval);
        }
        if session.tick(interval) {
            info!(
                "generation {:>5}: {} alive",
                session.generation(),
                session.world().population()
            );
        }
        if session.world().population() == 0 {
            info!("world died out");
            break;
        }
    }
    session.stop();

    let mut cells: Vec<_> = session.world().iter_alive().collect();
    cells.sort_unstable();
    println!(
        "{} generations, {} alive: {:?}",
        session.generation(),
        cells.len(),
        cells
    );
    Ok(())
}
