//! Measures `World::advance` on randomly filled worlds.

use std::time::Instant;

use life_engine::World;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn benchmark_advance(size: i32, density: f64, iterations: u32) -> anyhow::Result<(f64, usize)> {
    let mut rng = StdRng::seed_from_u64(42);
    let mut world = World::new(size, size)?;
    world.randomize(&mut rng, density);
    let population = world.population();

    let start = Instant::now();
    for _ in 0..iterations {
        world.advance();
    }
    Ok((start.elapsed().as_secs_f64() * 1000.0 / f64::from(iterations), population))
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    println!("=== World::advance benchmark ===\n");

    let sizes = [50, 100, 200, 500, 1000];
    let densities = [0.05, 0.3];
    let iterations = 20;

    println!("{:>10} {:>8} {:>12} {:>12} {:>14}", "Size", "Density", "Alive", "ms/gen", "Mcells/sec");
    println!("{:-<60}", "");

    for size in sizes {
        for density in densities {
            let (ms, population) = benchmark_advance(size, density, iterations)?;
            let cells = f64::from(size) * f64::from(size);
            println!(
                "{:>10} {:>8.2} {:>12} {:>12.3} {:>14.1}",
                format!("{size}x{size}"),
                density,
                population,
                ms,
                cells / (ms / 1000.0) / 1_000_000.0
            );
        }
    }
    Ok(())
}
