//! Performance benchmark for the step and extraction paths

use std::time::Instant;

use falling_sand::domain::{InstanceData, TileGrid};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn random_grid(size: usize) -> TileGrid {
    let mut grid = TileGrid::new(size, size).expect("benchmark sizes are non-zero");
    grid.randomize(&mut StdRng::seed_from_u64(size as u64), 0.3);
    grid
}

fn benchmark_step(size: usize, iterations: u32) -> f64 {
    let mut grid = random_grid(size);

    let start = Instant::now();
    for _ in 0..iterations {
        grid.step();
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn benchmark_extract(size: usize, iterations: u32, parallel: bool) -> f64 {
    let grid = random_grid(size);

    let start = Instant::now();
    for _ in 0..iterations {
        let data = if parallel {
            InstanceData::extract_parallel(&grid)
        } else {
            InstanceData::extract(&grid)
        };
        std::hint::black_box(data);
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    println!("=== Falling Sand Performance Benchmark ===\n");

    let sizes = [100, 460, 1000, 2000, 4000];
    let iterations = 20;

    println!("{:>10} {:>12} {:>12} {:>12} {:>10}", "Size", "Step", "Extract", "Extract+Par", "Speedup");
    println!("{:-<62}", "");

    for size in sizes {
        let step_ms = benchmark_step(size, iterations);
        let extract_ms = benchmark_extract(size, iterations, false);
        let extract_par_ms = benchmark_extract(size, iterations, true);

        println!(
            "{:>10} {:>12.2} {:>12.2} {:>12.2} {:>9.1}x",
            format!("{}x{}", size, size),
            step_ms,
            extract_ms,
            extract_par_ms,
            extract_ms / extract_par_ms
        );
    }

    let size = 460;
    let cells = size * size;
    let step_ms = benchmark_step(size, 100);
    println!("\n=== Throughput at {}x{} ===\n", size, size);
    println!("Step: {:.2} ms/gen, {:.1}M cells/sec", step_ms, cells as f64 / (step_ms / 1000.0) / 1_000_000.0);
}
