//! Step throughput: serial vs. parallel rows

use std::time::Instant;
use life_canvas::domain::{Grid, rules, seeding};
use rand::{SeedableRng, rngs::StdRng};

/// Average milliseconds per generation
fn benchmark(size: usize, iterations: u32, step: fn(&Grid, &mut Grid) -> rules::StepStats) -> f64 {
    let mut rng = StdRng::seed_from_u64(2024);
    let Ok(mut grid) = seeding::seed_random(size, size, seeding::DEFAULT_ALIVE_PROBABILITY, &mut rng) else {
        return f64::NAN;
    };
    let mut scratch = grid.clone();

    let start = Instant::now();
    for _ in 0..iterations {
        step(&grid, &mut scratch);
        std::mem::swap(&mut grid, &mut scratch);
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    println!("=== Game of Life Step Benchmark ===\n");

    let sizes = [100, 250, 500, 1000, 2000];
    let iterations = 20;

    println!("{:>10} {:>12} {:>12} {:>10}", "Size", "Serial", "Parallel", "Speedup");
    println!("{:-<48}", "");

    for size in sizes {
        let serial_ms = benchmark(size, iterations, rules::step_into);
        let parallel_ms = benchmark(size, iterations, rules::step_into_parallel);

        println!(
            "{:>10} {:>12.2} {:>12.2} {:>9.1}x",
            format!("{}x{}", size, size),
            serial_ms,
            parallel_ms,
            serial_ms / parallel_ms
        );
    }

    let size = 2000;
    let cells = (size * size) as f64;
    let parallel_ms = benchmark(size, iterations, rules::step_into_parallel);
    println!(
        "\nParallel at {}x{}: {:.2} ms/gen, {:.1}M cells/sec",
        size,
        size,
        parallel_ms,
        cells / (parallel_ms / 1000.0) / 1_000_000.0
    );
}
