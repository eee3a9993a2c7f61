use ferris_sort::output;
use ferris_sort::sorter::{is_sorted, sort};
use rand::Rng;
use std::env;
use std::time::{Duration, Instant};

const SERVICE: &str = "pattern_bench";
const DEFAULT_SIZE: usize = 5_000;
const DEFAULT_RUNS: u32 = 5;

fn random(size: usize) -> Vec<i32> {
    let mut rng = rand::rng();
    (0..size).map(|_| rng.random::<i32>()).collect()
}

fn ascending(size: usize) -> Vec<i32> {
    (0..size as i32).collect()
}

fn descending(size: usize) -> Vec<i32> {
    (0..size as i32).rev().collect()
}

fn all_equal(size: usize) -> Vec<i32> {
    vec![66; size]
}

fn few_distinct(size: usize) -> Vec<i32> {
    let mut rng = rand::rng();
    (0..size).map(|_| rng.random_range(0..8)).collect()
}

const PATTERNS: [(&str, fn(usize) -> Vec<i32>); 5] = [
    ("random", random),
    ("ascending", ascending),
    ("descending", descending),
    ("all_equal", all_equal),
    ("few_distinct", few_distinct),
];

/// Reads `size=N` and `runs=N` style arguments.
fn parse_args() -> (usize, u32) {
    let mut size = DEFAULT_SIZE;
    let mut runs = DEFAULT_RUNS;

    for arg in env::args().skip(1) {
        let Some((key, value)) = arg.split_once('=') else {
            continue;
        };
        match key {
            "size" => size = value.parse().unwrap_or(size),
            "runs" => runs = value.parse().unwrap_or(runs).max(1),
            _ => {}
        }
    }

    (size, runs)
}

fn main() {
    output::init(true);
    let (size, runs) = parse_args();

    // Worst-case inputs recurse once per element.
    if size > 50_000 {
        output::warn(
            SERVICE,
            "Sizes above 50000 may overflow the stack on ascending or descending input",
        );
    }

    output::status(
        SERVICE,
        &format!("Sorting {} elements, best of {} runs", size, runs),
    );

    for (name, generate) in PATTERNS {
        let mut best = Duration::MAX;
        for _ in 0..runs {
            let mut values = generate(size);
            let start = Instant::now();
            sort(&mut values);
            best = best.min(start.elapsed());

            if !is_sorted(&values) {
                output::error(SERVICE, &format!("{}: result is not sorted", name));
                std::process::exit(1);
            }
        }
        output::info(SERVICE, &format!("{:<13} {:>12.3?}", name, best));
    }
}
