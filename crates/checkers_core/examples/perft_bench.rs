//! Perft benchmark for profiling with cargo-flamegraph.
//!
//! Usage:
//!   cargo flamegraph --example perft_bench -p checkers_core -- [depth]
//!
//! Examples:
//!   # Default: depth 7 from every test position
//!   cargo flamegraph --example perft_bench -p checkers_core
//!
//!   # Custom depth
//!   cargo flamegraph --example perft_bench -p checkers_core -- 9

use checkers_core::{Position, Side, perft};
use std::env;
use std::time::Instant;

/// Test positions as diagram rows joined by '/'
const TEST_POSITIONS: &[(&str, &str, Side)] = &[
    (
        "Starting position",
        ".d.d.d.d/d.d.d.d./.d.d.d.d/......../......../l.l.l.l./.l.l.l.l/l.l.l.l.",
        Side::Dark,
    ),
    (
        "Opened centre",
        ".d.d.d.d/d.d...d./.d...d.d/..d...../.l.l..../l...l.../.l.l.l.l/l.l.l.l.",
        Side::Light,
    ),
    (
        "Kings",
        "......../..l...../...D..../....l.../.....L../..d...../......../........",
        Side::Dark,
    ),
];

fn main() {
    let args: Vec<String> = env::args().collect();
    let depth: u8 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(7);

    println!("Perft benchmark at depth {}", depth);
    println!("{}", "=".repeat(60));

    let mut total_nodes = 0u64;
    let total_start = Instant::now();

    for (name, rows, side) in TEST_POSITIONS {
        let pos = match Position::from_diagram(&rows.replace('/', "\n")) {
            Ok(pos) => pos,
            Err(e) => {
                eprintln!("Skipping {}: {}", name, e);
                continue;
            }
        };
        let start = Instant::now();
        let nodes = perft(&pos, *side, depth);
        let elapsed = start.elapsed();
        total_nodes += nodes;

        println!(
            "{:<20} {:>12} nodes  {:>10.3?}  ({:.2} Mn/s)",
            name,
            nodes,
            elapsed,
            (nodes as f64 / 1_000_000.0) / elapsed.as_secs_f64().max(1e-9)
        );
    }

    let total_elapsed = total_start.elapsed();
    println!("{}", "=".repeat(60));
    println!(
        "Total: {} nodes in {:.3?} ({:.2} Mn/s)",
        total_nodes,
        total_elapsed,
        (total_nodes as f64 / 1_000_000.0) / total_elapsed.as_secs_f64().max(1e-9)
    );
}
