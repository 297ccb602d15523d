//! Move generation benchmark for profiling with cargo-flamegraph.
//!
//! Runs `legal_moves_into` for both sides many times on a handful of
//! positions from different game phases.
//!
//! Usage:
//!   cargo flamegraph --example movegen_bench -p checkers_core

use checkers_core::{Position, Side, legal_moves_into};
use std::time::Instant;

/// Diagram rows joined by '/'
const TEST_POSITIONS: &[(&str, &str)] = &[
    (
        "Start",
        ".d.d.d.d/d.d.d.d./.d.d.d.d/......../......../l.l.l.l./.l.l.l.l/l.l.l.l.",
    ),
    (
        "Opened centre",
        ".d.d.d.d/d.d...d./.d...d.d/..d...../.l.l..../l...l.../.l.l.l.l/l.l.l.l.",
    ),
    // Both sides have captures available
    (
        "Contact",
        "......../..d.d.../...l.l../..d.d.../...l.l../......../......../........",
    ),
    (
        "Kings",
        "......../..l...../...D..../....l.../.....L../..d...../......../........",
    ),
    (
        "Lone kings",
        "......../......../...D..../......../.....L../......../......../........",
    ),
];

const ITERATIONS: usize = 100_000;

fn main() {
    println!("=== Move Generation Benchmark ===");
    println!("Iterations per position: {ITERATIONS}");
    println!();

    let mut move_buf = Vec::with_capacity(64);
    let mut total_moves = 0usize;
    let mut total_time = std::time::Duration::ZERO;

    for (name, rows) in TEST_POSITIONS {
        let pos = match Position::from_diagram(&rows.replace('/', "\n")) {
            Ok(pos) => pos,
            Err(e) => {
                eprintln!("Skipping {name}: {e}");
                continue;
            }
        };

        print!("{name:.<20}");

        let start = Instant::now();
        let mut moves_generated = 0usize;

        for _ in 0..ITERATIONS {
            for side in Side::ALL {
                legal_moves_into(&pos, side, &mut move_buf);
                moves_generated += move_buf.len();
            }
        }

        let elapsed = start.elapsed();
        total_moves += moves_generated;
        total_time += elapsed;

        let moves_per_pos = moves_generated as f64 / (2 * ITERATIONS) as f64;
        let pps = if elapsed.as_secs_f64() > 0.0 {
            (2 * ITERATIONS) as f64 / elapsed.as_secs_f64()
        } else {
            0.0
        };

        println!(" {moves_per_pos:>5.1} moves/pos, {pps:>10.0} pos/sec ({elapsed:>8.3?})");
    }

    println!();
    println!("{:=<70}", "");
    let avg_pps = if total_time.as_secs_f64() > 0.0 {
        (2 * ITERATIONS * TEST_POSITIONS.len()) as f64 / total_time.as_secs_f64()
    } else {
        0.0
    };
    println!("TOTAL: {total_moves} moves in {total_time:.3?} ({avg_pps:.0} positions/sec)");
}
