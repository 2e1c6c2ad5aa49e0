//! Perft benchmark for the clone-per-move generator.
//!
//! Usage:
//!   cargo run --release --example perft_bench -p chess_core -- [depth] [fen]
//!
//! Without a FEN it walks a small suite of positions. Only the placement and
//! side-to-move fields of the FEN are read.

use std::env;
use std::time::{Duration, Instant};

use chess_core::{GameState, perft};

const TEST_POSITIONS: &[(&str, &str)] = &[
    (
        "Starting position",
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w",
    ),
    ("Rook endgame", "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w"),
    (
        "Open middlegame",
        "r4rk1/1pp1qppp/p1np1n2/2b1p1B1/2B1P1b1/P1NP1N2/1PP1QPPP/R4RK1 w",
    ),
];

fn main() {
    let args: Vec<String> = env::args().collect();
    let depth: u8 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(4);

    match args.get(2) {
        Some(fen) => {
            let (nodes, elapsed) = run(fen, depth);
            println!("Position: {fen}");
            println!("Depth: {depth}");
            println!("Nodes: {nodes}");
            println!("Time: {elapsed:.3?} ({:.0} nps)", nps(nodes, elapsed));
        }
        None => {
            println!("=== Perft Benchmark Suite (depth {depth}) ===");
            let mut total_nodes = 0u64;
            let mut total_time = Duration::ZERO;
            for (name, fen) in TEST_POSITIONS {
                let (nodes, elapsed) = run(fen, depth);
                total_nodes += nodes;
                total_time += elapsed;
                println!(
                    "{name:.<30} {nodes:>12} nodes in {elapsed:>8.3?} ({:>10.0} nps)",
                    nps(nodes, elapsed)
                );
            }
            println!("{:=<70}", "");
            println!(
                "TOTAL: {total_nodes} nodes in {total_time:.3?} ({:.0} nps)",
                nps(total_nodes, total_time)
            );
        }
    }
}

fn run(fen: &str, depth: u8) -> (u64, Duration) {
    let game = match GameState::from_fen(fen, None) {
        Ok(game) => game,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };
    let start = Instant::now();
    let nodes = perft(game.board(), game.side_to_move(), depth);
    (nodes, start.elapsed())
}

fn nps(nodes: u64, elapsed: Duration) -> f64 {
    if elapsed.as_secs_f64() > 0.0 {
        nodes as f64 / elapsed.as_secs_f64()
    } else {
        0.0
    }
}
