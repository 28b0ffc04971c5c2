//! Perft benchmark for profiling with cargo-flamegraph.
//!
//! Usage:
//!   cargo flamegraph --example perft_bench -p chess_rules -- [depth] [fen]
//!
//! The FEN side-to-move field picks who starts; it defaults to White.

use chess_rules::{Board, Color, perft};
use std::env;
use std::time::Instant;

const TEST_POSITIONS: &[(&str, &str)] = &[
    (
        "Starting position",
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w",
    ),
    (
        "Kiwipete",
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w",
    ),
    ("Position 3", "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w"),
];

fn side_to_move(fen: &str) -> Color {
    match fen.split_whitespace().nth(1) {
        Some("b") => Color::Black,
        _ => Color::White,
    }
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let depth: u8 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(4);

    let positions: Vec<(&str, &str)> = match args.get(2) {
        Some(fen) => vec![("Custom", fen.as_str())],
        None => TEST_POSITIONS.to_vec(),
    };

    let mut total_nodes = 0u64;
    let start_all = Instant::now();
    for (name, fen) in positions {
        let mut board = match Board::from_fen(fen) {
            Ok(b) => b,
            Err(e) => {
                eprintln!("{name}: {e}");
                continue;
            }
        };
        let start = Instant::now();
        let nodes = perft(&mut board, side_to_move(fen), depth);
        let elapsed = start.elapsed().as_secs_f64();
        let nps = if elapsed > 0.0 { nodes as f64 / elapsed } else { 0.0 };
        println!("{name:<20} depth {depth}: {nodes:>12} nodes  {elapsed:>8.3}s  {nps:>12.0} nps");
        total_nodes += nodes;
    }
    println!(
        "Total: {total_nodes} nodes in {:.3}s",
        start_all.elapsed().as_secs_f64()
    );
}
