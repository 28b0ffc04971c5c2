//! Random Move Chess Engine
//!
//! A simple engine that selects moves uniformly at random from all legal moves.
//! Useful for:
//! - Baseline comparisons (the greedy engine should beat this comfortably)
//! - Stress testing move generation and game-end detection in the arena

use chess_rules::{all_legal_moves, Board, Color, Engine, Move};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

#[cfg(test)]
mod lib_tests;

/// A chess engine that plays random legal moves.
///
/// This engine provides no evaluation - it simply picks a random move
/// from all available legal moves.
#[derive(Debug, Clone)]
pub struct RandomEngine<R = StdRng> {
    rng: R,
}

impl RandomEngine<StdRng> {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng + SeedableRng + Send> Engine for RandomEngine<R> {
    fn choose_move(&mut self, board: &Board, color: Color) -> Option<Move> {
        all_legal_moves(board, color).choose(&mut self.rng).copied()
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }

    fn reseed(&mut self, seed: u64) {
        self.rng = R::seed_from_u64(seed);
    }
}
