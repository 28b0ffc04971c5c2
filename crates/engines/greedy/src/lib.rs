//! Capture-First Chess Engine
//!
//! A one-ply engine: if any legal move captures an enemy piece, it picks one
//! of those captures at random, otherwise any legal move at random. There is
//! no evaluation beyond "captures first" and no lookahead.
//!
//! The randomness source is a type parameter so callers (and tests) can seed
//! it and get repeatable games.

use chess_rules::{all_legal_moves, Board, Color, Engine, Move};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::trace;


/// Does `mv` land on a piece of the opposing color?
pub fn is_capture(board: &Board, color: Color, mv: &Move) -> bool {
    board
        .piece_at(mv.to)
        .map_or(false, |target| target.color != color)
}

/// Pick a move for `color`: a random capture if there is one, otherwise a
/// random legal move. `None` means `color` has no legal move at all.
pub fn select_move<R: Rng + ?Sized>(board: &Board, color: Color, rng: &mut R) -> Option<Move> {
    let (captures, quiet): (Vec<Move>, Vec<Move>) = all_legal_moves(board, color)
        .into_iter()
        .partition(|mv| is_capture(board, color, mv));

    let pool = if captures.is_empty() { &quiet } else { &captures };
    let chosen = pool.choose(rng).copied();
    trace!(
        %color,
        captures = captures.len(),
        quiet = quiet.len(),
        chosen = ?chosen.map(|m| m.to_string()),
        "greedy selection"
    );
    chosen
}

/// Engine wrapper around [`select_move`] that owns its random source.
#[derive(Debug, Clone)]
pub struct GreedyEngine<R = StdRng> {
    rng: R,
}

impl GreedyEngine<StdRng> {
    /// Seeded from OS entropy.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Deterministic play for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for GreedyEngine<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> GreedyEngine<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng + SeedableRng + Send> Engine for GreedyEngine<R> {
    fn choose_move(&mut self, board: &Board, color: Color) -> Option<Move> {
        select_move(board, color, &mut self.rng)
    }

    fn name(&self) -> &str {
        "Greedy v1.0"
    }

    fn reseed(&mut self, seed: u64) {
        self.rng = R::seed_from_u64(seed);
    }
}
