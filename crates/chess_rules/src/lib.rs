pub mod attacks;
pub mod board;
pub mod error;
pub mod game;
pub mod movegen;
pub mod perft;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use attacks::*;
pub use board::*;
pub use error::{Result, RulesError};
pub use game::*;
pub use movegen::*;
pub use perft::perft;
pub use types::*;

// =============================================================================
// Engine trait: implemented by every automated player
// =============================================================================

/// Trait that all move-choosing engines implement.
///
/// [`GameState::play_engine`] drives any implementor, so the automated side
/// can be swapped without touching the game loop.
pub trait Engine: Send {
    /// Pick a legal move for `color` on `board`.
    ///
    /// # Returns
    /// `None` when `color` has no legal move; the caller then classifies the
    /// position as checkmate or stalemate.
    fn choose_move(&mut self, board: &Board, color: Color) -> Option<Move>;

    /// Returns the engine's name for logs and match reports
    fn name(&self) -> &str;

    /// Reset internal state for a new game
    fn new_game(&mut self) {}

    /// Restart any randomness from `seed`. Deterministic engines ignore it.
    fn reseed(&mut self, _seed: u64) {}
}
