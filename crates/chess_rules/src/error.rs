//! Error types for chess_rules

use thiserror::Error;

use crate::game::Outcome;
use crate::types::Square;

/// Contract violations raised at the engine boundary.
///
/// Ordinary game situations (no piece selected, no legal moves, missing
/// king) are reported as data and never show up here.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RulesError {
    #[error("no piece on {0}")]
    EmptySquare(Square),

    #[error("{from}{to} is not a legal move")]
    IllegalMove { from: Square, to: Square },

    #[error("game is already over: {0}")]
    GameOver(Outcome),

    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    #[error("invalid square name: {0}")]
    InvalidSquare(String),
}

pub type Result<T> = std::result::Result<T, RulesError>;
