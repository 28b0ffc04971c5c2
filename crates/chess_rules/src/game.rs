//! Turn order and game-end detection.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::board::Board;
use crate::error::{Result, RulesError};
use crate::movegen::{all_legal_moves, has_legal_move, legal_moves, legal_moves_into};
use crate::types::{Color, Move, Square};
use crate::Engine;

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// The winner actually took the enemy king.
    KingCaptured { winner: Color },
    Checkmate { winner: Color },
    Stalemate,
}

impl Outcome {
    pub fn winner(self) -> Option<Color> {
        match self {
            Outcome::KingCaptured { winner } | Outcome::Checkmate { winner } => Some(winner),
            Outcome::Stalemate => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::KingCaptured { winner } => write!(f, "{winner} captured the king"),
            Outcome::Checkmate { winner } => write!(f, "checkmate, {winner} wins"),
            Outcome::Stalemate => write!(f, "stalemate"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    ToMove(Color),
    Over(Outcome),
}

/// A game in progress: the board, whose turn it is, and the last move played.
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    status: GameStatus,
    last_move: Option<Move>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self::from_board(Board::startpos(), Color::White)
    }

    /// Start from an arbitrary setup. The side to move is classified at once,
    /// so a position without legal moves comes back already finished.
    pub fn from_board(board: Board, to_move: Color) -> Self {
        let mut game = Self {
            board,
            status: GameStatus::ToMove(to_move),
            last_move: None,
        };
        game.evaluate_terminal_state();
        game
    }

    /// Back to the standard layout with White to move.
    pub fn reset(&mut self) {
        *self = Self::new();
        debug!("game reset");
    }

    pub fn board(&self) -> &Board {
        &self.board
    }
    pub fn status(&self) -> GameStatus {
        self.status
    }
    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }
    pub fn is_over(&self) -> bool {
        matches!(self.status, GameStatus::Over(_))
    }
    pub fn side_to_move(&self) -> Option<Color> {
        match self.status {
            GameStatus::ToMove(c) => Some(c),
            GameStatus::Over(_) => None,
        }
    }

    /// Legal destinations for a selected square.
    ///
    /// Empty squares, opponent pieces and finished games all give an empty
    /// set, which the caller treats as a deselect.
    pub fn selectable_moves(&self, sq: Square) -> Vec<Square> {
        match (self.side_to_move(), self.board.piece_at(sq)) {
            (Some(c), Some(p)) if p.color == c => legal_moves(&self.board, sq),
            _ => Vec::new(),
        }
    }

    /// Every legal move for the side to move.
    pub fn legal_moves(&self) -> Vec<Move> {
        match self.side_to_move() {
            Some(c) => all_legal_moves(&self.board, c),
            None => Vec::new(),
        }
    }

    /// Play a move for the side to move.
    ///
    /// Moves outside the legal set are rejected without touching the board.
    pub fn play(&mut self, from: Square, to: Square) -> Result<GameStatus> {
        let mover = match self.status {
            GameStatus::ToMove(c) => c,
            GameStatus::Over(outcome) => return Err(RulesError::GameOver(outcome)),
        };
        match self.board.piece_at(from) {
            None => return Err(RulesError::EmptySquare(from)),
            Some(p) if p.color != mover => return Err(RulesError::IllegalMove { from, to }),
            Some(_) => {}
        }

        let mut dests = Vec::new();
        legal_moves_into(&mut self.board, from, &mut dests);
        if !dests.contains(&to) {
            return Err(RulesError::IllegalMove { from, to });
        }

        let undo = self.board.execute(from, to)?;
        self.last_move = Some(Move::new(from, to));
        debug!(%mover, mv = %Move::new(from, to), "move played");

        if undo.captured_king() {
            self.finish(Outcome::KingCaptured { winner: mover });
            return Ok(self.status);
        }
        self.status = GameStatus::ToMove(mover.other());
        Ok(self.evaluate_terminal_state())
    }

    /// Let `engine` move for the side to move. An engine that finds nothing
    /// hands over to the terminal-state classifier.
    pub fn play_engine(&mut self, engine: &mut dyn Engine) -> Result<GameStatus> {
        let mover = match self.status {
            GameStatus::ToMove(c) => c,
            GameStatus::Over(outcome) => return Err(RulesError::GameOver(outcome)),
        };
        match engine.choose_move(&self.board, mover) {
            Some(mv) => self.play(mv.from, mv.to),
            None => Ok(self.evaluate_terminal_state()),
        }
    }

    /// Classify the side to move: no legal moves means checkmate when in
    /// check, stalemate otherwise. Finished games are left alone.
    pub fn evaluate_terminal_state(&mut self) -> GameStatus {
        let GameStatus::ToMove(c) = self.status else {
            return self.status;
        };
        if !has_legal_move(&mut self.board, c) {
            let outcome = if self.board.in_check(c) {
                Outcome::Checkmate { winner: c.other() }
            } else {
                Outcome::Stalemate
            };
            self.finish(outcome);
        }
        self.status
    }

    fn finish(&mut self, outcome: Outcome) {
        debug!(%outcome, "game over");
        self.status = GameStatus::Over(outcome);
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
