use std::fmt;
use std::ops::Deref;

use crate::attacks::is_square_attacked;
use crate::error::{Result, RulesError};
use crate::types::*;

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// The 8x8 grid. Owns every piece in play.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Option<Piece>; 8]; 8],
}

/// Everything needed to take back one [`Board::execute`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Undo {
    /// The mover as it stood before the move.
    pub moved: Piece,
    pub from: Square,
    pub to: Square,
    pub captured: Option<Piece>,
}

impl Undo {
    pub fn captured(&self) -> Option<Piece> {
        self.captured
    }
    pub fn captured_king(&self) -> bool {
        matches!(self.captured, Some(p) if p.kind == PieceKind::King)
    }
}

/// Standard starting layout.
pub fn initialize() -> Board {
    Board::startpos()
}

impl Default for Board {
    fn default() -> Self {
        Self::startpos()
    }
}

impl Board {
    pub fn empty() -> Self {
        Board {
            cells: [[None; 8]; 8],
        }
    }

    pub fn startpos() -> Self {
        let mut b = Board::empty();
        for (col, &kind) in BACK_RANK.iter().enumerate() {
            let col = col as i8;
            for color in [Color::White, Color::Black] {
                let home = color.home_row() as i8;
                let pawn_row = home + color.forward();
                if let Some(s) = Square::new(home, col) {
                    b.place(color, kind, s);
                }
                if let Some(s) = Square::new(pawn_row, col) {
                    b.place(color, PieceKind::Pawn, s);
                }
            }
        }
        b
    }

    /// Build a board from the piece-placement field of a FEN string.
    ///
    /// Any trailing FEN fields are ignored. Pawns found off their starting
    /// row are marked as having moved.
    pub fn from_fen(fen: &str) -> Result<Self> {
        let placement = fen
            .split_whitespace()
            .next()
            .ok_or_else(|| RulesError::InvalidFen("empty string".to_string()))?;
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(RulesError::InvalidFen(format!(
                "expected 8 ranks, found {}",
                ranks.len()
            )));
        }

        let mut board = Board::empty();
        for (row, rank_str) in ranks.iter().enumerate() {
            let mut col: i8 = 0;
            for ch in rank_str.chars() {
                if let Some(d) = ch.to_digit(10) {
                    col += d as i8;
                } else {
                    let kind = PieceKind::from_char(ch).ok_or_else(|| {
                        RulesError::InvalidFen(format!("invalid piece char '{ch}'"))
                    })?;
                    let color = if ch.is_uppercase() {
                        Color::White
                    } else {
                        Color::Black
                    };
                    let at = Square::new(row as i8, col).ok_or_else(|| {
                        RulesError::InvalidFen(format!("too many files in rank {}", 8 - row))
                    })?;
                    board.place(color, kind, at);
                    let start_row = color.home_row() as i8 + color.forward();
                    if kind == PieceKind::Pawn && at.row() as i8 != start_row {
                        if let Some(p) = board.cell_mut(at).as_mut() {
                            p.has_moved = true;
                        }
                    }
                    col += 1;
                }
                if col > 8 {
                    return Err(RulesError::InvalidFen(format!(
                        "too many files in rank {}",
                        8 - row
                    )));
                }
            }
            if col != 8 {
                return Err(RulesError::InvalidFen(format!(
                    "not enough files in rank {}",
                    8 - row
                )));
            }
        }
        Ok(board)
    }

    /// Piece-placement field of FEN for this board.
    pub fn to_fen(&self) -> String {
        let mut out = String::with_capacity(72);
        for (row, cells) in self.cells.iter().enumerate() {
            let mut gap = 0;
            for cell in cells {
                match cell {
                    Some(p) => {
                        if gap > 0 {
                            out.push(char::from(b'0' + gap));
                            gap = 0;
                        }
                        out.push(p.to_char());
                    }
                    None => gap += 1,
                }
            }
            if gap > 0 {
                out.push(char::from(b'0' + gap));
            }
            if row < 7 {
                out.push('/');
            }
        }
        out
    }

    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.cells[sq.row() as usize][sq.col() as usize]
    }

    fn cell_mut(&mut self, sq: Square) -> &mut Option<Piece> {
        &mut self.cells[sq.row() as usize][sq.col() as usize]
    }

    /// Put a fresh piece on `at`, returning whatever stood there.
    pub fn place(&mut self, color: Color, kind: PieceKind, at: Square) -> Option<Piece> {
        self.cell_mut(at).replace(Piece::placed(color, kind, at))
    }

    pub fn remove(&mut self, at: Square) -> Option<Piece> {
        self.cell_mut(at).take()
    }

    /// All pieces of one color, scanning row by row.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = Piece> + '_ {
        self.cells
            .iter()
            .flatten()
            .filter_map(move |c| c.filter(|p| p.color == color))
    }

    pub fn king_sq(&self, c: Color) -> Option<Square> {
        self.pieces(c)
            .find(|p| p.kind == PieceKind::King)
            .map(|p| p.square())
    }

    /// Is `c`'s king attacked? A board without that king is never in check.
    pub fn in_check(&self, c: Color) -> bool {
        match self.king_sq(c) {
            Some(ksq) => is_square_attacked(self, ksq, c.other()),
            None => false,
        }
    }

    /// Move the piece on `from` to `to`, capturing whatever is there.
    ///
    /// No legality check is made beyond requiring a piece on `from`; callers
    /// that need legality go through [`crate::legal_moves`] or
    /// [`crate::GameState::play`].
    pub fn execute(&mut self, from: Square, to: Square) -> Result<Undo> {
        if from == to {
            return Err(RulesError::IllegalMove { from, to });
        }
        let moved = self.piece_at(from).ok_or(RulesError::EmptySquare(from))?;
        let captured = self.remove(to);
        self.remove(from);

        let mut piece = moved;
        piece.row = to.row();
        piece.col = to.col();
        piece.has_moved = true;
        *self.cell_mut(to) = Some(piece);

        Ok(Undo {
            moved,
            from,
            to,
            captured,
        })
    }

    /// Take back a move made by [`Board::execute`], including the mover's
    /// `has_moved` flag.
    pub fn reverse(&mut self, undo: Undo) {
        *self.cell_mut(undo.from) = Some(undo.moved);
        *self.cell_mut(undo.to) = undo.captured;
    }

    /// Play `from -> to` for as long as the returned guard lives.
    pub fn speculate(&mut self, from: Square, to: Square) -> Result<Speculation<'_>> {
        let undo = self.execute(from, to)?;
        Ok(Speculation { board: self, undo })
    }
}

/// A move played on a borrowed board, taken back when dropped.
pub struct Speculation<'a> {
    board: &'a mut Board,
    undo: Undo,
}

impl Speculation<'_> {
    pub fn undo(&self) -> &Undo {
        &self.undo
    }
}

impl Deref for Speculation<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl Drop for Speculation<'_> {
    fn drop(&mut self) {
        self.board.reverse(self.undo);
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.iter().enumerate() {
            write!(f, "{} ", 8 - row)?;
            for cell in cells {
                let ch = cell.map(|p| p.to_char()).unwrap_or('.');
                write!(f, "{ch} ")?;
            }
            writeln!(f)?;
        }
        write!(f, "  a b c d e f g h")
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
