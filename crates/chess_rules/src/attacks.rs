//! Attack detection.
//!
//! Answers whether a square could be reached by some piece of a given color,
//! working outward from the target square. Turn order and pins are ignored.

use crate::board::Board;
use crate::types::*;

/// Is `target` attacked by any piece of color `by`?
pub fn is_square_attacked(board: &Board, target: Square, by: Color) -> bool {
    // A pawn of color `by` attacks one step along its own forward direction,
    // so it stands one step the other way from the target.
    let back = -by.forward();
    for dc in [-1, 1] {
        if holds(board, target.offset(back, dc), by, PieceKind::Pawn) {
            return true;
        }
    }

    for (dr, dc) in KNIGHT_OFFSETS {
        if holds(board, target.offset(dr, dc), by, PieceKind::Knight) {
            return true;
        }
    }

    for (dr, dc) in KING_OFFSETS {
        if holds(board, target.offset(dr, dc), by, PieceKind::King) {
            return true;
        }
    }

    ray_hits(board, target, by, &DIAGONALS, PieceKind::Bishop)
        || ray_hits(board, target, by, &ORTHOGONALS, PieceKind::Rook)
}

fn holds(board: &Board, at: Option<Square>, by: Color, kind: PieceKind) -> bool {
    match at.and_then(|s| board.piece_at(s)) {
        Some(pc) => pc.color == by && pc.kind == kind,
        None => false,
    }
}

/// Cast rays from `target`; the first occupant on each ray decides.
fn ray_hits(board: &Board, target: Square, by: Color, dirs: &[(i8, i8)], slider: PieceKind) -> bool {
    for &(dr, dc) in dirs {
        let mut cur = target.offset(dr, dc);
        while let Some(s) = cur {
            if let Some(pc) = board.piece_at(s) {
                if pc.color == by && (pc.kind == slider || pc.kind == PieceKind::Queen) {
                    return true;
                }
                break;
            }
            cur = s.offset(dr, dc);
        }
    }
    false
}

#[cfg(test)]
#[path = "attacks_tests.rs"]
mod attacks_tests;
