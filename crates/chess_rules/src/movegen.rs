use crate::{board::Board, types::*};

/// Destinations for `piece` obeying its movement geometry and occupancy,
/// ignoring whether the move would expose its own king.
pub fn pseudo_legal_moves(piece: &Piece, board: &Board) -> Vec<Square> {
    let mut out = Vec::with_capacity(28);
    pseudo_legal_moves_into(piece, board, &mut out);
    out
}

/// Buffer-reusing form of [`pseudo_legal_moves`]. Appends to `out`.
pub fn pseudo_legal_moves_into(piece: &Piece, board: &Board, out: &mut Vec<Square>) {
    let from = piece.square();
    let c = piece.color;
    match piece.kind {
        PieceKind::Pawn => gen_pawn(board, piece, out),
        PieceKind::Knight => gen_steps(board, from, c, &KNIGHT_OFFSETS, out),
        PieceKind::Bishop => gen_slider(board, from, c, &DIAGONALS, out),
        PieceKind::Rook => gen_slider(board, from, c, &ORTHOGONALS, out),
        PieceKind::Queen => {
            gen_slider(board, from, c, &DIAGONALS, out);
            gen_slider(board, from, c, &ORTHOGONALS, out);
        }
        PieceKind::King => gen_steps(board, from, c, &KING_OFFSETS, out),
    }
}

/// Legal destinations for the piece on `from`. Empty if the square is empty.
///
/// Works on a private copy; see [`legal_moves_into`] to filter in place.
pub fn legal_moves(board: &Board, from: Square) -> Vec<Square> {
    let mut tmp = board.clone();
    let mut out = Vec::with_capacity(28);
    legal_moves_into(&mut tmp, from, &mut out);
    out
}

/// Generate legal destinations for the piece on `from` into `out`, reusing it.
///
/// Each candidate is played under [`Board::speculate`] and dropped if it
/// leaves the mover in check; the board is back to its prior state on return.
pub fn legal_moves_into(board: &mut Board, from: Square, out: &mut Vec<Square>) {
    out.clear();
    let piece = match board.piece_at(from) {
        Some(p) => p,
        None => return,
    };
    pseudo_legal_moves_into(&piece, board, out);

    let mover = piece.color;
    out.retain(|&to| match board.speculate(from, to) {
        Ok(after) => !after.in_check(mover),
        Err(_) => false,
    });
}

/// Every legal move for `color`, piece by piece in board order.
pub fn all_legal_moves(board: &Board, color: Color) -> Vec<Move> {
    let mut tmp = board.clone();
    let mut out = Vec::with_capacity(64);
    all_legal_moves_into(&mut tmp, color, &mut out);
    out
}

pub fn all_legal_moves_into(board: &mut Board, color: Color, out: &mut Vec<Move>) {
    out.clear();
    let origins: Vec<Square> = board.pieces(color).map(|p| p.square()).collect();
    let mut dests = Vec::with_capacity(28);
    for from in origins {
        legal_moves_into(board, from, &mut dests);
        out.extend(dests.iter().map(|&to| Move::new(from, to)));
    }
}

/// Does `color` have at least one legal move? Stops at the first one found.
pub fn has_legal_move(board: &mut Board, color: Color) -> bool {
    let origins: Vec<Square> = board.pieces(color).map(|p| p.square()).collect();
    let mut dests = Vec::with_capacity(28);
    origins.into_iter().any(|from| {
        legal_moves_into(board, from, &mut dests);
        !dests.is_empty()
    })
}

fn gen_pawn(board: &Board, pawn: &Piece, out: &mut Vec<Square>) {
    let from = pawn.square();
    let dir = pawn.color.forward();

    // forward 1, then forward 2 through an empty square
    if let Some(one) = from.offset(dir, 0) {
        if board.piece_at(one).is_none() {
            out.push(one);
            if !pawn.has_moved() {
                if let Some(two) = one.offset(dir, 0) {
                    if board.piece_at(two).is_none() {
                        out.push(two);
                    }
                }
            }
        }
    }

    for dc in [-1, 1] {
        if let Some(to) = from.offset(dir, dc) {
            if let Some(tpc) = board.piece_at(to) {
                if tpc.color != pawn.color {
                    out.push(to);
                }
            }
        }
    }
}

fn gen_steps(board: &Board, from: Square, c: Color, deltas: &[(i8, i8)], out: &mut Vec<Square>) {
    for &(dr, dc) in deltas {
        if let Some(to) = from.offset(dr, dc) {
            match board.piece_at(to) {
                None => out.push(to),
                Some(pc) if pc.color != c => out.push(to),
                _ => {}
            }
        }
    }
}

fn gen_slider(board: &Board, from: Square, c: Color, dirs: &[(i8, i8)], out: &mut Vec<Square>) {
    for &(dr, dc) in dirs {
        let mut cur = from.offset(dr, dc);
        while let Some(to) = cur {
            match board.piece_at(to) {
                None => out.push(to),
                Some(pc) if pc.color != c => {
                    out.push(to);
                    break;
                }
                _ => break,
            }
            cur = to.offset(dr, dc);
        }
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
