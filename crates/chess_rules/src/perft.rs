use crate::{board::Board, movegen::all_legal_moves_into, types::Color, types::Move};

/// Pure perft node count.
/// Counts all legal move sequences of length `depth` starting with `to_move`.
pub fn perft(board: &mut Board, to_move: Color, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    fn inner(board: &mut Board, to_move: Color, depth: u8, layers: &mut [Vec<Move>]) -> u64 {
        if depth == 0 {
            return 1;
        }

        let (buf, rest) = layers
            .split_first_mut()
            .expect("perft requires one buffer per remaining ply");

        all_legal_moves_into(board, to_move, buf);

        let mut nodes = 0u64;
        for mv in buf.iter().copied() {
            let undo = board
                .execute(mv.from, mv.to)
                .expect("generated move starts on an occupied square");
            nodes += inner(board, to_move.other(), depth - 1, rest);
            board.reverse(undo);
        }
        nodes
    }

    let mut layers = vec![Vec::with_capacity(64); depth as usize];
    inner(board, to_move, depth, &mut layers[..])
}
