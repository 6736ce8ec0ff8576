//! Endgame detection for king-table selection.

use mufti_core::{Piece, Position};

/// Whether the king should use its endgame table.
///
/// True when no queens remain, or exactly one queen remains and at most one
/// other minor or major piece is left on the board across both sides.
pub fn is_endgame(position: &Position) -> bool {
    let board = position.board();
    let queens = board.pieces(Piece::Queen).len();
    let minors_and_rooks = (board.pieces(Piece::Rook)
        | board.pieces(Piece::Bishop)
        | board.pieces(Piece::Knight))
    .len();

    queens == 0 || (queens == 1 && minors_and_rooks <= 1)
}
