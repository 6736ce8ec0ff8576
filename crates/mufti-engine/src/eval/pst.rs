//! Piece-square tables for all six piece types, plus an endgame king table.
//!
//! All tables are defined from White's perspective in LERF order:
//! index 0 = A1, index 7 = H1, index 8 = A2, ..., index 63 = H8.
//! Use [`pst_value`] to look up the value for either color.

use mufti_core::{Color, Piece, Square, mirror};

use crate::eval::Score;

// ---------------------------------------------------------------------------
// Individual piece-square tables
// ---------------------------------------------------------------------------

/// Pawn PST. Ranks 1 and 8 are zero; pawns never stand there.
#[rustfmt::skip]
const PAWN_PST: [Score; 64] = [
    // Rank 1
      0,   0,   0,   0,   0,   0,   0,   0,
    // Rank 2
      5,  10,  10, -20, -20,  10,  10,   5,
    // Rank 3
      5,  -5, -10,   0,   0, -10,  -5,   5,
    // Rank 4
      0,   0,   0,  20,  20,   0,   0,   0,
    // Rank 5
      5,   5,  10,  25,  25,  10,   5,   5,
    // Rank 6
     10,  10,  20,  30,  30,  20,  10,  10,
    // Rank 7
     50,  50,  50,  50,  50,  50,  50,  50,
    // Rank 8
      0,   0,   0,   0,   0,   0,   0,   0,
];

#[rustfmt::skip]
const KNIGHT_PST: [Score; 64] = [
    // Rank 1
    -50, -40, -30, -30, -30, -30, -40, -50,
    // Rank 2
    -40, -20,   0,   5,   5,   0, -20, -40,
    // Rank 3
    -30,   5,  10,  15,  15,  10,   5, -30,
    // Rank 4
    -30,   0,  15,  20,  20,  15,   0, -30,
    // Rank 5
    -30,   5,  15,  20,  20,  15,   5, -30,
    // Rank 6
    -30,   0,  10,  15,  15,  10,   0, -30,
    // Rank 7
    -40, -20,   0,   0,   0,   0, -20, -40,
    // Rank 8
    -50, -40, -30, -30, -30, -30, -40, -50,
];

#[rustfmt::skip]
const BISHOP_PST: [Score; 64] = [
    // Rank 1
    -20, -10, -10, -10, -10, -10, -10, -20,
    // Rank 2
    -10,   5,   0,   0,   0,   0,   5, -10,
    // Rank 3
    -10,  10,  10,  10,  10,  10,  10, -10,
    // Rank 4
    -10,   0,  10,  10,  10,  10,   0, -10,
    // Rank 5
    -10,   5,   5,  10,  10,   5,   5, -10,
    // Rank 6
    -10,   0,   5,  10,  10,   5,   0, -10,
    // Rank 7
    -10,   0,   0,   0,   0,   0,   0, -10,
    // Rank 8
    -20, -10, -10, -10, -10, -10, -10, -20,
];

#[rustfmt::skip]
const ROOK_PST: [Score; 64] = [
    // Rank 1
      0,   0,   0,   5,   5,   0,   0,   0,
    // Rank 2
     -5,   0,   0,   0,   0,   0,   0,  -5,
    // Rank 3
     -5,   0,   0,   0,   0,   0,   0,  -5,
    // Rank 4
     -5,   0,   0,   0,   0,   0,   0,  -5,
    // Rank 5
     -5,   0,   0,   0,   0,   0,   0,  -5,
    // Rank 6
     -5,   0,   0,   0,   0,   0,   0,  -5,
    // Rank 7
      5,  10,  10,  10,  10,  10,  10,   5,
    // Rank 8
      0,   0,   0,   0,   0,   0,   0,   0,
];

#[rustfmt::skip]
const QUEEN_PST: [Score; 64] = [
    // Rank 1
    -20, -10, -10,  -5,  -5, -10, -10, -20,
    // Rank 2
    -10,   0,   5,   0,   0,   0,   0, -10,
    // Rank 3
    -10,   5,   5,   5,   5,   5,   0, -10,
    // Rank 4
      0,   0,   5,   5,   5,   5,   0,  -5,
    // Rank 5
     -5,   0,   5,   5,   5,   5,   0,  -5,
    // Rank 6
    -10,   0,   5,   5,   5,   5,   0, -10,
    // Rank 7
    -10,   0,   0,   0,   0,   0,   0, -10,
    // Rank 8
    -20, -10, -10,  -5,  -5, -10, -10, -20,
];

/// King PST while material remains: stay castled behind the pawns.
#[rustfmt::skip]
const KING_MIDDLEGAME_PST: [Score; 64] = [
    // Rank 1
     20,  30,  10,   0,   0,  10,  30,  20,
    // Rank 2
     20,  20,   0,   0,   0,   0,  20,  20,
    // Rank 3
    -10, -20, -20, -20, -20, -20, -20, -10,
    // Rank 4
    -20, -30, -30, -40, -40, -30, -30, -20,
    // Rank 5
    -30, -40, -40, -50, -50, -40, -40, -30,
    // Rank 6
    -30, -40, -40, -50, -50, -40, -40, -30,
    // Rank 7
    -30, -40, -40, -50, -50, -40, -40, -30,
    // Rank 8
    -30, -40, -40, -50, -50, -40, -40, -30,
];

/// King PST in the endgame: centralise.
#[rustfmt::skip]
const KING_ENDGAME_PST: [Score; 64] = [
    // Rank 1
    -50, -30, -30, -30, -30, -30, -30, -50,
    // Rank 2
    -30, -30,   0,   0,   0,   0, -30, -30,
    // Rank 3
    -30, -10,  20,  30,  30,  20, -10, -30,
    // Rank 4
    -30, -10,  30,  40,  40,  30, -10, -30,
    // Rank 5
    -30, -10,  30,  40,  40,  30, -10, -30,
    // Rank 6
    -30, -10,  20,  30,  30,  20, -10, -30,
    // Rank 7
    -30, -20, -10,   0,   0, -10, -20, -30,
    // Rank 8
    -50, -40, -30, -20, -20, -30, -40, -50,
];

// ---------------------------------------------------------------------------
// Lookup
// ---------------------------------------------------------------------------

/// Piece-square value of `piece` of `color` on `sq`, from that color's side.
///
/// Black squares are rank-mirrored (`sq ^ 56`) so both colors read the same
/// White-oriented table. `endgame` selects the king table.
#[inline]
pub fn pst_value(piece: Piece, color: Color, sq: Square, endgame: bool) -> Score {
    let sq = match color {
        Color::White => sq,
        Color::Black => mirror(sq),
    };
    let table = match piece {
        Piece::Pawn => &PAWN_PST,
        Piece::Knight => &KNIGHT_PST,
        Piece::Bishop => &BISHOP_PST,
        Piece::Rook => &ROOK_PST,
        Piece::Queen => &QUEEN_PST,
        Piece::King if endgame => &KING_ENDGAME_PST,
        Piece::King => &KING_MIDDLEGAME_PST,
    };
    table[sq as usize]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
