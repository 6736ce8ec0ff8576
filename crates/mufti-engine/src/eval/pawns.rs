//! Pawn structure evaluation.
//!
//! Evaluates doubled, passed, chained, isolated, and blocked pawns.
//! All scores are from White's perspective (positive = White advantage).

use mufti_core::{BitBoard, Color, Piece, Position, Square, relative_rank};

use crate::eval::Score;
use crate::eval::weights::EvalWeights;

// ---------------------------------------------------------------------------
// Precomputed tables
// ---------------------------------------------------------------------------

const FILE_A: u64 = 0x0101_0101_0101_0101;

/// For each file index 0–7, the bitboard of that file.
const FILES: [BitBoard; 8] = compute_files();

/// For each file index 0–7, the bitboard of the adjacent files.
const ADJACENT_FILES: [BitBoard; 8] = compute_adjacent_files();

/// For each `[color][square]`, the squares ahead of a pawn on the same and
/// adjacent files. A pawn is passed if the mask holds no enemy pawn.
const PASSED_PAWN_MASK: [[BitBoard; 64]; 2] = compute_passed_pawn_masks();

/// For each `[color][square]`, the two squares diagonally behind a pawn,
/// where a friendly pawn would protect it.
const SUPPORT_MASK: [[BitBoard; 64]; 2] = compute_support_masks();

const fn compute_files() -> [BitBoard; 8] {
    let mut table = [BitBoard(0); 8];
    let mut f = 0;
    while f < 8 {
        table[f] = BitBoard(FILE_A << f);
        f += 1;
    }
    table
}

const fn compute_adjacent_files() -> [BitBoard; 8] {
    let mut table = [BitBoard(0); 8];
    let mut f = 0;
    while f < 8 {
        let mut bits = 0u64;
        if f > 0 {
            bits |= FILE_A << (f - 1);
        }
        if f < 7 {
            bits |= FILE_A << (f + 1);
        }
        table[f] = BitBoard(bits);
        f += 1;
    }
    table
}

const fn compute_passed_pawn_masks() -> [[BitBoard; 64]; 2] {
    let mut table = [[BitBoard(0); 64]; 2];

    let mut sq = 0;
    while sq < 64 {
        let rank = sq / 8;
        let file = sq % 8;
        let span = (FILE_A << file) | ADJACENT_FILES[file].0;

        // White: ranks above; Black: ranks below.
        let above = if rank < 7 { u64::MAX << ((rank + 1) * 8) } else { 0 };
        let below = if rank > 0 { u64::MAX >> ((8 - rank) * 8) } else { 0 };

        table[0][sq] = BitBoard(span & above);
        table[1][sq] = BitBoard(span & below);
        sq += 1;
    }

    table
}

const fn compute_support_masks() -> [[BitBoard; 64]; 2] {
    let mut table = [[BitBoard(0); 64]; 2];

    let mut sq = 0;
    while sq < 64 {
        let rank = sq / 8;
        let file = sq % 8;

        let mut white = 0u64;
        let mut black = 0u64;
        if rank > 0 {
            if file > 0 {
                white |= 1 << (sq - 9);
            }
            if file < 7 {
                white |= 1 << (sq - 7);
            }
        }
        if rank < 7 {
            if file > 0 {
                black |= 1 << (sq + 7);
            }
            if file < 7 {
                black |= 1 << (sq + 9);
            }
        }

        table[0][sq] = BitBoard(white);
        table[1][sq] = BitBoard(black);
        sq += 1;
    }

    table
}

// ---------------------------------------------------------------------------
// Public evaluation entry point
// ---------------------------------------------------------------------------

/// Evaluate pawn structure from White's perspective.
pub fn evaluate_pawns(position: &Position, weights: &EvalWeights) -> Score {
    let white_pawns = position.pieces(Piece::Pawn, Color::White);
    let black_pawns = position.pieces(Piece::Pawn, Color::Black);
    let occupied = position.board().occupied();

    let white = evaluate_pawns_for_side(white_pawns, black_pawns, occupied, Color::White, weights);
    let black = evaluate_pawns_for_side(black_pawns, white_pawns, occupied, Color::Black, weights);

    white - black
}

// ---------------------------------------------------------------------------
// Per-side helper
// ---------------------------------------------------------------------------

/// Pawn-structure score for one side, positive = good for `color`.
fn evaluate_pawns_for_side(
    friendly: BitBoard,
    enemy: BitBoard,
    occupied: BitBoard,
    color: Color,
    weights: &EvalWeights,
) -> Score {
    let mut score = 0;

    // Doubled pawns: every pawn beyond the first on a file.
    for file in FILES {
        let count = (file & friendly).len() as Score;
        if count > 1 {
            score += weights.doubled_pawn * (count - 1);
        }
    }

    for sq in friendly {
        let idx = sq as usize;
        let file = sq.file() as usize;

        if (PASSED_PAWN_MASK[color as usize][idx] & enemy).is_empty() {
            score += weights.passed_pawn_per_rank * relative_rank(sq, color) as Score;
        }

        let supporters = (SUPPORT_MASK[color as usize][idx] & friendly).len() as Score;
        score += weights.pawn_chain * supporters;

        if (ADJACENT_FILES[file] & friendly).is_empty() {
            score += weights.isolated_pawn;
        }

        if let Some(ahead) = push_square(sq, color)
            && !occupied.has(ahead)
        {
            score += weights.pawn_mobility;
        }
    }

    score
}

/// The square directly in front of a pawn on `sq`.
fn push_square(sq: Square, color: Color) -> Option<Square> {
    let idx = sq as usize;
    match color {
        Color::White if idx < 56 => Some(Square::index(idx + 8)),
        Color::Black if idx >= 8 => Some(Square::index(idx - 8)),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use mufti_core::{Color, Position, Square};

    use super::{PASSED_PAWN_MASK, SUPPORT_MASK, evaluate_pawns};
    use crate::eval::weights::EvalWeights;

    fn pawns(fen: &str) -> i32 {
        evaluate_pawns(&Position::from_fen(fen).unwrap(), &EvalWeights::DEFAULT)
    }

    #[test]
    fn passed_mask_for_white_e4() {
        let mask = PASSED_PAWN_MASK[Color::White as usize][Square::E4 as usize];
        assert!(mask.has(Square::D5));
        assert!(mask.has(Square::E8));
        assert!(mask.has(Square::F7));
        assert!(!mask.has(Square::E4));
        assert!(!mask.has(Square::D3));
        assert!(!mask.has(Square::G5));
        assert_eq!(mask.len(), 12);
    }

    #[test]
    fn passed_mask_for_black_a5() {
        let mask = PASSED_PAWN_MASK[Color::Black as usize][Square::A5 as usize];
        assert!(mask.has(Square::A1));
        assert!(mask.has(Square::B4));
        assert!(!mask.has(Square::B5));
        assert_eq!(mask.len(), 8);
    }

    #[test]
    fn support_mask_edges() {
        let white_a4 = SUPPORT_MASK[Color::White as usize][Square::A4 as usize];
        assert_eq!(white_a4.len(), 1);
        assert!(white_a4.has(Square::B3));

        let black_e5 = SUPPORT_MASK[Color::Black as usize][Square::E5 as usize];
        assert!(black_e5.has(Square::D6));
        assert!(black_e5.has(Square::F6));
        assert_eq!(black_e5.len(), 2);
    }

    #[test]
    fn starting_pawns_are_balanced() {
        assert_eq!(evaluate_pawns(&Position::new(), &EvalWeights::DEFAULT), 0);
    }

    #[test]
    fn lone_pawn_terms() {
        // e4: passed on rank index 3 (+60), isolated (-15), free to push (+5).
        assert_eq!(pawns("4k3/8/8/8/4P3/8/8/4K3 w - - 0 1"), 50);
        // Mirror for Black.
        assert_eq!(pawns("4k3/8/8/4p3/8/8/8/4K3 w - - 0 1"), -50);
    }

    #[test]
    fn blocked_pawn_loses_mobility() {
        // e4 blocked by the black king on e5.
        assert_eq!(pawns("8/8/8/4k3/4P3/8/8/4K3 w - - 0 1"), 45);
    }

    #[test]
    fn doubled_pawns_are_penalised() {
        // e2 and e3: both passed (+20, +40), both isolated (-30), doubled (-30),
        // only e3 can push (+5).
        assert_eq!(pawns("4k3/8/8/8/8/4P3/4P3/4K3 w - - 0 1"), 5);
    }

    #[test]
    fn pawn_chain_counts_each_supporter() {
        // d3 and f3 both support e4. All three are passed and none isolated.
        // Passed: 40 + 60 + 40, chain: 2 * 10, mobility: 3 * 5.
        assert_eq!(pawns("4k3/8/8/8/4P3/3P1P2/8/4K3 w - - 0 1"), 175);
    }

    #[test]
    fn enemy_pawn_on_adjacent_file_stops_passed_bonus() {
        // White e4 is not passed (d5 ahead); black d5 is not passed (e4 ahead).
        // Both isolated, e4 can push to e5, d5 can push to d4.
        assert_eq!(pawns("4k3/8/8/3p4/4P3/8/8/4K3 w - - 0 1"), 0);
    }
}
