//! Static evaluation for the mufti engine.
//!
//! [`evaluate`] scores a position in centipawns from the side to move's
//! perspective. Terminal and drawn positions are scored directly; everything
//! else is a White-relative feature sum (material, piece-square tables, pawn
//! structure, check) that is negated when Black is to move.

pub mod material;
pub mod pawns;
pub mod phase;
pub mod pst;
pub mod weights;

use mufti_core::{Color, Piece, Position};

use material::material;
use pawns::evaluate_pawns;
use phase::is_endgame;
use pst::pst_value;
use weights::EvalWeights;

/// Centipawn score, relative to the side to move unless stated otherwise.
pub type Score = i32;

/// Magnitude of a checkmate score.
pub const MATE_SCORE: Score = 9999;

/// Evaluate `position` with the default weights.
pub fn evaluate(position: &Position) -> Score {
    evaluate_with(position, &EvalWeights::DEFAULT)
}

/// Evaluate `position` with an explicit set of weights.
///
/// Returns `-MATE_SCORE` when the side to move is checkmated, and 0 for
/// stalemate, insufficient material, fivefold repetition, or a position where
/// threefold repetition can be claimed.
pub fn evaluate_with(position: &Position, weights: &EvalWeights) -> Score {
    if position.is_checkmate() {
        return -MATE_SCORE;
    }
    if position.is_stalemate()
        || position.is_insufficient_material()
        || position.is_fivefold_repetition()
        || position.can_claim_threefold_repetition()
    {
        return 0;
    }

    let score = white_relative(position, weights);
    match position.side_to_move() {
        Color::White => score,
        Color::Black => -score,
    }
}

/// The feature sum from White's perspective.
fn white_relative(position: &Position, weights: &EvalWeights) -> Score {
    let mut score = material(position, weights);
    score += piece_squares(position);
    score += evaluate_pawns(position, weights);

    if position.is_check() {
        score += match position.side_to_move() {
            Color::White => weights.in_check,
            Color::Black => -weights.in_check,
        };
    }

    score
}

fn piece_squares(position: &Position) -> Score {
    let endgame = is_endgame(position);
    let mut score = 0;

    for piece in Piece::ALL {
        for sq in position.pieces(piece, Color::White) {
            score += pst_value(piece, Color::White, sq, endgame);
        }
        for sq in position.pieces(piece, Color::Black) {
            score -= pst_value(piece, Color::Black, sq, endgame);
        }
    }

    score
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
