//! Material balance evaluation.
//!
//! Returned from White's perspective (positive = White ahead).

use mufti_core::{Color, Piece, Position};

use crate::eval::Score;
use crate::eval::weights::EvalWeights;

/// Sum of `weights.piece_values[piece] * (white_count - black_count)`.
pub fn material(position: &Position, weights: &EvalWeights) -> Score {
    let mut score = 0;

    for piece in Piece::ALL {
        let white = position.pieces(piece, Color::White).len() as Score;
        let black = position.pieces(piece, Color::Black).len() as Score;
        score += weights.piece_value(piece) * (white - black);
    }

    score
}

#[cfg(test)]
mod tests {
    use mufti_core::Position;

    use super::material;
    use crate::eval::weights::EvalWeights;

    fn balance(fen: &str) -> i32 {
        material(&Position::from_fen(fen).unwrap(), &EvalWeights::DEFAULT)
    }

    #[test]
    fn starting_position_is_balanced() {
        assert_eq!(material(&Position::new(), &EvalWeights::DEFAULT), 0);
    }

    #[test]
    fn missing_black_queen() {
        assert_eq!(
            balance("rnb1kbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"),
            900
        );
    }

    #[test]
    fn knight_for_rook() {
        assert_eq!(balance("4k3/8/8/8/8/8/8/1N2K2r w - - 0 1"), 300 - 500);
    }

    #[test]
    fn custom_weights_are_used() {
        let weights = EvalWeights {
            piece_values: [1, 3, 3, 5, 9, 0],
            ..EvalWeights::DEFAULT
        };
        let position =
            Position::from_fen("rnb1kbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1").unwrap();
        assert_eq!(material(&position, &weights), 9);
    }
}
