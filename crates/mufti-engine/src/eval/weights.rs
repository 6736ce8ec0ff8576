//! Tunable evaluation constants.

use mufti_core::Piece;

use crate::eval::Score;

/// Every scalar weight used by the evaluation, in centipawns.
///
/// Piece-square tables live in [`pst`](crate::eval::pst) as `const` arrays;
/// everything else is collected here so a caller can evaluate with an
/// alternative set via [`evaluate_with`](crate::eval::evaluate_with).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvalWeights {
    /// Material value per piece, indexed by `Piece as usize`.
    pub piece_values: [Score; Piece::NUM],
    /// Penalty per extra pawn of one colour on a file.
    pub doubled_pawn: Score,
    /// Passed-pawn bonus, multiplied by the pawn's rank from its own side.
    pub passed_pawn_per_rank: Score,
    /// Bonus per friendly pawn diagonally behind a pawn.
    pub pawn_chain: Score,
    /// Penalty for a pawn with no friendly pawn on either adjacent file.
    pub isolated_pawn: Score,
    /// Bonus for a pawn whose push square is empty.
    pub pawn_mobility: Score,
    /// Applied to the side to move when it is in check.
    pub in_check: Score,
}

impl EvalWeights {
    /// The hand-tuned default weights.
    pub const DEFAULT: EvalWeights = EvalWeights {
        piece_values: [
            100, // Pawn
            300, // Knight
            300, // Bishop
            500, // Rook
            900, // Queen
            0,   // King
        ],
        doubled_pawn: -30,
        passed_pawn_per_rank: 20,
        pawn_chain: 10,
        isolated_pawn: -15,
        pawn_mobility: 5,
        in_check: -100,
    };

    /// Material value of `piece`.
    #[inline]
    pub fn piece_value(&self, piece: Piece) -> Score {
        self.piece_values[piece as usize]
    }
}

impl Default for EvalWeights {
    fn default() -> Self {
        Self::DEFAULT
    }
}
