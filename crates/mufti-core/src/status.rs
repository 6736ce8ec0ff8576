//! Game-termination rules: checkmate, stalemate, draws by material,
//! repetition, and the seventy-five-move rule.

use cozy_chess::{Color, Move, Piece};

use crate::position::{Position, Undo};
use crate::square::is_dark_square;

/// Why a game has ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The side to move is checkmated; `winner` delivered mate.
    Checkmate {
        /// The side that delivered mate.
        winner: Color,
    },
    /// The side to move has no legal move and is not in check.
    Stalemate,
    /// Neither side can possibly deliver mate.
    InsufficientMaterial,
    /// 150 plies without a capture or pawn move.
    SeventyFiveMoves,
    /// The current position has occurred five times.
    FivefoldRepetition,
}

impl Position {
    /// Whether the side to move is in check.
    #[inline]
    pub fn is_check(&self) -> bool {
        !self.board.checkers().is_empty()
    }

    /// Whether the side to move is checkmated.
    pub fn is_checkmate(&self) -> bool {
        self.is_check() && !self.has_legal_moves()
    }

    /// Whether the side to move is stalemated.
    pub fn is_stalemate(&self) -> bool {
        !self.is_check() && !self.has_legal_moves()
    }

    /// Whether neither side has mating material.
    pub fn is_insufficient_material(&self) -> bool {
        self.has_insufficient_material(Color::White) && self.has_insufficient_material(Color::Black)
    }

    /// Whether `color` cannot mate by any sequence of legal moves.
    ///
    /// A lone knight is insufficient only while the opponent has nothing but
    /// king and queens; bishops are insufficient only when every bishop on the
    /// board stands on the same shade and no pawns or knights remain.
    pub fn has_insufficient_material(&self, color: Color) -> bool {
        let board = &self.board;
        let ours = board.colors(color);
        let heavy = board.pieces(Piece::Pawn) | board.pieces(Piece::Rook) | board.pieces(Piece::Queen);
        if !(ours & heavy).is_empty() {
            return false;
        }

        if !(ours & board.pieces(Piece::Knight)).is_empty() {
            let their_extras = board.colors(!color)
                & !board.pieces(Piece::King)
                & !board.pieces(Piece::Queen);
            return ours.len() <= 2 && their_extras.is_empty();
        }

        if !(ours & board.pieces(Piece::Bishop)).is_empty() {
            let mut shades = board.pieces(Piece::Bishop).into_iter().map(is_dark_square);
            let same_shade = match shades.next() {
                Some(first) => shades.all(|shade| shade == first),
                None => true,
            };
            return same_shade
                && board.pieces(Piece::Pawn).is_empty()
                && board.pieces(Piece::Knight).is_empty();
        }

        true
    }

    /// Whether 150 plies have passed without a capture or pawn move.
    pub fn is_seventyfive_moves(&self) -> bool {
        self.halfmove_clock >= 150 && self.has_legal_moves()
    }

    /// Whether the current position has occurred at least five times.
    pub fn is_fivefold_repetition(&self) -> bool {
        self.repetitions() >= 5
    }

    /// Whether a threefold repetition can be claimed now: the position has
    /// already occurred three times, or some legal move would make it so.
    pub fn can_claim_threefold_repetition(&self) -> bool {
        if self.repetitions() >= 3 {
            return true;
        }

        let window = self.reversible_window();
        // A repetition after the next move needs two earlier occurrences with
        // the opponent to move, i.e. at least three reversible plies.
        if window.len() < 3 {
            return false;
        }

        let current = self.board.hash();
        let occurrences = |key: u64| {
            window.iter().filter(|undo| undo.board.hash() == key).count()
                + usize::from(key == current)
        };

        self.legal_moves().into_iter().any(|mv: Move| {
            let mut child = self.board.clone();
            child.play_unchecked(mv);
            child.halfmove_clock() != 0 && occurrences(child.hash()) >= 2
        })
    }

    /// The game result if the game is over, without considering claimable
    /// draws (threefold repetition, fifty-move rule).
    pub fn outcome(&self) -> Option<Outcome> {
        let has_moves = self.has_legal_moves();
        if !has_moves && self.is_check() {
            return Some(Outcome::Checkmate {
                winner: !self.side_to_move(),
            });
        }
        if self.is_insufficient_material() {
            return Some(Outcome::InsufficientMaterial);
        }
        if !has_moves {
            return Some(Outcome::Stalemate);
        }
        if self.halfmove_clock >= 150 {
            return Some(Outcome::SeventyFiveMoves);
        }
        if self.is_fivefold_repetition() {
            return Some(Outcome::FivefoldRepetition);
        }
        None
    }

    /// Whether the game has ended.
    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.outcome().is_some()
    }

    /// Number of times the current position has occurred since the last
    /// irreversible move, counting the current occurrence.
    fn repetitions(&self) -> usize {
        let key = self.board.hash();
        1 + self
            .reversible_window()
            .iter()
            .filter(|undo| undo.board.hash() == key)
            .count()
    }

    /// The stack entries reachable without crossing a capture or pawn move.
    fn reversible_window(&self) -> &[Undo] {
        let reversible = (self.halfmove_clock as usize).min(self.stack.len());
        &self.stack[self.stack.len() - reversible..]
    }
}
