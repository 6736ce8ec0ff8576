//! Game position: the current board plus an undo stack of earlier boards.

use std::fmt;
use std::ops::{Deref, DerefMut};

use cozy_chess::{BitBoard, Board, Color, Move, Piece, Square};

use crate::error::PositionError;

/// FEN of the standard starting position.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// A chess position with move history.
///
/// Moves are applied in place with [`push`](Position::push) and reverted with
/// [`pop`](Position::pop). Every board that preceded a pushed move is kept on
/// the stack, which doubles as the repetition history.
#[derive(Clone, Debug)]
pub struct Position {
    pub(crate) board: Board,
    /// Plies since the last capture or pawn move. Tracked here rather than
    /// read from the board so it can run past 100 for the seventy-five-move rule.
    pub(crate) halfmove_clock: u32,
    pub(crate) stack: Vec<Undo>,
}

/// State needed to revert one move.
#[derive(Clone, Debug)]
pub(crate) struct Undo {
    pub(crate) board: Board,
    pub(crate) mv: Move,
    pub(crate) halfmove_clock: u32,
}

impl Position {
    /// The standard starting position with an empty history.
    pub fn new() -> Self {
        Self::from_board(Board::default())
    }

    /// Wrap an existing board; the history starts empty.
    pub fn from_board(board: Board) -> Self {
        Self {
            halfmove_clock: u32::from(board.halfmove_clock()),
            board,
            stack: Vec::new(),
        }
    }

    /// Parse a position from a FEN string.
    pub fn from_fen(fen: &str) -> Result<Self, PositionError> {
        let board = Board::from_fen(fen.trim(), false).map_err(|err| PositionError::InvalidFen {
            fen: fen.to_string(),
            reason: format!("{err:?}"),
        })?;
        Ok(Self::from_board(board))
    }

    /// The current board.
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// FEN of the current board.
    pub fn fen(&self) -> String {
        self.board.to_string()
    }

    /// Side to move.
    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.board.side_to_move()
    }

    /// Plies since the last capture or pawn move.
    #[inline]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    /// Number of moves on the undo stack.
    #[inline]
    pub fn ply(&self) -> usize {
        self.stack.len()
    }

    /// All legal moves, in generator order.
    pub fn legal_moves(&self) -> Vec<Move> {
        let mut moves = Vec::with_capacity(64);
        self.board.generate_moves(|piece_moves| {
            moves.extend(piece_moves);
            false
        });
        moves
    }

    /// Whether the side to move has at least one legal move.
    pub fn has_legal_moves(&self) -> bool {
        self.board
            .generate_moves(|piece_moves| piece_moves.into_iter().next().is_some())
    }

    /// Whether `mv` captures a piece, including en passant.
    pub fn is_capture(&self, mv: Move) -> bool {
        match self.board.color_on(mv.to) {
            Some(color) => color != self.board.side_to_move(),
            None => {
                self.board.piece_on(mv.from) == Some(Piece::Pawn) && mv.from.file() != mv.to.file()
            }
        }
    }

    /// Bitboard of `color`'s pieces of kind `piece`.
    #[inline]
    pub fn pieces(&self, piece: Piece, color: Color) -> BitBoard {
        self.board.pieces(piece) & self.board.colors(color)
    }

    /// Piece and color on `sq`, if occupied.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<(Piece, Color)> {
        Some((self.board.piece_on(sq)?, self.board.color_on(sq)?))
    }

    /// Apply a legal move, remembering the previous board for [`pop`](Self::pop).
    pub fn push(&mut self, mv: Move) -> Result<(), PositionError> {
        let irreversible = self.is_capture(mv) || self.board.piece_on(mv.from) == Some(Piece::Pawn);
        let mut next = self.board.clone();
        next.try_play(mv).map_err(|_| PositionError::IllegalMove {
            text: mv.to_string(),
        })?;
        let clock = if irreversible { 0 } else { self.halfmove_clock + 1 };
        self.stack.push(Undo {
            board: std::mem::replace(&mut self.board, next),
            mv,
            halfmove_clock: std::mem::replace(&mut self.halfmove_clock, clock),
        });
        Ok(())
    }

    /// Revert the most recent move and return it.
    pub fn pop(&mut self) -> Result<Move, PositionError> {
        let undo = self.stack.pop().ok_or(PositionError::EmptyHistory)?;
        self.board = undo.board;
        self.halfmove_clock = undo.halfmove_clock;
        Ok(undo.mv)
    }

    /// Apply `mv` for the lifetime of the returned guard.
    ///
    /// The move is undone when the guard drops, so a search frame that
    /// returns early (cutoff, timeout, or `?`) cannot leave it on the board.
    pub fn play(&mut self, mv: Move) -> Result<MoveGuard<'_>, PositionError> {
        self.push(mv)?;
        Ok(MoveGuard { position: self })
    }

    /// Return a pretty-printable wrapper for this position.
    pub fn pretty(&self) -> PrettyPosition<'_> {
        PrettyPosition(self)
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.board)
    }
}

/// A move applied by [`Position::play`], undone on drop.
///
/// Dereferences to the position so the child node can be searched through it.
pub struct MoveGuard<'a> {
    position: &'a mut Position,
}

impl Deref for MoveGuard<'_> {
    type Target = Position;

    fn deref(&self) -> &Position {
        self.position
    }
}

impl DerefMut for MoveGuard<'_> {
    fn deref_mut(&mut self) -> &mut Position {
        self.position
    }
}

impl Drop for MoveGuard<'_> {
    fn drop(&mut self) {
        if self.position.pop().is_err() {
            tracing::error!("move guard dropped with an empty undo stack");
        }
    }
}

/// Wrapper for printing a position as an 8x8 grid.
pub struct PrettyPosition<'a>(&'a Position);

impl fmt::Display for PrettyPosition<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let position = self.0;
        for rank_idx in (0..8).rev() {
            write!(f, "{}  ", rank_idx + 1)?;
            for file_idx in 0..8 {
                let sq = Square::index(rank_idx * 8 + file_idx);
                let c = match position.piece_at(sq) {
                    Some((piece, Color::White)) => piece_char(piece).to_ascii_uppercase(),
                    Some((piece, Color::Black)) => piece_char(piece),
                    None => '.',
                };
                if file_idx < 7 {
                    write!(f, "{c} ")?;
                } else {
                    write!(f, "{c}")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}

fn piece_char(piece: Piece) -> char {
    match piece {
        Piece::Pawn => 'p',
        Piece::Knight => 'n',
        Piece::Bishop => 'b',
        Piece::Rook => 'r',
        Piece::Queen => 'q',
        Piece::King => 'k',
    }
}
