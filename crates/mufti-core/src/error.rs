//! Error types for position setup, move notation, and move application.

/// Errors produced by [`Position`](crate::Position) operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PositionError {
    /// A FEN string could not be parsed into a valid board.
    #[error("invalid FEN \"{fen}\": {reason}")]
    InvalidFen {
        /// The FEN string that failed to parse.
        fen: String,
        /// Parser diagnostic.
        reason: String,
    },

    /// Move text is not well-formed SAN or UCI notation.
    #[error("invalid move notation: \"{text}\"")]
    InvalidNotation {
        /// The offending move text.
        text: String,
    },

    /// The move is well-formed but not legal in the current position.
    #[error("illegal move: {text}")]
    IllegalMove {
        /// The move as written by the caller (or its UCI form).
        text: String,
    },

    /// SAN text matches more than one legal move.
    #[error("ambiguous move: {text}")]
    AmbiguousMove {
        /// The ambiguous SAN text.
        text: String,
    },

    /// `pop` was called with no move left to undo.
    #[error("no move to undo")]
    EmptyHistory,
}
