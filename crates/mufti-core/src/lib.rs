//! Chess rules for mufti: position state with make/unmake, game-termination
//! queries, and move notation.
//!
//! Board representation and legal move generation come from `cozy-chess`;
//! this crate layers the undo stack, repetition history, and draw rules the
//! search needs on top of it.

mod error;
mod notation;
mod position;
mod square;
mod status;

pub use cozy_chess::{BitBoard, Board, Color, File, Move, Piece, Rank, Square};
pub use error::PositionError;
pub use position::{MoveGuard, Position, PrettyPosition, STARTING_FEN};
pub use square::{is_dark_square, mirror, relative_rank};
pub use status::Outcome;
