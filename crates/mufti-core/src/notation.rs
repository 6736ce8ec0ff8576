//! Move notation: UCI long algebraic and SAN.
//!
//! `cozy-chess` encodes castling as the king capturing its own rook. UCI
//! output and input use the standard king-moves-two-squares form instead, so
//! both directions convert here.

use cozy_chess::{File, Move, Piece, Rank, Square};

use crate::error::PositionError;
use crate::position::Position;

impl Position {
    /// Format `mv` in UCI notation (`e2e4`, `e7e8q`, `e1g1`).
    pub fn to_uci(&self, mv: Move) -> String {
        if self.is_castling(mv) {
            let king_file = if mv.to.file() as usize > mv.from.file() as usize {
                File::G
            } else {
                File::C
            };
            let to = Square::new(king_file, mv.from.rank());
            return Move { to, ..mv }.to_string();
        }
        mv.to_string()
    }

    /// Parse a UCI move and check that it is legal here.
    pub fn parse_uci(&self, text: &str) -> Result<Move, PositionError> {
        let mut mv: Move = text.trim().parse().map_err(|_| PositionError::InvalidNotation {
            text: text.to_string(),
        })?;

        let stm = self.side_to_move();
        if self.piece_at(mv.from) == Some((Piece::King, stm)) {
            let from_file = mv.from.file() as usize;
            let to_file = mv.to.file() as usize;
            if from_file.abs_diff(to_file) == 2 {
                let rook_file = if to_file > from_file { File::H } else { File::A };
                mv.to = Square::new(rook_file, mv.from.rank());
            }
        }

        if self.legal_moves().contains(&mv) {
            Ok(mv)
        } else {
            Err(PositionError::IllegalMove {
                text: text.to_string(),
            })
        }
    }

    /// Parse a move in standard algebraic notation (`Nf3`, `exd5`, `e8=Q+`,
    /// `O-O-O`, `Rad1`).
    pub fn parse_san(&self, text: &str) -> Result<Move, PositionError> {
        let invalid = || PositionError::InvalidNotation {
            text: text.to_string(),
        };
        let illegal = || PositionError::IllegalMove {
            text: text.to_string(),
        };

        let san = text
            .trim()
            .trim_end_matches(|c| matches!(c, '+' | '#' | '!' | '?'));
        if san.is_empty() || !san.is_ascii() {
            return Err(invalid());
        }

        match san {
            "O-O" | "0-0" => return self.find_castle(true).ok_or_else(illegal),
            "O-O-O" | "0-0-0" => return self.find_castle(false).ok_or_else(illegal),
            _ => {}
        }

        let (piece, rest) = match san.as_bytes()[0] {
            b'N' => (Piece::Knight, &san[1..]),
            b'B' => (Piece::Bishop, &san[1..]),
            b'R' => (Piece::Rook, &san[1..]),
            b'Q' => (Piece::Queen, &san[1..]),
            b'K' => (Piece::King, &san[1..]),
            _ => (Piece::Pawn, san),
        };

        let (rest, promotion) = match rest.split_once('=') {
            Some((head, promo)) => {
                let mut chars = promo.chars();
                match (chars.next().and_then(promotion_piece), chars.next()) {
                    (Some(p), None) => (head, Some(p)),
                    _ => return Err(invalid()),
                }
            }
            None => match rest.chars().last().and_then(promotion_piece) {
                Some(p) if piece == Piece::Pawn => (&rest[..rest.len() - 1], Some(p)),
                _ => (rest, None),
            },
        };

        if rest.len() < 2 {
            return Err(invalid());
        }
        let (qualifier, dest) = rest.split_at(rest.len() - 2);
        let to: Square = dest.parse().map_err(|_| invalid())?;

        let mut from_file = None;
        let mut from_rank = None;
        for c in qualifier.chars() {
            match c {
                'a'..='h' => from_file = Some(File::index(c as usize - 'a' as usize)),
                '1'..='8' => from_rank = Some(Rank::index(c as usize - '1' as usize)),
                'x' | ':' | '-' => {}
                _ => return Err(invalid()),
            }
        }

        let stm = self.side_to_move();
        let candidates: Vec<Move> = self
            .legal_moves()
            .into_iter()
            .filter(|mv| {
                mv.to == to
                    && mv.promotion == promotion
                    && self.piece_at(mv.from) == Some((piece, stm))
                    && !self.is_castling(*mv)
                    && from_file.is_none_or(|f| mv.from.file() == f)
                    && from_rank.is_none_or(|r| mv.from.rank() == r)
            })
            .collect();

        match candidates.as_slice() {
            [mv] => Ok(*mv),
            [] => Err(illegal()),
            _ => Err(PositionError::AmbiguousMove {
                text: text.to_string(),
            }),
        }
    }

    /// Parse SAN, falling back to UCI notation.
    pub fn parse_move(&self, text: &str) -> Result<Move, PositionError> {
        match self.parse_san(text) {
            Ok(mv) => Ok(mv),
            Err(san_err) => self.parse_uci(text).map_err(|_| san_err),
        }
    }

    /// Whether `mv` is a castling move (king onto its own rook).
    fn is_castling(&self, mv: Move) -> bool {
        let stm = self.side_to_move();
        self.piece_at(mv.from) == Some((Piece::King, stm))
            && self.board.color_on(mv.to) == Some(stm)
    }

    fn find_castle(&self, kingside: bool) -> Option<Move> {
        self.legal_moves().into_iter().find(|&mv| {
            self.is_castling(mv) && (mv.to.file() as usize > mv.from.file() as usize) == kingside
        })
    }
}

fn promotion_piece(c: char) -> Option<Piece> {
    match c {
        'N' | 'n' => Some(Piece::Knight),
        'B' => Some(Piece::Bishop),
        'R' | 'r' => Some(Piece::Rook),
        'Q' | 'q' => Some(Piece::Queen),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use cozy_chess::{Piece, Square};

    use crate::error::PositionError;
    use crate::position::Position;

    const CASTLING_FEN: &str = "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1";

    #[test]
    fn uci_round_trip_quiet_move() {
        let position = Position::new();
        let mv = position.parse_uci("e2e4").unwrap();
        assert_eq!(mv.from, Square::E2);
        assert_eq!(mv.to, Square::E4);
        assert_eq!(position.to_uci(mv), "e2e4");
    }

    #[test]
    fn uci_castling_uses_king_destination() {
        let position = Position::from_fen(CASTLING_FEN).unwrap();
        let short = position.parse_uci("e1g1").unwrap();
        assert_eq!(short.to, Square::H1, "internally the king takes its rook");
        assert_eq!(position.to_uci(short), "e1g1");

        let long = position.parse_uci("e1c1").unwrap();
        assert_eq!(long.to, Square::A1);
        assert_eq!(position.to_uci(long), "e1c1");
    }

    #[test]
    fn uci_promotion() {
        let position = Position::from_fen("8/4P3/8/8/8/8/k7/4K3 w - - 0 1").unwrap();
        let mv = position.parse_uci("e7e8q").unwrap();
        assert_eq!(mv.promotion, Some(Piece::Queen));
        assert_eq!(position.to_uci(mv), "e7e8q");
    }

    #[test]
    fn uci_rejects_garbage_and_illegal() {
        let position = Position::new();
        assert!(matches!(
            position.parse_uci("zz99"),
            Err(PositionError::InvalidNotation { .. })
        ));
        assert!(matches!(
            position.parse_uci("e2e5"),
            Err(PositionError::IllegalMove { .. })
        ));
    }

    #[test]
    fn san_pawn_and_piece_moves() {
        let position = Position::new();
        assert_eq!(position.to_uci(position.parse_san("e4").unwrap()), "e2e4");
        assert_eq!(position.to_uci(position.parse_san("Nf3").unwrap()), "g1f3");
        assert_eq!(position.to_uci(position.parse_san("Nc3+").unwrap()), "b1c3");
    }

    #[test]
    fn san_capture() {
        let position =
            Position::from_fen("rnbqkbnr/ppp1pppp/8/3p4/4P3/8/PPPP1PPP/RNBQKBNR w KQkq - 0 2")
                .unwrap();
        assert_eq!(position.to_uci(position.parse_san("exd5").unwrap()), "e4d5");
    }

    #[test]
    fn san_castling() {
        let position = Position::from_fen(CASTLING_FEN).unwrap();
        assert_eq!(position.to_uci(position.parse_san("O-O").unwrap()), "e1g1");
        assert_eq!(position.to_uci(position.parse_san("O-O-O").unwrap()), "e1c1");
        assert_eq!(position.to_uci(position.parse_san("0-0").unwrap()), "e1g1");
    }

    #[test]
    fn san_disambiguation() {
        // The king on e1 blocks the h1 rook, so only one rook reaches d1.
        let position = Position::from_fen(CASTLING_FEN).unwrap();
        assert_eq!(position.to_uci(position.parse_san("Rd1").unwrap()), "a1d1");
        assert!(matches!(
            position.parse_san("Rf2"),
            Err(PositionError::IllegalMove { .. })
        ));

        let position = Position::from_fen("4k3/8/8/8/8/8/4K3/R6R w - - 0 1").unwrap();
        assert!(matches!(
            position.parse_san("Rd1"),
            Err(PositionError::AmbiguousMove { .. })
        ));
        assert_eq!(position.to_uci(position.parse_san("Rhd1").unwrap()), "h1d1");
        assert_eq!(position.to_uci(position.parse_san("Rad1").unwrap()), "a1d1");
    }

    #[test]
    fn san_promotion() {
        let position = Position::from_fen("8/4P3/8/8/8/8/k7/4K3 w - - 0 1").unwrap();
        let mv = position.parse_san("e8=Q").unwrap();
        assert_eq!(mv.promotion, Some(Piece::Queen));
        let mv = position.parse_san("e8N").unwrap();
        assert_eq!(mv.promotion, Some(Piece::Knight));
    }

    #[test]
    fn san_rejects_bad_input() {
        let position = Position::new();
        assert!(matches!(
            position.parse_san(""),
            Err(PositionError::InvalidNotation { .. })
        ));
        assert!(matches!(
            position.parse_san("Nf9"),
            Err(PositionError::InvalidNotation { .. })
        ));
        assert!(matches!(
            position.parse_san("Ke2"),
            Err(PositionError::IllegalMove { .. })
        ));
    }

    #[test]
    fn parse_move_accepts_both_notations() {
        let position = Position::new();
        assert_eq!(position.to_uci(position.parse_move("d4").unwrap()), "d2d4");
        assert_eq!(position.to_uci(position.parse_move("d2d4").unwrap()), "d2d4");
        assert!(position.parse_move("hello").is_err());
    }
}
