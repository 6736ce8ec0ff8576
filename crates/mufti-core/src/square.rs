//! Square helpers shared by evaluation tables and pawn-structure terms.

use cozy_chess::{Color, Square};

/// Mirror a square vertically (a1 <-> a8), the index map used to read
/// White-perspective tables for Black pieces.
#[inline]
pub fn mirror(sq: Square) -> Square {
    Square::index(sq as usize ^ 56)
}

/// Rank index (0..=7) of `sq` counted from `color`'s own back rank.
#[inline]
pub fn relative_rank(sq: Square, color: Color) -> usize {
    match color {
        Color::White => sq.rank() as usize,
        Color::Black => 7 - sq.rank() as usize,
    }
}

/// Whether `sq` is a dark square (a1 is dark).
#[inline]
pub fn is_dark_square(sq: Square) -> bool {
    (sq.file() as usize + sq.rank() as usize) % 2 == 0
}

#[cfg(test)]
mod tests {
    use cozy_chess::{Color, Square};

    use super::{is_dark_square, mirror, relative_rank};

    #[test]
    fn mirror_flips_rank_keeps_file() {
        assert_eq!(mirror(Square::A1), Square::A8);
        assert_eq!(mirror(Square::E2), Square::E7);
        assert_eq!(mirror(Square::H5), Square::H4);
    }

    #[test]
    fn mirror_is_an_involution() {
        for sq in Square::ALL {
            assert_eq!(mirror(mirror(sq)), sq);
        }
    }

    #[test]
    fn relative_rank_per_color() {
        assert_eq!(relative_rank(Square::E2, Color::White), 1);
        assert_eq!(relative_rank(Square::E2, Color::Black), 6);
        assert_eq!(relative_rank(Square::D7, Color::Black), 1);
    }

    #[test]
    fn square_shades() {
        assert!(is_dark_square(Square::A1));
        assert!(!is_dark_square(Square::H1));
        assert!(is_dark_square(Square::H8));
        assert!(is_dark_square(Square::D4));
        assert!(!is_dark_square(Square::E4));
    }
}
