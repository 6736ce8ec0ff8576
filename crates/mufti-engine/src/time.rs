//! Time management: convert `go` clock parameters to a search allowance.

use std::time::Duration;

use mufti_core::Color;

/// Fraction of the remaining clock spent on one move.
pub const CLOCK_DIVISOR: u32 = 50;

/// Derive the allowance for one move.
///
/// Priority order:
/// 1. `movetime` is used verbatim;
/// 2. otherwise the side to move's remaining clock divided by [`CLOCK_DIVISOR`];
/// 3. otherwise `default`.
pub fn allowance_from_go(
    movetime: Option<Duration>,
    wtime: Option<Duration>,
    btime: Option<Duration>,
    side: Color,
    default: Duration,
) -> Duration {
    if let Some(movetime) = movetime {
        return movetime;
    }

    let remaining = match side {
        Color::White => wtime,
        Color::Black => btime,
    };

    match remaining {
        Some(remaining) => remaining / CLOCK_DIVISOR,
        None => default,
    }
}
