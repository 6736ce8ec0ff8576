//! Capture-only quiescence search.

use mufti_core::{Move, Position};

use crate::eval::{Score, evaluate_with};
use crate::search::SearchError;
use crate::search::negamax::SearchContext;

/// Resolve capture sequences before trusting the static evaluation.
///
/// The side to move may stand pat on the static score or try any capture
/// (en passant included, quiet promotions excluded). Fails hard: returns
/// `beta` on a cutoff and `alpha` otherwise. There is no depth cap and no
/// clock check; capture sequences are finite, but can be long in busy
/// positions.
pub(crate) fn quiesce(
    position: &mut Position,
    mut alpha: Score,
    beta: Score,
    ctx: &mut SearchContext<'_>,
) -> Result<Score, SearchError> {
    ctx.nodes += 1;

    let stand_pat = evaluate_with(position, ctx.weights);
    if stand_pat >= beta {
        return Ok(beta);
    }
    alpha = alpha.max(stand_pat);

    let captures: Vec<Move> = position
        .legal_moves()
        .into_iter()
        .filter(|&mv| position.is_capture(mv))
        .collect();

    for mv in captures {
        let score = {
            let mut child = position.play(mv)?;
            -quiesce(&mut child, -beta, -alpha, ctx)?
        };

        if score >= beta {
            return Ok(beta);
        }
        alpha = alpha.max(score);
    }

    Ok(alpha)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use mufti_core::Position;

    use super::quiesce;
    use crate::eval::evaluate;
    use crate::eval::weights::EvalWeights;
    use crate::search::control::SearchClock;
    use crate::search::negamax::{INF, SearchContext};

    fn qsearch(position: &mut Position, alpha: i32, beta: i32) -> i32 {
        let clock = SearchClock::start(Duration::from_secs(60));
        let mut ctx = SearchContext::new(&clock, &EvalWeights::DEFAULT);
        quiesce(position, alpha, beta, &mut ctx).unwrap()
    }

    #[test]
    fn quiet_position_is_stand_pat() {
        let mut position = Position::from_fen("4k3/8/8/8/4P3/8/8/4K3 w - - 0 1").unwrap();
        assert_eq!(qsearch(&mut position, -INF, INF), evaluate(&position));
    }

    #[test]
    fn stand_pat_above_beta_fails_high() {
        let mut position = Position::from_fen("4k3/8/8/8/4P3/8/8/4K3 w - - 0 1").unwrap();
        assert_eq!(qsearch(&mut position, -INF, 50), 50);
    }

    #[test]
    fn stand_pat_below_alpha_fails_low() {
        let mut position = Position::from_fen("4k3/8/8/8/4P3/8/8/4K3 w - - 0 1").unwrap();
        assert_eq!(qsearch(&mut position, 1000, 2000), 1000);
    }

    #[test]
    fn hanging_queen_is_taken() {
        let fen = "4k3/8/8/8/3q4/8/8/3RK3 w - - 0 1";
        let mut position = Position::from_fen(fen).unwrap();
        let mut after = Position::from_fen(fen).unwrap();
        after.push(after.parse_uci("d1d4").unwrap()).unwrap();

        let score = qsearch(&mut position, -INF, INF);
        assert_eq!(score, -evaluate(&after));
        assert_eq!(position.fen(), fen, "position restored");
    }

    #[test]
    fn defended_piece_is_left_alone() {
        // Rxd5 loses the rook to exd5, so standing pat is best.
        let mut position =
            Position::from_fen("4k3/8/4p3/3n4/8/8/8/3RK3 w - - 0 1").unwrap();
        assert_eq!(qsearch(&mut position, -INF, INF), evaluate(&position));
    }
}
