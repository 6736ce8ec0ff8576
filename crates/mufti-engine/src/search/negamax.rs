//! Negamax alpha-beta search.

use mufti_core::Position;

use crate::eval::weights::EvalWeights;
use crate::eval::{Score, evaluate_with};
use crate::search::SearchError;
use crate::search::control::SearchClock;
use crate::search::quiesce::quiesce;

/// Score representing an unreachable upper/lower bound.
pub const INF: Score = 30_000;

/// State shared by every node of one search.
pub(crate) struct SearchContext<'a> {
    pub clock: &'a SearchClock,
    pub weights: &'a EvalWeights,
    pub nodes: u64,
}

impl<'a> SearchContext<'a> {
    pub fn new(clock: &'a SearchClock, weights: &'a EvalWeights) -> Self {
        Self {
            clock,
            weights,
            nodes: 0,
        }
    }
}

/// Negamax alpha-beta search.
///
/// Returns the best score for the side to move: the static evaluation if the
/// game is over or the clock has expired, the quiescence score at the depth
/// horizon, and otherwise the maximum over all children. Moves are searched
/// in generator order; the loop stops once `alpha >= beta`.
pub(crate) fn negamax(
    position: &mut Position,
    depth: u32,
    mut alpha: Score,
    beta: Score,
    ctx: &mut SearchContext<'_>,
) -> Result<Score, SearchError> {
    ctx.nodes += 1;

    if position.is_game_over() || ctx.clock.is_expired() {
        return Ok(evaluate_with(position, ctx.weights));
    }

    if depth == 0 {
        return quiesce(position, alpha, beta, ctx);
    }

    let mut best_score = -INF;
    for mv in position.legal_moves() {
        let score = {
            let mut child = position.play(mv)?;
            -negamax(&mut child, depth - 1, -beta, -alpha, ctx)?
        };

        best_score = best_score.max(score);
        alpha = alpha.max(score);
        if alpha >= beta {
            break;
        }
    }

    Ok(best_score)
}
