//! Search driver: root move loop over negamax with quiescence.

pub mod control;
pub mod negamax;
pub mod quiesce;

use std::time::Duration;

use mufti_core::{Move, Position, PositionError};

use crate::eval::weights::EvalWeights;
use crate::eval::{Score, evaluate_with};
use control::SearchClock;
use negamax::{INF, SearchContext, negamax};

/// Default search depth in plies.
pub const DEFAULT_DEPTH: u32 = 6;

/// Default time allowance when the caller gives none.
pub const DEFAULT_ALLOWANCE: Duration = Duration::from_millis(1000);

/// Errors that abort a search.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// The position rejected a move generated from it.
    #[error("position error during search: {0}")]
    Position(#[from] PositionError),
}

/// Depth and time bounds for one search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchLimits {
    /// Nominal depth in plies. The root counts as one ply.
    pub depth: u32,
    /// Wall-clock allowance.
    pub allowance: Duration,
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            allowance: DEFAULT_ALLOWANCE,
        }
    }
}

/// Result of a completed search.
#[derive(Debug, Clone)]
pub struct SearchReport {
    /// Best root move, or `None` if the side to move has no legal move.
    pub best_move: Option<Move>,
    /// Score of the best move from the side to move's perspective. With no
    /// legal move this is the static evaluation.
    pub score: Score,
    /// Nodes visited, root children included.
    pub nodes: u64,
    /// Wall-clock time spent.
    pub elapsed: Duration,
}

/// Search `position` and report the best move with its score.
///
/// Each root move is searched with `-negamax(depth - 1, -INF, -alpha)`; the
/// first move to strictly beat the running best wins, so ties go to the move
/// generated first. The position is restored before returning, on success
/// and on error.
pub fn search(
    position: &mut Position,
    limits: &SearchLimits,
    weights: &EvalWeights,
) -> Result<SearchReport, SearchError> {
    let clock = SearchClock::start(limits.allowance);
    let moves = position.legal_moves();

    tracing::debug!(
        fen = %position.fen(),
        moves = ?moves.iter().map(|&mv| position.to_uci(mv)).collect::<Vec<_>>(),
        "root legal moves"
    );

    if moves.is_empty() {
        return Ok(SearchReport {
            best_move: None,
            score: evaluate_with(position, weights),
            nodes: 0,
            elapsed: clock.elapsed(),
        });
    }

    tracing::debug!(
        eval = evaluate_with(position, weights),
        depth = limits.depth,
        allowance_ms = clock.allowance().as_millis() as u64,
        "root static evaluation"
    );

    let mut ctx = SearchContext::new(&clock, weights);
    let mut alpha = -INF;
    let beta = INF;
    let mut best: Option<(Move, Score)> = None;

    for mv in moves {
        let score = {
            let mut child = position.play(mv)?;
            -negamax(&mut child, limits.depth.saturating_sub(1), -beta, -alpha, &mut ctx)?
        };
        tracing::trace!(mv = %position.to_uci(mv), score, "root move searched");

        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((mv, score));
        }
        alpha = alpha.max(score);
    }

    let report = SearchReport {
        best_move: best.map(|(mv, _)| mv),
        score: best.map_or(-INF, |(_, score)| score),
        nodes: ctx.nodes,
        elapsed: clock.elapsed(),
    };
    tracing::debug!(
        best = ?report.best_move.map(|mv| position.to_uci(mv)),
        score = report.score,
        nodes = report.nodes,
        elapsed_ms = report.elapsed.as_millis() as u64,
        "search finished"
    );
    Ok(report)
}

/// Choose a move for the side to move within `depth` plies and `allowance`.
///
/// Returns `None` when there is no legal move, or if the search fails; the
/// failure is logged.
pub fn find_best_move(position: &mut Position, depth: u32, allowance: Duration) -> Option<Move> {
    let limits = SearchLimits { depth, allowance };
    match search(position, &limits, &EvalWeights::DEFAULT) {
        Ok(report) => report.best_move,
        Err(err) => {
            tracing::error!(%err, "search failed");
            None
        }
    }
}
